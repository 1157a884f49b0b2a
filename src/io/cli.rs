//! Command-line front end that generates a board and autoplays it with hints

use crate::algorithm::deadlock::Progress;
use crate::algorithm::session::{GameEvent, GameSession, LearnedResult, SessionState};
use crate::composition::tiers::Tier;
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::Result;
use crate::io::lexicon::{bundled_allow_set, load_allow_set};
use crate::io::progress::BoardProgress;
use clap::Parser;
use log::{debug, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hango")]
#[command(
    author,
    version,
    about = "Generate a Hangul tile-pairing board and solve it with hints"
)]
/// Command-line arguments for the board runner
pub struct Cli {
    /// Difficulty tier to generate
    #[arg(short, long, value_enum, default_value_t = Tier::Level1)]
    pub tier: Tier,

    /// Random seed for reproducible boards
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// JSON allow-set for three-part tiers [default: built-in list]
    #[arg(short, long, value_name = "PATH")]
    pub lexicon: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the board before and after play
    #[arg(short = 'b', long)]
    pub show_board: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Allow-set file given on the command line, if any
    pub fn lexicon_path(&self) -> Option<&Path> {
        self.lexicon.as_deref()
    }

    /// Load the allow-set file, or the bundled list when none was given
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn allow_set(&self) -> Result<HashSet<String>> {
        self.lexicon_path().map_or_else(bundled_allow_set, load_allow_set)
    }
}

/// What an autoplayed board ended with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaySummary {
    /// Terminal progress, or [`Progress::Playing`] if play stalled
    pub outcome: Progress,
    /// Number of committed pairs
    pub pairs: usize,
    /// Composed results in review order
    pub learned: Vec<LearnedResult>,
}

/// Play hinted pairs until the board is cleared or deadlocked
///
/// Each step taps the hinted head, then the hinted tail, then commits.
///
/// # Errors
///
/// Returns an error if a commit fails
pub fn autoplay(
    session: &mut GameSession,
    progress: Option<&BoardProgress>,
) -> Result<PlaySummary> {
    let mut pairs = 0;

    // Every commit removes two tiles, so the board bounds the step count
    for _ in 0..=session.board().len() / 2 {
        if session.progress().is_finished() {
            break;
        }
        let Some(hint) = session.hint() else {
            break;
        };

        session.cancel_selection();
        session.select_tile(hint.head);
        session.select_tile(hint.tail);

        if !matches!(session.state(), SessionState::AwaitingCommit { .. }) {
            warn!("Hinted pair {} -> {} was not accepted", hint.head, hint.tail);
            break;
        }

        session.commit()?;
        pairs += 1;

        if let (Some(bar), Some(rule)) = (progress, session.rules().get(hint.rule)) {
            bar.pair_removed(&rule.compound.symbol);
        }
    }

    Ok(PlaySummary {
        outcome: session.progress(),
        pairs,
        learned: session.learned_results(),
    })
}

/// Runs one board from the parsed arguments
pub struct GameRunner {
    cli: Cli,
}

impl GameRunner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the session for the selected tier
    ///
    /// # Errors
    ///
    /// Returns an error if the allow-set cannot be loaded or the tier yields
    /// no playable rules
    pub fn build_session(&self) -> Result<GameSession> {
        let config = self.cli.tier.config();
        let allow = if config.requires_allow_set {
            Some(self.cli.allow_set()?)
        } else {
            None
        };
        GameSession::new(config, allow.as_ref(), self.cli.seed)
    }

    /// Generate, autoplay and report one board
    ///
    /// # Errors
    ///
    /// Returns an error if setup or play fails
    pub fn run(&self) -> Result<PlaySummary> {
        let mut session = self.build_session()?;
        debug!("Seed {} on {}", self.cli.seed, self.cli.tier);
        for event in session.start() {
            if let GameEvent::BoardFinished { outcome, .. } = event {
                warn!("Board dealt already finished: {}", outcome_message(outcome));
            }
        }

        if self.cli.show_board {
            print_board(&session);
        }

        let bar = self
            .cli
            .should_show_progress()
            .then(|| BoardProgress::new(self.cli.tier.name(), session.board().len()));

        let summary = autoplay(&mut session, bar.as_ref())?;

        if let Some(ref bar) = bar {
            bar.finish(outcome_message(summary.outcome));
        }
        if self.cli.show_board {
            print_board(&session);
        }
        print_summary(&summary);

        Ok(summary)
    }
}

const fn outcome_message(outcome: Progress) -> &'static str {
    match outcome {
        Progress::Cleared => "cleared",
        Progress::Deadlocked => "no moves left",
        Progress::Playing => "stopped",
    }
}

#[allow(clippy::print_stdout)]
fn print_board(session: &GameSession) {
    println!("{}", session.board());
}

#[allow(clippy::print_stdout)]
fn print_summary(summary: &PlaySummary) {
    println!(
        "{} after {} pairs",
        outcome_message(summary.outcome),
        summary.pairs
    );
    for result in &summary.learned {
        let parts = match &result.coda {
            Some(coda) => format!("{} + {}", result.base.symbol, coda.symbol),
            None => format!("{} + {}", result.initial.symbol, result.medial.symbol),
        };
        println!(
            "  {} {} ({parts})",
            result.compound.symbol, result.compound.label
        );
    }
}

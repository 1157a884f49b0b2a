//! Selection loop driving one board from generation to completion
//!
//! The session owns the only mutable board. Taps come in through
//! [`GameSession::select_tile`]; an accepted pair parks the session in
//! [`SessionState::AwaitingCommit`] so the caller can finish any transition
//! before calling [`GameSession::commit`] exactly once. Taps are ignored
//! while a commit is pending.

use std::collections::{BTreeMap, HashSet};

use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithm::deadlock::{ConnectablePair, Progress, assess_progress, find_connectable_pair};
use crate::algorithm::generation::generate_board;
use crate::algorithm::validation::{PairOutcome, Rejection, evaluate_pair};
use crate::composition::engine::{Composed, Part};
use crate::composition::rules::{CompositionRule, RuleSet};
use crate::composition::tiers::TierConfig;
use crate::io::configuration::MAX_TURNS;
use crate::io::error::{GameError, Result};
use crate::spatial::board::{Board, GridPosition};

/// Whether the session accepts taps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Taps are processed
    Idle,
    /// An accepted pair waits for [`GameSession::commit`]
    AwaitingCommit {
        /// First tapped tile
        first: usize,
        /// Second tapped tile
        second: usize,
        /// Index of the matched rule
        rule: usize,
    },
}

/// A composed result kept for the end-of-board review
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearnedResult {
    /// Full compound symbol and label
    pub compound: Composed,
    /// Initial + medial composition
    pub base: Composed,
    /// Initial part
    pub initial: Part,
    /// Medial part
    pub medial: Part,
    /// Final part on three-part tiers
    pub coda: Option<Part>,
}

impl From<&CompositionRule> for LearnedResult {
    fn from(rule: &CompositionRule) -> Self {
        Self {
            compound: rule.compound.clone(),
            base: rule.base.clone(),
            initial: rule.initial.clone(),
            medial: rule.medial.clone(),
            coda: rule.coda.clone(),
        }
    }
}

/// Notifications for the presentation layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The selection now holds these slot indices, in tap order
    SelectionChanged(Vec<usize>),
    /// A completed pair was turned down; the selection has been cleared
    PairRejected {
        /// Why the pair was rejected
        reason: Rejection,
        /// First tapped tile
        first: usize,
        /// Second tapped tile
        second: usize,
    },
    /// A completed pair was accepted and awaits commit
    PairAccepted {
        /// Index of the matched rule
        rule: usize,
        /// Waypoints from the first tapped tile to the second
        path: Vec<GridPosition>,
        /// First tapped tile
        first: usize,
        /// Second tapped tile
        second: usize,
    },
    /// The board reached a terminal state
    BoardFinished {
        /// [`Progress::Cleared`] or [`Progress::Deadlocked`]
        outcome: Progress,
        /// Everything composed on this board, in review order
        learned: Vec<LearnedResult>,
    },
}

/// One board of play for one tier
#[derive(Debug)]
pub struct GameSession {
    config: TierConfig,
    rules: RuleSet,
    board: Board,
    selection: Vec<usize>,
    state: SessionState,
    learned: BTreeMap<String, LearnedResult>,
    progress: Progress,
    max_turns: u8,
}

impl GameSession {
    /// Build the tier's rules and generate a seeded board
    ///
    /// # Errors
    ///
    /// Returns an error if the tier needs an allow-set and none was given,
    /// if the resulting rule set is empty, or if the tier geometry is invalid
    pub fn new(config: TierConfig, allow: Option<&HashSet<String>>, seed: u64) -> Result<Self> {
        let rules = config.rule_set(allow)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let board = generate_board(&config, &rules, &mut rng)?;
        debug!(
            "{}: {} rules, {} tiles on {}x{}",
            config.name,
            rules.len(),
            board.len(),
            board.rows(),
            board.columns()
        );
        Ok(Self::with_board(config, rules, board))
    }

    /// Start a session on a prepared board
    pub fn with_board(config: TierConfig, rules: RuleSet, board: Board) -> Self {
        let progress = assess_progress(&board, &rules, MAX_TURNS);
        Self {
            config,
            rules,
            board,
            selection: Vec::with_capacity(2),
            state: SessionState::Idle,
            learned: BTreeMap::new(),
            progress,
            max_turns: MAX_TURNS,
        }
    }

    /// Replace the board with a freshly generated one, keeping the rules
    ///
    /// Clears the selection, any pending commit and the learned results.
    ///
    /// # Errors
    ///
    /// Returns an error if board generation fails
    pub fn regenerate(&mut self, seed: u64) -> Result<Vec<GameEvent>> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.board = generate_board(&self.config, &self.rules, &mut rng)?;
        self.selection.clear();
        self.state = SessionState::Idle;
        self.learned.clear();
        self.progress = assess_progress(&self.board, &self.rules, self.max_turns);
        Ok(self.start())
    }

    /// Events owed to the caller before the first tap
    ///
    /// A board dealt without any connectable pair is already finished, so
    /// this yields its [`GameEvent::BoardFinished`]. A playable board yields
    /// nothing.
    pub fn start(&self) -> Vec<GameEvent> {
        self.finished_event().into_iter().collect()
    }

    fn finished_event(&self) -> Option<GameEvent> {
        self.progress
            .is_finished()
            .then(|| GameEvent::BoardFinished {
                outcome: self.progress,
                learned: self.learned_results(),
            })
    }

    /// Handle a tap on a board slot
    ///
    /// Taps on removed tiles, out-of-range slots, a finished board or while a
    /// commit is pending are ignored and produce no events.
    pub fn select_tile(&mut self, index: usize) -> Vec<GameEvent> {
        if matches!(self.state, SessionState::AwaitingCommit { .. }) {
            trace!("Ignoring tap on {index}: commit pending");
            return Vec::new();
        }
        if self.progress.is_finished() || !self.board.is_live(index) {
            trace!("Ignoring tap on {index}");
            return Vec::new();
        }

        if let Some(position) = self.selection.iter().position(|&selected| selected == index) {
            self.selection.remove(position);
            return vec![GameEvent::SelectionChanged(self.selection.clone())];
        }

        if self.selection.len() >= 2 {
            self.selection.clear();
        }
        self.selection.push(index);

        let mut events = vec![GameEvent::SelectionChanged(self.selection.clone())];
        if let [first, second] = *self.selection.as_slice() {
            events.extend(self.resolve_pair(first, second));
        }
        events
    }

    fn resolve_pair(&mut self, first: usize, second: usize) -> Vec<GameEvent> {
        let outcome = match evaluate_pair(&self.board, &self.rules, first, second, self.max_turns)
        {
            Ok(outcome) => outcome,
            Err(error) => {
                debug!("Discarding selection {first}, {second}: {error}");
                self.selection.clear();
                return vec![GameEvent::SelectionChanged(Vec::new())];
            }
        };

        match outcome {
            PairOutcome::Rejected(reason) => {
                self.selection.clear();
                vec![
                    GameEvent::PairRejected {
                        reason,
                        first,
                        second,
                    },
                    GameEvent::SelectionChanged(Vec::new()),
                ]
            }
            PairOutcome::Accepted { rule, path } => {
                self.state = SessionState::AwaitingCommit {
                    first,
                    second,
                    rule,
                };
                vec![GameEvent::PairAccepted {
                    rule,
                    path,
                    first,
                    second,
                }]
            }
        }
    }

    /// Apply the pending accepted pair
    ///
    /// Removes both tiles, records the learned result (a repeated compound
    /// overwrites the earlier entry), clears the selection and re-checks
    /// progress.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoPendingCommit`] if no pair is waiting
    pub fn commit(&mut self) -> Result<Vec<GameEvent>> {
        let SessionState::AwaitingCommit {
            first,
            second,
            rule,
        } = self.state
        else {
            return Err(GameError::NoPendingCommit);
        };

        self.board.remove(first);
        self.board.remove(second);
        if let Some(matched) = self.rules.get(rule) {
            debug!(
                "Composed {} ({})",
                matched.compound.symbol, matched.compound.label
            );
            self.learned
                .insert(matched.compound.symbol.clone(), LearnedResult::from(matched));
        }

        self.selection.clear();
        self.state = SessionState::Idle;
        self.progress = assess_progress(&self.board, &self.rules, self.max_turns);

        let mut events = vec![GameEvent::SelectionChanged(Vec::new())];
        events.extend(self.finished_event());
        Ok(events)
    }

    /// Drop the current selection unless a commit is pending
    pub fn cancel_selection(&mut self) -> Vec<GameEvent> {
        if matches!(self.state, SessionState::AwaitingCommit { .. }) || self.selection.is_empty() {
            return Vec::new();
        }
        self.selection.clear();
        vec![GameEvent::SelectionChanged(Vec::new())]
    }

    /// A currently connectable valid pair, if any
    pub fn hint(&self) -> Option<ConnectablePair> {
        find_connectable_pair(&self.board, &self.rules, self.max_turns)
    }

    /// Learned results ordered by compound symbol
    pub fn learned_results(&self) -> Vec<LearnedResult> {
        self.learned.values().cloned().collect()
    }

    /// Current board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Active rule set
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Tier configuration
    pub const fn config(&self) -> &TierConfig {
        &self.config
    }

    /// Selected slot indices in tap order
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Whether taps are currently processed
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Board progress as of the last commit
    pub const fn progress(&self) -> Progress {
        self.progress
    }
}

//! Difficulty tiers as data: part tables, board geometry and sampling weights
//!
//! Every tier runs through the same engine. A tier only differs in the
//! parts it introduces, how strongly new parts are sampled and whether its
//! rules are pruned by a frequency allow-set.

use std::collections::HashSet;
use std::fmt;

use clap::ValueEnum;

use crate::composition::rules::{CompositionRule, PartTables, RuleSet, build_rule_set};
use crate::io::configuration::{
    ALL_NEW_WEIGHT, BASE_WEIGHT, DEFAULT_COLUMNS, DEFAULT_MAX_ROWS, NEW_PART_WEIGHT,
};
use crate::io::error::{GameError, Result};

const FIRST_INITIALS: [(&str, &str); 7] = [
    ("ㄱ", "g"),
    ("ㄴ", "n"),
    ("ㄷ", "d"),
    ("ㄹ", "r"),
    ("ㅁ", "m"),
    ("ㅂ", "b"),
    ("ㅅ", "s"),
];

const FIRST_MEDIALS: [(&str, &str); 6] = [
    ("ㅏ", "a"),
    ("ㅓ", "eo"),
    ("ㅗ", "o"),
    ("ㅜ", "u"),
    ("ㅡ", "eu"),
    ("ㅣ", "i"),
];

const PLAIN_INITIALS: [(&str, &str); 14] = [
    ("ㄱ", "g"),
    ("ㄴ", "n"),
    ("ㄷ", "d"),
    ("ㄹ", "r"),
    ("ㅁ", "m"),
    ("ㅂ", "b"),
    ("ㅅ", "s"),
    ("ㅇ", ""),
    ("ㅈ", "j"),
    ("ㅊ", "ch"),
    ("ㅋ", "k"),
    ("ㅌ", "t"),
    ("ㅍ", "p"),
    ("ㅎ", "h"),
];

const EXTENDED_MEDIALS: [(&str, &str); 19] = [
    ("ㅏ", "a"),
    ("ㅓ", "eo"),
    ("ㅗ", "o"),
    ("ㅜ", "u"),
    ("ㅢ", "ui"),
    ("ㅐ", "ae"),
    ("ㅔ", "e"),
    ("ㅑ", "ya"),
    ("ㅕ", "yeo"),
    ("ㅛ", "yo"),
    ("ㅠ", "yu"),
    ("ㅒ", "yae"),
    ("ㅖ", "ye"),
    ("ㅘ", "wa"),
    ("ㅙ", "wae"),
    ("ㅚ", "oe"),
    ("ㅝ", "wo"),
    ("ㅞ", "we"),
    ("ㅟ", "wi"),
];

const BASIC_CODAS: [(&str, &str); 7] = [
    ("ㄱ", "k"),
    ("ㄴ", "n"),
    ("ㄷ", "t"),
    ("ㄹ", "l"),
    ("ㅁ", "m"),
    ("ㅂ", "p"),
    ("ㅇ", "ng"),
];

/// Per-category pool multipliers for tiers that introduce new parts
#[derive(Clone, Debug)]
pub struct IntroductionWeights {
    /// Initials already learned in an earlier tier
    pub familiar_initials: HashSet<String>,
    /// Medials already learned in an earlier tier
    pub familiar_medials: HashSet<String>,
    /// Copies of a rule built only from familiar parts
    pub familiar: usize,
    /// Copies of a rule with exactly one new part
    pub one_new: usize,
    /// Copies of a rule with a new initial and a new medial
    pub all_new: usize,
}

/// How many times each rule enters the sampling pool
#[derive(Clone, Debug, Default)]
pub enum Weighting {
    /// Every rule contributes once
    #[default]
    Uniform,
    /// New parts contribute more often than familiar ones
    Introduction(IntroductionWeights),
}

impl Weighting {
    /// Number of pool copies for a rule; never zero
    pub fn copies(&self, rule: &CompositionRule) -> usize {
        match self {
            Self::Uniform => 1,
            Self::Introduction(weights) => {
                let new_initial = !weights.familiar_initials.contains(&rule.initial.symbol);
                let new_medial = !weights.familiar_medials.contains(&rule.medial.symbol);
                let copies = match (new_initial, new_medial) {
                    (false, false) => weights.familiar,
                    (true, true) => weights.all_new,
                    _ => weights.one_new,
                };
                copies.max(1)
            }
        }
    }
}

/// Complete configuration of one difficulty tier
#[derive(Clone, Debug)]
pub struct TierConfig {
    /// Display name
    pub name: String,
    /// Parts combined by this tier's rules
    pub tables: PartTables,
    /// Fixed column count
    pub columns: usize,
    /// Maximum row count
    pub max_rows: usize,
    /// Pool weighting applied by the board generator
    pub weighting: Weighting,
    /// Whether rules are pruned to an external frequency allow-set
    pub requires_allow_set: bool,
    /// Compounds never offered on this tier
    pub excluded: HashSet<String>,
}

impl TierConfig {
    /// Number of tiles on a full board
    pub const fn capacity(&self) -> usize {
        self.columns * self.max_rows
    }

    /// Build this tier's rule set
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyAllowSet`] when the tier filters by
    /// allow-set and `allow` is missing or empty. An allow-set that simply
    /// matches nothing yields an empty rule set, which board generation
    /// reports separately.
    pub fn rule_set(&self, allow: Option<&HashSet<String>>) -> Result<RuleSet> {
        if !self.requires_allow_set {
            return Ok(build_rule_set(&self.tables, None, &self.excluded));
        }

        match allow {
            Some(set) if !set.is_empty() => {
                Ok(build_rule_set(&self.tables, Some(set), &self.excluded))
            }
            _ => Err(GameError::EmptyAllowSet {
                tier: self.name.clone(),
            }),
        }
    }
}

/// Built-in difficulty tiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Tier {
    /// Seven basic initials with six simple medials
    Level1,
    /// All plain initials with compound medials, new parts weighted up
    Level2,
    /// Base syllables completed with a final consonant, allow-set filtered
    Level3,
}

impl Tier {
    /// Display name of the tier
    pub const fn name(self) -> &'static str {
        match self {
            Self::Level1 => "Level 1",
            Self::Level2 => "Level 2",
            Self::Level3 => "Level 3",
        }
    }

    /// Configuration for the tier
    pub fn config(self) -> TierConfig {
        let (tables, weighting, requires_allow_set) = match self {
            Self::Level1 => (
                PartTables::from_pairs(&FIRST_INITIALS, &FIRST_MEDIALS, None),
                Weighting::Uniform,
                false,
            ),
            Self::Level2 => (
                PartTables::from_pairs(&PLAIN_INITIALS, &EXTENDED_MEDIALS, None),
                Weighting::Introduction(introduction_weights()),
                false,
            ),
            Self::Level3 => (
                PartTables::from_pairs(
                    &PLAIN_INITIALS,
                    &EXTENDED_MEDIALS,
                    Some(BASIC_CODAS.as_slice()),
                ),
                Weighting::Uniform,
                true,
            ),
        };

        TierConfig {
            name: self.name().to_string(),
            tables,
            columns: DEFAULT_COLUMNS,
            max_rows: DEFAULT_MAX_ROWS,
            weighting,
            requires_allow_set,
            excluded: HashSet::new(),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn introduction_weights() -> IntroductionWeights {
    IntroductionWeights {
        familiar_initials: FIRST_INITIALS
            .iter()
            .map(|&(symbol, _)| symbol.to_string())
            .collect(),
        familiar_medials: FIRST_MEDIALS
            .iter()
            .map(|&(symbol, _)| symbol.to_string())
            .collect(),
        familiar: BASE_WEIGHT,
        one_new: NEW_PART_WEIGHT,
        all_new: ALL_NEW_WEIGHT,
    }
}

//! Engine constants and runtime configuration defaults

/// Number of board columns; fixed for the lifetime of a board
pub const DEFAULT_COLUMNS: usize = 6;

/// Maximum number of board rows; board capacity is columns times rows
pub const DEFAULT_MAX_ROWS: usize = 7;

/// Maximum direction changes allowed on a connecting path
pub const MAX_TURNS: u8 = 2;

// Default values for configurable parameters
/// Fixed seed for reproducible boards
pub const DEFAULT_SEED: u64 = 42;

// Sampling weights for the introduction tiers
/// Pool copies of a rule built only from previously learned parts
pub const BASE_WEIGHT: usize = 1;
/// Pool copies of a rule with exactly one newly introduced part
pub const NEW_PART_WEIGHT: usize = 2;
/// Pool copies of a rule whose parts are all newly introduced
pub const ALL_NEW_WEIGHT: usize = 3;

/// Origin of the precomposed Hangul syllable block (U+AC00)
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Crate-relative path of the bundled allow-set, embedded at compile time
pub const DEFAULT_LEXICON_PATH: &str = "data/frequent_syllables.json";

//! Error types for board setup, session control and allow-set loading

use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine operations
///
/// Gameplay rejections are not errors; they travel as
/// [`Rejection`](crate::algorithm::validation::Rejection) values.
#[derive(Debug)]
pub enum GameError {
    /// A tier that filters by allow-set received a missing or empty set
    EmptyAllowSet {
        /// Name of the tier being configured
        tier: String,
    },

    /// The rule set has no rules, so no board can be generated
    EmptyRuleSet,

    /// Engine parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// `commit` was called without an accepted pair waiting
    NoPendingCommit,

    /// Failed to read the allow-set file
    LexiconLoad {
        /// Path to the allow-set file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The allow-set file is not a JSON array of strings
    LexiconParse {
        /// Path to the allow-set file
        path: PathBuf,
        /// Underlying decoding error
        source: serde_json::Error,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAllowSet { tier } => {
                write!(
                    f,
                    "Tier '{tier}' requires a frequency allow-set but none was supplied"
                )
            }
            Self::EmptyRuleSet => write!(f, "No composition rules to build a board from"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoPendingCommit => write!(f, "No accepted pair is waiting to be committed"),
            Self::LexiconLoad { path, source } => {
                write!(f, "Failed to read allow-set '{}': {source}", path.display())
            }
            Self::LexiconParse { path, source } => {
                write!(f, "Failed to parse allow-set '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LexiconLoad { source, .. } => Some(source),
            Self::LexiconParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, GameError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GameError {
    GameError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

//! Frequency allow-set loading for three-part tiers
//!
//! The allow-set file is a JSON array of syllable strings. Blank entries are
//! dropped and duplicates collapse. The list in `data/` is compiled into the
//! crate, so the default never depends on the working directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::io::configuration::DEFAULT_LEXICON_PATH;
use crate::io::error::{GameError, Result};

const BUNDLED_ALLOW_SET: &str = include_str!("../../data/frequent_syllables.json");

/// Parse the allow-set compiled into the crate
///
/// # Errors
///
/// Returns [`GameError::LexiconParse`] if the bundled list is malformed
pub fn bundled_allow_set() -> Result<HashSet<String>> {
    let allow = parse_allow_set(BUNDLED_ALLOW_SET).map_err(|source| GameError::LexiconParse {
        path: PathBuf::from(DEFAULT_LEXICON_PATH),
        source,
    })?;

    debug!("Loaded {} bundled syllables", allow.len());
    Ok(allow)
}

/// Read an allow-set from a JSON file
///
/// # Errors
///
/// Returns [`GameError::LexiconLoad`] if the file cannot be read and
/// [`GameError::LexiconParse`] if it is not a JSON array of strings
pub fn load_allow_set(path: &Path) -> Result<HashSet<String>> {
    let contents = fs::read_to_string(path).map_err(|source| GameError::LexiconLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let allow = parse_allow_set(&contents).map_err(|source| GameError::LexiconParse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} allowed syllables from {}", allow.len(), path.display());
    Ok(allow)
}

/// Parse an allow-set from JSON text
///
/// # Errors
///
/// Returns the decoding error if `json` is not an array of strings
pub fn parse_allow_set(json: &str) -> serde_json::Result<HashSet<String>> {
    let entries: Vec<String> = serde_json::from_str(json)?;
    Ok(entries
        .into_iter()
        .map(|entry| entry.trim().to_owned())
        .filter(|entry| !entry.is_empty())
        .collect())
}

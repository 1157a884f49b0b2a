//! Rules engine for a Hangul tile-pairing puzzle
//!
//! Boards hold head tiles (initials, or base syllables on three-part tiers)
//! and tail tiles (medials or finals). A head and a tail can be removed
//! together when a composition rule combines them and the two tiles connect
//! through empty cells with at most two turns.

#![forbid(unsafe_code)]

/// Board generation, pathfinding, pair validation, progress checks and the play session
pub mod algorithm;
/// Syllable composition, rule sets and difficulty tiers
pub mod composition;
/// Configuration constants, errors, allow-set loading and the command-line front end
pub mod io;
/// Board layout and occupancy tracking
pub mod spatial;

pub use io::error::{GameError, Result};

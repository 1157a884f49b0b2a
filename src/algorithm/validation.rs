//! Pair evaluation with a fixed rejection precedence
//!
//! Checks run from the coarsest mistake to the "almost right" one: kind,
//! rule lookup, connectivity, then tap order. The first failing check decides
//! the outcome regardless of which tile was tapped first.

use std::fmt;

use crate::algorithm::pathfinding::find_path;
use crate::composition::rules::RuleSet;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::board::{Board, GridPosition, TileKind};

/// Why a selected pair was turned down
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Both tiles fill the same composition slot
    SameKind,
    /// No rule combines the two symbols
    NoRule,
    /// No connecting path within the turn limit
    Blocked,
    /// Valid and connected, but the tail tile was tapped first
    WrongOrder,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::SameKind => "Only a head + tail pair is allowed",
            Self::NoRule => "These parts do not combine",
            Self::Blocked => "Path is blocked",
            Self::WrongOrder => "Select the head tile first, then the tail tile",
        };
        f.write_str(message)
    }
}

/// Result of evaluating two selected tiles
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    /// The pair may be removed
    Accepted {
        /// Index of the matched rule in its rule set
        rule: usize,
        /// Waypoints connecting the first tapped tile to the second
        path: Vec<GridPosition>,
    },
    /// The pair was turned down
    Rejected(Rejection),
}

impl PairOutcome {
    /// Whether the pair was accepted
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Rejection reason, if any
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

/// Evaluate two tiles in tap order
///
/// # Errors
///
/// Returns an error if either index does not hold a live tile or both indices
/// are the same slot
pub fn evaluate_pair(
    board: &Board,
    rules: &RuleSet,
    first: usize,
    second: usize,
    max_turns: u8,
) -> Result<PairOutcome> {
    if first == second {
        return Err(invalid_parameter(
            "second",
            &second,
            &"a tile cannot be paired with itself",
        ));
    }

    let first_tile = board
        .tile(first)
        .filter(|tile| !tile.removed)
        .ok_or_else(|| invalid_parameter("first", &first, &"no live tile at index"))?;
    let second_tile = board
        .tile(second)
        .filter(|tile| !tile.removed)
        .ok_or_else(|| invalid_parameter("second", &second, &"no live tile at index"))?;

    if first_tile.kind == second_tile.kind {
        return Ok(PairOutcome::Rejected(Rejection::SameKind));
    }

    let (head, tail) = if first_tile.kind == TileKind::Head {
        (first_tile, second_tile)
    } else {
        (second_tile, first_tile)
    };

    let Some(rule) = rules.find(&head.symbol, &tail.symbol) else {
        return Ok(PairOutcome::Rejected(Rejection::NoRule));
    };

    let Some(path) = find_path(board, first, second, max_turns) else {
        return Ok(PairOutcome::Rejected(Rejection::Blocked));
    };

    if first_tile.kind != TileKind::Head {
        return Ok(PairOutcome::Rejected(Rejection::WrongOrder));
    }

    Ok(PairOutcome::Accepted { rule, path })
}

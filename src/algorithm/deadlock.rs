use crate::algorithm::pathfinding::find_path_with_mask;
use crate::composition::rules::RuleSet;
use crate::spatial::board::{Board, GridPosition, TileKind};

/// Where a board stands after a commit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Progress {
    /// At least one valid pair can still be connected
    Playing,
    /// Every tile has been removed
    Cleared,
    /// Tiles remain but no rule pair among them can be connected
    Deadlocked,
}

impl Progress {
    /// Whether the board has reached a terminal state
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Cleared | Self::Deadlocked)
    }
}

/// A rule-valid head/tail pair that is currently connectable
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectablePair {
    /// Index of the matched rule
    pub rule: usize,
    /// Slot index of the head tile
    pub head: usize,
    /// Slot index of the tail tile
    pub tail: usize,
    /// Waypoints from the head tile to the tail tile
    pub path: Vec<GridPosition>,
}

/// Find the first connectable pair, scanning rules in order
///
/// For each rule every live head tile showing the rule's head symbol is tried
/// against every live tail tile showing its tail symbol. Cost is quadratic in
/// tiles per symbol times the rule count, which small fixed boards absorb.
pub fn find_connectable_pair(
    board: &Board,
    rules: &RuleSet,
    max_turns: u8,
) -> Option<ConnectablePair> {
    let has_live = |kind: TileKind| {
        board
            .tiles()
            .iter()
            .any(|tile| !tile.removed && tile.kind == kind)
    };
    if !has_live(TileKind::Head) || !has_live(TileKind::Tail) {
        return None;
    }

    let occupancy = board.occupancy();

    for (rule_index, rule) in rules.iter().enumerate() {
        let head_slots = board.live_indices(TileKind::Head, rule.symbol_for(TileKind::Head));
        if head_slots.is_empty() {
            continue;
        }
        let tail_slots = board.live_indices(TileKind::Tail, rule.symbol_for(TileKind::Tail));

        for &head in &head_slots {
            for &tail in &tail_slots {
                if let Some(path) = find_path_with_mask(board, &occupancy, head, tail, max_turns) {
                    return Some(ConnectablePair {
                        rule: rule_index,
                        head,
                        tail,
                        path,
                    });
                }
            }
        }
    }

    None
}

/// Classify the board as playing, cleared or deadlocked
pub fn assess_progress(board: &Board, rules: &RuleSet, max_turns: u8) -> Progress {
    if board.is_cleared() {
        return Progress::Cleared;
    }

    if find_connectable_pair(board, rules, max_turns).is_some() {
        Progress::Playing
    } else {
        Progress::Deadlocked
    }
}

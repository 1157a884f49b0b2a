//! Bounded-turn orthogonal path search between two tiles
//!
//! Searches the `(cell, heading)` state space with a 0-1 breadth-first
//! search: continuing straight costs nothing, changing heading costs one
//! turn. Straight moves go to the front of the deque and turning moves go to
//! the back, so the first time the goal is dequeued it was reached with the
//! fewest turns. Search space is bounded by `rows × cols × 4` states.

use std::collections::VecDeque;

use ndarray::Array3;

use crate::spatial::board::{Board, GridPosition};
use crate::spatial::occupancy::OccupancyMask;

/// Orthogonal heading on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards the last column
    Right,
    /// Towards the last row
    Down,
    /// Towards column 0
    Left,
}

impl Direction {
    /// All headings in search order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Row and column offset of one step
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct SearchState {
    position: GridPosition,
    heading: Direction,
    turns: u8,
    parent: Option<usize>,
}

/// Find a path between two live tiles with at most `max_turns` direction changes
///
/// Returns waypoints from `from` to `to`: the start, each turning point and
/// the end. Returns `None` when no such path exists, when either index has no
/// tile, or when both indices are the same tile.
pub fn find_path(
    board: &Board,
    from: usize,
    to: usize,
    max_turns: u8,
) -> Option<Vec<GridPosition>> {
    find_path_with_mask(board, &board.occupancy(), from, to, max_turns)
}

/// Same as [`find_path`] but reuses a precomputed occupancy mask
///
/// Lets callers that test many pairs against one board state build the mask
/// once.
pub fn find_path_with_mask(
    board: &Board,
    occupancy: &OccupancyMask,
    from: usize,
    to: usize,
    max_turns: u8,
) -> Option<Vec<GridPosition>> {
    if from == to {
        return None;
    }

    let start = board.position(from)?;
    let goal = board.position(to)?;
    let rows = board.rows();
    let cols = board.columns();
    if rows == 0 {
        return None;
    }

    // Endpoints are always passable; every other live tile blocks
    let is_blocked = |position: GridPosition| {
        position != start
            && position != goal
            && board
                .index_of(position)
                .is_some_and(|index| occupancy.is_occupied(index))
    };

    let mut best_turns = Array3::<u8>::from_elem((rows, cols, Direction::ALL.len()), u8::MAX);
    let mut states: Vec<SearchState> = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    for heading in Direction::ALL {
        let Some(next) = step(start, heading, rows, cols) else {
            continue;
        };
        if is_blocked(next) {
            continue;
        }
        if let Some(slot) = best_turns.get_mut([next.row, next.col, heading.index()]) {
            *slot = 0;
        }
        states.push(SearchState {
            position: next,
            heading,
            turns: 0,
            parent: None,
        });
        queue.push_back(states.len() - 1);
    }

    let mut goal_state = None;

    while let Some(current_index) = queue.pop_front() {
        let Some(current) = states.get(current_index).copied() else {
            continue;
        };

        // Superseded by a cheaper arrival at the same state
        let recorded = best_turns
            .get([
                current.position.row,
                current.position.col,
                current.heading.index(),
            ])
            .copied()
            .unwrap_or(u8::MAX);
        if recorded < current.turns {
            continue;
        }

        if current.position == goal {
            goal_state = Some(current_index);
            break;
        }

        for heading in Direction::ALL {
            let Some(next) = step(current.position, heading, rows, cols) else {
                continue;
            };
            if is_blocked(next) {
                continue;
            }

            let turns = if heading == current.heading {
                current.turns
            } else {
                current.turns.saturating_add(1)
            };
            if turns > max_turns {
                continue;
            }

            let Some(slot) = best_turns.get_mut([next.row, next.col, heading.index()]) else {
                continue;
            };
            if turns >= *slot {
                continue;
            }
            *slot = turns;

            states.push(SearchState {
                position: next,
                heading,
                turns,
                parent: Some(current_index),
            });
            let pushed = states.len() - 1;
            if turns == current.turns {
                queue.push_front(pushed);
            } else {
                queue.push_back(pushed);
            }
        }
    }

    let goal_index = goal_state?;

    let mut cells = Vec::new();
    let mut cursor = Some(goal_index);
    while let Some(index) = cursor {
        let Some(state) = states.get(index) else {
            break;
        };
        cells.push(state.position);
        cursor = state.parent;
    }
    cells.push(start);
    cells.reverse();

    Some(compress_waypoints(&cells))
}

/// Whether two tiles are connected within the turn limit
pub fn is_connected(board: &Board, from: usize, to: usize, max_turns: u8) -> bool {
    find_path(board, from, to, max_turns).is_some()
}

/// Number of direction changes along a compressed waypoint list
pub const fn count_turns(waypoints: &[GridPosition]) -> usize {
    waypoints.len().saturating_sub(2)
}

/// Keep only the start, the end and the cells where the heading changes
pub fn compress_waypoints(cells: &[GridPosition]) -> Vec<GridPosition> {
    let mut waypoints = Vec::with_capacity(4);

    for (index, &cell) in cells.iter().enumerate() {
        if index == 0 || index + 1 == cells.len() {
            waypoints.push(cell);
            continue;
        }

        let (Some(&previous), Some(&next)) = (cells.get(index - 1), cells.get(index + 1)) else {
            continue;
        };
        if heading_between(previous, cell) != heading_between(cell, next) {
            waypoints.push(cell);
        }
    }

    waypoints
}

fn heading_between(from: GridPosition, to: GridPosition) -> (isize, isize) {
    (
        to.row as isize - from.row as isize,
        to.col as isize - from.col as isize,
    )
}

fn step(position: GridPosition, heading: Direction, rows: usize, cols: usize) -> Option<GridPosition> {
    let (row_delta, col_delta) = heading.delta();
    let row = position.row.checked_add_signed(row_delta)?;
    let col = position.col.checked_add_signed(col_delta)?;
    (row < rows && col < cols).then_some(GridPosition::new(row, col))
}

/// Connectable-pair search and cleared/deadlocked classification
pub mod deadlock;
/// Weighted board generation from a rule set
pub mod generation;
/// Bounded-turn path search between tiles
pub mod pathfinding;
/// Selection state machine driving one board of play
pub mod session;
/// Pair evaluation with ordered rejection reasons
pub mod validation;

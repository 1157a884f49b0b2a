//! Initial board fill from a weighted rule pool
//!
//! Every rule contributes one head and one tail tile per pool copy, so a
//! full pass over the rule set is always present before padding. Weighted
//! duplicates are kept on purpose: they are what biases sampling towards
//! newly introduced parts.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::composition::rules::{CompositionRule, RuleSet};
use crate::composition::tiers::{TierConfig, Weighting};
use crate::io::error::{GameError, Result, invalid_parameter};
use crate::spatial::board::{Board, Tile, TileId, TileKind};

struct TilePool {
    tiles: Vec<Tile>,
    next_id: u32,
}

impl TilePool {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            tiles: Vec::with_capacity(capacity),
            next_id: 0,
        }
    }

    fn push_rule(&mut self, rule: &CompositionRule) {
        for kind in [TileKind::Head, TileKind::Tail] {
            self.tiles
                .push(Tile::new(TileId(self.next_id), rule.symbol_for(kind), kind));
            self.next_id = self.next_id.wrapping_add(1);
        }
    }
}

/// Produce exactly `target` tiles sampled from the rule set
///
/// Builds the weighted pool, pads it by cycling through the rules until it
/// holds at least `target` tiles, shuffles, then truncates to `target`.
///
/// # Errors
///
/// Returns [`GameError::EmptyRuleSet`] if `rules` is empty, or an invalid
/// parameter error if `target` is zero
pub fn generate_tiles<R: Rng + ?Sized>(
    rules: &RuleSet,
    target: usize,
    weighting: &Weighting,
    rng: &mut R,
) -> Result<Vec<Tile>> {
    if rules.is_empty() {
        return Err(GameError::EmptyRuleSet);
    }
    if target == 0 {
        return Err(invalid_parameter(
            "target",
            &target,
            &"a board needs at least one tile",
        ));
    }

    let mut pool = TilePool::with_capacity(target.max(rules.len() * 2));

    for rule in rules {
        for _ in 0..weighting.copies(rule) {
            pool.push_rule(rule);
        }
    }
    let weighted_len = pool.tiles.len();

    for rule in rules.iter().cycle() {
        if pool.tiles.len() >= target {
            break;
        }
        pool.push_rule(rule);
    }

    debug!(
        "Tile pool: {weighted_len} weighted, {} after padding, target {target}",
        pool.tiles.len()
    );

    let mut tiles = pool.tiles;
    tiles.shuffle(rng);
    tiles.truncate(target);
    Ok(tiles)
}

/// Generate a full board for a tier
///
/// # Errors
///
/// Returns an error if the rule set is empty or the tier geometry is invalid
pub fn generate_board<R: Rng + ?Sized>(
    config: &TierConfig,
    rules: &RuleSet,
    rng: &mut R,
) -> Result<Board> {
    let tiles = generate_tiles(rules, config.capacity(), &config.weighting, rng)?;
    Board::new(tiles, config.columns)
}

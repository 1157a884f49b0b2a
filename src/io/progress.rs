//! Terminal progress for autoplayed boards

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BOARD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} tiles {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks removed tiles on one board
pub struct BoardProgress {
    bar: ProgressBar,
}

impl BoardProgress {
    /// Create a bar for a board holding `tile_count` tiles
    pub fn new(tier: &str, tile_count: usize) -> Self {
        let bar = ProgressBar::new(tile_count as u64);
        bar.set_style(BOARD_STYLE.clone());
        bar.set_prefix(tier.to_owned());
        Self { bar }
    }

    /// Record a committed pair and show the composed result
    pub fn pair_removed(&self, compound: &str) {
        self.bar.inc(2);
        self.bar.set_message(compound.to_owned());
    }

    /// Tiles removed so far
    pub fn removed(&self) -> u64 {
        self.bar.position()
    }

    /// Stop the bar with a final message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_owned());
    }
}

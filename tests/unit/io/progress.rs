//! Tests for the autoplay progress bar

#[cfg(test)]
mod tests {
    use hango::io::progress::BoardProgress;

    // Tests each committed pair advances the bar by two tiles
    // Verified by incrementing by one per pair
    #[test]
    fn test_pair_removed() {
        let progress = BoardProgress::new("Level 1", 42);
        progress.pair_removed("가");
        progress.pair_removed("나");
        assert_eq!(progress.removed(), 4);
        progress.finish("cleared");
    }

    // Tests an empty board finishes without updates
    #[test]
    fn test_finish_without_pairs() {
        let progress = BoardProgress::new("Level 2", 0);
        progress.finish("no moves left");
        assert_eq!(progress.removed(), 0);
    }
}

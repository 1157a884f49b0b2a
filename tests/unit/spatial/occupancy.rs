//! Tests for `OccupancyMask` bit operations

#[cfg(test)]
mod tests {
    use hango::spatial::occupancy::OccupancyMask;

    // Verifies a new mask has no occupied cells
    #[test]
    fn test_empty_mask() {
        let mask = OccupancyMask::empty(12);
        assert!(mask.is_empty());
        assert_eq!(mask.count(), 0);
        assert_eq!(mask.cell_count(), 12);
    }

    // Tests occupy marks single cells
    // Verified by making occupy a no-op
    #[test]
    fn test_occupy() {
        let mut mask = OccupancyMask::empty(8);
        mask.occupy(2);
        mask.occupy(5);
        mask.occupy(5);
        assert!(mask.is_occupied(2));
        assert!(!mask.is_occupied(3));
        assert_eq!(mask.count(), 2);
        assert_eq!(mask.to_vec(), vec![2, 5]);
    }

    // Tests indices past the end are ignored rather than panicking
    #[test]
    fn test_out_of_range() {
        let mut mask = OccupancyMask::empty(3);
        mask.occupy(10);
        assert!(!mask.is_occupied(10));
        assert!(mask.is_empty());
    }

    // Tests the debug-friendly display
    #[test]
    fn test_display() {
        let mut mask = OccupancyMask::empty(4);
        mask.occupy(1);
        assert_eq!(mask.to_string(), "OccupancyMask(1/4 occupied: [1])");
    }
}

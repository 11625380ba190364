/*
 * Unit tests for the range filter
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_filter_start_above_top
 * - test_filter_start_below_bottom
 * - test_filter_bottom_not_below_top
 * - test_filter_drops_out_of_range
 * - test_filter_keeps_bounds_inclusive
 * - test_filter_unbounded
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod range_filter_tests {
    use crate::elevator::range_filter::{check_bounds, filter};
    use crate::shared::{BuildingBounds, SimError};

    #[test]
    fn test_filter_start_above_top() {
        // Purpose: A start floor above the top floor is a configuration error

        // Arrange
        let bounds = BuildingBounds::new(Some(10), None);

        // Act
        let result = filter(12, &[2, 9, 1, 32], &bounds);

        // Assert
        assert_eq!(result, Err(SimError::StartAboveTop { start: 12, top: 10 }));
        assert!(result.unwrap_err().is_configuration());
    }

    #[test]
    fn test_filter_start_below_bottom() {
        // Arrange
        let bounds = BuildingBounds::new(None, Some(-1));

        // Act
        let result = check_bounds(-3, &bounds);

        // Assert
        assert_eq!(result, Err(SimError::StartBelowBottom { start: -3, bottom: -1 }));
    }

    #[test]
    fn test_filter_bottom_not_below_top() {
        // Purpose: Equal bounds are rejected even when the start floor matches them

        // Arrange
        let bounds = BuildingBounds::new(Some(5), Some(5));

        // Act
        let result = check_bounds(5, &bounds);

        // Assert
        assert_eq!(result, Err(SimError::BottomNotBelowTop { top: 5, bottom: 5 }));
    }

    #[test]
    fn test_filter_drops_out_of_range() {
        // Arrange
        let bounds = BuildingBounds::new(Some(14), Some(-3));

        // Act
        let filtered = filter(12, &[2, 9, 1, -2, -4, 32], &bounds).unwrap();

        // Assert
        assert_eq!(filtered.kept, vec![2, 9, 1, -2]);
        assert_eq!(filtered.dropped, vec![-4, 32]);
    }

    #[test]
    fn test_filter_keeps_bounds_inclusive() {
        // Purpose: Stops exactly on the top or bottom floor are kept, order preserved

        // Arrange
        let bounds = BuildingBounds::new(Some(14), Some(-3));

        // Act
        let filtered = filter(0, &[14, -3, 15, -4, 0, 14], &bounds).unwrap();

        // Assert
        assert_eq!(filtered.kept, vec![14, -3, 0, 14]);
        assert_eq!(filtered.dropped, vec![15, -4]);
        assert!(filtered.kept.iter().all(|&floor| (-3..=14).contains(&floor)));
    }

    #[test]
    fn test_filter_unbounded() {
        // Arrange
        let bounds = BuildingBounds::default();

        // Act
        let filtered = filter(3, &[100, -100, 3], &bounds).unwrap();

        // Assert
        assert_eq!(filtered.kept, vec![100, -100, 3]);
        assert!(filtered.dropped.is_empty());
    }
}

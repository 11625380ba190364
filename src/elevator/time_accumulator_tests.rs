/*
 * Unit tests for the time accumulator
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_travel_time_up
 * - test_travel_time_down
 * - test_travel_time_extreme_floors
 * - test_dwell_time
 * - test_accumulate_path
 * - test_accumulate_is_deterministic
 * - test_accumulate_invalid_parameters
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod time_accumulator_tests {
    use crate::elevator::time_accumulator::{accumulate, dwell_time, travel_time};
    use crate::shared::SimError;

    #[test]
    fn test_travel_time_up() {
        assert_eq!(travel_time(2, 12, 10.0), 100.0);
    }

    #[test]
    fn test_travel_time_down() {
        assert_eq!(travel_time(12, 2, 10.0), 100.0);
    }

    #[test]
    fn test_travel_time_extreme_floors() {
        // Purpose: Distances across the whole i32 range do not overflow
        assert_eq!(travel_time(i32::MIN, i32::MAX, 1.0), u32::MAX as f64);
    }

    #[test]
    fn test_dwell_time() {
        // Purpose: Every floor on the path counts as a stop, the start floor included
        assert_eq!(dwell_time(&[12, 2, 9, 1, 32], 2.0), 10.0);
    }

    #[test]
    fn test_accumulate_path() {
        // Arrange
        let path = [12, 2, 9, 1, 32];

        // Act
        let total = accumulate(&path, 10.0, 2.0).unwrap();

        // Assert
        assert_eq!(total, 570.0);
    }

    #[test]
    fn test_accumulate_is_deterministic() {
        // Arrange
        let path = [3, -1, 7, 7, 0];

        // Act
        let first = accumulate(&path, 2.5, 1.5).unwrap();
        let second = accumulate(&path, 2.5, 1.5).unwrap();

        // Assert
        assert_eq!(first, second);
        assert_eq!(first, 19.0 * 2.5 + 5.0 * 1.5);
    }

    #[test]
    fn test_accumulate_invalid_parameters() {
        // Act
        let zero_travel = accumulate(&[0, 1], 0.0, 0.0);
        let negative_wait = accumulate(&[0, 1], 10.0, -1.0);
        let nan_travel = accumulate(&[0, 1], f64::NAN, 0.0);

        // Assert
        assert!(matches!(
            zero_travel,
            Err(SimError::InvalidParameter { name: "time_between_floors", .. })
        ));
        assert!(matches!(
            negative_wait,
            Err(SimError::InvalidParameter { name: "time_at_floor", .. })
        ));
        assert!(nan_travel.is_err());
    }
}

//! Expected value of the remaining prize board.

use crate::domain::game::GameError;

/// Computes the arithmetic mean of the remaining amounts.
///
/// Precision is kept in f64 until the final offer rounding; callers must not
/// truncate early.
///
/// # Errors
///
/// `GameError::InvalidState` if the board is empty. A finished game must
/// never request an EV; hitting this is a caller contract bug, not a
/// condition to retry.
pub fn expected_value(remaining: &[u64]) -> Result<f64, GameError> {
    if remaining.is_empty() {
        return Err(GameError::invalid_state(
            "expected value requested for an empty board",
        ));
    }
    Ok(remaining.iter().sum::<u64>() as f64 / remaining.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_amount_is_its_own_mean() {
        assert_eq!(expected_value(&[100]).unwrap(), 100.0);
    }

    #[test]
    fn mean_of_two_amounts() {
        assert_eq!(expected_value(&[0, 100]).unwrap(), 50.0);
    }

    #[test]
    fn mean_keeps_fractional_precision() {
        // 1 + 2 + 2 = 5, mean 5/3
        let ev = expected_value(&[1, 2, 2]).unwrap();
        assert!((ev - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn full_default_board_mean() {
        let board = [
            1u64, 5, 10, 25, 50, 100, 500, 1_000, 2_500, 5_000, 10_000, 25_000, 50_000, 75_000,
            100_000, 200_000, 300_000, 400_000, 500_000, 750_000, 1_000_000,
        ];
        let ev = expected_value(&board).unwrap();
        // 3,419,191 / 21
        assert!((ev - 162_818.619_048).abs() < 1e-3);
    }

    #[test]
    fn empty_board_is_an_invalid_state() {
        let err = expected_value(&[]).unwrap_err();
        assert!(matches!(err, GameError::InvalidState { .. }));
    }
}

//! Course review ratings.

use crate::error::CoreError;

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// Validate that a rating is within `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Mean rating rounded to one decimal place, `None` when there are no ratings.
pub fn average_rating(ratings: &[i16]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    Some(round_to_tenth(sum as f64 / ratings.len() as f64))
}

/// Round to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn average_of_nothing_is_none() {
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[5, 4, 4]), Some(4.3));
        assert_eq!(average_rating(&[3]), Some(3.0));
        assert_eq!(average_rating(&[1, 2]), Some(1.5));
    }
}

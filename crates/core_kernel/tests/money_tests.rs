//! Unit tests for the Money module
//!
//! Tests cover money creation, arithmetic, parsing, and edge cases
//! around the fixed two-decimal scale.

use core_kernel::{Money, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_new_rounds_to_two_decimal_places() {
        let m = Money::new(dec!(100.123456789));
        assert_eq!(m.amount(), dec!(100.12));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero();
        assert!(m.is_zero());
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Money::default(), Money::zero());
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_positive_true_for_positive_amount() {
        assert!(Money::new(dec!(0.01)).is_positive());
    }

    #[test]
    fn test_is_positive_false_for_zero() {
        assert!(!Money::zero().is_positive());
    }

    #[test]
    fn test_is_negative_true_for_negative_amount() {
        assert!(Money::new(dec!(-5.00)).is_negative());
    }

    #[test]
    fn test_abs_strips_sign() {
        assert_eq!(Money::new(dec!(-5.00)).abs(), Money::new(dec!(5.00)));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_addition() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.25));
        assert_eq!((a + b).amount(), dec!(150.25));
    }

    #[test]
    fn test_subtraction() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.25));
        assert_eq!((a - b).amount(), dec!(49.75));
    }

    #[test]
    fn test_subtraction_can_go_negative() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(25.00));
        assert_eq!((a - b).amount(), dec!(-15.00));
    }

    #[test]
    fn test_checked_add_matches_operator() {
        let a = Money::new(dec!(1.10));
        let b = Money::new(dec!(2.20));
        assert_eq!(a.checked_add(&b).unwrap(), a + b);
    }

    #[test]
    fn test_negation() {
        let m = Money::new(dec!(42.00));
        assert_eq!((-m).amount(), dec!(-42.00));
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_parse_whole_number() {
        let m: Money = "100".parse().unwrap();
        assert_eq!(m.amount(), dec!(100));
    }

    #[test]
    fn test_parse_two_decimals() {
        let m: Money = "100.50".parse().unwrap();
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let m: Money = "  42.00 ".parse().unwrap();
        assert_eq!(m.amount(), dec!(42.00));
    }

    #[test]
    fn test_parse_rejects_three_decimals() {
        assert!(matches!(
            "10.123".parse::<Money>(),
            Err(MoneyError::ExcessiveScale(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(
            "abc".parse::<Money>(),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_accepts_negative_amounts() {
        // The domain rejects non-positive amounts; parsing itself does not.
        let m: Money = "-5.00".parse().unwrap();
        assert!(m.is_negative());
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_pads_to_two_decimals() {
        assert_eq!(Money::new(dec!(7)).to_string(), "7.00");
        assert_eq!(Money::new(dec!(7.5)).to_string(), "7.50");
    }
}

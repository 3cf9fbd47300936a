//! Unit tests for the Money module
//!
//! Tests cover money creation, display-text parsing and rendering,
//! currency handling, and edge cases.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_zero_is_not_negative() {
        let m = Money::zero(Currency::EUR);
        assert_eq!(m.amount(), dec!(0));
        assert!(!m.is_negative());
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_parses_claim_amount_text() {
        let m = Money::parse_display("$15,750.00").unwrap();
        assert_eq!(m, Money::new(dec!(15750.00), Currency::USD));
    }

    #[test]
    fn test_parses_without_grouping() {
        let m = Money::parse_display("$850").unwrap();
        assert_eq!(m.amount(), dec!(850));
    }

    #[test]
    fn test_parses_surrounding_whitespace() {
        let m = Money::parse_display("  £42.10 ").unwrap();
        assert_eq!(m.currency(), Currency::GBP);
        assert_eq!(m.amount(), dec!(42.10));
    }

    #[test]
    fn test_parses_negative_amount() {
        let m = Money::parse_display("-$12.50").unwrap();
        assert!(m.is_negative());
        assert_eq!(m.amount(), dec!(-12.50));
    }

    #[test]
    fn test_rejects_missing_symbol() {
        let result = Money::parse_display("2,500.00");
        assert!(matches!(result, Err(MoneyError::UnknownCurrency(_))));
    }

    #[test]
    fn test_rejects_non_numeric_amount() {
        let result = Money::parse_display("$twelve");
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_rejects_symbol_only() {
        let result = Money::parse_display("$");
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_string_small_amount() {
        let m = Money::new(dec!(99.5), Currency::USD);
        assert_eq!(m.to_display_string(), "$99.50");
    }

    #[test]
    fn test_display_string_exact_thousand() {
        let m = Money::new(dec!(1000), Currency::USD);
        assert_eq!(m.to_display_string(), "$1,000.00");
    }

    #[test]
    fn test_display_string_negative() {
        let m = Money::new(dec!(-2500), Currency::USD);
        assert_eq!(m.to_display_string(), "-$2,500.00");
    }

    #[test]
    fn test_display_string_jpy_has_no_fraction() {
        let m = Money::new(dec!(1234567), Currency::JPY);
        assert_eq!(m.to_display_string(), "¥1,234,567");
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.25), Currency::USD);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(150.25));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(100.00), Currency::CAD);
        assert_eq!(
            a.checked_add(&b),
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "CAD".to_string()))
        );
    }

    #[test]
    fn test_checked_add_overflow_is_an_error() {
        let huge = Money::parse_display("$79,228,162,514,264,337,593,543,950,335").unwrap();
        assert_eq!(huge.checked_add(&huge), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_checked_add_negative_amounts() {
        let a = Money::new(dec!(-20.00), Currency::USD);
        let b = Money::new(dec!(5.50), Currency::USD);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(-14.50));
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_currency_serializes_uppercase() {
        let json = serde_json::to_string(&Currency::USD).unwrap();
        assert_eq!(json, "\"USD\"");
    }
}

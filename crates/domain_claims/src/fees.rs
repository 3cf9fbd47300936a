//! Claim processing fees

use rust_decimal_macros::dec;

use core_kernel::Money;

/// Returns the processing fee charged for a claim of the given amount.
///
/// Fees are tiered: up to 1,000 costs 25.00, up to 5,000 costs 50.00, and
/// anything larger costs 100.00, in the claim's own currency.
pub fn processing_fee(amount: &Money) -> Money {
    let fee = if amount.amount() <= dec!(1000) {
        dec!(25.00)
    } else if amount.amount() <= dec!(5000) {
        dec!(50.00)
    } else {
        dec!(100.00)
    };
    Money::new(fee, amount.currency())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;

    #[test]
    fn test_fee_tiers() {
        let fee = |amount| processing_fee(&Money::new(amount, Currency::USD)).amount();

        assert_eq!(fee(dec!(500)), dec!(25.00));
        assert_eq!(fee(dec!(1000)), dec!(25.00));
        assert_eq!(fee(dec!(1000.01)), dec!(50.00));
        assert_eq!(fee(dec!(5000)), dec!(50.00));
        assert_eq!(fee(dec!(10000)), dec!(100.00));
    }

    #[test]
    fn test_fee_keeps_currency() {
        let fee = processing_fee(&Money::new(dec!(20), Currency::EUR));
        assert_eq!(fee.currency(), Currency::EUR);
    }
}

//! Invoice payment state.
//!
//! `paid_date` is set the first time an invoice is marked paid, kept while it
//! stays paid, and cleared whenever it is marked unpaid.

use crate::types::Date;

/// Compute the `paid_date` an invoice should have after an update.
///
/// - not yet dated and now paid: `today`
/// - now unpaid: `None`
/// - already dated and still paid: the existing date
pub fn next_paid_date(current: Option<Date>, paid: bool, today: Date) -> Option<Date> {
    match (current, paid) {
        (_, false) => None,
        (None, true) => Some(today),
        (Some(existing), true) => Some(existing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_payment_sets_today() {
        let today = date(2024, 3, 15);
        assert_eq!(next_paid_date(None, true, today), Some(today));
    }

    #[test]
    fn repeated_payment_keeps_original_date() {
        let first = date(2024, 1, 2);
        let today = date(2024, 3, 15);
        assert_eq!(next_paid_date(Some(first), true, today), Some(first));
    }

    #[test]
    fn unpaying_clears_existing_date() {
        let first = date(2024, 1, 2);
        assert_eq!(next_paid_date(Some(first), false, date(2024, 3, 15)), None);
    }

    #[test]
    fn unpaid_stays_undated() {
        assert_eq!(next_paid_date(None, false, date(2024, 3, 15)), None);
    }

    #[test]
    fn pay_unpay_pay_restamps() {
        let day1 = date(2024, 1, 1);
        let day2 = date(2024, 2, 1);
        let day3 = date(2024, 3, 1);

        let after_pay = next_paid_date(None, true, day1);
        let after_unpay = next_paid_date(after_pay, false, day2);
        let after_repay = next_paid_date(after_unpay, true, day3);

        assert_eq!(after_pay, Some(day1));
        assert_eq!(after_unpay, None);
        assert_eq!(after_repay, Some(day3));
    }
}

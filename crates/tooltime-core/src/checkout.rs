//! Checkout validation

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::catalog::Tool;

/// Why a checkout was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Rental days below one.
    #[error("A tool must be rented for at least one day.")]
    NoRentalDays,

    /// Discount below zero.
    #[error("A negative rental discount is not allowed.")]
    NegativeDiscount,

    /// Discount above one hundred percent.
    #[error("A discount greater than 100% is not allowed.")]
    DiscountTooLarge,

    /// The due date would fall outside the representable calendar.
    #[error("A rental of {0} days from the checkout date runs past the end of the calendar.")]
    PeriodTooLong(i64),
}

/// A validated request to rent one tool.
///
/// The checkout date counts as the first rental day, so a one-day rental is
/// due back the same day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    tool: Tool,
    rental_days: u32,
    discount_percent: u32,
    checkout_date: NaiveDate,
    due_date: NaiveDate,
}

impl Checkout {
    /// Validate and build a checkout.
    ///
    /// Inputs are signed so out-of-range values from the counter are
    /// reported with a reason rather than wrapped.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NoRentalDays`] if `rental_days < 1`,
    /// [`CheckoutError::NegativeDiscount`] if `discount_percent < 0`,
    /// [`CheckoutError::DiscountTooLarge`] if `discount_percent > 100`, and
    /// [`CheckoutError::PeriodTooLong`] if the due date can't be computed.
    pub fn new(
        tool: Tool,
        rental_days: i64,
        discount_percent: i64,
        checkout_date: NaiveDate,
    ) -> Result<Self, CheckoutError> {
        if rental_days < 1 {
            return Err(CheckoutError::NoRentalDays);
        }
        if discount_percent < 0 {
            return Err(CheckoutError::NegativeDiscount);
        }
        if discount_percent > 100 {
            return Err(CheckoutError::DiscountTooLarge);
        }

        let days =
            u32::try_from(rental_days).map_err(|_| CheckoutError::PeriodTooLong(rental_days))?;
        let due_date = checkout_date
            .checked_add_days(Days::new(u64::from(days - 1)))
            .ok_or(CheckoutError::PeriodTooLong(rental_days))?;

        Ok(Self {
            tool,
            rental_days: days,
            discount_percent: discount_percent as u32,
            checkout_date,
            due_date,
        })
    }

    /// The tool being rented.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Length of the rental in days, at least one.
    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    /// Discount percentage, 0 through 100.
    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }

    /// Day the tool leaves the store.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// Last day of the rental, inclusive.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn jakr() -> Tool {
        Catalog::standard().find("JAKR").unwrap().clone()
    }

    fn sept_3_2015() -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 9, 3).unwrap()
    }

    #[test]
    fn rejects_discount_over_100() {
        let err = Checkout::new(jakr(), 5, 101, sept_3_2015()).unwrap_err();
        assert_eq!(err, CheckoutError::DiscountTooLarge);
        assert_eq!(err.to_string(), "A discount greater than 100% is not allowed.");
    }

    #[test]
    fn rejects_negative_discount() {
        let err = Checkout::new(jakr(), 5, -1, sept_3_2015()).unwrap_err();
        assert_eq!(err.to_string(), "A negative rental discount is not allowed.");
    }

    #[test]
    fn rejects_zero_days() {
        let err = Checkout::new(jakr(), 0, 10, sept_3_2015()).unwrap_err();
        assert_eq!(err.to_string(), "A tool must be rented for at least one day.");
        assert_eq!(
            Checkout::new(jakr(), -3, 10, sept_3_2015()),
            Err(CheckoutError::NoRentalDays)
        );
    }

    #[test]
    fn rejects_period_past_calendar_end() {
        assert!(matches!(
            Checkout::new(jakr(), i64::from(u32::MAX) + 1, 0, sept_3_2015()),
            Err(CheckoutError::PeriodTooLong(_))
        ));
        assert!(matches!(
            Checkout::new(jakr(), 2, 0, NaiveDate::MAX),
            Err(CheckoutError::PeriodTooLong(2))
        ));
    }

    #[test]
    fn boundary_values_accepted() {
        let one_day = Checkout::new(jakr(), 1, 0, sept_3_2015()).unwrap();
        assert_eq!(one_day.due_date(), sept_3_2015());

        let full = Checkout::new(jakr(), 5, 100, sept_3_2015()).unwrap();
        assert_eq!(full.discount_percent(), 100);
        assert_eq!(full.rental_days(), 5);
        assert_eq!(full.due_date(), NaiveDate::from_ymd_opt(2015, 9, 7).unwrap());
    }
}

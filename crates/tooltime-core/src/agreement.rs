//! Rental agreement
//!
//! Turns a validated [`Checkout`] into the figures printed on the agreement.
//! Everything is computed once up front; the agreement is immutable.
//!
//! Billing walks each day of the rental period, checkout day through due
//! date inclusive. A day is skipped when it is an observed holiday and the
//! tool type is not billed for holidays. Otherwise it is billed according
//! to whether it is a weekday or a weekend day.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use tracing::debug;

use tooltime_schema::{Cents, ChargePolicy, ToolCode, ToolType};

use crate::checkout::Checkout;
use crate::dates::format_short;
use crate::holiday::Holiday;

/// The priced outcome of a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalAgreement {
    tool_code: ToolCode,
    tool_type: ToolType,
    tool_brand: String,
    rental_days: u32,
    checkout_date: NaiveDate,
    due_date: NaiveDate,
    daily_charge: Cents,
    charge_days: u32,
    pre_discount_charge: Cents,
    discount_percent: u32,
    discount_amount: Cents,
    final_charge: Cents,
}

impl RentalAgreement {
    /// Price a checkout.
    ///
    /// Every day from the checkout date through the due date is checked,
    /// the checkout day included. A day is a holiday when it is that
    /// holiday's observed date in its own year, so a holiday on the
    /// checkout day is not billed to types that skip holidays.
    pub fn new(checkout: &Checkout) -> Self {
        let tool = checkout.tool();
        let policy = tool.tool_type.policy();
        let daily_charge = tool.tool_type.daily_charge();

        let charge_days = checkout
            .checkout_date()
            .iter_days()
            .take(checkout.rental_days() as usize)
            .filter(|day| is_billed(policy, *day))
            .count() as u32;

        let pre_discount_charge = daily_charge * charge_days;
        let discount_amount = pre_discount_charge.percent_of(checkout.discount_percent());
        let final_charge = pre_discount_charge - discount_amount;

        debug!(
            tool = %tool.code,
            rental_days = checkout.rental_days(),
            charge_days,
            final_charge = final_charge.get(),
            "priced rental agreement"
        );

        Self {
            tool_code: tool.code.clone(),
            tool_type: tool.tool_type,
            tool_brand: tool.brand.clone(),
            rental_days: checkout.rental_days(),
            checkout_date: checkout.checkout_date(),
            due_date: checkout.due_date(),
            daily_charge,
            charge_days,
            pre_discount_charge,
            discount_percent: checkout.discount_percent(),
            discount_amount,
            final_charge,
        }
    }

    /// Code of the rented tool.
    pub fn tool_code(&self) -> &ToolCode {
        &self.tool_code
    }

    /// Type of the rented tool.
    pub fn tool_type(&self) -> ToolType {
        self.tool_type
    }

    /// Brand of the rented tool.
    pub fn tool_brand(&self) -> &str {
        &self.tool_brand
    }

    /// Number of days rented, including non-billed days.
    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    /// Day the tool was checked out.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// Day the tool is due back.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Charge per billed day.
    pub fn daily_charge(&self) -> Cents {
        self.daily_charge
    }

    /// Days in the rental period that are billed.
    pub fn charge_days(&self) -> u32 {
        self.charge_days
    }

    /// Charge before discount.
    pub fn pre_discount_charge(&self) -> Cents {
        self.pre_discount_charge
    }

    /// Discount percentage from the checkout.
    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }

    /// Discount taken off the pre-discount charge.
    pub fn discount_amount(&self) -> Cents {
        self.discount_amount
    }

    /// Amount owed.
    pub fn final_charge(&self) -> Cents {
        self.final_charge
    }

    /// The printable agreement, one `Label: value` line per field.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tool code: {}", self.tool_code)?;
        writeln!(f, "Tool type: {}", self.tool_type.description())?;
        writeln!(f, "Tool brand: {}", self.tool_brand)?;
        writeln!(f, "Rental days: {}", self.rental_days)?;
        writeln!(f, "Check out date: {}", format_short(self.checkout_date))?;
        writeln!(f, "Due date: {}", format_short(self.due_date))?;
        writeln!(f, "Daily rental charge: {}", self.daily_charge)?;
        writeln!(f, "Charge days: {}", self.charge_days)?;
        writeln!(f, "Pre-discount charge: {}", self.pre_discount_charge)?;
        writeln!(f, "Discount percent: {}%", self.discount_percent)?;
        writeln!(f, "Discount amount: {}", self.discount_amount)?;
        writeln!(f, "Final charge: {}", self.final_charge)
    }
}

fn is_billed(policy: ChargePolicy, day: NaiveDate) -> bool {
    if !policy.holiday && Holiday::on(day).is_some() {
        return false;
    }
    match day.weekday() {
        Weekday::Sat | Weekday::Sun => policy.weekend,
        _ => policy.weekday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn agreement(
        code: &str,
        days: i64,
        discount: i64,
        (y, m, d): (i32, u32, u32),
    ) -> RentalAgreement {
        let tool = Catalog::standard().find(code).unwrap().clone();
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        RentalAgreement::new(&Checkout::new(tool, days, discount, date).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ladder_over_independence_day_with_10_percent() {
        let a = agreement("LADW", 3, 10, (2020, 7, 2));
        assert_eq!(a.tool_code().as_str(), "LADW");
        assert_eq!(a.tool_type(), ToolType::Ladder);
        assert_eq!(a.tool_brand(), "Werner");
        assert_eq!(a.rental_days(), 3);
        assert_eq!(a.daily_charge(), Cents::new(149));
        assert_eq!(a.checkout_date(), date(2020, 7, 2));
        assert_eq!(a.due_date(), date(2020, 7, 4));
        assert_eq!(a.charge_days(), 2);
        assert_eq!(a.pre_discount_charge(), Cents::new(298));
        assert_eq!(a.discount_percent(), 10);
        assert_eq!(a.discount_amount(), Cents::new(29));
        assert_eq!(a.final_charge(), Cents::new(269));
    }

    #[test]
    fn chainsaw_skips_weekend_but_bills_holiday() {
        let a = agreement("CHNS", 5, 25, (2015, 7, 2));
        assert_eq!(a.tool_type(), ToolType::Chainsaw);
        assert_eq!(a.tool_brand(), "Stihl");
        assert_eq!(a.due_date(), date(2015, 7, 6));
        assert_eq!(a.daily_charge(), Cents::new(149));
        assert_eq!(a.charge_days(), 3);
        assert_eq!(a.pre_discount_charge(), Cents::new(447));
        assert_eq!(a.discount_amount(), Cents::new(111));
        assert_eq!(a.final_charge(), Cents::new(336));
    }

    #[test]
    fn jackhammer_over_labor_day_weekend() {
        let a = agreement("JAKD", 6, 0, (2015, 9, 3));
        assert_eq!(a.tool_type(), ToolType::Jackhammer);
        assert_eq!(a.tool_brand(), "DeWalt");
        assert_eq!(a.due_date(), date(2015, 9, 8));
        assert_eq!(a.daily_charge(), Cents::new(299));
        assert_eq!(a.charge_days(), 3);
        assert_eq!(a.pre_discount_charge(), Cents::new(897));
        assert_eq!(a.discount_amount(), Cents::ZERO);
        assert_eq!(a.final_charge(), Cents::new(897));
    }

    #[test]
    fn jackhammer_nine_days_over_independence_day() {
        let a = agreement("JAKR", 9, 0, (2015, 7, 2));
        assert_eq!(a.tool_brand(), "Rigid");
        assert_eq!(a.due_date(), date(2015, 7, 10));
        assert_eq!(a.charge_days(), 6);
        assert_eq!(a.pre_discount_charge(), Cents::new(1794));
        assert_eq!(a.discount_amount(), Cents::ZERO);
        assert_eq!(a.final_charge(), Cents::new(1794));
    }

    #[test]
    fn jackhammer_half_off_drops_fractional_cent() {
        let a = agreement("JAKR", 4, 50, (2020, 7, 2));
        assert_eq!(a.due_date(), date(2020, 7, 5));
        assert_eq!(a.charge_days(), 1);
        assert_eq!(a.pre_discount_charge(), Cents::new(299));
        assert_eq!(a.discount_percent(), 50);
        assert_eq!(a.discount_amount(), Cents::new(149));
        assert_eq!(a.final_charge(), Cents::new(150));
    }

    #[test]
    fn holiday_on_checkout_day_is_not_billed() {
        // 2020-07-03 is the observed Independence Day
        let a = agreement("JAKR", 1, 0, (2020, 7, 3));
        assert_eq!(a.charge_days(), 0);
        assert_eq!(a.final_charge(), Cents::ZERO);
    }

    #[test]
    fn long_rental_skips_holidays_in_every_year() {
        // 2015-07-01 through 2016-09-30 covers two Independence Days and two Labor Days.
        let a = agreement("JAKR", 458, 0, (2015, 7, 1));
        assert_eq!(a.due_date(), date(2016, 9, 30));

        let weekdays = date(2015, 7, 1)
            .iter_days()
            .take(458)
            .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
            .count() as u32;
        assert_eq!(a.charge_days(), weekdays - 4);
    }

    #[test]
    fn full_discount_is_free() {
        let a = agreement("LADW", 7, 100, (2021, 1, 4));
        assert_eq!(a.charge_days(), 7);
        assert_eq!(a.discount_amount(), a.pre_discount_charge());
        assert_eq!(a.final_charge(), Cents::ZERO);
    }

    #[test]
    fn report_format() {
        let a = agreement("LADW", 3, 10, (2020, 7, 2));
        let expected = "\
Tool code: LADW
Tool type: Ladder
Tool brand: Werner
Rental days: 3
Check out date: 07/02/20
Due date: 07/04/20
Daily rental charge: $1.49
Charge days: 2
Pre-discount charge: $2.98
Discount percent: 10%
Discount amount: $0.29
Final charge: $2.69
";
        assert_eq!(a.report(), expected);
    }

    #[test]
    fn serializes_to_json() {
        let a = agreement("JAKD", 6, 0, (2015, 9, 3));
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["tool_code"], "JAKD");
        assert_eq!(json["tool_type"], "jackhammer");
        assert_eq!(json["due_date"], "2015-09-08");
        assert_eq!(json["final_charge"], 897);
    }
}

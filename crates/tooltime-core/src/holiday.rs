//! Holiday calendar
//!
//! The store closes billing for two holidays. Independence Day moves to the
//! nearest weekday when July 4th lands on a weekend; Labor Day is always the
//! first Monday in September.

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// A holiday observed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holiday {
    /// July 4th, moved to Friday or Monday when it falls on a weekend.
    IndependenceDay,
    /// First Monday in September.
    LaborDay,
}

impl Holiday {
    /// Every holiday, in calendar order.
    pub const ALL: [Holiday; 2] = [Holiday::IndependenceDay, Holiday::LaborDay];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Holiday::IndependenceDay => "Independence Day",
            Holiday::LaborDay => "Labor Day",
        }
    }

    /// The date this holiday is observed in `year`.
    ///
    /// Returns `None` only for years outside the range `chrono` can represent.
    pub fn observed_in(self, year: i32) -> Option<NaiveDate> {
        match self {
            Holiday::IndependenceDay => {
                let actual = NaiveDate::from_ymd_opt(year, 7, 4)?;
                match actual.weekday() {
                    Weekday::Sat => actual.pred_opt(),
                    Weekday::Sun => actual.succ_opt(),
                    _ => Some(actual),
                }
            }
            Holiday::LaborDay => NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1),
        }
    }

    /// The next observance strictly after `from`.
    ///
    /// On this year's observed date itself, next year's date is returned.
    pub fn next_observed(self, from: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.observed_in(from.year())?;
        if from < this_year {
            Some(this_year)
        } else {
            self.observed_in(from.year() + 1)
        }
    }

    /// The holiday observed on `date`, if any.
    pub fn on(date: NaiveDate) -> Option<Holiday> {
        Holiday::ALL
            .into_iter()
            .find(|h| h.observed_in(date.year()) == Some(date))
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Date parsing and formatting for rental agreements.

use chrono::format::ParseErrorKind;
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Errors from parsing a checkout date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input matched neither `MM/DD/YY` nor `YYYY-MM-DD`.
    #[error("Unrecognized date `{0}` (expected MM/DD/YY or YYYY-MM-DD).")]
    Format(String),

    /// The fields parsed but do not name a real day (e.g. 02/30/21).
    #[error("`{0}` is not a valid calendar date.")]
    OutOfRange(String),
}

/// Parse a date as written on a rental agreement (`07/02/20`) or in ISO form.
///
/// Two-digit years are in the 2000s. A four-digit year is also accepted in
/// the slash form.
///
/// # Errors
///
/// Returns [`DateError::Format`] if the input is neither form and
/// [`DateError::OutOfRange`] if it names a day that does not exist.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let input = input.trim();
    let formats = if input.contains('-') {
        ISO_FORMATS
    } else {
        AGREEMENT_FORMATS
    };
    let mut impossible = false;

    for format in formats {
        match NaiveDate::parse_from_str(input, format) {
            Ok(date) => return settle_century(input, format, date),
            Err(err) => {
                impossible |= matches!(
                    err.kind(),
                    ParseErrorKind::OutOfRange | ParseErrorKind::Impossible
                );
            }
        }
    }

    if impossible {
        Err(DateError::OutOfRange(input.to_string()))
    } else {
        Err(DateError::Format(input.to_string()))
    }
}

const AGREEMENT_FORMATS: &[&str] = &["%m/%d/%y", "%m/%d/%Y"];
const ISO_FORMATS: &[&str] = &["%Y-%m-%d"];

/// Move `%y` years into the 2000s and insist on four digits for `%Y`.
fn settle_century(input: &str, format: &str, date: NaiveDate) -> Result<NaiveDate, DateError> {
    if format.ends_with("%y") {
        // chrono reads 69-99 as 19xx
        if date.year() < 2000 {
            return date
                .with_year(date.year() + 100)
                .ok_or_else(|| DateError::OutOfRange(input.to_string()));
        }
        return Ok(date);
    }

    if (1000..=9999).contains(&date.year()) {
        Ok(date)
    } else {
        Err(DateError::Format(input.to_string()))
    }
}

/// Format a date the way agreements print it: `MM/DD/YY`.
pub fn format_short(date: NaiveDate) -> String {
    date.format("%m/%d/%y").to_string()
}

//! Holidays command

use anyhow::{Result, bail};
use chrono::{Datelike, Local, NaiveDate};
use tooltime_core::Holiday;

use crate::ui::Output;
use crate::ui::table::holiday_table;

/// Show the dates holidays are observed on in `year` (default: this year),
/// or with `next`, each holiday's next observance after today.
pub fn holidays(year: Option<i32>, next: bool, output: &Output) -> Result<()> {
    let today = Local::now().date_naive();

    let (title, rows) = if next {
        ("Upcoming holidays".to_string(), upcoming(today))
    } else {
        let year = year.unwrap_or_else(|| today.year());
        (format!("Observed holidays, {year}"), observed_in(year))
    };

    if rows.len() != Holiday::ALL.len() {
        bail!("Requested dates are outside the supported calendar");
    }

    output.section(&title);
    output.data(holiday_table(&rows));

    Ok(())
}

fn observed_in(year: i32) -> Vec<(Holiday, NaiveDate)> {
    Holiday::ALL
        .into_iter()
        .filter_map(|h| h.observed_in(year).map(|date| (h, date)))
        .collect()
}

fn upcoming(from: NaiveDate) -> Vec<(Holiday, NaiveDate)> {
    let mut rows: Vec<_> = Holiday::ALL
        .into_iter()
        .filter_map(|h| h.next_observed(from).map(|date| (h, date)))
        .collect();
    rows.sort_by_key(|&(_, date)| date);
    rows
}

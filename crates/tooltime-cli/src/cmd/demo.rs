//! Demo command
//!
//! Prints the agreements for the store's reference checkouts. These always
//! use the standard catalog so the figures never drift.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tooltime_core::{Catalog, Checkout, RentalAgreement};

/// Reference checkouts: tool, rental days, discount, checkout date.
pub const SCENARIOS: [(&str, i64, i64, (i32, u32, u32)); 5] = [
    ("LADW", 3, 10, (2020, 7, 2)),
    ("CHNS", 5, 25, (2015, 7, 2)),
    ("JAKD", 6, 0, (2015, 9, 3)),
    ("JAKR", 9, 0, (2015, 7, 2)),
    ("JAKR", 4, 50, (2020, 7, 2)),
];

/// Price every reference checkout.
pub fn agreements() -> Result<Vec<RentalAgreement>> {
    let catalog = Catalog::standard();

    SCENARIOS
        .iter()
        .map(|&(code, days, discount, (y, m, d))| -> Result<RentalAgreement> {
            let tool = catalog.find(code)?.clone();
            let date = NaiveDate::from_ymd_opt(y, m, d)
                .with_context(|| format!("bad scenario date {y}-{m}-{d}"))?;
            let checkout = Checkout::new(tool, days, discount, date)?;
            Ok(RentalAgreement::new(&checkout))
        })
        .collect()
}

/// Print the reference agreements, separated by blank lines
pub fn demo() -> Result<()> {
    for agreement in agreements()? {
        println!("{}", agreement.report());
    }
    Ok(())
}

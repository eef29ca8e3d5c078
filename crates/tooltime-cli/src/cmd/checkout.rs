//! Checkout command

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::Path;
use tooltime_core::{Checkout, RentalAgreement, parse_date};

use crate::ui::Output;

/// Options for a single checkout, straight from the command line.
#[derive(Debug, Clone)]
pub struct CheckoutArgs<'a> {
    pub tool: &'a str,
    pub days: i64,
    pub discount: i64,
    pub date: Option<&'a str>,
    pub json: bool,
}

/// Validate a checkout, price it, and print the rental agreement.
pub fn checkout(
    args: &CheckoutArgs<'_>,
    catalog_path: Option<&Path>,
    output: &Output,
) -> Result<()> {
    let catalog = super::load_catalog(catalog_path)?;
    let tool = catalog.find(args.tool)?.clone();

    let date = match args.date {
        Some(raw) => {
            parse_date(raw).with_context(|| format!("Invalid checkout date '{raw}'"))?
        }
        None => today(),
    };

    let checkout = Checkout::new(tool, args.days, args.discount, date)?;
    let agreement = RentalAgreement::new(&checkout);

    if args.json {
        output.data(serde_json::to_string_pretty(&agreement)?);
    } else {
        // The report already ends in a newline
        print!("{}", agreement.report());
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

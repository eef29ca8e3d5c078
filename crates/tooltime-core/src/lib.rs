//! Core library for `ToolTime`.
//!
//! A clerk checks a tool out of the [`Catalog`] for some number of days at
//! some discount. [`Checkout::new`] validates the request and
//! [`RentalAgreement::new`] prices it:
//!
//! ```
//! use chrono::NaiveDate;
//! use tooltime_core::{Catalog, Checkout, RentalAgreement};
//!
//! let catalog = Catalog::standard();
//! let tool = catalog.find("LADW").unwrap().clone();
//! let date = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
//! let checkout = Checkout::new(tool, 3, 10, date).unwrap();
//!
//! let agreement = RentalAgreement::new(&checkout);
//! assert_eq!(agreement.charge_days(), 2);
//! assert_eq!(agreement.final_charge().to_string(), "$2.69");
//! ```

pub mod agreement;
pub mod catalog;
pub mod checkout;
pub mod dates;
pub mod holiday;
pub mod paths;

pub use agreement::RentalAgreement;
pub use catalog::{Catalog, CatalogError, Tool};
pub use checkout::{Checkout, CheckoutError};
pub use dates::{DateError, format_short, parse_date};
pub use holiday::Holiday;
pub use paths::*;

pub use tooltime_schema as schema;

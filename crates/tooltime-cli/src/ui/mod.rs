//! Terminal output
//!
//! Commands print through [`Output`], styled by [`Theme`]. Tabular listings
//! are built in [`table`] and rendered by `comfy-table`.

pub mod output;
pub mod table;
pub mod theme;

pub use output::Output;
pub use theme::Theme;

//! Table builders for listings.

use chrono::NaiveDate;
use comfy_table::presets::NOTHING;
use comfy_table::{Cell, CellAlignment, Table};

use tooltime_core::{Catalog, Holiday, format_short};

use super::theme::Theme;

fn base_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(header.to_vec());
    table
}

/// One row per tool: code, type, brand, daily charge and billed day classes.
pub fn catalog_table(catalog: &Catalog, theme: &Theme) -> Table {
    let mut table = base_table(&[
        "CODE", "TYPE", "BRAND", "DAILY", "WEEKDAY", "WEEKEND", "HOLIDAY",
    ]);

    for tool in catalog.iter() {
        let policy = tool.tool_type.policy();
        table.add_row(vec![
            Cell::new(tool.code.as_str()),
            Cell::new(tool.tool_type.description()),
            Cell::new(&tool.brand),
            Cell::new(tool.tool_type.daily_charge()).set_alignment(CellAlignment::Right),
            Cell::new(theme.icons.flag(policy.weekday)).set_alignment(CellAlignment::Center),
            Cell::new(theme.icons.flag(policy.weekend)).set_alignment(CellAlignment::Center),
            Cell::new(theme.icons.flag(policy.holiday)).set_alignment(CellAlignment::Center),
        ]);
    }

    table
}

/// One row per observed holiday.
pub fn holiday_table(rows: &[(Holiday, NaiveDate)]) -> Table {
    let mut table = base_table(&["HOLIDAY", "OBSERVED", "WEEKDAY"]);

    for (holiday, date) in rows {
        table.add_row(vec![
            Cell::new(holiday.name()),
            Cell::new(format_short(*date)),
            Cell::new(date.format("%A")),
        ]);
    }

    table
}

//! XML fragments written into the request form.

use crate::models::{MinuteBuckets, WorkEntry};
use crate::utils::formatting::{escape_xml, fmt_clock, fmt_hour};
use chrono::{Datelike, NaiveDate};

/// Data rows available on the printed form.
pub const DATA_ROWS: usize = 30;

const ROW_STYLE: &str = "ro4";
const CELL_STYLE: &str = "ce2";
const REASON_STYLE: &str = "ce3";
/// Remaining columns of the sheet after the ten data columns
const FILLER_CELL: &str =
    r#"<table:table-cell table:number-columns-repeated="16374" table:style-name="ce1"/>"#;

pub const HOLIDAY_MARKER: &str = "●";

/// String cell, or an empty styled cell when there is nothing to show.
pub fn ods_cell(value: &str, style: &str) -> String {
    if value.is_empty() {
        return format!(r#"<table:table-cell table:style-name="{style}"/>"#);
    }
    format!(
        r#"<table:table-cell office:value-type="string" table:style-name="{style}"><text:p>{}</text:p></table:table-cell>"#,
        escape_xml(value)
    )
}

/// Input cell of a header field; `attrs` are the template's own attributes.
pub fn field_cell(attrs: &str, value: &str) -> String {
    format!(
        r#"<table:table-cell office:value-type="string" {}><text:p>{}</text:p></table:table-cell>"#,
        attrs.trim_end(),
        escape_xml(value)
    )
}

pub fn entry_row(e: &WorkEntry) -> String {
    let end_label = if e.crosses_midnight() {
        e.end_label()
    } else {
        String::new()
    };
    let marker = if e.is_holiday { HOLIDAY_MARKER } else { "" };

    let cells = [
        ods_cell(&e.start_label(), CELL_STYLE),
        ods_cell(e.weekday(), CELL_STYLE),
        ods_cell(marker, CELL_STYLE),
        ods_cell(&fmt_clock(e.start_time), CELL_STYLE),
        ods_cell(&end_label, CELL_STYLE),
        ods_cell(&fmt_clock(e.end_time), CELL_STYLE),
        ods_cell(&e.reason, REASON_STYLE),
        ods_cell(&fmt_hour(e.result.holiday_excess), CELL_STYLE),
        ods_cell(&fmt_hour(e.result.overtime), CELL_STYLE),
        ods_cell(&fmt_hour(e.result.night), CELL_STYLE),
    ];

    format!(
        r#"<table:table-row table:style-name="{ROW_STYLE}">{}{FILLER_CELL}</table:table-row>"#,
        cells.concat()
    )
}

pub fn blank_row() -> String {
    format!(
        r#"<table:table-row table:style-name="{ROW_STYLE}"><table:table-cell table:number-columns-repeated="10" table:style-name="{REASON_STYLE}"/>{FILLER_CELL}</table:table-row>"#
    )
}

/// Exactly `DATA_ROWS` rows: the first entries, then blank rows.
pub fn data_rows(entries: &[WorkEntry]) -> String {
    (0..DATA_ROWS)
        .map(|i| entries.get(i).map(entry_row).unwrap_or_else(blank_row))
        .collect()
}

/// The three total cells, holiday-excess first like the data columns.
pub fn totals_cells(totals: &MinuteBuckets) -> String {
    [
        ods_cell(&fmt_hour(totals.holiday_excess), "ce5"),
        ods_cell(&fmt_hour(totals.overtime), "ce6"),
        ods_cell(&fmt_hour(totals.night), "ce7"),
    ]
    .concat()
}

/// "신청일 : 2025 년    3 월      7 일" with the form's fixed spacing.
pub fn application_date(d: NaiveDate) -> String {
    format!(
        r#"신청일 : {} 년 <text:s text:c="3"/>{:>2} 월 <text:s text:c="5"/>{:>2} 일"#,
        d.year(),
        d.month(),
        d.day()
    )
}

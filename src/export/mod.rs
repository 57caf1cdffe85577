//! Spreadsheet rendering of measurement series.
//!
//! Sheets are transposed relative to the records: each record is one column,
//! each field one row, so a series of calls reads left to right.

pub mod sheet;

pub use sheet::{save_custom, save_measurements, save_rts, SheetRecord};

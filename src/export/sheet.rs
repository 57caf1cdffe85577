use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use tracing::error;

use crate::error::ProbeError;
use crate::records::types::{MeasurementData, RtsData};

// Widths are padded past the longest rendered value so columns never clip.
const COLUMN_PADDING: usize = 5;

/// A record shape the export layer can lay out: row labels paired one-to-one
/// with rendered cell values in a single declared order.
///
/// Coupling labels and values in one place (instead of leaning on field
/// enumeration order) is what guards against silent row misalignment when a
/// record shape changes.
pub trait SheetRecord {
    fn row_labels() -> &'static [&'static str];

    /// Rendered cell values, in `row_labels()` order.
    fn cells(&self) -> Vec<String>;
}

impl SheetRecord for RtsData {
    fn row_labels() -> &'static [&'static str] {
        &[
            "Δ Stable memory pages",
            "Δ Total Memory",
            "Δ Allocated memory",
            "Δ Reclaimed memory",
            "Δ Heap memory",
            "Δ GC instructions",
            "Δ Mutator instructions",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.stable_memory_size.to_string(),
            self.memory_size.to_string(),
            self.total_allocation.to_string(),
            self.reclaimed.to_string(),
            self.heap_size.to_string(),
            self.collector_instructions.to_string(),
            self.mutator_instructions.to_string(),
        ]
    }
}

impl SheetRecord for MeasurementData {
    fn row_labels() -> &'static [&'static str] {
        &[
            "Δ Stable memory pages",
            "Δ Total Memory",
            "Δ Allocated memory",
            "Δ Reclaimed memory",
            "Δ Heap memory",
            "Δ Instructions",
            "Δ GC instructions",
            "Δ Mutator instructions",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.stable_memory_size.to_string(),
            self.memory_size.to_string(),
            self.total_allocation.to_string(),
            self.reclaimed.to_string(),
            self.heap_size.to_string(),
            self.instruction_count.to_string(),
            self.collector_instructions.to_string(),
            self.mutator_instructions.to_string(),
        ]
    }
}

/// Save measurement series to an `.xlsx` workbook, one sheet per name, one
/// column per measurement.
pub fn save_measurements(
    path: impl AsRef<Path>,
    sheet_names: &[&str],
    headers: &[&str],
    data: &[Vec<MeasurementData>],
) -> Result<(), ProbeError> {
    save_custom(path, sheet_names, headers, data)
}

/// Save plain snapshot series, without the measured instruction-count row.
pub fn save_rts(
    path: impl AsRef<Path>,
    sheet_names: &[&str],
    headers: &[&str],
    data: &[Vec<RtsData>],
) -> Result<(), ProbeError> {
    save_custom(path, sheet_names, headers, data)
}

/// Generic entry point for any [`SheetRecord`] shape.
///
/// When the sheet-name and data-series counts disagree, the mismatch is
/// logged and nothing is written; the call still returns `Ok`.
pub fn save_custom<T: SheetRecord>(
    path: impl AsRef<Path>,
    sheet_names: &[&str],
    headers: &[&str],
    data: &[Vec<T>],
) -> Result<(), ProbeError> {
    if sheet_names.len() != data.len() {
        error!(
            sheets = sheet_names.len(),
            series = data.len(),
            "sheet name and data series counts differ, nothing written"
        );
        return Ok(());
    }

    let mut workbook = Workbook::new();
    for (name, records) in sheet_names.iter().zip(data) {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name)?;
        fill_sheet(worksheet, headers, records)?;
    }
    workbook.save(path.as_ref())?;
    Ok(())
}

fn fill_sheet<T: SheetRecord>(
    worksheet: &mut Worksheet,
    headers: &[&str],
    records: &[T],
) -> Result<(), ProbeError> {
    let labels = T::row_labels();
    let columns: Vec<Vec<String>> = records.iter().map(|r| r.cells()).collect();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, column_index(col)?, *header)?;
    }
    for (row, label) in labels.iter().enumerate() {
        worksheet.write_string(row as u32 + 1, 0, *label)?;
        for (col, cells) in columns.iter().enumerate() {
            let value = cells.get(row).map(String::as_str).unwrap_or("");
            worksheet.write_string(row as u32 + 1, column_index(col + 1)?, value)?;
        }
    }

    let header_len = |col: usize| headers.get(col).map_or(0, |h| h.chars().count());

    let label_max = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = label_max.max(header_len(0)) + COLUMN_PADDING;
    worksheet.set_column_width(0, width as f64)?;

    for (col, cells) in columns.iter().enumerate() {
        let cell_max = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);
        let width = cell_max.max(header_len(col + 1)) + COLUMN_PADDING;
        worksheet.set_column_width(column_index(col + 1)?, width as f64)?;
    }
    Ok(())
}

// A truncating cast here would wrap wide inputs back onto the label column;
// out-of-range indexes must fail the export instead.
fn column_index(col: usize) -> Result<u16, ProbeError> {
    u16::try_from(col)
        .map_err(|_| ProbeError::Export(XlsxError::RowColumnLimitError))
}

//! Workbook decoding backed by calamine
//!
//! Format is sniffed from the bytes, so xlsx, xlsm, xlsb, xls and ods all
//! decode through the same entry point.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use padsched_core::{Cell, RawGrid, RosterError, Sheet, Workbook, WorkbookDecoder};
use tracing::debug;

/// [`WorkbookDecoder`] using calamine's auto-detecting reader
#[derive(Clone, Copy, Debug, Default)]
pub struct CalamineDecoder;

impl CalamineDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl WorkbookDecoder for CalamineDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Workbook, RosterError> {
        let mut sheets = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| RosterError::Decode(e.to_string()))?;

        let names = sheets.sheet_names();
        if names.is_empty() {
            return Err(RosterError::NoSheets);
        }

        let mut workbook = Workbook::default();
        for name in names {
            let range = sheets
                .worksheet_range(&name)
                .map_err(|e| RosterError::SheetRead {
                    sheet: name.clone(),
                    message: e.to_string(),
                })?;
            let rows: Vec<Vec<Cell>> = range
                .rows()
                .map(|row| row.iter().map(convert_cell).collect())
                .collect();
            debug!(sheet = %name, rows = rows.len(), "decoded sheet");
            workbook.sheets.push(Sheet::new(name, RawGrid::new(rows)));
        }
        Ok(workbook)
    }
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        // ISO strings only come from ods; they are timestamps, not free text
        Data::DateTimeIso(_) | Data::DurationIso(_) => Cell::Number(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_scalar_cells() {
        assert_eq!(convert_cell(&Data::Empty), Cell::Empty);
        assert_eq!(convert_cell(&Data::String("8:00am".into())), Cell::text("8:00am"));
        assert_eq!(convert_cell(&Data::Float(1.5)), Cell::Number(1.5));
        assert_eq!(convert_cell(&Data::Int(7)), Cell::Number(7.0));
        assert_eq!(convert_cell(&Data::Bool(true)), Cell::Bool(true));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = CalamineDecoder::new().decode(b"not a spreadsheet").unwrap_err();
        assert!(matches!(err, RosterError::Decode(_)));
    }
}

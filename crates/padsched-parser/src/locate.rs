//! Sheet selection and header-row discovery
//!
//! Roster exports carry title blocks, blank spacer rows and notes above the
//! real column titles, so nothing about the header position is assumed. The
//! header is the first row with a cell containing [`ANCHOR`].

use padsched_core::{Cell, RawGrid, RosterError, RosterTable, Sheet, Workbook};
use tracing::debug;

/// Text marking the column-title row
pub const ANCHOR: &str = "Associate Name";

/// Sheet-name markers, highest priority first
pub const SHEET_MARKERS: [&str; 2] = ["Rostered", "Work Blocks"];

/// Pick the roster sheet.
///
/// Sheets are scanned in file order and the first whose name contains any
/// marker wins; with no match the first sheet is used.
pub fn select_sheet(workbook: &Workbook) -> Result<&Sheet, RosterError> {
    let marked = workbook
        .sheets
        .iter()
        .find(|sheet| SHEET_MARKERS.iter().any(|m| sheet.name.contains(m)));
    let chosen = match marked {
        Some(sheet) => sheet,
        None => {
            debug!(sheets = ?workbook.sheet_names(), "no roster sheet name matched, using the first sheet");
            workbook.sheets.first().ok_or(RosterError::NoSheets)?
        }
    };
    debug!(sheet = %chosen.name, "selected roster sheet");
    Ok(chosen)
}

/// Index of the first row with a cell satisfying `pred`
pub fn find_row(grid: &RawGrid, pred: impl Fn(&Cell) -> bool) -> Option<usize> {
    grid.rows.iter().position(|row| row.iter().any(&pred))
}

/// True when the cell's text form contains the anchor
pub fn is_anchor(cell: &Cell) -> bool {
    match cell {
        Cell::Text(s) => s.contains(ANCHOR),
        Cell::Empty => false,
        other => other.to_text().contains(ANCHOR),
    }
}

/// Re-derive headers from the anchor row of `sheet`.
///
/// Rows below the header are padded or truncated to the header width;
/// rows with every cell blank are dropped.
pub fn locate_table(sheet: &Sheet) -> Result<RosterTable, RosterError> {
    let header_idx = find_row(&sheet.grid, is_anchor).ok_or_else(|| RosterError::HeaderNotFound {
        sheet: sheet.name.clone(),
    })?;
    debug!(sheet = %sheet.name, row = header_idx, "found header row");

    let header_row = &sheet.grid.rows[header_idx];
    let width = header_row.len().max(sheet.grid.width());
    let headers: Vec<Option<String>> = (0..width)
        .map(|col| header_row.get(col).and_then(|c| c.as_str()).map(str::to_string))
        .collect();

    let rows = sheet.grid.rows[header_idx + 1..]
        .iter()
        .filter(|row| !row.iter().all(Cell::is_blank))
        .map(|row| {
            let mut cells: Vec<Cell> = row.iter().take(width).cloned().collect();
            cells.resize(width, Cell::Empty);
            cells
        })
        .collect();

    Ok(RosterTable::new(headers, rows))
}

//! # padsched-core
//!
//! Core domain model and traits for the padsched roster renderer.
//!
//! This crate provides:
//! - Grid types: `Cell`, `RawGrid`, `Sheet`, `Workbook`
//! - Roster types: `RosterTable`, `ShiftRecord`, `ShiftGroup`, `DaySchedule`
//! - Core traits: `WorkbookDecoder`, `Renderer`
//! - Shift grouping (see [`grouping`])
//! - Error types
//!
//! ## Example
//!
//! ```rust
//! use padsched_core::{group_shifts, DaySchedule, ShiftRecord};
//!
//! let records = vec![
//!     ShiftRecord::new(480, "8:00am", "Alice"),
//!     ShiftRecord::new(555, "9:15am", "Carol"),
//!     ShiftRecord::new(480, "8:00am", "Bob"),
//! ];
//! let groups = group_shifts(&records);
//! assert_eq!(groups[0].associates, vec!["Alice", "Bob"]);
//!
//! let schedule = DaySchedule::new("Mon", "Dana", groups);
//! assert_eq!(schedule.total_rows(), 3);
//! assert_eq!(schedule.file_name(), "schedule_Mon.png");
//! ```

pub mod grouping;

pub use grouping::group_shifts;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Grid
// ============================================================================

/// A single decoded spreadsheet cell
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    /// Numbers, including date/time cells as their serial value
    Number(f64),
    Bool(bool),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// The cell's string content, if it is a text cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for empty cells and whitespace-only text
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) | Cell::Bool(_) => false,
        }
    }

    /// Render the cell as text.
    ///
    /// Whole numbers print without a fractional part, so an id column
    /// holding `1042.0` reads back as `"1042"`.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// Rows of cells with no header assumption
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawGrid {
    pub rows: Vec<Vec<Cell>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Build a grid from string rows; empty strings become `Cell::Empty`
    pub fn from_strings(rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|s| if s.is_empty() { Cell::Empty } else { Cell::text(*s) })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Widest row length
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// A named worksheet
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub grid: RawGrid,
}

impl Sheet {
    pub fn new(name: impl Into<String>, grid: RawGrid) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }
}

/// Decoded workbook: sheets in file order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

// ============================================================================
// Roster
// ============================================================================

/// Header-normalized roster table.
///
/// `headers[i]` is the label of column `i`; only text header cells carry a
/// label. Every row has exactly `headers.len()` cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RosterTable {
    pub headers: Vec<Option<String>>,
    pub rows: Vec<Vec<Cell>>,
}

impl RosterTable {
    pub fn new(headers: Vec<Option<String>>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn header(&self, col: usize) -> Option<&str> {
        self.headers.get(col).and_then(|h| h.as_deref())
    }

    /// First column whose label satisfies `pred`
    pub fn find_column(&self, pred: impl Fn(&str) -> bool) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.as_deref().is_some_and(&pred))
    }

    /// Cell at (row, col); out-of-range positions read as empty
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY)
    }
}

/// One associate's parsed shift start for a day
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Minutes since midnight; malformed input may exceed a day
    pub minutes: u32,
    /// Time text as written with a lowercased meridiem suffix ("9:15am", "14:30")
    pub label: String,
    pub associate: String,
}

impl ShiftRecord {
    pub fn new(minutes: u32, label: impl Into<String>, associate: impl Into<String>) -> Self {
        Self {
            minutes,
            label: label.into(),
            associate: associate.into(),
        }
    }
}

/// Associates sharing one (minutes, label) start
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftGroup {
    pub minutes: u32,
    pub label: String,
    /// Table order, duplicates kept
    pub associates: Vec<String>,
}

impl ShiftGroup {
    pub fn new(minutes: u32, label: impl Into<String>) -> Self {
        Self {
            minutes,
            label: label.into(),
            associates: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.associates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.associates.is_empty()
    }
}

/// Everything one render needs: the day, who launches it, and its groups
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DaySchedule {
    pub day_key: String,
    pub launcher: String,
    pub groups: Vec<ShiftGroup>,
}

impl DaySchedule {
    pub fn new(day_key: impl Into<String>, launcher: impl Into<String>, groups: Vec<ShiftGroup>) -> Self {
        Self {
            day_key: day_key.into(),
            launcher: launcher.into(),
            groups,
        }
    }

    /// Associates across all groups
    pub fn total_rows(&self) -> usize {
        self.groups.iter().map(ShiftGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Suggested output file name
    pub fn file_name(&self) -> String {
        format!("schedule_{}.png", self.day_key)
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Bytes-to-grid decoding service
pub trait WorkbookDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Workbook, RosterError>;
}

/// Output rendering
pub trait Renderer {
    type Output;

    /// Render a day's schedule to the output format
    fn render(&self, schedule: &DaySchedule) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Errors from reading a roster workbook
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not decode workbook: {0}")]
    Decode(String),

    #[error("Workbook contains no sheets")]
    NoSheets,

    #[error("Could not read sheet '{sheet}': {message}")]
    SheetRead { sheet: String, message: String },

    #[error("Couldn't find 'Associate Name' header row in sheet '{sheet}'")]
    HeaderNotFound { sheet: String },
}

/// Errors from rendering a schedule
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Could not write {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Font error: {0}")]
    Font(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_blank_detection() {
        assert!(Cell::Empty.is_blank());
        assert!(Cell::text("   ").is_blank());
        assert!(!Cell::text(" x ").is_blank());
        assert!(!Cell::Number(0.0).is_blank());
        assert!(!Cell::Bool(false).is_blank());
    }

    #[test]
    fn cell_to_text_whole_numbers() {
        assert_eq!(Cell::Number(1042.0).to_text(), "1042");
        assert_eq!(Cell::Number(2.5).to_text(), "2.5");
        assert_eq!(Cell::Empty.to_text(), "");
        assert_eq!(Cell::text(" Jo ").to_text(), " Jo ");
        assert_eq!(Cell::Bool(true).to_text(), "true");
    }

    #[test]
    fn cell_as_str_only_for_text() {
        assert_eq!(Cell::text("8:00am").as_str(), Some("8:00am"));
        assert_eq!(Cell::Number(8.0).as_str(), None);
        assert_eq!(Cell::Empty.as_str(), None);
    }

    #[test]
    fn raw_grid_from_strings() {
        let grid = RawGrid::from_strings(&[&["a", ""], &["b"]]);
        assert_eq!(grid.rows[0][1], Cell::Empty);
        assert_eq!(grid.width(), 2);
    }

    #[test]
    fn workbook_sheet_names_in_file_order() {
        let wb = Workbook::new(vec![
            Sheet::new("Summary", RawGrid::default()),
            Sheet::new("Rostered", RawGrid::default()),
        ]);
        assert_eq!(wb.sheet_names(), vec!["Summary", "Rostered"]);
    }

    #[test]
    fn roster_table_lookup() {
        let table = RosterTable::new(
            vec![Some("Associate Name".into()), None, Some("Mon, 6/2".into())],
            vec![vec![Cell::text("A"), Cell::Empty, Cell::text("8:00am")]],
        );
        assert_eq!(table.find_column(|h| h.starts_with("Mon")), Some(2));
        assert_eq!(table.header(1), None);
        assert_eq!(table.cell(0, 2), &Cell::text("8:00am"));
        assert_eq!(table.cell(5, 0), &Cell::Empty);
    }

    #[test]
    fn day_schedule_file_name_and_rows() {
        let mut group = ShiftGroup::new(480, "8:00am");
        group.associates = vec!["A".into(), "B".into()];
        let schedule = DaySchedule::new("Tue", "", vec![group]);
        assert_eq!(schedule.file_name(), "schedule_Tue.png");
        assert_eq!(schedule.total_rows(), 2);
        assert!(!schedule.is_empty());
    }

    #[test]
    fn error_display() {
        let err = RosterError::HeaderNotFound {
            sheet: "Rostered Work Blocks".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Associate Name"));
        assert!(msg.contains("Rostered Work Blocks"));

        assert!(RosterError::Decode("bad zip".into()).to_string().contains("bad zip"));
        assert!(RenderError::Encode("png".into()).to_string().contains("png"));
    }
}

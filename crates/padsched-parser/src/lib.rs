//! # padsched-parser
//!
//! Reads weekly roster workbooks into per-day shift groups.
//!
//! This crate provides:
//! - Workbook decoding via calamine ([`decode`])
//! - Sheet selection and header-row discovery ([`locate`])
//! - Day-column selection ([`columns`])
//! - Shift time parsing and extraction ([`time`], [`extract`])
//!
//! ## Example
//!
//! ```rust
//! use padsched_core::{RawGrid, Sheet, Workbook};
//! use padsched_parser::{roster_from_workbook, schedule_for_day};
//!
//! let grid = RawGrid::from_strings(&[
//!     &["Weekly roster", ""],
//!     &["Associate Name", "Mon, 6/2"],
//!     &["A", "8:00am"],
//!     &["B", "8:00am"],
//!     &["C", "9:15am"],
//! ]);
//! let workbook = Workbook::new(vec![Sheet::new("Rostered", grid)]);
//!
//! let roster = roster_from_workbook(&workbook).unwrap();
//! assert_eq!(roster.day_keys(), vec!["Mon"]);
//!
//! let groups = schedule_for_day(&roster, "Mon");
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].associates, vec!["A", "B"]);
//! ```

pub mod columns;
pub mod decode;
pub mod extract;
pub mod locate;
pub mod time;

pub use columns::{DayColumn, DayMatch, Roster};
pub use decode::CalamineDecoder;
pub use extract::extract_day;
pub use time::{parse_shift_time, ShiftTime};

use padsched_core::{group_shifts, RosterError, ShiftGroup, Workbook, WorkbookDecoder};

/// Locate the roster in an already decoded workbook
pub fn roster_from_workbook(workbook: &Workbook) -> Result<Roster, RosterError> {
    let sheet = locate::select_sheet(workbook)?;
    let table = locate::locate_table(sheet)?;
    Ok(columns::select_columns(&sheet.name, &table))
}

/// Decode workbook bytes with `decoder` and locate the roster
pub fn load_roster_with(decoder: &impl WorkbookDecoder, bytes: &[u8]) -> Result<Roster, RosterError> {
    let workbook = decoder.decode(bytes)?;
    roster_from_workbook(&workbook)
}

/// Decode workbook bytes with calamine and locate the roster
pub fn load_roster(bytes: &[u8]) -> Result<Roster, RosterError> {
    load_roster_with(&CalamineDecoder::new(), bytes)
}

/// Read a roster workbook from disk
pub fn load_roster_file(path: &std::path::Path) -> Result<Roster, RosterError> {
    let bytes = std::fs::read(path)?;
    load_roster(&bytes)
}

/// Shift groups for one day; empty when the day has no parseable shifts
pub fn schedule_for_day(roster: &Roster, day_key: &str) -> Vec<ShiftGroup> {
    group_shifts(&extract_day(roster, day_key))
}

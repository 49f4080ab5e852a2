//! Per-day shift extraction

use padsched_core::ShiftRecord;
use tracing::{debug, trace};

use crate::columns::Roster;
use crate::time::parse_shift_time;

/// Shift records for `day_key`, in table order.
///
/// An unknown day yields no records. Cells that are not text, or that hold
/// no time, are skipped.
pub fn extract_day(roster: &Roster, day_key: &str) -> Vec<ShiftRecord> {
    let Some(day) = roster.find_day(day_key) else {
        debug!(day = day_key, "no column matches day key");
        return Vec::new();
    };
    debug!(day = day_key, column = %roster.days[day].label, "extracting shifts");

    let mut records = Vec::new();
    for row in 0..roster.rows.len() {
        let Some(text) = roster.day_cell(row, day).as_str() else {
            continue;
        };
        let Some(time) = parse_shift_time(text) else {
            trace!(row, cell = text, "no shift time in cell");
            continue;
        };
        let associate = roster.associate(row).to_text().trim().to_string();
        records.push(ShiftRecord::new(time.minutes, time.label, associate));
    }
    records
}

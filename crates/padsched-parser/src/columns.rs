//! Day-column selection
//!
//! Day columns are recognized by a weekday abbreviation anywhere in the
//! label, which covers exports titled `"Mon"`, `"Mon, 6/2"` or
//! `"Week 23 Mon"`. The reduced [`Roster`] keeps only the associate-name
//! column and those day columns.

use padsched_core::{Cell, RosterTable};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::locate::ANCHOR;

fn weekday_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(Sun|Mon|Tue|Wed|Thu|Fri|Sat)").expect("valid weekday regex"))
}

/// True when the label names a weekday (case-sensitive)
pub fn is_day_label(label: &str) -> bool {
    weekday_pattern().is_match(label)
}

/// Short selection token for a day label: text before the first comma
pub fn day_key(label: &str) -> &str {
    label.split(',').next().unwrap_or(label)
}

/// How a day key is matched against column labels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayMatch {
    /// Label starts with the key
    Prefix,
    /// Label contains the key anywhere
    Substring,
}

/// Strategies in the order they are tried
pub const DAY_MATCHERS: [DayMatch; 2] = [DayMatch::Prefix, DayMatch::Substring];

impl DayMatch {
    pub fn matches(self, label: &str, key: &str) -> bool {
        match self {
            DayMatch::Prefix => label.starts_with(key),
            DayMatch::Substring => label.contains(key),
        }
    }
}

/// A day column in the reduced roster
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayColumn {
    pub label: String,
    pub key: String,
}

/// Associate names plus the day columns, row order preserved
#[derive(Clone, Debug, PartialEq)]
pub struct Roster {
    /// Sheet the roster was read from
    pub sheet: String,
    pub days: Vec<DayColumn>,
    /// `rows[i][0]` is the associate-name cell; `rows[i][1 + d]` belongs to `days[d]`
    pub rows: Vec<Vec<Cell>>,
}

impl Roster {
    /// Distinct day keys in column order
    pub fn day_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for day in &self.days {
            if !keys.contains(&day.key.as_str()) {
                keys.push(&day.key);
            }
        }
        keys
    }

    pub fn day_labels(&self) -> Vec<&str> {
        self.days.iter().map(|d| d.label.as_str()).collect()
    }

    /// Column for `key`: first strategy with any hit wins, first column within it
    pub fn find_day(&self, key: &str) -> Option<usize> {
        DAY_MATCHERS
            .iter()
            .find_map(|m| self.days.iter().position(|d| m.matches(&d.label, key)))
    }

    /// Associate-name cell of `row`
    pub fn associate(&self, row: usize) -> &Cell {
        &self.rows[row][0]
    }

    /// Cell of `row` in day column `day`
    pub fn day_cell(&self, row: usize, day: usize) -> &Cell {
        &self.rows[row][1 + day]
    }
}

/// Column holding associate names: exact anchor label first, then any label containing it
pub fn associate_column(table: &RosterTable) -> Option<usize> {
    table
        .find_column(|h| h.trim() == ANCHOR)
        .or_else(|| table.find_column(|h| h.contains(ANCHOR)))
}

/// Narrow `table` to the associate-name column and its day columns
pub fn select_columns(sheet: &str, table: &RosterTable) -> Roster {
    let name_col = associate_column(table);

    let day_cols: Vec<usize> = (0..table.width())
        .filter(|&col| Some(col) != name_col)
        .filter(|&col| table.header(col).is_some_and(is_day_label))
        .collect();

    let days: Vec<DayColumn> = day_cols
        .iter()
        .filter_map(|&col| table.header(col))
        .map(|label| DayColumn {
            label: label.to_string(),
            key: day_key(label).to_string(),
        })
        .collect();
    debug!(days = ?days.iter().map(|d| &d.label).collect::<Vec<_>>(), "selected day columns");

    let rows = (0..table.rows.len())
        .map(|row| {
            let name = name_col.map(|c| table.cell(row, c).clone()).unwrap_or_default();
            std::iter::once(name)
                .chain(day_cols.iter().map(|&c| table.cell(row, c).clone()))
                .collect()
        })
        .collect();

    Roster {
        sheet: sheet.to_string(),
        days,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RosterTable {
        let headers = headers
            .iter()
            .map(|h| if h.is_empty() { None } else { Some(h.to_string()) })
            .collect();
        let rows = rows
            .iter()
            .map(|r| r.iter().map(|s| if s.is_empty() { Cell::Empty } else { Cell::text(*s) }).collect())
            .collect();
        RosterTable::new(headers, rows)
    }

    #[test]
    fn day_label_detection() {
        assert!(is_day_label("Mon"));
        assert!(is_day_label("Mon, 6/2"));
        assert!(is_day_label("Week Sat"));
        assert!(!is_day_label("MON"));
        assert!(!is_day_label("Site"));
        assert!(!is_day_label("Associate Name"));
    }

    #[test]
    fn day_key_splits_on_first_comma() {
        assert_eq!(day_key("Mon, 6/2"), "Mon");
        assert_eq!(day_key("Tue 6/3"), "Tue 6/3");
        assert_eq!(day_key("Wed,6/4,late"), "Wed");
        assert_eq!(day_key(""), "");
    }

    #[test]
    fn matcher_strategies() {
        assert!(DayMatch::Prefix.matches("Mon, 6/2", "Mon"));
        assert!(!DayMatch::Prefix.matches("Wk Mon", "Mon"));
        assert!(DayMatch::Substring.matches("Wk Mon", "Mon"));
        assert!(!DayMatch::Substring.matches("Tue", "Mon"));
    }

    #[test]
    fn selects_name_and_day_columns() {
        let t = table(
            &["Site", "Associate Name", "Mon, 6/2", "Notes", "Tue, 6/3"],
            &[&["DXX1", "Ann", "8:00am", "lead", "9:00am"]],
        );
        let roster = select_columns("Rostered", &t);
        assert_eq!(roster.day_labels(), vec!["Mon, 6/2", "Tue, 6/3"]);
        assert_eq!(roster.day_keys(), vec!["Mon", "Tue"]);
        assert_eq!(roster.associate(0), &Cell::text("Ann"));
        assert_eq!(roster.day_cell(0, 1), &Cell::text("9:00am"));
        assert_eq!(roster.sheet, "Rostered");
    }

    #[test]
    fn day_keys_are_distinct() {
        let t = table(&["Associate Name", "Mon, 6/2", "Mon, 6/9"], &[]);
        let roster = select_columns("S", &t);
        assert_eq!(roster.days.len(), 2);
        assert_eq!(roster.day_keys(), vec!["Mon"]);
    }

    #[test]
    fn find_day_prefers_prefix_then_substring() {
        let t = table(&["Associate Name", "Wk Mon", "Mon, 6/2"], &[]);
        let roster = select_columns("S", &t);
        assert_eq!(roster.find_day("Mon"), Some(1));

        let t = table(&["Associate Name", "Wk Mon", "Tue"], &[]);
        let roster = select_columns("S", &t);
        assert_eq!(roster.find_day("Mon"), Some(0));
        assert_eq!(roster.find_day("Fri"), None);
    }

    #[test]
    fn exact_name_column_beats_substring() {
        let t = table(
            &["Associate Name (Legal)", "Associate Name", "Mon"],
            &[&["Legal", "Preferred", "8:00"]],
        );
        assert_eq!(associate_column(&t), Some(1));
        let roster = select_columns("S", &t);
        assert_eq!(roster.associate(0), &Cell::text("Preferred"));
    }
}

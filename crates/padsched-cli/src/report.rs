//! Printable summaries of a day's shift groups

use padsched_core::ShiftGroup;
use padsched_render::LayoutConfig;
use serde::Serialize;

/// JSON shape of `padsched groups --format json`
#[derive(Debug, Serialize)]
pub struct GroupsReport<'a> {
    pub sheet: &'a str,
    pub day: &'a str,
    pub groups: Vec<GroupEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct GroupEntry<'a> {
    pub pad: usize,
    pub minutes: u32,
    pub label: &'a str,
    pub associates: &'a [String],
}

impl<'a> GroupsReport<'a> {
    pub fn new(sheet: &'a str, day: &'a str, groups: &'a [ShiftGroup], layout: &LayoutConfig) -> Self {
        let groups = groups
            .iter()
            .enumerate()
            .map(|(i, g)| GroupEntry {
                pad: layout.pad_number(i),
                minutes: g.minutes,
                label: &g.label,
                associates: &g.associates,
            })
            .collect();
        Self { sheet, day, groups }
    }

    pub fn driver_count(&self) -> usize {
        self.groups.iter().map(|g| g.associates.len()).sum()
    }

    /// One line per group: pad, time label, names
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{}: {} groups, {} drivers\n",
            self.day,
            self.groups.len(),
            self.driver_count()
        );
        for g in &self.groups {
            out.push_str(&format!("Pad {}  {:<8} {}\n", g.pad, g.label, g.associates.join(", ")));
        }
        out
    }
}

/// Message shown when a day has no parseable shifts
pub fn no_routes_message(day: &str) -> String {
    format!("No routes found for {}.", day)
}

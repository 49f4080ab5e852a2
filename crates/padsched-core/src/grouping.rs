//! Shift grouping
//!
//! Partitions a day's [`ShiftRecord`]s into [`ShiftGroup`]s keyed by the
//! exact `(minutes, label)` pair. The label is part of the key, so `"9:00"`
//! and `"9:00am"` stay separate groups even though both parse to 540.
//!
//! Groups come out sorted by `minutes`. The sort is stable over the order in
//! which each key was first seen, so equal-minute groups keep table order.

use std::collections::HashMap;

use crate::{ShiftGroup, ShiftRecord};

/// Group records by `(minutes, label)`, ordered ascending by minutes
pub fn group_shifts(records: &[ShiftRecord]) -> Vec<ShiftGroup> {
    let mut index: HashMap<(u32, &str), usize> = HashMap::new();
    let mut groups: Vec<ShiftGroup> = Vec::new();

    for record in records {
        let key = (record.minutes, record.label.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(ShiftGroup::new(record.minutes, record.label.clone()));
            groups.len() - 1
        });
        groups[slot].associates.push(record.associate.clone());
    }

    // slice::sort_by_key is stable
    groups.sort_by_key(|g| g.minutes);
    groups
}

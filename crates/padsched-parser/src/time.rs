//! Shift-start time parsing
//!
//! Roster cells are free text ("8:00am", "9:15 PM - 5:45am", "14:30 lead").
//! The first `H:MM` in ASCII digits wins, with an optional `am`/`pm` marker
//! in any case. Hours and minutes are not range-checked: "99:99" parses to a
//! value past midnight rather than failing.

use regex::Regex;
use std::sync::OnceLock;

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)([0-9]{1,2}:[0-9]{2})\s*([ap]m)?").expect("valid time regex"))
}

/// Meridiem marker attached to a time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "am" => Some(Meridiem::Am),
            "pm" => Some(Meridiem::Pm),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "am",
            Meridiem::Pm => "pm",
        }
    }
}

/// A parsed shift start
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftTime {
    pub minutes: u32,
    pub label: String,
}

/// Convert a clock hour to 24-hour form.
///
/// Without a marker the hour is taken as-is. `pm` adds 12 unless the hour
/// is 12; `12am` is midnight.
pub fn normalize_hour(hour: u32, meridiem: Option<Meridiem>) -> u32 {
    match meridiem {
        Some(Meridiem::Pm) if hour != 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    }
}

/// Find the first time in `text`
pub fn parse_shift_time(text: &str) -> Option<ShiftTime> {
    let caps = time_pattern().captures(text)?;
    let digits = caps.get(1)?.as_str();
    let meridiem = caps.get(2).and_then(|m| Meridiem::parse(m.as_str()));

    let (h, m) = digits.split_once(':')?;
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;

    let minutes = normalize_hour(hour, meridiem) * 60 + minute;
    let label = match meridiem {
        Some(md) => format!("{}{}", digits, md.as_str()),
        None => digits.to_string(),
    };
    Some(ShiftTime { minutes, label })
}

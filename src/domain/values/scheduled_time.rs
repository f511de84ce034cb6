//! Release time of an economic event within its day.
//!
//! Calendar sources publish times as text such as `"8:30 AM ET"`, `"All Day"`
//! or `"Time TBD"`. Ordering is: all-day first, then clock times ascending,
//! then to-be-determined.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScheduledTime {
    AllDay,
    At(NaiveTime),
    Tbd,
}

impl ScheduledTime {
    pub fn at(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ScheduledTime::At)
    }
}

/// A 12-hour clock reading found inside free text.
struct ClockMatch {
    start: usize,
    time: NaiveTime,
}

/// Find the first `H:MM AM|PM [ET]` reading in `text`.
fn find_clock(text: &str) -> Option<ClockMatch> {
    let bytes = text.as_bytes();
    (0..bytes.len())
        .filter(|&i| bytes[i].is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_digit()))
        .find_map(|i| clock_at(bytes, i).map(|time| ClockMatch { start: i, time }))
}

fn clock_at(bytes: &[u8], start: usize) -> Option<NaiveTime> {
    let mut i = start;
    let mut hour: u32 = 0;
    let mut hour_digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() && hour_digits < 2 {
        hour = hour * 10 + u32::from(bytes[i] - b'0');
        hour_digits += 1;
        i += 1;
    }
    if bytes.get(i) != Some(&b':') {
        return None;
    }
    i += 1;
    let minute_bytes = bytes.get(i..i + 2)?;
    if !minute_bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let minute = u32::from(minute_bytes[0] - b'0') * 10 + u32::from(minute_bytes[1] - b'0');
    i += 2;
    while bytes.get(i) == Some(&b' ') {
        i += 1;
    }
    let meridiem = bytes.get(i..i + 2)?.to_ascii_uppercase();
    let pm = match meridiem.as_slice() {
        b"AM" => false,
        b"PM" => true,
        _ => return None,
    };
    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour24 = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    NaiveTime::from_hms_opt(hour24, minute, 0)
}

/// Split a raw calendar listing such as `"Retail Sales8:30 AM ET"` into the
/// event name and its release time. Settlement listings without a time run
/// all day; anything else without a time is to be determined.
pub fn split_event_text(text: &str) -> (String, ScheduledTime) {
    let text = text.replace('\u{a0}', " ");
    if let Some(m) = find_clock(&text) {
        return (text[..m.start].trim().to_string(), ScheduledTime::At(m.time));
    }
    let name = text.trim().to_string();
    if name.to_lowercase().contains("settlement") {
        (name, ScheduledTime::AllDay)
    } else {
        (name, ScheduledTime::Tbd)
    }
}

impl fmt::Display for ScheduledTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduledTime::AllDay => write!(f, "All Day"),
            ScheduledTime::At(t) => write!(f, "{} ET", t.format("%-I:%M %p")),
            ScheduledTime::Tbd => write!(f, "TBD"),
        }
    }
}

impl FromStr for ScheduledTime {
    type Err = std::convert::Infallible;

    /// Never fails: text that is not a recognisable time is `Tbd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all day") {
            return Ok(ScheduledTime::AllDay);
        }
        if let Some(m) = find_clock(trimmed) {
            return Ok(ScheduledTime::At(m.time));
        }
        if let Ok(t) = NaiveTime::parse_from_str(trimmed, "%H:%M") {
            return Ok(ScheduledTime::At(t));
        }
        Ok(ScheduledTime::Tbd)
    }
}

impl From<String> for ScheduledTime {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl From<ScheduledTime> for String {
    fn from(t: ScheduledTime) -> Self {
        t.to_string()
    }
}

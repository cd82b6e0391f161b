//! Timestamps (`dateCreated`, `dateModified`, `created`)
//!
//! Two layouts are read:
//!
//! - `02 Jan 2006 15:04 MST` - four digit year, the canonical OPML form
//! - `02 Jan 06 15:04 MST` - RFC 822 with a two digit year
//!
//! Either may start with a weekday (`Mon, `), which must match the date.
//! Zone names are upper case. Only the first layout is written.

use crate::error::{Error, Result};
use crate::xml::XmlValue;
use chrono::{Datelike, DateTime, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use std::fmt;

/// strftime layout of the canonical form, without the zone
pub const OPML_TIME_FORMAT: &str = "%d %b %Y %H:%M";

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// RFC 822 zone names, offsets in hours east of UTC
const ZONES: [(&str, i32); 12] = [
    ("UT", 0),
    ("UTC", 0),
    ("GMT", 0),
    ("Z", 0),
    ("EST", -5),
    ("EDT", -4),
    ("CST", -6),
    ("CDT", -5),
    ("MST", -7),
    ("MDT", -6),
    ("PST", -8),
    ("PDT", -7),
];

/// A point in time as written in OPML
///
/// Minute precision. The zone abbreviation from the input is kept so the value
/// is written back with the same name; values without one are written with a
/// numeric offset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OpmlTime {
    datetime: DateTime<FixedOffset>,
    zone: Option<String>,
}

impl OpmlTime {
    /// Create from a date-time, dropping seconds
    pub fn new(datetime: DateTime<FixedOffset>) -> Self {
        Self {
            datetime: truncate_to_minute(datetime),
            zone: None,
        }
    }

    /// Create with a zone abbreviation to print instead of the numeric offset
    pub fn with_zone_name(datetime: DateTime<FixedOffset>, zone: impl Into<String>) -> Self {
        Self {
            datetime: truncate_to_minute(datetime),
            zone: Some(zone.into()),
        }
    }

    /// The point in time
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.datetime
    }

    /// Zone abbreviation, if the value has one
    pub fn zone_name(&self) -> Option<&str> {
        self.zone.as_deref()
    }
}

impl From<DateTime<FixedOffset>> for OpmlTime {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self::new(datetime)
    }
}

impl From<DateTime<Utc>> for OpmlTime {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::with_zone_name(datetime.fixed_offset(), "UTC")
    }
}

impl fmt::Display for OpmlTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.datetime.format(OPML_TIME_FORMAT))?;
        match &self.zone {
            Some(zone) => f.write_str(zone),
            None => write!(f, "{}", self.datetime.format("%z")),
        }
    }
}

impl std::str::FromStr for OpmlTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_opml_time(s)
    }
}

impl XmlValue for Option<OpmlTime> {
    fn decode_text(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Ok(None);
        }
        parse_opml_time(text).map(Some)
    }

    fn missing() -> Self {
        None
    }

    fn encode_text(&self) -> Option<String> {
        self.as_ref().map(|t| t.to_string())
    }
}

/// Parse an OPML timestamp, preferring the four digit year form
pub fn parse_opml_time(text: &str) -> Result<OpmlTime> {
    parse_layout(text, 4)
        .or_else(|| parse_layout(text, 2))
        .ok_or_else(|| Error::InvalidTimestamp(text.to_string()))
}

/// Parse the whole of `text` with the given number of year digits
fn parse_layout(text: &str, year_digits: usize) -> Option<OpmlTime> {
    let mut cur = Scanner { rest: text };

    let weekday = WEEKDAYS.iter().position(|w| cur.keyword(w));
    if weekday.is_some() {
        cur.literal(",")?;
        cur.literal(" ")?;
    }

    let day = cur.number(2, 2)?;
    cur.literal(" ")?;
    let month = cur.month()?;
    cur.literal(" ")?;
    let year = match (year_digits, cur.number(year_digits, year_digits)?) {
        (2, yy) if yy >= 69 => 1900 + yy,
        (2, yy) => 2000 + yy,
        (_, yyyy) => yyyy,
    };
    cur.literal(" ")?;
    let hour = cur.number(1, 2)?;
    cur.literal(":")?;
    let minute = cur.number(2, 2)?;
    cur.literal(" ")?;
    let (offset, zone) = parse_zone(cur.rest)?;

    let date = NaiveDate::from_ymd_opt(year as i32, month, day)?;
    if weekday.is_some_and(|w| w as u32 != date.weekday().num_days_from_monday()) {
        return None;
    }
    let naive = date.and_hms_opt(hour, minute, 0)?;
    let datetime = offset.from_local_datetime(&naive).single()?;

    Some(OpmlTime { datetime, zone })
}

/// Zone abbreviation or `+hhmm` / `-hhmm`; must be the whole of `text`
fn parse_zone(text: &str) -> Option<(FixedOffset, Option<String>)> {
    let sign = match text.as_bytes().first() {
        Some(b'+') => Some(1),
        Some(b'-') => Some(-1),
        _ => None,
    };
    if let Some(sign) = sign {
        let digits = &text[1..];
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let hours: i32 = digits[..2].parse().ok()?;
        let minutes: i32 = digits[2..].parse().ok()?;
        if minutes >= 60 {
            return None;
        }
        let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?;
        return Some((offset, None));
    }

    if text.is_empty() || text.len() > 5 || !text.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    // Unknown abbreviations are kept by name at offset zero
    let hours = ZONES
        .iter()
        .find(|(name, _)| text == *name)
        .map_or(0, |(_, hours)| *hours);
    let offset = FixedOffset::east_opt(hours * 3600)?;
    Some((offset, Some(text.to_string())))
}

fn truncate_to_minute(datetime: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    datetime
        .with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(datetime)
}

/// Minimal cursor over the timestamp text
struct Scanner<'a> {
    rest: &'a str,
}

impl Scanner<'_> {
    /// Consume an exact literal
    fn literal(&mut self, lit: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(lit)?;
        Some(())
    }

    /// Consume a keyword, ASCII case-insensitive
    fn keyword(&mut self, word: &str) -> bool {
        match self.rest.get(..word.len()) {
            Some(head) if head.eq_ignore_ascii_case(word) => {
                self.rest = &self.rest[word.len()..];
                true
            }
            _ => false,
        }
    }

    /// Consume between `min` and `max` ASCII digits
    fn number(&mut self, min: usize, max: usize) -> Option<u32> {
        let len = self
            .rest
            .bytes()
            .take(max)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len < min {
            return None;
        }
        let value = self.rest[..len].parse().ok()?;
        self.rest = &self.rest[len..];
        Some(value)
    }

    /// Consume a three letter month name, returning 1-12
    fn month(&mut self) -> Option<u32> {
        let index = MONTHS.iter().position(|m| self.keyword(m))?;
        Some(index as u32 + 1)
    }
}

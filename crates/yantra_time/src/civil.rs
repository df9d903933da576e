//! Civil calendar date/time with an explicit UTC offset.
//!
//! `CivilTime` is what a user types or reads off a wall clock. Convert to an
//! [`crate::Instant`] before doing any astronomy with it.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::days_in_month;

/// Largest accepted UTC offset magnitude (UTC+14, Line Islands).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Civil calendar date and clock time in a fixed-offset zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Zone offset east of Greenwich in minutes (IST = +330).
    pub utc_offset_minutes: i32,
}

impl CivilTime {
    /// A UTC civil time (offset zero).
    pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self::new(year, month, day, hour, minute, second, 0)
    }

    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_minutes: i32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_minutes,
        }
    }

    /// Check every field against the calendar.
    pub fn validate(&self) -> Result<(), TimeError> {
        let Some(max_day) = days_in_month(self.year, self.month) else {
            return Err(TimeError::InvalidCalendar("month must be within 1..=12"));
        };
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::InvalidCalendar("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidCalendar("hour must be within 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidCalendar("minute must be within 0..=59"));
        }
        if !self.second.is_finite() || self.second < 0.0 || self.second >= 61.0 {
            return Err(TimeError::InvalidCalendar("second must be within [0, 61)"));
        }
        if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(TimeError::InvalidCalendar("UTC offset exceeds 14 hours"));
        }
        Ok(())
    }

    /// Clock time as fractional hours since local midnight.
    pub fn hours_of_day(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Ordinal day of the year of this civil date (1..=366).
    pub fn day_of_year(&self) -> u32 {
        crate::julian::day_of_year(self.year, self.month, self.day)
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:",
            self.year, self.month, self.day, self.hour, self.minute
        )?;
        let whole = self.second.floor();
        if (self.second - whole).abs() < 1e-9 {
            write!(f, "{:02}", whole as u32)?;
        } else {
            // Truncate to microseconds so 59.9999999 never prints as 60.
            let micros = (self.second * 1e6).floor() / 1e6;
            write!(f, "{micros:09.6}")?;
        }
        if self.utc_offset_minutes == 0 {
            write!(f, "Z")
        } else {
            let sign = if self.utc_offset_minutes < 0 { '-' } else { '+' };
            let abs = self.utc_offset_minutes.abs();
            write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
        }
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ss[.f]` followed by `Z`, `±hh:mm`, or nothing
    /// (nothing means UTC).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date, time) = s
            .split_once('T')
            .ok_or_else(|| TimeError::Parse(format!("expected YYYY-MM-DDThh:mm:ss, got {s}")))?;

        let (clock, offset) = split_offset(time)?;

        let date_parts: Vec<&str> = date.split('-').collect();
        let time_parts: Vec<&str> = clock.split(':').collect();
        if date_parts.len() != 3 || time_parts.len() != 3 {
            return Err(TimeError::Parse(format!("invalid date/time format: {s}")));
        }
        let year: i32 = parse_field(date_parts[0], "year")?;
        let month: u32 = parse_field(date_parts[1], "month")?;
        let day: u32 = parse_field(date_parts[2], "day")?;
        let hour: u32 = parse_field(time_parts[0], "hour")?;
        let minute: u32 = parse_field(time_parts[1], "minute")?;
        let second: f64 = parse_field(time_parts[2], "second")?;

        let civil = Self::new(year, month, day, hour, minute, second, offset);
        civil.validate()?;
        Ok(civil)
    }
}

fn parse_field<T: FromStr>(s: &str, what: &str) -> Result<T, TimeError>
where
    T::Err: std::fmt::Display,
{
    s.parse()
        .map_err(|e| TimeError::Parse(format!("bad {what} '{s}': {e}")))
}

/// Split `hh:mm:ss[.f](Z|±hh:mm)?` into the clock part and offset minutes.
fn split_offset(time: &str) -> Result<(&str, i32), TimeError> {
    if let Some(clock) = time.strip_suffix('Z') {
        return Ok((clock, 0));
    }
    let Some(pos) = time.rfind(['+', '-']) else {
        return Ok((time, 0));
    };
    let (clock, zone) = time.split_at(pos);
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let (hh, mm) = zone[1..]
        .split_once(':')
        .ok_or_else(|| TimeError::Parse(format!("offset must be ±hh:mm, got {zone}")))?;
    let hh: u32 = parse_field(hh, "offset hours")?;
    let mm: u32 = parse_field(mm, "offset minutes")?;
    if mm >= 60 {
        return Err(TimeError::Parse(format!("offset minutes out of range: {zone}")));
    }
    if hh > 14 || hh * 60 + mm > MAX_UTC_OFFSET_MINUTES as u32 {
        return Err(TimeError::Parse(format!("offset beyond ±14:00: {zone}")));
    }
    Ok((clock, sign * (hh * 60 + mm) as i32))
}

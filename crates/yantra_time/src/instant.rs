//! A point on the UTC time line, tagged with the zone used for labeling.

use crate::civil::CivilTime;
use crate::error::TimeError;
use crate::julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// Seconds from J2000.0 (noon) back to the preceding midnight.
const HALF_DAY_S: f64 = SECONDS_PER_DAY / 2.0;

/// Julian Date of 2000-Jan-01 00:00.
const J2000_MIDNIGHT_JD: f64 = J2000_JD - 0.5;

/// An instant on the UTC time line.
///
/// Stored as UTC seconds past J2000.0 (leap seconds are not counted; the
/// solar model here is far coarser than one second). The zone offset does
/// not change which instant this is, only how it is labeled as civil time,
/// so equality and ordering look at the time line alone.
#[derive(Debug, Clone, Copy)]
pub struct Instant {
    utc_seconds: f64,
    utc_offset_minutes: i32,
}

impl Instant {
    /// Create an instant from UTC seconds past J2000.0, labeled in UTC.
    pub fn from_utc_seconds(s: f64) -> Self {
        Self {
            utc_seconds: s,
            utc_offset_minutes: 0,
        }
    }

    /// Create an instant from a validated civil time.
    pub fn from_civil(civil: &CivilTime) -> Result<Self, TimeError> {
        civil.validate()?;
        let midnight_jd = calendar_to_jd(civil.year, civil.month, civil.day as f64);
        let days = midnight_jd - J2000_MIDNIGHT_JD;
        let local_s = days * SECONDS_PER_DAY - HALF_DAY_S + civil.hours_of_day() * 3600.0;
        Ok(Self {
            utc_seconds: local_s - civil.utc_offset_minutes as f64 * 60.0,
            utc_offset_minutes: civil.utc_offset_minutes,
        })
    }

    /// Same instant, relabeled in another zone.
    pub fn with_offset_minutes(self, utc_offset_minutes: i32) -> Self {
        Self {
            utc_seconds: self.utc_seconds,
            utc_offset_minutes,
        }
    }

    /// The instant `seconds` later (earlier when negative), same zone.
    pub fn add_seconds(self, seconds: f64) -> Self {
        Self {
            utc_seconds: self.utc_seconds + seconds,
            utc_offset_minutes: self.utc_offset_minutes,
        }
    }

    /// UTC seconds past J2000.0.
    pub fn utc_seconds(self) -> f64 {
        self.utc_seconds
    }

    /// Zone offset east of Greenwich in minutes.
    pub fn utc_offset_minutes(self) -> i32 {
        self.utc_offset_minutes
    }

    /// Julian Date (UTC).
    pub fn jd_utc(self) -> f64 {
        J2000_JD + self.utc_seconds / SECONDS_PER_DAY
    }

    /// UTC clock time as fractional hours in [0, 24).
    pub fn utc_hours_of_day(self) -> f64 {
        (self.utc_seconds + HALF_DAY_S).rem_euclid(SECONDS_PER_DAY) / 3600.0
    }

    /// Civil date and clock time in this instant's zone.
    pub fn to_civil(self) -> CivilTime {
        let local_s = self.utc_seconds + self.utc_offset_minutes as f64 * 60.0 + HALF_DAY_S;
        let day_index = (local_s / SECONDS_PER_DAY).floor();
        let sec_of_day = local_s - day_index * SECONDS_PER_DAY;

        let (year, month, day) = jd_to_calendar(J2000_MIDNIGHT_JD + day_index);
        let hour = (sec_of_day / 3600.0).floor() as u32;
        let minute = ((sec_of_day % 3600.0) / 60.0).floor() as u32;
        let second = sec_of_day % 60.0;
        CivilTime::new(
            year,
            month,
            day.floor() as u32,
            hour.min(23),
            minute.min(59),
            second,
            self.utc_offset_minutes,
        )
    }

    /// Ordinal day of the civil date in this instant's zone (1..=366). A
    /// label only; solar computations use `solar_day_of_year`.
    pub fn day_of_year(self) -> u32 {
        self.to_civil().day_of_year()
    }

    /// Civil clock hour (0..=23) in this instant's zone, used for labels.
    pub fn civil_hour(self) -> u32 {
        self.to_civil().hour
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.utc_seconds == other.utc_seconds
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.utc_seconds.partial_cmp(&other.utc_seconds)
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_civil().fmt(f)
    }
}

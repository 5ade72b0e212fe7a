//! JAUS time stamps and dates
//!
//! Time of day and calendar dates are packed into single integers on the wire:
//!
//! ```text
//! JausTime (u32): | day 31-27 | hour 26-22 | minute 21-16 | second 15-10 | millisecond 9-0 |
//! JausDate (u16): | year-2000 15-9 | month 8-5 | day 4-0 |
//! ```
//!
//! Both convert from `chrono` values; time stamps are always UTC.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use jaus_codec::{JausError, JausResult, WireValue};
use std::fmt;

const MILLISECOND_BITS: u32 = 10;
const SECOND_SHIFT: u32 = 10;
const MINUTE_SHIFT: u32 = 16;
const HOUR_SHIFT: u32 = 22;
const DAY_SHIFT: u32 = 27;

const MONTH_SHIFT: u32 = 5;
const YEAR_SHIFT: u32 = 9;
const YEAR_BASE: u16 = 2000;

fn check(field: &'static str, value: u32, min: u32, max: u32) -> JausResult<()> {
    if value < min || value > max {
        return Err(JausError::out_of_range(
            field,
            f64::from(value),
            f64::from(min),
            f64::from(max),
        ));
    }
    Ok(())
}

fn bits(raw: u32, shift: u32, width: u32) -> u32 {
    (raw >> shift) & ((1 << width) - 1)
}

/// Packed UTC time of day with day-of-month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct JausTime(u32);

impl JausTime {
    pub fn new(day: u8, hour: u8, minute: u8, second: u8, millisecond: u16) -> JausResult<Self> {
        check("day", day.into(), 1, 31)?;
        check("hour", hour.into(), 0, 23)?;
        check("minute", minute.into(), 0, 59)?;
        check("second", second.into(), 0, 59)?;
        check("millisecond", millisecond.into(), 0, 999)?;

        Ok(Self(
            u32::from(day) << DAY_SHIFT
                | u32::from(hour) << HOUR_SHIFT
                | u32::from(minute) << MINUTE_SHIFT
                | u32::from(second) << SECOND_SHIFT
                | u32::from(millisecond),
        ))
    }

    /// Wrap a value received from the wire without validation
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    pub fn day(self) -> u8 {
        bits(self.0, DAY_SHIFT, 5) as u8
    }

    pub fn hour(self) -> u8 {
        bits(self.0, HOUR_SHIFT, 5) as u8
    }

    pub fn minute(self) -> u8 {
        bits(self.0, MINUTE_SHIFT, 6) as u8
    }

    pub fn second(self) -> u8 {
        bits(self.0, SECOND_SHIFT, 6) as u8
    }

    pub fn millisecond(self) -> u16 {
        bits(self.0, 0, MILLISECOND_BITS) as u16
    }
}

impl From<DateTime<Utc>> for JausTime {
    fn from(time: DateTime<Utc>) -> Self {
        // leap seconds report nanoseconds past 1e9
        let millisecond = (time.nanosecond() / 1_000_000).min(999);
        Self(
            time.day() << DAY_SHIFT
                | time.hour() << HOUR_SHIFT
                | time.minute() << MINUTE_SHIFT
                | time.second() << SECOND_SHIFT
                | millisecond,
        )
    }
}

impl fmt::Display for JausTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "day {} {:02}:{:02}:{:02}.{:03}",
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }
}

impl WireValue for JausTime {
    const SIZE: usize = 4;

    fn put(self, buffer: &mut Vec<u8>) {
        self.0.put(buffer);
    }

    fn get(bytes: &[u8]) -> Self {
        Self(u32::get(bytes))
    }
}

/// Packed calendar date, years 2000 through 2127
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct JausDate(u16);

impl JausDate {
    pub fn new(year: u16, month: u8, day: u8) -> JausResult<Self> {
        check("year", year.into(), YEAR_BASE.into(), u32::from(YEAR_BASE) + 127)?;
        check("month", month.into(), 1, 12)?;
        check("day", day.into(), 1, 31)?;

        Ok(Self(
            (year - YEAR_BASE) << YEAR_SHIFT | u16::from(month) << MONTH_SHIFT | u16::from(day),
        ))
    }

    /// Wrap a value received from the wire without validation
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub fn today() -> JausResult<Self> {
        Self::try_from(Utc::now().date_naive())
    }

    pub fn year(self) -> u16 {
        YEAR_BASE + bits(self.0.into(), YEAR_SHIFT, 7) as u16
    }

    pub fn month(self) -> u8 {
        bits(self.0.into(), MONTH_SHIFT, 4) as u8
    }

    pub fn day(self) -> u8 {
        bits(self.0.into(), 0, 5) as u8
    }

    /// Calendar date, `None` when the packed fields do not form a real date
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year().into(), self.month().into(), self.day().into())
    }
}

impl TryFrom<NaiveDate> for JausDate {
    type Error = JausError;

    fn try_from(date: NaiveDate) -> JausResult<Self> {
        let year = u16::try_from(date.year()).map_err(|_| {
            JausError::out_of_range("year", f64::from(date.year()), 2000.0, 2127.0)
        })?;
        Self::new(year, date.month() as u8, date.day() as u8)
    }
}

impl fmt::Display for JausDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl WireValue for JausDate {
    const SIZE: usize = 2;

    fn put(self, buffer: &mut Vec<u8>) {
        self.0.put(buffer);
    }

    fn get(bytes: &[u8]) -> Self {
        Self(u16::get(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_packing() {
        let time = JausTime::new(17, 13, 45, 30, 250).unwrap();
        assert_eq!(time.day(), 17);
        assert_eq!(time.hour(), 13);
        assert_eq!(time.minute(), 45);
        assert_eq!(time.second(), 30);
        assert_eq!(time.millisecond(), 250);
        assert_eq!(time.to_string(), "day 17 13:45:30.250");
    }

    #[test]
    fn test_time_rejects_bad_components() {
        assert!(JausTime::new(0, 0, 0, 0, 0).is_err());
        assert!(JausTime::new(1, 24, 0, 0, 0).is_err());
        assert!(JausTime::new(1, 0, 0, 0, 1000).is_err());
    }

    #[test]
    fn test_time_from_chrono() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 58).unwrap();
        let time = JausTime::from(utc);
        assert_eq!(time, JausTime::new(9, 23, 59, 58, 0).unwrap());
    }

    #[test]
    fn test_date_round_trip() {
        let date = JausDate::new(2024, 2, 29).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));
        assert_eq!(date.to_naive_date(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(date.to_string(), "2024-02-29");

        let naive = NaiveDate::from_ymd_opt(2031, 12, 1).unwrap();
        assert_eq!(JausDate::try_from(naive).unwrap().to_naive_date(), Some(naive));
    }

    #[test]
    fn test_date_limits() {
        assert!(JausDate::new(1999, 1, 1).is_err());
        assert!(JausDate::new(2128, 1, 1).is_err());
        assert!(JausDate::new(2127, 12, 31).is_ok());
        assert!(JausDate::try_from(NaiveDate::from_ymd_opt(1980, 1, 1).unwrap()).is_err());
        assert_eq!(JausDate::new(2024, 2, 31).unwrap().to_naive_date(), None);
    }
}

//!
//! Conversion between stored instants and the labels users see.
//!
//! Dates are written as `YYYY-MM-DD` and times as `AM|PM-HH-MM`
//! with 12-hour clock. Every instant is interpreted in UTC.
//!

use std::str::FromStr;
use strum::{AsRefStr, EnumString};
use time::{macros::format_description, Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    Date(String),

    #[error("invalid time '{0}', expected AM|PM-HH-MM")]
    Time(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
pub enum Meridiem {
    #[strum(serialize = "AM")]
    Am,

    #[strum(serialize = "PM")]
    Pm,
}

///
/// Time of day as written by users.
/// Can only be built with hour in 1..=12 and minute in 0..=59.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLabel {
    meridiem: Meridiem,
    hour: u8,
    minute: u8,
}

impl TimeLabel {
    ///
    /// ### Errors
    /// - [FormatError::Time] when hour is outside 1..=12 or minute is above 59
    ///
    pub fn new(meridiem: Meridiem, hour: u8, minute: u8) -> Result<Self, FormatError> {
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(FormatError::Time(format!(
                "{}-{hour:02}-{minute:02}",
                meridiem.as_ref()
            )));
        }

        Ok(Self {
            meridiem,
            hour,
            minute,
        })
    }

    pub fn from_time(time: Time) -> Self {
        let meridiem = match time.hour() < 12 {
            true => Meridiem::Am,
            false => Meridiem::Pm,
        };
        let hour = match time.hour() % 12 {
            0 => 12,
            hour => hour,
        };

        Self {
            meridiem,
            hour,
            minute: time.minute(),
        }
    }

    pub fn to_time(self) -> Time {
        let hour = match (self.meridiem, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, hour) => hour,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, hour) => hour + 12,
        };

        // fields are range checked on construction
        Time::from_hms(hour, self.minute, 0).unwrap_or(Time::MIDNIGHT)
    }
}

impl FromStr for TimeLabel {
    type Err = FormatError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::Time(label.to_string());

        let parts = label.split('-').collect::<Vec<_>>();
        let [meridiem, hour, minute] = parts.as_slice() else {
            return Err(invalid());
        };

        let meridiem = Meridiem::from_str(meridiem).map_err(|_| invalid())?;
        let hour = parse_two_digits(hour).ok_or_else(invalid)?;
        let minute = parse_two_digits(minute).ok_or_else(invalid)?;

        Self::new(meridiem, hour, minute).map_err(|_| invalid())
    }
}

impl std::fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02}",
            self.meridiem.as_ref(),
            self.hour,
            self.minute
        )
    }
}

fn parse_two_digits(value: &str) -> Option<u8> {
    if value.len() != 2 || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    value.parse().ok()
}

///
/// Parses `YYYY-MM-DD` calendar date.
///
pub fn parse_date(date: &str) -> Result<Date, FormatError> {
    Date::parse(date, format_description!("[year]-[month]-[day]"))
        .map_err(|_| FormatError::Date(date.to_string()))
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

///
/// Validates that time label has `AM|PM-HH-MM` format.
///
pub fn validate_time(time: &str) -> Result<(), FormatError> {
    TimeLabel::from_str(time).map(|_| ())
}

///
/// Current UTC date as `YYYY-MM-DD`.
///
pub fn today() -> String {
    format_date(OffsetDateTime::now_utc().date())
}

///
/// Splits instant into date and time labels.
/// Seconds and smaller units are dropped.
///
pub fn split(date_time: OffsetDateTime) -> (String, String) {
    let date_time = date_time.to_offset(UtcOffset::UTC);

    let date = format_date(date_time.date());
    let time = TimeLabel::from_time(date_time.time()).to_string();

    (date, time)
}

///
/// Combines date and time labels into UTC instant with zero seconds.
///
/// ### Errors
/// - [FormatError::Date] when date is not valid `YYYY-MM-DD` calendar date
/// - [FormatError::Time] when time is not valid `AM|PM-HH-MM` label
///
pub fn combine(date: &str, time: &str) -> Result<OffsetDateTime, FormatError> {
    let date = parse_date(date)?;
    let time = TimeLabel::from_str(time)?.to_time();

    Ok(PrimitiveDateTime::new(date, time).assume_utc())
}

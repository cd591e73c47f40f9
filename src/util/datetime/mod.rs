//! Utilities for parsing and formatting ISO 8601 timestamps.
//!
//! Discord emits datetimes in two ISO 8601 shapes: with microseconds
//! (`2021-01-01T01:01:01.010000+00:00`) and without
//! (`2021-01-01T01:01:01+00:00`). [`Timestamp`] accepts both and always
//! writes the microsecond form back out.

mod error;

pub use self::error::{TimestampParseError, TimestampParseErrorType};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Visitor},
    ser::{Serialize, Serializer},
};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Minimum length of an ISO 8601 datetime without microseconds.
///
/// Example: `2021-01-01T01:01:01+00:00` (25 characters).
const MIN_TIMESTAMP_LENGTH: usize = 25;

/// Number of microseconds in a second.
const MICROSECONDS_PER_SECOND: i64 = 1_000_000;

/// Representation of a Discord timestamp, normalized to UTC.
///
/// # serde
///
/// Deserializes from an ISO 8601 string and serializes back as an ISO 8601
/// string with microsecond precision.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parse a timestamp from an ISO 8601 datetime string emitted by Discord.
    ///
    /// # Errors
    ///
    /// Returns a [`TimestampParseErrorType::Format`] error type if the input
    /// is too short to be a datetime.
    ///
    /// Returns a [`TimestampParseErrorType::Parsing`] error type if the
    /// input is not a valid ISO 8601 datetime.
    pub fn parse(datetime: &str) -> Result<Self, TimestampParseError> {
        if datetime.len() < MIN_TIMESTAMP_LENGTH {
            return Err(TimestampParseError::FORMAT);
        }

        DateTime::parse_from_rfc3339(datetime)
            .map(|parsed| Self(parsed.with_timezone(&Utc)))
            .map_err(TimestampParseError::parsing)
    }

    /// Create a timestamp from a Unix timestamp with seconds precision.
    ///
    /// # Errors
    ///
    /// Returns a [`TimestampParseErrorType::Range`] error type if the value
    /// is out of the range representable by a datetime.
    pub fn from_secs(unix_seconds: i64) -> Result<Self, TimestampParseError> {
        DateTime::<Utc>::from_timestamp(unix_seconds, 0)
            .map(Self)
            .ok_or(TimestampParseError::RANGE)
    }

    /// Create a timestamp from a Unix timestamp with microseconds precision.
    ///
    /// # Errors
    ///
    /// Returns a [`TimestampParseErrorType::Range`] error type if the value
    /// is out of the range representable by a datetime.
    pub fn from_micros(unix_microseconds: i64) -> Result<Self, TimestampParseError> {
        let seconds = unix_microseconds.div_euclid(MICROSECONDS_PER_SECOND);
        let micros = unix_microseconds.rem_euclid(MICROSECONDS_PER_SECOND);

        u32::try_from(micros * 1_000)
            .ok()
            .and_then(|nanos| DateTime::<Utc>::from_timestamp(seconds, nanos))
            .map(Self)
            .ok_or(TimestampParseError::RANGE)
    }

    /// Total number of seconds since the Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0.timestamp()
    }

    /// Total number of microseconds since the Unix epoch.
    pub fn as_micros(self) -> i64 {
        self.0.timestamp_micros()
    }

    /// The underlying UTC datetime.
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Create an ISO 8601 display formatter.
    pub const fn iso_8601(self) -> TimestampIso8601Display {
        TimestampIso8601Display {
            timestamp: self,
            with_microseconds: true,
        }
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.iso_8601(), f)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&'_ str> for Timestamp {
    type Error = TimestampParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("an ISO 8601 datetime string")
            }

            fn visit_str<E: DeError>(self, v: &str) -> Result<Self::Value, E> {
                Timestamp::parse(v).map_err(DeError::custom)
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.iso_8601())
    }
}

/// Display wrapper returned by [`Timestamp::iso_8601`].
#[derive(Clone, Copy, Debug)]
pub struct TimestampIso8601Display {
    timestamp: Timestamp,
    with_microseconds: bool,
}

impl TimestampIso8601Display {
    /// Get the inner timestamp.
    pub const fn get(self) -> Timestamp {
        self.timestamp
    }

    /// Whether to include microseconds in the output.
    #[must_use]
    pub const fn with_microseconds(mut self, with_microseconds: bool) -> Self {
        self.with_microseconds = with_microseconds;

        self
    }
}

impl Display for TimestampIso8601Display {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let precision = if self.with_microseconds {
            SecondsFormat::Micros
        } else {
            SecondsFormat::Secs
        };

        f.write_str(&self.timestamp.0.to_rfc3339_opts(precision, false))
    }
}

//! Error types for [`Timestamp`] parsing.
//!
//! [`Timestamp`]: super::Timestamp

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Failure to read a [`Timestamp`] from its RFC 3339 form or from a Unix
/// offset.
///
/// [`Timestamp`]: super::Timestamp
#[derive(Debug)]
pub struct TimestampParseError {
    kind: TimestampParseErrorType,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl TimestampParseError {
    /// Input is too short to hold a date and a time.
    pub(crate) const FORMAT: TimestampParseError = TimestampParseError {
        kind: TimestampParseErrorType::Format,
        source: None,
    };

    /// Unix offset has no matching calendar datetime.
    pub(crate) const RANGE: TimestampParseError = TimestampParseError {
        kind: TimestampParseErrorType::Range,
        source: None,
    };

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &TimestampParseErrorType {
        &self.kind
    }

    /// Consume the error, returning the source error if there is any.
    #[must_use = "consuming the error and retrieving the source has no effect if left unused"]
    pub fn into_source(self) -> Option<Box<dyn Error + Send + Sync>> {
        self.source
    }

    /// Consume the error, returning the owned error type and the source error.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(
        self,
    ) -> (
        TimestampParseErrorType,
        Option<Box<dyn Error + Send + Sync>>,
    ) {
        (self.kind, self.source)
    }

    /// Create a new error with a [`TimestampParseErrorType::Parsing`] kind.
    pub(crate) fn parsing(source: chrono::ParseError) -> Self {
        Self {
            kind: TimestampParseErrorType::Parsing,
            source: Some(Box::new(source)),
        }
    }
}

impl Display for TimestampParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            TimestampParseErrorType::Format => {
                f.write_str("input is too short to be an rfc 3339 timestamp")
            }
            TimestampParseErrorType::Parsing => f.write_str("input is not a valid rfc 3339 timestamp"),
            TimestampParseErrorType::Range => {
                f.write_str("unix offset is outside the supported datetime range")
            }
        }
    }
}

impl Error for TimestampParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn Error + 'static))
    }
}

/// Type of [`TimestampParseError`] that occurred.
#[derive(Debug)]
#[non_exhaustive]
pub enum TimestampParseErrorType {
    /// Input is shorter than the shortest accepted timestamp.
    Format,
    /// Input was rejected by the RFC 3339 parser; the source holds the
    /// parser's reason.
    Parsing,
    /// Seconds or microseconds since the Unix epoch fall outside what a
    /// datetime can represent.
    Range,
}

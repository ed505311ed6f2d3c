//! Log verbosity levels understood by the remote device.
//!
//! The device keeps one verbosity per tag; the wire format carries the
//! canonical upper-case name. Operator input additionally accepts the
//! usual aliases and the numeric codes 0..5.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The six verbosity tiers, least to most verbose. `None` silences a
/// tag, `Verbose` is maximal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    None,
    Error,
    Warn,
    Info,
    Debug,
    Verbose,
}

impl LogLevel {
    /// Canonical wire name, exactly as the device's command parser
    /// expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
        }
    }

    /// Numeric code, matching the esp_log_level_t ordering.
    pub fn code(&self) -> u8 {
        match self {
            LogLevel::None => 0,
            LogLevel::Error => 1,
            LogLevel::Warn => 2,
            LogLevel::Info => 3,
            LogLevel::Debug => 4,
            LogLevel::Verbose => 5,
        }
    }

    /// Normalize an operator-supplied level string.
    ///
    /// Trims and upper-cases the input, then resolves canonical names,
    /// documented aliases (ERR, WARNING, TRACE) and the numeric codes
    /// 0..5. Anything else is rejected, never coerced.
    pub fn normalize(input: &str) -> Result<Self, Error> {
        let key = input.trim().to_ascii_uppercase();
        let level = match key.as_str() {
            "NONE" | "0" => LogLevel::None,
            "ERROR" | "ERR" | "1" => LogLevel::Error,
            "WARN" | "WARNING" | "2" => LogLevel::Warn,
            "INFO" | "3" => LogLevel::Info,
            "DEBUG" | "4" => LogLevel::Debug,
            "VERBOSE" | "TRACE" | "5" => LogLevel::Verbose,
            _ => {
                return Err(Error::InvalidLevel {
                    input: input.to_string(),
                })
            }
        };
        Ok(level)
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

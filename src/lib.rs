//! METAR/TAF Decoder Library
//!
//! A Rust library for decoding METAR, SPECI and TAF aviation weather reports
//! into strongly-typed groups.
//!
//! This library provides tools for:
//! - Splitting a report into whitespace tokens, honouring the `=` end marker
//! - Recognizing each token against an ordered table of group formats
//! - Joining multi-token groups (`1 3/4SM`, `CIG 025 RWY36`, `PK WND 28045/15`)
//! - Tracking report structure with a grammar state machine that resolves the
//!   report type and records the first structural error
//! - Visiting decoded groups with one hook per group type
//! - Aggregating statistics over batches of reports
//!
//! ```rust
//! use metar_decoder::{ReportType, parse};
//!
//! let result = parse("METAR KDDC 112052Z AUTO 19023G34KT 7SM CLR 33/16 A2992 RMK AO2");
//! assert_eq!(result.report_type, ReportType::Metar);
//! assert!(result.error.is_none());
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod render;
}

// Re-export commonly used types
pub use app::models::{AppendOutcome, ReportError, ReportPart, ReportType};
pub use app::services::groups::{Group, GroupKind, ReportGroup};
pub use app::services::recognizer::{parse_group, recognize};
pub use app::services::report_parser::{GroupInfo, ParseResult, ReportParser, ReportStats};
pub use app::services::visitor::{GroupVisitor, visit};
pub use config::DecoderConfig;

/// Parse one report with the default configuration
pub fn parse(report: &str) -> ParseResult {
    ReportParser::new(DecoderConfig::default()).parse(report)
}

/// Result type alias for the decoder
pub type Result<T> = std::result::Result<T, Error>;

/// Operational error types
///
/// Problems inside a report are never errors of this kind; they are carried
/// as [`ReportError`] in the [`ParseResult`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Date parsing error
    #[error("Date parsing error: {message}")]
    DateParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a date parsing error
    pub fn date_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::io("I/O operation failed", error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization("JSON serialization failed", error)
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::date_parsing("Date parsing failed", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uses_default_config() {
        let report = "KDDC 112052Z 19023KT";
        assert_eq!(parse(report), ReportParser::default().parse(report));
    }

    #[test]
    fn test_error_messages() {
        let error = Error::configuration("max_report_tokens must be greater than zero");
        assert_eq!(
            error.to_string(),
            "Configuration error: max_report_tokens must be greater than zero"
        );

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = Error::io("Failed to read reports.txt", io);
        assert_eq!(error.to_string(), "I/O error: Failed to read reports.txt");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_conversions() {
        let parse_error = chrono::NaiveDate::parse_from_str("not-a-date", "%Y-%m-%d").unwrap_err();
        assert!(matches!(Error::from(parse_error), Error::DateParsing { .. }));

        let json_error = serde_json::from_str::<DecoderConfig>("{").unwrap_err();
        assert!(matches!(Error::from(json_error), Error::Serialization { .. }));
    }
}

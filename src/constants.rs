//! Application constants for the METAR/TAF decoder
//!
//! This module contains the default values and fixed markers used throughout
//! the decoder library and the command-line front end.

// =============================================================================
// Report Parsing Defaults
// =============================================================================

/// Maximum number of tokens parsed from one report before `ReportTooLarge`
pub const DEFAULT_MAX_REPORT_TOKENS: usize = 100;

/// Stop tokenizing at the first token ending in [`END_OF_REPORT_MARKER`]
pub const DEFAULT_STOP_AT_END_MARKER: bool = true;

/// Trailing character marking the end of a report
pub const END_OF_REPORT_MARKER: char = '=';

// =============================================================================
// Report Text Markers
// =============================================================================

/// Runs of this character mean "not reported" in most numeric fields
pub const NOT_REPORTED_MARKER: char = '/';

/// Lines starting with this character are skipped when reading report files
pub const COMMENT_LINE_PREFIX: char = '#';

// =============================================================================
// Logging and Output
// =============================================================================

/// Crate target used in the default `EnvFilter` directive
pub const LOG_TARGET: &str = "metar_decoder";

/// Log level for different verbosity settings
pub const LOG_LEVEL_ERROR: &str = "error";
pub const LOG_LEVEL_WARN: &str = "warn";
pub const LOG_LEVEL_INFO: &str = "info";
pub const LOG_LEVEL_DEBUG: &str = "debug";
pub const LOG_LEVEL_TRACE: &str = "trace";

/// Date format accepted for `--reference-date`
pub const REFERENCE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Datetime format used when printing resolved report times
pub const REPORT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%MZ";

/// Success rate (percent of error-free reports) above which a batch counts as successful
pub const SUCCESS_RATE_THRESHOLD: f64 = 90.0;

// =============================================================================
// Helper Functions
// =============================================================================

/// Log level for a `-v` count, or `error` when quiet
pub fn log_level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return LOG_LEVEL_ERROR;
    }
    match verbose {
        0 => LOG_LEVEL_WARN,
        1 => LOG_LEVEL_INFO,
        2 => LOG_LEVEL_DEBUG,
        _ => LOG_LEVEL_TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_for_verbosity() {
        assert_eq!(log_level_for(0, false), "warn");
        assert_eq!(log_level_for(1, false), "info");
        assert_eq!(log_level_for(2, false), "debug");
        assert_eq!(log_level_for(7, false), "trace");
        assert_eq!(log_level_for(3, true), "error");
    }

    #[test]
    fn test_parsing_defaults() {
        assert_eq!(DEFAULT_MAX_REPORT_TOKENS, 100);
        assert!(DEFAULT_STOP_AT_END_MARKER);
    }
}

//! Configuration management and validation.
//!
//! Provides the decoder configuration: the report size ceiling and the
//! end-of-report marker handling used by the tokenizer.

use crate::constants::{DEFAULT_MAX_REPORT_TOKENS, DEFAULT_STOP_AT_END_MARKER};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings for [`ReportParser`](crate::ReportParser)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Tokens parsed per report; anything beyond is dropped with `ReportTooLarge`
    pub max_report_tokens: usize,

    /// Treat a token ending in `=` as the last token of the report
    pub stop_at_end_marker: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_report_tokens: DEFAULT_MAX_REPORT_TOKENS,
            stop_at_end_marker: DEFAULT_STOP_AT_END_MARKER,
        }
    }
}

impl DecoderConfig {
    /// Create configuration with a custom token ceiling
    pub fn with_max_report_tokens(mut self, max_report_tokens: usize) -> Self {
        self.max_report_tokens = max_report_tokens;
        self
    }

    /// Keep tokenizing past `=`; the marker stays part of the token
    pub fn without_end_marker(mut self) -> Self {
        self.stop_at_end_marker = false;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_report_tokens == 0 {
            return Err(Error::configuration(
                "max_report_tokens must be greater than zero",
            ));
        }
        debug!(
            "Decoder configuration valid: max_report_tokens={}, stop_at_end_marker={}",
            self.max_report_tokens, self.stop_at_end_marker
        );
        Ok(())
    }
}

//! Report parsing module for METAR and TAF reports
//!
//! This module turns one report string into an ordered list of decoded groups,
//! the resolved report type and at most one structural error.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`parser`] - ReportParser and the append engine
//! - [`grammar`] - Report grammar state machine
//! - [`syntax`] - Structural classification of recognized groups
//! - [`result`] - GroupInfo and ParseResult structures
//! - [`stats`] - Batch statistics over many parse results
//!
//! # Parsing Pipeline
//!
//! Each report goes through a single pass:
//!
//! 1. **Tokenizing**: Split on whitespace, stopping at the `=` end marker
//! 2. **Appending**: Offer each token to the open group; if it is not taken,
//!    close that group and recognize the token afresh in the part the grammar
//!    currently expects
//! 3. **Grammar**: Every closed group is classified and advances the state
//!    machine, which resolves the report type and keeps the first error
//!
//! Errors never stop the pass. After a structural error the rest of the
//! report is still decoded, in the body part of the report type.
//!
//! # Example Usage
//!
//! ```rust
//! use metar_decoder::app::models::{ReportError, ReportType};
//! use metar_decoder::app::services::report_parser::{ReportParser, ReportStats};
//! use metar_decoder::config::DecoderConfig;
//!
//! let parser = ReportParser::new(DecoderConfig::default());
//! let mut stats = ReportStats::new();
//!
//! let taf = parser.parse("TAF KDDC 112330Z 1200/1224 19015KT P6SM SKC");
//! assert_eq!(taf.report_type, ReportType::Taf);
//! stats.record(&taf);
//!
//! let nil = parser.parse("KDDC 112052Z NIL 19023KT");
//! assert_eq!(nil.error, Some(ReportError::UnexpectedGroupAfterNil));
//! stats.record(&nil);
//!
//! println!("{}", stats.summary());
//! ```

pub mod grammar;
pub mod parser;
pub mod result;
pub mod stats;
pub mod syntax;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use grammar::{RecognitionContext, ReportGrammar};
pub use parser::ReportParser;
pub use result::{GroupInfo, ParseResult};
pub use stats::ReportStats;
pub use syntax::{SyntaxGroup, classify};

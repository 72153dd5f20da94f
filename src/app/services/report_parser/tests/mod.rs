//! Tests for the report parser
//!
//! Grammar transitions driven by classified groups, whole-report parsing
//! through the append engine, and batch statistics.


use crate::app::models::ReportError;
use crate::app::services::report_parser::{ParseResult, ReportGrammar, ReportParser, SyntaxGroup};
use crate::config::DecoderConfig;

/// Parse a report with the default configuration
pub fn parse(report: &str) -> ParseResult {
    ReportParser::new(DecoderConfig::default()).parse(report)
}

/// Run a grammar over a sequence of classified groups and finish it
pub fn run_grammar(groups: &[SyntaxGroup]) -> ReportGrammar {
    let mut grammar = ReportGrammar::new();
    for syntax in groups {
        grammar.transition(*syntax);
    }
    grammar.finish();
    grammar
}

/// Structural error after running a grammar over `groups`
pub fn grammar_error(groups: &[SyntaxGroup]) -> Option<ReportError> {
    run_grammar(groups).error()
}

//! Main report parser implementation
//!
//! This module contains the [`ReportParser`] and the append engine that drives
//! tokenizer, recognizer table and grammar over one report in a single pass.

use crate::app::models::{AppendOutcome, ReportError, ReportPart};
use crate::app::services::groups::Group;
use crate::app::services::recognizer::recognize;
use crate::app::services::tokenizer::tokenize;
use crate::config::DecoderConfig;
use tracing::{debug, trace, warn};

use super::{
    grammar::{RecognitionContext, ReportGrammar},
    result::{GroupInfo, ParseResult},
    syntax::{SyntaxGroup, classify},
};

/// Parser for METAR and TAF reports
///
/// Parsing never fails: unrecognized tokens become unknown groups and the
/// first structural violation is returned as [`ParseResult::error`].
///
/// # Example
///
/// ```rust
/// use metar_decoder::app::models::ReportType;
/// use metar_decoder::{DecoderConfig, ReportParser};
///
/// let parser = ReportParser::new(DecoderConfig::default());
/// let result = parser.parse("KDDC 112052Z AUTO 19023G34KT 7SM CLR 33/16 A2992");
/// assert_eq!(result.report_type, ReportType::Metar);
/// assert!(result.error.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    config: DecoderConfig,
}

impl ReportParser {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Parse one complete report
    pub fn parse(&self, report: &str) -> ParseResult {
        let tokens = tokenize(report, self.config.stop_at_end_marker);
        if tokens.is_empty() {
            debug!("Report is empty");
            return ParseResult::empty();
        }

        let limit = self.config.max_report_tokens;
        let mut engine = Engine::new();
        for token in tokens.iter().take(limit) {
            engine.feed(token.text);
        }
        engine.close();

        if tokens.len() > limit {
            warn!(
                "Report has {} tokens, only the first {} were parsed",
                tokens.len(),
                limit
            );
            engine.grammar.fail(ReportError::ReportTooLarge);
        } else {
            engine.grammar.finish();
        }

        let result = engine.into_result();
        debug!(
            tokens = tokens.len(),
            groups = result.groups.len(),
            report_type = %result.report_type,
            error = ?result.error,
            "Parsed report"
        );
        result
    }
}

/// Group still able to absorb following tokens
#[derive(Debug)]
struct OpenGroup {
    group: Group,
    part: ReportPart,
    raw: String,
}

/// Per-report engine state
#[derive(Debug, Default)]
struct Engine {
    grammar: ReportGrammar,
    open: Option<OpenGroup>,
    groups: Vec<GroupInfo>,
}

impl Engine {
    fn new() -> Self {
        Self::default()
    }

    /// Consume one token, by append to the open group or by fresh recognition
    fn feed(&mut self, token: &str) {
        if let Some(mut open) = self.open.take() {
            let outcome = open.group.append(token, open.part);
            trace!(token, kind = %open.group.kind(), ?outcome, "Offered token to open group");
            match outcome {
                AppendOutcome::Appended => {
                    open.raw.push(' ');
                    open.raw.push_str(token);
                    if open.group.accepts_append() {
                        self.open = Some(open);
                    } else {
                        self.emit(open);
                    }
                    return;
                }
                AppendOutcome::Invalidated => {
                    open.raw.push(' ');
                    open.raw.push_str(token);
                    self.emit(open);
                    return;
                }
                AppendOutcome::NotAppended => self.emit(open),
            }
        }

        let (group, part) = self.recognize(token);
        let open = OpenGroup {
            group,
            part,
            raw: token.to_string(),
        };
        if open.group.accepts_append() {
            self.open = Some(open);
        } else {
            self.emit(open);
        }
    }

    fn recognize(&self, token: &str) -> (Group, ReportPart) {
        match self.grammar.context() {
            RecognitionContext::Part(part) => (recognize(token, part), part),
            RecognitionContext::TimeSpanOrBody(body) => {
                let group = recognize(token, ReportPart::Header);
                if classify(&group) == SyntaxGroup::TimeSpan {
                    (group, ReportPart::Header)
                } else {
                    (recognize(token, body), body)
                }
            }
        }
    }

    /// Close the open group, if any
    fn close(&mut self) {
        if let Some(open) = self.open.take() {
            self.emit(open);
        }
    }

    fn emit(&mut self, open: OpenGroup) {
        let syntax = classify(&open.group);
        self.grammar.transition(syntax);
        trace!(
            raw = %open.raw,
            kind = %open.group.kind(),
            part = %open.part,
            valid = open.group.is_valid(),
            "Closed group"
        );
        self.groups.push(GroupInfo {
            group: open.group,
            report_part: open.part,
            raw_string: open.raw,
        });
    }

    fn into_result(self) -> ParseResult {
        ParseResult {
            report_type: self.grammar.report_type(),
            error: self.grammar.error(),
            groups: self.groups,
        }
    }
}

//! Report grammar state machine
//!
//! Consumes the classified stream of closed groups, resolves the report type
//! and records the first structural violation. It also tells the engine which
//! [`ReportPart`] the next token must be recognized in.

use super::syntax::SyntaxGroup;
use crate::app::models::{ReportError, ReportPart, ReportType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    /// Before the location; report type keywords, `COR` and `AMD` allowed
    #[default]
    Start,
    /// Location seen, waiting for the report release time
    AwaitingTime,
    /// Header complete; `NIL`, `CNL`, a TAF time span or the body may follow
    AwaitingBodyOrNil,
    /// TAF validity span seen, body not started yet
    TafBodyBegin,
    MetarBody,
    TafBody,
    AfterNil,
    AfterCancel,
    Remarks,
    /// A structural error was recorded; groups are still recognized
    Failed,
}

/// How the engine must recognize the next token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionContext {
    /// Recognize in this part only
    Part(ReportPart),
    /// Try the header first and keep the result only if it is a TAF time
    /// span; otherwise recognize in the given body part
    TimeSpanOrBody(ReportPart),
}

/// Grammar state for one report
#[derive(Debug, Clone, Default)]
pub struct ReportGrammar {
    state: State,
    report_type: ReportType,
    error: Option<ReportError>,
    type_keyword_seen: bool,
}

impl ReportGrammar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report_type(&self) -> ReportType {
        self.report_type
    }

    /// First structural error, if any
    pub fn error(&self) -> Option<ReportError> {
        self.error
    }

    /// Recognition context for the next fresh token
    pub fn context(&self) -> RecognitionContext {
        let body = ReportPart::body_of(self.report_type);
        match self.state {
            State::Start | State::AwaitingTime => RecognitionContext::Part(ReportPart::Header),
            State::AwaitingBodyOrNil => match self.report_type {
                ReportType::Metar => RecognitionContext::Part(ReportPart::Metar),
                ReportType::Taf | ReportType::Unknown => RecognitionContext::TimeSpanOrBody(body),
            },
            State::TafBodyBegin | State::TafBody => RecognitionContext::Part(ReportPart::Taf),
            State::MetarBody => RecognitionContext::Part(ReportPart::Metar),
            State::AfterNil | State::AfterCancel | State::Failed => RecognitionContext::Part(body),
            State::Remarks => RecognitionContext::Part(ReportPart::Remarks),
        }
    }

    /// Advance on one closed group
    pub fn transition(&mut self, syntax: SyntaxGroup) {
        use SyntaxGroup as S;

        let is_taf = self.report_type == ReportType::Taf;
        match self.state {
            State::Start => match syntax {
                S::ReportTypeKeyword(report_type) if !self.type_keyword_seen => {
                    self.report_type = report_type;
                    self.type_keyword_seen = true;
                }
                S::Correction if self.type_keyword_seen => {}
                S::Amendment if self.type_keyword_seen => {
                    if !is_taf {
                        self.fail(ReportError::AmdAllowedInTafOnly);
                    }
                }
                S::Location => self.state = State::AwaitingTime,
                _ if self.type_keyword_seen => self.fail(ReportError::ExpectedLocation),
                _ => self.fail(ReportError::ExpectedReportTypeOrLocation),
            },

            State::AwaitingTime => match syntax {
                S::ReportTime => self.state = State::AwaitingBodyOrNil,
                S::TimeSpan if is_taf => self.state = State::TafBodyBegin,
                S::Nil => self.enter_nil(),
                _ => self.fail(ReportError::ExpectedReportTime),
            },

            State::AwaitingBodyOrNil => match syntax {
                S::Nil => self.enter_nil(),
                S::Cancel if is_taf => self.state = State::AfterCancel,
                S::Cancel => self.fail(ReportError::CnlAllowedInTafOnly),
                S::Amendment if !is_taf => self.fail(ReportError::AmdAllowedInTafOnly),
                S::Amendment | S::Correction => {}
                S::TimeSpan => {
                    self.report_type = ReportType::Taf;
                    self.state = State::TafBodyBegin;
                }
                _ if is_taf => self.fail(ReportError::ExpectedTimeSpan),
                S::RemarksMarker => {
                    self.report_type = ReportType::Metar;
                    self.state = State::Remarks;
                }
                _ => {
                    self.report_type = ReportType::Metar;
                    self.state = State::MetarBody;
                }
            },

            State::TafBodyBegin => match syntax {
                S::Cancel => self.state = State::AfterCancel,
                S::Nil => self.state = State::AfterNil,
                S::RemarksMarker => self.state = State::Remarks,
                S::MaintenanceMarker => {
                    self.fail(ReportError::MaintenanceIndicatorAllowedInMetarOnly)
                }
                _ => self.state = State::TafBody,
            },

            State::MetarBody => match syntax {
                S::Nil | S::Cancel => self.fail(ReportError::UnexpectedNilOrCnlInReportBody),
                S::Amendment => self.fail(ReportError::AmdAllowedInTafOnly),
                S::RemarksMarker => self.state = State::Remarks,
                _ => {}
            },

            State::TafBody => match syntax {
                S::Nil | S::Cancel => self.fail(ReportError::UnexpectedNilOrCnlInReportBody),
                S::MaintenanceMarker => {
                    self.fail(ReportError::MaintenanceIndicatorAllowedInMetarOnly)
                }
                S::RemarksMarker => self.state = State::Remarks,
                _ => {}
            },

            State::AfterNil => match syntax {
                S::RemarksMarker => self.state = State::Remarks,
                _ => self.fail(ReportError::UnexpectedGroupAfterNil),
            },

            State::AfterCancel => match syntax {
                S::RemarksMarker => self.state = State::Remarks,
                _ => self.fail(ReportError::UnexpectedGroupAfterCnl),
            },

            State::Remarks => {
                if syntax == S::MaintenanceMarker && self.report_type != ReportType::Metar {
                    self.fail(ReportError::MaintenanceIndicatorAllowedInMetarOnly);
                }
            }

            State::Failed => {
                if syntax == S::RemarksMarker {
                    self.state = State::Remarks;
                }
            }
        }
    }

    /// End of input; a report cut short in the header is an error
    pub fn finish(&mut self) {
        if matches!(
            self.state,
            State::Start | State::AwaitingTime | State::AwaitingBodyOrNil | State::TafBodyBegin
        ) {
            self.fail(ReportError::UnexpectedReportEnd);
        }
    }

    /// Record an error; only the first one is kept
    pub fn fail(&mut self, error: ReportError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
        if self.state != State::Remarks {
            self.state = State::Failed;
        }
    }

    fn enter_nil(&mut self) {
        if self.report_type == ReportType::Unknown {
            self.report_type = ReportType::Metar;
        }
        self.state = State::AfterNil;
    }
}

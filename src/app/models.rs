//! Data models for METAR/TAF decoding
//!
//! This module contains the enumerations shared by every stage of the decoder:
//! the report kind, the grammar context a token is recognized in, the outcome of
//! offering a token to an open group, and the structural error codes.
//! Unit-tagged measurement values live in [`values`].

pub mod values;

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Report Type
// =============================================================================

/// Kind of report being decoded
///
/// Starts as `Unknown` and is resolved either by an explicit keyword
/// (`METAR`, `SPECI`, `TAF`) or by the shape of the report right after the
/// report time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportType {
    #[default]
    Unknown,
    Metar,
    Taf,
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportType::Unknown => write!(f, "unknown"),
            ReportType::Metar => write!(f, "METAR"),
            ReportType::Taf => write!(f, "TAF"),
        }
    }
}

// =============================================================================
// Report Part
// =============================================================================

/// Grammar context a token is recognized in
///
/// The same text means different things depending on where it appears, so the
/// grammar assigns a part to every token before any recognizer looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportPart {
    #[default]
    Unknown,
    Header,
    Metar,
    Taf,
    Remarks,
}

impl ReportPart {
    /// True for the METAR and TAF body contexts
    pub fn is_body(&self) -> bool {
        matches!(self, ReportPart::Metar | ReportPart::Taf)
    }

    /// Body context matching a report type; unresolved reports decode as METAR
    pub fn body_of(report_type: ReportType) -> Self {
        match report_type {
            ReportType::Taf => ReportPart::Taf,
            ReportType::Metar | ReportType::Unknown => ReportPart::Metar,
        }
    }
}

impl fmt::Display for ReportPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportPart::Unknown => "unknown",
            ReportPart::Header => "header",
            ReportPart::Metar => "metar",
            ReportPart::Taf => "taf",
            ReportPart::Remarks => "remarks",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Append Outcome
// =============================================================================

/// Result of offering one more token to an open group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppendOutcome {
    /// Token consumed; the group may accept more
    Appended,
    /// Token rejected; the group closes unchanged and the token is recognized afresh
    NotAppended,
    /// Token consumed but the combination is malformed; the group closes invalid
    Invalidated,
}

// =============================================================================
// Report Error
// =============================================================================

/// Structural violation of the report grammar
///
/// At most one of these is recorded per report: the first violation wins and
/// marks where structure stopped being enforced.
#[derive(
    thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ReportError {
    #[error("report is empty")]
    EmptyReport,

    #[error("expected report type or location")]
    ExpectedReportTypeOrLocation,

    #[error("expected location")]
    ExpectedLocation,

    #[error("expected report release time")]
    ExpectedReportTime,

    #[error("expected time span")]
    ExpectedTimeSpan,

    #[error("unexpected end of report")]
    UnexpectedReportEnd,

    #[error("unexpected group after NIL")]
    UnexpectedGroupAfterNil,

    #[error("unexpected group after CNL")]
    UnexpectedGroupAfterCnl,

    #[error("NIL or CNL inside report body")]
    UnexpectedNilOrCnlInReportBody,

    #[error("AMD is allowed in TAF only")]
    AmdAllowedInTafOnly,

    #[error("CNL is allowed in TAF only")]
    CnlAllowedInTafOnly,

    #[error("maintenance indicator is allowed in METAR only")]
    MaintenanceIndicatorAllowedInMetarOnly,

    #[error("report has too many groups")]
    ReportTooLarge,
}

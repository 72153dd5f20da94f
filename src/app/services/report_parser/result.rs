//! Parse result structures
//!
//! This module provides the output of one report parse: the resolved report
//! type, the first structural error and every group with its source text.

use crate::app::models::{ReportError, ReportPart, ReportType};
use crate::app::services::groups::{Group, GroupKind};
use serde::Serialize;

/// One closed group together with where and from what it was decoded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupInfo {
    pub group: Group,
    /// Part the group's first token was recognized in
    pub report_part: ReportPart,
    /// Every consumed token joined by single spaces
    pub raw_string: String,
}

impl GroupInfo {
    /// Number of report tokens this group consumed
    pub fn token_count(&self) -> usize {
        self.raw_string.split_whitespace().count()
    }
}

/// Result of parsing one report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    /// Resolved report type
    pub report_type: ReportType,
    /// First structural error; parsing continued past it
    pub error: Option<ReportError>,
    /// Groups in report order
    pub groups: Vec<GroupInfo>,
}

impl ParseResult {
    /// Result for a report without any tokens
    pub fn empty() -> Self {
        Self {
            report_type: ReportType::Unknown,
            error: Some(ReportError::EmptyReport),
            groups: Vec::new(),
        }
    }

    pub fn is_error_free(&self) -> bool {
        self.error.is_none()
    }

    /// Total tokens consumed across all groups
    pub fn token_count(&self) -> usize {
        self.groups.iter().map(GroupInfo::token_count).sum()
    }

    /// Groups no recognizer understood
    pub fn unrecognized_count(&self) -> usize {
        self.groups
            .iter()
            .filter(|info| info.group.kind() == GroupKind::Unknown)
            .count()
    }

    /// Recognized groups that failed their validity check
    pub fn invalid_count(&self) -> usize {
        self.groups
            .iter()
            .filter(|info| info.group.kind() != GroupKind::Unknown && !info.group.is_valid())
            .count()
    }

    /// Groups decoded in the given part
    pub fn groups_in(&self, part: ReportPart) -> impl Iterator<Item = &GroupInfo> {
        self.groups.iter().filter(move |info| info.report_part == part)
    }

    /// Group kinds in report order
    pub fn kinds(&self) -> Vec<GroupKind> {
        self.groups.iter().map(|info| info.group.kind()).collect()
    }
}

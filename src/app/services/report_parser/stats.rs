//! Batch statistics for parsed reports
//!
//! This module provides a running tally over many [`ParseResult`]s: report
//! types, structural errors by code, and group-level recognition quality.

use super::result::ParseResult;
use crate::app::models::{ReportError, ReportType};
use crate::constants::SUCCESS_RATE_THRESHOLD;
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics for a batch of parsed reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStats {
    /// Total number of reports parsed
    pub total_reports: usize,
    /// Reports resolved as METAR or SPECI
    pub metar_reports: usize,
    /// Reports resolved as TAF
    pub taf_reports: usize,
    /// Reports whose type could not be resolved
    pub unknown_type_reports: usize,
    /// Reports carrying a structural error
    pub reports_with_errors: usize,
    /// Structural errors by code
    pub errors_by_kind: BTreeMap<ReportError, usize>,
    /// Groups across all reports
    pub total_groups: usize,
    /// Groups no recognizer understood
    pub unrecognized_groups: usize,
    /// Recognized groups that failed their validity check
    pub invalid_groups: usize,
}

impl ReportStats {
    /// Create new empty report statistics
    pub fn new() -> Self {
        Self {
            total_reports: 0,
            metar_reports: 0,
            taf_reports: 0,
            unknown_type_reports: 0,
            reports_with_errors: 0,
            errors_by_kind: BTreeMap::new(),
            total_groups: 0,
            unrecognized_groups: 0,
            invalid_groups: 0,
        }
    }

    /// Add one parsed report to the tally
    pub fn record(&mut self, result: &ParseResult) {
        self.total_reports += 1;
        match result.report_type {
            ReportType::Metar => self.metar_reports += 1,
            ReportType::Taf => self.taf_reports += 1,
            ReportType::Unknown => self.unknown_type_reports += 1,
        }
        if let Some(error) = result.error {
            self.reports_with_errors += 1;
            *self.errors_by_kind.entry(error).or_insert(0) += 1;
        }
        self.total_groups += result.groups.len();
        self.unrecognized_groups += result.unrecognized_count();
        self.invalid_groups += result.invalid_count();
    }

    /// Calculate success rate (error-free reports) as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_reports == 0 {
            100.0
        } else {
            let clean = self.total_reports - self.reports_with_errors;
            (clean as f64 / self.total_reports as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% error-free reports)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > SUCCESS_RATE_THRESHOLD
    }

    /// Percentage of groups that were recognized
    pub fn recognition_rate(&self) -> f64 {
        if self.total_groups == 0 {
            100.0
        } else {
            let recognized = self.total_groups - self.unrecognized_groups;
            (recognized as f64 / self.total_groups as f64) * 100.0
        }
    }

    /// Get summary of batch statistics
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} reports ({} METAR, {} TAF, {} unknown) | \
             {:.1}% error-free | Groups: {} ({:.1}% recognized, {} invalid)",
            self.total_reports,
            self.metar_reports,
            self.taf_reports,
            self.unknown_type_reports,
            self.success_rate(),
            self.total_groups,
            self.recognition_rate(),
            self.invalid_groups
        )
    }
}

impl Default for ReportStats {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Extend<&'a ParseResult> for ReportStats {
    fn extend<T: IntoIterator<Item = &'a ParseResult>>(&mut self, results: T) {
        for result in results {
            self.record(result);
        }
    }
}

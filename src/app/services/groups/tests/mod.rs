//! Tests for the group types
//!
//! Single-token recognition per report part, multi-token append behaviour,
//! and validity rules.

pub mod body_tests;

use crate::app::models::{AppendOutcome, ReportPart};
use crate::app::services::groups::ReportGroup;

/// Parse a token that is expected to be recognized by `G`
pub fn parse_as<G: ReportGroup>(token: &str, part: ReportPart) -> G {
    G::parse(token, part).unwrap_or_else(|| panic!("'{}' not recognized in {}", token, part))
}

/// Parse the first token, then offer each following token to the group
pub fn feed<G: ReportGroup>(tokens: &[&str], part: ReportPart) -> (G, Vec<AppendOutcome>) {
    let (first, rest) = tokens.split_first().expect("at least one token");
    let mut group: G = parse_as(first, part);
    let outcomes = rest.iter().map(|token| group.append(token, part)).collect();
    (group, outcomes)
}

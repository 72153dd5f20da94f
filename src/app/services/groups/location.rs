use super::ReportGroup;
use crate::app::models::ReportPart;
use serde::Serialize;

/// ICAO location indicator, e.g. `KDDC`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationGroup {
    pub icao: String,
}

impl ReportGroup for LocationGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Header || token.len() != 4 {
            return None;
        }
        let mut chars = token.chars();
        let first_is_letter = chars.next().is_some_and(|c| c.is_ascii_uppercase());
        let rest_alphanumeric = chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        (first_is_letter && rest_alphanumeric).then(|| Self {
            icao: token.to_string(),
        })
    }
}

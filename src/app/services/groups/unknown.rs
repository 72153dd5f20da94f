use super::ReportGroup;
use crate::app::models::ReportPart;
use serde::Serialize;

/// Fallback for tokens no other group recognizes; always valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownGroup {
    pub text: String,
}

impl UnknownGroup {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl ReportGroup for UnknownGroup {
    fn parse(token: &str, _part: ReportPart) -> Option<Self> {
        Some(Self::new(token))
    }
}

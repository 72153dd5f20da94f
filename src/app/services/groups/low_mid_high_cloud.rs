use super::ReportGroup;
use crate::app::models::ReportPart;
use serde::Serialize;

/// Remarks `8/LMH`: WMO cloud type codes for the low, middle and high layers
///
/// `None` means the layer was reported as `/` (not observable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LowMidHighCloudGroup {
    pub low: Option<u8>,
    pub mid: Option<u8>,
    pub high: Option<u8>,
}

fn layer_code(c: u8) -> Option<Option<u8>> {
    match c {
        b'/' => Some(None),
        b'0'..=b'9' => Some(Some(c - b'0')),
        _ => None,
    }
}

impl ReportGroup for LowMidHighCloudGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Remarks {
            return None;
        }
        let codes = token.strip_prefix("8/")?.as_bytes();
        if codes.len() != 3 {
            return None;
        }
        Some(Self {
            low: layer_code(codes[0])?,
            mid: layer_code(codes[1])?,
            high: layer_code(codes[2])?,
        })
    }
}

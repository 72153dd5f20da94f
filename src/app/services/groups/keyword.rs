//! Fixed keywords: report type, modifiers, grammar markers and remark flags

use super::ReportGroup;
use crate::app::models::ReportPart;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Keyword {
    Metar,
    Speci,
    Taf,
    Amd,
    Cor,
    Nil,
    Cnl,
    Auto,
    Cavok,
    Rmk,
    /// `$`: station needs maintenance
    MaintenanceIndicator,
    /// Automated station without precipitation discriminator
    Ao1,
    /// Automated station with precipitation discriminator
    Ao2,
    Ao1a,
    Ao2a,
    NoSpeci,
    /// Precipitation identifier not available
    Pwino,
    /// Thunderstorm information not available
    Tsno,
    /// Runway visual range not available
    Rvrno,
    /// Freezing rain information not available
    Fzrano,
    /// Precipitation amount not available
    Pno,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordGroup {
    pub keyword: Keyword,
}

impl KeywordGroup {
    pub fn new(keyword: Keyword) -> Self {
        Self { keyword }
    }
}

const HEADER: &[ReportPart] = &[ReportPart::Header];
const HEADER_AND_BODY: &[ReportPart] = &[ReportPart::Header, ReportPart::Metar, ReportPart::Taf];
const METAR: &[ReportPart] = &[ReportPart::Metar];
const BODY: &[ReportPart] = &[ReportPart::Metar, ReportPart::Taf];
const NOT_HEADER: &[ReportPart] = &[ReportPart::Metar, ReportPart::Taf, ReportPart::Remarks];
const REMARKS: &[ReportPart] = &[ReportPart::Remarks];

impl ReportGroup for KeywordGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        let (keyword, allowed) = match token {
            "METAR" => (Keyword::Metar, HEADER),
            "SPECI" => (Keyword::Speci, HEADER),
            "TAF" => (Keyword::Taf, HEADER),
            // Grammar keywords are recognized in the body too so that
            // misplaced ones reach the grammar and produce a structural error
            "AMD" => (Keyword::Amd, HEADER_AND_BODY),
            "COR" => (Keyword::Cor, HEADER_AND_BODY),
            "NIL" => (Keyword::Nil, HEADER_AND_BODY),
            "CNL" => (Keyword::Cnl, HEADER_AND_BODY),
            "RMK" => (Keyword::Rmk, HEADER_AND_BODY),
            "AUTO" => (Keyword::Auto, METAR),
            "CAVOK" => (Keyword::Cavok, BODY),
            "$" => (Keyword::MaintenanceIndicator, NOT_HEADER),
            "AO1" => (Keyword::Ao1, REMARKS),
            "AO2" => (Keyword::Ao2, REMARKS),
            "AO1A" => (Keyword::Ao1a, REMARKS),
            "AO2A" => (Keyword::Ao2a, REMARKS),
            "NOSPECI" => (Keyword::NoSpeci, REMARKS),
            "PWINO" => (Keyword::Pwino, REMARKS),
            "TSNO" => (Keyword::Tsno, REMARKS),
            "RVRNO" => (Keyword::Rvrno, REMARKS),
            "FZRANO" => (Keyword::Fzrano, REMARKS),
            "PNO" => (Keyword::Pno, REMARKS),
            _ => return None,
        };
        allowed.contains(&part).then_some(Self::new(keyword))
    }
}

//! Syntax classification of recognized groups
//!
//! The grammar only cares about a handful of structural roles; everything
//! else is [`SyntaxGroup::Other`]. The match is exhaustive over [`Group`] so a
//! new group variant must be classified before the crate compiles.

use crate::app::models::ReportType;
use crate::app::services::groups::Group;
use crate::app::services::groups::keyword::Keyword;

/// Structural role of a group in the report grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxGroup {
    /// `METAR`, `SPECI` (both METAR) or `TAF`
    ReportTypeKeyword(ReportType),
    Correction,
    Amendment,
    Nil,
    Cancel,
    RemarksMarker,
    MaintenanceMarker,
    Location,
    ReportTime,
    /// TAF validity period `DDHH/DDHH`
    TimeSpan,
    Other,
}

/// Structural role of a group
pub fn classify(group: &Group) -> SyntaxGroup {
    match group {
        Group::Keyword(g) => classify_keyword(g.keyword),
        Group::Location(_) => SyntaxGroup::Location,
        Group::ReportTime(_) => SyntaxGroup::ReportTime,
        Group::Trend(g) if g.is_time_span() => SyntaxGroup::TimeSpan,
        Group::Trend(_)
        | Group::Wind(_)
        | Group::Visibility(_)
        | Group::Cloud(_)
        | Group::Weather(_)
        | Group::Temperature(_)
        | Group::Pressure(_)
        | Group::RunwayState(_)
        | Group::SeaSurface(_)
        | Group::MinMaxTemperature(_)
        | Group::Precipitation(_)
        | Group::LayerForecast(_)
        | Group::PressureTendency(_)
        | Group::LowMidHighCloud(_)
        | Group::Lightning(_)
        | Group::Misc(_)
        | Group::Unknown(_) => SyntaxGroup::Other,
    }
}

fn classify_keyword(keyword: Keyword) -> SyntaxGroup {
    match keyword {
        Keyword::Metar | Keyword::Speci => SyntaxGroup::ReportTypeKeyword(ReportType::Metar),
        Keyword::Taf => SyntaxGroup::ReportTypeKeyword(ReportType::Taf),
        Keyword::Cor => SyntaxGroup::Correction,
        Keyword::Amd => SyntaxGroup::Amendment,
        Keyword::Nil => SyntaxGroup::Nil,
        Keyword::Cnl => SyntaxGroup::Cancel,
        Keyword::Rmk => SyntaxGroup::RemarksMarker,
        Keyword::MaintenanceIndicator => SyntaxGroup::MaintenanceMarker,
        Keyword::Auto
        | Keyword::Cavok
        | Keyword::Ao1
        | Keyword::Ao2
        | Keyword::Ao1a
        | Keyword::Ao2a
        | Keyword::NoSpeci
        | Keyword::Pwino
        | Keyword::Tsno
        | Keyword::Rvrno
        | Keyword::Fzrano
        | Keyword::Pno => SyntaxGroup::Other,
    }
}

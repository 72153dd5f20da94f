//! Ordered group recognizer table
//!
//! Recognizers are tried in priority order and the first match wins, so more
//! specific formats sit above more permissive ones: keywords before locations
//! (`AUTO`, `NOSIG` are four or five letters), trends before visibility, and
//! [`UnknownGroup`] last as the catch-all.

use crate::app::models::{AppendOutcome, ReportPart};
use crate::app::services::groups::{
    CloudGroup, Group, GroupKind, KeywordGroup, LayerForecastGroup, LightningGroup, LocationGroup,
    LowMidHighCloudGroup, MinMaxTemperatureGroup, MiscGroup, PrecipitationGroup, PressureGroup,
    PressureTendencyGroup, ReportGroup, ReportTimeGroup, RunwayStateGroup, SeaSurfaceGroup,
    TemperatureGroup, TrendGroup, UnknownGroup, VisibilityGroup, WeatherGroup, WindGroup,
};

pub type Recognizer = fn(&str, ReportPart) -> Option<Group>;

fn recognize_as<G: ReportGroup + Into<Group>>(token: &str, part: ReportPart) -> Option<Group> {
    G::parse(token, part).map(Into::into)
}

/// Recognizers in priority order
pub const RECOGNIZERS: &[(GroupKind, Recognizer)] = &[
    (GroupKind::Keyword, recognize_as::<KeywordGroup>),
    (GroupKind::Location, recognize_as::<LocationGroup>),
    (GroupKind::ReportTime, recognize_as::<ReportTimeGroup>),
    (GroupKind::Trend, recognize_as::<TrendGroup>),
    (GroupKind::Wind, recognize_as::<WindGroup>),
    (GroupKind::Visibility, recognize_as::<VisibilityGroup>),
    (GroupKind::Cloud, recognize_as::<CloudGroup>),
    (GroupKind::Weather, recognize_as::<WeatherGroup>),
    (GroupKind::Temperature, recognize_as::<TemperatureGroup>),
    (GroupKind::Pressure, recognize_as::<PressureGroup>),
    (GroupKind::RunwayState, recognize_as::<RunwayStateGroup>),
    (GroupKind::SeaSurface, recognize_as::<SeaSurfaceGroup>),
    (GroupKind::MinMaxTemperature, recognize_as::<MinMaxTemperatureGroup>),
    (GroupKind::Precipitation, recognize_as::<PrecipitationGroup>),
    (GroupKind::LayerForecast, recognize_as::<LayerForecastGroup>),
    (GroupKind::PressureTendency, recognize_as::<PressureTendencyGroup>),
    (GroupKind::LowMidHighCloud, recognize_as::<LowMidHighCloudGroup>),
    (GroupKind::Lightning, recognize_as::<LightningGroup>),
    (GroupKind::Misc, recognize_as::<MiscGroup>),
    (GroupKind::Unknown, recognize_as::<UnknownGroup>),
];

/// Best-matching group for a token; never fails
pub fn recognize(token: &str, part: ReportPart) -> Group {
    RECOGNIZERS
        .iter()
        .find_map(|(_, recognizer)| recognizer(token, part))
        .unwrap_or_else(|| Group::Unknown(UnknownGroup::new(token)))
}

/// Rebuild a group from its space-joined raw text
///
/// Returns `None` if the text does not form exactly one group, i.e. some token
/// after the first would have started a new group.
pub fn parse_group(raw: &str, part: ReportPart) -> Option<Group> {
    let mut tokens = raw.split_whitespace();
    let mut group = recognize(tokens.next()?, part);
    let mut closed = false;
    for token in tokens {
        if closed {
            return None;
        }
        match group.append(token, part) {
            AppendOutcome::Appended => {}
            AppendOutcome::Invalidated => closed = true,
            AppendOutcome::NotAppended => return None,
        }
    }
    Some(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_last_resort() {
        let (kind, _) = RECOGNIZERS.last().unwrap();
        assert_eq!(*kind, GroupKind::Unknown);
        assert_eq!(recognize("XYZZY", ReportPart::Metar).kind(), GroupKind::Unknown);
    }

    #[test]
    fn test_keywords_win_over_location() {
        assert_eq!(recognize("NOSIG", ReportPart::Metar).kind(), GroupKind::Trend);
        assert_eq!(recognize("AUTO", ReportPart::Header).kind(), GroupKind::Location);
        assert_eq!(recognize("AUTO", ReportPart::Metar).kind(), GroupKind::Keyword);
        assert_eq!(recognize("TAF", ReportPart::Header).kind(), GroupKind::Keyword);
    }

    #[test]
    fn test_same_text_differs_by_part() {
        assert_eq!(recognize("CLR", ReportPart::Metar).kind(), GroupKind::Cloud);
        assert_eq!(recognize("CLR", ReportPart::Remarks).kind(), GroupKind::Unknown);
        assert_eq!(recognize("33/16", ReportPart::Metar).kind(), GroupKind::Temperature);
        assert_eq!(recognize("33/16", ReportPart::Taf).kind(), GroupKind::Unknown);
    }

    #[test]
    fn test_runway_state_not_mistaken_for_rvr() {
        assert_eq!(recognize("R32/290055", ReportPart::Metar).kind(), GroupKind::RunwayState);
        assert_eq!(recognize("R32/0600", ReportPart::Metar).kind(), GroupKind::Visibility);
    }

    #[test]
    fn test_parse_group_rebuilds_multi_token_groups() {
        let group = parse_group("CIG 025 RWY36", ReportPart::Remarks).unwrap();
        assert_eq!(group.kind(), GroupKind::Cloud);
        assert!(group.is_valid());

        assert!(parse_group("CIG 025 004", ReportPart::Remarks).is_none());
        assert!(parse_group("", ReportPart::Remarks).is_none());
    }
}

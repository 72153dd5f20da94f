//! Per-variant visitor over decoded groups
//!
//! Every [`Group`] variant has its own hook. There are no default bodies, so a
//! new variant does not compile until each visitor handles it.

use crate::app::models::ReportPart;
use crate::app::services::groups::{
    CloudGroup, Group, KeywordGroup, LayerForecastGroup, LightningGroup, LocationGroup,
    LowMidHighCloudGroup, MinMaxTemperatureGroup, MiscGroup, PrecipitationGroup, PressureGroup,
    PressureTendencyGroup, ReportTimeGroup, RunwayStateGroup, SeaSurfaceGroup, TemperatureGroup,
    TrendGroup, UnknownGroup, VisibilityGroup, WeatherGroup, WindGroup,
};
use crate::app::services::report_parser::GroupInfo;

/// One hook per group variant, each given the group, its part and its source text
pub trait GroupVisitor {
    type Output;

    fn visit_keyword(&mut self, group: &KeywordGroup, part: ReportPart, raw: &str) -> Self::Output;
    fn visit_location(&mut self, group: &LocationGroup, part: ReportPart, raw: &str) -> Self::Output;
    fn visit_report_time(
        &mut self,
        group: &ReportTimeGroup,
        part: ReportPart,
        raw: &str,
    ) -> Self::Output;
    fn visit_trend(&mut self, group: &TrendGroup, part: ReportPart, raw: &str) -> Self::Output;
    fn visit_wind(&mut self, group: &WindGroup, part: ReportPart, raw: &str) -> Self::Output;
    fn visit_visibility(
        &mut self,
        group: &VisibilityGroup,
        part: ReportPart,
        raw: &str,
    ) -> Self::Output;
    fn visit_cloud(&mut self, group: &CloudGroup, part: ReportPart, raw: &str) -> Self::Output;
    fn visit_weather(&mut self, group: &WeatherGroup, part: ReportPart, raw: &str) -> Self::Output;
    fn visit_temperature(
        &mut self,
        group: &TemperatureGroup,
        part: ReportPart,
        raw: &str,
    ) -> Self::Output;
    fn visit_pressure(&mut self, group: &PressureGroup, part: ReportPart, raw: &str) -> Self::Output;
    fn visit_runway_state(
        &mut self,
        group: &RunwayStateGroup,
        part: ReportPart,
        raw: &str,
    ) -> Self::Output;
    fn visit_sea_surface(
        &mut self,
        group: &SeaSurfaceGroup,
        part: ReportPart,
        raw: &str,
    ) -> Self::Output;
    fn visit_min_max_temperature(
        &mut self,
        group: &MinMaxTemperatureGroup,
        part: ReportPart,
        raw: &str,
    ) -> Self::Output;
    fn visit_precipitation(
        &mut self,
        group: &PrecipitationGroup,
        part: ReportPart,
        raw: &str,
    ) -> Self::Output;
    fn visit_layer_forecast(
        &mut self,
        group: &LayerForecastGroup,
        part: ReportPart,
        raw: &str,
    ) -> Self::Output;
    fn visit_pressure_tendency(
        &mut self,
        group: &PressureTendencyGroup,
        part: ReportPart,
        raw: &str,
    ) -> Self::Output;
    fn visit_low_mid_high_cloud(
        &mut self,
        group: &LowMidHighCloudGroup,
        part: ReportPart,
        raw: &str,
    ) -> Self::Output;
    fn visit_lightning(
        &mut self,
        group: &LightningGroup,
        part: ReportPart,
        raw: &str,
    ) -> Self::Output;
    fn visit_misc(&mut self, group: &MiscGroup, part: ReportPart, raw: &str) -> Self::Output;
    fn visit_unknown(&mut self, group: &UnknownGroup, part: ReportPart, raw: &str) -> Self::Output;
}

/// Dispatch one decoded group to the matching hook
pub fn visit<V: GroupVisitor + ?Sized>(visitor: &mut V, info: &GroupInfo) -> V::Output {
    let part = info.report_part;
    let raw = info.raw_string.as_str();
    match &info.group {
        Group::Keyword(g) => visitor.visit_keyword(g, part, raw),
        Group::Location(g) => visitor.visit_location(g, part, raw),
        Group::ReportTime(g) => visitor.visit_report_time(g, part, raw),
        Group::Trend(g) => visitor.visit_trend(g, part, raw),
        Group::Wind(g) => visitor.visit_wind(g, part, raw),
        Group::Visibility(g) => visitor.visit_visibility(g, part, raw),
        Group::Cloud(g) => visitor.visit_cloud(g, part, raw),
        Group::Weather(g) => visitor.visit_weather(g, part, raw),
        Group::Temperature(g) => visitor.visit_temperature(g, part, raw),
        Group::Pressure(g) => visitor.visit_pressure(g, part, raw),
        Group::RunwayState(g) => visitor.visit_runway_state(g, part, raw),
        Group::SeaSurface(g) => visitor.visit_sea_surface(g, part, raw),
        Group::MinMaxTemperature(g) => visitor.visit_min_max_temperature(g, part, raw),
        Group::Precipitation(g) => visitor.visit_precipitation(g, part, raw),
        Group::LayerForecast(g) => visitor.visit_layer_forecast(g, part, raw),
        Group::PressureTendency(g) => visitor.visit_pressure_tendency(g, part, raw),
        Group::LowMidHighCloud(g) => visitor.visit_low_mid_high_cloud(g, part, raw),
        Group::Lightning(g) => visitor.visit_lightning(g, part, raw),
        Group::Misc(g) => visitor.visit_misc(g, part, raw),
        Group::Unknown(g) => visitor.visit_unknown(g, part, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::groups::GroupKind;
    use crate::app::services::report_parser::ReportParser;
    use crate::config::DecoderConfig;

    /// Records which hook fired for each group
    struct KindRecorder;

    impl GroupVisitor for KindRecorder {
        type Output = (GroupKind, String);

        fn visit_keyword(&mut self, _: &KeywordGroup, _: ReportPart, raw: &str) -> Self::Output {
            (GroupKind::Keyword, raw.to_string())
        }
        fn visit_location(&mut self, _: &LocationGroup, _: ReportPart, raw: &str) -> Self::Output {
            (GroupKind::Location, raw.to_string())
        }
        fn visit_report_time(
            &mut self,
            _: &ReportTimeGroup,
            _: ReportPart,
            raw: &str,
        ) -> Self::Output {
            (GroupKind::ReportTime, raw.to_string())
        }
        fn visit_trend(&mut self, _: &TrendGroup, _: ReportPart, raw: &str) -> Self::Output {
            (GroupKind::Trend, raw.to_string())
        }
        fn visit_wind(&mut self, _: &WindGroup, _: ReportPart, raw: &str) -> Self::Output {
            (GroupKind::Wind, raw.to_string())
        }
        fn visit_visibility(
            &mut self,
            _: &VisibilityGroup,
            _: ReportPart,
            raw: &str,
        ) -> Self::Output {
            (GroupKind::Visibility, raw.to_string())
        }
        fn visit_cloud(&mut self, _: &CloudGroup, _: ReportPart, raw: &str) -> Self::Output {
            (GroupKind::Cloud, raw.to_string())
        }
        fn visit_weather(&mut self, _: &WeatherGroup, _: ReportPart, raw: &str) -> Self::Output {
            (GroupKind::Weather, raw.to_string())
        }
        fn visit_temperature(
            &mut self,
            _: &TemperatureGroup,
            _: ReportPart,
            raw: &str,
        ) -> Self::Output {
            (GroupKind::Temperature, raw.to_string())
        }
        fn visit_pressure(&mut self, _: &PressureGroup, _: ReportPart, raw: &str) -> Self::Output {
            (GroupKind::Pressure, raw.to_string())
        }
        fn visit_runway_state(
            &mut self,
            _: &RunwayStateGroup,
            _: ReportPart,
            raw: &str,
        ) -> Self::Output {
            (GroupKind::RunwayState, raw.to_string())
        }
        fn visit_sea_surface(
            &mut self,
            _: &SeaSurfaceGroup,
            _: ReportPart,
            raw: &str,
        ) -> Self::Output {
            (GroupKind::SeaSurface, raw.to_string())
        }
        fn visit_min_max_temperature(
            &mut self,
            _: &MinMaxTemperatureGroup,
            _: ReportPart,
            raw: &str,
        ) -> Self::Output {
            (GroupKind::MinMaxTemperature, raw.to_string())
        }
        fn visit_precipitation(
            &mut self,
            _: &PrecipitationGroup,
            _: ReportPart,
            raw: &str,
        ) -> Self::Output {
            (GroupKind::Precipitation, raw.to_string())
        }
        fn visit_layer_forecast(
            &mut self,
            _: &LayerForecastGroup,
            _: ReportPart,
            raw: &str,
        ) -> Self::Output {
            (GroupKind::LayerForecast, raw.to_string())
        }
        fn visit_pressure_tendency(
            &mut self,
            _: &PressureTendencyGroup,
            _: ReportPart,
            raw: &str,
        ) -> Self::Output {
            (GroupKind::PressureTendency, raw.to_string())
        }
        fn visit_low_mid_high_cloud(
            &mut self,
            _: &LowMidHighCloudGroup,
            _: ReportPart,
            raw: &str,
        ) -> Self::Output {
            (GroupKind::LowMidHighCloud, raw.to_string())
        }
        fn visit_lightning(
            &mut self,
            _: &LightningGroup,
            _: ReportPart,
            raw: &str,
        ) -> Self::Output {
            (GroupKind::Lightning, raw.to_string())
        }
        fn visit_misc(&mut self, _: &MiscGroup, _: ReportPart, raw: &str) -> Self::Output {
            (GroupKind::Misc, raw.to_string())
        }
        fn visit_unknown(&mut self, _: &UnknownGroup, _: ReportPart, raw: &str) -> Self::Output {
            (GroupKind::Unknown, raw.to_string())
        }
    }

    #[test]
    fn test_visit_dispatches_by_variant() {
        let parser = ReportParser::new(DecoderConfig::default());
        let result = parser.parse("KDDC 112052Z 19023KT 1 3/4SM RMK CIG 025 RWY36 XYZZY");

        let mut recorder = KindRecorder;
        let visited: Vec<(GroupKind, String)> = result
            .groups
            .iter()
            .map(|info| visit(&mut recorder, info))
            .collect();

        assert_eq!(visited.len(), result.groups.len());
        for ((kind, raw), info) in visited.iter().zip(&result.groups) {
            assert_eq!(*kind, info.group.kind());
            assert_eq!(raw, &info.raw_string);
        }
        assert_eq!(visited[3], (GroupKind::Visibility, "1 3/4SM".to_string()));
        assert_eq!(visited.last().map(|(kind, _)| *kind), Some(GroupKind::Unknown));
    }
}

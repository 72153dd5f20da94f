//! Text rendering of decoded reports
//!
//! [`SummaryVisitor`] turns each group into a one-line plain description;
//! [`render_text`] lays those lines out under a report header and adds color.

use crate::app::models::values::{
    Direction, Distance, DistanceModifier, DistanceUnit, Precipitation, PrecipitationUnit,
    Pressure, PressureUnit, Runway, RunwayDesignator, Speed, SpeedUnit, Temperature, Time,
};
use crate::app::models::ReportPart;
use crate::app::services::groups::{
    CloudGroup, GroupKind, KeywordGroup, LayerForecastGroup, LightningGroup, LocationGroup,
    LowMidHighCloudGroup, MinMaxTemperatureGroup, MiscGroup, PrecipitationGroup, PressureGroup,
    PressureTendencyGroup, ReportTimeGroup, RunwayStateGroup, SeaSurfaceGroup, TemperatureGroup,
    TrendGroup, UnknownGroup, VisibilityGroup, WeatherGroup, WindGroup,
};
use crate::app::services::groups::cloud::ConvectiveType;
use crate::app::services::groups::visibility::RvrTrend;
use crate::app::services::report_parser::ParseResult;
use crate::app::services::visitor::{GroupVisitor, visit};
use crate::constants::REPORT_DATETIME_FORMAT;
use chrono::NaiveDate;
use colored::*;

// =============================================================================
// Value formatting
// =============================================================================

fn distance(d: &Distance) -> String {
    let Some(value) = d.value() else {
        return "not reported".to_string();
    };
    let modifier = match d.modifier {
        DistanceModifier::None => "",
        DistanceModifier::LessThan => "<",
        DistanceModifier::MoreThan => ">",
    };
    let unit = match d.unit {
        DistanceUnit::Meters => "m",
        DistanceUnit::StatuteMiles => "SM",
        DistanceUnit::Feet => "ft",
    };
    format!("{}{} {}", modifier, value, unit)
}

fn speed(s: &Speed) -> String {
    let Some(value) = s.value else {
        return "not reported".to_string();
    };
    let unit = match s.unit {
        SpeedUnit::Knots => "kt",
        SpeedUnit::MetersPerSecond => "m/s",
        SpeedUnit::KilometersPerHour => "km/h",
    };
    format!("{} {}", value, unit)
}

fn temperature(t: &Temperature) -> String {
    match t.value {
        Some(value) if t.precise => format!("{:.1}°C", value),
        Some(value) => format!("{}°C", value),
        None => "not reported".to_string(),
    }
}

fn pressure(p: &Pressure) -> String {
    let Some(value) = p.value else {
        return "not reported".to_string();
    };
    let unit = match p.unit {
        PressureUnit::Hectopascal => "hPa",
        PressureUnit::InchesHg => "inHg",
        PressureUnit::MillimetersHg => "mmHg",
    };
    format!("{} {}", value, unit)
}

fn precipitation(p: &Precipitation) -> String {
    let Some(value) = p.value else {
        return "not reported".to_string();
    };
    let unit = match p.unit {
        PrecipitationUnit::Millimeters => "mm",
        PrecipitationUnit::Inches => "in",
    };
    format!("{} {}", value, unit)
}

fn direction(d: &Direction) -> String {
    match d {
        Direction::NotReported => "not reported".to_string(),
        Direction::Variable => "variable".to_string(),
        Direction::Degrees(deg) => format!("{}°", deg),
        Direction::Cardinal(cardinal) => format!("{:?}", cardinal),
        Direction::Overhead => "overhead".to_string(),
        Direction::AllQuadrants => "all quadrants".to_string(),
        Direction::NoDirectionalVariation => "no directional variation".to_string(),
    }
}

fn runway(r: &Runway) -> String {
    if r.is_all_runways() {
        return "all runways".to_string();
    }
    let designator = match r.designator {
        RunwayDesignator::None => "",
        RunwayDesignator::Left => "L",
        RunwayDesignator::Center => "C",
        RunwayDesignator::Right => "R",
    };
    format!("runway {:02}{}", r.number, designator)
}

fn time(t: &Time) -> String {
    match t.day {
        Some(day) => format!("day {} {:02}:{:02}Z", day, t.hour, t.minute),
        None => format!("{:02}:{:02}Z", t.hour, t.minute),
    }
}

fn code(value: Option<u8>) -> String {
    value.map_or_else(|| "/".to_string(), |v| v.to_string())
}

// =============================================================================
// Summary Visitor
// =============================================================================

/// One-line plain text description of each group
#[derive(Debug, Clone, Default)]
pub struct SummaryVisitor {
    reference_date: Option<NaiveDate>,
}

impl SummaryVisitor {
    /// With a reference date, report times are shown as full calendar dates
    pub fn new(reference_date: Option<NaiveDate>) -> Self {
        Self { reference_date }
    }
}

impl GroupVisitor for SummaryVisitor {
    type Output = String;

    fn visit_keyword(&mut self, group: &KeywordGroup, _: ReportPart, _: &str) -> String {
        format!("{:?}", group.keyword)
    }

    fn visit_location(&mut self, group: &LocationGroup, _: ReportPart, _: &str) -> String {
        format!("station {}", group.icao)
    }

    fn visit_report_time(&mut self, group: &ReportTimeGroup, _: ReportPart, _: &str) -> String {
        let resolved = self
            .reference_date
            .and_then(|reference| group.time.date_before(reference));
        match resolved {
            Some(datetime) => format!("issued {}", datetime.format(REPORT_DATETIME_FORMAT)),
            None => format!("issued {}", time(&group.time)),
        }
    }

    fn visit_trend(&mut self, group: &TrendGroup, _: ReportPart, _: &str) -> String {
        let mut parts = vec![format!("{:?}", group.trend)];
        if let Some(probability) = group.probability {
            parts.push(format!("probability {}%", probability));
        }
        if let Some(from) = &group.time_from {
            parts.push(format!("from {}", time(from)));
        }
        if let Some(until) = &group.time_until {
            parts.push(format!("until {}", time(until)));
        }
        if let Some(at) = &group.time_at {
            parts.push(format!("at {}", time(at)));
        }
        parts.join(", ")
    }

    fn visit_wind(&mut self, group: &WindGroup, _: ReportPart, _: &str) -> String {
        let mut parts = vec![format!("{:?}", group.wind_type)];
        if group.direction.is_reported() {
            parts.push(format!("from {}", direction(&group.direction)));
        }
        if group.speed.is_reported() {
            parts.push(speed(&group.speed));
        }
        if group.gust.is_reported() {
            parts.push(format!("gusting {}", speed(&group.gust)));
        }
        if group.sector_begin.is_reported() {
            parts.push(format!(
                "varying {} to {}",
                direction(&group.sector_begin),
                direction(&group.sector_end)
            ));
        }
        if let Some(height) = &group.height {
            parts.push(format!("at {}", distance(height)));
        }
        if let Some(rwy) = &group.runway {
            parts.push(runway(rwy));
        }
        if group.all_runways {
            parts.push("all runways".to_string());
        }
        parts.join(", ")
    }

    fn visit_visibility(&mut self, group: &VisibilityGroup, _: ReportPart, _: &str) -> String {
        let mut parts = vec![format!("{:?}", group.visibility_type)];
        if let Some(rwy) = &group.runway {
            parts.push(runway(rwy));
        }
        if let Some(dir) = &group.direction {
            parts.push(direction(dir));
        }
        parts.push(distance(&group.visibility));
        if let Some(max) = &group.max_visibility {
            parts.push(format!("up to {}", distance(max)));
        }
        if group.trend != RvrTrend::None {
            parts.push(format!("trend {:?}", group.trend));
        }
        parts.join(", ")
    }

    fn visit_cloud(&mut self, group: &CloudGroup, _: ReportPart, _: &str) -> String {
        let mut parts = vec![format!("{:?}", group.amount)];
        if let Some(variable) = &group.variable_amount {
            parts.push(format!("varying to {:?}", variable));
        }
        if group.height.is_reported() {
            parts.push(format!("at {}", distance(&group.height)));
        }
        if let Some(max) = &group.max_height {
            parts.push(format!("up to {}", distance(max)));
        }
        if group.convective != ConvectiveType::None {
            parts.push(format!("{:?}", group.convective));
        }
        if let Some(rwy) = &group.runway {
            parts.push(runway(rwy));
        }
        if let Some(dir) = &group.direction {
            parts.push(direction(dir));
        }
        format!("{:?}: {}", group.cloud_type, parts.join(", "))
    }

    fn visit_weather(&mut self, group: &WeatherGroup, _: ReportPart, _: &str) -> String {
        let entries: Vec<String> = group
            .entries
            .iter()
            .map(|entry| {
                let phenomena: Vec<String> =
                    entry.phenomena.iter().map(|p| format!("{:?}", p)).collect();
                format!(
                    "{:?} {:?} {}",
                    entry.qualifier,
                    entry.descriptor,
                    phenomena.join("+")
                )
            })
            .collect();
        format!("{:?}: {}", group.weather_type, entries.join("; "))
    }

    fn visit_temperature(&mut self, group: &TemperatureGroup, _: ReportPart, _: &str) -> String {
        format!(
            "air {}, dew point {}",
            temperature(&group.air),
            temperature(&group.dew_point)
        )
    }

    fn visit_pressure(&mut self, group: &PressureGroup, _: ReportPart, _: &str) -> String {
        let mut summary = format!("{:?} {}", group.pressure_type, pressure(&group.pressure));
        if let Some(secondary) = &group.secondary {
            summary.push_str(&format!(" / {}", pressure(secondary)));
        }
        summary
    }

    fn visit_runway_state(&mut self, group: &RunwayStateGroup, _: ReportPart, _: &str) -> String {
        let location = group
            .runway
            .as_ref()
            .map_or_else(|| "aerodrome".to_string(), runway);
        format!(
            "{}: {:?}, {:?}, {:?}, {:?}, friction {:?}",
            location, group.state_type, group.deposits, group.extent, group.depth, group.friction
        )
    }

    fn visit_sea_surface(&mut self, group: &SeaSurfaceGroup, _: ReportPart, _: &str) -> String {
        format!(
            "sea {}, waves {:?}",
            temperature(&group.temperature),
            group.waves
        )
    }

    fn visit_min_max_temperature(
        &mut self,
        group: &MinMaxTemperatureGroup,
        _: ReportPart,
        _: &str,
    ) -> String {
        let mut parts = vec![format!("{:?}", group.min_max_type)];
        if let Some(minimum) = &group.minimum {
            parts.push(format!("min {}", temperature(minimum)));
        }
        if let Some(at) = &group.minimum_time {
            parts.push(format!("at {}", time(at)));
        }
        if let Some(maximum) = &group.maximum {
            parts.push(format!("max {}", temperature(maximum)));
        }
        if let Some(at) = &group.maximum_time {
            parts.push(format!("at {}", time(at)));
        }
        parts.join(", ")
    }

    fn visit_precipitation(
        &mut self,
        group: &PrecipitationGroup,
        _: ReportPart,
        _: &str,
    ) -> String {
        let mut summary = format!(
            "{:?} {}",
            group.precipitation_type,
            precipitation(&group.amount)
        );
        if let Some(total) = &group.total {
            summary.push_str(&format!(", total {}", precipitation(total)));
        }
        summary
    }

    fn visit_layer_forecast(
        &mut self,
        group: &LayerForecastGroup,
        _: ReportPart,
        _: &str,
    ) -> String {
        format!(
            "{:?} from {} to {}",
            group.hazard,
            distance(&group.base_height),
            distance(&group.top_height)
        )
    }

    fn visit_pressure_tendency(
        &mut self,
        group: &PressureTendencyGroup,
        _: ReportPart,
        _: &str,
    ) -> String {
        match &group.change {
            Some(change) => format!("{:?}, change {}", group.tendency, pressure(change)),
            None => format!("{:?}", group.tendency),
        }
    }

    fn visit_low_mid_high_cloud(
        &mut self,
        group: &LowMidHighCloudGroup,
        _: ReportPart,
        _: &str,
    ) -> String {
        format!(
            "cloud types low {} mid {} high {}",
            code(group.low),
            code(group.mid),
            code(group.high)
        )
    }

    fn visit_lightning(&mut self, group: &LightningGroup, _: ReportPart, _: &str) -> String {
        let types: Vec<String> = group.types.iter().map(|t| format!("{:?}", t)).collect();
        let mut summary = format!("{:?} lightning", group.frequency);
        if !types.is_empty() {
            summary.push_str(&format!(" ({})", types.join(", ")));
        }
        summary.push_str(&format!(", {:?}", group.distance));
        if !group.sectors.is_empty() {
            summary.push_str(&format!(", {} sector(s)", group.sectors.len()));
        }
        summary
    }

    fn visit_misc(&mut self, group: &MiscGroup, _: ReportPart, _: &str) -> String {
        match group.value {
            Some(value) => format!("{:?} {}", group.misc_type, value),
            None => format!("{:?}", group.misc_type),
        }
    }

    fn visit_unknown(&mut self, group: &UnknownGroup, _: ReportPart, _: &str) -> String {
        format!("unrecognized '{}'", group.text)
    }
}

// =============================================================================
// Report Layout
// =============================================================================

/// Render one parsed report: a header line then one line per group
pub fn render_text(report: &str, result: &ParseResult, visitor: &mut SummaryVisitor) -> String {
    let mut lines = Vec::with_capacity(result.groups.len() + 1);

    let status = match result.error {
        Some(error) => format!("error: {}", error).bright_red().bold(),
        None => "ok".bright_green().bold(),
    };
    lines.push(format!(
        "{} [{}] {}",
        report.trim().bold(),
        result.report_type.to_string().bright_cyan(),
        status
    ));

    for info in &result.groups {
        let summary = visit(visitor, info);
        let kind = format!("{:<20}", info.group.kind().to_string());
        let kind = if !info.group.is_valid() {
            kind.red()
        } else if info.group.kind() == GroupKind::Unknown {
            kind.yellow()
        } else {
            kind.green()
        };
        lines.push(format!(
            "  {:<8} {} {:<24} {}",
            info.report_part.to_string(),
            kind,
            info.raw_string,
            summary
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::report_parser::ReportParser;
    use crate::config::DecoderConfig;

    fn summaries(report: &str, reference_date: Option<NaiveDate>) -> Vec<String> {
        let result = ReportParser::new(DecoderConfig::default()).parse(report);
        let mut visitor = SummaryVisitor::new(reference_date);
        result
            .groups
            .iter()
            .map(|info| visit(&mut visitor, info))
            .collect()
    }

    #[test]
    fn test_summaries_describe_values() {
        let lines = summaries("KDDC 112052Z 19023G34KT 7SM 33/16 A2992", None);
        assert_eq!(lines[0], "station KDDC");
        assert_eq!(lines[1], "issued day 11 20:52Z");
        assert!(lines[2].contains("from 190°"));
        assert!(lines[2].contains("23 kt"));
        assert!(lines[2].contains("gusting 34 kt"));
        assert!(lines[3].contains("7 SM"));
        assert_eq!(lines[4], "air 33°C, dew point 16°C");
        assert!(lines[5].contains("inHg"));
    }

    #[test]
    fn test_report_time_resolved_against_reference_date() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 12);
        let lines = summaries("KDDC 112052Z 19023KT", reference);
        assert_eq!(lines[1], "issued 2024-03-11 20:52Z");
    }

    #[test]
    fn test_unknown_summary_carries_text() {
        let lines = summaries("KDDC 112052Z XYZZY", None);
        assert_eq!(lines[2], "unrecognized 'XYZZY'");
    }

    #[test]
    fn test_render_text_has_line_per_group() {
        colored::control::set_override(false);
        let report = "KDDC 112052Z 19023KT RMK AO2";
        let result = ReportParser::new(DecoderConfig::default()).parse(report);
        let text = render_text(report, &result, &mut SummaryVisitor::default());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), result.groups.len() + 1);
        assert!(lines[0].starts_with("KDDC 112052Z 19023KT RMK AO2 [METAR] ok"));
        assert!(lines[3].contains("wind"));
        assert!(lines[5].contains("remarks"));
    }
}

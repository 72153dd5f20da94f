//! Integration tests for the report parser with real-world reports
//!
//! These tests exercise the public API end to end: parsing, statistics over a
//! batch, visitors implemented outside the crate, JSON output and file input.

use metar_decoder::app::services::groups::{
    CloudGroup, KeywordGroup, LayerForecastGroup, LightningGroup, LocationGroup,
    LowMidHighCloudGroup, MinMaxTemperatureGroup, MiscGroup, PrecipitationGroup, PressureGroup,
    PressureTendencyGroup, ReportTimeGroup, RunwayStateGroup, SeaSurfaceGroup, TemperatureGroup,
    TrendGroup, UnknownGroup, VisibilityGroup, WeatherGroup, WindGroup,
};
use metar_decoder::cli::commands::{decode_reports, format_decoded_json, read_reports};
use metar_decoder::{
    DecoderConfig, GroupKind, GroupVisitor, ReportError, ReportParser, ReportPart, ReportStats,
    ReportType, parse, parse_group, visit,
};
use std::io::Write;

const REPORTS: &[&str] = &[
    "METAR KBOS 121154Z 29012G20KT 10SM FEW045 SCT250 04/M09 A3007 RMK AO2 SLP183 T00441094",
    "SPECI KORD 121212Z 27015G25KT 2SM -SN BR OVC012 M02/M04 A2998 RMK AO2 P0001",
    "EGLL 121150Z 24010KT 210V270 9999 -SHRA FEW020CB BKN035 12/08 Q1012 NOSIG",
    "TAF EGLL 121100Z 1212/1318 24012KT 9999 BKN030 TEMPO 1212/1216 7000 -SHRA \
     PROB30 1300/1306 BKN012 BECMG 1310/1312 30015G25KT",
    "TAF AMD KXYZ 121130Z 1212/1312 CNL",
    "KDDC 112052Z NIL",
];

/// Counts groups per report part without looking at their content
#[derive(Default)]
struct PartCounter {
    header: usize,
    body: usize,
    remarks: usize,
}

impl PartCounter {
    fn count(&mut self, part: ReportPart) {
        match part {
            ReportPart::Header => self.header += 1,
            ReportPart::Remarks => self.remarks += 1,
            _ => self.body += 1,
        }
    }
}

impl GroupVisitor for PartCounter {
    type Output = ();

    fn visit_keyword(&mut self, _: &KeywordGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_location(&mut self, _: &LocationGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_report_time(&mut self, _: &ReportTimeGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_trend(&mut self, _: &TrendGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_wind(&mut self, _: &WindGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_visibility(&mut self, _: &VisibilityGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_cloud(&mut self, _: &CloudGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_weather(&mut self, _: &WeatherGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_temperature(&mut self, _: &TemperatureGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_pressure(&mut self, _: &PressureGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_runway_state(&mut self, _: &RunwayStateGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_sea_surface(&mut self, _: &SeaSurfaceGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_min_max_temperature(&mut self, _: &MinMaxTemperatureGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_precipitation(&mut self, _: &PrecipitationGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_layer_forecast(&mut self, _: &LayerForecastGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_pressure_tendency(&mut self, _: &PressureTendencyGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_low_mid_high_cloud(&mut self, _: &LowMidHighCloudGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_lightning(&mut self, _: &LightningGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_misc(&mut self, _: &MiscGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
    fn visit_unknown(&mut self, _: &UnknownGroup, part: ReportPart, _: &str) {
        self.count(part)
    }
}

/// Resolve report types for a mixed batch of METAR, SPECI and TAF reports
#[test]
fn test_report_types_resolved() {
    let types: Vec<ReportType> = REPORTS.iter().map(|r| parse(r).report_type).collect();
    assert_eq!(
        types,
        vec![
            ReportType::Metar,
            ReportType::Metar,
            ReportType::Metar,
            ReportType::Taf,
            ReportType::Taf,
            ReportType::Metar,
        ]
    );
}

/// Well-formed reports decode without structural errors or unknown groups
#[test]
fn test_real_reports_decode_cleanly() {
    for report in REPORTS {
        let result = parse(report);
        assert_eq!(result.error, None, "unexpected error in '{}'", report);
        assert_eq!(
            result.unrecognized_count(),
            0,
            "unrecognized group in '{}': {:?}",
            report,
            result.kinds()
        );
    }
}

/// Every group rebuilds from its stored text in its stored part
#[test]
fn test_groups_rebuild_from_raw_strings() {
    for report in REPORTS {
        for info in parse(report).groups {
            assert_eq!(
                parse_group(&info.raw_string, info.report_part).as_ref(),
                Some(&info.group)
            );
        }
    }
}

/// External visitors see every group with its part
#[test]
fn test_external_visitor_counts_parts() {
    let result = parse(REPORTS[0]);
    let mut counter = PartCounter::default();
    for info in &result.groups {
        visit(&mut counter, info);
    }

    // METAR KBOS 121154Z
    assert_eq!(counter.header, 3);
    // AO2 SLP183 T00441094
    assert_eq!(counter.remarks, 3);
    assert_eq!(
        counter.header + counter.body + counter.remarks,
        result.groups.len()
    );
}

/// Batch statistics over good and broken reports
#[test]
fn test_batch_statistics() {
    let parser = ReportParser::new(DecoderConfig::default());
    let mut stats = ReportStats::new();
    for report in REPORTS {
        stats.record(&parser.parse(report));
    }
    stats.record(&parser.parse("KDDC 112052Z NIL 19023KT"));
    stats.record(&parser.parse("KXYZ 121130Z CNL"));

    assert_eq!(stats.total_reports, 8);
    assert_eq!(stats.taf_reports, 2);
    assert_eq!(stats.reports_with_errors, 2);
    assert_eq!(
        stats.errors_by_kind.get(&ReportError::CnlAllowedInTafOnly),
        Some(&1)
    );
    assert_eq!(stats.success_rate(), 75.0);
    assert!(!stats.is_successful());
}

/// The TAF change groups keep their multi-token text
#[test]
fn test_taf_change_groups() {
    let result = parse(REPORTS[3]);
    let trends: Vec<&str> = result
        .groups
        .iter()
        .filter(|info| info.group.kind() == GroupKind::Trend)
        .map(|info| info.raw_string.as_str())
        .collect();
    assert_eq!(
        trends,
        vec![
            "1212/1318",
            "TEMPO 1212/1216",
            "PROB30 1300/1306",
            "BECMG 1310/1312"
        ]
    );
    assert!(result.groups.iter().skip(4).all(|info| info.report_part == ReportPart::Taf));
}

/// Reports read from a file decode to JSON with one entry per line
#[test]
fn test_file_input_to_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# batch").unwrap();
    for report in REPORTS {
        writeln!(file, "{}", report).unwrap();
    }

    let reports = read_reports(&[], Some(file.path())).unwrap();
    assert_eq!(reports.len(), REPORTS.len());

    let results = decode_reports(&ReportParser::default(), &reports);
    let json = format_decoded_json(&reports, &results).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = value.as_array().unwrap();

    assert_eq!(entries.len(), REPORTS.len());
    assert_eq!(entries[3]["report_type"], "Taf");
    assert_eq!(entries[5]["groups"][2]["raw_string"], "NIL");
    assert!(entries.iter().all(|entry| entry["error"].is_null()));
}

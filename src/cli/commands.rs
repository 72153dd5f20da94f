//! Command implementations for the decoder CLI
//!
//! This module reads reports from the command line, a file or stdin, runs them
//! through [`ReportParser`], and prints either a text listing, JSON, or batch
//! statistics.

use crate::app::services::report_parser::{ParseResult, ReportParser, ReportStats};
use crate::cli::args::{Args, Commands, DecodeArgs, OutputFormat, StatsArgs};
use crate::cli::render::{SummaryVisitor, render_text};
use crate::constants::{COMMENT_LINE_PREFIX, LOG_TARGET};
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// One input report with its parse result, as written in JSON output
#[derive(Debug, Serialize)]
pub struct DecodedReport<'a> {
    pub report: &'a str,
    #[serde(flatten)]
    pub result: &'a ParseResult,
}

/// Main command runner
///
/// Sets up logging for the selected command, then decodes every input report
/// and returns the batch statistics.
pub fn run(args: Args) -> Result<ReportStats> {
    match args.command {
        Some(Commands::Decode(decode)) => {
            setup_logging(decode.get_log_level(), decode.quiet)?;
            run_decode(&decode)
        }
        Some(Commands::Stats(stats)) => {
            setup_logging(stats.get_log_level(), stats.quiet)?;
            run_stats(&stats)
        }
        None => Err(Error::configuration("No command specified")),
    }
}

/// Set up structured logging on stderr
fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let initialized = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    initialized
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Run the decode command
pub fn run_decode(args: &DecodeArgs) -> Result<ReportStats> {
    let start_time = Instant::now();
    debug!("Decode arguments: {:?}", args);
    args.validate()?;

    let reference_date = args.reference_date()?;
    let reports = read_reports(&args.reports, args.input_file.as_deref())?;
    let results = decode_reports(&ReportParser::new(args.decoder_config()), &reports);

    let mut stats = ReportStats::new();
    stats.extend(&results);

    match args.output_format {
        OutputFormat::Text => {
            let mut visitor = SummaryVisitor::new(reference_date);
            for (report, result) in reports.iter().zip(&results) {
                println!("{}\n", render_text(report, result, &mut visitor));
            }
        }
        OutputFormat::Json => println!("{}", format_decoded_json(&reports, &results)?),
    }

    info!(
        "{} (in {:.2?})",
        stats.summary(),
        start_time.elapsed()
    );
    Ok(stats)
}

/// Run the stats command
pub fn run_stats(args: &StatsArgs) -> Result<ReportStats> {
    debug!("Stats arguments: {:?}", args);
    args.validate()?;

    let reports = read_reports(&args.reports, args.input_file.as_deref())?;
    let results = decode_reports(&ReportParser::new(args.decoder_config()), &reports);

    let mut stats = ReportStats::new();
    stats.extend(&results);

    match args.output_format {
        OutputFormat::Text => println!("{}", format_stats_text(&stats)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }

    if !stats.is_successful() {
        warn!(
            "Only {:.1}% of reports decoded without structural errors",
            stats.success_rate()
        );
    }
    Ok(stats)
}

/// Parse every report with one parser
pub fn decode_reports(parser: &ReportParser, reports: &[String]) -> Vec<ParseResult> {
    reports.iter().map(|report| parser.parse(report)).collect()
}

/// Collect reports from arguments, then the input file; stdin when both are absent
pub fn read_reports(reports: &[String], input_file: Option<&Path>) -> Result<Vec<String>> {
    let mut collected: Vec<String> = reports.to_vec();

    if let Some(path) = input_file {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read input file {}", path.display()), e)
        })?;
        let lines = report_lines(&text);
        info!("Read {} reports from {}", lines.len(), path.display());
        collected.extend(lines);
    } else if collected.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| Error::io("Failed to read reports from stdin", e))?;
        collected = report_lines(&text);
        info!("Read {} reports from stdin", collected.len());
    }

    Ok(collected)
}

/// One report per non-blank, non-comment line
pub fn report_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_LINE_PREFIX))
        .map(str::to_string)
        .collect()
}

/// Pretty JSON array of reports paired with their results
pub fn format_decoded_json(reports: &[String], results: &[ParseResult]) -> Result<String> {
    let decoded: Vec<DecodedReport<'_>> = reports
        .iter()
        .zip(results)
        .map(|(report, result)| DecodedReport {
            report: report.as_str(),
            result,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&decoded)?)
}

/// Human-readable statistics block
pub fn format_stats_text(stats: &ReportStats) -> String {
    let mut lines = vec![
        "Report Statistics".bright_green().bold().to_string(),
        "-".repeat(40),
        format!("   Reports parsed: {}", stats.total_reports),
        format!("   METAR/SPECI: {}", stats.metar_reports),
        format!("   TAF: {}", stats.taf_reports),
        format!("   Unknown type: {}", stats.unknown_type_reports),
        format!(
            "   Error-free: {:.1}%",
            stats.success_rate()
        ),
        format!(
            "   Groups: {} ({} unrecognized, {} invalid)",
            stats.total_groups, stats.unrecognized_groups, stats.invalid_groups
        ),
    ];

    if !stats.errors_by_kind.is_empty() {
        lines.push(String::new());
        lines.push("Structural errors:".yellow().bold().to_string());
        for (error, count) in &stats.errors_by_kind {
            lines.push(format!("   {:>5}  {}", count, error));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecoderConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REPORT_FILE: &str = "# Dodge City observations\n\
        KDDC 112052Z AUTO 19023G34KT 7SM CLR 33/16 A2992 RMK AO2\n\
        \n\
        TAF KDDC 112330Z 1200/1224 19015KT P6SM SKC\n\
        KDDC 112052Z NIL 19023KT\n";

    #[test]
    fn test_report_lines_skip_blank_and_comments() {
        let lines = report_lines(REPORT_FILE);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("KDDC 112052Z AUTO"));
        assert!(lines[1].starts_with("TAF KDDC"));
    }

    #[test]
    fn test_read_reports_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", REPORT_FILE).unwrap();

        let reports = read_reports(&[], Some(file.path())).unwrap();
        assert_eq!(reports.len(), 3);

        let extra = vec!["KJFK 121651Z 31012KT 10SM FEW250 08/M09 A3012".to_string()];
        let reports = read_reports(&extra, Some(file.path())).unwrap();
        assert_eq!(reports.len(), 4);
        assert!(reports[0].starts_with("KJFK"));
    }

    #[test]
    fn test_read_reports_missing_file_is_io_error() {
        let result = read_reports(&[], Some(Path::new("/nonexistent/reports.txt")));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_decoded_json_contains_report_and_groups() {
        let reports = report_lines(REPORT_FILE);
        let results = decode_reports(&ReportParser::new(DecoderConfig::default()), &reports);
        let json = format_decoded_json(&reports, &results).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array[1]["report_type"], "Taf");
        assert_eq!(array[2]["error"], "UnexpectedGroupAfterNil");
        assert_eq!(array[0]["groups"][0]["raw_string"], "KDDC");
        assert_eq!(array[0]["groups"][0]["group"]["kind"], "location");
    }

    #[test]
    fn test_stats_text_lists_errors() {
        colored::control::set_override(false);
        let reports = report_lines(REPORT_FILE);
        let results = decode_reports(&ReportParser::new(DecoderConfig::default()), &reports);
        let mut stats = ReportStats::new();
        stats.extend(&results);

        let text = format_stats_text(&stats);
        assert!(text.contains("Reports parsed: 3"));
        assert!(text.contains("TAF: 1"));
        assert!(text.contains("unexpected group after NIL"));
    }
}

//! Command-line argument definitions for the METAR/TAF decoder
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::DecoderConfig;
use crate::constants::{DEFAULT_MAX_REPORT_TOKENS, REFERENCE_DATE_FORMAT, log_level_for};
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the METAR/TAF decoder
///
/// Decodes METAR, SPECI and TAF aviation weather reports into typed groups.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar_decoder",
    version,
    about = "Decode METAR and TAF aviation weather reports",
    long_about = "Splits METAR, SPECI and TAF reports into recognized groups, tags each group \
                  with the part of the report it belongs to, resolves the report type and \
                  flags the first structural error. Reports can be given as arguments, read \
                  one per line from a file, or piped through stdin."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode reports and list their groups
    Decode(DecodeArgs),
    /// Decode reports and print batch statistics only
    Stats(StatsArgs),
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Reports to decode, each quoted as one argument
    ///
    /// When neither reports nor an input file are given, reports are read
    /// from stdin, one per line.
    #[arg(value_name = "REPORT")]
    pub reports: Vec<String>,

    /// File with one report per line
    ///
    /// Blank lines and lines starting with '#' are skipped.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "File with one report per line"
    )]
    pub input_file: Option<PathBuf>,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for decoded reports"
    )]
    pub output_format: OutputFormat,

    /// Maximum tokens parsed per report
    #[arg(
        long = "max-tokens",
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_REPORT_TOKENS,
        help = "Maximum number of tokens parsed per report"
    )]
    pub max_tokens: usize,

    /// Keep reading past a token ending in '='
    #[arg(
        long = "no-end-marker",
        help = "Do not treat a trailing '=' as the end of the report"
    )]
    pub no_end_marker: bool,

    /// Date used to resolve day-of-month report times
    ///
    /// Report times only carry the day of month; with a reference date they
    /// are shown as the latest matching calendar date not after it.
    #[arg(
        long = "reference-date",
        value_name = "YYYY-MM-DD",
        help = "Resolve report times against this date"
    )]
    pub reference_date: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// Reports to include, each quoted as one argument
    #[arg(value_name = "REPORT")]
    pub reports: Vec<String>,

    /// File with one report per line
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "File with one report per line"
    )]
    pub input_file: Option<PathBuf>,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for statistics"
    )]
    pub output_format: OutputFormat,

    /// Maximum tokens parsed per report
    #[arg(
        long = "max-tokens",
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_REPORT_TOKENS,
        help = "Maximum number of tokens parsed per report"
    )]
    pub max_tokens: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON format for scripting
    Json,
}

fn validate_input_file(input_file: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = input_file {
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                path.display()
            )));
        }
    }
    Ok(())
}

impl DecodeArgs {
    /// Validate the decode command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(self.input_file.as_ref())?;
        self.decoder_config().validate()?;
        self.reference_date()?;
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose, self.quiet)
    }

    /// Decoder configuration from the command-line flags
    pub fn decoder_config(&self) -> DecoderConfig {
        let config = DecoderConfig::default().with_max_report_tokens(self.max_tokens);
        if self.no_end_marker {
            config.without_end_marker()
        } else {
            config
        }
    }

    /// Parsed `--reference-date`, if given
    pub fn reference_date(&self) -> Result<Option<NaiveDate>> {
        self.reference_date
            .as_deref()
            .map(|date| {
                NaiveDate::parse_from_str(date.trim(), REFERENCE_DATE_FORMAT).map_err(|e| {
                    Error::date_parsing(format!("Invalid reference date '{}'", date), e)
                })
            })
            .transpose()
    }
}

impl StatsArgs {
    /// Validate the stats command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(self.input_file.as_ref())?;
        self.decoder_config().validate()
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose, self.quiet)
    }

    /// Decoder configuration from the command-line flags
    pub fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig::default().with_max_report_tokens(self.max_tokens)
    }
}

impl Default for DecodeArgs {
    fn default() -> Self {
        Self {
            reports: Vec::new(),
            input_file: None,
            output_format: OutputFormat::Text,
            max_tokens: DEFAULT_MAX_REPORT_TOKENS,
            no_end_marker: false,
            reference_date: None,
            verbose: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_decode_args_parse_from_command_line() {
        let args = Args::parse_from([
            "metar_decoder",
            "decode",
            "KDDC 112052Z 19023KT",
            "--format",
            "json",
            "--max-tokens",
            "20",
            "-vv",
        ]);

        let Some(Commands::Decode(decode)) = args.command else {
            panic!("expected decode command");
        };
        assert_eq!(decode.reports, vec!["KDDC 112052Z 19023KT"]);
        assert_eq!(decode.output_format, OutputFormat::Json);
        assert_eq!(decode.max_tokens, 20);
        assert_eq!(decode.get_log_level(), "debug");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["metar_decoder", "decode", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_args_validation() {
        let args = DecodeArgs::default();
        assert!(args.validate().is_ok());

        let mut invalid = args.clone();
        invalid.max_tokens = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.input_file = Some(PathBuf::from("/nonexistent/reports.txt"));
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.reference_date = Some("2024-13-40".to_string());
        assert!(matches!(
            invalid.validate(),
            Err(Error::DateParsing { .. })
        ));
    }

    #[test]
    fn test_input_file_must_exist_and_be_a_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "KDDC 112052Z 19023KT").unwrap();

        let args = DecodeArgs {
            input_file: Some(file.path().to_path_buf()),
            ..DecodeArgs::default()
        };
        assert!(args.validate().is_ok());

        let dir = tempfile::TempDir::new().unwrap();
        let args = DecodeArgs {
            input_file: Some(dir.path().to_path_buf()),
            ..DecodeArgs::default()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_reference_date_parsing() {
        let args = DecodeArgs {
            reference_date: Some("2024-03-12".to_string()),
            ..DecodeArgs::default()
        };
        assert_eq!(
            args.reference_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 12)
        );
        assert_eq!(DecodeArgs::default().reference_date().unwrap(), None);
    }

    #[test]
    fn test_decoder_config_from_flags() {
        let args = DecodeArgs {
            max_tokens: 12,
            no_end_marker: true,
            ..DecodeArgs::default()
        };
        let config = args.decoder_config();
        assert_eq!(config.max_report_tokens, 12);
        assert!(!config.stop_at_end_marker);
    }
}

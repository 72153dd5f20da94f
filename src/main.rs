use clap::Parser;
use metar_decoder::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Output has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("METAR Decoder - METAR/SPECI/TAF Report Decoder");
    println!("===============================================");
    println!();
    println!("Split aviation weather reports into typed groups, resolve the");
    println!("report type and flag structural errors.");
    println!();
    println!("USAGE:");
    println!("    metar_decoder <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    decode      Decode reports and list their groups");
    println!("    stats       Decode reports and print batch statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Decode a single report:");
    println!("    metar_decoder decode \"KDDC 112052Z AUTO 19023G34KT 7SM CLR 33/16 A2992\"");
    println!();
    println!("    # Decode a file of reports as JSON:");
    println!("    metar_decoder decode --input reports.txt --format json");
    println!();
    println!("    # Show report times as calendar dates:");
    println!("    metar_decoder decode --reference-date 2024-03-12 < reports.txt");
    println!();
    println!("    # Batch statistics:");
    println!("    metar_decoder stats --input reports.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    metar_decoder <COMMAND> --help");
}

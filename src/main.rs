use clap::Parser;
use parts_processor::cli::{args::Args, commands};
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
            // Success - the report has already been emitted by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Parts Processor - Service Catalog Feed Extractor");
    println!("================================================");
    println!();
    println!("Extract structured spare-part records from semi-structured service");
    println!("catalog feed exports and query the group/subgroup/part hierarchy.");
    println!();
    println!("USAGE:");
    println!("    parts-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    extract     Extract records from a feed file and report them");
    println!("    catalog     Build and report the catalog hierarchy from a feed file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Extract all records from a feed:");
    println!("    parts-processor extract parcalar.csv");
    println!();
    println!("    # Extraction report as JSON, written to a file:");
    println!("    parts-processor extract parcalar.csv --output-format json -o report.json");
    println!();
    println!("    # Catalog hierarchy narrowed to one subgroup, with record listings:");
    println!("    parts-processor catalog parcalar.csv --group Motor \\");
    println!("                            --subgroup \"Yağ Sistemi\" --detailed");
    println!();
    println!("For detailed help on any command, use:");
    println!("    parts-processor <COMMAND> --help");
}

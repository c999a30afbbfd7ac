//! Email Extractor - pull email addresses out of any text file
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use email_extractor::cli::Args;
use email_extractor::config::ExtractorConfig;
use email_extractor::extractor::Extractor;
use email_extractor::progress::{print_banner, print_error};

fn main() {
    // Parse command-line arguments; a missing input exits with usage help
    let args = Args::parse();

    // Set up logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = ExtractorConfig::from_args(&args)?;

    // Print banner unless quiet mode
    if config.show_banner {
        print_banner();
    }

    log::debug!("Configuration: {:?}", config);

    let extractor = Extractor::new(config);
    let report = extractor.run(&args.input)?;

    log::info!(
        "Extracted {} unique addresses into {:?}",
        report.stats.unique,
        report.output
    );

    Ok(())
}

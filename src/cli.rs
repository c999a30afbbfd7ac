//! Command-line interface definition for email-extractor
//!
//! Provides argument parsing and validation for the extraction tool.

use clap::Parser;
use std::path::PathBuf;

use crate::progress::human_size;

/// Largest accepted `--buffer-size`
pub const MAX_BUFFER_SIZE: usize = 1024 * 1024 * 1024;

/// Extract email addresses from a text file
///
/// Every address found is written once, sorted by domain, to a file next to
/// the input named `<name>_emails.<ext>`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "email-extractor",
    author = "m0h1nd4",
    version,
    about = "Extract, deduplicate and domain-sort email addresses from a text file",
    long_about = r#"
Scan any text file (exported comments, scraped HTML, contact dumps) for email
addresses. Duplicates are removed and the result is sorted by domain.

The output is written next to the input:
    comments.txt  ->  comments_emails.txt

EXAMPLES:
    # Extract from a scraped page
    email-extractor page.html

    # No banner, no progress, just the work
    email-extractor -q dump.txt
"#
)]
pub struct Args {
    /// Text file to scan
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Do not update the terminal title
    #[arg(long, default_value_t = false)]
    pub no_title: bool,

    /// Do not print the banner
    #[arg(long, default_value_t = false)]
    pub no_banner: bool,

    /// Buffer size for writing the output file (e.g. "64KB", "1MB")
    #[arg(long, value_name = "SIZE", default_value = "64KB")]
    pub buffer_size: String,
}

impl Args {
    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> anyhow::Result<usize> {
        let size = parse_size(&self.buffer_size)?;
        if size == 0 {
            anyhow::bail!("Buffer size must be greater than zero");
        }
        if size > MAX_BUFFER_SIZE {
            anyhow::bail!("Buffer size must not exceed {}", human_size(MAX_BUFFER_SIZE as u64));
        }
        Ok(size)
    }

    /// Log filter applied when `RUST_LOG` is not set
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Parse human-readable size string to bytes
fn parse_size(size_str: &str) -> anyhow::Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(num) = size_str.strip_suffix("GB") {
        (num, 1024 * 1024 * 1024)
    } else if let Some(num) = size_str.strip_suffix("MB") {
        (num, 1024 * 1024)
    } else if let Some(num) = size_str.strip_suffix("KB") {
        (num, 1024)
    } else if let Some(num) = size_str.strip_suffix('B') {
        (num, 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid size format: '{}'", size_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| anyhow::anyhow!("Size too large: '{}'", size_str))
}

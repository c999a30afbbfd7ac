//! # Email Extractor
//!
//! Pull every email address out of a text file, drop duplicates and write the
//! result sorted by domain.
//!
//! ## Features
//!
//! - **Pattern scan**: one fixed regex over the whole document
//! - **Deduplication**: exact, case-sensitive matching
//! - **Domain sort**: ordered by the text after the first `@`, ties by full address
//! - **Progress**: per-item callback with ETA, rendered as a single console line
//!
//! ## Usage
//!
//! ```bash
//! # Writes comments_emails.txt next to the input
//! email-extractor comments.txt
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use email_extractor::{Extractor, ExtractorConfig};
//! use email_extractor::progress::NoProgress;
//! use email_extractor::title::NoTitle;
//! use std::path::Path;
//!
//! let extractor = Extractor::new(ExtractorConfig::silent());
//! let report = extractor
//!     .run_with(Path::new("comments.txt"), &mut NoProgress, &mut NoTitle)
//!     .unwrap();
//! println!("{} unique addresses", report.stats.unique);
//! ```

pub mod cli;
pub mod config;
pub mod dedup;
pub mod encoding;
pub mod error;
pub mod extractor;
pub mod output;
pub mod pattern;
pub mod progress;
pub mod sort;
pub mod stats;
pub mod title;

pub use cli::Args;
pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use extractor::{extract_emails, Extraction, ExtractionReport, Extractor};

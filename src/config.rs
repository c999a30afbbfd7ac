//! Extractor configuration

use crate::cli::Args;
use crate::output::{DEFAULT_BUFFER_SIZE, DEFAULT_SUFFIX};

/// Settings for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Inserted before the input extension to name the output file
    pub suffix: String,
    pub buffer_size: usize,
    pub quiet: bool,
    pub verbose: bool,
    pub set_title: bool,
    pub show_banner: bool,
}

impl ExtractorConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        Ok(Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            buffer_size: args.parse_buffer_size()?,
            quiet: args.quiet,
            verbose: args.verbose,
            set_title: !args.quiet && !args.no_title,
            show_banner: !args.quiet && !args.no_banner,
        })
    }

    /// No console output and no terminal side effects
    pub fn silent() -> Self {
        Self {
            quiet: true,
            set_title: false,
            show_banner: false,
            ..Self::default()
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            quiet: false,
            verbose: false,
            set_title: true,
            show_banner: true,
        }
    }
}

//! Run statistics and console summaries

use colored::*;
use std::path::Path;

use crate::progress::{human_size, print_field, print_success};

/// Counts derived from one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Raw pattern matches, duplicates included
    pub raw_matches: u64,
    /// Distinct addresses written
    pub unique: u64,
    pub source_bytes: u64,
    pub source_lines: u64,
    pub output_bytes: u64,
    pub output_lines: u64,
}

impl RunStatistics {
    /// Matches dropped by deduplication
    pub fn duplicates(&self) -> u64 {
        self.raw_matches.saturating_sub(self.unique)
    }
}

/// Lines as a text reader iterates them. `\n`, `\r\n` and a lone `\r` each
/// end one line, and a final unterminated fragment counts too
pub fn count_lines(content: &[u8]) -> u64 {
    let mut lines = 0;
    for pos in memchr::memchr2_iter(b'\r', b'\n', content) {
        // second half of a \r\n pair
        if content[pos] == b'\n' && pos > 0 && content[pos - 1] == b'\r' {
            continue;
        }
        lines += 1;
    }
    match content.last() {
        Some(&b'\n') | Some(&b'\r') | None => lines,
        Some(_) => lines + 1,
    }
}

/// Source file, size and line count before extraction starts
pub fn print_source_summary(path: &Path, bytes: u64, lines: u64) {
    print_field("Source file", path.display());
    print_field("Size", human_size(bytes));
    print_field("Total Lines", lines);
    println!();
}

/// Output file, size, line count and removed duplicates after the run
pub fn print_output_summary(path: &Path, stats: &RunStatistics) {
    println!();
    print_success("\nTask completed.\n");
    print_field("Output file", path.display());
    print_field("Size", human_size(stats.output_bytes));
    print_field("Total Lines", stats.output_lines);
    print_field("Removed Duplicates", stats.duplicates().to_string().yellow());
    println!();
}

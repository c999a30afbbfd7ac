//! Progress display module
//!
//! Console helpers, the per-item progress observer used by the write loop, and
//! the small formatting functions behind the summaries (sizes, durations, ETA).

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::stats::print_source_summary;

/// Width of the rendered progress bar in characters
pub const BAR_WIDTH: usize = 90;

const SIZE_UNITS: [&str; 9] = ["bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║   ███████╗███╗   ███╗ █████╗ ██╗██╗                          ║
║   ██╔════╝████╗ ████║██╔══██╗██║██║                          ║
║   █████╗  ██╔████╔██║███████║██║██║                          ║
║   ██╔══╝  ██║╚██╔╝██║██╔══██║██║██║                          ║
║   ███████╗██║ ╚═╝ ██║██║  ██║██║███████╗                     ║
║   ╚══════╝╚═╝     ╚═╝╚═╝  ╚═╝╚═╝╚══════╝  EXTRACTOR          ║
║                                                              ║
║          Extract · Deduplicate · Sort by domain              ║
╚══════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.blue());
}

/// Print a labelled value, e.g. `Size: 1.5 KB`
pub fn print_field(label: &str, value: impl fmt::Display) {
    println!("{} {}", format!("{}:", label).cyan(), value);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("{}", text.green());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Byte count scaled to the largest 1024-based unit that keeps it at or above 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumanSize {
    pub value: f64,
    pub unit: &'static str,
}

impl fmt::Display for HumanSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 0.0 {
            write!(f, "0 {}", self.unit)
        } else if self.value.fract() == 0.0 {
            write!(f, "{:.1} {}", self.value, self.unit)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

/// Scale `bytes` for display, rounded to 2 decimal places
pub fn human_size(bytes: u64) -> HumanSize {
    if bytes == 0 {
        return HumanSize {
            value: 0.0,
            unit: SIZE_UNITS[0],
        };
    }

    let mut scaled = bytes as f64;
    let mut index = 0;
    while scaled >= 1024.0 && index < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        index += 1;
    }

    HumanSize {
        value: (scaled * 100.0).round() / 100.0,
        unit: SIZE_UNITS[index],
    }
}

/// Split a duration into whole (hours, minutes, seconds)
pub fn split_duration(duration: Duration) -> (u64, u64, u64) {
    let secs = duration.as_secs();
    (secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// `1h 2m 3s`, or `2m 3s` when under an hour
pub fn format_eta(duration: Duration) -> String {
    let (hours, minutes, seconds) = split_duration(duration);
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else {
        format!("{}m {}s", minutes, seconds)
    }
}

/// Mean time per finished item times the items still to go
pub fn estimate_remaining(index: usize, total: usize, elapsed: Duration) -> Duration {
    if index == 0 || index >= total {
        return Duration::ZERO;
    }
    let remaining = (total - index) as f64;
    elapsed.div_f64(index as f64).mul_f64(remaining)
}

/// `current / total`; an empty job counts as complete
pub fn progress_fraction(current: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    current as f64 / total as f64
}

/// `[>>>>>     ] 50%` with the bar padded to `width`
pub fn render_bar(current: usize, total: usize, width: usize) -> String {
    let fraction = progress_fraction(current, total);
    let filled = ((fraction * width as f64) as usize).min(width);
    format!(
        "[{}{}] {}%",
        ">".repeat(filled),
        " ".repeat(width - filled),
        (fraction * 100.0) as u64
    )
}

/// Receives one call per written item
pub trait ProgressObserver {
    /// Called once after the input is loaded, before any matching
    fn on_source(&mut self, _path: &Path, _bytes: u64, _lines: u64) {}

    /// `index` is 1-based: the number of items written so far
    fn on_item(&mut self, index: usize, total: usize, elapsed: Duration);

    /// Called once after the last item
    fn finish(&mut self) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_item(&mut self, _index: usize, _total: usize, _elapsed: Duration) {}
}

/// Source summary, then a single live-updating console line: bar,
/// percentage and ETA
pub struct ConsoleProgress {
    bar: ProgressBar,
    quiet: bool,
}

impl ConsoleProgress {
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            create_progress_bar()
        };

        Self { bar, quiet }
    }
}

impl ProgressObserver for ConsoleProgress {
    fn on_source(&mut self, path: &Path, bytes: u64, lines: u64) {
        if !self.quiet {
            print_source_summary(path, bytes, lines);
        }
    }

    fn on_item(&mut self, index: usize, total: usize, elapsed: Duration) {
        let eta = estimate_remaining(index, total, elapsed);
        self.bar.set_length(total as u64);
        self.bar.set_position(index as u64);
        self.bar.set_message(format!(
            "{} ETA: {}",
            render_bar(index, total, BAR_WIDTH),
            format_eta(eta)
        ));
    }

    fn finish(&mut self) {
        self.bar.finish();
    }
}

/// Create a progress bar that only draws its message
fn create_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);

    pb.set_style(ProgressStyle::default_bar().template("{msg}").unwrap());

    pb
}

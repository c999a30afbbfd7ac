//! Core extraction engine
//!
//! Load the input, scan it with the email pattern, deduplicate, sort by
//! domain, then write one address per line. Progress and the terminal title
//! go through injected collaborators so the pipeline runs without a console.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::ExtractorConfig;
use crate::dedup::EmailSet;
use crate::encoding::{load_source, SourceDocument};
use crate::error::Result;
use crate::output::{derive_output_path, OutputWriter};
use crate::pattern::EmailPattern;
use crate::progress::{ConsoleProgress, ProgressObserver};
use crate::sort::sorted_by_domain;
use crate::stats::{count_lines, print_output_summary, RunStatistics};
use crate::title::{console_title, TitleSink, APP_TITLE};

/// Matches of one document after deduplication and sorting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Raw matches, duplicates included
    pub raw_matches: u64,
    /// Unique addresses, sorted by domain
    pub emails: Vec<String>,
}

impl Extraction {
    pub fn duplicates(&self) -> u64 {
        self.raw_matches.saturating_sub(self.emails.len() as u64)
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: RunStatistics,
}

/// Scan `text`, collapse duplicates and order by domain
pub fn extract_emails(pattern: &EmailPattern, text: &str) -> Extraction {
    let set = EmailSet::from_matches(pattern.find_all(text));
    let raw_matches = set.raw_count();
    Extraction {
        raw_matches,
        emails: sorted_by_domain(set),
    }
}

/// Write every email on its own line, notifying `observer` after each one
pub fn write_emails(
    writer: &mut OutputWriter,
    emails: &[String],
    observer: &mut dyn ProgressObserver,
) -> Result<()> {
    let total = emails.len();
    let start = Instant::now();

    for (i, email) in emails.iter().enumerate() {
        writer.write_line(email)?;
        observer.on_item(i + 1, total, start.elapsed());
    }

    observer.finish();
    writer.flush()
}

/// Main extractor
pub struct Extractor {
    config: ExtractorConfig,
    pattern: EmailPattern,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            pattern: EmailPattern::new(),
        }
    }

    /// Where the results for `input` are written
    pub fn output_path(&self, input: &Path) -> PathBuf {
        derive_output_path(input, &self.config.suffix)
    }

    /// Run with console progress, terminal title and summaries as configured
    pub fn run(&self, input: &Path) -> Result<ExtractionReport> {
        let mut title = console_title(self.config.set_title);
        log::debug!("Terminal title updates active: {}", title.is_active());
        let mut progress = ConsoleProgress::new(self.config.quiet);
        let report = self.run_with(input, &mut progress, title.as_mut())?;

        if !self.config.quiet {
            print_output_summary(&report.output, &report.stats);
        }

        Ok(report)
    }

    /// Run with the given collaborators; nothing is printed except through them
    pub fn run_with(
        &self,
        input: &Path,
        observer: &mut dyn ProgressObserver,
        title: &mut dyn TitleSink,
    ) -> Result<ExtractionReport> {
        title.set_title(APP_TITLE);
        let doc = load_source(input)?;
        let source_lines = count_lines(doc.text().as_bytes());
        observer.on_source(doc.path(), doc.byte_len(), source_lines);
        self.process(doc, source_lines, observer)
    }

    fn process(
        &self,
        doc: SourceDocument,
        source_lines: u64,
        observer: &mut dyn ProgressObserver,
    ) -> Result<ExtractionReport> {
        let input = doc.path().to_path_buf();
        let output = self.output_path(&input);
        let source_bytes = doc.byte_len();

        let scan_start = Instant::now();
        let extraction = extract_emails(&self.pattern, doc.text());
        drop(doc);
        log::debug!(
            "Found {} matches ({} unique, {} duplicates) in {:?}",
            extraction.raw_matches,
            extraction.emails.len(),
            extraction.duplicates(),
            scan_start.elapsed()
        );

        let write_start = Instant::now();
        let mut writer = OutputWriter::new(output.clone(), self.config.buffer_size)?;
        write_emails(&mut writer, &extraction.emails, observer)?;
        log::debug!(
            "Wrote {} lines to {:?} in {:?}",
            writer.lines_written(),
            writer.path(),
            write_start.elapsed()
        );

        let stats = RunStatistics {
            raw_matches: extraction.raw_matches,
            unique: extraction.emails.len() as u64,
            source_bytes,
            source_lines,
            output_bytes: writer.bytes_written(),
            output_lines: writer.lines_written(),
        };

        Ok(ExtractionReport {
            input,
            output,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;
    use crate::title::NoTitle;
    use std::time::Duration;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder {
        source: Option<(PathBuf, u64, u64)>,
        calls: Vec<(usize, usize)>,
        finished: bool,
    }

    impl ProgressObserver for Recorder {
        fn on_source(&mut self, path: &Path, bytes: u64, lines: u64) {
            assert!(self.calls.is_empty());
            self.source = Some((path.to_path_buf(), bytes, lines));
        }

        fn on_item(&mut self, index: usize, total: usize, _elapsed: Duration) {
            self.calls.push((index, total));
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn test_extract_emails() {
        let pattern = EmailPattern::new();
        let extraction = extract_emails(&pattern, "a@x.com b@y.com a@x.com");
        assert_eq!(extraction.raw_matches, 3);
        assert_eq!(extraction.emails, vec!["a@x.com", "b@y.com"]);
        assert_eq!(extraction.duplicates(), 1);
    }

    #[test]
    fn test_write_emails_notifies_each_item() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let emails = vec!["a@x.com".to_string(), "b@y.com".to_string(), "c@z.com".to_string()];

        let mut writer = OutputWriter::new(path.clone(), 1024).unwrap();
        let mut recorder = Recorder::default();
        write_emails(&mut writer, &emails, &mut recorder).unwrap();

        assert_eq!(recorder.calls, vec![(1, 3), (2, 3), (3, 3)]);
        assert!(recorder.finished);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "a@x.com\nb@y.com\nc@z.com\n"
        );
    }

    #[test]
    fn test_run_with_reports_statistics() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("comments.txt");
        std::fs::write(&input, "hi a@x.com\nb@y.com a@x.com\n").unwrap();

        let extractor = Extractor::new(ExtractorConfig::silent());
        let report = extractor
            .run_with(&input, &mut NoProgress, &mut NoTitle)
            .unwrap();

        assert_eq!(report.output, dir.path().join("comments_emails.txt"));
        assert_eq!(report.stats.raw_matches, 3);
        assert_eq!(report.stats.unique, 2);
        assert_eq!(report.stats.duplicates(), 1);
        assert_eq!(report.stats.source_lines, 2);
        assert_eq!(report.stats.source_bytes, 27);
        assert_eq!(report.stats.output_lines, 2);
        assert_eq!(report.stats.output_bytes, 16);
    }

    #[test]
    fn test_run_with_reports_source_before_items() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("mac.txt");
        std::fs::write(&input, "one a@x.com\rtwo b@y.com\rthree").unwrap();

        let mut recorder = Recorder::default();
        let report = Extractor::new(ExtractorConfig::silent())
            .run_with(&input, &mut recorder, &mut NoTitle)
            .unwrap();

        assert_eq!(recorder.source, Some((input.clone(), 29, 3)));
        assert_eq!(recorder.calls, vec![(1, 2), (2, 2)]);
        assert!(recorder.finished);
        assert_eq!(report.stats.source_lines, 3);
    }

    #[test]
    fn test_blocked_output_is_output_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        std::fs::write(&input, "a@x.com").unwrap();
        std::fs::create_dir(dir.path().join("in_emails.txt")).unwrap();

        let err = Extractor::new(ExtractorConfig::silent())
            .run_with(&input, &mut NoProgress, &mut NoTitle)
            .unwrap_err();

        assert!(err.is_output());
        assert!(dir.path().join("in_emails.txt").is_dir());
    }

    #[test]
    fn test_title_is_set() {
        struct Capture(Vec<String>);
        impl TitleSink for Capture {
            fn set_title(&mut self, title: &str) {
                self.0.push(title.to_string());
            }
        }

        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        std::fs::write(&input, "").unwrap();

        let mut capture = Capture(Vec::new());
        Extractor::new(ExtractorConfig::silent())
            .run_with(&input, &mut NoProgress, &mut capture)
            .unwrap();
        assert_eq!(capture.0, vec![APP_TITLE.to_string()]);
    }
}

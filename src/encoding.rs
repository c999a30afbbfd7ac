//! Source loading and decoding
//!
//! The input is read into memory once and decoded strictly as UTF-8. A UTF-8
//! byte order mark is skipped. Anything else that is not valid UTF-8 is
//! rejected, with a best guess of the real encoding to help the user convert it.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};

/// Bytes fed to the detector when building a decode error
const DETECTION_SAMPLE: usize = 64 * 1024;

/// Full textual content of the input file
#[derive(Debug, Clone)]
pub struct SourceDocument {
    path: PathBuf,
    text: String,
    byte_len: u64,
}

impl SourceDocument {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Size of the file on disk, BOM included
    pub fn byte_len(&self) -> u64 {
        self.byte_len
    }
}

/// Read and decode the whole input file
pub fn load_source(path: &Path) -> Result<SourceDocument> {
    let mut bytes = fs::read(path).map_err(|e| ExtractError::input(path, e))?;
    let byte_len = bytes.len() as u64;

    match detect_bom(&bytes) {
        Some(encoding) if encoding == encoding_rs::UTF_8 => {
            log::debug!("Skipping UTF-8 byte order mark in {:?}", path);
            bytes.drain(..3);
        }
        Some(encoding) => {
            log::warn!("{:?} starts with a {} byte order mark", path, encoding.name());
            return Err(ExtractError::Decode {
                path: path.to_path_buf(),
                valid_up_to: 0,
                detected: encoding.name(),
            });
        }
        None => {}
    }

    let text = String::from_utf8(bytes).map_err(|e| {
        let valid_up_to = e.utf8_error().valid_up_to();
        let detected = guess_encoding(e.as_bytes()).name();
        log::warn!("{:?} is not valid UTF-8, looks like {}", path, detected);
        ExtractError::Decode {
            path: path.to_path_buf(),
            valid_up_to,
            detected,
        }
    })?;

    Ok(SourceDocument {
        path: path.to_path_buf(),
        text,
        byte_len,
    })
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    if content.len() >= 3 && content[0..3] == [0xEF, 0xBB, 0xBF] {
        return Some(encoding_rs::UTF_8);
    }
    if content.len() >= 2 {
        if content[0..2] == [0xFE, 0xFF] {
            return Some(encoding_rs::UTF_16BE);
        }
        if content[0..2] == [0xFF, 0xFE] {
            return Some(encoding_rs::UTF_16LE);
        }
    }
    None
}

/// Best guess of the encoding of undecodable content
pub fn guess_encoding(content: &[u8]) -> &'static Encoding {
    let sample = &content[..content.len().min(DETECTION_SAMPLE)];
    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == content.len());
    detector.guess(None, true)
}

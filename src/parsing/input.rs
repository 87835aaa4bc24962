//! Loading captured simulator output and automaton structure dumps.
//!
//! Report text may come from a plain file, a gzip/bgzip file (`.gz`, `.bgz`)
//! or stdin (`-`). Bytes are decoded as UTF-8 with invalid sequences replaced,
//! so odd engine output never stops a parse.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

use crate::utils::validation::MAX_REPORT_BYTES;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report too large: {size} bytes exceeds maximum of {max}")]
    TooLarge { size: u64, max: u64 },

    #[error("Invalid automaton dump: {0}")]
    InvalidAutomaton(#[from] serde_json::Error),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
#[must_use]
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

#[must_use]
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read report text from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns `InputError::Io` if the input cannot be read or decompressed, or
/// `InputError::TooLarge` if it exceeds [`MAX_REPORT_BYTES`].
pub fn read_report_file(path: &Path) -> Result<String, InputError> {
    if is_stdin(path) {
        return read_report(std::io::stdin().lock());
    }

    let file = File::open(path)?;
    if is_gzipped(path) {
        read_report(MultiGzDecoder::new(BufReader::new(file)))
    } else {
        check_report_size(file.metadata()?.len(), MAX_REPORT_BYTES)?;
        read_report(BufReader::new(file))
    }
}

/// Read report text from any reader, decoding lossily.
///
/// # Errors
///
/// Returns `InputError::Io` on read failure or `InputError::TooLarge` if more
/// than [`MAX_REPORT_BYTES`] are available.
pub fn read_report<R: Read>(reader: R) -> Result<String, InputError> {
    read_report_limited(reader, MAX_REPORT_BYTES)
}

/// Read at most `max` bytes of report text. A stream longer than `max` is
/// reported with the number of bytes seen, which is `max + 1`.
fn read_report_limited<R: Read>(reader: R, max: u64) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    reader.take(max.saturating_add(1)).read_to_end(&mut bytes)?;
    check_report_size(bytes.len() as u64, max)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Check a report size against `max`
///
/// # Errors
///
/// Returns `InputError::TooLarge` carrying both sizes if `size` exceeds `max`.
pub fn check_report_size(size: u64, max: u64) -> Result<(), InputError> {
    if size > max {
        Err(InputError::TooLarge { size, max })
    } else {
        Ok(())
    }
}

/// Load a JSON automaton structure dump written by the simulator.
///
/// # Errors
///
/// Returns `InputError::Io` if the file cannot be read or
/// `InputError::InvalidAutomaton` if it is not valid JSON.
pub fn read_automaton_dump(path: &Path) -> Result<serde_json::Value, InputError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

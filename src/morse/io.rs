//! File and stream plumbing around the codec.
//!
//! A resource failure is not a contract violation: it is logged to standard
//! error and answered with an empty result, so the pure codec paths are
//! simply never reached for an unreadable input.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{resource_error, Result};
use crate::morse::{self, Symbol, UNRECOGNIZED};

/// Reads a whole file as raw bytes, mapping a failure to the typed
/// [`ResourceError`](crate::error::LanewiseError::ResourceError).
pub fn try_read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|error| resource_error(path.display().to_string(), error.to_string()))
}

/// Reads a whole file as raw bytes. On failure, logs and returns empty.
pub fn read_file(path: &Path) -> Vec<u8> {
    match try_read(path) {
        Ok(bytes) => bytes,
        Err(error) => {
            eprintln!("{error}");
            Vec::new()
        }
    }
}

/// Decodes the Morse token file at `path` into plain text, unrecognized
/// markers included. A trailing newline is not part of the token stream.
pub fn decode_file(path: &Path) -> String {
    morse::decode(trim_newline(&read_file(path)))
}

/// Encodes the plain-text file at `path` into symbol buffers.
pub fn encode_file(path: &Path) -> Vec<Symbol> {
    morse::encode(trim_newline(&read_file(path)))
}

fn trim_newline(bytes: &[u8]) -> &[u8] {
    let mut end = bytes.len();
    while end > 0 && (bytes[end - 1] == b'\n' || bytes[end - 1] == b'\r') {
        end -= 1;
    }
    &bytes[..end]
}

/// Writes decoded plain text, dropping the unrecognized markers.
pub fn write_plain_text(writer: &mut impl Write, plain: &str) -> io::Result<()> {
    for character in plain.chars() {
        if character != char::from(UNRECOGNIZED) {
            write!(writer, "{character}")?;
        }
    }

    Ok(())
}

/// Writes encoded symbol buffers as the byte token stream, skipping
/// zero-padding lanes.
pub fn write_symbols(writer: &mut impl Write, symbols: &[Symbol]) -> io::Result<()> {
    writer.write_all(&morse::tokens_of(symbols))
}

/// Writes plain text to the file at `path`. On failure, logs and leaves no
/// output.
pub fn write_plain_text_file(path: &Path, plain: &str) {
    let mut out = match fs::File::create(path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("{}", resource_error(path.display().to_string(), error.to_string()));
            return;
        }
    };

    if let Err(error) = write_plain_text(&mut out, plain) {
        eprintln!("{}", resource_error(path.display().to_string(), error.to_string()));
    }
}

/// Writes the token stream to the file at `path`. On failure, logs and
/// leaves no output.
pub fn write_symbols_file(path: &Path, symbols: &[Symbol]) {
    let mut out = match fs::File::create(path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("{}", resource_error(path.display().to_string(), error.to_string()));
            return;
        }
    };

    if let Err(error) = write_symbols(&mut out, symbols) {
        eprintln!("{}", resource_error(path.display().to_string(), error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LanewiseError;

    #[test]
    fn test_try_read_reports_typed_resource_error() {
        let path = Path::new("/nonexistent/lanewise-morse-input");

        let error = try_read(path).unwrap_err();
        assert!(matches!(error, LanewiseError::ResourceError { .. }));
        assert!(format!("{error}").contains("lanewise-morse-input"));
    }

    #[test]
    fn test_missing_input_yields_empty_result() {
        let path = Path::new("/nonexistent/lanewise-morse-input");
        assert!(read_file(path).is_empty());
        assert_eq!(decode_file(path), "");
        assert!(encode_file(path).is_empty());
    }

    #[test]
    fn test_write_plain_text_drops_markers() {
        let mut out = Vec::new();
        write_plain_text(&mut out, "A#N#").unwrap();
        assert_eq!(out, b"AN");
    }

    #[test]
    fn test_write_symbols_emits_token_stream() {
        let mut out = Vec::new();
        write_symbols(&mut out, &morse::encode(b"AN")).unwrap();
        assert_eq!(out, b"*-&-*&");
    }
}

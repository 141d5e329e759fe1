//! Whole-file encoding and decoding.
//!
//! A catalog file is a two-line comment header, a blank line, then one record
//! per line. Decoding is line-oriented and tolerant: blank and comment lines
//! are skipped silently, and a line that fails to decode is logged, recorded
//! in the [`DecodeReport`] and skipped without aborting the scan.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use super::record::{decode_record, encode_record, COMMENT_MARKER};
use crate::domain::{Content, IdAllocator};
use crate::error::{CatalogError, Result};

/// Extension a catalog file must carry (compared case-insensitively)
pub const FILE_EXTENSION: &str = "csv";

/// Comment block written at the top of every catalog file
pub const HEADER_LINES: [&str; 2] = [
    "# Audiovisual content catalog",
    "# Format: TAG,ID,TITLE,DURATION,GENRE,<kind-specific fields>",
];

/// A line that could not be decoded
#[derive(Debug)]
pub struct SkippedLine {
    /// 1-based line number in the source
    pub line_number: usize,

    /// Why the line was rejected
    pub error: CatalogError,
}

/// Result of a bulk decode
#[derive(Debug, Default)]
pub struct DecodeReport {
    /// Records that decoded cleanly, in file order
    pub records: Vec<Content>,

    /// Lines that were rejected
    pub skipped: Vec<SkippedLine>,
}

/// Check whether a path carries the catalog file extension
pub fn is_catalog_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(FILE_EXTENSION))
        .unwrap_or(false)
}

/// Fail with `FormatMismatch` unless the path carries the catalog extension
pub fn ensure_catalog_path(path: &Path) -> Result<()> {
    if is_catalog_path(path) {
        Ok(())
    } else {
        Err(CatalogError::FormatMismatch {
            path: path.to_path_buf(),
        })
    }
}

/// Decode every record line from a reader.
///
/// Only IO failures abort; malformed lines, including ones that are not
/// valid UTF-8, end up in `skipped`.
pub fn decode_lines<R: BufRead>(
    mut reader: R,
    ids: &mut IdAllocator,
) -> std::io::Result<DecodeReport> {
    let mut report = DecodeReport::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(text) => text.trim_end_matches(['\n', '\r']),
            Err(_) => {
                let error = CatalogError::Encoding;
                warn!(line = line_number, "Skipping record: {}", error);
                report.skipped.push(SkippedLine { line_number, error });
                continue;
            }
        };

        if line.trim().is_empty() || line.trim_start().starts_with(COMMENT_MARKER) {
            continue;
        }

        match decode_record(line, ids) {
            Ok(content) => report.records.push(content),
            Err(error) => {
                warn!(line = line_number, "Skipping record: {}", error);
                report.skipped.push(SkippedLine { line_number, error });
            }
        }
    }

    Ok(report)
}

/// Decode catalog text held in memory
pub fn decode_str(text: &str, ids: &mut IdAllocator) -> DecodeReport {
    // Reading from a byte slice cannot fail
    decode_lines(text.as_bytes(), ids).unwrap_or_default()
}

/// Write the header block and one line per record, in the given order
pub fn encode_to<'a, W, I>(writer: &mut W, records: I) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Content>,
{
    for line in HEADER_LINES {
        writeln!(writer, "{}", line)?;
    }
    writeln!(writer)?;

    let mut written = 0;
    for content in records {
        writeln!(writer, "{}", encode_record(content))?;
        written += 1;
    }

    Ok(written)
}

/// Read and decode a catalog file
pub fn read_catalog_file(path: &Path, ids: &mut IdAllocator) -> Result<DecodeReport> {
    ensure_catalog_path(path)?;

    let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
    let report =
        decode_lines(BufReader::new(file), ids).map_err(|e| CatalogError::io(path, e))?;

    info!(
        path = %path.display(),
        loaded = report.records.len(),
        skipped = report.skipped.len(),
        "Read catalog file"
    );
    Ok(report)
}

/// Encode records into a catalog file, replacing any previous contents
pub fn write_catalog_file<'a, I>(path: &Path, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Content>,
{
    ensure_catalog_path(path)?;

    let file = File::create(path).map_err(|e| CatalogError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let written = encode_to(&mut writer, records).map_err(|e| CatalogError::io(path, e))?;
    writer.flush().map_err(|e| CatalogError::io(path, e))?;

    debug!(path = %path.display(), written, "Wrote catalog file");
    Ok(written)
}

//! Persist the rendered report.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ReportError, ReportResult};

/// Write `html` to `path` as UTF-8, truncating any existing file.
///
/// Returns the number of bytes written. The file is not replaced
/// atomically; a failed write can leave partial output behind.
pub fn write_report(path: &Path, html: &str) -> ReportResult<usize> {
    let to_error = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_error)?;
    file.write_all(html.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)?;

    Ok(html.len())
}

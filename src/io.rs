use std::path::Path;

use tracing::debug;

use crate::error::{Result, RlsError};

/// Read a whole rule document.
///
/// # Errors
///
/// Returns [`RlsError::InvalidPath`] if `path` does not name a regular file,
/// or [`RlsError::Io`] if reading it fails.
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(RlsError::InvalidPath(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read document");
    Ok(text)
}

/// Create or overwrite `path` with `text`.
///
/// # Errors
///
/// Returns [`RlsError::Io`] if the write fails.
pub fn write_document(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote document");
    Ok(())
}

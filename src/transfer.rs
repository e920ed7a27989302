//! File transfer helpers for moving icons into the `renamed` directory.

use std::fs;
use std::path::Path;

use crate::error::{IconError, Result};

/// Copy `src` to `dst` byte for byte, overwriting `dst`.
///
/// Permissions and timestamps are not carried over.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let bytes =
        fs::read(src).map_err(|e| IconError::io(src, format!("Failed to read file: {}", e)))?;
    fs::write(dst, bytes).map_err(|e| IconError::io(dst, format!("Failed to write file: {}", e)))
}

/// Move `src` to `dst`, replacing `dst` if it exists.
pub fn move_file(src: &Path, dst: &Path) -> Result<()> {
    fs::rename(src, dst).map_err(|e| {
        IconError::io(src, format!("Failed to move to {}: {}", dst.display(), e))
    })
}

/// Create `dir` if needed. An existing directory is fine.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| IconError::io(dir, format!("Failed to create directory: {}", e)))
}

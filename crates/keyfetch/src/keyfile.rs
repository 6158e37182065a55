//! Destination key file handling - write the key, then lock down its mode
//!
//! The write truncates any previous key at the path, so reruns overwrite
//! rather than append. Permissions are restricted with the external `chmod`
//! tool (`chmod 600 <path>`); its exit status aborts the run on failure.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Write the key material verbatim, truncating any existing content.
/// The file handle lives only for the duration of this function.
pub fn write_key(path: &Path, key: &str) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    file.write_all(key.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Restrict the file to owner read/write (mode 600)
pub fn restrict_permissions(path: &Path) -> Result<()> {
    let status = Command::new("chmod")
        .arg("600")
        .arg(path)
        .status()
        .context("Failed to run chmod")?;

    if !status.success() {
        bail!("chmod 600 {} failed with status: {}", path.display(), status);
    }

    Ok(())
}

/// Write the key to `path` and restrict its permissions
pub fn install(path: &Path, key: &str) -> Result<()> {
    write_key(path, key)?;
    restrict_permissions(path)?;

    tracing::debug!(path = %path.display(), "key installed");

    Ok(())
}

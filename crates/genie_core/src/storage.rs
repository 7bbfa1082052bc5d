use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::core_api::{CoreError, CoreResult};

const BACKUP_PREFIX: &str = "(BACKUP) ";
const EDITED_PREFIX: &str = "(EDITED) ";

pub fn load_bytes(path: &Path) -> CoreResult<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| io_error("load", "open", path, &e))?;
    let size = file
        .metadata()
        .map_err(|e| io_error("load", "query size of", path, &e))?
        .len();

    let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
    file.read_to_end(&mut bytes)
        .map_err(|e| io_error("load", "read", path, &e))?;

    tracing::debug!(path = %path.display(), len = bytes.len(), "save loaded");
    Ok(bytes)
}

/// Creates or truncates `path` and writes `bytes` in full.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> CoreResult<()> {
    let mut file = File::create(path).map_err(|e| io_error("write", "open", path, &e))?;
    file.write_all(bytes)
        .map_err(|e| io_error("write", "write", path, &e))?;
    file.flush()
        .map_err(|e| io_error("write", "flush", path, &e))?;

    tracing::debug!(path = %path.display(), len = bytes.len(), "save written");
    Ok(())
}

/// Copies `path` to its backup name unless a backup already exists.
/// Returns the backup path either way.
pub fn backup_file(path: &Path) -> CoreResult<PathBuf> {
    let backup = backup_path(path);
    if backup.exists() {
        tracing::debug!(backup = %backup.display(), "keeping existing backup");
        return Ok(backup);
    }

    if !path.is_file() {
        return Err(CoreError::io(format!(
            "backup failed: input file does not exist: {}",
            path.display()
        )));
    }

    fs::copy(path, &backup).map_err(|e| {
        CoreError::io(format!(
            "backup failed: could not copy {} to {}: {e}",
            path.display(),
            backup.display()
        ))
    })?;

    tracing::debug!(backup = %backup.display(), "backup created");
    Ok(backup)
}

pub fn backup_path(path: &Path) -> PathBuf {
    prefixed_sibling(path, BACKUP_PREFIX)
}

pub fn edited_path(path: &Path) -> PathBuf {
    prefixed_sibling(path, EDITED_PREFIX)
}

fn prefixed_sibling(path: &Path, prefix: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{prefix}{file_name}"))
}

fn io_error(op: &str, action: &str, path: &Path, err: &std::io::Error) -> CoreError {
    CoreError::io(format!(
        "{op} failed: could not {action} {}: {err}",
        path.display()
    ))
}

use anyhow::Context;
use chrono::Local;
use serde_json::Value;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Render a document the way it is written to disk.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized.
pub fn render_document(document: &Value) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    Ok(json)
}

/// Write a client configuration document, replacing any existing content.
///
/// Symlinks are followed and the permissions of an existing file are kept.
///
/// # Errors
///
/// Returns an error if:
/// - Unable to create parent directories
/// - Unable to serialize the document
/// - Unable to write to the file
pub fn write_document<P: AsRef<Path>>(path: P, document: &Value) -> anyhow::Result<()> {
    let path_ref = path.as_ref();

    if let Some(parent) = path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = render_document(document)?;
    fs::write(path_ref, json).with_context(|| format!("Failed to write {}", path_ref.display()))?;

    Ok(())
}

/// Create a backup of a file with timestamp
///
/// An existing backup is never overwritten: a second backup within the same
/// second gets a numeric suffix (`.backup.<timestamp>.1`, `.2`, ...).
///
/// # Errors
///
/// Returns an error if unable to copy the file
pub fn backup_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Option<PathBuf>> {
    let path_ref = path.as_ref();

    if !path_ref.is_file() {
        return Ok(None);
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let base_name = format!(
        "{}.backup.{}",
        path_ref.file_name().and_then(|n| n.to_str()).unwrap_or("mcp.json"),
        timestamp
    );

    let mut backup_path = path_ref.with_file_name(&base_name);
    let mut suffix = 0_u32;
    let mut backup = loop {
        match OpenOptions::new().write(true).create_new(true).open(&backup_path) {
            Ok(file) => break file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                suffix += 1;
                backup_path = path_ref.with_file_name(format!("{base_name}.{suffix}"));
            },
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to create backup {}", backup_path.display()));
            },
        }
    };

    let mut original = File::open(path_ref)
        .with_context(|| format!("Failed to back up {}", path_ref.display()))?;
    io::copy(&mut original, &mut backup)
        .with_context(|| format!("Failed to back up {}", path_ref.display()))?;

    Ok(Some(backup_path))
}

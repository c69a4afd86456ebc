use super::LoadedDocument;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read a client configuration file.
///
/// A missing file and a file that is not valid JSON are both reported as
/// values, not errors. Blank files count as missing.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_document<P: AsRef<Path>>(path: P) -> anyhow::Result<LoadedDocument> {
    let path_ref = path.as_ref();

    let content = match fs::read_to_string(path_ref) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No existing config at {}", path_ref.display());
            return Ok(LoadedDocument::Missing);
        },
        Err(e) => {
            return Err(anyhow::anyhow!("Failed to read {}: {}", path_ref.display(), e));
        },
    };

    if content.trim().is_empty() {
        return Ok(LoadedDocument::Missing);
    }

    match serde_json::from_str(&content) {
        Ok(value) => Ok(LoadedDocument::Parsed(value)),
        Err(e) => Ok(LoadedDocument::Unparsable { reason: e.to_string() }),
    }
}

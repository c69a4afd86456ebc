use crate::InstallerError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_SERVER_NAME: &str = "usolver";
pub const DEFAULT_EXECUTABLE: &str = "usolver_mcp/server/main.py";

/// Locations checked for `uv` before falling back to `PATH` lookup.
const UV_CANDIDATES: [&str; 2] = ["/opt/homebrew/bin/uv", "/usr/local/bin/uv"];

/// How a client should launch the MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub name: String,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ServerEntry {
    pub fn new(name: impl Into<String>, command: impl Into<String>, args: Vec<String>) -> Self {
        Self { name: name.into(), command: command.into(), args }
    }

    /// Entry that runs `executable` with `uv run --directory <directory>`.
    pub fn uv_run(
        name: impl Into<String>,
        command: impl Into<String>,
        directory: &Path,
        executable: &str,
    ) -> Self {
        let args = vec![
            "run".to_string(),
            "--directory".to_string(),
            directory.to_string_lossy().into_owned(),
            executable.to_string(),
        ];
        Self::new(name, command, args)
    }
}

/// Partially specified server identity. Command-line flags and the config
/// file each produce one; [`ServerSettings::or`] layers them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ServerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl ServerSettings {
    /// Fill unset fields from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            name: self.name.or(fallback.name),
            executable: self.executable.or(fallback.executable),
            directory: self.directory.or(fallback.directory),
            command: self.command.or(fallback.command),
        }
    }

    /// Build the entry, using built-in defaults for anything still unset.
    ///
    /// The project directory defaults to the current directory and the
    /// command to the detected `uv` binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the server name or executable is blank, or the
    /// current directory cannot be determined.
    pub fn into_entry(self) -> Result<ServerEntry, InstallerError> {
        let name = self.name.unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string());
        if name.trim().is_empty() {
            return Err(InstallerError::Config("server name must not be empty".to_string()));
        }

        let executable = self.executable.unwrap_or_else(|| DEFAULT_EXECUTABLE.to_string());
        if executable.trim().is_empty() {
            return Err(InstallerError::Config("server executable must not be empty".to_string()));
        }

        let directory = match self.directory {
            Some(directory) => directory,
            None => std::env::current_dir()?,
        };
        let command = self.command.unwrap_or_else(resolve_uv_command);

        Ok(ServerEntry::uv_run(name, command, &directory, &executable))
    }
}

/// Pick the `uv` binary to write into client configs.
pub fn resolve_uv_command() -> String {
    resolve_uv_command_from(UV_CANDIDATES.into_iter().map(PathBuf::from))
}

pub(crate) fn resolve_uv_command_from<I>(candidates: I) -> String
where
    I: IntoIterator<Item = PathBuf>,
{
    candidates
        .into_iter()
        .find(|candidate| candidate.exists())
        .map_or_else(
            || "uv".to_string(),
            |found| {
                debug!("Using uv at {}", found.display());
                found.to_string_lossy().into_owned()
            },
        )
}

use crate::client::Client;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

const APPDATA_ENV: &str = "APPDATA";
const LOCALAPPDATA_ENV: &str = "LOCALAPPDATA";

/// Operating system conventions for where client config files live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    /// `~/Library/Application Support` layout.
    MacOs,
    /// `%APPDATA%` / `%LOCALAPPDATA%` layout.
    Windows,
    /// XDG-style dot-directories. Also used for unrecognized systems.
    Unix,
}

impl OsFamily {
    #[cfg(target_os = "macos")]
    pub const fn current() -> Self {
        Self::MacOs
    }

    #[cfg(windows)]
    pub const fn current() -> Self {
        Self::Windows
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    pub const fn current() -> Self {
        Self::Unix
    }
}

/// Directories the resolver needs from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEnv {
    pub home: PathBuf,
    pub app_data: PathBuf,
    pub local_app_data: PathBuf,
}

impl PathEnv {
    /// Read the home directory and the Windows app-data variables.
    ///
    /// Unset app-data variables resolve to an empty path, so Windows-only
    /// locations degrade to relative paths instead of failing.
    pub fn from_system() -> Self {
        let home = directories::BaseDirs::new().map_or_else(
            || {
                std::env::var_os("HOME")
                    .or_else(|| std::env::var_os("USERPROFILE"))
                    .map(PathBuf::from)
                    .unwrap_or_default()
            },
            |dirs| dirs.home_dir().to_path_buf(),
        );

        Self {
            home,
            app_data: env_path(APPDATA_ENV),
            local_app_data: env_path(LOCALAPPDATA_ENV),
        }
    }
}

fn env_path(name: &str) -> PathBuf {
    std::env::var_os(name).map(PathBuf::from).unwrap_or_default()
}

/// Map every supported client to its configuration file.
pub fn config_paths(os: OsFamily, env: &PathEnv) -> BTreeMap<Client, PathBuf> {
    let paths: BTreeMap<Client, PathBuf> =
        Client::ALL.into_iter().map(|client| (client, config_path(client, os, env))).collect();

    debug!("Resolved {} client config paths for {:?}", paths.len(), os);
    paths
}

/// Configuration file for a single client.
pub fn config_path(client: Client, os: OsFamily, env: &PathEnv) -> PathBuf {
    let home = &env.home;

    match client {
        Client::Cursor => home.join(".cursor").join("mcp.json"),
        Client::VsCode => home.join(".vscode").join("mcp.json"),
        Client::Cline => home.join(".cline").join("mcp.json"),
        Client::N8n => home.join(".n8n").join("mcp.json"),
        Client::Claude => match os {
            OsFamily::MacOs => application_support(home).join("Claude"),
            OsFamily::Windows => env.app_data.join("Claude"),
            OsFamily::Unix => home.join(".config").join("Claude"),
        }
        .join("claude_desktop_config.json"),
        Client::Windsurf => match os {
            OsFamily::MacOs => home.join(".codeium").join("windsurf"),
            OsFamily::Windows => env.local_app_data.join("Codeium").join("Windsurf"),
            OsFamily::Unix => home.join(".config").join("windsurf"),
        }
        .join("mcp_config.json"),
        Client::FiveIre => match os {
            OsFamily::MacOs => application_support(home).join("5ire"),
            OsFamily::Windows => env.app_data.join("5ire"),
            OsFamily::Unix => home.join(".config").join("5ire"),
        }
        .join("mcp.json"),
    }
}

fn application_support(home: &std::path::Path) -> PathBuf {
    home.join("Library").join("Application Support")
}

use crate::InstallerError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// Desktop applications that can launch MCP servers from their own config file.
///
/// Variant order is the order clients are processed and listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Client {
    Claude,
    Cursor,
    #[serde(rename = "vscode")]
    VsCode,
    Cline,
    Windsurf,
    #[serde(rename = "n8n")]
    N8n,
    #[serde(rename = "5ire")]
    FiveIre,
}

/// Shape of the JSON document a client expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientFamily {
    /// `{"mcpServers": {<name>: {command, args}}}`
    McpServers,
    /// `{"inputs": [], "servers": {<name>: {type, command, args}}}`
    VsCode,
    /// `{"servers": [{name, command, args}]}`
    ServerList,
}

impl Client {
    pub const ALL: [Self; 7] = [
        Self::Claude,
        Self::Cursor,
        Self::VsCode,
        Self::Cline,
        Self::Windsurf,
        Self::N8n,
        Self::FiveIre,
    ];

    /// Identifier used on the command line and in config files.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Cursor => "cursor",
            Self::VsCode => "vscode",
            Self::Cline => "cline",
            Self::Windsurf => "windsurf",
            Self::N8n => "n8n",
            Self::FiveIre => "5ire",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Claude => "Claude",
            Self::Cursor => "Cursor",
            Self::VsCode => "VSCode",
            Self::Cline => "Cline",
            Self::Windsurf => "Windsurf",
            Self::N8n => "n8n",
            Self::FiveIre => "5ire",
        }
    }

    pub const fn family(self) -> ClientFamily {
        match self {
            Self::Claude | Self::Cursor | Self::Cline | Self::N8n | Self::FiveIre => {
                ClientFamily::McpServers
            },
            Self::VsCode => ClientFamily::VsCode,
            Self::Windsurf => ClientFamily::ServerList,
        }
    }

    /// Clients that are rarely pre-installed. They are skipped instead of
    /// bootstrapped when their config directory does not exist yet.
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Cursor | Self::Cline | Self::N8n | Self::FiveIre)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Client {
    type Err = InstallerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|client| client.id() == normalized)
            .ok_or_else(|| InstallerError::UnknownClient(value.to_string()))
    }
}

impl ClientFamily {
    /// Top-level key holding the server collection.
    pub const fn servers_key(self) -> &'static str {
        match self {
            Self::McpServers => "mcpServers",
            Self::VsCode | Self::ServerList => "servers",
        }
    }

    /// Skeleton used when the client has no usable config file yet.
    pub fn default_document(self) -> Value {
        match self {
            Self::McpServers => json!({ "mcpServers": {} }),
            Self::VsCode => json!({ "inputs": [], "servers": {} }),
            Self::ServerList => json!({ "servers": [] }),
        }
    }
}

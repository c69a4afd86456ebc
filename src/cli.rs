use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mcp-installer",
    about = "Universal MCP server installer - Install an MCP server into desktop client configurations",
    long_about = "mcp-installer writes an MCP server entry into the configuration files of
desktop MCP clients so they can launch the server.

Existing entries in each client's configuration are preserved; only the
entry with the chosen server name is added or replaced.

Supported clients:
  claude    - Claude Desktop
  cursor    - Cursor
  vscode    - Visual Studio Code
  cline     - Cline
  windsurf  - Windsurf
  n8n       - n8n
  5ire      - 5ire

Defaults can be set in $XDG_CONFIG_HOME/mcp-installer/config.toml.",
    after_help = "Examples:
  mcp-installer                           # Install to all available clients
  mcp-installer --clients claude cursor   # Install only to Claude Desktop and Cursor
  mcp-installer --server-name my-server   # Override the server name
  mcp-installer --yes                     # Skip confirmation prompt",
    version,
    author
)]
pub struct Cli {
    /// Clients to install to (default: all available)
    #[arg(long, value_name = "CLIENT", num_args = 1..)]
    pub clients: Option<Vec<String>>,

    /// Override the server name (default: usolver)
    #[arg(long, env = "MCP_INSTALLER_SERVER_NAME")]
    pub server_name: Option<String>,

    /// Project directory passed to `uv run --directory` (default: current directory)
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub directory: Option<PathBuf>,

    /// Server entry point, relative to the project directory
    #[arg(long, value_name = "PATH")]
    pub executable: Option<String>,

    /// Launcher command written into client configs (default: detected uv)
    #[arg(long, value_name = "CMD")]
    pub command: Option<String>,

    /// Skip confirmation prompt and proceed with installation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// List all supported clients and their config paths
    #[arg(long)]
    pub list_clients: bool,

    /// Print the merged configurations instead of writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Create timestamped backups of existing configurations before writing
    #[arg(short, long)]
    pub backup: bool,

    /// Enable debug output (shows INFO and DEBUG messages)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Enable trace output (shows all log messages including TRACE)
    #[arg(short = 't', long, global = true)]
    pub trace: bool,
}

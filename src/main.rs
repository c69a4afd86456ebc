#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use mcp_installer::{
    app_config::AppConfig,
    cli::Cli,
    installer::{list_clients, InstallOptions, InstallOutcome, InstallReport, Installer},
    paths::{config_paths, OsFamily, PathEnv},
    prompt,
    server::ServerSettings,
    Client, ServerEntry,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.debug, cli.trace);

    let paths = config_paths(OsFamily::current(), &PathEnv::from_system());

    if cli.list_clients {
        print_clients(&paths);
        return Ok(());
    }

    let app_config = load_and_log_config()?.unwrap_or_default();

    let flags = ServerSettings {
        name: cli.server_name.clone(),
        executable: cli.executable.clone(),
        directory: cli.directory.clone(),
        command: cli.command.clone(),
    };
    let entry = flags.or(app_config.server()).into_entry().context("Invalid server settings")?;

    let requested: Option<Vec<String>> =
        cli.clients.clone().or_else(|| app_config.default_clients().map(<[String]>::to_vec));

    print_banner(&entry, requested.as_deref());

    if !cli.yes {
        let proceed = prompt::confirm("Do you want to proceed with the installation?")
            .context("Failed to read confirmation")?;
        if !proceed {
            println!("Installation cancelled.");
            std::process::exit(1);
        }
        println!();
    }

    let options = InstallOptions { dry_run: cli.dry_run, backup: cli.backup };
    let installer = Installer::new(entry, paths, options);
    let report = installer.run(requested.as_deref());

    print_outcomes(&report);

    if !print_summary(&report, options.dry_run) {
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing with the specified debug/trace flags
fn initialize_tracing(debug: bool, trace: bool) {
    let log_level = if trace {
        Level::TRACE
    } else if debug {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::builder().with_default_directive(log_level.into()).from_env_lossy())
        .init();
}

/// Load application configuration and log its status
fn load_and_log_config() -> Result<Option<AppConfig>> {
    let app_config = AppConfig::load().context("Failed to load app configuration")?;
    let config_path = AppConfig::config_path()?;

    if app_config.is_some() {
        debug!("Loaded app configuration from: {}", config_path.display());
    } else {
        debug!("No app configuration file found at: {}", config_path.display());
    }

    Ok(app_config)
}

fn print_clients(paths: &BTreeMap<Client, PathBuf>) {
    println!("Supported MCP Clients and Configuration Paths:");
    println!("{}", "=".repeat(50));

    for status in list_clients(paths) {
        let mark = if status.directory_exists { "✓" } else { "✗" };
        println!("{} {:<10} - {}", mark, status.client.id(), status.path.display());
    }

    println!();
    println!("✓ = Client directory exists");
    println!("✗ = Client directory not found");
}

fn print_banner(entry: &ServerEntry, requested: Option<&[String]>) {
    println!("MCP Server Installer");
    println!("====================");
    println!();
    println!("This will install the MCP server to your local client configurations.");
    println!("Server name: {}", entry.name);
    println!("Command: {} {}", entry.command, entry.args.join(" "));
    match requested {
        Some(clients) => println!("Target clients: {}", clients.join(", ")),
        None => println!("Target clients: all available"),
    }
    println!();
}

fn print_outcomes(report: &InstallReport) {
    for outcome in &report.outcomes {
        match outcome {
            InstallOutcome::Installed { client, path, backup, preview } => {
                if let Some(saved) = backup {
                    println!("  Backed up {} to {}", path.display(), saved.display());
                }
                match preview {
                    Some(document) => {
                        println!("Would write {}: {}", client.display_name(), path.display());
                        println!("{}", document.trim_end());
                    },
                    None => println!("✓ Installed to {}: {}", client.display_name(), path.display()),
                }
            },
            InstallOutcome::Skipped { client, .. } => {
                println!("• {} config directory not found, skipping", client.display_name());
            },
            InstallOutcome::Failed { client, error } => {
                println!("✗ Failed to install to {client}: {error}");
            },
        }
    }
}

/// Print the closing summary; returns whether the run counts as a success.
fn print_summary(report: &InstallReport, dry_run: bool) -> bool {
    println!();

    if !report.is_success() {
        println!("Installation failed - no configurations were updated.");
        return false;
    }

    let installed: Vec<&str> = report.installed().into_iter().map(Client::display_name).collect();

    if dry_run {
        println!("Dry run complete. Would install to: {}", installed.join(", "));
        return true;
    }

    println!("Installation completed successfully!");
    println!("Installed to: {}", installed.join(", "));
    println!();
    println!("Please restart your client(s) to use the MCP server.");
    println!();
    println!("Note: Some clients may require additional setup:");
    println!("- VSCode: Make sure the MCP extension is installed");
    println!("- Windsurf: Restart the application to load the new configuration");

    true
}

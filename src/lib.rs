#![allow(missing_docs)]

pub mod app_config;
pub mod cli;
pub mod client;
pub mod config;
pub mod installer;
pub mod merge;
pub mod paths;
pub mod prompt;
pub mod server;

pub use client::{Client, ClientFamily};
pub use installer::{InstallOptions, InstallOutcome, InstallReport, Installer};
pub use merge::merge;
pub use server::{ServerEntry, ServerSettings};

#[derive(Debug, thiserror::Error)]
pub enum InstallerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown client: {0}")]
    UnknownClient(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

use crate::client::Client;
use crate::config::{reader, writer, LoadedDocument};
use crate::merge::merge;
use crate::server::ServerEntry;
use anyhow::Context;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Switches that change how documents reach the disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Render merged documents without writing them.
    pub dry_run: bool,
    /// Back up every existing config file before replacing it.
    pub backup: bool,
}

/// What happened to one requested client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed {
        client: Client,
        path: PathBuf,
        /// Copy of the previous file, if one was made.
        backup: Option<PathBuf>,
        /// Rendered document when running with `dry_run`.
        preview: Option<String>,
    },
    Skipped {
        client: Client,
        path: PathBuf,
    },
    Failed {
        client: String,
        error: String,
    },
}

/// Outcomes of one installer run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub outcomes: Vec<InstallOutcome>,
}

impl InstallReport {
    /// Clients that received the server entry.
    pub fn installed(&self) -> Vec<Client> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                InstallOutcome::Installed { client, .. } => Some(*client),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<(&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                InstallOutcome::Failed { client, error } => Some((client.as_str(), error.as_str())),
                _ => None,
            })
            .collect()
    }

    /// A run succeeds when at least one client was installed, whatever else failed.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().any(|outcome| matches!(outcome, InstallOutcome::Installed { .. }))
    }
}

/// A client and whether its config directory is present on this machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientStatus {
    pub client: Client,
    pub path: PathBuf,
    pub directory_exists: bool,
}

/// Report every known client with the presence of its config directory.
pub fn list_clients(paths: &BTreeMap<Client, PathBuf>) -> Vec<ClientStatus> {
    paths
        .iter()
        .map(|(client, path)| ClientStatus {
            client: *client,
            path: path.clone(),
            directory_exists: parent_exists(path),
        })
        .collect()
}

fn parent_exists(path: &Path) -> bool {
    path.parent().is_some_and(Path::is_dir)
}

/// Writes one server entry into the config files of the requested clients.
#[derive(Debug, Clone)]
pub struct Installer {
    entry: ServerEntry,
    paths: BTreeMap<Client, PathBuf>,
    options: InstallOptions,
}

impl Installer {
    pub const fn new(
        entry: ServerEntry,
        paths: BTreeMap<Client, PathBuf>,
        options: InstallOptions,
    ) -> Self {
        Self { entry, paths, options }
    }

    /// Install into `requested` clients, or every known client when `None`.
    ///
    /// Unknown identifiers are recorded as failures. Known clients are
    /// processed once each, in [`Client::ALL`] order, and a failure for one
    /// client never stops the others.
    pub fn run(&self, requested: Option<&[String]>) -> InstallReport {
        let mut report = InstallReport::default();

        let targets: BTreeSet<Client> = match requested {
            None => self.paths.keys().copied().collect(),
            Some(ids) => ids
                .iter()
                .filter_map(|id| match id.parse::<Client>() {
                    Ok(client) => Some(client),
                    Err(e) => {
                        warn!("{}", e);
                        report
                            .outcomes
                            .push(InstallOutcome::Failed { client: id.clone(), error: e.to_string() });
                        None
                    },
                })
                .collect(),
        };

        for client in targets {
            report.outcomes.push(self.install_one(client));
        }

        report
    }

    fn install_one(&self, client: Client) -> InstallOutcome {
        let Some(path) = self.paths.get(&client) else {
            return InstallOutcome::Failed {
                client: client.to_string(),
                error: format!("No config path known for {}", client.display_name()),
            };
        };

        if client.is_optional() && !parent_exists(path) {
            debug!("{} config directory not found, skipping", client.display_name());
            return InstallOutcome::Skipped { client, path: path.clone() };
        }

        match self.install_to(client, path) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Failed to install to {}: {:#}", client.display_name(), e);
                InstallOutcome::Failed { client: client.to_string(), error: format!("{e:#}") }
            },
        }
    }

    /// Load, merge and write the config file of a single client.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be read, backed up or
    /// replaced.
    pub fn install_to(&self, client: Client, path: &Path) -> anyhow::Result<InstallOutcome> {
        debug!("Installing '{}' to {} at {}", self.entry.name, client, path.display());

        let loaded = reader::load_document(path)?;
        let mut backup = None;

        if let LoadedDocument::Unparsable { reason } = &loaded {
            warn!("Could not parse {} ({}), creating a new config", path.display(), reason);
            if !self.options.dry_run {
                backup = writer::backup_file(path)?;
                if let Some(saved) = &backup {
                    warn!("Previous content saved to {}", saved.display());
                }
            }
        } else if self.options.backup && !self.options.dry_run {
            backup = writer::backup_file(path)?;
        }

        let document = merge(loaded.into_existing(), client.family(), &self.entry);

        if self.options.dry_run {
            let preview = writer::render_document(&document)?;
            return Ok(InstallOutcome::Installed {
                client,
                path: path.to_path_buf(),
                backup,
                preview: Some(preview),
            });
        }

        writer::write_document(path, &document)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {} config to {}", client.display_name(), path.display());

        Ok(InstallOutcome::Installed { client, path: path.to_path_buf(), backup, preview: None })
    }
}

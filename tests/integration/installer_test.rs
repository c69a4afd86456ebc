#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::TestHome;
use mcp_installer::installer::{InstallOptions, InstallOutcome, Installer};
use mcp_installer::{Client, ServerEntry};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use std::path::Path;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn usolver_entry() -> ServerEntry {
        ServerEntry::uv_run("usolver", "uv", Path::new("/tmp/proj"), "usolver_mcp/server/main.py")
    }

    fn installer_for(home: &TestHome, options: InstallOptions) -> Installer {
        Installer::new(usolver_entry(), home.paths.clone(), options)
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_claude_from_scratch() {
        let home = TestHome::new().unwrap();
        let report = installer_for(&home, InstallOptions::default()).run(Some(&ids(&["claude"])));

        assert!(report.is_success());
        assert_eq!(
            home.read_config(Client::Claude),
            json!({
                "mcpServers": {
                    "usolver": {
                        "command": "uv",
                        "args": ["run", "--directory", "/tmp/proj", "usolver_mcp/server/main.py"]
                    }
                }
            })
        );
    }

    #[rstest]
    #[case(Client::Claude, json!({"mcpServers": {"usolver": {"command": "uv", "args": ["run", "--directory", "/tmp/proj", "usolver_mcp/server/main.py"]}}}))]
    #[case(Client::VsCode, json!({"inputs": [], "servers": {"usolver": {"type": "stdio", "command": "uv", "args": ["run", "--directory", "/tmp/proj", "usolver_mcp/server/main.py"]}}}))]
    #[case(Client::Windsurf, json!({"servers": [{"name": "usolver", "command": "uv", "args": ["run", "--directory", "/tmp/proj", "usolver_mcp/server/main.py"]}]}))]
    #[case(Client::N8n, json!({"mcpServers": {"usolver": {"command": "uv", "args": ["run", "--directory", "/tmp/proj", "usolver_mcp/server/main.py"]}}}))]
    fn test_each_family_shape(#[case] client: Client, #[case] expected: serde_json::Value) {
        let home = TestHome::new().unwrap();
        home.create_client_dir(client).unwrap();

        let report =
            installer_for(&home, InstallOptions::default()).run(Some(&[client.id().to_string()]));

        assert_eq!(report.installed(), vec![client]);
        assert_eq!(home.read_config(client), expected);
    }

    #[test]
    fn test_all_clients_skip_missing_optional_directories() {
        let home = TestHome::new().unwrap();
        home.create_client_dir(Client::Cline).unwrap();

        let report = installer_for(&home, InstallOptions::default()).run(None);

        assert_eq!(
            report.installed(),
            vec![Client::Claude, Client::VsCode, Client::Cline, Client::Windsurf]
        );
        let skipped: Vec<Client> = report
            .outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                InstallOutcome::Skipped { client, .. } => Some(*client),
                _ => None,
            })
            .collect();
        assert_eq!(skipped, vec![Client::Cursor, Client::N8n, Client::FiveIre]);
        assert!(!home.path(Client::Cursor).exists());
    }

    #[test]
    fn test_requested_clients_follow_enumeration_order() {
        let home = TestHome::new().unwrap();

        let report = installer_for(&home, InstallOptions::default())
            .run(Some(&ids(&["windsurf", "claude", "windsurf", "vscode"])));

        assert_eq!(report.installed(), vec![Client::Claude, Client::VsCode, Client::Windsurf]);
        assert_eq!(report.outcomes.len(), 3);
    }

    #[test]
    fn test_existing_entries_are_preserved() {
        let home = TestHome::new().unwrap();
        home.write_config(
            Client::Cursor,
            r#"{"mcpServers": {"git": {"command": "uvx", "args": ["mcp-server-git"]}}, "theme": "dark"}"#,
        )
        .unwrap();

        installer_for(&home, InstallOptions::default()).run(Some(&ids(&["cursor"])));

        let config = home.read_config(Client::Cursor);
        assert_eq!(config["theme"], json!("dark"));
        assert_eq!(config["mcpServers"]["git"], json!({"command": "uvx", "args": ["mcp-server-git"]}));
        assert_eq!(config["mcpServers"]["usolver"]["command"], json!("uv"));
    }

    #[test]
    fn test_reinstall_replaces_windsurf_entry_in_place() {
        let home = TestHome::new().unwrap();
        home.write_config(
            Client::Windsurf,
            r#"{"servers": [{"name": "usolver", "command": "python", "args": []}, {"name": "other", "command": "x", "args": []}]}"#,
        )
        .unwrap();

        let installer = installer_for(&home, InstallOptions::default());
        installer.run(Some(&ids(&["windsurf"])));
        installer.run(Some(&ids(&["windsurf"])));

        let servers = home.read_config(Client::Windsurf)["servers"].clone();
        assert_eq!(servers.as_array().map(Vec::len), Some(2));
        assert_eq!(servers[0]["command"], json!("uv"));
        assert_eq!(servers[1]["name"], json!("other"));
    }

    #[test]
    fn test_no_successes_is_failure() {
        let home = TestHome::new().unwrap();

        let report = installer_for(&home, InstallOptions::default())
            .run(Some(&ids(&["cursor", "n8n", "bogus"])));

        assert!(report.installed().is_empty());
        assert!(!report.is_success());
        assert_eq!(report.failures(), vec![("bogus", "Unknown client: bogus")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_filesystem_failure_is_isolated() {
        let home = TestHome::new().unwrap();
        // A regular file where the Claude config directory should be.
        let claude_dir = home.path(Client::Claude).parent().unwrap().to_path_buf();
        fs::create_dir_all(claude_dir.parent().unwrap()).unwrap();
        fs::write(&claude_dir, "not a directory").unwrap();

        let report =
            installer_for(&home, InstallOptions::default()).run(Some(&ids(&["claude", "vscode"])));

        assert_eq!(report.installed(), vec![Client::VsCode]);
        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "claude");
        assert!(report.is_success());
    }

    #[test]
    fn test_backup_option_copies_existing_file() {
        let home = TestHome::new().unwrap();
        let original = r#"{"mcpServers": {}}"#;
        home.write_config(Client::Claude, original).unwrap();

        let options = InstallOptions { dry_run: false, backup: true };
        let report = installer_for(&home, options).run(Some(&ids(&["claude"])));

        let Some(InstallOutcome::Installed { backup: Some(backup), .. }) = report.outcomes.first()
        else {
            panic!("expected an installed outcome with a backup: {:?}", report.outcomes);
        };
        assert_eq!(fs::read_to_string(backup).unwrap(), original);
    }

    #[test]
    fn test_corrupt_file_is_replaced_after_backup() {
        let home = TestHome::new().unwrap();
        home.write_config(Client::VsCode, "{ \"servers\": ").unwrap();

        let report = installer_for(&home, InstallOptions::default()).run(Some(&ids(&["vscode"])));

        assert!(report.is_success());
        assert_eq!(home.read_config(Client::VsCode)["inputs"], json!([]));

        let backups: Vec<_> = fs::read_dir(home.path(Client::VsCode).parent().unwrap())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("mcp.json.backup."))
            .collect();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(backups[0].path()).unwrap(), "{ \"servers\": ");
    }

    #[test]
    fn test_dry_run_leaves_disk_untouched() {
        let home = TestHome::new().unwrap();
        home.write_config(Client::Claude, r#"{"mcpServers": {}}"#).unwrap();

        let options = InstallOptions { dry_run: true, backup: true };
        let report = installer_for(&home, options).run(Some(&ids(&["claude", "windsurf"])));

        assert!(report.is_success());
        assert_eq!(home.read_config(Client::Claude), json!({"mcpServers": {}}));
        assert!(!home.path(Client::Windsurf).exists());
        assert!(report
            .outcomes
            .iter()
            .all(|outcome| matches!(outcome, InstallOutcome::Installed { backup: None, preview: Some(_), .. })));
    }
}

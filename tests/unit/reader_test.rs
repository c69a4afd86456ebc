use assert_fs::prelude::*;
use mcp_installer::config::{reader::load_document, LoadedDocument};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_existing_document() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let file = temp_dir.child("claude_desktop_config.json");
        file.write_str(r#"{"mcpServers": {"git": {"command": "uvx", "args": ["mcp-server-git"]}}}"#)
            .unwrap();

        let loaded = load_document(file.path()).unwrap();
        assert_eq!(
            loaded,
            LoadedDocument::Parsed(
                json!({"mcpServers": {"git": {"command": "uvx", "args": ["mcp-server-git"]}}})
            )
        );
    }

    #[test]
    fn test_missing_document_has_no_existing_value() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let loaded = load_document(temp_dir.child("mcp.json").path()).unwrap();

        assert_eq!(loaded, LoadedDocument::Missing);
        assert!(!loaded.is_unparsable());
        assert_eq!(loaded.into_existing(), None);
    }

    #[test]
    fn test_truncated_document_is_unparsable() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let file = temp_dir.child("mcp.json");
        file.write_str(r#"{"mcpServers": {"git": "#).unwrap();

        let loaded = load_document(file.path()).unwrap();
        match &loaded {
            LoadedDocument::Unparsable { reason } => assert!(reason.contains("EOF")),
            other => panic!("expected unparsable document, got {other:?}"),
        }
        assert_eq!(loaded.into_existing(), None);
    }

    #[test]
    fn test_non_object_json_is_still_parsed() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let file = temp_dir.child("mcp.json");
        file.write_str("[1, 2, 3]").unwrap();

        assert_eq!(load_document(file.path()).unwrap(), LoadedDocument::Parsed(json!([1, 2, 3])));
    }
}

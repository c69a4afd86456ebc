#![allow(clippy::self_named_module_files)]

use serde_json::Value;

pub mod reader;
pub mod writer;

/// Result of looking for an existing client configuration file.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedDocument {
    /// No file at the target path.
    Missing,
    /// The file held valid JSON.
    Parsed(Value),
    /// The file exists but is not valid JSON.
    Unparsable { reason: String },
}

impl LoadedDocument {
    /// The document to merge into; `None` means start from a skeleton.
    pub fn into_existing(self) -> Option<Value> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Missing | Self::Unparsable { .. } => None,
        }
    }

    pub const fn is_unparsable(&self) -> bool {
        matches!(self, Self::Unparsable { .. })
    }
}

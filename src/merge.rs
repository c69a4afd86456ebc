use crate::client::ClientFamily;
use crate::server::ServerEntry;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

/// Insert or replace one server entry in a client configuration document.
///
/// `existing` is the parsed document, or `None` when the client has no
/// usable config yet, in which case the family skeleton is used. Every key
/// and server other than `entry.name` is carried over untouched.
pub fn merge(existing: Option<Value>, family: ClientFamily, entry: &ServerEntry) -> Value {
    let mut root = match existing {
        Some(Value::Object(map)) => map,
        Some(other) => {
            warn!("Config root is {} rather than an object, starting over", json_kind(&other));
            skeleton(family)
        },
        None => skeleton(family),
    };

    let key = family.servers_key();
    match family {
        ClientFamily::McpServers => with_object(&mut root, key, |servers| {
            servers.insert(entry.name.clone(), json!({"command": entry.command, "args": entry.args}));
        }),
        ClientFamily::VsCode => with_object(&mut root, key, |servers| {
            servers.insert(
                entry.name.clone(),
                json!({"type": "stdio", "command": entry.command, "args": entry.args}),
            );
        }),
        ClientFamily::ServerList => with_array(&mut root, key, |servers| upsert_named(servers, entry)),
    }

    Value::Object(root)
}

fn skeleton(family: ClientFamily) -> Map<String, Value> {
    match family.default_document() {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn upsert_named(servers: &mut Vec<Value>, entry: &ServerEntry) {
    let record = json!({"name": entry.name, "command": entry.command, "args": entry.args});

    let position = servers
        .iter()
        .position(|server| server.get("name").and_then(Value::as_str) == Some(entry.name.as_str()));

    if let Some(index) = position {
        debug!("Replacing server '{}' at index {}", entry.name, index);
        servers[index] = record;
    } else {
        servers.push(record);
    }
}

/// Run `update` on the object under `key`, creating it (or replacing a
/// non-object) first. The key keeps its position in `root`.
fn with_object<F>(root: &mut Map<String, Value>, key: &str, update: F)
where
    F: FnOnce(&mut Map<String, Value>),
{
    let slot = root.entry(key.to_string()).or_insert(Value::Null);
    let mut servers = match std::mem::take(slot) {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            warn!("'{}' is {} rather than an object, replacing it", key, json_kind(&other));
            Map::new()
        },
    };
    update(&mut servers);
    *slot = Value::Object(servers);
}

/// Array counterpart of [`with_object`].
fn with_array<F>(root: &mut Map<String, Value>, key: &str, update: F)
where
    F: FnOnce(&mut Vec<Value>),
{
    let slot = root.entry(key.to_string()).or_insert(Value::Null);
    let mut servers = match std::mem::take(slot) {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => {
            warn!("'{}' is {} rather than an array, replacing it", key, json_kind(&other));
            Vec::new()
        },
    };
    update(&mut servers);
    *slot = Value::Array(servers);
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

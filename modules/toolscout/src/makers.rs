//! Maker names from the many shapes a listing uses to reference people:
//! a single user, a list of users, or a GraphQL connection wrapping either.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::builder::text_value;

/// Listing keys that may reference makers, scanned in this order.
pub const MAKER_FIELDS: &[&str] = &[
    "makers",
    "makersPreview",
    "makersConnection",
    "primaryMaker",
    "primaryMakers",
    "maker",
    "team",
    "teamMembers",
];

/// Keys under which a connection-style wrapper keeps its people.
const CONNECTION_KEYS: &[&str] = &["nodes", "edges", "profiles", "items", "collection", "members"];

/// Keys that wrap the actual user record.
const USER_KEYS: &[&str] = &["user", "users"];

pub fn extract_maker_names(node: &Map<String, Value>) -> Vec<String> {
    let mut names = Vec::new();
    for key in MAKER_FIELDS {
        if let Some(value) = node.get(*key) {
            collect_people(value, &mut names);
        }
    }
    dedup_names(names)
}

/// Flatten one person-ish value into display names, appending to `out`.
/// Names come out in document order; nesting depth is bounded only by memory.
pub fn collect_people(value: &Value, out: &mut Vec<String>) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items.iter().rev()),
            Value::Object(person) => {
                if let Some(display) = display_name(person) {
                    out.push(display);
                }
                pending.extend(nested_people(person).into_iter().rev());
            }
            _ => {}
        }
    }
}

fn display_name(person: &Map<String, Value>) -> Option<String> {
    ["displayName", "name"]
        .iter()
        .find_map(|key| person.get(*key).and_then(text_value))
}

/// Values under `person` that may hold further people, in scan order.
fn nested_people(person: &Map<String, Value>) -> Vec<&Value> {
    let mut nested = Vec::new();

    for key in CONNECTION_KEYS {
        match (*key, person.get(*key)) {
            ("edges", Some(Value::Array(edges))) => {
                nested.extend(edges.iter().map(|edge| edge.get("node").unwrap_or(edge)));
            }
            (_, Some(container)) => nested.push(container),
            (_, None) => {}
        }
    }

    if let Some(inner @ (Value::Object(_) | Value::Array(_))) = person.get("node") {
        nested.push(inner);
    }

    nested.extend(USER_KEYS.iter().filter_map(|key| person.get(*key)));
    nested
}

/// Drop empty and repeated names, keeping first-seen order.
pub fn dedup_names(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .collect()
}

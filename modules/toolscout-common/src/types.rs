use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// --- Listing record ---

/// One AI tool listing discovered on a topic page.
///
/// `slug` is the de-duplication key. It is kept on the record but left out of
/// the serialized form, which carries only the user-facing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTool {
    #[serde(skip)]
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub makers: Vec<String>,
    pub product_hunt_url: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub external_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes_count: Option<i64>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

impl AiTool {
    /// Votes used for ranking. A listing without a count ranks like one with zero.
    pub fn rank_score(&self) -> i64 {
        self.votes_count.unwrap_or(0)
    }

    /// Plain key-value form. Absent optional fields are omitted, never `null`.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("name".into(), Value::String(self.name.clone()));
        map.insert("tagline".into(), Value::String(self.tagline.clone()));
        map.insert(
            "makers".into(),
            Value::Array(self.makers.iter().cloned().map(Value::String).collect()),
        );
        map.insert(
            "product_hunt_url".into(),
            Value::String(self.product_hunt_url.clone()),
        );
        if let Some(url) = self.external_url.as_deref().filter(|u| !u.is_empty()) {
            map.insert("external_url".into(), Value::String(url.to_string()));
        }
        if let Some(votes) = self.votes_count {
            map.insert("votes_count".into(), Value::from(votes));
        }
        Value::Object(map)
    }
}

//! Turns payload mappings into [`AiTool`] records.
//!
//! Product and post nodes come in many shapes. Each output field is resolved
//! by an ordered list of [`FieldPath`]s; the first one that yields a non-empty
//! value wins.

use serde_json::{Map, Value};
use toolscout_common::{AiTool, PRODUCT_HUNT_BASE_URL};

use crate::makers::extract_maker_names;
use crate::walker::walk;

/// `__typename` substrings that mark a node as a listing.
pub const LISTING_TYPE_TOKENS: &[&str] = &["Post", "Product"];

// --- Field resolvers ---

/// Where a field may live on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Key(&'static str),
    Nested(&'static str, &'static str),
}

impl FieldPath {
    pub fn label(&self) -> String {
        match self {
            FieldPath::Key(key) => key.to_string(),
            FieldPath::Nested(outer, inner) => format!("{outer}.{inner}"),
        }
    }

    pub fn lookup<'a>(&self, node: &'a Map<String, Value>) -> Option<&'a Value> {
        match self {
            FieldPath::Key(key) => node.get(*key),
            FieldPath::Nested(outer, inner) => node.get(*outer)?.as_object()?.get(*inner),
        }
    }

    pub fn resolve(&self, node: &Map<String, Value>) -> Option<String> {
        self.lookup(node).and_then(text_value)
    }
}

pub const NAME_FIELDS: &[FieldPath] = &[FieldPath::Key("name"), FieldPath::Key("title")];

pub const TAGLINE_FIELDS: &[FieldPath] =
    &[FieldPath::Key("tagline"), FieldPath::Key("description")];

pub const PROFILE_URL_FIELDS: &[FieldPath] = &[FieldPath::Key("profileUrl")];

pub const EXTERNAL_URL_FIELDS: &[FieldPath] = &[
    FieldPath::Key("websiteUrl"),
    FieldPath::Key("website"),
    FieldPath::Key("redirectUrl"),
    FieldPath::Key("url"),
    FieldPath::Nested("urls", "website"),
];

pub const VOTE_FIELDS: &[FieldPath] = &[FieldPath::Key("votesCount"), FieldPath::Key("votes")];

/// First non-empty value across `fields`, in order.
pub fn resolve_first(fields: &[FieldPath], node: &Map<String, Value>) -> Option<String> {
    fields.iter().find_map(|field| field.resolve(node))
}

/// Like [`resolve_first`], but values are trimmed and a blank one falls through
/// to the next field.
pub fn resolve_first_trimmed(fields: &[FieldPath], node: &Map<String, Value>) -> Option<String> {
    fields.iter().find_map(|field| {
        field
            .resolve(node)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    })
}

/// Text for a value that counts as present: non-empty strings, numbers and `true`.
/// `null`, `false`, `""` and containers resolve to nothing.
pub fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

// --- Votes ---

/// Vote count from `votesCount` or `votes`, unwrapping a `{count}` object.
/// A missing or non-numeric value gives `None`, which is not the same as zero.
pub fn extract_votes(node: &Map<String, Value>) -> Option<i64> {
    let raw = VOTE_FIELDS
        .iter()
        .filter_map(|field| field.lookup(node))
        .find(|value| !value.is_null())?;
    let raw = match raw {
        Value::Object(inner) => inner.get("count")?,
        other => other,
    };
    coerce_votes(raw)
}

fn coerce_votes(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_float)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Integer part of `f`, or `None` when it does not fit an `i64`.
fn truncate_float(f: f64) -> Option<i64> {
    let whole = f.trunc();
    (i64::MIN as f64..i64::MAX as f64)
        .contains(&whole)
        .then_some(whole as i64)
}

// --- Candidates ---

/// A mapping that passed the listing capability check: a listing type tag,
/// a slug, and a display name.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub node: &'a Map<String, Value>,
    pub slug: String,
    pub name: String,
}

impl<'a> Candidate<'a> {
    pub fn from_node(node: &'a Map<String, Value>) -> Option<Self> {
        if !has_listing_type(node) {
            return None;
        }
        let slug = FieldPath::Key("slug").resolve(node)?;
        let name = resolve_first_trimmed(NAME_FIELDS, node)?;
        Some(Self { node, slug, name })
    }

    pub fn build(self) -> AiTool {
        build_tool(self.node, &self.slug, &self.name)
    }
}

pub fn has_listing_type(node: &Map<String, Value>) -> bool {
    node.get("__typename")
        .and_then(Value::as_str)
        .is_some_and(|tag| LISTING_TYPE_TOKENS.iter().any(|token| tag.contains(token)))
}

/// Build a record from a node whose slug and name are already resolved.
pub fn build_tool(node: &Map<String, Value>, slug: &str, name: &str) -> AiTool {
    let tagline = resolve_first(TAGLINE_FIELDS, node)
        .map(|t| t.trim().to_string())
        .unwrap_or_default();

    let product_hunt_url = resolve_first(PROFILE_URL_FIELDS, node)
        .unwrap_or_else(|| format!("{PRODUCT_HUNT_BASE_URL}/posts/{slug}"));

    AiTool {
        slug: slug.to_string(),
        name: name.trim().to_string(),
        tagline,
        makers: extract_maker_names(node),
        product_hunt_url,
        external_url: resolve_first(EXTERNAL_URL_FIELDS, node),
        votes_count: extract_votes(node),
    }
}

/// Walk the payload and build every listing, tagged with its discovery order.
/// Repeated slugs are kept here; the ranker drops them.
pub fn collect_candidates(payload: &Value) -> Vec<(usize, AiTool)> {
    walk(payload)
        .filter_map(Candidate::from_node)
        .map(Candidate::build)
        .enumerate()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn field_paths_resolve_top_level_and_nested() {
        let node = obj(json!({"url": "https://a.dev", "urls": {"website": "https://b.dev"}}));
        assert_eq!(FieldPath::Key("url").resolve(&node).as_deref(), Some("https://a.dev"));
        assert_eq!(
            FieldPath::Nested("urls", "website").resolve(&node).as_deref(),
            Some("https://b.dev")
        );
        assert_eq!(FieldPath::Nested("url", "website").resolve(&node), None);
        assert_eq!(FieldPath::Nested("urls", "website").label(), "urls.website");
    }

    #[test]
    fn resolve_first_skips_empty_values() {
        let node = obj(json!({"tagline": "", "description": "Fallback"}));
        assert_eq!(resolve_first(TAGLINE_FIELDS, &node).as_deref(), Some("Fallback"));

        let node = obj(json!({"tagline": null}));
        assert_eq!(resolve_first(TAGLINE_FIELDS, &node), None);
    }

    #[test]
    fn text_value_follows_presence_rules() {
        assert_eq!(text_value(&json!("x")).as_deref(), Some("x"));
        assert_eq!(text_value(&json!(12)).as_deref(), Some("12"));
        assert_eq!(text_value(&json!(true)).as_deref(), Some("true"));
        assert_eq!(text_value(&json!("")), None);
        assert_eq!(text_value(&json!(false)), None);
        assert_eq!(text_value(&json!(null)), None);
        assert_eq!(text_value(&json!({"a": 1})), None);
    }

    #[test]
    fn external_url_priority() {
        let node = obj(json!({"website": "https://w", "url": "https://u"}));
        assert_eq!(resolve_first(EXTERNAL_URL_FIELDS, &node).as_deref(), Some("https://w"));

        let node = obj(json!({"websiteUrl": "", "redirectUrl": "https://r"}));
        assert_eq!(resolve_first(EXTERNAL_URL_FIELDS, &node).as_deref(), Some("https://r"));

        let node = obj(json!({"urls": {"website": "https://nested"}}));
        assert_eq!(
            resolve_first(EXTERNAL_URL_FIELDS, &node).as_deref(),
            Some("https://nested")
        );

        let node = obj(json!({"urls": {"website": ""}}));
        assert_eq!(resolve_first(EXTERNAL_URL_FIELDS, &node), None);
    }

    #[test]
    fn votes_are_coerced() {
        assert_eq!(extract_votes(&obj(json!({"votesCount": 42}))), Some(42));
        assert_eq!(extract_votes(&obj(json!({"votesCount": "431"}))), Some(431));
        assert_eq!(extract_votes(&obj(json!({"votesCount": " 7 "}))), Some(7));
        assert_eq!(extract_votes(&obj(json!({"votesCount": 12.9}))), Some(12));
        assert_eq!(extract_votes(&obj(json!({"votes": {"count": 300}}))), Some(300));
        assert_eq!(extract_votes(&obj(json!({"votes": {"count": "8"}}))), Some(8));
    }

    #[test]
    fn zero_votes_differ_from_missing_votes() {
        assert_eq!(extract_votes(&obj(json!({"votesCount": 0}))), Some(0));
        assert_eq!(extract_votes(&obj(json!({}))), None);
    }

    #[test]
    fn uncoercible_votes_are_none() {
        assert_eq!(extract_votes(&obj(json!({"votesCount": "lots"}))), None);
        assert_eq!(extract_votes(&obj(json!({"votesCount": "1.5"}))), None);
        assert_eq!(extract_votes(&obj(json!({"votesCount": [1]}))), None);
        assert_eq!(extract_votes(&obj(json!({"votesCount": true}))), None);
        assert_eq!(extract_votes(&obj(json!({"votes": {"total": 5}}))), None);
    }

    #[test]
    fn out_of_range_votes_are_none() {
        assert_eq!(extract_votes(&obj(json!({"votesCount": u64::MAX}))), None);
        assert_eq!(extract_votes(&obj(json!({"votesCount": 1e20}))), None);
        assert_eq!(extract_votes(&obj(json!({"votesCount": -1e20}))), None);
        assert_eq!(extract_votes(&obj(json!({"votesCount": "99999999999999999999"}))), None);
        assert_eq!(extract_votes(&obj(json!({"votesCount": i64::MAX}))), Some(i64::MAX));
        assert_eq!(extract_votes(&obj(json!({"votesCount": -3.7}))), Some(-3));
    }

    #[test]
    fn votes_count_takes_priority_over_votes() {
        let node = obj(json!({"votesCount": 10, "votes": {"count": 99}}));
        assert_eq!(extract_votes(&node), Some(10));

        let node = obj(json!({"votesCount": null, "votes": 99}));
        assert_eq!(extract_votes(&node), Some(99));
    }

    #[test]
    fn candidate_requires_type_slug_and_name() {
        let ok = obj(json!({"__typename": "Post", "slug": "a", "name": " A "}));
        let candidate = Candidate::from_node(&ok).unwrap();
        assert_eq!(candidate.slug, "a");
        assert_eq!(candidate.name, "A");

        let titled = obj(json!({"__typename": "ProductPost", "slug": "t", "title": "T"}));
        assert_eq!(Candidate::from_node(&titled).unwrap().name, "T");

        let blank_name = obj(json!({"__typename": "Post", "slug": "s", "name": "  ", "title": " T "}));
        assert_eq!(Candidate::from_node(&blank_name).unwrap().name, "T");

        for rejected in [
            json!({"slug": "a", "name": "A"}),
            json!({"__typename": "User", "slug": "a", "name": "A"}),
            json!({"__typename": 3, "slug": "a", "name": "A"}),
            json!({"__typename": "Post", "name": "A"}),
            json!({"__typename": "Post", "slug": "", "name": "A"}),
            json!({"__typename": "Post", "slug": "a"}),
            json!({"__typename": "Post", "slug": "a", "name": "   "}),
        ] {
            assert!(Candidate::from_node(&obj(rejected.clone())).is_none(), "{rejected}");
        }
    }

    #[test]
    fn build_tool_fills_defaults() {
        let node = obj(json!({"__typename": "Post", "slug": "bare", "name": "Bare"}));
        let tool = build_tool(&node, "bare", "Bare");
        assert_eq!(tool.tagline, "");
        assert!(tool.makers.is_empty());
        assert_eq!(tool.product_hunt_url, "https://www.producthunt.com/posts/bare");
        assert_eq!(tool.external_url, None);
        assert_eq!(tool.votes_count, None);
    }

    #[test]
    fn build_tool_uses_explicit_fields() {
        let node = obj(json!({
            "__typename": "Post",
            "slug": "full",
            "name": "Full",
            "tagline": "  Does it all  ",
            "profileUrl": "https://www.producthunt.com/products/full",
            "websiteUrl": "https://full.dev",
            "votesCount": 5,
            "makers": [{"name": "Ann"}],
        }));
        let tool = build_tool(&node, "full", "Full");
        assert_eq!(tool.tagline, "Does it all");
        assert_eq!(tool.product_hunt_url, "https://www.producthunt.com/products/full");
        assert_eq!(tool.external_url.as_deref(), Some("https://full.dev"));
        assert_eq!(tool.votes_count, Some(5));
        assert_eq!(tool.makers, vec!["Ann"]);
    }

    #[test]
    fn collect_candidates_numbers_accepted_nodes_only() {
        let payload = json!({
            "topic": {"__typename": "Topic", "slug": "ai", "name": "AI"},
            "posts": [
                {"__typename": "Post", "slug": "one", "name": "One"},
                {"__typename": "Post", "slug": "", "name": "Skipped"},
                {"__typename": "Post", "slug": "two", "name": "Two"},
                {"__typename": "Post", "slug": "one", "name": "One again"},
            ]
        });
        let found: Vec<(usize, String)> = collect_candidates(&payload)
            .into_iter()
            .map(|(order, tool)| (order, tool.name))
            .collect();
        assert_eq!(
            found,
            vec![
                (0, "One".to_string()),
                (1, "Two".to_string()),
                (2, "One again".to_string()),
            ]
        );
    }
}

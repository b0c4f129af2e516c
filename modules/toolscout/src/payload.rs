//! Locates the `__NEXT_DATA__` JSON blob embedded in a topic page.

use serde::Deserialize;
use serde_json::Value;
use toolscout_common::ScrapeError;

const PAYLOAD_OPEN: &str = r#"<script id="__NEXT_DATA__" type="application/json">"#;
const PAYLOAD_CLOSE: &str = "</script>";

/// Slice the raw payload text out of `html`, still entity-escaped.
pub fn payload_text(html: &str) -> Result<&str, ScrapeError> {
    let start = html
        .find(PAYLOAD_OPEN)
        .ok_or(ScrapeError::PayloadNotFound)?
        + PAYLOAD_OPEN.len();
    let len = html[start..]
        .find(PAYLOAD_CLOSE)
        .ok_or(ScrapeError::MalformedPayload)?;
    Ok(&html[start..start + len])
}

/// Find, unescape, and parse the embedded payload.
pub fn locate_payload(html: &str) -> Result<Value, ScrapeError> {
    let raw = payload_text(html)?;
    let json = html_escape::decode_html_entities(raw);
    tracing::debug!(bytes = json.len(), "Located embedded payload");
    parse_unbounded(&json)
}

/// Parse JSON of any nesting depth. The stack grows on demand instead of
/// hitting serde_json's recursion limit.
fn parse_unbounded(json: &str) -> Result<Value, ScrapeError> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

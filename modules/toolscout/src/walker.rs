//! Exhaustive walk over a decoded payload.
//!
//! Every JSON value is one of three shapes: a mapping, a sequence, or a scalar.
//! The walk descends into mappings and sequences with an explicit work-list, so
//! payload depth never turns into call-stack depth, and yields each mapping it
//! reaches exactly once, in document order (pre-order).

use serde_json::{Map, Value};

/// A payload value classified by shape.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Mapping(&'a Map<String, Value>),
    Sequence(&'a [Value]),
    Scalar(&'a Value),
}

impl<'a> Node<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Node::Mapping(map),
            Value::Array(items) => Node::Sequence(items),
            _ => Node::Scalar(value),
        }
    }
}

/// Lazy iterator over every mapping reachable from a root value.
/// Consumed as it goes; walk again with a fresh [`walk`] call.
pub struct MappingNodes<'a> {
    pending: Vec<&'a Value>,
}

pub fn walk(root: &Value) -> MappingNodes<'_> {
    MappingNodes {
        pending: vec![root],
    }
}

impl<'a> Iterator for MappingNodes<'a> {
    type Item = &'a Map<String, Value>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(value) = self.pending.pop() {
            match Node::of(value) {
                Node::Mapping(map) => {
                    // Reversed so the first child is popped first.
                    self.pending.extend(map.values().rev());
                    return Some(map);
                }
                Node::Sequence(items) => self.pending.extend(items.iter().rev()),
                Node::Scalar(_) => {}
            }
        }
        None
    }
}

//! Replacement attribute values, applied when a document is serialized.
use std::collections::HashMap;

use roxmltree::{Node, NodeId};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// A set of unprefixed attribute values to write in place of the values found in the source.
///
/// Only attributes that already exist on an element are replaced; edits never add attributes.
pub struct Edits(HashMap<NodeId, HashMap<String, String>>);

impl Edits {
    /// Replaces the value of the element's unprefixed attribute, returning the previous edit if
    /// there was one.
    pub fn set_attribute(&mut self, element: Node, name: &str, value: String) -> Option<String> {
        self.0
            .entry(element.id())
            .or_default()
            .insert(name.to_string(), value)
    }

    /// Returns the replacement for the element's unprefixed attribute, if any.
    pub fn get_attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.0.get(&element)?.get(name).map(String::as_str)
    }

    /// Returns the number of replaced attributes
    pub fn len(&self) -> usize {
        self.0.values().map(HashMap::len).sum()
    }

    /// Whether there are no replaced attributes
    pub fn is_empty(&self) -> bool {
        self.0.values().all(HashMap::is_empty)
    }
}

#[test]
fn edits() {
    let document = roxmltree::Document::parse(r#"<svg><path d="a"/><path d="b"/></svg>"#).unwrap();
    let mut paths = document.root_element().children();
    let (first, second) = (paths.next().unwrap(), paths.next().unwrap());

    let mut edits = Edits::default();
    assert!(edits.is_empty());
    assert_eq!(edits.set_attribute(first, "d", "A".to_string()), None);
    assert_eq!(
        edits.set_attribute(first, "d", "AA".to_string()),
        Some("A".to_string())
    );

    assert_eq!(edits.get_attribute(first.id(), "d"), Some("AA"));
    assert_eq!(edits.get_attribute(first.id(), "fill"), None);
    assert_eq!(edits.get_attribute(second.id(), "d"), None);
    assert_eq!(edits.len(), 1);
}

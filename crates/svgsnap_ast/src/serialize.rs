//! Writing a parsed document back out, with [`Edits`] applied.
//!
//! The document is written as it was read, apart from the following
//!
//! - An XML declaration is always written first, followed by a new line
//! - Namespace declarations are written before the other attributes of an element
//! - Entities are written resolved, and special characters are escaped
use std::{collections::HashMap, io::Write};

use roxmltree::{Document, ExpandedName, Node, NodeType};

use crate::{
    edit::Edits,
    xmlwriter::{Error, Options, XmlWriter},
    XML_NS,
};

#[derive(Debug, Default)]
struct NamespaceMap<'a> {
    prefix_to_uri: HashMap<Option<&'a str>, &'a str>,
    uri_to_prefix: HashMap<&'a str, Option<&'a str>>,
}

impl<'a> NamespaceMap<'a> {
    fn new() -> Self {
        let mut map = Self::default();
        map.insert(Some("xml"), XML_NS);
        map
    }

    /// Binds the prefix to the uri, returning the uri it was previously bound to
    fn insert(&mut self, prefix: Option<&'a str>, uri: &'a str) -> Option<&'a str> {
        self.uri_to_prefix.insert(uri, prefix);
        self.prefix_to_uri.insert(prefix, uri)
    }

    fn restore(&mut self, prefix: Option<&'a str>, previous: Option<&'a str>) {
        if let Some(uri) = previous {
            self.insert(prefix, uri);
        } else if let Some(uri) = self.prefix_to_uri.remove(&prefix) {
            if self.uri_to_prefix.get(uri) == Some(&prefix) {
                self.uri_to_prefix.remove(uri);
            }
        }
    }

    fn get_by_prefix(&self, prefix: Option<&'a str>) -> Option<&'a str> {
        self.prefix_to_uri.get(&prefix).copied()
    }

    fn element_name(&self, name: &ExpandedName) -> String {
        match name.namespace().and_then(|uri| self.uri_to_prefix.get(uri)) {
            Some(Some(prefix)) => format!("{prefix}:{}", name.name()),
            _ => name.name().to_string(),
        }
    }

    /// Attributes can't use the default namespace, so a prefix is looked for even when the uri
    /// is also the default.
    fn attribute_name(&self, uri: Option<&str>, local: &str) -> String {
        let Some(uri) = uri else {
            return local.to_string();
        };
        let prefix = match self.uri_to_prefix.get(uri) {
            Some(Some(prefix)) => Some(*prefix),
            _ => self
                .prefix_to_uri
                .iter()
                .find(|(prefix, bound)| prefix.is_some() && **bound == uri)
                .and_then(|(prefix, _)| *prefix),
        };
        match prefix {
            Some(prefix) => format!("{prefix}:{local}"),
            None => local.to_string(),
        }
    }
}

struct Serializer<'a, 'e, W: Write> {
    xml: XmlWriter<W>,
    edits: &'e Edits,
    namespaces: NamespaceMap<'a>,
}

impl<'a, 'input: 'a, W: Write> Serializer<'a, '_, W> {
    fn node(&mut self, node: Node<'a, 'input>) -> Result<(), Error> {
        match node.node_type() {
            NodeType::Root => {
                for child in node.children() {
                    self.node(child)?;
                }
                Ok(())
            }
            NodeType::Element => self.element(node),
            NodeType::PI => match node.pi() {
                Some(pi) => self.xml.write_pi(pi.target, pi.value),
                None => Ok(()),
            },
            NodeType::Comment => self.xml.write_comment(node.text().unwrap_or_default()),
            NodeType::Text => self.xml.write_text(node.text().unwrap_or_default()),
        }
    }

    fn element(&mut self, node: Node<'a, 'input>) -> Result<(), Error> {
        let mut declared = vec![];
        for ns in node.namespaces() {
            let (prefix, uri) = (ns.name(), ns.uri());
            if self.namespaces.get_by_prefix(prefix) == Some(uri) {
                continue;
            }
            declared.push((prefix, uri, self.namespaces.insert(prefix, uri)));
        }

        self.xml
            .start_element(&self.namespaces.element_name(&node.tag_name()))?;
        for (prefix, uri, _) in &declared {
            match prefix {
                Some(prefix) => self.xml.write_attribute(&format!("xmlns:{prefix}"), uri)?,
                None => self.xml.write_attribute("xmlns", uri)?,
            }
        }
        for attr in node.attributes() {
            let name = self
                .namespaces
                .attribute_name(attr.namespace(), attr.name());
            let edit = attr
                .namespace()
                .is_none()
                .then(|| self.edits.get_attribute(node.id(), attr.name()))
                .flatten();
            self.xml.write_attribute(&name, edit.unwrap_or(attr.value()))?;
        }

        for child in node.children() {
            self.node(child)?;
        }
        self.xml.end_element()?;

        for (prefix, _, previous) in declared.into_iter().rev() {
            self.namespaces.restore(prefix, previous);
        }
        Ok(())
    }
}

/// Writes the document to the writer, replacing attribute values with any found in `edits`.
///
/// Top-level nodes around the root element are separated by new lines.
///
/// # Errors
///
/// When the writer fails
pub fn serialize_into<W: Write>(
    document: &Document,
    edits: &Edits,
    writer: W,
    options: Options,
) -> Result<W, Error> {
    let mut serializer = Serializer {
        xml: XmlWriter::new(writer, options),
        edits,
        namespaces: NamespaceMap::new(),
    };
    serializer.xml.write_declaration()?;
    for child in document.root().children() {
        serializer.xml.write_new_line()?;
        serializer.node(child)?;
    }
    log::debug!("serialize: wrote document with {} edits", edits.len());
    serializer.xml.end_document()
}

/// Writes the document to a string, replacing attribute values with any found in `edits`.
///
/// # Errors
///
/// When the writer fails
pub fn to_string(document: &Document, edits: &Edits) -> Result<String, Error> {
    let bytes = serialize_into(document, edits, Vec::new(), Options::default())?;
    Ok(String::from_utf8(bytes)?)
}

#[test]
fn serialize_unchanged() {
    let document = crate::parse::parse(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!-- Created with Inkscape -->
<?xml-stylesheet href="style.css"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" width="10">
  <g inkscape:label="Layer 1" xml:space="preserve">
    <path d="m 1 1 2 2" style="fill:#ff0"/>
    <text>a &amp; b</text>
  </g>
</svg>"#,
    )
    .unwrap();

    insta::assert_snapshot!(to_string(&document, &Edits::default()).unwrap(), @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <!-- Created with Inkscape -->
    <?xml-stylesheet href="style.css"?>
    <svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" width="10">
      <g inkscape:label="Layer 1" xml:space="preserve">
        <path d="m 1 1 2 2" style="fill:#ff0"/>
        <text>a &amp; b</text>
      </g>
    </svg>
    "#);
}

#[test]
fn serialize_edits() {
    let document = crate::parse::parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:x="urn:x"><path d="m 1 1" x:d="keep"/><x:shape d="l 1 1"/></svg>"#,
    )
    .unwrap();
    let root = document.root_element();
    let mut edits = Edits::default();
    for element in root.children() {
        edits.set_attribute(element, "d", "M 1 1".to_string());
    }

    insta::assert_snapshot!(to_string(&document, &edits).unwrap(), @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <svg xmlns="http://www.w3.org/2000/svg" xmlns:x="urn:x"><path d="M 1 1" x:d="keep"/><x:shape d="M 1 1"/></svg>
    "#);
}

#[test]
fn serialize_scoped_namespaces() {
    let document = crate::parse::parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg"><g xmlns:a="urn:a"><a:b/></g><g xmlns:a="urn:other"><a:b/></g><g xmlns="urn:c"><c/></g></svg>"#,
    )
    .unwrap();

    insta::assert_snapshot!(to_string(&document, &Edits::default()).unwrap(), @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <svg xmlns="http://www.w3.org/2000/svg"><g xmlns:a="urn:a"><a:b/></g><g xmlns:a="urn:other"><a:b/></g><g xmlns="urn:c"><c/></g></svg>
    "#);
}

//! Parsing methods using roxmltree
//!
//! # Quirks
//!
//! Roxmltree has some notable quirks
//!
//! - Entities are resolved and the DTD is discarded
//! - CDATA is merged into the surrounding text
//! - Whitespace outside of the root element is dropped
use std::path::Path;

use roxmltree::{Document, ParsingOptions};

/// The deepest an element may be nested before the document is rejected
pub const MAX_DEPTH: usize = 1024;

#[derive(Debug, thiserror::Error)]
/// The errors which may occur while parsing a document with roxmltree.
pub enum ParseError {
    /// The document parsed had a depth greater than [`MAX_DEPTH`] elements
    #[error("The depth of the document parsed was too deep")]
    NodesLimitReached,
    /// The document couldn't be parsed by roxmltree
    #[error(transparent)]
    ROXML(#[from] roxmltree::Error),
    /// The document couldn't be read due to an IO issue
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Reads the source of a document from a file, to be given to [`parse`].
///
/// # Errors
///
/// If the file can't be read or isn't valid UTF-8
pub fn load(path: &Path) -> Result<String, ParseError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Parses the source text of an XML document.
///
/// Documents with a DTD are accepted, though its declarations are only used for resolving
/// entities.
///
/// # Errors
///
/// If the source isn't well-formed, or the tree is too deep
pub fn parse(source: &str) -> Result<Document<'_>, ParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(source, options)?;

    let depth = document
        .descendants()
        .filter(|node| node.is_element() && !node.has_children())
        .map(|node| node.ancestors().count())
        .max()
        .unwrap_or_default();
    if depth > MAX_DEPTH {
        return Err(ParseError::NodesLimitReached);
    }
    log::debug!("parse: parsed document with a depth of {depth}");

    Ok(document)
}

#[test]
fn parse_documents() {
    let document = parse(
        r#"<?xml version="1.0"?>
<!DOCTYPE svg [<!ENTITY w "10">]>
<svg xmlns="http://www.w3.org/2000/svg" width="&w;"><path d="M 0 0"/></svg>"#,
    )
    .unwrap();
    let root = document.root_element();
    assert_eq!(root.tag_name().namespace(), Some(crate::SVG_NS));
    assert_eq!(root.attribute("width"), Some("10"));

    assert!(matches!(parse("<svg>"), Err(ParseError::ROXML(_))));
    assert!(matches!(parse(""), Err(ParseError::ROXML(_))));
}

#[test]
fn parse_too_deep() {
    let source = format!(
        "{}{}",
        "<g>".repeat(MAX_DEPTH + 1),
        "</g>".repeat(MAX_DEPTH + 1)
    );
    assert!(matches!(
        parse(&source),
        Err(ParseError::NodesLimitReached | ParseError::ROXML(_))
    ));
}

#[test]
fn load_missing() {
    assert!(matches!(
        load(Path::new("does/not/exist.svg")),
        Err(ParseError::IO(_))
    ));
}

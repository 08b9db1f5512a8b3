//! SVGSnap AST is a thin layer over [roxmltree] for reading SVG documents, walking their
//! elements, and writing them back with some attributes replaced.
//!
//! Documents are read-only once parsed, so changes are collected as [`edit::Edits`] and applied
//! while serializing.
//!
//! # Example
//!
//! ```
//! use svgsnap_ast::{edit::Edits, parse::parse, serialize::to_string};
//!
//! let document = parse(r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="m 1 1"/></svg>"#).unwrap();
//! let path = document.root_element().first_element_child().unwrap();
//!
//! let mut edits = Edits::default();
//! edits.set_attribute(path, "d", "M 1 1".to_string());
//! assert_eq!(
//!     to_string(&document, &edits).unwrap(),
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\"><path d=\"M 1 1\"/></svg>",
//! );
//! ```
pub mod edit;
pub mod element;
pub mod parse;
#[cfg(feature = "serialize")]
pub mod serialize;
#[cfg(feature = "visitor")]
pub mod visitor;
pub mod xmlwriter;

pub use roxmltree::{Document, Node};

/// The namespace uri of SVG elements
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
/// The namespace uri of attributes added by Inkscape
pub const INKSCAPE_NS: &str = "http://www.inkscape.org/namespaces/inkscape";
/// The namespace uri bound to the reserved `xml` prefix
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

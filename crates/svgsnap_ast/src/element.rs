//! Helpers for reading elements
use std::fmt::Display;

use roxmltree::Node;

/// Returns the attribute's value when it's present and not just whitespace.
pub fn non_empty_attribute<'a, 'input: 'a, 'n, 'm, N>(
    element: Node<'a, 'input>,
    name: N,
) -> Option<&'a str>
where
    N: Into<roxmltree::ExpandedName<'n, 'm>>,
{
    element
        .attribute(name)
        .filter(|value| !value.trim().is_empty())
}

/// Displays an element as a short opening tag for logs, e.g. `<path id="wire">`.
pub struct Describe<'a, 'input>(pub Node<'a, 'input>);

impl Display for Describe<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}", self.0.tag_name().name())?;
        if let Some(id) = self.0.attribute("id") {
            write!(f, " id=\"{id}\"")?;
        }
        f.write_str(">")
    }
}

#[test]
fn describe() {
    let document =
        roxmltree::Document::parse(r#"<svg><path id="wire" d=" "/><rect/></svg>"#).unwrap();
    let mut children = document.root_element().children();
    let (path, rect) = (children.next().unwrap(), children.next().unwrap());

    assert_eq!(Describe(path).to_string(), r#"<path id="wire">"#);
    assert_eq!(Describe(rect).to_string(), "<rect>");

    assert_eq!(non_empty_attribute(path, "id"), Some("wire"));
    assert_eq!(non_empty_attribute(path, "d"), None);
    assert_eq!(non_empty_attribute(rect, "d"), None);
}

//! A trait for walking the elements of a document in document order.
use roxmltree::{Document, Node};

/// A visitor receives each element of a document, parents before their children.
///
/// Every method has a default implementation that does nothing, so implementors only override
/// the hooks they need.
///
/// # Example
///
/// ```
/// use svgsnap_ast::{parse::parse, visitor::Visitor, Node};
///
/// #[derive(Default)]
/// struct CountPaths(usize);
///
/// impl<'a, 'input: 'a> Visitor<'a, 'input> for CountPaths {
///     type Error = std::convert::Infallible;
///
///     fn element(&mut self, element: Node<'a, 'input>) -> Result<(), Self::Error> {
///         if element.has_tag_name("path") {
///             self.0 += 1;
///         }
///         Ok(())
///     }
/// }
///
/// let document = parse("<svg><path/><g><path/></g></svg>").unwrap();
/// let mut count = CountPaths::default();
/// count.start(&document).unwrap();
/// assert_eq!(count.0, 2);
/// ```
pub trait Visitor<'a, 'input: 'a> {
    /// The error returned when a hook fails, stopping the walk
    type Error;

    /// Visits the document before any of its elements
    ///
    /// # Errors
    /// Whether the visitor fails
    fn document(&mut self, _document: &'a Document<'input>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Visits the document after all of its elements
    ///
    /// # Errors
    /// Whether the visitor fails
    fn exit_document(&mut self, _document: &'a Document<'input>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Visits an element before its children
    ///
    /// # Errors
    /// Whether the visitor fails
    fn element(&mut self, _element: Node<'a, 'input>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Visits an element after its children
    ///
    /// # Errors
    /// Whether the visitor fails
    fn exit_element(&mut self, _element: Node<'a, 'input>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Walks the document, calling each hook in document order
    ///
    /// # Errors
    /// Whether any of the hooks fail
    fn start(&mut self, document: &'a Document<'input>) -> Result<(), Self::Error> {
        self.document(document)?;
        self.visit_children(document.root())?;
        self.exit_document(document)
    }

    /// Visits each element below the node
    ///
    /// # Errors
    /// Whether any of the hooks fail
    fn visit_children(&mut self, parent: Node<'a, 'input>) -> Result<(), Self::Error> {
        for child in parent.children().filter(Node::is_element) {
            self.element(child)?;
            self.visit_children(child)?;
            self.exit_element(child)?;
        }
        Ok(())
    }
}

#[test]
fn visit_order() {
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Trace(Vec<String>);

    impl<'a, 'input: 'a> Visitor<'a, 'input> for Trace {
        type Error = String;

        fn document(&mut self, _document: &'a Document<'input>) -> Result<(), Self::Error> {
            self.0.push("document".to_string());
            Ok(())
        }

        fn element(&mut self, element: Node<'a, 'input>) -> Result<(), Self::Error> {
            let name = element.tag_name().name();
            if name == "stop" {
                return Err(name.to_string());
            }
            self.0.push(name.to_string());
            Ok(())
        }

        fn exit_element(&mut self, element: Node<'a, 'input>) -> Result<(), Self::Error> {
            self.0.push(format!("/{}", element.tag_name().name()));
            Ok(())
        }
    }

    let document =
        roxmltree::Document::parse("<svg><!-- a --><g>text<path/></g><rect/></svg>").unwrap();
    let mut trace = Trace::default();
    trace.start(&document).unwrap();
    assert_eq!(
        trace.0,
        vec!["document", "svg", "g", "path", "/path", "/g", "rect", "/rect", "/svg"]
    );

    let document = roxmltree::Document::parse("<svg><stop/><path/></svg>").unwrap();
    let mut trace = Trace::default();
    assert_eq!(trace.start(&document), Err("stop".to_string()));
    assert_eq!(trace.0, vec!["document", "svg"]);
}

//! SVGSnap Emit generates C source from an SVG document, with one `v4p_decodeSVGPath` call for
//! each path-like element.
//!
//! Path data is copied as written, without normalizing it.
//!
//! # Example
//!
//! ```
//! use svgsnap_emit::{generate_string, color::Palette, Options};
//!
//! let document = svgsnap_ast::parse::parse(
//!     r##"<svg xmlns="http://www.w3.org/2000/svg"><path id="dot" fill="red" d="M 0 0 Z"/></svg>"##,
//! ).unwrap();
//! let palette = Palette::default();
//! let c = generate_string(&document, &Options { source: "dot.svg", scale: 16.0, palette: &palette }).unwrap();
//! assert!(c.contains("v4p_decodeSVGPath(dot,\n        \"M 0 0 Z\",\n        16.0f);"));
//! ```
pub mod color;
pub mod literal;

use std::io::Write;

use svgsnap_ast::{element::non_empty_attribute, visitor::Visitor, Document, Node, INKSCAPE_NS};

use crate::color::Palette;

/// The local names of elements that calls are generated for
pub const ELEMENTS: [&str; 3] = ["path", "rect", "polygon"];

#[derive(Debug, thiserror::Error)]
/// An error while generating code
pub enum Error {
    /// The output couldn't be written
    #[error(transparent)]
    IO(#[from] std::io::Error),
    /// The output written to a string wasn't valid UTF-8
    #[error(transparent)]
    UTF8(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, Copy)]
/// Options for generating code
pub struct Options<'o> {
    /// The name of the document's source, written in the header comment
    pub source: &'o str,
    /// The scale passed to every call
    pub scale: f64,
    /// The colors used to resolve fills
    pub palette: &'o Palette,
}

struct Generate<'o, W: Write> {
    out: W,
    options: &'o Options<'o>,
    calls: usize,
}

impl<'a, 'input: 'a, W: Write> Visitor<'a, 'input> for Generate<'_, W> {
    type Error = Error;

    fn document(&mut self, _document: &'a Document<'input>) -> Result<(), Self::Error> {
        writeln!(self.out, "// Auto-generated from {}", self.options.source)?;
        writeln!(self.out, "// Scale: {:?}f", self.options.scale)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn element(&mut self, element: Node<'a, 'input>) -> Result<(), Self::Error> {
        if !ELEMENTS.contains(&element.tag_name().name()) {
            return Ok(());
        }
        let Some(d) = non_empty_attribute(element, "d") else {
            return Ok(());
        };

        let label = label(element);
        let fill = color::fill(element);
        let constant = self.options.palette.constant(&fill);
        let indent = literal::INDENT;

        writeln!(self.out, "// {label}  (fill: {fill} -> {constant})")?;
        writeln!(self.out, "v4p_decodeSVGPath({label},")?;
        writeln!(self.out, "{indent}{},", literal::wrap(d))?;
        writeln!(self.out, "{indent}{:?}f);", self.options.scale)?;
        writeln!(self.out)?;
        self.calls += 1;
        Ok(())
    }

    fn exit_document(&mut self, _document: &'a Document<'input>) -> Result<(), Self::Error> {
        log::debug!("generate: wrote {} calls", self.calls);
        Ok(())
    }
}

/// Returns the name used for an element's call, from its Inkscape label or else its id.
pub fn label<'a>(element: Node<'a, '_>) -> &'a str {
    non_empty_attribute(element, (INKSCAPE_NS, "label"))
        .or_else(|| element.attribute("id"))
        .unwrap_or("unnamed")
}

/// Writes the generated code for the document to the writer
///
/// # Errors
/// When the writer fails
pub fn generate<W: Write>(document: &Document, options: &Options, out: W) -> Result<W, Error> {
    let mut generate = Generate {
        out,
        options,
        calls: 0,
    };
    generate.start(document)?;
    generate.out.flush()?;
    Ok(generate.out)
}

/// Returns the generated code for the document
///
/// # Errors
/// When the writer fails
pub fn generate_string(document: &Document, options: &Options) -> Result<String, Error> {
    Ok(String::from_utf8(generate(document, options, Vec::new())?)?)
}

#[cfg(test)]
#[ctor::ctor]
fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn generate_calls() {
    let document = svgsnap_ast::parse::parse(
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape">
  <g inkscape:label="Layer 1">
    <path id="path1" inkscape:label="wire" style="fill:#00ff00;stroke:none" d="m 10,10 h 5"/>
    <rect id="body" fill="#ABCDEF" d="  M 0 0   H 4 V 4 Z "/>
    <polygon d="M 1 1 L 2 2"/>
    <circle id="skipped" d="M 0 0"/>
    <path id="empty" d="   "/>
    <path id="long" fill="red" d="M 10 10 L 20 20 L 30 30 L 40 40 L 50 50 L 60 60 L 70 70 L 80 80 L 90 90 L 100 100 Z"/>
  </g>
</svg>"##,
    )
    .unwrap();
    let palette = Palette::default();
    let options = Options {
        source: "circuit2.svg",
        scale: 16.0,
        palette: &palette,
    };

    insta::assert_snapshot!(generate_string(&document, &options).unwrap().trim_end(), @r#"
    // Auto-generated from circuit2.svg
    // Scale: 16.0f

    // wire  (fill: #00ff00 -> V4P_GREEN)
    v4p_decodeSVGPath(wire,
            "m 10,10 h 5",
            16.0f);

    // body  (fill: #ABCDEF -> /* unknown: #ABCDEF */)
    v4p_decodeSVGPath(body,
            "M 0 0 H 4 V 4 Z",
            16.0f);

    // unnamed  (fill:  -> /* no fill */)
    v4p_decodeSVGPath(unnamed,
            "M 1 1 L 2 2",
            16.0f);

    // long  (fill: red -> V4P_RED)
    v4p_decodeSVGPath(long,
            "M 10 10 L 20 20 L 30 30 L 40 40 L 50 50 L 60 60 L 70 70 L 80 80 L 90 "
            "90 L 100 100 Z",
            16.0f);
    "#);
}

#[test]
fn generate_empty() {
    let document = svgsnap_ast::parse::parse("<svg><g/></svg>").unwrap();
    let palette = Palette::new([("#000", "V4P_BLACK")]);
    let options = Options {
        source: "empty.svg",
        scale: 8.0,
        palette: &palette,
    };

    assert_eq!(
        generate_string(&document, &options).unwrap(),
        "// Auto-generated from empty.svg\n// Scale: 8.0f\n\n"
    );
}

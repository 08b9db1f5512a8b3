/*!

A streaming XML writer based on the [xmlwriter](https://docs.rs/xmlwriter/latest/xmlwriter/index.html)
crate, with some modifications.

- Errors instead of panicking
- Never indents, so the whitespace of the source document is written back as-is
- Allows writing processing instructions and new lines between top-level nodes

### Example

```rust
use svgsnap_ast::xmlwriter::*;

fn main() -> Result {
    let mut w = XmlWriter::new(Vec::<u8>::new(), Options::default());
    w.write_declaration()?;
    w.write_new_line()?;
    w.start_element("svg")?;
    w.write_attribute("xmlns", "http://www.w3.org/2000/svg")?;
    w.start_element("path")?;
    w.write_attribute("d", "M 0 0 L 1 1")?;
    w.end_element()?;

    assert_eq!(std::str::from_utf8(w.end_document()?.as_slice())
        .expect("xmlwriter always writes valid UTF-8"),
"<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<svg xmlns=\"http://www.w3.org/2000/svg\"><path d=\"M 0 0 L 1 1\"/></svg>"
    );
    Ok(())
}
```
*/

use std::fmt::{self, Display, Write as FmtWrite};
use std::io::{self, Write};
use std::result;

/// A result from serializing a document.
pub type Result = result::Result<(), Error>;

/// An error while serializing a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error while running an io operation.
    #[error(transparent)]
    IO(#[from] io::Error),
    /// An error after writing to string.
    #[error(transparent)]
    UTF8(#[from] std::string::FromUtf8Error),
    /// Attempted to write attribute before `start_element()` or after `close_element()`.
    #[error("Attempted to write attribute before `start_element()` or after `close_element()`.")]
    AttributeWrittenBeforeElement,
    /// Declaration was already written.
    #[error("Declaration was already written.")]
    DeclarationAlreadyWritten,
    /// Attempts to write text before `start_element()`.
    #[error("Attempts to write text before `start_element()`.")]
    TextBeforeElement,
}

/// An XML writing options.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// Use single quote marks instead of double quote.
    ///
    /// # Examples
    ///
    /// Before:
    ///
    /// ```text
    /// <rect fill="red"/>
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <rect fill='red'/>
    /// ```
    ///
    /// Default: disabled
    pub use_single_quote: bool,

    /// Write self-closing tags when element is empty.
    ///
    /// # Examples
    ///
    /// Before:
    ///
    /// ```text
    /// <tag/>
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <tag></tag>
    /// ```
    ///
    /// Default: enabled
    pub enable_self_closing: bool,
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Options {
            use_single_quote: false,
            enable_self_closing: true,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum State {
    Empty,
    Document,
    Attributes,
}

#[derive(Clone, Debug)]
struct DepthData {
    element_name: String,
    has_children: bool,
}

// Wraps the writer so that formatted strings are escaped according to the kind of node being
// written.
#[derive(Clone, Debug)]
struct FmtWriter<W: Write> {
    writer: W,
    error_kind: Option<io::ErrorKind>,
    // Reset once the text is written, so the escaping type is always set before writing.
    escape: Option<Escape>,
    use_single_quote: bool,
}

impl<W: Write> FmtWriter<W> {
    fn take_err(&mut self) -> Error {
        let error_kind = self.error_kind.take().unwrap_or(io::ErrorKind::Other);
        self.escape = None;
        Error::IO(io::Error::from(error_kind))
    }

    fn write_escaped(&mut self, s: &str, escape_quotes: bool) -> io::Result<()> {
        let mut part_start_pos = 0;
        for (byte_pos, byte) in s.bytes().enumerate() {
            let escaped_char: Option<&[u8]> = match byte {
                b'&' => Some(b"&amp;"),
                b'>' => Some(b"&gt;"),
                b'<' => Some(b"&lt;"),
                b'"' if escape_quotes && !self.use_single_quote => Some(b"&quot;"),
                b'\'' if escape_quotes && self.use_single_quote => Some(b"&apos;"),
                _ => None,
            };
            if let Some(escaped_char) = escaped_char {
                self.writer
                    .write_all(s[part_start_pos..byte_pos].as_bytes())?;
                self.writer.write_all(escaped_char)?;
                part_start_pos = byte_pos + 1;
            }
        }
        self.writer.write_all(s[part_start_pos..].as_bytes())
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Escape {
    Comment,
    AttributeValue,
    Text,
}

impl<W: Write> fmt::Write for FmtWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let result = match self.escape {
            Some(Escape::AttributeValue) => self.write_escaped(s, true),
            Some(Escape::Text) => self.write_escaped(s, false),
            // Double hyphens in comments aren't escaped, as libxml2 doesn't either.
            Some(Escape::Comment) => self.writer.write_all(s.as_bytes()),
            None => Err(io::Error::other("escaping must be set before formatting")),
        };
        result.map_err(|error| {
            self.error_kind = Some(error.kind());
            fmt::Error
        })
    }
}

/// An XML writer.
#[derive(Clone, Debug)]
pub struct XmlWriter<W: Write> {
    // Bytes known to need no escaping are written with `fmt_writer.writer.write_all()`.
    // Anything else sets `fmt_writer.escape` and goes through `fmt_writer.write_fmt()`.
    fmt_writer: FmtWriter<W>,
    state: State,
    depth_stack: Vec<DepthData>,
    opt: Options,
}

impl<W: Write> XmlWriter<W> {
    /// Creates a new `XmlWriter`, writing data in the writer.
    #[inline]
    pub fn new(writer: W, opt: Options) -> Self {
        XmlWriter {
            fmt_writer: FmtWriter {
                writer,
                error_kind: None,
                escape: None,
                use_single_quote: opt.use_single_quote,
            },
            state: State::Empty,
            depth_stack: Vec::new(),
            opt,
        }
    }

    /// Writes an XML declaration.
    ///
    /// `<?xml version="1.0" encoding="UTF-8"?>`
    ///
    /// # Errors
    ///
    /// - When anything else was written first.
    pub fn write_declaration(&mut self) -> Result {
        if self.state != State::Empty {
            return Err(Error::DeclarationAlreadyWritten);
        }

        let quote = char::from(self.get_quote_char());
        self.fmt_writer.writer.write_fmt(format_args!(
            "<?xml version={quote}1.0{quote} encoding={quote}UTF-8{quote}?>"
        ))?;
        self.state = State::Document;

        Ok(())
    }

    /// Writes a processing instruction, such as `<?xml-stylesheet href="style.css"?>`.
    ///
    /// # Errors
    ///
    /// When io fails.
    pub fn write_pi(&mut self, target: &str, value: Option<&str>) -> Result {
        if self.state == State::Attributes {
            self.write_open_element()?;
        }

        let writer = &mut self.fmt_writer.writer;
        match value {
            Some(value) => writer.write_fmt(format_args!("<?{target} {value}?>"))?,
            None => writer.write_fmt(format_args!("<?{target}?>"))?,
        }
        self.state = State::Document;

        Ok(())
    }

    /// Writes a comment string.
    ///
    /// # Errors
    ///
    /// When io fails.
    pub fn write_comment(&mut self, text: &str) -> Result {
        if self.state == State::Attributes {
            self.write_open_element()?;
        }

        self.fmt_writer.writer.write_all(b"<!--")?;
        self.fmt_writer.escape = Some(Escape::Comment);
        self.fmt_writer
            .write_str(text)
            .map_err(|_| self.fmt_writer.take_err())?;
        self.fmt_writer.writer.write_all(b"-->")?;

        self.state = State::Document;

        Ok(())
    }

    /// Starts writing a new element.
    ///
    /// This method writes only the `<tag-name` part.
    ///
    /// # Errors
    ///
    /// When io fails.
    pub fn start_element(&mut self, name: &str) -> Result {
        if self.state == State::Attributes {
            self.write_open_element()?;
        }

        self.fmt_writer.writer.write_all(b"<")?;
        self.fmt_writer.writer.write_all(name.as_bytes())?;

        self.depth_stack.push(DepthData {
            element_name: name.to_string(),
            has_children: false,
        });

        self.state = State::Attributes;

        Ok(())
    }

    /// Writes an attribute.
    ///
    /// Any occurrence of `&<>"` in the value will be escaped.
    ///
    /// # Errors
    ///
    /// - When called before `start_element()`.
    /// - When called after `close_element()`.
    pub fn write_attribute<V: Display + ?Sized>(&mut self, name: &str, value: &V) -> Result {
        self.write_attribute_fmt(name, format_args!("{value}"))
    }

    /// Writes a formatted attribute value.
    ///
    /// Any occurrence of `&<>"` in the value will be escaped.
    ///
    /// # Errors
    ///
    /// - When called before `start_element()`.
    /// - When called after `close_element()`.
    pub fn write_attribute_fmt(&mut self, name: &str, fmt: fmt::Arguments) -> Result {
        if self.state != State::Attributes {
            return Err(Error::AttributeWrittenBeforeElement);
        }

        self.fmt_writer.writer.write_all(b" ")?;
        self.fmt_writer.writer.write_all(name.as_bytes())?;
        self.fmt_writer.writer.write_all(b"=")?;
        self.write_quote()?;
        self.fmt_writer.escape = Some(Escape::AttributeValue);
        self.fmt_writer
            .write_fmt(fmt)
            .map_err(|_| self.fmt_writer.take_err())?;
        Ok(self.write_quote()?)
    }

    /// Writes a text node.
    ///
    /// `><&` will be escaped.
    ///
    /// # Errors
    ///
    /// - When called not after `start_element()`.
    pub fn write_text(&mut self, text: &str) -> Result {
        if self.state == State::Empty || self.depth_stack.is_empty() {
            return Err(Error::TextBeforeElement);
        }

        if self.state == State::Attributes {
            self.write_open_element()?;
        }

        self.fmt_writer.escape = Some(Escape::Text);
        self.fmt_writer
            .write_str(text)
            .map_err(|_| self.fmt_writer.take_err())?;

        self.state = State::Document;

        Ok(())
    }

    /// Closes an open element.
    ///
    /// # Errors
    ///
    /// When in a bad state or when io fails.
    pub fn end_element(&mut self) -> Result {
        if let Some(depth) = self.depth_stack.pop() {
            if depth.has_children || !self.opt.enable_self_closing {
                // Close the empty node here as there were no children to close it.
                if !depth.has_children {
                    self.fmt_writer.writer.write_all(b">")?;
                }

                self.fmt_writer
                    .writer
                    .write_fmt(format_args!("</{}>", depth.element_name))?;
            } else {
                self.fmt_writer.writer.write_all(b"/>")?;
            }
        }

        self.state = State::Document;

        Ok(())
    }

    /// Writes a line break between top-level nodes.
    ///
    /// # Errors
    ///
    /// When io fails.
    pub fn write_new_line(&mut self) -> Result {
        if self.state == State::Attributes {
            self.write_open_element()?;
        }
        self.fmt_writer.writer.write_all(b"\n")?;
        self.state = State::Document;
        Ok(())
    }

    /// Closes all open elements and returns back the writer.
    ///
    /// # Errors
    ///
    /// When in a bad state or when io fails.
    pub fn end_document(mut self) -> result::Result<W, Error> {
        while !self.depth_stack.is_empty() {
            self.end_element()?;
        }
        self.fmt_writer.writer.flush()?;

        Ok(self.fmt_writer.writer)
    }

    #[inline]
    fn get_quote_char(&self) -> u8 {
        if self.opt.use_single_quote {
            b'\''
        } else {
            b'"'
        }
    }

    // Writes quote unescaped, so only use when appropriate.
    #[inline]
    fn write_quote(&mut self) -> io::Result<()> {
        self.fmt_writer.writer.write_all(&[self.get_quote_char()])
    }

    // Writes the end of the current opening element, so `>`.
    fn write_open_element(&mut self) -> Result {
        if let Some(depth) = self.depth_stack.last_mut() {
            depth.has_children = true;
            self.fmt_writer.writer.write_all(b">")?;

            self.state = State::Document;
        }
        Ok(())
    }
}

#[test]
fn escaping() {
    let mut w = XmlWriter::new(Vec::<u8>::new(), Options::default());
    w.start_element("text").unwrap();
    w.write_attribute("title", "\"a\" & <b>").unwrap();
    w.write_text("1 < 2 & 'three'").unwrap();
    w.write_comment("<raw & unescaped>").unwrap();
    let output = String::from_utf8(w.end_document().unwrap()).unwrap();
    assert_eq!(
        output,
        r#"<text title="&quot;a&quot; &amp; &lt;b&gt;">1 &lt; 2 &amp; 'three'<!--<raw & unescaped>--></text>"#
    );
}

#[test]
fn options() {
    let mut w = XmlWriter::new(
        Vec::<u8>::new(),
        Options {
            use_single_quote: true,
            enable_self_closing: false,
        },
    );
    w.write_declaration().unwrap();
    w.start_element("g").unwrap();
    w.write_attribute("id", "it's").unwrap();
    w.end_element().unwrap();
    let output = String::from_utf8(w.end_document().unwrap()).unwrap();
    assert_eq!(
        output,
        "<?xml version='1.0' encoding='UTF-8'?><g id='it&apos;s'></g>"
    );
}

#[test]
fn bad_state() {
    let mut w = XmlWriter::new(Vec::<u8>::new(), Options::default());
    assert!(matches!(
        w.write_attribute("x", "1"),
        Err(Error::AttributeWrittenBeforeElement)
    ));
    assert!(matches!(w.write_text("x"), Err(Error::TextBeforeElement)));
    w.write_pi("xml-stylesheet", Some("href=\"a.css\"")).unwrap();
    assert!(matches!(
        w.write_declaration(),
        Err(Error::DeclarationAlreadyWritten)
    ));
}

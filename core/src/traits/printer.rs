use core::fmt::{self, Write as _};

use super::to_markup::ToMarkup;

/// Trait for building nested-tag text in memory.
///
/// `Printer` owns a `String` buffer and provides the tag-level building
/// blocks used by [`ToMarkup`] implementations. Values are written verbatim
/// through their `Display` impl: nothing is escaped.
///
/// # Required Methods
///
/// - `buf()`: Get current buffer contents
/// - `buf_mut()`: Get mutable buffer for appending
/// - `into_string()`: Consume and return final output
///
/// # Provided Methods
///
/// Basic output:
/// - `word(s)`, `char(c)`, `space()`: Append text
/// - `display(value)`: Append any `Display` value
///
/// Tags:
/// - `start_tag(name)`, `attr(name, value)`: Open a start tag and fill it
/// - `end_start_tag()`, `self_close()`: Finish a start tag
/// - `end_tag(name)`: Write a closing tag
///
/// Structured output:
/// - `write(value)`: Write a `ToMarkup` value
///
/// # Example
///
/// ```ignore
/// let mut p = MarkupPrinter::default();
/// p.start_tag("error");
/// p.attr("left", &1);
/// p.attr("right", &2);
/// p.self_close();
/// assert_eq!(p.into_string(), r#"<error left="1" right="2"/>"#);
/// ```
pub trait Printer: Sized {
    /// Get the current buffer contents.
    fn buf(&self) -> &str;
    /// Get a mutable reference to the buffer for appending.
    fn buf_mut(&mut self) -> &mut String;
    /// Consume the printer and return the final string.
    fn into_string(self) -> String;

    /// Append a string to the buffer.
    fn word(&mut self, s: &str) {
        self.buf_mut().push_str(s);
    }

    /// Append a single character to the buffer.
    fn char(&mut self, c: char) {
        self.buf_mut().push(c);
    }

    /// Append a single space.
    fn space(&mut self) {
        self.char(' ');
    }

    /// Append the `Display` rendering of `value`.
    ///
    /// If `value` fails to format, what it wrote so far is kept.
    fn display<T: fmt::Display + ?Sized>(&mut self, value: &T) {
        display_into(self.buf_mut(), value);
    }

    /// Begin a start tag: `<name`.
    fn start_tag(&mut self, name: &str) {
        self.char('<');
        self.word(name);
    }

    /// Append an attribute to an open start tag: ` name="value"`.
    fn attr<T: fmt::Display + ?Sized>(&mut self, name: &str, value: &T) {
        self.space();
        self.word(name);
        self.word("=\"");
        self.display(value);
        self.char('"');
    }

    /// Finish a start tag that will have content: `>`.
    fn end_start_tag(&mut self) {
        self.char('>');
    }

    /// Finish a start tag as an empty element: `/>`.
    fn self_close(&mut self) {
        self.word("/>");
    }

    /// Write a closing tag: `</name>`.
    fn end_tag(&mut self, name: &str) {
        self.word("</");
        self.word(name);
        self.char('>');
    }

    /// Write a value implementing `ToMarkup`.
    fn write<T: ToMarkup<Printer = Self> + ?Sized>(&mut self, value: &T) {
        value.write(self);
    }
}

/// Append the `Display` rendering of `value` to `buf`.
///
/// A `Display` impl that returns `Err` keeps whatever it wrote before
/// failing; the error is logged and otherwise ignored. Both the string
/// renderer and the streaming writer format values through here.
pub(crate) fn display_into<T: fmt::Display + ?Sized>(buf: &mut String, value: &T) {
    if write!(buf, "{value}").is_err() {
        log::warn!("formatting a value failed; keeping its partial output");
    }
}

/// The default [`Printer`]: a plain growing `String`.
#[derive(Debug, Clone, Default)]
pub struct MarkupPrinter {
    buf: String,
}

impl Printer for MarkupPrinter {
    #[inline]
    fn buf(&self) -> &str {
        &self.buf
    }

    #[inline]
    fn buf_mut(&mut self) -> &mut String {
        &mut self.buf
    }

    #[inline]
    fn into_string(self) -> String {
        self.buf
    }
}

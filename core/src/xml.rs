//! A text transport for [`MarkupSink`].
//!
//! `XmlSink` writes well-nested XML to any [`io::Write`]. It is the
//! transport [`dump_to_string`](crate::dump_to_string) uses, and the one
//! most tools want when writing a tree to a file:
//!
//! ```ignore
//! let out = std::io::BufWriter::new(std::fs::File::create("tree.xml")?);
//! treedump::dump(XmlSink::new(out), &tree)?;
//! ```
//!
//! Unlike the string renderer, the sink escapes attribute values and
//! character data, so its output is well-formed for any payload.

use std::io;

use crate::traits::MarkupSink;

/// Streams XML text to a writer.
#[derive(Debug)]
pub struct XmlSink<W: io::Write> {
    writer: W,
    open: Vec<String>,
    start_tag_open: bool,
    closed: bool,
}

impl<W: io::Write> XmlSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            open: Vec::new(),
            start_tag_open: false,
            closed: false,
        }
    }

    /// Consumes the sink and returns the writer. Nothing is flushed.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Number of elements currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> io::Result<()> {
        if self.closed {
            Err(io::Error::other("xml sink is closed"))
        } else {
            Ok(())
        }
    }

    fn raw(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())
    }

    fn finish_start_tag(&mut self) -> io::Result<()> {
        if self.start_tag_open {
            self.start_tag_open = false;
            self.raw(">")?;
        }
        Ok(())
    }
}

impl<W: io::Write> MarkupSink for XmlSink<W> {
    fn start_document(&mut self) -> io::Result<()> {
        self.ensure_open()?;
        self.raw("<?xml version=\"1.0\"?>")
    }

    fn processing_instruction(&mut self, target: &str, data: &str) -> io::Result<()> {
        self.ensure_open()?;
        self.finish_start_tag()?;
        self.raw("<?")?;
        self.raw(target)?;
        if !data.is_empty() {
            self.raw(" ")?;
            self.raw(data)?;
        }
        self.raw("?>")
    }

    fn start_element(&mut self, name: &str) -> io::Result<()> {
        self.ensure_open()?;
        self.finish_start_tag()?;
        self.raw("<")?;
        self.raw(name)?;
        self.open.push(name.to_owned());
        self.start_tag_open = true;
        Ok(())
    }

    fn attribute(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.ensure_open()?;
        if !self.start_tag_open {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("attribute `{name}` written outside a start tag"),
            ));
        }
        self.raw(" ")?;
        self.raw(name)?;
        self.raw("=\"")?;
        self.raw(&escape_xml(value))?;
        self.raw("\"")
    }

    fn characters(&mut self, text: &str) -> io::Result<()> {
        self.ensure_open()?;
        self.finish_start_tag()?;
        self.raw(&escape_xml(text))
    }

    fn end_element(&mut self) -> io::Result<()> {
        self.ensure_open()?;
        let Some(name) = self.open.pop() else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "end_element without a matching start_element",
            ));
        };
        if self.start_tag_open {
            self.start_tag_open = false;
            self.raw("/>")
        } else {
            self.raw("</")?;
            self.raw(&name)?;
            self.raw(">")
        }
    }

    fn end_document(&mut self) -> io::Result<()> {
        self.ensure_open()?;
        while !self.open.is_empty() {
            self.end_element()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ensure_open()?;
        self.writer.flush()
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.writer.flush()
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

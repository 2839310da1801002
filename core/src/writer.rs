//! Streaming output to a [`MarkupSink`].
//!
//! [`write`] emits one subtree into a document the caller already opened.
//! [`dump`] owns the whole document: prologue, stylesheet instruction, the
//! root subtree, epilogue, flush, and finally `close`. The writer keeps no
//! buffer of its own, so whatever reached the sink before a failure stays
//! there.
//!
//! # Event Order
//!
//! ```text
//! start_document
//! processing_instruction("xml-stylesheet", "href=\"tree.xsl\" type=\"text/xsl\"")
//! start_element("nonterminal")
//!     attribute("id", ..) attribute("variant", ..) [attribute("left", ..) attribute("right", ..)]
//!     ... children ...
//! end_element
//! end_document
//! flush
//! close
//! ```

use core::fmt;
use std::io;

use crate::config::{DepthGuard, DumpConfig};
use crate::traits::{MarkupSink, display_into};
use crate::{Error, Node, Result, XmlSink};

/// Write `node` and its subtree into an already-open document.
pub fn write<S, L, V>(sink: &mut S, node: &Node<L, V>) -> Result<()>
where
    S: MarkupSink + ?Sized,
    L: fmt::Display,
    V: fmt::Display,
{
    write_node(sink, node, usize::MAX, &mut DepthGuard::new(), &mut String::new())
}

/// Write a complete document for `root` and close the sink.
///
/// Uses [`DumpConfig::DEFAULT`]. Pass `&mut sink` to keep the sink
/// afterwards.
pub fn dump<S, L, V>(sink: S, root: &Node<L, V>) -> Result<()>
where
    S: MarkupSink,
    L: fmt::Display,
    V: fmt::Display,
{
    dump_with(sink, root, &DumpConfig::DEFAULT)
}

/// [`dump`] with an explicit configuration.
///
/// `close` is called on every path. When both the document and `close`
/// fail, the document error is returned and the close error is logged.
pub fn dump_with<S, L, V>(mut sink: S, root: &Node<L, V>, config: &DumpConfig) -> Result<()>
where
    S: MarkupSink,
    L: fmt::Display,
    V: fmt::Display,
{
    log::debug!("dumping parse tree rooted at <{}>", root.element_name());
    let written = write_document(&mut sink, root, config);
    let closed = sink.close();

    match (written, closed) {
        (Ok(()), Ok(())) => {
            log::debug!("parse tree dump finished");
            Ok(())
        }
        (Ok(()), Err(err)) => Err(err.into()),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            log::warn!("closing sink after failed dump also failed: {close_err}");
            Err(err)
        }
    }
}

/// Dump `root` into an in-memory [`XmlSink`] and return the document.
pub fn dump_to_string<L, V>(root: &Node<L, V>) -> Result<String>
where
    L: fmt::Display,
    V: fmt::Display,
{
    let mut sink = XmlSink::new(Vec::new());
    dump(&mut sink, root)?;
    String::from_utf8(sink.into_inner())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err).into())
}

fn write_document<S, L, V>(sink: &mut S, root: &Node<L, V>, config: &DumpConfig) -> Result<()>
where
    S: MarkupSink,
    L: fmt::Display,
    V: fmt::Display,
{
    sink.start_document()?;
    sink.processing_instruction(config.stylesheet_target, &config.stylesheet_data())?;
    write_node(
        sink,
        root,
        config.max_depth,
        &mut DepthGuard::new(),
        &mut String::new(),
    )?;
    sink.end_document()?;
    sink.flush()?;
    Ok(())
}

fn write_node<S, L, V>(
    sink: &mut S,
    node: &Node<L, V>,
    limit: usize,
    depth: &mut DepthGuard,
    scratch: &mut String,
) -> Result<(), Error>
where
    S: MarkupSink + ?Sized,
    L: fmt::Display,
    V: fmt::Display,
{
    depth.enter(limit)?;
    log::trace!(
        "writing <{}> id={:?} at depth {}",
        node.element_name(),
        node.tag(),
        depth.depth()
    );

    match node {
        Node::Terminal(t) => {
            sink.start_element("terminal")?;
            sink.attribute("id", t.tag())?;
            sink.attribute("left", text(scratch, t.left()))?;
            sink.attribute("right", text(scratch, t.right()))?;
            if let Some(value) = t.value() {
                sink.characters(text(scratch, value))?;
            }
            sink.end_element()?;
        }
        Node::Error(e) => {
            sink.start_element("error")?;
            sink.attribute("left", text(scratch, e.left()))?;
            sink.attribute("right", text(scratch, e.right()))?;
            sink.end_element()?;
        }
        Node::NonTerminal(n) => {
            sink.start_element("nonterminal")?;
            sink.attribute("id", n.tag())?;
            sink.attribute("variant", text(scratch, &n.variant()))?;
            // span attributes must precede the first child element
            if !n.is_empty() {
                if let Some(left) = n.left() {
                    sink.attribute("left", text(scratch, left))?;
                }
                if let Some(right) = n.right() {
                    sink.attribute("right", text(scratch, right))?;
                }
            }
            for child in n.children() {
                write_node(sink, child, limit, depth, scratch)?;
            }
            sink.end_element()?;
        }
    }

    depth.exit();
    Ok(())
}

/// Format `value` into the reused `scratch` buffer.
fn text<'s, T: fmt::Display + ?Sized>(scratch: &'s mut String, value: &T) -> &'s str {
    scratch.clear();
    display_into(scratch, value);
    scratch
}

use std::io;

/// A streaming destination for hierarchical markup.
///
/// The streaming writer drives a `MarkupSink` the way a pull parser is
/// driven in reverse: one call per document event, in order, with no
/// buffering on the writer's side. The sink owns any buffering and the
/// concrete output format.
///
/// # Call Discipline
///
/// Callers guarantee that:
///
/// - `attribute` only follows `start_element` or another `attribute`,
///   never character data or a nested element;
/// - `start_element`/`end_element` calls are correctly nested;
/// - `close` is the last call.
///
/// Sinks may reject calls that break this discipline with
/// [`io::ErrorKind::InvalidInput`].
///
/// # Blanket Implementations
///
/// - `&mut S`: lets a caller keep ownership of a sink across a
///   [`dump`](crate::dump), which otherwise consumes it.
pub trait MarkupSink {
    /// Write the document prologue.
    fn start_document(&mut self) -> io::Result<()>;

    /// Write a processing instruction, e.g. `<?target data?>`.
    fn processing_instruction(&mut self, target: &str, data: &str) -> io::Result<()>;

    /// Open an element.
    fn start_element(&mut self, name: &str) -> io::Result<()>;

    /// Add an attribute to the element opened last.
    fn attribute(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// Write text content inside the current element.
    fn characters(&mut self, text: &str) -> io::Result<()>;

    /// Close the element opened last.
    fn end_element(&mut self) -> io::Result<()>;

    /// Write the document epilogue.
    fn end_document(&mut self) -> io::Result<()>;

    /// Push buffered output to the underlying transport.
    fn flush(&mut self) -> io::Result<()>;

    /// Release the transport. No further calls are made after this.
    fn close(&mut self) -> io::Result<()>;
}

impl<S: MarkupSink + ?Sized> MarkupSink for &mut S {
    #[inline]
    fn start_document(&mut self) -> io::Result<()> {
        (**self).start_document()
    }

    #[inline]
    fn processing_instruction(&mut self, target: &str, data: &str) -> io::Result<()> {
        (**self).processing_instruction(target, data)
    }

    #[inline]
    fn start_element(&mut self, name: &str) -> io::Result<()> {
        (**self).start_element(name)
    }

    #[inline]
    fn attribute(&mut self, name: &str, value: &str) -> io::Result<()> {
        (**self).attribute(name, value)
    }

    #[inline]
    fn characters(&mut self, text: &str) -> io::Result<()> {
        (**self).characters(text)
    }

    #[inline]
    fn end_element(&mut self) -> io::Result<()> {
        (**self).end_element()
    }

    #[inline]
    fn end_document(&mut self) -> io::Result<()> {
        (**self).end_document()
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    #[inline]
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

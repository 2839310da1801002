use std::io;

use crate::traits::MarkupSink;

/// One call made on a [`MarkupSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    StartDocument,
    ProcessingInstruction { target: String, data: String },
    StartElement(String),
    Attribute { name: String, value: String },
    Characters(String),
    EndElement,
    EndDocument,
    Flush,
    Close,
}

/// A sink that keeps every call as an [`Event`].
///
/// Useful for tools that post-process the document structure themselves,
/// and for checking exactly what the streaming writer emitted.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Vec<Event>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn is_closed(&self) -> bool {
        self.events.last() == Some(&Event::Close)
    }

    fn push(&mut self, event: Event) -> io::Result<()> {
        self.events.push(event);
        Ok(())
    }
}

impl MarkupSink for EventRecorder {
    fn start_document(&mut self) -> io::Result<()> {
        self.push(Event::StartDocument)
    }

    fn processing_instruction(&mut self, target: &str, data: &str) -> io::Result<()> {
        self.push(Event::ProcessingInstruction {
            target: target.to_owned(),
            data: data.to_owned(),
        })
    }

    fn start_element(&mut self, name: &str) -> io::Result<()> {
        self.push(Event::StartElement(name.to_owned()))
    }

    fn attribute(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.push(Event::Attribute {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }

    fn characters(&mut self, text: &str) -> io::Result<()> {
        self.push(Event::Characters(text.to_owned()))
    }

    fn end_element(&mut self) -> io::Result<()> {
        self.push(Event::EndElement)
    }

    fn end_document(&mut self) -> io::Result<()> {
        self.push(Event::EndDocument)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.push(Event::Flush)
    }

    fn close(&mut self) -> io::Result<()> {
        self.push(Event::Close)
    }
}

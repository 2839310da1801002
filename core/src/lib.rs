pub mod config;
mod error;
mod location;
mod node;
pub mod recorder;
mod render;
pub mod span;
pub mod traits;
mod writer;
mod xml;

pub use config::{DepthGuard, DumpConfig};
pub use error::{Error, Result};
pub use location::SourceLocation;
pub use node::{ErrorNode, Node, NonTerminal, Terminal};
pub use recorder::{Event, EventRecorder};
pub use render::render;
pub use traits::{MarkupPrinter, MarkupSink, Printer, ToMarkup};
pub use writer::{dump, dump_to_string, dump_with, write};
pub use xml::XmlSink;

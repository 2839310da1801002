//! Core traits for treedump's two output paths.
//!
//! # Trait Hierarchy
//!
//! ```text
//! ToMarkup (eager rendering)
//!     └── Printer (in-memory tag buffer)
//!
//! MarkupSink (streaming transport)
//!     ├── XmlSink<W: io::Write>
//!     └── EventRecorder
//! ```
//!
//! # Usage Patterns
//!
//! ## Rendering to a string
//!
//! ```ignore
//! use treedump::{Node, ToMarkup};
//!
//! let text = tree.to_markup();
//! ```
//!
//! ## Streaming to a transport
//!
//! ```ignore
//! use treedump::{MarkupSink, XmlSink, dump};
//!
//! let file = std::fs::File::create("tree.xml")?;
//! dump(XmlSink::new(std::io::BufWriter::new(file)), &tree)?;
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization for node and location types
//! - `fuzz`: Enables `arbitrary::Arbitrary` for node and location types

mod printer;
mod sink;
mod to_markup;

pub(crate) use printer::display_into;
pub use printer::{MarkupPrinter, Printer};
pub use sink::MarkupSink;
pub use to_markup::ToMarkup;

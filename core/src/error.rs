//! Core error types for treedump.
//!
//! Rendering to a `String` cannot fail. Only the streaming path reports
//! errors, and every one of them means the document is incomplete: whatever
//! reached the sink before the failure stays there, and the caller should
//! treat the whole serialization as failed.
//!
//! Tooling that wraps treedump in its own error type can implement
//! `From<treedump::Error>`:
//!
//! ```ignore
//! #[derive(thiserror::Error, Debug)]
//! pub enum ToolError {
//!     #[error("could not write parse tree: {0}")]
//!     Dump(#[from] treedump::Error),
//!     // ... other variants
//! }
//! ```

use std::io;

use thiserror::Error;

/// Result alias used by the streaming writer.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Core treedump error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The sink (transport) failed.
    ///
    /// Transports that are not backed by `std::io` map their own failures
    /// into an [`io::Error`], usually via [`io::Error::other`].
    #[error("markup sink failed: {0}")]
    Sink(#[from] io::Error),

    /// Nesting exceeded [`DumpConfig::max_depth`](crate::DumpConfig::max_depth).
    ///
    /// The default configuration has no limit, so this is only returned
    /// when a caller opted into one.
    #[error("nesting depth exceeded: depth {depth} > limit {limit}")]
    DepthLimitExceeded {
        /// Depth reached when the limit was exceeded.
        depth: usize,
        /// Maximum allowed depth.
        limit: usize,
    },
}

impl Error {
    /// Returns the underlying transport error, if this is one.
    pub fn as_io(&self) -> Option<&io::Error> {
        match self {
            Error::Sink(err) => Some(err),
            Error::DepthLimitExceeded { .. } => None,
        }
    }
}

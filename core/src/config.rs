//! Document framing and resource limits for the streaming writer.
//!
//! [`DumpConfig::DEFAULT`] produces the canonical document: an
//! `xml-stylesheet` processing instruction pointing at `tree.xsl` with MIME
//! type `text/xsl`, and no nesting limit. Tools that ship their own
//! stylesheet, or that stream untrusted trees, can adjust both.
//!
//! # Example
//!
//! ```ignore
//! use treedump_core::config::DumpConfig;
//!
//! // Canonical framing, no depth limit
//! let config = DumpConfig::default();
//!
//! // Custom stylesheet and a depth limit
//! let config = DumpConfig::new()
//!     .with_stylesheet_href("viewer/parse-tree.xsl")
//!     .with_max_depth(512);
//! ```

use crate::Error;

/// Configuration for [`dump_with`](crate::dump_with).
///
/// # Default Values
///
/// | Setting | Default |
/// |---------|---------|
/// | `stylesheet_target` | `"xml-stylesheet"` |
/// | `stylesheet_href` | `"tree.xsl"` |
/// | `stylesheet_type` | `"text/xsl"` |
/// | `max_depth` | `usize::MAX` (no limit) |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpConfig {
    /// Target of the stylesheet processing instruction.
    pub stylesheet_target: &'static str,

    /// Stylesheet reference written into the processing instruction data.
    pub stylesheet_href: &'static str,

    /// MIME type of the stylesheet.
    pub stylesheet_type: &'static str,

    /// Maximum element nesting depth.
    ///
    /// The root element is depth 1. Exceeding the limit aborts the write
    /// with [`Error::DepthLimitExceeded`].
    pub max_depth: usize,
}

impl Default for DumpConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl DumpConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        stylesheet_target: "xml-stylesheet",
        stylesheet_href: "tree.xsl",
        stylesheet_type: "text/xsl",
        max_depth: usize::MAX,
    };

    /// Creates a new configuration with default values.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the stylesheet reference.
    #[inline]
    pub const fn with_stylesheet_href(mut self, href: &'static str) -> Self {
        self.stylesheet_href = href;
        self
    }

    /// Sets the stylesheet MIME type.
    #[inline]
    pub const fn with_stylesheet_type(mut self, mime: &'static str) -> Self {
        self.stylesheet_type = mime;
        self
    }

    /// Sets the maximum nesting depth. Use `usize::MAX` to disable the limit.
    #[inline]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Data of the stylesheet processing instruction,
    /// e.g. `href="tree.xsl" type="text/xsl"`.
    pub fn stylesheet_data(&self) -> String {
        format!(
            "href=\"{}\" type=\"{}\"",
            self.stylesheet_href, self.stylesheet_type
        )
    }
}

/// Tracks element nesting depth while streaming.
///
/// ```ignore
/// let mut depth = DepthGuard::new();
/// depth.enter(config.max_depth)?;
/// // ... write children ...
/// depth.exit();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthGuard {
    depth: usize,
}

impl DepthGuard {
    /// Creates a new guard with depth 0.
    #[inline]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    /// Current nesting depth.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Enter a nested element, incrementing depth.
    ///
    /// Returns `Err(Error::DepthLimitExceeded)` if the new depth would
    /// exceed `limit`.
    #[inline]
    pub fn enter(&mut self, limit: usize) -> Result<(), Error> {
        self.depth = self.depth.saturating_add(1);
        if self.depth > limit {
            Err(Error::DepthLimitExceeded {
                depth: self.depth,
                limit,
            })
        } else {
            Ok(())
        }
    }

    /// Leave a nested element. Extra calls saturate at 0.
    #[inline]
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_config_defaults() {
        let config = DumpConfig::default();
        assert_eq!(config.stylesheet_target, "xml-stylesheet");
        assert_eq!(config.stylesheet_data(), r#"href="tree.xsl" type="text/xsl""#);
        assert_eq!(config.max_depth, usize::MAX);
    }

    #[test]
    fn test_dump_config_builder() {
        let config = DumpConfig::new()
            .with_stylesheet_href("viewer.xsl")
            .with_stylesheet_type("application/xslt+xml")
            .with_max_depth(16);

        assert_eq!(
            config.stylesheet_data(),
            r#"href="viewer.xsl" type="application/xslt+xml""#
        );
        assert_eq!(config.max_depth, 16);
    }

    #[test]
    fn test_depth_guard_basic() {
        let mut guard = DepthGuard::new();
        guard.enter(8).unwrap();
        guard.enter(8).unwrap();
        assert_eq!(guard.depth(), 2);

        guard.exit();
        assert_eq!(guard.depth(), 1);
    }

    #[test]
    fn test_depth_guard_limit_exceeded() {
        let mut guard = DepthGuard::new();
        for _ in 0..3 {
            guard.enter(3).unwrap();
        }

        let result = guard.enter(3);
        assert!(matches!(
            result,
            Err(Error::DepthLimitExceeded { depth: 4, limit: 3 })
        ));
    }

    #[test]
    fn test_depth_guard_exit_saturates() {
        let mut guard = DepthGuard::new();
        guard.exit();
        assert_eq!(guard.depth(), 0);
    }
}

use core::fmt;

/// A position in a source unit.
///
/// Nodes accept any `Display` type as their location; `SourceLocation` is
/// the one parser runtimes reach for when they track line, column and byte
/// offset together. It renders as `unit:line/column(offset)`, or
/// `line/column(offset)` when no unit name is known.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    unit: Option<String>,
    line: usize,
    column: usize,
    offset: usize,
}

impl SourceLocation {
    #[inline]
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            unit: None,
            line,
            column,
            offset,
        }
    }

    /// Attach the name of the source unit (usually a file name).
    #[inline]
    pub fn in_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[inline]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Byte offset from the start of the unit.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(unit) = &self.unit {
            write!(f, "{unit}:")?;
        }
        write!(f, "{}/{}({})", self.line, self.column, self.offset)
    }
}

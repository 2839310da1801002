use super::printer::Printer;

/// Trait for rendering tree values as nested-tag text.
///
/// `ToMarkup` is the eager counterpart of [`write`](crate::write): instead
/// of streaming to a sink, it appends to an in-memory [`Printer`].
///
/// # Associated Types
///
/// - [`Printer`]: The printer implementation that receives the output
///
/// # Required Methods
///
/// - `write(&self, printer)`: Write this value to the printer
///
/// # Provided Methods
///
/// - `to_markup()`: Convenience method for getting a String
///
/// # Containers
///
/// A slice or `Vec` of nodes renders as a forest: each tree in order, with
/// no enclosing element. Non-terminals render their children this way.
/// `None` renders nothing; `Box<T>` and `&T` render the value they hold.
pub trait ToMarkup {
    /// The printer type for formatting output.
    type Printer: Printer;

    /// Write this value to the printer.
    fn write(&self, printer: &mut Self::Printer);

    /// Render to a new string using a default printer.
    fn to_markup(&self) -> String
    where
        Self::Printer: Default,
    {
        let mut printer = Self::Printer::default();
        self.write(&mut printer);
        printer.into_string()
    }
}

impl<T: ToMarkup> ToMarkup for Option<T> {
    type Printer = T::Printer;

    fn write(&self, p: &mut Self::Printer) {
        if let Some(node) = self {
            node.write(p);
        }
    }
}

impl<T: ToMarkup + ?Sized> ToMarkup for Box<T> {
    type Printer = T::Printer;

    fn write(&self, p: &mut Self::Printer) {
        (**self).write(p);
    }
}

impl<T: ToMarkup> ToMarkup for [T] {
    type Printer = T::Printer;

    fn write(&self, p: &mut Self::Printer) {
        self.iter().for_each(|tree| tree.write(p));
    }
}

impl<T: ToMarkup> ToMarkup for Vec<T> {
    type Printer = T::Printer;

    fn write(&self, p: &mut Self::Printer) {
        self.as_slice().write(p);
    }
}

impl<T: ToMarkup + ?Sized> ToMarkup for &T {
    type Printer = T::Printer;

    fn write(&self, p: &mut Self::Printer) {
        (**self).write(p);
    }
}

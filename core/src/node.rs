//! The parse-tree node variants.
//!
//! A tree is built once by the parser's tree builder and never mutated
//! afterwards: every type here exposes constructors and read accessors only.
//! Each child is owned by exactly one parent.
//!
//! # Type Parameters
//!
//! - `L`: the location type reported for node endpoints. Anything that
//!   implements `Display` can be rendered; see
//!   [`SourceLocation`](crate::SourceLocation) for a ready-made one.
//! - `V`: the semantic value a terminal may carry (defaults to `String`).

use crate::span;

/// One node of a parse tree.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node<L, V = String> {
    /// A token matched by the scanner.
    Terminal(Terminal<L, V>),
    /// A placeholder where the parser recovered from a syntax error.
    Error(ErrorNode<L>),
    /// A reduced production.
    NonTerminal(NonTerminal<L, V>),
}

impl<L, V> Node<L, V> {
    /// Element name used by both renderers.
    pub const fn element_name(&self) -> &'static str {
        match self {
            Node::Terminal(_) => "terminal",
            Node::Error(_) => "error",
            Node::NonTerminal(_) => "nonterminal",
        }
    }

    /// Grammar symbol name. Error nodes have none.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Terminal(t) => Some(t.tag()),
            Node::Error(_) => None,
            Node::NonTerminal(n) => Some(n.tag()),
        }
    }

    /// Leftmost location covered by this node, if known.
    pub fn left(&self) -> Option<&L> {
        match self {
            Node::Terminal(t) => Some(t.left()),
            Node::Error(e) => Some(e.left()),
            Node::NonTerminal(n) => n.left(),
        }
    }

    /// Rightmost location covered by this node, if known.
    ///
    /// For non-terminals this follows [`NonTerminal::right`], which reports
    /// a child's *left* endpoint.
    pub fn right(&self) -> Option<&L> {
        match self {
            Node::Terminal(t) => Some(t.right()),
            Node::Error(e) => Some(e.right()),
            Node::NonTerminal(n) => n.right(),
        }
    }

    /// Both endpoints, when both are known.
    pub fn span(&self) -> Option<(&L, &L)> {
        self.left().zip(self.right())
    }

    /// Children of a non-terminal; empty for leaves.
    pub fn children(&self) -> &[Node<L, V>] {
        match self {
            Node::NonTerminal(n) => n.children(),
            Node::Terminal(_) | Node::Error(_) => &[],
        }
    }
}

impl<L, V> From<Terminal<L, V>> for Node<L, V> {
    #[inline]
    fn from(t: Terminal<L, V>) -> Self {
        Node::Terminal(t)
    }
}

impl<L, V> From<ErrorNode<L>> for Node<L, V> {
    #[inline]
    fn from(e: ErrorNode<L>) -> Self {
        Node::Error(e)
    }
}

impl<L, V> From<NonTerminal<L, V>> for Node<L, V> {
    #[inline]
    fn from(n: NonTerminal<L, V>) -> Self {
        Node::NonTerminal(n)
    }
}

/// A leaf for a scanned token.
///
/// A terminal always has a concrete source span. The payload, when present,
/// is the token's semantic value (e.g. the parsed number of a `NUM` token).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Terminal<L, V = String> {
    left: L,
    tag: String,
    value: Option<V>,
    right: L,
}

impl<L, V> Terminal<L, V> {
    /// A terminal without a semantic value.
    #[inline]
    pub fn new(left: L, tag: impl Into<String>, right: L) -> Self {
        Self {
            left,
            tag: tag.into(),
            value: None,
            right,
        }
    }

    /// A terminal carrying a semantic value.
    #[inline]
    pub fn with_value(left: L, tag: impl Into<String>, value: V, right: L) -> Self {
        Self {
            left,
            tag: tag.into(),
            value: Some(value),
            right,
        }
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    #[inline]
    pub fn left(&self) -> &L {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &L {
        &self.right
    }
}

/// An error-recovery placeholder.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorNode<L> {
    left: L,
    right: L,
}

impl<L> ErrorNode<L> {
    #[inline]
    pub fn new(left: L, right: L) -> Self {
        Self { left, right }
    }

    #[inline]
    pub fn left(&self) -> &L {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &L {
        &self.right
    }
}

/// A reduced production with its children in right-hand-side order.
///
/// The span is not stored; [`left`](Self::left) and [`right`](Self::right)
/// are recomputed from the children on every call.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonTerminal<L, V = String> {
    tag: String,
    variant: i32,
    children: Vec<Node<L, V>>,
}

impl<L, V> NonTerminal<L, V> {
    /// # Arguments
    ///
    /// * `tag` - Grammar symbol name
    /// * `variant` - Index of the production that was reduced
    /// * `children` - Right-hand-side nodes, in order
    #[inline]
    pub fn new(tag: impl Into<String>, variant: i32, children: Vec<Node<L, V>>) -> Self {
        Self {
            tag: tag.into(),
            variant,
            children,
        }
    }

    /// A non-terminal reduced from an empty right-hand side.
    #[inline]
    pub fn leaf(tag: impl Into<String>, variant: i32) -> Self {
        Self::new(tag, variant, Vec::new())
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn variant(&self) -> i32 {
        self.variant
    }

    #[inline]
    pub fn children(&self) -> &[Node<L, V>] {
        &self.children
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Consumes the node and returns its children.
    #[inline]
    pub fn into_children(self) -> Vec<Node<L, V>> {
        self.children
    }

    /// The first known left endpoint among the children, scanning forward.
    pub fn left(&self) -> Option<&L> {
        span::leftmost(&self.children)
    }

    /// The first known *left* endpoint among the children, scanning backward.
    ///
    /// Note that this probes each child's left endpoint, not its right one,
    /// so a non-terminal ending in a terminal reports where that terminal
    /// starts. Tree viewers depend on this output, so it is kept as is.
    pub fn right(&self) -> Option<&L> {
        span::rightmost(&self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(l: u32, r: u32) -> Node<u32, i64> {
        Terminal::with_value(l, "NUM", i64::from(l), r).into()
    }

    #[test]
    fn test_terminal_accessors() {
        let t: Terminal<u32, i64> = Terminal::with_value(1, "NUM", 42, 3);
        assert_eq!(t.tag(), "NUM");
        assert_eq!(t.value(), Some(&42));
        assert_eq!((t.left(), t.right()), (&1, &3));

        let bare: Terminal<u32, i64> = Terminal::new(1, "PLUS", 2);
        assert_eq!(bare.value(), None);
    }

    #[test]
    fn test_node_tag() {
        let err: Node<u32, i64> = Node::Error(ErrorNode::new(0, 1));
        assert_eq!(err.tag(), None);
        assert_eq!(err.element_name(), "error");

        let expr: Node<u32, i64> = Node::NonTerminal(NonTerminal::leaf("expr", 0));
        assert_eq!(expr.tag(), Some("expr"));
        assert_eq!(expr.element_name(), "nonterminal");
        assert_eq!(num(0, 1).element_name(), "terminal");
    }

    #[test]
    fn test_leaf_nonterminal_has_no_span() {
        let expr: NonTerminal<u32, i64> = NonTerminal::leaf("expr", 0);
        assert!(expr.is_empty());
        assert_eq!(expr.left(), None);
        assert_eq!(expr.right(), None);
        assert_eq!(Node::from(expr).span(), None);
    }

    #[test]
    fn test_children_order_preserved() {
        let expr = NonTerminal::new("expr", 2, vec![num(0, 1), num(2, 3), num(4, 5)]);
        let lefts: Vec<_> = expr.children().iter().filter_map(Node::left).collect();
        assert_eq!(lefts, vec![&0, &2, &4]);

        let children = expr.into_children();
        assert_eq!(children.len(), 3);
    }

    #[test]
    fn test_span_reports_left_of_last_child() {
        let expr: Node<u32, i64> = NonTerminal::new("expr", 1, vec![num(5, 9)]).into();
        assert_eq!(expr.span(), Some((&5, &5)));
    }

    #[test]
    fn test_leaf_children_empty() {
        assert!(num(0, 1).children().is_empty());
    }
}

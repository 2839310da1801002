//! Span resolution for non-terminals.
//!
//! Both functions delegate to each child's own endpoints and stop at the
//! first one that is known. Absence is not an error: a subtree made only of
//! empty non-terminals simply has no span.

use crate::Node;

/// First present `left()` among `children`, scanning front to back.
pub fn leftmost<L, V>(children: &[Node<L, V>]) -> Option<&L> {
    children.iter().find_map(Node::left)
}

/// First present `left()` among `children`, scanning back to front.
///
/// This is the right endpoint reported by a non-terminal. It deliberately
/// reads `left()`, not `right()`, of each child.
pub fn rightmost<L, V>(children: &[Node<L, V>]) -> Option<&L> {
    children.iter().rev().find_map(Node::left)
}

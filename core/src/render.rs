//! Eager nested-tag rendering.
//!
//! Produces the same elements and attributes as the streaming writer, with
//! two differences in form: non-terminal attributes come in the order
//! `id left right variant`, and a childless non-terminal closes with ` />`.
//! No XML prologue is written and values are not escaped.

use core::fmt;

use crate::traits::{MarkupPrinter, Printer, ToMarkup};
use crate::{ErrorNode, Node, NonTerminal, Terminal};

/// Render `node` and its subtree as nested tags.
pub fn render<L: fmt::Display, V: fmt::Display>(node: &Node<L, V>) -> String {
    node.to_markup()
}

impl<L: fmt::Display, V: fmt::Display> ToMarkup for Node<L, V> {
    type Printer = MarkupPrinter;

    fn write(&self, p: &mut Self::Printer) {
        match self {
            Node::Terminal(t) => t.write(p),
            Node::Error(e) => e.write(p),
            Node::NonTerminal(n) => n.write(p),
        }
    }
}

impl<L: fmt::Display, V: fmt::Display> ToMarkup for Terminal<L, V> {
    type Printer = MarkupPrinter;

    fn write(&self, p: &mut Self::Printer) {
        p.start_tag("terminal");
        p.attr("id", self.tag());
        match self.value() {
            None => p.self_close(),
            Some(value) => {
                p.attr("left", self.left());
                p.attr("right", self.right());
                p.end_start_tag();
                p.display(value);
                p.end_tag("terminal");
            }
        }
    }
}

impl<L: fmt::Display> ToMarkup for ErrorNode<L> {
    type Printer = MarkupPrinter;

    fn write(&self, p: &mut Self::Printer) {
        p.start_tag("error");
        p.attr("left", self.left());
        p.attr("right", self.right());
        p.self_close();
    }
}

impl<L: fmt::Display, V: fmt::Display> ToMarkup for NonTerminal<L, V> {
    type Printer = MarkupPrinter;

    fn write(&self, p: &mut Self::Printer) {
        p.start_tag("nonterminal");
        p.attr("id", self.tag());
        if self.is_empty() {
            p.attr("variant", &self.variant());
            p.space();
            p.self_close();
            return;
        }

        if let Some(left) = self.left() {
            p.attr("left", left);
        }
        if let Some(right) = self.right() {
            p.attr("right", right);
        }
        p.attr("variant", &self.variant());
        p.end_start_tag();
        p.write(self.children());
        p.end_tag("nonterminal");
    }
}

impl<L: fmt::Display, V: fmt::Display> fmt::Display for Node<L, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type N = Node<&'static str, i64>;

    #[test]
    fn test_childless_nonterminal() {
        let node: N = Node::NonTerminal(NonTerminal::leaf("expr", 0));
        assert_eq!(render(&node), r#"<nonterminal id="expr" variant="0" />"#);
    }

    #[test]
    fn test_terminal_with_value() {
        let node: N = Node::Terminal(Terminal::with_value("L1", "NUM", 42, "L2"));
        assert_eq!(
            render(&node),
            r#"<terminal id="NUM" left="L1" right="L2">42</terminal>"#
        );
    }

    #[test]
    fn test_terminal_without_value() {
        let node: N = Node::Terminal(Terminal::new("L1", "PLUS", "L2"));
        assert_eq!(render(&node), r#"<terminal id="PLUS"/>"#);
    }

    #[test]
    fn test_error() {
        let node: N = Node::Error(ErrorNode::new("L1", "L2"));
        assert_eq!(render(&node), r#"<error left="L1" right="L2"/>"#);
    }

    #[test]
    fn test_nonterminal_with_children() {
        let node: N = Node::NonTerminal(NonTerminal::new(
            "expr",
            1,
            vec![
                Node::Terminal(Terminal::with_value("L1", "NUM", 1, "L2")),
                Node::Terminal(Terminal::new("L3", "PLUS", "L4")),
                Node::Terminal(Terminal::with_value("L5", "NUM", 2, "L6")),
            ],
        ));

        assert_eq!(
            node.to_string(),
            concat!(
                r#"<nonterminal id="expr" left="L1" right="L5" variant="1">"#,
                r#"<terminal id="NUM" left="L1" right="L2">1</terminal>"#,
                r#"<terminal id="PLUS"/>"#,
                r#"<terminal id="NUM" left="L5" right="L6">2</terminal>"#,
                "</nonterminal>",
            )
        );
    }

    #[test]
    fn test_spanless_children_omit_span_attributes() {
        let node: N = Node::NonTerminal(NonTerminal::new(
            "list",
            3,
            vec![Node::NonTerminal(NonTerminal::leaf("eps", 0))],
        ));
        assert_eq!(
            render(&node),
            r#"<nonterminal id="list" variant="3"><nonterminal id="eps" variant="0" /></nonterminal>"#
        );
    }

    #[test]
    fn test_payload_is_not_escaped() {
        let node: Node<u32, &str> = Node::Terminal(Terminal::with_value(0, "STR", "<&>", 3));
        assert_eq!(
            render(&node),
            r#"<terminal id="STR" left="0" right="3"><&></terminal>"#
        );
    }

    #[test]
    fn test_forest_renders_each_tree_in_order() {
        let forest: Vec<N> = vec![
            Node::Error(ErrorNode::new("L1", "L2")),
            Node::NonTerminal(NonTerminal::leaf("eps", 0)),
        ];
        assert_eq!(
            forest.to_markup(),
            r#"<error left="L1" right="L2"/><nonterminal id="eps" variant="0" />"#
        );
        assert_eq!(forest.as_slice().to_markup(), forest.to_markup());
    }

    #[test]
    fn test_absent_node_renders_nothing() {
        let absent: Option<N> = None;
        assert_eq!(absent.to_markup(), "");

        let present: Option<N> = Some(Node::Error(ErrorNode::new("L1", "L2")));
        assert_eq!(present.to_markup(), r#"<error left="L1" right="L2"/>"#);
    }

    #[test]
    fn test_boxed_and_borrowed_nodes_render_like_the_node() {
        let node: N = Node::Terminal(Terminal::with_value("L1", "NUM", 7, "L2"));
        let expected = render(&node);

        let borrowed = &node;
        assert_eq!(ToMarkup::to_markup(&borrowed), expected);
        assert_eq!(Box::new(node).to_markup(), expected);
    }
}

use divan::{Bencher, black_box};
use treedump::{EventRecorder, Node, NonTerminal, SourceLocation, Terminal, dump, dump_to_string, render};

fn main() {
    divan::main();
}

/// A left-leaning `expr := expr PLUS NUM | NUM` chain with `n` numbers,
/// the shape an LR parser produces for a long sum.
fn sum_chain(n: usize) -> Node<SourceLocation, i64> {
    let num = |i: usize| {
        let offset = i * 4;
        Node::Terminal(Terminal::with_value(
            SourceLocation::new(1, offset, offset),
            "NUM",
            i as i64,
            SourceLocation::new(1, offset + 1, offset + 1),
        ))
    };

    let mut tree = Node::NonTerminal(NonTerminal::new("expr", 1, vec![num(0)]));
    for i in 1..n {
        let plus_at = i * 4 - 2;
        let plus = Node::Terminal(Terminal::new(
            SourceLocation::new(1, plus_at, plus_at),
            "PLUS",
            SourceLocation::new(1, plus_at + 1, plus_at + 1),
        ));
        tree = Node::NonTerminal(NonTerminal::new("expr", 0, vec![tree, plus, num(i)]));
    }
    tree
}

/// One non-terminal with `n` terminal children.
fn flat_list(n: usize) -> Node<SourceLocation, i64> {
    let children = (0..n)
        .map(|i| {
            Node::Terminal(Terminal::with_value(
                SourceLocation::new(i + 1, 0, i * 2),
                "ITEM",
                i as i64,
                SourceLocation::new(i + 1, 1, i * 2 + 1),
            ))
        })
        .collect();
    Node::NonTerminal(NonTerminal::new("list", 0, children))
}

#[divan::bench(args = [10, 100, 1000])]
fn bench_render_chain(bencher: Bencher, n: usize) {
    let tree = sum_chain(n);
    bencher.bench(|| black_box(render(black_box(&tree))));
}

#[divan::bench(args = [100, 1000, 10_000])]
fn bench_render_flat(bencher: Bencher, n: usize) {
    let tree = flat_list(n);
    bencher.bench(|| black_box(render(black_box(&tree))));
}

#[divan::bench(args = [10, 100, 1000])]
fn bench_dump_xml_chain(bencher: Bencher, n: usize) {
    let tree = sum_chain(n);
    bencher.bench(|| black_box(dump_to_string(black_box(&tree)).unwrap()));
}

#[divan::bench(args = [100, 1000, 10_000])]
fn bench_dump_events_flat(bencher: Bencher, n: usize) {
    let tree = flat_list(n);
    bencher
        .with_inputs(EventRecorder::new)
        .bench_values(|mut rec| {
            dump(&mut rec, black_box(&tree)).unwrap();
            black_box(rec)
        });
}

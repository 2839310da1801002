#![no_main]

use libfuzzer_sys::fuzz_target;
use treedump::{Event, EventRecorder, Node, dump, dump_to_string, render};

type Tree = Node<u16, String>;

fn count_nodes(node: &Tree) -> usize {
    1 + node.children().iter().map(count_nodes).sum::<usize>()
}

fuzz_target!(|tree: Tree| {
    // Rendering must never panic, whatever the payloads contain
    let _ = render(&tree);

    let mut rec = EventRecorder::new();
    dump(&mut rec, &tree).expect("recording sink never fails");

    let events = rec.events();
    let starts = events
        .iter()
        .filter(|e| matches!(e, Event::StartElement(_)))
        .count();
    let ends = events
        .iter()
        .filter(|e| matches!(e, Event::EndElement))
        .count();
    assert_eq!(starts, count_nodes(&tree));
    assert_eq!(starts, ends);
    assert!(rec.is_closed());

    // The XML transport escapes payloads, so every tree must serialize
    let doc = dump_to_string(&tree).expect("in-memory xml sink never fails");
    assert!(doc.starts_with("<?xml version=\"1.0\"?>"));
});

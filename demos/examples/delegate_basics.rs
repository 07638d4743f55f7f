// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event delegation basics.
//!
//! Builds a tiny document, binds one click delegate for `.item` at the list,
//! and dispatches clicks at several nodes to show which ones resolve.
//!
//! Run:
//! - `cargo run -p canopy_demos --example delegate_basics`

use canopy_traverse::delegate::{Delegate, DelegatedEvent, Receiver};
use canopy_traverse::types::NodeTree;
use canopy_traverse::walk::{find_ancestor_until_root, find_previous_until_root};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Node(usize);

struct Element {
    parent: Option<Node>,
    previous: Option<Node>,
    tag: &'static str,
    class: Option<&'static str>,
}

/// Arena-backed document; `Node(0)` is the document itself.
struct Document {
    elements: Vec<Element>,
}

impl Document {
    fn new() -> Self {
        Self {
            elements: vec![Element {
                parent: None,
                previous: None,
                tag: "#document",
                class: None,
            }],
        }
    }

    fn append(&mut self, parent: Node, tag: &'static str, class: Option<&'static str>) -> Node {
        let previous = self
            .elements
            .iter()
            .rposition(|e| e.parent == Some(parent))
            .map(Node);
        self.elements.push(Element {
            parent: Some(parent),
            previous,
            tag,
            class,
        });
        Node(self.elements.len() - 1)
    }

    fn describe(&self, node: Node) -> String {
        let e = &self.elements[node.0];
        match e.class {
            Some(class) => format!("{}.{class}#{}", e.tag, node.0),
            None => format!("{}#{}", e.tag, node.0),
        }
    }
}

impl NodeTree<Node> for Document {
    type Selector = str;

    fn parent_of(&self, node: &Node) -> Option<Node> {
        self.elements[node.0].parent
    }

    fn previous_sibling_of(&self, node: &Node) -> Option<Node> {
        self.elements[node.0].previous
    }

    fn is_root(&self, node: &Node) -> bool {
        node.0 == 0
    }

    fn matches(&self, node: &Node, selector: &str) -> bool {
        let e = &self.elements[node.0];
        match selector.strip_prefix('.') {
            Some(class) => e.class == Some(class),
            None => e.tag == selector,
        }
    }
}

struct Click {
    target: Option<Node>,
    delegate_target: Option<Node>,
}

impl DelegatedEvent<Node> for Click {
    fn target(&self) -> Option<Node> {
        self.target
    }

    fn set_delegate_target(&mut self, node: Node) {
        self.delegate_target = Some(node);
    }
}

fn main() {
    let mut doc = Document::new();
    let body = doc.append(Node(0), "body", None);
    let list = doc.append(body, "ul", Some("menu"));
    let first = doc.append(list, "li", Some("item"));
    let icon = doc.append(first, "span", Some("icon"));
    let divider = doc.append(list, "li", Some("divider"));
    let second = doc.append(list, "li", Some("item"));

    let on_item = Delegate::new(".item", |this: Receiver<'_, Node, ()>, e: &mut Click| {
        println!(
            "  handler: this={:?} delegate_target={:?}",
            this.target(),
            e.delegate_target
        );
    });

    println!("== Delegated clicks on `.item` ==");
    for target in [icon, first, divider, second, list] {
        let mut click = Click {
            target: Some(target),
            delegate_target: None,
        };
        match on_item.handle(&doc, &mut click) {
            Ok(Some(node)) => println!("{} -> {}", doc.describe(target), doc.describe(node)),
            Ok(None) => println!("{} -> (no match)", doc.describe(target)),
            Err(err) => println!("{} -> error: {err}", doc.describe(target)),
        }
    }

    println!("== Walks ==");
    let menu = find_ancestor_until_root(&doc, &icon, ".menu").expect("attached");
    println!("closest .menu from icon: {}", doc.describe(menu));
    let fallback = find_ancestor_until_root(&doc, &icon, "table").expect("attached");
    println!("closest table from icon: {} (root)", doc.describe(fallback));
    let prev = find_previous_until_root(&doc, &second, ".item");
    println!("previous .item before second: {:?}", prev.map(|n| doc.describe(n)));
}

// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small arena tree used by the unit tests.

use alloc::vec::Vec;

use crate::types::NodeTree;

struct Node {
    parent: Option<usize>,
    previous: Option<usize>,
    tag: &'static str,
    classes: &'static [&'static str],
}

/// Node `0` is the document root. Selectors are a tag name or `.class`.
pub(crate) struct Fixture {
    nodes: Vec<Node>,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self {
            nodes: alloc::vec![Node {
                parent: None,
                previous: None,
                tag: "#document",
                classes: &[],
            }],
        }
    }

    pub(crate) fn root(&self) -> usize {
        0
    }

    pub(crate) fn append(
        &mut self,
        parent: usize,
        tag: &'static str,
        classes: &'static [&'static str],
    ) -> usize {
        let previous = self.nodes.iter().rposition(|n| n.parent == Some(parent));
        self.nodes.push(Node {
            parent: Some(parent),
            previous,
            tag,
            classes,
        });
        self.nodes.len() - 1
    }

    /// A node that was never attached (or has been removed).
    pub(crate) fn orphan(&mut self, tag: &'static str) -> usize {
        self.nodes.push(Node {
            parent: None,
            previous: None,
            tag,
            classes: &[],
        });
        self.nodes.len() - 1
    }
}

impl NodeTree<usize> for Fixture {
    type Selector = str;

    fn parent_of(&self, node: &usize) -> Option<usize> {
        self.nodes[*node].parent
    }

    fn previous_sibling_of(&self, node: &usize) -> Option<usize> {
        self.nodes[*node].previous
    }

    fn is_root(&self, node: &usize) -> bool {
        *node == 0
    }

    fn matches(&self, node: &usize, selector: &str) -> bool {
        let n = &self.nodes[*node];
        match selector.strip_prefix('.') {
            Some(class) => n.classes.contains(&class),
            None => n.tag == selector,
        }
    }
}

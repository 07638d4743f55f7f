// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_traverse::types::NodeTree;
use canopy_traverse::walk::{find_ancestor_until_root, find_self_or_previous};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// A single chain of `depth` nodes; node 0 is the root. Every node also has the
/// previous index as its earlier sibling so sibling walks cover the same length.
struct Chain {
    marked: usize,
}

impl NodeTree<usize> for Chain {
    type Selector = usize;

    fn parent_of(&self, node: &usize) -> Option<usize> {
        node.checked_sub(1)
    }

    fn previous_sibling_of(&self, node: &usize) -> Option<usize> {
        node.checked_sub(1)
    }

    fn is_root(&self, node: &usize) -> bool {
        *node == 0
    }

    fn matches(&self, node: &usize, selector: &usize) -> bool {
        *node == *selector || *node == self.marked
    }
}

fn bench_walks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ancestor_walks");
    for depth in [8_usize, 64, 512] {
        let tree = Chain { marked: 1 };
        let leaf = depth;
        group.bench_function(format!("ancestor_hit/{depth}"), |b| {
            b.iter(|| black_box(find_ancestor_until_root(&tree, black_box(&leaf), &usize::MAX)));
        });
        let none = Chain { marked: usize::MAX };
        group.bench_function(format!("ancestor_to_root/{depth}"), |b| {
            b.iter(|| black_box(find_ancestor_until_root(&none, black_box(&leaf), &usize::MAX)));
        });
        group.bench_function(format!("self_or_previous/{depth}"), |b| {
            b.iter(|| black_box(find_self_or_previous(&none, black_box(&leaf), &usize::MAX)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_walks);
criterion_main!(benches);

// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: the tree seam and the detached-node error.

/// Navigation and matching over a host tree of node keys `K`.
///
/// Every walk in this crate terminates at the root sentinel (the node for
/// which [`is_root`](NodeTree::is_root) is true, typically the document).
/// The root is never tested against a selector.
pub trait NodeTree<K> {
    /// Selector type understood by [`matches`](NodeTree::matches), e.g. `str`.
    type Selector: ?Sized;

    /// Returns the parent of `node`, or `None` if it has none.
    ///
    /// Only the root sentinel may lack a parent; any other node without one is
    /// detached and walks through it report [`Detached`].
    fn parent_of(&self, node: &K) -> Option<K>;

    /// Returns the sibling immediately before `node`, if any.
    fn previous_sibling_of(&self, node: &K) -> Option<K>;

    /// Whether `node` is the root sentinel.
    fn is_root(&self, node: &K) -> bool;

    /// Whether `node` matches `selector`.
    fn matches(&self, node: &K, selector: &Self::Selector) -> bool;
}

/// An ancestor walk ran out of parents before reaching the root sentinel.
///
/// Callers must only walk nodes attached to the tree; this reports that the
/// precondition was violated, naming the last node reached.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("node {node:?} has no parent and is not the root")]
pub struct Detached<K> {
    /// The parentless, non-root node the walk stopped at.
    pub node: K,
}

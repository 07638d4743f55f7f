// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestor and previous-sibling walks.
//!
//! ## Two flavors
//!
//! Each direction comes as a pair:
//!
//! - `*_until_root` starts from the node's neighbor and stops at the first match.
//!   If the walk reaches the root sentinel first, the **root itself** is returned.
//! - `find_self_or_*` also tests the starting node, and reports reaching the root
//!   as "not found" (`None`).
//!
//! The two treat the root differently on purpose and callers rely on either.
//!
//! ## Detached nodes
//!
//! Ancestor walks require an attached node. A parentless non-root node yields
//! [`Detached`] rather than being mistaken for "no match". Sibling walks simply
//! end when there is no earlier sibling.

use core::fmt::Debug;

use crate::types::{Detached, NodeTree};

/// Nearest ancestor of `node` matching `selector`, or the root sentinel if none does.
///
/// Starting at the root returns the root.
pub fn find_ancestor_until_root<K, T>(
    tree: &T,
    node: &K,
    selector: &T::Selector,
) -> Result<K, Detached<K>>
where
    K: Copy + Debug,
    T: NodeTree<K> + ?Sized,
{
    let mut current = *node;
    while !tree.is_root(&current) {
        let Some(parent) = tree.parent_of(&current) else {
            tracing::warn!(node = ?current, "ancestor walk left the tree below the root");
            return Err(Detached { node: current });
        };
        if !tree.is_root(&parent) && tree.matches(&parent, selector) {
            return Ok(parent);
        }
        current = parent;
    }
    Ok(current)
}

/// `node` if it matches, else its nearest matching ancestor; `None` if the walk reaches the root.
pub fn find_self_or_ancestor<K, T>(
    tree: &T,
    node: &K,
    selector: &T::Selector,
) -> Result<Option<K>, Detached<K>>
where
    K: Copy + Debug,
    T: NodeTree<K> + ?Sized,
{
    if !tree.is_root(node) && tree.matches(node, selector) {
        return Ok(Some(*node));
    }
    let found = find_ancestor_until_root(tree, node, selector)?;
    Ok((!tree.is_root(&found)).then_some(found))
}

/// Nearest earlier sibling of `node` matching `selector`.
///
/// Mirrors [`find_ancestor_until_root`]: should the walk reach the root
/// sentinel it is returned as-is. Running out of siblings yields `None`.
pub fn find_previous_until_root<K, T>(tree: &T, node: &K, selector: &T::Selector) -> Option<K>
where
    K: Copy,
    T: NodeTree<K> + ?Sized,
{
    let mut current = *node;
    while let Some(previous) = tree.previous_sibling_of(&current) {
        if tree.is_root(&previous) || tree.matches(&previous, selector) {
            return Some(previous);
        }
        current = previous;
    }
    None
}

/// `node` if it matches, else its nearest matching earlier sibling.
pub fn find_self_or_previous<K, T>(tree: &T, node: &K, selector: &T::Selector) -> Option<K>
where
    K: Copy,
    T: NodeTree<K> + ?Sized,
{
    if !tree.is_root(node) && tree.matches(node, selector) {
        return Some(*node);
    }
    find_previous_until_root(tree, node, selector).filter(|found| !tree.is_root(found))
}

// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Traverse: ancestor/sibling matching and event delegation over a host tree.
//!
//! ## Overview
//!
//! This crate does not own a tree.
//! Implement [`NodeTree`](crate::types::NodeTree) for yours (a DOM, a widget tree, an arena)
//! to expose parents, previous siblings, the root sentinel, and selector matching.
//!
//! ## Walks
//!
//! [`walk`](crate::walk) finds the nearest node matching a selector:
//!
//! - [`find_ancestor_until_root`](crate::walk::find_ancestor_until_root) returns the nearest
//!   matching ancestor, or the root sentinel itself when the walk reaches it.
//! - [`find_self_or_ancestor`](crate::walk::find_self_or_ancestor) also considers the node
//!   itself, and reports reaching the root as `None`.
//! - [`find_previous_until_root`](crate::walk::find_previous_until_root) and
//!   [`find_self_or_previous`](crate::walk::find_self_or_previous) do the same across earlier siblings.
//!
//! Ancestor walks require an attached node; a parentless non-root node is reported as
//! [`Detached`](crate::types::Detached).
//!
//! ## Delegation
//!
//! [`Delegate`](crate::delegate::Delegate) binds one handler for every descendant that
//! matches a selector. It resolves each event's target with
//! [`find_self_or_ancestor`](crate::walk::find_self_or_ancestor), records the result through
//! [`DelegatedEvent::set_delegate_target`](crate::delegate::DelegatedEvent::set_delegate_target),
//! and runs the handler with either its context or the resolved node.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_traverse::types::NodeTree;
//! use canopy_traverse::walk::{find_ancestor_until_root, find_self_or_ancestor};
//!
//! // 0: document, 1: form, 2: fieldset, 3: input
//! struct Form;
//! impl NodeTree<u8> for Form {
//!     type Selector = str;
//!     fn parent_of(&self, n: &u8) -> Option<u8> { n.checked_sub(1) }
//!     fn previous_sibling_of(&self, _: &u8) -> Option<u8> { None }
//!     fn is_root(&self, n: &u8) -> bool { *n == 0 }
//!     fn matches(&self, n: &u8, sel: &str) -> bool {
//!         ["#document", "form", "fieldset", "input"][usize::from(*n)] == sel
//!     }
//! }
//!
//! assert_eq!(find_ancestor_until_root(&Form, &3, "form"), Ok(1));
//! assert_eq!(find_ancestor_until_root(&Form, &3, "table"), Ok(0));
//! assert_eq!(find_self_or_ancestor(&Form, &3, "table"), Ok(None));
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod delegate;
pub mod types;
pub mod walk;

#[cfg(test)]
mod fixture;

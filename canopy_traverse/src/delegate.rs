// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector-based event delegation.
//!
//! ## Overview
//!
//! A [`Delegate`] is bound once at an ancestor and acts on behalf of every
//! descendant matching its selector. When an event arrives, the delegate
//! resolves the event target to the nearest matching node (the target itself or
//! an ancestor), records it on the event as the *delegate target*, and runs the
//! handler.
//!
//! The delegate holds no per-event state: [`Delegate::handle`] takes `&self`,
//! so it is safe to re-enter from nested dispatch.
//!
//! ## Example
//!
//! ```
//! use canopy_traverse::delegate::{Delegate, DelegatedEvent, Receiver};
//! use canopy_traverse::types::NodeTree;
//!
//! // Node 0 is the document, 1 is a `button`, 2 is a `span` inside it.
//! struct Doc;
//! impl NodeTree<u32> for Doc {
//!     type Selector = str;
//!     fn parent_of(&self, n: &u32) -> Option<u32> { n.checked_sub(1) }
//!     fn previous_sibling_of(&self, _: &u32) -> Option<u32> { None }
//!     fn is_root(&self, n: &u32) -> bool { *n == 0 }
//!     fn matches(&self, n: &u32, sel: &str) -> bool { *n == 1 && sel == "button" }
//! }
//!
//! struct Click { target: Option<u32>, delegate_target: Option<u32> }
//! impl DelegatedEvent<u32> for Click {
//!     fn target(&self) -> Option<u32> { self.target }
//!     fn set_delegate_target(&mut self, node: u32) { self.delegate_target = Some(node); }
//! }
//!
//! let on_button = Delegate::new("button", |this: Receiver<'_, u32, ()>, _: &mut Click| {
//!     assert_eq!(this, Receiver::Target(1));
//! });
//! let mut click = Click { target: Some(2), delegate_target: None };
//! assert_eq!(on_button.handle(&Doc, &mut click), Ok(Some(1)));
//! assert_eq!(click.delegate_target, Some(1));
//! ```

use core::borrow::Borrow;
use core::fmt::Debug;

use crate::types::{Detached, NodeTree};
use crate::walk::find_self_or_ancestor;

/// Event capabilities a [`Delegate`] needs.
pub trait DelegatedEvent<K> {
    /// The node the event was dispatched to, if any.
    fn target(&self) -> Option<K>;

    /// Record the node the delegate resolved the event to.
    fn set_delegate_target(&mut self, node: K);
}

/// What a delegated handler acts on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Receiver<'a, K, C> {
    /// The context supplied when the delegate was created.
    Context(&'a C),
    /// The resolved delegate target, when no context was supplied.
    Target(K),
}

impl<'a, K: Copy, C> Receiver<'a, K, C> {
    /// The resolved target, if the handler was not given a context.
    pub fn target(&self) -> Option<K> {
        match self {
            Self::Target(node) => Some(*node),
            Self::Context(_) => None,
        }
    }

    /// The delegate's context, if it has one.
    pub fn context(&self) -> Option<&'a C> {
        match self {
            Self::Context(context) => Some(context),
            Self::Target(_) => None,
        }
    }
}

/// Handler bound at an ancestor on behalf of descendants matching a selector.
///
/// `S` is the stored selector (e.g. `&'static str` or `String`), `H` the handler,
/// and `C` an optional context handed to the handler instead of the target.
#[derive(Clone)]
pub struct Delegate<S, H, C = ()> {
    selector: S,
    handler: H,
    context: Option<C>,
}

impl<S: Debug, H, C: Debug> Debug for Delegate<S, H, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Delegate")
            .field("selector", &self.selector)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Create a [`Delegate`], optionally bound to `context`.
pub fn delegate<S, H, C>(selector: S, handler: H, context: Option<C>) -> Delegate<S, H, C> {
    Delegate {
        selector,
        handler,
        context,
    }
}

impl<S, H> Delegate<S, H> {
    /// Delegate whose handler receives the resolved target.
    pub fn new(selector: S, handler: H) -> Self {
        delegate(selector, handler, None)
    }
}

impl<S, H, C> Delegate<S, H, C> {
    /// Delegate whose handler receives `context` instead of the resolved target.
    pub fn with_context(selector: S, handler: H, context: C) -> Self {
        delegate(selector, handler, Some(context))
    }

    /// Selector this delegate matches against.
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Context handed to the handler, if any.
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    /// Handle one event dispatched within `tree`.
    ///
    /// Returns the resolved delegate target, or `None` when the event has no
    /// target or nothing from the target up to (but excluding) the root matches;
    /// the handler runs only in the first case.
    pub fn handle<K, T, E>(&self, tree: &T, event: &mut E) -> Result<Option<K>, Detached<K>>
    where
        K: Copy + Debug,
        T: NodeTree<K> + ?Sized,
        S: Borrow<T::Selector>,
        E: DelegatedEvent<K>,
        H: Fn(Receiver<'_, K, C>, &mut E),
    {
        let Some(raw) = event.target() else {
            return Ok(None);
        };
        // The root never stands in as a delegate target.
        let Some(target) = find_self_or_ancestor(tree, &raw, self.selector.borrow())? else {
            return Ok(None);
        };
        event.set_delegate_target(target);
        let receiver = match &self.context {
            Some(context) => Receiver::Context(context),
            None => Receiver::Target(target),
        };
        (self.handler)(receiver, event);
        Ok(Some(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::Fixture;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Default)]
    struct Event {
        target: Option<usize>,
        delegate_target: Option<usize>,
        prevented: bool,
    }

    impl Event {
        fn at(target: usize) -> Self {
            Self {
                target: Some(target),
                ..Self::default()
            }
        }
    }

    impl DelegatedEvent<usize> for Event {
        fn target(&self) -> Option<usize> {
            self.target
        }

        fn set_delegate_target(&mut self, node: usize) {
            self.delegate_target = Some(node);
        }
    }

    // document > nav > a.item > span
    fn nav() -> (Fixture, usize, usize, usize) {
        let mut f = Fixture::new();
        let nav = f.append(f.root(), "nav", &[]);
        let item = f.append(nav, "a", &["item"]);
        let span = f.append(item, "span", &[]);
        (f, nav, item, span)
    }

    #[test]
    fn descendant_resolves_to_matching_ancestor() {
        let (f, _, item, span) = nav();
        let seen = RefCell::new(Vec::new());
        let d = Delegate::new(".item", |this: Receiver<'_, usize, ()>, e: &mut Event| {
            seen.borrow_mut().push((this.target(), e.delegate_target));
            e.prevented = true;
        });
        let mut e = Event::at(span);
        assert_eq!(d.handle(&f, &mut e), Ok(Some(item)));
        assert_eq!(e.delegate_target, Some(item));
        assert_eq!(e.target, Some(span));
        assert!(e.prevented);
        // The delegate target is set before the handler runs.
        assert_eq!(*seen.borrow(), [(Some(item), Some(item))]);
    }

    #[test]
    fn direct_match_uses_target() {
        let (f, _, item, _) = nav();
        let d = Delegate::new(".item", |this: Receiver<'_, usize, ()>, _: &mut Event| {
            assert_eq!(this, Receiver::Target(item));
        });
        let mut e = Event::at(item);
        assert_eq!(d.handle(&f, &mut e), Ok(Some(item)));
        assert_eq!(e.delegate_target, Some(item));
    }

    #[test]
    fn context_replaces_target_as_receiver() {
        let (f, _, item, span) = nav();
        let calls = RefCell::new(0);
        let d = Delegate::with_context(
            ".item",
            |this: Receiver<'_, usize, &str>, _: &mut Event| {
                assert_eq!(this.context(), Some(&"menu"));
                assert_eq!(this.target(), None);
                *calls.borrow_mut() += 1;
            },
            "menu",
        );
        let mut e = Event::at(span);
        assert_eq!(d.handle(&f, &mut e), Ok(Some(item)));
        assert_eq!(e.delegate_target, Some(item));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn no_match_or_no_target_is_a_no_op() {
        let (f, nav, _, span) = nav();
        let calls = RefCell::new(0);
        let d = delegate(
            "button",
            |_: Receiver<'_, usize, ()>, _: &mut Event| *calls.borrow_mut() += 1,
            None::<()>,
        );
        let mut miss = Event::at(span);
        assert_eq!(d.handle(&f, &mut miss), Ok(None));
        assert_eq!(miss.delegate_target, None);

        let mut untargeted = Event::default();
        assert_eq!(d.handle(&f, &mut untargeted), Ok(None));

        // Binding site itself does not match either.
        let mut at_nav = Event::at(nav);
        assert_eq!(d.handle(&f, &mut at_nav), Ok(None));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn root_target_is_never_delegated() {
        let f = Fixture::new();
        let calls = RefCell::new(0);
        let d = Delegate::new("#document", |_: Receiver<'_, usize, ()>, _: &mut Event| {
            *calls.borrow_mut() += 1;
        });
        let mut e = Event::at(f.root());
        assert_eq!(find_self_or_ancestor(&f, &f.root(), "#document"), Ok(None));
        assert_eq!(d.handle(&f, &mut e), Ok(None));
        assert_eq!(e.delegate_target, None);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn detached_target_propagates() {
        let mut f = Fixture::new();
        let orphan = f.orphan("div");
        let d = Delegate::new(".item", |_: Receiver<'_, usize, ()>, _: &mut Event| {
            unreachable!("handler must not run for a detached target");
        });
        let mut e = Event::at(orphan);
        assert_eq!(d.handle(&f, &mut e), Err(Detached { node: orphan }));
        assert_eq!(e.delegate_target, None);
    }

    // A handler may dispatch a nested event through the same delegate.
    #[test]
    fn reentrant_dispatch() {
        let (f, _, item, span) = nav();
        let depth = RefCell::new(Vec::new());
        let inner = Delegate::new("a", |this: Receiver<'_, usize, ()>, _: &mut Event| {
            depth.borrow_mut().push(this.target());
        });
        let outer = Delegate::new("nav", |_: Receiver<'_, usize, ()>, e: &mut Event| {
            let mut nested = Event::at(e.target.unwrap());
            inner.handle(&f, &mut nested).unwrap();
            inner.handle(&f, &mut nested).unwrap();
        });
        let mut e = Event::at(span);
        outer.handle(&f, &mut e).unwrap();
        assert_eq!(*depth.borrow(), [Some(item), Some(item)]);
    }

    #[test]
    fn owned_selector_borrows_as_str() {
        let (f, _, item, span) = nav();
        let d = Delegate::new(
            alloc::string::String::from(".item"),
            |_: Receiver<'_, usize, ()>, _: &mut Event| {},
        );
        assert_eq!(d.selector(), ".item");
        assert!(d.context().is_none());
        assert_eq!(d.handle(&f, &mut Event::at(span)), Ok(Some(item)));
    }
}

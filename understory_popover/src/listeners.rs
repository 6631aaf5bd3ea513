// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped listener registration for a popover's target and the window.
//!
//! A popover needs three listeners while it is active: pointer enter and pointer leave on
//! its target, and resize on the window. [`Subscription::attach`] registers all three with a
//! [`ListenerHost`] and removes exactly those three when the subscription is dropped or
//! [disposed](Subscription::dispose), so no exit path leaks a registration.
//!
//! ```
//! use understory_popover::listeners::{Listener, ListenerHost, ListenerTarget, Subscription};
//!
//! #[derive(Default)]
//! struct Counter { live: i32 }
//!
//! impl ListenerHost<u32> for Counter {
//!     fn add_listener(&mut self, _: ListenerTarget<'_, u32>, _: Listener) { self.live += 1; }
//!     fn remove_listener(&mut self, _: ListenerTarget<'_, u32>, _: Listener) { self.live -= 1; }
//! }
//!
//! let mut host = Counter::default();
//! {
//!     let sub = Subscription::attach(&mut host, 7_u32);
//!     assert_eq!(*sub.target(), 7);
//! }
//! assert_eq!(host.live, 0);
//! ```

/// Kind of listener a popover registers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Listener {
    /// Pointer (or focus) entered the target.
    PointerEnter,
    /// Pointer (or focus) left the target.
    PointerLeave,
    /// The viewport was resized.
    Resize,
}

/// Where a listener is attached.
#[derive(Debug, Eq, PartialEq, Hash)]
pub enum ListenerTarget<'a, T> {
    /// An element, identified by the host's handle.
    Element(&'a T),
    /// The window or top-level viewport.
    Window,
}

impl<T> Clone for ListenerTarget<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListenerTarget<'_, T> {}

/// Host environment able to add and remove event listeners.
///
/// `T` is the host's opaque element handle.
pub trait ListenerHost<T> {
    /// Register `listener` on `target`.
    fn add_listener(&mut self, target: ListenerTarget<'_, T>, listener: Listener);
    /// Remove a listener previously registered with [`add_listener`](Self::add_listener).
    fn remove_listener(&mut self, target: ListenerTarget<'_, T>, listener: Listener);
}

// (on target element, listener), in registration order.
const REGISTRATIONS: [(bool, Listener); 3] = [
    (true, Listener::PointerEnter),
    (true, Listener::PointerLeave),
    (false, Listener::Resize),
];

fn target_of<T>(on_element: bool, element: &T) -> ListenerTarget<'_, T> {
    if on_element {
        ListenerTarget::Element(element)
    } else {
        ListenerTarget::Window
    }
}

/// An active set of popover listeners; removes them on drop.
pub struct Subscription<'h, T, H: ListenerHost<T>> {
    host: &'h mut H,
    target: T,
}

impl<T: core::fmt::Debug, H: ListenerHost<T>> core::fmt::Debug for Subscription<'_, T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl<'h, T, H: ListenerHost<T>> Subscription<'h, T, H> {
    /// Register enter/leave on `target` and resize on the window.
    pub fn attach(host: &'h mut H, target: T) -> Self {
        for (on_element, listener) in REGISTRATIONS {
            host.add_listener(target_of(on_element, &target), listener);
        }
        Self { host, target }
    }

    /// The element the subscription is attached to.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Access the host while subscribed.
    pub fn host_mut(&mut self) -> &mut H {
        self.host
    }

    /// Remove the listeners now.
    pub fn dispose(self) {
        drop(self);
    }
}

impl<T, H: ListenerHost<T>> Drop for Subscription<'_, T, H> {
    fn drop(&mut self) {
        for (on_element, listener) in REGISTRATIONS.into_iter().rev() {
            self.host
                .remove_listener(target_of(on_element, &self.target), listener);
        }
    }
}

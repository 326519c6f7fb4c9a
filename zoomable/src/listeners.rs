// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped registration of document and window listeners.
//!
//! A viewer listens outside its own element: key presses on the document,
//! mouse movement on the document (to end drags that leave the viewport),
//! window resizes, and the vendor-specific fullscreen change event. Each
//! registration is held by a [`ListenerGuard`] that removes it on drop, and a
//! [`ListenerSet`] releases all of them, newest first.

use alloc::rc::Rc;
use core::fmt;

use smallvec::SmallVec;
use tracing::debug;

/// Which outside event a listener is registered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// `keydown` on the document.
    KeyDown,
    /// `mousemove` on the document.
    MouseMove,
    /// `resize` on the window.
    Resize,
    /// The fullscreen change event, named by the detected vendor API.
    FullscreenChange(&'static str),
}

impl ListenerKind {
    /// Platform event name.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::MouseMove => "mousemove",
            Self::Resize => "resize",
            Self::FullscreenChange(name) => name,
        }
    }
}

/// Something listeners can be attached to and removed from.
///
/// Implemented by the host platform glue. The returned registration is the
/// token needed to remove the listener again (a closure handle, a callback
/// id...).
pub trait EventTarget {
    /// Token identifying one registered listener.
    type Registration;

    /// Registers a listener for `kind`.
    fn add_listener(&self, kind: ListenerKind) -> Self::Registration;

    /// Removes a listener registered earlier.
    fn remove_listener(&self, registration: Self::Registration);
}

/// One registered listener, removed when the guard is dropped.
pub struct ListenerGuard<T: EventTarget> {
    target: Rc<T>,
    kind: ListenerKind,
    registration: Option<T::Registration>,
}

impl<T: EventTarget> ListenerGuard<T> {
    /// Registers a listener for `kind` on `target`.
    pub fn acquire(target: &Rc<T>, kind: ListenerKind) -> Self {
        let registration = target.add_listener(kind);
        Self {
            target: Rc::clone(target),
            kind,
            registration: Some(registration),
        }
    }

    /// Event this guard listens for.
    #[must_use]
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl<T: EventTarget> Drop for ListenerGuard<T> {
    fn drop(&mut self) {
        if let Some(registration) = self.registration.take() {
            debug!(event = self.kind.event_name(), "listener released");
            self.target.remove_listener(registration);
        }
    }
}

impl<T: EventTarget> fmt::Debug for ListenerGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("kind", &self.kind)
            .field("registered", &self.registration.is_some())
            .finish_non_exhaustive()
    }
}

/// A group of listeners released together, in reverse order of acquisition.
pub struct ListenerSet<T: EventTarget> {
    guards: SmallVec<[ListenerGuard<T>; 4]>,
}

impl<T: EventTarget> Default for ListenerSet<T> {
    fn default() -> Self {
        Self {
            guards: SmallVec::new(),
        }
    }
}

impl<T: EventTarget> ListenerSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for `kind` on `target` and keeps its guard.
    pub fn acquire(&mut self, target: &Rc<T>, kind: ListenerKind) {
        self.guards.push(ListenerGuard::acquire(target, kind));
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Returns `true` if a listener for `kind` is registered.
    #[must_use]
    pub fn contains(&self, kind: ListenerKind) -> bool {
        self.guards.iter().any(|guard| guard.kind == kind)
    }

    /// Removes every listener, newest first.
    pub fn release_all(&mut self) {
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

impl<T: EventTarget> Drop for ListenerSet<T> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<T: EventTarget> fmt::Debug for ListenerSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.guards.iter()).finish()
    }
}

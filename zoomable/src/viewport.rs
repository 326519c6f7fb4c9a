// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport host: one mounted engine plus its outside listeners.

use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};
use core::fmt;
use core::time::Duration;

use smallvec::SmallVec;
use tracing::debug;

use crate::config::ZoomConfig;
use crate::engine::ZoomEngine;
use crate::event::InputEvent;
use crate::fullscreen::FullscreenApi;
use crate::listeners::{EventTarget, ListenerKind, ListenerSet};
use crate::media::MediaSource;
use crate::snapshot::ZoomSnapshot;

/// Delay between attempts to read a video's dimensions.
pub const DIMENSION_RETRY_DELAY: Duration = Duration::from_millis(500);

/// A mounted zoomable viewer.
///
/// Owns the engine behind `Rc<RefCell<_>>` so that platform callbacks and
/// [`DimensionPoll`] tasks can reach it, and keeps the document and window
/// listeners registered until it is unmounted or dropped.
pub struct ZoomableViewport<T: EventTarget> {
    engine: Rc<RefCell<ZoomEngine>>,
    listeners: ListenerSet<T>,
    polls: SmallVec<[Rc<Cell<bool>>; 1]>,
}

impl<T: EventTarget> ZoomableViewport<T> {
    /// Creates the engine and registers `keydown`, `mousemove`, `resize`
    /// and, when a fullscreen API was detected, its change event.
    pub fn mount(
        target: &Rc<T>,
        config: ZoomConfig,
        fullscreen: Option<&'static FullscreenApi>,
    ) -> Self {
        let mut listeners = ListenerSet::new();
        listeners.acquire(target, ListenerKind::KeyDown);
        listeners.acquire(target, ListenerKind::MouseMove);
        listeners.acquire(target, ListenerKind::Resize);
        if let Some(api) = fullscreen {
            listeners.acquire(target, ListenerKind::FullscreenChange(api.change_event));
        }
        debug!(
            element = config.element_id(),
            listeners = listeners.len(),
            "viewport mounted"
        );
        Self {
            engine: Rc::new(RefCell::new(ZoomEngine::new(config))),
            listeners,
            polls: SmallVec::new(),
        }
    }

    /// Shared handle to the engine.
    #[must_use]
    pub fn engine(&self) -> &Rc<RefCell<ZoomEngine>> {
        &self.engine
    }

    /// Listeners currently registered.
    #[must_use]
    pub fn listeners(&self) -> &ListenerSet<T> {
        &self.listeners
    }

    /// Routes `event` to the engine. Returns `true` if it was consumed.
    ///
    /// An event delivered while the engine is already borrowed (from inside
    /// another callback) is dropped.
    pub fn dispatch(&self, event: InputEvent<'_>) -> bool {
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => engine.handle(event),
            Err(_) => {
                debug!(?event, "engine busy, event dropped");
                false
            }
        }
    }

    /// Current snapshot, or `None` if the engine is borrowed mutably.
    #[must_use]
    pub fn snapshot(&self) -> Option<ZoomSnapshot> {
        self.engine.try_borrow().ok().map(|engine| engine.snapshot())
    }

    /// Starts a dimension poll bound to this viewport.
    ///
    /// The poll stops working once the viewport is unmounted or dropped.
    /// Polls that finished, were cancelled or were dropped are forgotten.
    pub fn dimension_poll(&mut self) -> DimensionPoll {
        let cancelled = Rc::new(Cell::new(false));
        self.polls.retain(|flag| !flag.get() && Rc::strong_count(flag) > 1);
        self.polls.push(Rc::clone(&cancelled));
        DimensionPoll {
            engine: Rc::downgrade(&self.engine),
            cancelled,
        }
    }

    /// Releases every listener and cancels every poll.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<T: EventTarget> fmt::Debug for ZoomableViewport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomableViewport")
            .field("engine", &self.engine)
            .field("listeners", &self.listeners)
            .field("polls", &self.polls.len())
            .finish()
    }
}

impl<T: EventTarget> Drop for ZoomableViewport<T> {
    fn drop(&mut self) {
        for flag in &self.polls {
            flag.set(true);
        }
        self.listeners.release_all();
        debug!("viewport unmounted");
    }
}

/// Outcome of one [`DimensionPoll::attempt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollStep {
    /// The engine accepted the dimensions; stop polling.
    Ready,
    /// Try again after the given delay.
    RetryAfter(Duration),
    /// The poll was cancelled or its viewport is gone; stop polling.
    Cancelled,
}

/// Timed retry that feeds late video dimensions to an engine.
///
/// Videos may report `0 × 0` after their metadata event. The host reads the
/// dimensions again on a timer, calling [`attempt`](Self::attempt) each time
/// and scheduling the next attempt as told.
#[derive(Debug)]
pub struct DimensionPoll {
    engine: Weak<RefCell<ZoomEngine>>,
    cancelled: Rc<Cell<bool>>,
}

impl DimensionPoll {
    /// Offers `source` to the engine.
    ///
    /// After [`PollStep::Ready`] the poll is finished and later attempts
    /// return [`PollStep::Cancelled`].
    pub fn attempt(&self, source: MediaSource) -> PollStep {
        if self.cancelled.get() {
            return PollStep::Cancelled;
        }
        let Some(engine) = self.engine.upgrade() else {
            self.cancelled.set(true);
            debug!("dimension poll cancelled, viewport gone");
            return PollStep::Cancelled;
        };
        let Ok(mut engine) = engine.try_borrow_mut() else {
            return PollStep::RetryAfter(DIMENSION_RETRY_DELAY);
        };
        if engine.on_media_ready(source) {
            self.cancelled.set(true);
            PollStep::Ready
        } else {
            debug!(size = ?source.intrinsic_size(), "dimensions not ready, retrying");
            PollStep::RetryAfter(DIMENSION_RETRY_DELAY)
        }
    }

    /// Stops the poll; later attempts return [`PollStep::Cancelled`].
    pub fn cancel(&self) {
        if !self.cancelled.replace(true) {
            debug!("dimension poll cancelled");
        }
    }

    /// Returns `true` once the poll was cancelled or has finished.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

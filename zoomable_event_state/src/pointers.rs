// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-pointer tracking and pinch sampling.
//!
//! [`PointerTracker`] keeps the last known position of every active pointer
//! in registration order. The *pinch pair* is always the first two pointers
//! that were pressed and are still down; later pointers only contribute to
//! the [`centroid`](PointerTracker::centroid).
//!
//! [`PinchState`] turns successive pinch distances into a direction-only
//! signal. The first sample after a reset has nothing to compare against and
//! reports [`PinchSample::Started`].

use kurbo::Point;
use smallvec::SmallVec;

/// Active pointers and their last known positions, in registration order.
#[derive(Debug, Clone)]
pub struct PointerTracker<K> {
    entries: SmallVec<[(K, Point); 4]>,
}

impl<K> Default for PointerTracker<K> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }
}

impl<K: Copy + PartialEq> PointerTracker<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` at `pos`.
    ///
    /// A pointer that is already tracked keeps its place in the order and
    /// only has its position updated. Returns `true` if `id` is new.
    pub fn press(&mut self, id: K, pos: Point) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == id) {
            entry.1 = pos;
            false
        } else {
            self.entries.push((id, pos));
            true
        }
    }

    /// Updates the position of a tracked pointer.
    ///
    /// Returns `false` (and records nothing) if `id` is not tracked.
    pub fn move_to(&mut self, id: &K, pos: Point) -> bool {
        match self.entries.iter_mut().find(|(k, _)| k == id) {
            Some(entry) => {
                entry.1 = pos;
                true
            }
            None => false,
        }
    }

    /// Stops tracking `id`, preserving the order of the others.
    ///
    /// Returns `true` if the pointer was tracked.
    pub fn release(&mut self, id: &K) -> bool {
        match self.entries.iter().position(|(k, _)| k == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Stops tracking every pointer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of active pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no pointer is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `id` is active.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == id)
    }

    /// Position of the only active pointer, if exactly one is active.
    #[must_use]
    pub fn single(&self) -> Option<(K, Point)> {
        match self.entries.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Positions of the first two registered pointers.
    #[must_use]
    pub fn pinch_pair(&self) -> Option<(Point, Point)> {
        match self.entries.as_slice() {
            [(_, a), (_, b), ..] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Euclidean distance between the pinch pair.
    #[must_use]
    pub fn pinch_distance(&self) -> Option<f64> {
        self.pinch_pair().map(|(a, b)| a.distance(b))
    }

    /// Arithmetic mean of all active pointer positions.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        if self.entries.is_empty() {
            return None;
        }
        let (sx, sy, n) = self
            .entries
            .iter()
            .fold((0.0, 0.0, 0.0), |(sx, sy, n), (_, p)| (sx + p.x, sy + p.y, n + 1.0));
        Some(Point::new(sx / n, sy / n))
    }
}

/// Direction of a pinch relative to the previous sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchSample {
    /// First sample since the last reset; the distance was only recorded.
    Started,
    /// The pointers moved apart.
    Spread,
    /// The pointers moved together.
    Squeeze,
    /// The distance did not change.
    Steady,
}

/// Remembers the last pinch distance between samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    last_distance: Option<f64>,
}

impl PinchState {
    /// Records `distance` and compares it with the previous sample.
    ///
    /// Non-finite distances are ignored and reported as [`PinchSample::Steady`]
    /// (or [`PinchSample::Started`] if nothing has been recorded yet).
    pub fn sample(&mut self, distance: f64) -> PinchSample {
        if !distance.is_finite() {
            return if self.last_distance.is_some() {
                PinchSample::Steady
            } else {
                PinchSample::Started
            };
        }
        let Some(last) = self.last_distance.replace(distance) else {
            return PinchSample::Started;
        };
        if distance > last {
            PinchSample::Spread
        } else if distance < last {
            PinchSample::Squeeze
        } else {
            PinchSample::Steady
        }
    }

    /// Forgets the last distance so the next sample starts a new gesture.
    pub fn reset(&mut self) {
        self.last_distance = None;
    }

    /// The last recorded distance, if any.
    #[must_use]
    pub fn last_distance(&self) -> Option<f64> {
        self.last_distance
    }
}

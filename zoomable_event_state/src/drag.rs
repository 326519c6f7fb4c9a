// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: compute pan offsets from an anchor recorded at drag start.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], passing the pointer position and
//!    the content offset at that moment.
//! 2) On each move, call [`DragState::offset_for`] to get the new offset.
//!    The result is always `anchor offset + (pointer - anchor pointer)`, so
//!    float error does not accumulate over many moves.
//! 3) End the drag with [`DragState::end`]. Ending twice is harmless.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use zoomable_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0), Vec2::ZERO);
//! assert!(drag.is_dragging());
//!
//! let offset = drag.offset_for(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(offset, Vec2::new(5.0, 5.0));
//!
//! drag.end();
//! assert_eq!(drag.offset_for(Point::new(15.0, 25.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Pointer position and content offset captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Pointer position at the start of the drag.
    pub pointer: Point,
    /// Content offset at the start of the drag.
    pub offset: Vec2,
}

/// Tracks the anchor of the active drag, if any.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Anchor of the current drag operation.
    pub anchor: Option<DragAnchor>,
}

impl DragState {
    /// Start (or restart) a drag at `pointer` with the content at `offset`.
    pub fn start(&mut self, pointer: Point, offset: Vec2) {
        self.anchor = Some(DragAnchor { pointer, offset });
    }

    /// Offset the content should have with the pointer at `pointer`.
    pub fn offset_for(&self, pointer: Point) -> Option<Vec2> {
        self.anchor
            .map(|anchor| anchor.offset + (pointer - anchor.pointer))
    }

    /// End the current drag operation and reset state.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Returns `true` while a drag operation is active.
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.offset_for(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn offset_is_relative_to_anchor_offset() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 50.0), Vec2::new(-30.0, -20.0));

        assert_eq!(
            drag.offset_for(Point::new(90.0, 45.0)),
            Some(Vec2::new(-40.0, -25.0))
        );
        // Moves do not accumulate: the same position yields the same offset.
        assert_eq!(
            drag.offset_for(Point::new(90.0, 45.0)),
            Some(Vec2::new(-40.0, -25.0))
        );
    }

    #[test]
    fn many_small_moves_do_not_drift() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), Vec2::new(-100.0, -100.0));
        let mut last = Vec2::ZERO;
        for i in 0..10_000 {
            let p = Point::new(f64::from(i) * 0.1, f64::from(i) * -0.1);
            last = drag.offset_for(p).unwrap();
        }
        assert!((last.x - (-100.0 + 999.9)).abs() < 1e-9);
        assert!((last.y - (-100.0 - 999.9)).abs() < 1e-9);
    }

    #[test]
    fn end_resets_and_is_idempotent() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), Vec2::ZERO);
        drag.end();
        assert!(!drag.is_dragging());
        drag.end();
        assert!(drag.anchor.is_none());
    }

    #[test]
    fn start_overwrites_previous_anchor() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), Vec2::ZERO);
        drag.start(Point::new(50.0, 60.0), Vec2::new(-5.0, -5.0));
        assert_eq!(
            drag.offset_for(Point::new(55.0, 65.0)),
            Some(Vec2::new(0.0, 0.0))
        );
    }
}

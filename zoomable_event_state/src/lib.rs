// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomable Event State: input state machines for pan/zoom viewers.
//!
//! This crate provides small, focused state machines for the interactions a
//! zoomable media viewer needs to track across multiple events:
//!
//! - [`drag`]: Anchor a pan gesture at its start so every move is computed
//!   from the anchor rather than accumulated
//! - [`pointers`]: Track any number of simultaneous pointers in registration
//!   order, and sample pinch distance changes between the first two
//! - [`keys`]: Map key names onto directional pan actions, with modifier flags
//! - [`bounds`]: Detect a pointer that has drifted outside the viewport
//!
//! ## Design Philosophy
//!
//! Each state manager is:
//!
//! - **Minimal and focused**: one interaction pattern each
//! - **Owned per instance**: no global or shared state, so several viewers on
//!   one page never see each other's gestures
//! - **Generic where it matters**: pointer identifiers are any `Copy + Eq` type
//!
//! None of these types know about zoom or offsets clamping; the `zoomable`
//! crate combines them with `zoomable_view` geometry.
//!
//! ## Usage Patterns
//!
//! ### Drag anchoring
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use zoomable_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(100.0, 100.0), Vec2::new(-40.0, -10.0));
//!
//! // The offset for a pointer position is the anchor offset plus the total
//! // pointer travel since the anchor.
//! let offset = drag.offset_for(Point::new(90.0, 120.0)).unwrap();
//! assert_eq!(offset, Vec2::new(-50.0, 10.0));
//! ```
//!
//! ### Pinch sampling
//!
//! ```rust
//! use kurbo::Point;
//! use zoomable_event_state::pointers::{PinchSample, PinchState, PointerTracker};
//!
//! let mut pointers = PointerTracker::new();
//! let mut pinch = PinchState::default();
//! pointers.press(1_u32, Point::new(0.0, 0.0));
//! pointers.press(2_u32, Point::new(100.0, 0.0));
//!
//! // The first sample only records a distance.
//! let d = pointers.pinch_distance().unwrap();
//! assert_eq!(pinch.sample(d), PinchSample::Started);
//!
//! // Fingers spread apart.
//! pointers.move_to(&2, Point::new(150.0, 0.0));
//! let d = pointers.pinch_distance().unwrap();
//! assert_eq!(pinch.sample(d), PinchSample::Spread);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod bounds;
pub mod drag;
pub mod keys;
pub mod pointers;

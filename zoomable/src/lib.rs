// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomable: pan, wheel, pinch and keyboard zoom for embeddable media viewers.
//!
//! The center of this crate is [`ZoomEngine`], a headless state machine that
//! turns raw input into a zoom level and a pan offset for exactly one content
//! layer (an image, a video frame, a rendered page...) shown inside a
//! fixed-size viewport. It:
//! - Fits the media into the viewport box, letterboxed or pillarboxed.
//! - Zooms about the wheel cursor, the pinch centroid or the content centre.
//! - Pans with one pointer or the keyboard.
//! - Keeps the offset clamped so the zoomed content always covers its box.
//! - Refits when the viewport resizes or enters/leaves fullscreen.
//!
//! The engine publishes its state as an immutable [`ZoomSnapshot`], which
//! presentation code renders through a [`MediaAdapter`]. Hosts that manage
//! document listeners and late video dimensions can use
//! [`ZoomableViewport`], which owns the engine and releases everything it
//! registered on unmount.
//!
//! It does **not** decode media, draw anything, or provide UI chrome such as
//! zoom buttons or sliders; those call into the engine
//! ([`ZoomEngine::zoom_by_step`], [`ZoomEngine::set_zoom_percentage`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use zoomable::{InputEvent, MediaSource, ZoomEngine};
//!
//! let mut engine = ZoomEngine::default();
//! engine.handle(InputEvent::Resize { size: Size::new(810.0, 450.0), is_fullscreen: false });
//! assert!(engine.snapshot().is_loading);
//!
//! engine.handle(InputEvent::MediaReady(MediaSource::image(810.0, 450.0)));
//!
//! // Scroll up at the centre of the viewport.
//! engine.handle(InputEvent::Wheel { delta_y: 10.0, position: Point::new(405.0, 225.0) });
//!
//! let snapshot = engine.snapshot();
//! assert!((snapshot.zoom - 1.05).abs() < 1e-9);
//! assert!((snapshot.offset.x + 20.25).abs() < 1e-9);
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use zoomable::{MediaAdapter, ZoomEngine, ZoomSnapshot};
//!
//! let adapter = MediaAdapter::image(|s: &ZoomSnapshot| s.css_transform().to_string());
//! let frame = adapter.frame(&ZoomEngine::default().snapshot());
//!
//! assert!(frame.show_placeholder);
//! assert_eq!(frame.body, "translate(0px, 0px) scale(1)");
//! assert_eq!(frame.style.cursor.as_str(), "move");
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod event;
mod fullscreen;
mod listeners;
mod media;
mod render;
mod snapshot;
mod viewport;

pub use config::{ConfigError, ZoomConfig};
pub use engine::{PINCH_STEP, WHEEL_DELTA_LIMIT, ZoomEngine};
pub use event::{InputEvent, PointerId, ZoomDirection};
pub use fullscreen::{FULLSCREEN_APIS, FullscreenApi, ViewportBoxes};
pub use listeners::{EventTarget, ListenerGuard, ListenerKind, ListenerSet};
pub use media::{MediaKind, MediaSource, SourceRegion};
pub use render::{Frame, MediaAdapter, Render};
pub use snapshot::{CssTransform, Cursor, LayerStyle, TouchAction, ZoomSnapshot};
pub use viewport::{DIMENSION_RETRY_DELAY, DimensionPoll, PollStep, ZoomableViewport};

pub use zoomable_event_state::keys::{KeyAction, KeyBindings, Modifiers};

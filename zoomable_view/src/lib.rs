// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomable View: headless pan/zoom geometry for one content layer.
//!
//! This crate models a single rectangular content layer (an image, a video
//! frame, a rendered page) shown inside a fixed-size viewport. It focuses on:
//! - Fitting media with an intrinsic aspect ratio into a viewport box.
//! - Mapping the zoom factor to and from a `0..=100` percentage for sliders.
//! - Keeping the pan offset inside the range where the content never
//!   reveals empty space inside its own box.
//!
//! It does **not** know about input events or rendering. Callers are expected
//! to:
//! - Translate pointer, wheel and keyboard input into calls on
//!   [`ZoomViewport`] (the `zoomable` crate does this).
//! - Apply [`ZoomViewport::transform`] to the content layer, anchored at the
//!   layer's top-left corner.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use zoomable_view::{ZoomViewport, fit_content};
//!
//! // 1024x768 media in an 810x450 viewport is pillarboxed.
//! let fitted = fit_content(Size::new(1024.0, 768.0), Size::new(810.0, 450.0)).unwrap();
//! assert_eq!(fitted.height, 450.0);
//!
//! let mut view = ZoomViewport::new(4.0);
//! view.set_content_size(fitted);
//!
//! // Zoom in around the middle of the content box.
//! let center = Point::new(fitted.width / 2.0, fitted.height / 2.0);
//! view.zoom_about(center, 2.0);
//! assert_eq!(view.zoom(), 2.0);
//!
//! // The offset never moves the content past its own edges.
//! view.pan_by((10_000.0, 10_000.0).into());
//! assert_eq!(view.offset().x, 0.0);
//! assert_eq!(view.offset().y, 0.0);
//! ```
//!
//! ## Coordinate spaces
//!
//! - *Box space*: pixels relative to the top-left corner of the content
//!   layer's unzoomed layout box. Pointer positions must be translated into
//!   this space before zooming about them.
//! - *Content space*: coordinates inside the unzoomed content, i.e. box space
//!   with the current pan offset and zoom removed.
//!
//! `box = offset + content * zoom`.
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod scale;
mod viewport;

pub use fit::{content_origin, fit_content};
pub use scale::{LinearScale, ZoomScale};
pub use viewport::{ZoomViewport, ZoomViewportDebugInfo, clamp_offset};

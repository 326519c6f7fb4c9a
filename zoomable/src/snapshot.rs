// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable state snapshot adapters render from.

use core::fmt;

use kurbo::{Affine, Point, Size, Vec2};

/// Read-only view of an engine's state after the last event.
///
/// Snapshots are cheap to copy. Compare [`revision`](Self::revision) to skip
/// rendering when nothing changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomSnapshot {
    /// Zoom factor in `[1, max_zoom]`.
    pub zoom: f64,
    /// Zoom expressed as a percentage in `[0, 100]`.
    pub percentage: f64,
    /// Pan offset of the content layer's top-left corner.
    pub offset: Vec2,
    /// Fitted, unzoomed content size.
    pub content_size: Size,
    /// Top-left corner of the content box inside the viewport.
    pub content_origin: Point,
    /// Viewport box for the current fullscreen mode, if known.
    pub viewport_size: Option<Size>,
    /// At least one pointer is down.
    pub is_dragging: bool,
    /// The media has not reported usable dimensions yet.
    pub is_loading: bool,
    /// Input is accepted.
    pub enabled: bool,
    /// Bumped on every observable change.
    pub revision: u64,
}

impl ZoomSnapshot {
    /// Content-to-layer transform: `translate(offset) · scale(zoom)`.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Content-to-viewport transform, including the centering inset.
    #[must_use]
    pub fn viewport_transform(&self) -> Affine {
        Affine::translate(self.content_origin.to_vec2()) * self.transform()
    }

    /// The layer transform as a CSS `transform` value.
    #[must_use]
    pub fn css_transform(&self) -> CssTransform {
        CssTransform {
            offset: self.offset,
            zoom: self.zoom,
        }
    }

    /// Cursor to show over the viewport.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        if self.enabled {
            Cursor::Move
        } else {
            Cursor::Default
        }
    }

    /// Touch handling the platform should apply to the viewport.
    ///
    /// While enabled the engine handles every touch itself, so the
    /// platform's native panning and zooming are switched off.
    #[must_use]
    pub fn touch_action(&self) -> TouchAction {
        if self.enabled {
            TouchAction::None
        } else {
            TouchAction::Auto
        }
    }

    /// Everything needed to style the content layer.
    #[must_use]
    pub fn layer_style(&self) -> LayerStyle {
        LayerStyle {
            size: self.content_size,
            position: self.content_origin,
            transform: self.css_transform(),
            cursor: self.cursor(),
            touch_action: self.touch_action(),
        }
    }
}

/// `translate(Xpx, Ypx) scale(Z)`, printed with [`Display`](fmt::Display).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssTransform {
    /// Translation in pixels.
    pub offset: Vec2,
    /// Uniform scale.
    pub zoom: f64,
}

impl fmt::Display for CssTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding +0.0 turns -0.0 into 0.0.
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.offset.x + 0.0,
            self.offset.y + 0.0,
            self.zoom
        )
    }
}

/// Pointer cursor over the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// The platform default.
    Default,
    /// A move/grab cursor.
    Move,
}

impl Cursor {
    /// CSS keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
        }
    }
}

/// Native touch gesture policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// The platform handles touches normally.
    Auto,
    /// The platform performs no panning or zooming.
    None,
}

impl TouchAction {
    /// CSS keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::None => "none",
        }
    }
}

/// Style of the content layer.
///
/// The transform origin is always the layer's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    /// Layer size before the transform.
    pub size: Size,
    /// Layer position inside the viewport.
    pub position: Point,
    /// Layer transform.
    pub transform: CssTransform,
    /// Cursor over the layer.
    pub cursor: Cursor,
    /// Touch policy for the layer.
    pub touch_action: TouchAction,
}

impl LayerStyle {
    /// CSS `transform-origin` value.
    pub const TRANSFORM_ORIGIN: &'static str = "0 0";
}

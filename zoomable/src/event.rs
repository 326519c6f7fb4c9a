// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events accepted by [`ZoomEngine::handle`](crate::ZoomEngine::handle).

use kurbo::{Point, Size};
use zoomable_event_state::keys::Modifiers;

use crate::media::MediaSource;

/// Stable identifier of one pointer contact (mouse, pen or touch point).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Direction of a discrete zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Towards `max_zoom`.
    In,
    /// Towards fit.
    Out,
}

/// One unit of input for the engine.
///
/// Pointer, wheel and document positions are viewport-local: relative to the
/// top-left corner of the viewport's client rect, before any centering inset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<'a> {
    /// A pointer went down inside the viewport.
    PointerDown {
        /// Contact id.
        id: PointerId,
        /// Viewport-local position.
        position: Point,
    },
    /// A pointer moved.
    PointerMove {
        /// Contact id.
        id: PointerId,
        /// Viewport-local position.
        position: Point,
    },
    /// A pointer was lifted.
    PointerUp {
        /// Contact id.
        id: PointerId,
    },
    /// The platform cancelled a pointer.
    PointerCancel {
        /// Contact id.
        id: PointerId,
    },
    /// A pointer left the viewport element.
    PointerLeave {
        /// Contact id.
        id: PointerId,
    },
    /// Mouse wheel or trackpad scroll.
    Wheel {
        /// Raw vertical delta; positive zooms in.
        delta_y: f64,
        /// Viewport-local position of the cursor.
        position: Point,
    },
    /// A key was pressed while the viewer had focus.
    Key {
        /// Platform key name, e.g. `"ArrowUp"`.
        key: &'a str,
        /// Modifiers held with the key.
        modifiers: Modifiers,
    },
    /// The mouse moved anywhere in the document.
    DocumentPointerMove {
        /// Position relative to the viewport's client rect.
        position: Point,
    },
    /// The viewport box changed size.
    Resize {
        /// New client size.
        size: Size,
        /// Fullscreen status at the time of the resize.
        is_fullscreen: bool,
    },
    /// Fullscreen was entered or left.
    FullscreenChange {
        /// New fullscreen status.
        is_fullscreen: bool,
        /// Client size after the change, if already known.
        size: Option<Size>,
    },
    /// The media element reported its intrinsic dimensions.
    MediaReady(MediaSource),
    /// The owning viewport was enabled or disabled.
    SetEnabled(bool),
}

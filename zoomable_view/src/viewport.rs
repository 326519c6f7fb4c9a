// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Pan/zoom state of one content layer inside its layout box.
///
/// `ZoomViewport` tracks the fitted (unzoomed) content size, a uniform zoom
/// factor in `[1, max_zoom]` and a pan offset. It maintains the containment
/// invariant after every mutation:
///
/// - `offset.x ∈ [-(width · (zoom - 1)), 0]`, and likewise for `y`;
/// - at `zoom == 1` the offset is exactly zero.
///
/// All mutations clamp instead of failing; non-finite input is ignored.
#[derive(Clone, Debug)]
pub struct ZoomViewport {
    content_size: Size,
    zoom: f64,
    offset: Vec2,
    max_zoom: f64,
    content_to_box: Affine,
    box_to_content: Affine,
}

impl ZoomViewport {
    /// Creates a viewport with zoom `1`, zero offset and no content size.
    ///
    /// `max_zoom` is raised to `1` if smaller; callers that need to reject
    /// such values should validate them first.
    #[must_use]
    pub fn new(max_zoom: f64) -> Self {
        let mut vp = Self {
            content_size: Size::ZERO,
            zoom: 1.0,
            offset: Vec2::ZERO,
            max_zoom: sanitize_max_zoom(max_zoom),
            content_to_box: Affine::IDENTITY,
            box_to_content: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the fitted, unzoomed content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset of the layer's top-left corner.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the maximum zoom factor.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the fitted content size.
    ///
    /// When the size actually changes, the offset is rescaled by the ratio of
    /// new to old size on each axis (so the same region stays in view) and
    /// then clamped. Negative or non-finite sizes are ignored.
    ///
    /// Returns `true` if the size changed.
    pub fn set_content_size(&mut self, size: Size) -> bool {
        if !size.width.is_finite() || !size.height.is_finite() {
            return false;
        }
        if size.width < 0.0 || size.height < 0.0 || size == self.content_size {
            return false;
        }
        let old = self.content_size;
        let sx = if old.width > 0.0 { size.width / old.width } else { 1.0 };
        let sy = if old.height > 0.0 { size.height / old.height } else { 1.0 };
        self.content_size = size;
        self.offset = clamp_offset(
            Vec2::new(self.offset.x * sx, self.offset.y * sy),
            size,
            self.zoom,
        );
        self.rebuild_transforms();
        true
    }

    /// Sets the zoom factor while keeping `anchor` (in box space) fixed.
    ///
    /// The content point under `anchor` before the change maps back to the
    /// same box-space pixel afterwards, unless offset clamping has to pull
    /// the content back inside its box. `zoom` is clamped to `[1, max_zoom]`.
    pub fn zoom_about(&mut self, anchor: Point, zoom: f64) {
        if !zoom.is_finite() || !anchor.x.is_finite() || !anchor.y.is_finite() {
            return;
        }
        let new_zoom = zoom.clamp(1.0, self.max_zoom);
        let target = self.box_to_content * anchor;
        let new_offset = anchor.to_vec2() - target.to_vec2() * new_zoom;
        self.zoom = new_zoom;
        self.offset = clamp_offset(new_offset, self.content_size, new_zoom);
        self.rebuild_transforms();
    }

    /// Sets the zoom factor about the center of the content box.
    pub fn zoom_about_center(&mut self, zoom: f64) {
        let center = self.content_center();
        self.zoom_about(center, zoom);
    }

    /// Moves the layer so its top-left corner sits at `offset`, clamped.
    pub fn pan_to(&mut self, offset: Vec2) {
        let clamped = clamp_offset(offset, self.content_size, self.zoom);
        if clamped == self.offset {
            return;
        }
        self.offset = clamped;
        self.rebuild_transforms();
    }

    /// Moves the layer by `delta`, clamped.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.pan_to(self.offset + delta);
    }

    /// Restores zoom `1` and a zero offset. The content size is kept.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.offset = Vec2::ZERO;
        self.rebuild_transforms();
    }

    /// Returns the content-to-box transform: `translate(offset) · scale(zoom)`.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.content_to_box
    }

    /// Converts a content-space point into box space.
    #[must_use]
    pub fn content_to_box_point(&self, pt: Point) -> Point {
        self.content_to_box * pt
    }

    /// Converts a box-space point into content space.
    #[must_use]
    pub fn box_to_content_point(&self, pt: Point) -> Point {
        self.box_to_content * pt
    }

    /// Returns the part of the content visible through `window`.
    ///
    /// `window` is given in box space (for example the viewport's client rect
    /// translated by the content origin). The result is in content space and
    /// is clipped to the content bounds; it has zero area when nothing is
    /// visible.
    #[must_use]
    pub fn visible_content_rect(&self, window: Rect) -> Rect {
        let p0 = self.box_to_content * Point::new(window.x0, window.y0);
        let p1 = self.box_to_content * Point::new(window.x1, window.y1);
        let seen = Rect::from_points(p0, p1);
        let bounds = Rect::from_origin_size(Point::ORIGIN, self.content_size);
        let clipped = seen.intersect(bounds);
        if clipped.width() <= 0.0 || clipped.height() <= 0.0 {
            Rect::from_origin_size(clipped.origin(), Size::ZERO)
        } else {
            clipped
        }
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomViewportDebugInfo {
        ZoomViewportDebugInfo {
            content_size: self.content_size,
            zoom: self.zoom,
            offset: self.offset,
            max_zoom: self.max_zoom,
            offset_range_x: (-(self.content_size.width * (self.zoom - 1.0)), 0.0),
            offset_range_y: (-(self.content_size.height * (self.zoom - 1.0)), 0.0),
        }
    }

    fn content_center(&self) -> Point {
        Point::new(self.content_size.width / 2.0, self.content_size.height / 2.0)
    }

    fn rebuild_transforms(&mut self) {
        self.content_to_box = Affine::translate(self.offset) * Affine::scale(self.zoom);
        // Zoom is always >= 1, so the inverse exists.
        self.box_to_content = self.content_to_box.inverse();
    }
}

/// Clamps `offset` so the zoomed content still covers its own box.
///
/// Each axis lands in `[-(extent · (zoom - 1)), 0]`. At `zoom <= 1` (and for
/// non-finite offsets) the result is zero.
#[must_use]
pub fn clamp_offset(offset: Vec2, content_size: Size, zoom: f64) -> Vec2 {
    if zoom.is_nan() || zoom <= 1.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        clamp_axis(offset.x, content_size.width, zoom),
        clamp_axis(offset.y, content_size.height, zoom),
    )
}

fn clamp_axis(value: f64, extent: f64, zoom: f64) -> f64 {
    let min = -(extent * (zoom - 1.0));
    if !value.is_finite() || min.is_nan() || min >= 0.0 {
        return 0.0;
    }
    value.clamp(min, 0.0)
}

fn sanitize_max_zoom(max_zoom: f64) -> f64 {
    if max_zoom.is_finite() {
        max_zoom.max(1.0)
    } else {
        1.0
    }
}

/// Debug snapshot of a [`ZoomViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomViewportDebugInfo {
    /// Fitted, unzoomed content size.
    pub content_size: Size,
    /// Current zoom factor.
    pub zoom: f64,
    /// Current pan offset.
    pub offset: Vec2,
    /// Maximum zoom factor.
    pub max_zoom: f64,
    /// Allowed horizontal offset range `(min, max)` at the current zoom.
    pub offset_range_x: (f64, f64),
    /// Allowed vertical offset range `(min, max)` at the current zoom.
    pub offset_range_y: (f64, f64),
}

// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The zoom engine: input in, clamped geometry out.

use kurbo::{Point, Rect, Size, Vec2};
use tracing::{debug, trace};
use zoomable_event_state::bounds::is_outside;
use zoomable_event_state::drag::DragState;
use zoomable_event_state::keys::{KeyAction, Modifiers};
use zoomable_event_state::pointers::{PinchSample, PinchState, PointerTracker};
use zoomable_view::{ZoomScale, ZoomViewport, content_origin, fit_content};

use crate::config::{ConfigError, ZoomConfig};
use crate::event::{InputEvent, PointerId, ZoomDirection};
use crate::fullscreen::ViewportBoxes;
use crate::media::{MediaSource, SourceRegion};
use crate::snapshot::ZoomSnapshot;

/// Largest wheel delta (in either direction) applied per wheel event.
pub const WHEEL_DELTA_LIMIT: f64 = 0.5;

/// Zoom delta applied per pinch sample; only the direction of the pinch matters.
pub const PINCH_STEP: f64 = 0.5;

/// Pan/zoom state of one media viewer.
///
/// The engine owns the geometry of exactly one content layer and turns
/// pointer, wheel and keyboard input into a zoom factor and pan offset that
/// always satisfy the containment invariant of [`ZoomViewport`]. It never
/// fails: out-of-range input is clamped and non-finite input is dropped.
///
/// Positions passed to the engine are viewport-local. The content box is
/// centred in the viewport, and the engine subtracts that inset itself.
#[derive(Clone, Debug)]
pub struct ZoomEngine {
    config: ZoomConfig,
    scale: ZoomScale,
    view: ZoomViewport,
    percentage: f64,
    media: Option<MediaSource>,
    boxes: ViewportBoxes,
    enabled: bool,
    pointers: PointerTracker<PointerId>,
    drag: DragState,
    pinch: PinchState,
    revision: u64,
}

impl Default for ZoomEngine {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

impl ZoomEngine {
    /// Creates an enabled engine at zoom `1` with no media and no viewport box.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            scale: ZoomScale::new(config.max_zoom()),
            view: ZoomViewport::new(config.max_zoom()),
            config,
            percentage: 0.0,
            media: None,
            boxes: ViewportBoxes::default(),
            enabled: true,
            pointers: PointerTracker::new(),
            drag: DragState::default(),
            pinch: PinchState::default(),
            revision: 0,
        }
    }

    /// Validates the given values and creates an engine from them.
    ///
    /// See [`ZoomConfig::new`] for the accepted ranges.
    pub fn create(
        max_zoom: f64,
        wheel_zoom_ratio: f64,
        zoom_step: f64,
        move_step: f64,
    ) -> Result<Self, ConfigError> {
        ZoomConfig::new(max_zoom, wheel_zoom_ratio, zoom_step, move_step).map(Self::new)
    }

    /// Configuration the engine was built with.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.view.zoom()
    }

    /// Current zoom percentage in `[0, 100]`.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Current pan offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.view.offset()
    }

    /// Fitted, unzoomed content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.view.content_size()
    }

    /// Underlying geometry.
    #[must_use]
    pub fn viewport(&self) -> &ZoomViewport {
        &self.view
    }

    /// Cached viewport boxes and fullscreen status.
    #[must_use]
    pub fn viewport_boxes(&self) -> &ViewportBoxes {
        &self.boxes
    }

    /// The last accepted media readiness report.
    #[must_use]
    pub fn media(&self) -> Option<MediaSource> {
        self.media
    }

    /// Returns `true` if input is accepted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` while exactly one pointer is down.
    ///
    /// Two or more pointers form a pinch, which is not a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointers.len() == 1
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    /// Last recorded pinch distance, if a pinch is in progress.
    #[must_use]
    pub fn pinch_distance(&self) -> Option<f64> {
        self.pinch.last_distance()
    }

    /// Change counter; see [`ZoomSnapshot::revision`].
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Top-left corner of the content box inside the current viewport box.
    #[must_use]
    pub fn content_origin(&self) -> Point {
        match self.boxes.current() {
            Some(viewport) => content_origin(self.view.content_size(), viewport),
            None => Point::ORIGIN,
        }
    }

    /// Immutable copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> ZoomSnapshot {
        ZoomSnapshot {
            zoom: self.view.zoom(),
            percentage: self.percentage,
            offset: self.view.offset(),
            content_size: self.view.content_size(),
            content_origin: self.content_origin(),
            viewport_size: self.boxes.current(),
            is_dragging: self.is_dragging(),
            is_loading: self.media.is_none(),
            enabled: self.enabled,
            revision: self.revision,
        }
    }

    /// Restores zoom `1`, zero offset and percentage `0`, and forgets every
    /// pointer. Content size, media and viewport boxes are kept.
    pub fn reset(&mut self) {
        self.tracked(Self::reset_interaction);
    }

    /// Enables or disables input. A transition resets the engine.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.tracked(|engine| {
            engine.enabled = enabled;
            engine.reset_interaction();
        });
        debug!(enabled, "zoom input toggled");
    }

    /// Records the media's intrinsic size and fits it into the viewport box.
    ///
    /// Reports with zero or invalid dimensions are rejected and leave the
    /// engine untouched; returns `false` in that case. May be called again,
    /// for example when a video changes its frame size.
    pub fn on_media_ready(&mut self, media: MediaSource) -> bool {
        if !media.is_ready() {
            debug!(kind = ?media.kind(), size = ?media.intrinsic_size(), "media not ready");
            return false;
        }
        self.tracked(|engine| {
            engine.media = Some(media);
            engine.refit();
        });
        debug!(
            kind = ?media.kind(),
            size = ?media.intrinsic_size(),
            content = ?self.view.content_size(),
            "media ready"
        );
        true
    }

    /// The viewport box changed size.
    ///
    /// `size` is stored for the given fullscreen status, the content is
    /// refitted, and the offset is rescaled proportionally and clamped.
    pub fn on_viewport_resize(&mut self, size: Size, is_fullscreen: bool) {
        self.tracked(|engine| {
            engine.boxes.set_fullscreen(is_fullscreen);
            engine.boxes.record(size, is_fullscreen);
            engine.refit();
        });
    }

    /// Fullscreen was entered or left.
    ///
    /// Selects the box slot for `is_fullscreen`, stores `size` in it when
    /// given, and refits.
    pub fn on_fullscreen_change(&mut self, is_fullscreen: bool, size: Option<Size>) {
        self.tracked(|engine| {
            if engine.boxes.set_fullscreen(is_fullscreen) {
                debug!(is_fullscreen, "fullscreen changed");
            }
            if let Some(size) = size {
                engine.boxes.record(size, is_fullscreen);
            }
            engine.refit();
        });
    }

    /// Moves the percentage by one `zoom_step` and zooms about the content centre.
    pub fn zoom_by_step(&mut self, direction: ZoomDirection) {
        let step = self.config.zoom_step();
        let target = match direction {
            ZoomDirection::In => self.percentage + step,
            ZoomDirection::Out => self.percentage - step,
        };
        self.set_zoom_percentage(target);
    }

    /// Sets the zoom percentage, clamped to `[0, 100]`, about the content centre.
    ///
    /// Non-finite values are ignored.
    pub fn set_zoom_percentage(&mut self, percentage: f64) {
        if !percentage.is_finite() {
            return;
        }
        self.tracked(|engine| {
            let percentage = percentage.clamp(0.0, 100.0);
            engine.percentage = percentage;
            engine.view.zoom_about_center(engine.scale.zoom(percentage));
        });
    }

    /// Zooms by `delta` (scaled by `wheel_zoom_ratio` and the current zoom)
    /// keeping the content under the viewport-local `point` fixed.
    pub fn zoom_at_point(&mut self, delta: f64, point: Point) {
        if !delta.is_finite() || !point.x.is_finite() || !point.y.is_finite() {
            return;
        }
        self.tracked(|engine| engine.zoom_at(delta, point));
    }

    /// Applies a wheel event. The delta is clamped to
    /// `±`[`WHEEL_DELTA_LIMIT`]; positive values zoom in.
    ///
    /// Returns `false` if the engine is disabled.
    pub fn on_wheel(&mut self, delta_y: f64, point: Point) -> bool {
        if !self.enabled {
            return false;
        }
        if delta_y.is_nan() {
            return true;
        }
        let delta = delta_y.clamp(-WHEEL_DELTA_LIMIT, WHEEL_DELTA_LIMIT);
        self.zoom_at_point(delta, point);
        trace!(delta, zoom = self.view.zoom(), "wheel");
        true
    }

    /// A pointer went down.
    ///
    /// The drag anchor is recorded whenever exactly one pointer is down
    /// afterwards, including when `id` was already tracked because its up
    /// event never arrived.
    ///
    /// Returns `false` if the engine is disabled or the position is not finite.
    pub fn begin_drag(&mut self, id: PointerId, point: Point) -> bool {
        if !self.enabled || !point.x.is_finite() || !point.y.is_finite() {
            return false;
        }
        self.tracked(|engine| {
            if engine.pointers.press(id, point) {
                engine.pointer_count_changed();
            } else if engine.pointers.single().is_some() {
                engine.drag.start(point, engine.view.offset());
            }
        });
        debug!(pointer = id.0, pointers = self.pointers.len(), "pointer down");
        true
    }

    /// A tracked pointer moved.
    ///
    /// With one pointer down the content follows it; with two or more the
    /// first two form a pinch that zooms about the centroid of all pointers.
    /// Returns `false` for unknown pointers or while disabled.
    pub fn update_pointer(&mut self, id: PointerId, point: Point) -> bool {
        if !self.enabled || !point.x.is_finite() || !point.y.is_finite() {
            return false;
        }
        if !self.pointers.move_to(&id, point) {
            return false;
        }
        self.tracked(|engine| {
            if engine.pointers.len() == 1 {
                if let Some(offset) = engine.drag.offset_for(point) {
                    engine.view.pan_to(offset);
                }
                return;
            }
            let Some(distance) = engine.pointers.pinch_distance() else {
                return;
            };
            let sample = engine.pinch.sample(distance);
            let delta = match sample {
                PinchSample::Spread => PINCH_STEP,
                PinchSample::Squeeze => -PINCH_STEP,
                PinchSample::Started | PinchSample::Steady => return,
            };
            if let Some(centroid) = engine.pointers.centroid() {
                engine.zoom_at(delta, centroid);
            }
            trace!(?sample, distance, zoom = engine.view.zoom(), "pinch");
        });
        true
    }

    /// A pointer was lifted, cancelled or left the viewport.
    ///
    /// Ending an unknown pointer is a no-op and returns `false`.
    pub fn end_drag(&mut self, id: PointerId) -> bool {
        if !self.pointers.contains(&id) {
            return false;
        }
        self.tracked(|engine| {
            engine.pointers.release(&id);
            engine.pointer_count_changed();
        });
        debug!(pointer = id.0, pointers = self.pointers.len(), "pointer up");
        true
    }

    /// Ends every pointer at once.
    pub fn cancel_drag(&mut self) {
        if self.pointers.is_empty() {
            return;
        }
        self.tracked(|engine| {
            engine.pointers.clear();
            engine.pointer_count_changed();
        });
        debug!("drag cancelled");
    }

    /// The mouse moved somewhere in the document.
    ///
    /// While dragging, a viewport-local `point` outside the viewport box ends
    /// every pointer. Returns `true` if the drag was ended.
    pub fn on_document_pointer_move(&mut self, point: Point) -> bool {
        if self.pointers.is_empty() {
            return false;
        }
        let Some(client) = self.boxes.current() else {
            return false;
        };
        if !is_outside(point, client) {
            return false;
        }
        debug!(x = point.x, y = point.y, "pointer left viewport during drag");
        self.cancel_drag();
        true
    }

    /// Handles a key press. Returns `true` if the key was consumed.
    ///
    /// Directional keys move the content opposite to the view direction by
    /// `move_step`; with [`Modifiers::SHIFT`], left and right zoom out and in
    /// by one step instead.
    pub fn handle_key(&mut self, key: &str, modifiers: Modifiers) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(action) = self.config.key_bindings().action_for(key) else {
            return false;
        };
        let step = self.config.move_step();
        let shift = modifiers.contains(Modifiers::SHIFT);
        match action {
            KeyAction::Left if shift => self.zoom_by_step(ZoomDirection::Out),
            KeyAction::Right if shift => self.zoom_by_step(ZoomDirection::In),
            KeyAction::Up => self.pan_by(Vec2::new(0.0, step)),
            KeyAction::Down => self.pan_by(Vec2::new(0.0, -step)),
            KeyAction::Left => self.pan_by(Vec2::new(step, 0.0)),
            KeyAction::Right => self.pan_by(Vec2::new(-step, 0.0)),
        }
        true
    }

    /// Part of the intrinsic-resolution media visible through the viewport.
    ///
    /// Returns `None` before media and a viewport box are known, or when the
    /// visible area is empty.
    #[must_use]
    pub fn visible_source_region(&self) -> Option<SourceRegion> {
        let media = self.media?;
        let viewport = self.boxes.current()?;
        let content = self.view.content_size();
        if content.width <= 0.0 || content.height <= 0.0 {
            return None;
        }
        let origin = content_origin(content, viewport);
        let window = Rect::from_origin_size(Point::new(-origin.x, -origin.y), viewport);
        let visible = self.view.visible_content_rect(window);
        if visible.width() <= 0.0 || visible.height() <= 0.0 {
            return None;
        }
        let intrinsic = media.intrinsic_size();
        let sx = intrinsic.width / content.width;
        let sy = intrinsic.height / content.height;
        Some(SourceRegion {
            rect: Rect::new(
                visible.x0 * sx,
                visible.y0 * sy,
                visible.x1 * sx,
                visible.y1 * sy,
            ),
            intrinsic,
        })
    }

    /// Routes one input event. Returns `true` if it was consumed.
    pub fn handle(&mut self, event: InputEvent<'_>) -> bool {
        match event {
            InputEvent::PointerDown { id, position } => self.begin_drag(id, position),
            InputEvent::PointerMove { id, position } => self.update_pointer(id, position),
            InputEvent::PointerUp { id }
            | InputEvent::PointerCancel { id }
            | InputEvent::PointerLeave { id } => self.end_drag(id),
            InputEvent::Wheel { delta_y, position } => self.on_wheel(delta_y, position),
            InputEvent::Key { key, modifiers } => self.handle_key(key, modifiers),
            InputEvent::DocumentPointerMove { position } => {
                self.on_document_pointer_move(position)
            }
            InputEvent::Resize {
                size,
                is_fullscreen,
            } => {
                self.on_viewport_resize(size, is_fullscreen);
                true
            }
            InputEvent::FullscreenChange {
                is_fullscreen,
                size,
            } => {
                self.on_fullscreen_change(is_fullscreen, size);
                true
            }
            InputEvent::MediaReady(media) => self.on_media_ready(media),
            InputEvent::SetEnabled(enabled) => {
                self.set_enabled(enabled);
                true
            }
        }
    }

    fn pan_by(&mut self, delta: Vec2) {
        self.tracked(|engine| engine.view.pan_by(delta));
    }

    fn zoom_at(&mut self, delta: f64, point: Point) {
        let zoom = self.view.zoom();
        let anchor = point - self.content_origin().to_vec2();
        self.view
            .zoom_about(anchor, zoom + delta * self.config.wheel_zoom_ratio() * zoom);
        self.percentage = self.scale.percentage(self.view.zoom()).clamp(0.0, 100.0);
    }

    fn refit(&mut self) {
        let (Some(media), Some(viewport)) = (self.media, self.boxes.current()) else {
            return;
        };
        let Some(fitted) = fit_content(media.intrinsic_size(), viewport) else {
            return;
        };
        if self.view.set_content_size(fitted) {
            debug!(content = ?fitted, viewport = ?viewport, "content refitted");
        }
    }

    fn pointer_count_changed(&mut self) {
        self.pinch.reset();
        match self.pointers.single() {
            Some((_, point)) => self.drag.start(point, self.view.offset()),
            None if self.pointers.is_empty() => self.drag.end(),
            None => {}
        }
    }

    fn reset_interaction(&mut self) {
        self.view.reset();
        self.percentage = 0.0;
        self.pointers.clear();
        self.drag.end();
        self.pinch.reset();
    }

    fn tracked<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let before = self.snapshot();
        let out = f(self);
        if self.snapshot() != before {
            self.revision = self.revision.wrapping_add(1);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use kurbo::{Point, Size, Vec2};
    use zoomable_event_state::keys::Modifiers;

    use super::ZoomEngine;
    use crate::event::{PointerId, ZoomDirection};
    use crate::media::MediaSource;

    const A: PointerId = PointerId(1);
    const B: PointerId = PointerId(2);

    fn engine(viewport: Size, media: Size) -> ZoomEngine {
        let mut engine = ZoomEngine::default();
        engine.on_viewport_resize(viewport, false);
        assert!(engine.on_media_ready(MediaSource::image(media.width, media.height)));
        engine
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn wheel_at_centre_zooms_in_about_the_centre() {
        let mut e = engine(Size::new(810.0, 450.0), Size::new(810.0, 450.0));
        let centre = Point::new(405.0, 225.0);
        let before = e.viewport().box_to_content_point(centre);

        assert!(e.on_wheel(10.0, centre));
        assert_close(e.zoom(), 1.05);
        assert_close(e.offset().x, -20.25);
        assert_close(e.offset().y, -11.25);

        let after = e.viewport().box_to_content_point(centre);
        assert_close(after.x, before.x);
        assert_close(after.y, before.y);
    }

    #[test]
    fn wheel_out_at_fit_stays_at_fit() {
        let mut e = engine(Size::new(810.0, 450.0), Size::new(810.0, 450.0));
        e.on_wheel(-3.0, Point::new(10.0, 10.0));
        assert_eq!(e.zoom(), 1.0);
        assert_eq!(e.offset(), Vec2::ZERO);
        assert_eq!(e.percentage(), 0.0);
    }

    #[test]
    fn wheel_point_accounts_for_centering_inset() {
        // 2:1 media in a square box is letterboxed by 200px top and bottom.
        let mut e = engine(Size::new(800.0, 800.0), Size::new(400.0, 200.0));
        assert_eq!(e.content_size(), Size::new(800.0, 400.0));
        assert_eq!(e.content_origin(), Point::new(0.0, 200.0));

        e.zoom_at_point(10.0, Point::new(0.0, 200.0));
        assert_close(e.zoom(), 2.0);
        assert_eq!(e.offset(), Vec2::ZERO);
    }

    #[test]
    fn keyboard_pan_is_clamped_at_fit() {
        let mut e = engine(Size::new(810.0, 450.0), Size::new(810.0, 450.0));
        for key in ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight"] {
            assert!(e.handle_key(key, Modifiers::empty()));
            assert_eq!(e.offset(), Vec2::ZERO);
        }
        assert!(!e.handle_key("Enter", Modifiers::empty()));
    }

    #[test]
    fn keyboard_pan_moves_content_opposite_to_view() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.set_zoom_percentage(100.0);
        let start = e.offset();

        e.handle_key("ArrowRight", Modifiers::empty());
        assert_close(e.offset().x, start.x - 50.0);
        e.handle_key("ArrowDown", Modifiers::empty());
        assert_close(e.offset().y, start.y - 50.0);
        e.handle_key("ArrowLeft", Modifiers::empty());
        e.handle_key("ArrowUp", Modifiers::empty());
        assert_close(e.offset().x, start.x);
        assert_close(e.offset().y, start.y);
    }

    #[test]
    fn shift_arrows_step_the_zoom() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.handle_key("ArrowRight", Modifiers::SHIFT);
        assert_close(e.percentage(), 10.0);
        assert_close(e.zoom(), 1.3);
        e.handle_key("ArrowLeft", Modifiers::SHIFT | Modifiers::CONTROL);
        assert_close(e.percentage(), 0.0);
        assert_eq!(e.zoom(), 1.0);
    }

    #[test]
    fn steps_and_slider_are_clamped() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.set_zoom_percentage(95.0);
        e.zoom_by_step(ZoomDirection::In);
        assert_eq!(e.percentage(), 100.0);
        assert_eq!(e.zoom(), 4.0);

        e.set_zoom_percentage(-20.0);
        assert_eq!(e.percentage(), 0.0);
        assert_eq!(e.zoom(), 1.0);

        e.set_zoom_percentage(f64::NAN);
        assert_eq!(e.percentage(), 0.0);
    }

    #[test]
    fn slider_zoom_is_centred_on_the_content() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.set_zoom_percentage(100.0);
        assert_close(e.offset().x, -600.0);
        assert_close(e.offset().y, -450.0);
    }

    #[test]
    fn resize_rescales_the_offset() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.set_zoom_percentage(100.0);
        e.begin_drag(A, Point::new(0.0, 0.0));
        let x = -100.0 - e.offset().x;
        e.update_pointer(A, Point::new(x, 0.0));
        e.end_drag(A);
        assert_close(e.offset().x, -100.0);

        e.on_viewport_resize(Size::new(800.0, 600.0), false);
        assert_close(e.content_size().width, 800.0);
        assert_close(e.content_size().height, 600.0);
        assert_close(e.offset().x, -200.0);
    }

    #[test]
    fn zero_sized_media_is_rejected() {
        let mut e = ZoomEngine::default();
        e.on_viewport_resize(Size::new(810.0, 450.0), false);
        let revision = e.revision();

        assert!(!e.on_media_ready(MediaSource::video(0.0, 0.0)));
        assert_eq!(e.content_size(), Size::ZERO);
        assert_eq!(e.media(), None);
        assert!(e.snapshot().is_loading);
        assert_eq!(e.revision(), revision);

        assert!(e.on_media_ready(MediaSource::video(1920.0, 1080.0)));
        assert!(!e.snapshot().is_loading);
    }

    #[test]
    fn single_pointer_pans_from_the_anchor() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.set_zoom_percentage(100.0 / 3.0);
        let start = e.offset();

        e.begin_drag(A, Point::new(200.0, 150.0));
        e.update_pointer(A, Point::new(190.0, 140.0));
        e.update_pointer(A, Point::new(180.0, 130.0));
        assert_close(e.offset().x, start.x - 20.0);
        assert_close(e.offset().y, start.y - 20.0);
        assert!(e.is_dragging());
    }

    #[test]
    fn pressing_a_tracked_pointer_again_moves_the_anchor() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.set_zoom_percentage(100.0);
        assert_eq!(e.offset(), Vec2::new(-600.0, -450.0));

        e.begin_drag(A, Point::new(100.0, 100.0));
        e.update_pointer(A, Point::new(200.0, 150.0));
        let offset = e.offset();
        assert_eq!(offset, Vec2::new(-500.0, -400.0));

        // The up event was lost; the same pointer goes down elsewhere.
        assert!(e.begin_drag(A, Point::new(300.0, 250.0)));
        assert_eq!(e.active_pointers(), 1);
        e.update_pointer(A, Point::new(300.0, 250.0));
        assert_eq!(e.offset(), offset);
        e.update_pointer(A, Point::new(290.0, 240.0));
        assert_eq!(e.offset(), offset - Vec2::new(10.0, 10.0));
    }

    #[test]
    fn pinch_bookkeeping_and_idempotent_end() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.begin_drag(A, Point::new(100.0, 100.0));
        e.begin_drag(B, Point::new(200.0, 100.0));
        assert_eq!(e.active_pointers(), 2);
        assert!(!e.is_dragging());

        assert!(e.end_drag(A));
        assert_eq!(e.active_pointers(), 1);
        assert!(e.is_dragging());

        assert!(e.end_drag(B));
        assert_eq!(e.active_pointers(), 0);
        assert!(!e.is_dragging());

        let revision = e.revision();
        assert!(!e.end_drag(B));
        assert!(!e.end_drag(PointerId(99)));
        e.cancel_drag();
        assert_eq!(e.revision(), revision);
    }

    #[test]
    fn first_pinch_sample_only_records_the_distance() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.begin_drag(A, Point::new(100.0, 150.0));
        e.begin_drag(B, Point::new(300.0, 150.0));
        assert_eq!(e.pinch_distance(), None);

        e.update_pointer(B, Point::new(310.0, 150.0));
        assert_eq!(e.zoom(), 1.0);
        assert_eq!(e.pinch_distance(), Some(210.0));

        e.update_pointer(B, Point::new(320.0, 150.0));
        assert_close(e.zoom(), 1.05);
        e.update_pointer(B, Point::new(330.0, 150.0));
        assert_close(e.zoom(), 1.05 * 1.05);

        e.update_pointer(A, Point::new(110.0, 150.0));
        assert_close(e.zoom(), 1.05 * 1.05 * 0.95);
    }

    #[test]
    fn lifting_a_pinch_finger_continues_as_a_pan() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.set_zoom_percentage(50.0);
        e.begin_drag(A, Point::new(100.0, 150.0));
        e.begin_drag(B, Point::new(300.0, 150.0));
        e.update_pointer(B, Point::new(310.0, 150.0));
        e.update_pointer(B, Point::new(320.0, 150.0));

        e.end_drag(A);
        assert_eq!(e.pinch_distance(), None);
        let offset = e.offset();

        // The first move after the lift must not jump.
        e.update_pointer(B, Point::new(320.0, 150.0));
        assert_eq!(e.offset(), offset);
        e.update_pointer(B, Point::new(315.0, 145.0));
        assert_close(e.offset().x, offset.x - 5.0);
        assert_close(e.offset().y, offset.y - 5.0);
    }

    #[test]
    fn third_pointer_is_tolerated() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.begin_drag(A, Point::new(100.0, 150.0));
        e.begin_drag(B, Point::new(300.0, 150.0));
        e.begin_drag(PointerId(3), Point::new(200.0, 50.0));
        e.update_pointer(B, Point::new(310.0, 150.0));
        e.update_pointer(PointerId(3), Point::new(200.0, 290.0));
        assert_eq!(e.zoom(), 1.0);
        e.update_pointer(B, Point::new(330.0, 150.0));
        assert!(e.zoom() > 1.0);
        assert_eq!(e.active_pointers(), 3);
    }

    #[test]
    fn leaving_the_viewport_ends_the_drag() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        assert!(!e.on_document_pointer_move(Point::new(-10.0, 0.0)));

        e.begin_drag(A, Point::new(10.0, 10.0));
        assert!(!e.on_document_pointer_move(Point::new(400.0, 300.0)));
        assert!(e.is_dragging());
        assert!(e.on_document_pointer_move(Point::new(401.0, 10.0)));
        assert!(!e.is_dragging());
    }

    #[test]
    fn zero_sized_viewport_keeps_state_finite() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.set_zoom_percentage(50.0);
        e.on_viewport_resize(Size::ZERO, false);

        e.on_wheel(0.5, Point::new(0.0, 0.0));
        e.on_wheel(-0.5, Point::new(10.0, 10.0));
        e.begin_drag(A, Point::new(0.0, 0.0));
        e.update_pointer(A, Point::new(50.0, -20.0));
        e.begin_drag(B, Point::new(5.0, 5.0));
        e.update_pointer(B, Point::new(40.0, 40.0));
        e.update_pointer(B, Point::new(80.0, 80.0));
        e.handle_key("ArrowUp", Modifiers::empty());
        e.end_drag(A);
        e.end_drag(B);

        let s = e.snapshot();
        for value in [
            s.zoom,
            s.percentage,
            s.offset.x,
            s.offset.y,
            s.content_size.width,
            s.content_size.height,
            s.content_origin.x,
            s.content_origin.y,
        ] {
            assert!(value.is_finite(), "{s:?}");
        }
        assert!(s.zoom >= 1.0 && s.zoom <= 4.0);
        assert!((0.0..=100.0).contains(&s.percentage));
        assert!(s.css_transform().to_string().starts_with("translate("));
    }

    #[test]
    fn disabled_engine_ignores_input() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.set_enabled(false);
        assert!(!e.on_wheel(1.0, Point::new(10.0, 10.0)));
        assert!(!e.begin_drag(A, Point::new(10.0, 10.0)));
        assert!(!e.handle_key("ArrowUp", Modifiers::empty()));
        assert_eq!(e.zoom(), 1.0);
        assert!(!e.is_dragging());
    }

    #[test]
    fn enable_transition_resets_interaction_state() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        e.set_zoom_percentage(60.0);
        e.begin_drag(A, Point::new(10.0, 10.0));

        e.set_enabled(true);
        assert_close(e.percentage(), 60.0);

        e.set_enabled(false);
        assert_eq!(e.zoom(), 1.0);
        assert_eq!(e.percentage(), 0.0);
        assert_eq!(e.offset(), Vec2::ZERO);
        assert!(!e.is_dragging());
        assert_eq!(e.content_size().width, 400.0);
    }

    #[test]
    fn fullscreen_boxes_do_not_depend_on_event_order() {
        let viewport = Size::new(810.0, 450.0);
        let full = Size::new(1920.0, 1080.0);
        let media = MediaSource::video(1920.0, 1080.0);

        let mut resize_first = engine(viewport, full);
        resize_first.on_viewport_resize(full, true);
        resize_first.on_fullscreen_change(true, None);

        let mut change_first = ZoomEngine::default();
        change_first.on_viewport_resize(viewport, false);
        change_first.on_media_ready(media);
        change_first.on_fullscreen_change(true, Some(full));
        change_first.on_viewport_resize(full, true);

        for e in [&resize_first, &change_first] {
            assert_close(e.content_size().width, 1920.0);
            assert_close(e.content_size().height, 1080.0);
        }

        resize_first.on_fullscreen_change(false, None);
        assert_eq!(resize_first.viewport_boxes().current(), Some(viewport));
        assert_eq!(resize_first.content_size().height, 450.0);
    }

    #[test]
    fn visible_region_covers_everything_at_fit() {
        let e = engine(Size::new(800.0, 450.0), Size::new(400.0, 300.0));
        let region = e.visible_source_region().unwrap();
        assert_close(region.rect.x0, 0.0);
        assert_close(region.rect.y0, 0.0);
        assert_close(region.rect.x1, 400.0);
        assert_close(region.rect.y1, 300.0);
    }

    #[test]
    fn visible_region_follows_zoom_and_inset() {
        let mut e = engine(Size::new(800.0, 800.0), Size::new(1600.0, 800.0));
        e.zoom_at_point(10.0, Point::new(0.0, 200.0));
        assert_close(e.zoom(), 2.0);

        // The zoomed layer spills into the 200px inset below it, so the
        // viewport shows the top 300 content rows of the left half.
        let region = e.visible_source_region().unwrap();
        assert_close(region.rect.x0, 0.0);
        assert_close(region.rect.y0, 0.0);
        assert_close(region.rect.x1, 800.0);
        assert_close(region.rect.y1, 600.0);
        assert_eq!(region.intrinsic, Size::new(1600.0, 800.0));
    }

    #[test]
    fn visible_region_needs_media() {
        let mut e = ZoomEngine::default();
        assert_eq!(e.visible_source_region(), None);
        e.on_viewport_resize(Size::new(100.0, 100.0), false);
        assert_eq!(e.visible_source_region(), None);
    }

    #[test]
    fn revision_moves_only_on_change() {
        let mut e = engine(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        let r0 = e.revision();
        e.handle_key("ArrowUp", Modifiers::empty());
        assert_eq!(e.revision(), r0);
        e.on_wheel(1.0, Point::new(200.0, 150.0));
        assert!(e.revision() > r0);
    }
}

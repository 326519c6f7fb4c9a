// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fullscreen coordination: vendor API lookup and per-mode viewport boxes.
//!
//! Entering or leaving fullscreen changes the viewport box discontinuously,
//! and the resize events fired during the transition can report transient
//! sizes on some platforms. [`ViewportBoxes`] therefore keeps the normal and
//! fullscreen sizes in separate slots and always answers with the slot for
//! the *current* fullscreen status, so a resize and a fullscreen-change can
//! arrive in either order.

use kurbo::Size;

/// Names of one vendor's fullscreen API, keyed by the standard names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FullscreenApi {
    /// Document method that leaves fullscreen (`exitFullscreen`).
    pub exit: &'static str,
    /// Element method that enters fullscreen (`requestFullscreen`).
    pub request: &'static str,
    /// Document property holding the fullscreen element (`fullscreenElement`).
    pub element: &'static str,
    /// Event fired on the document when fullscreen changes (`fullscreenchange`).
    pub change_event: &'static str,
}

/// Known fullscreen APIs, in probing order: standard, WebKit, Mozilla, MS.
pub static FULLSCREEN_APIS: [FullscreenApi; 4] = [
    FullscreenApi {
        exit: "exitFullscreen",
        request: "requestFullscreen",
        element: "fullscreenElement",
        change_event: "fullscreenchange",
    },
    FullscreenApi {
        exit: "webkitExitFullscreen",
        request: "webkitRequestFullscreen",
        element: "webkitFullscreenElement",
        change_event: "webkitfullscreenchange",
    },
    FullscreenApi {
        exit: "mozCancelFullScreen",
        request: "mozRequestFullScreen",
        element: "mozFullScreenElement",
        change_event: "mozfullscreenchange",
    },
    FullscreenApi {
        exit: "msExitFullscreen",
        request: "msRequestFullscreen",
        element: "msFullscreenElement",
        change_event: "MSFullscreenChange",
    },
];

impl FullscreenApi {
    /// Finds the first API whose exit method the host reports as present.
    ///
    /// `has` answers whether the document exposes a member with the given
    /// name. Returns `None` when no fullscreen API exists.
    pub fn detect(has: impl Fn(&str) -> bool) -> Option<&'static Self> {
        FULLSCREEN_APIS.iter().find(|api| has(api.exit))
    }
}

/// Cached viewport box sizes for normal and fullscreen mode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportBoxes {
    normal: Option<Size>,
    fullscreen: Option<Size>,
    is_fullscreen: bool,
}

impl ViewportBoxes {
    /// Stores `size` in the slot for the given mode.
    ///
    /// Non-finite or negative sizes are ignored. Returns `true` if the slot
    /// changed.
    pub fn record(&mut self, size: Size, fullscreen: bool) -> bool {
        if !size.width.is_finite() || !size.height.is_finite() {
            return false;
        }
        if size.width < 0.0 || size.height < 0.0 {
            return false;
        }
        let slot = if fullscreen {
            &mut self.fullscreen
        } else {
            &mut self.normal
        };
        if *slot == Some(size) {
            return false;
        }
        *slot = Some(size);
        true
    }

    /// Sets the current fullscreen status. Returns `true` if it changed.
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        let changed = self.is_fullscreen != fullscreen;
        self.is_fullscreen = fullscreen;
        changed
    }

    /// Current fullscreen status.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Box size for the current mode, if one has been recorded.
    #[must_use]
    pub fn current(&self) -> Option<Size> {
        if self.is_fullscreen {
            self.fullscreen
        } else {
            self.normal
        }
    }

    /// Box size recorded for the given mode.
    #[must_use]
    pub fn get(&self, fullscreen: bool) -> Option<Size> {
        if fullscreen {
            self.fullscreen
        } else {
            self.normal
        }
    }
}

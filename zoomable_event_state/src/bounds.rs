// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Out-of-bounds detection for pointers that leave the viewport mid-drag.
//!
//! A viewport stops receiving its own pointer events once a fast drag carries
//! the cursor outside it, so the matching "up" may never arrive. Hosts listen
//! for pointer moves at the document level, translate them into
//! viewport-local coordinates, and end the drag when [`is_outside`] says so.

use kurbo::{Point, Size};

/// Returns `true` if a viewport-local point lies outside the client area.
///
/// The edges themselves count as inside. Non-finite coordinates count as
/// outside.
#[must_use]
pub fn is_outside(local: Point, client: Size) -> bool {
    if !local.x.is_finite() || !local.y.is_finite() {
        return true;
    }
    local.x < 0.0 || local.x > client.width || local.y < 0.0 || local.y > client.height
}

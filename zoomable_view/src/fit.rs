// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Fits media with the given intrinsic size into a viewport box, preserving
/// aspect ratio.
///
/// Wide media (relative to the viewport) is letterboxed: it takes the full
/// viewport width. Tall media is pillarboxed: it takes the full viewport
/// height.
///
/// Returns `None` when either size has a zero, negative or non-finite
/// dimension. Such sizes mean "not ready yet" and must never produce a
/// zero-area fit box or an aspect ratio of zero or infinity.
#[must_use]
pub fn fit_content(intrinsic: Size, viewport: Size) -> Option<Size> {
    if !is_usable(intrinsic) || !is_usable(viewport) {
        return None;
    }
    let intrinsic_ratio = intrinsic.width / intrinsic.height;
    let viewport_ratio = viewport.width / viewport.height;
    let fitted = if intrinsic_ratio >= viewport_ratio {
        Size::new(viewport.width, viewport.width / intrinsic_ratio)
    } else {
        Size::new(viewport.height * intrinsic_ratio, viewport.height)
    };
    is_usable(fitted).then_some(fitted)
}

/// Top-left corner of a centered content box inside the viewport.
///
/// The fit box is laid out centered, so on the axis where it is smaller than
/// the viewport it is inset by half the difference.
#[must_use]
pub fn content_origin(content: Size, viewport: Size) -> Point {
    let dx = (viewport.width - content.width) / 2.0;
    let dy = (viewport.height - content.height) / 2.0;
    Point::new(
        if dx.is_finite() { dx } else { 0.0 },
        if dy.is_finite() { dy } else { 0.0 },
    )
}

fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media readiness reports and the visible source region.

use kurbo::{Rect, Size};

/// What kind of element a viewport shows.
///
/// Chosen by the caller when the viewport is set up; the engine never
/// inspects the element to find out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// A still image that reports its natural size once decoded.
    Image,
    /// A video that reports its frame size after metadata (sometimes late).
    Video,
    /// Arbitrary laid-out content, such as a rendered document page.
    Content,
}

/// Intrinsic dimensions reported by the presentation layer when media is ready.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MediaSource {
    /// A decoded image.
    Image {
        /// Natural (full-resolution) size in pixels.
        natural: Size,
    },
    /// A video with known frame dimensions.
    Video {
        /// Frame size in pixels.
        frame: Size,
    },
    /// Laid-out content of a known size.
    Content {
        /// Layout size of the content.
        size: Size,
    },
}

impl MediaSource {
    /// An image with the given natural size.
    #[must_use]
    pub fn image(width: f64, height: f64) -> Self {
        Self::Image {
            natural: Size::new(width, height),
        }
    }

    /// A video with the given frame size.
    #[must_use]
    pub fn video(width: f64, height: f64) -> Self {
        Self::Video {
            frame: Size::new(width, height),
        }
    }

    /// Content with the given layout size.
    #[must_use]
    pub fn content(width: f64, height: f64) -> Self {
        Self::Content {
            size: Size::new(width, height),
        }
    }

    /// The kind of element this report came from.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Image { .. } => MediaKind::Image,
            Self::Video { .. } => MediaKind::Video,
            Self::Content { .. } => MediaKind::Content,
        }
    }

    /// Intrinsic size used for fitting.
    #[must_use]
    pub fn intrinsic_size(&self) -> Size {
        match *self {
            Self::Image { natural } => natural,
            Self::Video { frame } => frame,
            Self::Content { size } => size,
        }
    }

    /// Returns `true` if both dimensions are finite and positive.
    ///
    /// Videos in particular may report `0 × 0` right after their metadata
    /// event; such reports mean "not ready yet".
    #[must_use]
    pub fn is_ready(&self) -> bool {
        let size = self.intrinsic_size();
        size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
    }
}

/// The part of the full-resolution media currently visible in the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceRegion {
    /// Visible rectangle in intrinsic media pixels.
    pub rect: Rect,
    /// Intrinsic size the rectangle refers to.
    pub intrinsic: Size,
}

impl SourceRegion {
    /// Rescales the region onto a raster of a different size.
    ///
    /// Useful when the pixels at hand (for example a decoded thumbnail) do
    /// not match the intrinsic size the engine was told about.
    #[must_use]
    pub fn scaled_to(&self, raster: Size) -> Rect {
        if self.intrinsic.width <= 0.0 || self.intrinsic.height <= 0.0 {
            return Rect::ZERO;
        }
        let sx = raster.width / self.intrinsic.width;
        let sy = raster.height / self.intrinsic.height;
        Rect::new(
            self.rect.x0 * sx,
            self.rect.y0 * sy,
            self.rect.x1 * sx,
            self.rect.y1 * sy,
        )
    }
}

// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomable Capture: save what a zoomable viewer currently shows.
//!
//! A [`ZoomEngine`] knows which part of the full-resolution media is visible
//! through its viewport ([`ZoomEngine::visible_source_region`]). This crate
//! cuts that region out of the decoded pixels and encodes it as a PNG.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use zoomable::{MediaSource, ZoomEngine};
//! use zoomable_capture::{RgbaImage, capture_visible_region};
//!
//! let mut engine = ZoomEngine::default();
//! engine.on_viewport_resize(Size::new(64.0, 64.0), false);
//! engine.on_media_ready(MediaSource::image(64.0, 64.0));
//! engine.zoom_at_point(10.0, Point::ORIGIN); // 2x about the top-left corner
//!
//! let pixels = RgbaImage::new(64, 64, vec![255; 64 * 64 * 4]).unwrap();
//! let png = capture_visible_region(&engine, &pixels).unwrap().unwrap();
//! assert!(png.starts_with(b"\x89PNG"));
//! ```
//!
//! The source pixels do not have to be at the intrinsic resolution the
//! engine was told about; the region is rescaled to the raster's size.

use std::fmt;

use kurbo::{Rect, Size};
use tracing::{debug, warn};
use zoomable::ZoomEngine;

/// A tightly packed 8-bit RGBA raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Wraps `data`, which must hold exactly `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CaptureError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        if width == 0 || height == 0 || expected != Some(data.len()) {
            warn!(width, height, len = data.len(), "rejected capture raster");
            return Err(CaptureError::InvalidRaster {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raster size as a kurbo [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Row-major RGBA bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns its bytes.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value of one pixel.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Copies the pixels covered by `region` (in raster pixels) into a new image.
///
/// The region is rounded to whole pixels and clipped to the raster. Returns
/// `None` if nothing is left.
#[must_use]
pub fn crop(source: &RgbaImage, region: Rect) -> Option<RgbaImage> {
    let x0 = to_pixel(region.x0, source.width);
    let y0 = to_pixel(region.y0, source.height);
    let x1 = to_pixel(region.x1, source.width);
    let y1 = to_pixel(region.y1, source.height);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    let stride = source.width as usize * 4;
    let row = (x1 - x0) as usize * 4;
    let mut data = Vec::with_capacity(row * (y1 - y0) as usize);
    for y in y0..y1 {
        let start = y as usize * stride + x0 as usize * 4;
        data.extend_from_slice(&source.data[start..start + row]);
    }
    Some(RgbaImage {
        width: x1 - x0,
        height: y1 - y0,
        data,
    })
}

/// Encodes `image` as an 8-bit RGBA PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, CaptureError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, image.width, image.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image.data)?;
        writer.finish()?;
    }
    Ok(out)
}

/// Crops the region visible in `engine` out of `source` and encodes it as PNG.
///
/// Returns `Ok(None)` when the engine has no media or viewport yet, or when
/// nothing is visible.
pub fn capture_visible_region(
    engine: &ZoomEngine,
    source: &RgbaImage,
) -> Result<Option<Vec<u8>>, CaptureError> {
    let Some(region) = engine.visible_source_region() else {
        return Ok(None);
    };
    let raster = source.size();
    let rect = if raster == region.intrinsic {
        region.rect
    } else {
        region.scaled_to(raster)
    };
    let Some(cropped) = crop(source, rect) else {
        return Ok(None);
    };
    debug!(
        width = cropped.width,
        height = cropped.height,
        "captured visible region"
    );
    encode_png(&cropped).map(Some)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "rounded and clamped to [0, limit] first"
)]
fn to_pixel(value: f64, limit: u32) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(limit)) as u32
}

/// Capturing failed.
#[derive(Debug)]
pub enum CaptureError {
    /// The raster's byte length does not match its dimensions, or a
    /// dimension is zero.
    InvalidRaster {
        /// Claimed width.
        width: u32,
        /// Claimed height.
        height: u32,
        /// Actual byte length.
        len: usize,
    },
    /// The PNG encoder failed.
    Encode(png::EncodingError),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRaster { width, height, len } => write!(
                f,
                "raster of {width}x{height} RGBA pixels cannot hold {len} bytes"
            ),
            Self::Encode(err) => write!(f, "PNG encoding failed: {err}"),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRaster { .. } => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<png::EncodingError> for CaptureError {
    fn from(err: png::EncodingError) -> Self {
        Self::Encode(err)
    }
}

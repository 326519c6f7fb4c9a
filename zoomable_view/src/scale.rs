// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A linear map from a domain interval onto a range interval.
///
/// Endpoints map exactly: `map(domain_start) == range_start` and
/// `map(domain_stop) == range_stop` with no rounding error, which keeps
/// slider extremes and zoom extremes in lockstep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_stop: f64,
    range_start: f64,
    range_stop: f64,
}

impl LinearScale {
    /// Creates a scale mapping `domain_start..=domain_stop` onto
    /// `range_start..=range_stop`.
    #[must_use]
    pub const fn new(domain_start: f64, domain_stop: f64, range_start: f64, range_stop: f64) -> Self {
        Self {
            domain_start,
            domain_stop,
            range_start,
            range_stop,
        }
    }

    /// Maps `value` from the domain into the range.
    ///
    /// Values outside the domain extrapolate linearly. A degenerate (empty)
    /// domain maps everything to `range_start`.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain_stop - self.domain_start;
        if span == 0.0 {
            return self.range_start;
        }
        let t = (value - self.domain_start) / span;
        // Weighted form so that t == 0 and t == 1 are exact.
        self.range_start * (1.0 - t) + self.range_stop * t
    }

    /// Returns the scale going the other way.
    #[must_use]
    pub const fn invert(&self) -> Self {
        Self::new(
            self.range_start,
            self.range_stop,
            self.domain_start,
            self.domain_stop,
        )
    }
}

/// The pair of scales relating a zoom factor in `[1, max_zoom]` to a
/// percentage in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomScale {
    to_percentage: LinearScale,
    to_zoom: LinearScale,
}

impl ZoomScale {
    /// Creates the scales for the zoom range `[1, max_zoom]`.
    #[must_use]
    pub fn new(max_zoom: f64) -> Self {
        let to_percentage = LinearScale::new(1.0, max_zoom, 0.0, 100.0);
        Self {
            to_percentage,
            to_zoom: to_percentage.invert(),
        }
    }

    /// Percentage for a zoom factor.
    #[must_use]
    pub fn percentage(&self, zoom: f64) -> f64 {
        self.to_percentage.map(zoom)
    }

    /// Zoom factor for a percentage.
    #[must_use]
    pub fn zoom(&self, percentage: f64) -> f64 {
        self.to_zoom.map(percentage)
    }
}

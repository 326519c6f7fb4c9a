// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration and its validation errors.

use alloc::string::String;
use core::fmt;

use zoomable_event_state::keys::KeyBindings;

/// Static configuration of one zoomable viewport.
///
/// Built with [`ZoomConfig::new`], which rejects values that would produce a
/// degenerate zoom range, or taken from [`ZoomConfig::default`]. The values
/// stay fixed for the lifetime of the engine built from it.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomConfig {
    max_zoom: f64,
    wheel_zoom_ratio: f64,
    zoom_step: f64,
    move_step: f64,
    key_bindings: KeyBindings,
    element_id: Option<String>,
}

impl ZoomConfig {
    /// Default maximum zoom factor.
    pub const DEFAULT_MAX_ZOOM: f64 = 4.0;
    /// Default wheel sensitivity.
    pub const DEFAULT_WHEEL_ZOOM_RATIO: f64 = 0.1;
    /// Default percentage step for discrete zoom actions.
    pub const DEFAULT_ZOOM_STEP: f64 = 10.0;
    /// Default keyboard pan distance in pixels.
    pub const DEFAULT_MOVE_STEP: f64 = 50.0;

    /// Validates and builds a configuration.
    ///
    /// - `max_zoom` must be greater than `1`.
    /// - `wheel_zoom_ratio` must be positive.
    /// - `zoom_step` must be in `(0, 100]`.
    /// - `move_step` must be positive.
    ///
    /// Every value must be finite.
    pub fn new(
        max_zoom: f64,
        wheel_zoom_ratio: f64,
        zoom_step: f64,
        move_step: f64,
    ) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("max_zoom", max_zoom),
            ("wheel_zoom_ratio", wheel_zoom_ratio),
            ("zoom_step", zoom_step),
            ("move_step", move_step),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if max_zoom <= 1.0 {
            return Err(ConfigError::MaxZoomTooSmall(max_zoom));
        }
        if wheel_zoom_ratio <= 0.0 {
            return Err(ConfigError::NonPositiveWheelRatio(wheel_zoom_ratio));
        }
        if zoom_step <= 0.0 || zoom_step > 100.0 {
            return Err(ConfigError::ZoomStepOutOfRange(zoom_step));
        }
        if move_step <= 0.0 {
            return Err(ConfigError::NonPositiveMoveStep(move_step));
        }
        Ok(Self {
            max_zoom,
            wheel_zoom_ratio,
            zoom_step,
            move_step,
            key_bindings: KeyBindings::default(),
            element_id: None,
        })
    }

    /// Replaces the directional key bindings.
    #[must_use]
    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    /// Sets the element identifier hosts use for focus and lookup.
    #[must_use]
    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Maximum zoom factor.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Wheel (and pinch) sensitivity multiplier.
    #[must_use]
    pub fn wheel_zoom_ratio(&self) -> f64 {
        self.wheel_zoom_ratio
    }

    /// Percentage moved by one discrete zoom action.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Pixels moved by one keyboard pan.
    #[must_use]
    pub fn move_step(&self) -> f64 {
        self.move_step
    }

    /// Directional key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Element identifier, if one was set.
    #[must_use]
    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_zoom: Self::DEFAULT_MAX_ZOOM,
            wheel_zoom_ratio: Self::DEFAULT_WHEEL_ZOOM_RATIO,
            zoom_step: Self::DEFAULT_ZOOM_STEP,
            move_step: Self::DEFAULT_MOVE_STEP,
            key_bindings: KeyBindings::default(),
            element_id: None,
        }
    }
}

/// A configuration value was rejected by [`ZoomConfig::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A value was NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// `max_zoom` was not greater than `1`.
    MaxZoomTooSmall(f64),
    /// `wheel_zoom_ratio` was zero or negative.
    NonPositiveWheelRatio(f64),
    /// `zoom_step` was outside `(0, 100]`.
    ZoomStepOutOfRange(f64),
    /// `move_step` was zero or negative.
    NonPositiveMoveStep(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "`{field}` must be finite"),
            Self::MaxZoomTooSmall(v) => write!(f, "max zoom must be greater than 1, got {v}"),
            Self::NonPositiveWheelRatio(v) => {
                write!(f, "wheel zoom ratio must be positive, got {v}")
            }
            Self::ZoomStepOutOfRange(v) => {
                write!(f, "zoom step must be in (0, 100], got {v}")
            }
            Self::NonPositiveMoveStep(v) => write!(f, "move step must be positive, got {v}"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use zoomable_event_state::keys::KeyBindings;

    use super::{ConfigError, ZoomConfig};

    #[test]
    fn default_is_valid() {
        let d = ZoomConfig::default();
        let v = ZoomConfig::new(d.max_zoom(), d.wheel_zoom_ratio(), d.zoom_step(), d.move_step())
            .unwrap();
        assert_eq!(d, v);
    }

    #[test]
    fn rejects_degenerate_zoom_range() {
        assert_eq!(
            ZoomConfig::new(1.0, 0.1, 10.0, 50.0),
            Err(ConfigError::MaxZoomTooSmall(1.0))
        );
        assert_eq!(
            ZoomConfig::new(0.5, 0.1, 10.0, 50.0),
            Err(ConfigError::MaxZoomTooSmall(0.5))
        );
    }

    #[test]
    fn rejects_each_invalid_field() {
        assert_eq!(
            ZoomConfig::new(4.0, 0.0, 10.0, 50.0),
            Err(ConfigError::NonPositiveWheelRatio(0.0))
        );
        assert_eq!(
            ZoomConfig::new(4.0, 0.1, 0.0, 50.0),
            Err(ConfigError::ZoomStepOutOfRange(0.0))
        );
        assert_eq!(
            ZoomConfig::new(4.0, 0.1, 100.5, 50.0),
            Err(ConfigError::ZoomStepOutOfRange(100.5))
        );
        assert_eq!(
            ZoomConfig::new(4.0, 0.1, 10.0, -1.0),
            Err(ConfigError::NonPositiveMoveStep(-1.0))
        );
        assert_eq!(
            ZoomConfig::new(f64::INFINITY, 0.1, 10.0, 50.0),
            Err(ConfigError::NonFinite { field: "max_zoom" })
        );
        assert!(ZoomConfig::new(4.0, 0.1, 100.0, 50.0).is_ok());
    }

    #[test]
    fn builder_sets_optional_fields() {
        let config = ZoomConfig::default()
            .with_key_bindings(KeyBindings::new("w", "s", "a", "d"))
            .with_element_id("viewer");
        assert_eq!(config.element_id(), Some("viewer"));
        assert_eq!(config.key_bindings().key_for(zoomable_event_state::keys::KeyAction::Up), "w");
    }

    #[test]
    fn errors_display_the_value() {
        let msg = ConfigError::MaxZoomTooSmall(0.5).to_string();
        assert_eq!(msg, "max zoom must be greater than 1, got 0.5");
    }
}

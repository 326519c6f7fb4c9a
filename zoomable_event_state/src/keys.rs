// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard bindings for directional navigation.
//!
//! Keys are matched by their platform key name (the DOM `KeyboardEvent.key`
//! value, or the equivalent string from a native toolkit). The four
//! directional actions default to the arrow keys and can be rebound.
//!
//! ```
//! use zoomable_event_state::keys::{KeyAction, KeyBindings};
//!
//! let wasd = KeyBindings::new("w", "s", "a", "d");
//! assert_eq!(wasd.action_for("a"), Some(KeyAction::Left));
//! assert_eq!(wasd.action_for("ArrowLeft"), None);
//! ```

use alloc::string::String;

/// A directional navigation action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Navigate up.
    Up,
    /// Navigate down.
    Down,
    /// Navigate left.
    Left,
    /// Navigate right.
    Right,
}

/// Key names bound to each [`KeyAction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    up: String,
    down: String,
    left: String,
    right: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new("ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight")
    }
}

impl KeyBindings {
    /// Binds the four directional actions to the given key names.
    #[must_use]
    pub fn new(
        up: impl Into<String>,
        down: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            up: up.into(),
            down: down.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    /// Returns the action bound to `key`, if any.
    ///
    /// If the same name is bound to several actions, the first of
    /// up, down, left, right wins.
    #[must_use]
    pub fn action_for(&self, key: &str) -> Option<KeyAction> {
        if key == self.up {
            Some(KeyAction::Up)
        } else if key == self.down {
            Some(KeyAction::Down)
        } else if key == self.left {
            Some(KeyAction::Left)
        } else if key == self.right {
            Some(KeyAction::Right)
        } else {
            None
        }
    }

    /// Key name bound to `action`.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> &str {
        match action {
            KeyAction::Up => &self.up,
            KeyAction::Down => &self.down,
            KeyAction::Left => &self.left,
            KeyAction::Right => &self.right,
        }
    }
}

bitflags::bitflags! {
    /// Modifier keys held during a key or pointer event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift is held.
        const SHIFT   = 0b0000_0001;
        /// Control is held.
        const CONTROL = 0b0000_0010;
        /// Alt / Option is held.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Windows is held.
        const META    = 0b0000_1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

#![forbid(unsafe_code)]

//! Keyboard adapter: discrete, instantaneous divider adjustment.
//!
//! The divider is focusable; the two arrow keys aligned with the travel
//! axis step the size by a fixed amount, and Home/End jump to the bounds.
//! No drag session is created and no global listeners are involved, so this
//! adapter is stateless apart from its configuration.

use serde::{Deserialize, Serialize};
use splitrail_core::{Axis, ResizeController, ResizeStep, ResizeTransition};
use std::fmt;

/// Default arrow-key step in pixel-equivalent units.
pub const DEFAULT_KEYBOARD_STEP: f64 = 10.0;

/// Keys the divider responds to while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
}

/// Adapter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyboardAdapterConfig {
    /// Size change per arrow-key press. Must be finite and positive.
    pub step: f64,
}

impl Default for KeyboardAdapterConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_KEYBOARD_STEP,
        }
    }
}

/// Keyboard configuration failures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyboardConfigError {
    InvalidStep { step: f64 },
}

impl fmt::Display for KeyboardConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStep { step } => {
                write!(f, "keyboard step must be finite and positive (got {step})")
            }
        }
    }
}

impl std::error::Error for KeyboardConfigError {}

/// Why a key press was rejected before reaching the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyIgnoredReason {
    /// An arrow key perpendicular to the travel axis.
    PerpendicularArrow,
}

/// Result of one key dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyDispatch {
    pub transition: Option<ResizeTransition>,
    pub ignored: Option<KeyIgnoredReason>,
}

/// Keyboard adapter with a validated step constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyboardResizeAdapter {
    step: f64,
}

impl Default for KeyboardResizeAdapter {
    fn default() -> Self {
        Self {
            step: DEFAULT_KEYBOARD_STEP,
        }
    }
}

impl KeyboardResizeAdapter {
    /// Construct an adapter with a validated step.
    pub fn new(config: KeyboardAdapterConfig) -> Result<Self, KeyboardConfigError> {
        if !config.step.is_finite() || config.step <= 0.0 {
            return Err(KeyboardConfigError::InvalidStep { step: config.step });
        }
        Ok(Self { step: config.step })
    }

    /// Configured arrow-key step.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Handle a key press on the focused divider.
    ///
    /// The two arrows aligned with the travel axis map to decrease/increase
    /// (left/up shrink the leading pane, right/down grow it); Home and End
    /// jump to the minimum and maximum bound. Perpendicular arrows are
    /// ignored so the host can let them bubble.
    pub fn key_down(&self, controller: &mut ResizeController, key: DividerKey) -> KeyDispatch {
        let step = match (controller.axis(), key) {
            (Axis::Horizontal, DividerKey::ArrowLeft) | (Axis::Vertical, DividerKey::ArrowUp) => {
                ResizeStep::Decrease { amount: self.step }
            }
            (Axis::Horizontal, DividerKey::ArrowRight)
            | (Axis::Vertical, DividerKey::ArrowDown) => ResizeStep::Increase { amount: self.step },
            (_, DividerKey::Home) => ResizeStep::ToMinimum,
            (_, DividerKey::End) => ResizeStep::ToMaximum,
            _ => {
                return KeyDispatch {
                    transition: None,
                    ignored: Some(KeyIgnoredReason::PerpendicularArrow),
                };
            }
        };
        KeyDispatch {
            transition: Some(controller.apply_step(step)),
            ignored: None,
        }
    }
}

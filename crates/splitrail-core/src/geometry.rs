#![forbid(unsafe_code)]

//! Shared `f64` geometry for the split primitive.
//!
//! Sizes and positions are pixel-equivalent units and may be fractional, so
//! everything here is `f64` rather than cell-grid integers.

use serde::{Deserialize, Serialize};

use crate::controller::Axis;

/// A position in pixel-equivalent units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The coordinate along the divider's travel axis: `x` for
    /// [`Axis::Horizontal`], `y` for [`Axis::Vertical`].
    #[must_use]
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// An axis-aligned rectangle in pixel-equivalent units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Extent along the divider's travel axis.
    #[must_use]
    pub const fn extent(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

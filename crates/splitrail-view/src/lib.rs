#![forbid(unsafe_code)]

//! Pure layout and accessibility metadata for the split primitive.
//!
//! [`SplitLayout`] solves a bounds rectangle into leading pane, divider, and
//! trailing pane regions; [`DividerAccessibility`] describes the divider for
//! assistive technology. Both are pure functions of the controller's
//! observable state — this crate holds no state of its own, so a host can
//! re-solve on every accepted size change without bookkeeping.

use serde::{Deserialize, Serialize};
use splitrail_core::{Axis, Rect, ResizeController};

/// Divider thickness used when none is configured, in pixel-equivalent
/// units.
pub const DEFAULT_DIVIDER_THICKNESS: f64 = 6.0;

/// Solved regions: leading pane, divider strip, trailing pane.
///
/// The three regions partition the bounds along the travel axis; extents
/// are floored at zero, so degenerate bounds produce empty regions rather
/// than negative ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaneRegions {
    pub leading: Rect,
    pub divider: Rect,
    pub trailing: Rect,
}

/// Stateless solver for the two panes plus divider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitLayout {
    pub divider_thickness: f64,
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self {
            divider_thickness: DEFAULT_DIVIDER_THICKNESS,
        }
    }
}

impl SplitLayout {
    #[must_use]
    pub const fn new(divider_thickness: f64) -> Self {
        Self { divider_thickness }
    }

    /// Solve `bounds` into pane regions at the controller's current size.
    ///
    /// The leading pane takes the controller size (capped to what the
    /// bounds can hold once the divider is placed), the trailing pane takes
    /// the remainder. The cap here is presentational only; the controller's
    /// own constraints remain the source of truth for the size value.
    #[must_use]
    pub fn solve(&self, bounds: Rect, controller: &ResizeController) -> PaneRegions {
        let axis = controller.axis();
        let total = bounds.extent(axis).max(0.0);
        let thickness = self.divider_thickness.clamp(0.0, total);
        let available = (total - thickness).max(0.0);
        let leading = controller.size().clamp(0.0, available);
        let trailing = available - leading;

        match axis {
            Axis::Horizontal => PaneRegions {
                leading: Rect::new(bounds.x, bounds.y, leading, bounds.height),
                divider: Rect::new(bounds.x + leading, bounds.y, thickness, bounds.height),
                trailing: Rect::new(
                    bounds.x + leading + thickness,
                    bounds.y,
                    trailing,
                    bounds.height,
                ),
            },
            Axis::Vertical => PaneRegions {
                leading: Rect::new(bounds.x, bounds.y, bounds.width, leading),
                divider: Rect::new(bounds.x, bounds.y + leading, bounds.width, thickness),
                trailing: Rect::new(
                    bounds.x,
                    bounds.y + leading + thickness,
                    bounds.width,
                    trailing,
                ),
            },
        }
    }
}

/// Assistive-technology description of the divider element.
///
/// Maps onto the WAI-ARIA separator pattern: the role is always
/// [`Self::ROLE`], the value triple announces the live extent, and
/// `value_max` is `None` when the upper bound is unbounded (the attribute
/// is omitted rather than announced as infinity). The divider is focusable
/// exactly when resizing is permitted, so keyboard users never land on an
/// inert handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividerAccessibility {
    /// Travel axis of the divider (see [`Axis`] for the convention).
    pub orientation: Axis,
    pub value_now: f64,
    pub value_min: f64,
    pub value_max: Option<f64>,
    pub focusable: bool,
    /// Whether a drag session is live, for `aria-busy`-style announcements.
    pub resizing: bool,
}

impl DividerAccessibility {
    /// ARIA role exposed on the divider element.
    pub const ROLE: &'static str = "separator";

    /// Snapshot the controller's observable state.
    #[must_use]
    pub fn from_controller(controller: &ResizeController) -> Self {
        let constraints = controller.constraints();
        Self {
            orientation: controller.axis(),
            value_now: controller.size(),
            value_min: constraints.min,
            value_max: constraints.max.is_finite().then_some(constraints.max),
            focusable: controller.is_resizable(),
            resizing: controller.is_resizing(),
        }
    }

    /// The `aria-orientation` string for the divider *bar*.
    ///
    /// Note the inversion: a divider that travels horizontally is drawn as
    /// a vertical bar, and ARIA orientation describes the bar.
    #[must_use]
    pub const fn aria_orientation(&self) -> &'static str {
        match self.orientation {
            Axis::Horizontal => "vertical",
            Axis::Vertical => "horizontal",
        }
    }
}

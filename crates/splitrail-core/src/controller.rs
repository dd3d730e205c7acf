#![forbid(unsafe_code)]

//! Resize controller: the deterministic state machine behind the divider.
//!
//! [`ResizeController`] is the single source of truth for the divider's
//! interaction phase and the leading pane's size. Adapters translate raw
//! input into calls on the controller; the controller is the only component
//! that computes a new size, and every size it produces has passed through
//! [`SizeConstraints::clamp`].
//!
//! # State machine
//!
//! ```text
//! Idle -(begin_resize)-> Resizing -(end_resize)-> Idle
//! ```
//!
//! [`ResizeController::apply_delta`] is a pure size-update self-loop on
//! Resizing. [`ResizeController::apply_step`] is a self-loop valid in both
//! phases and never starts a session.
//!
//! # Invariants
//!
//! 1. `size` stays within `[min, max]` and stays finite, even when `max` is
//!    unbounded.
//! 2. At most one [`DragSession`] exists at a time; `begin_resize` while
//!    Resizing is a diagnosed no-op that leaves the live session untouched.
//! 3. Resizing returns to Idle exactly once per session. `end_resize` is the
//!    single exit path for natural release, interruption, disable-mid-drag,
//!    and unmount alike, and it is a safe no-op when already Idle.
//! 4. Misuse (double begin, double end, stray delta) never panics and never
//!    corrupts state; it emits [`ResizeEffect::Noop`] with an explicit
//!    reason.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Axis and constraints
// ---------------------------------------------------------------------------

/// The direction the divider moves along.
///
/// The axis names the divider's travel direction, not the visual direction
/// of the divider bar: `Horizontal` means the divider slides along x and
/// splits the area into left/right panes (the bar itself is drawn
/// vertically); `Vertical` means it slides along y and splits into
/// top/bottom panes. Fixed for the controller's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Inclusive bounds for the leading pane's size.
///
/// `min` must be finite and `max` may be `f64::INFINITY` for an unbounded
/// upper limit. `min <= max` is a construction-time precondition: [`new`]
/// and [`validate`] enforce it at the boundary, and the controller assumes
/// it afterwards rather than re-checking at runtime.
///
/// [`new`]: Self::new
/// [`validate`]: Self::validate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeConstraints {
    pub min: f64,
    pub max: f64,
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}

impl SizeConstraints {
    /// Construct validated bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, SplitConfigError> {
        let constraints = Self { min, max };
        constraints.validate()?;
        Ok(constraints)
    }

    /// Bounds with no upper limit.
    pub fn at_least(min: f64) -> Result<Self, SplitConfigError> {
        Self::new(min, f64::INFINITY)
    }

    /// Check the boundary preconditions: `min` finite, `max` non-NaN,
    /// `min <= max`.
    pub fn validate(self) -> Result<(), SplitConfigError> {
        if !self.min.is_finite() || self.max.is_nan() {
            return Err(SplitConfigError::NonFiniteBound {
                min: self.min,
                max: self.max,
            });
        }
        if self.min > self.max {
            return Err(SplitConfigError::InvalidConstraints {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Constrain `value` to `[min, max]`.
    ///
    /// Total over all inputs: any real value lands in bounds, and a NaN
    /// input resolves to `min`.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Construction-time configuration failures.
///
/// Malformed constraints are a boundary error, never a runtime failure mode:
/// once a controller exists, its constraints are valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitConfigError {
    /// `min > max`.
    InvalidConstraints { min: f64, max: f64 },
    /// A NaN bound, or a non-finite `min`.
    NonFiniteBound { min: f64, max: f64 },
}

impl fmt::Display for SplitConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConstraints { min, max } => {
                write!(f, "invalid size constraints: min {min} exceeds max {max}")
            }
            Self::NonFiniteBound { min, max } => {
                write!(
                    f,
                    "size constraint bounds must be numbers (min {min}, max {max})"
                )
            }
        }
    }
}

impl std::error::Error for SplitConfigError {}

// ---------------------------------------------------------------------------
// Session and phase
// ---------------------------------------------------------------------------

/// The input mechanism driving a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeModality {
    Pointer,
    Touch,
}

/// Ephemeral record of one drag gesture.
///
/// Created by [`ResizeController::begin_resize`], dropped by
/// [`ResizeController::end_resize`], owned exclusively by the controller.
/// Adapters read the origin from here instead of stashing it in their own
/// closures, which keeps the machine auditable independent of any UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    /// Travel-axis coordinate where the gesture started.
    pub origin_position: f64,
    /// Leading pane size when the gesture started. Deltas are applied
    /// against this, never against the live size, so repeated identical
    /// deltas cannot compound.
    pub origin_size: f64,
    pub modality: ResizeModality,
}

/// Interaction phase. Idle is both the initial and the terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ResizePhase {
    Idle,
    Resizing(DragSession),
}

impl ResizePhase {
    #[must_use]
    pub const fn is_resizing(self) -> bool {
        matches!(self, Self::Resizing(_))
    }
}

// ---------------------------------------------------------------------------
// Commands, effects, transitions
// ---------------------------------------------------------------------------

/// Discrete size adjustment commands (the keyboard path).
///
/// Steps apply instantaneously from the current size and never create a
/// drag session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ResizeStep {
    Increase { amount: f64 },
    Decrease { amount: f64 },
    ToMinimum,
    ToMaximum,
}

/// Explicit diagnostics for operations that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeNoopReason {
    /// `begin_resize` while a session is already active.
    SessionAlreadyActive,
    /// The component is disabled or resizing is globally suppressed.
    ResizingDisallowed,
    /// `apply_delta` outside a session.
    NoActiveSession,
    /// `end_resize` while already Idle.
    AlreadyIdle,
    /// The clamped target equals the current size.
    SizeUnchanged,
    /// The requested target is not a finite size, e.g. `ToMaximum` against
    /// an unbounded constraint.
    NonFiniteTarget,
}

/// Effect emitted by one controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum ResizeEffect {
    SessionStarted {
        origin_position: f64,
        origin_size: f64,
        modality: ResizeModality,
    },
    SizeChanged {
        previous: f64,
        size: f64,
    },
    StepApplied {
        step: ResizeStep,
        previous: f64,
        size: f64,
    },
    SessionEnded {
        final_size: f64,
    },
    Noop {
        reason: ResizeNoopReason,
    },
}

impl ResizeEffect {
    /// The accepted new size carried by this effect, if it changed one.
    #[must_use]
    pub const fn accepted_size(self) -> Option<f64> {
        match self {
            Self::SizeChanged { size, .. } | Self::StepApplied { size, .. } => Some(size),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_noop(self) -> bool {
        matches!(self, Self::Noop { .. })
    }
}

/// One controller transition with deterministic diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeTransition {
    pub transition_id: u64,
    pub from: ResizePhase,
    pub to: ResizePhase,
    pub effect: ResizeEffect,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Construction-time configuration for [`ResizeController`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub axis: Axis,
    /// Initial leading-pane size, clamped against `constraints` at
    /// construction. NaN coerces to `constraints.min`.
    pub default_size: f64,
    pub constraints: SizeConstraints,
    pub disabled: bool,
    /// Global resize suppression, independent of `disabled`. Either flag
    /// forbids resizing.
    pub allow_resize: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            default_size: 0.0,
            constraints: SizeConstraints::default(),
            disabled: false,
            allow_resize: true,
        }
    }
}

/// Single source of truth for the divider's phase and the leading pane size.
///
/// The controller is pure state: it holds no callbacks and performs no I/O,
/// so it is cloneable, comparable, and serializable for deterministic
/// replay. Hosts that want the `on_resize_*` callback contract feed emitted
/// transitions through [`crate::hooks::ResizeHooks`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeController {
    axis: Axis,
    size: f64,
    constraints: SizeConstraints,
    phase: ResizePhase,
    disabled: bool,
    allow_resize: bool,
    transition_counter: u64,
}

impl ResizeController {
    /// Construct a controller. The default size is clamped into bounds; the
    /// constraints themselves are validated and rejected if malformed.
    pub fn new(config: SplitConfig) -> Result<Self, SplitConfigError> {
        config.constraints.validate()?;
        let mut size = config.constraints.clamp(config.default_size);
        if !size.is_finite() {
            size = config.constraints.min;
        }
        Ok(Self {
            axis: config.axis,
            size,
            constraints: config.constraints,
            phase: ResizePhase::Idle,
            disabled: config.disabled,
            allow_resize: config.allow_resize,
            transition_counter: 0,
        })
    }

    /// The divider's travel axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Current leading-pane size. Always within bounds and finite.
    #[must_use]
    pub const fn size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub const fn constraints(&self) -> SizeConstraints {
        self.constraints
    }

    /// Current interaction phase.
    #[must_use]
    pub const fn phase(&self) -> ResizePhase {
        self.phase
    }

    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        self.phase.is_resizing()
    }

    /// Whether resize interactions are currently permitted.
    #[must_use]
    pub const fn is_resizable(&self) -> bool {
        !self.disabled && self.allow_resize
    }

    /// The live drag session, if one is active.
    #[must_use]
    pub const fn drag_session(&self) -> Option<DragSession> {
        match self.phase {
            ResizePhase::Idle => None,
            ResizePhase::Resizing(session) => Some(session),
        }
    }

    /// Start a drag session at `origin_position` on the travel axis.
    ///
    /// Diagnosed no-op while already Resizing (the live session's origin is
    /// untouched) or while resizing is not permitted.
    pub fn begin_resize(
        &mut self,
        origin_position: f64,
        modality: ResizeModality,
    ) -> ResizeTransition {
        let from = self.phase;
        if !self.is_resizable() {
            return self.noop(from, ResizeNoopReason::ResizingDisallowed);
        }
        if self.phase.is_resizing() {
            return self.noop(from, ResizeNoopReason::SessionAlreadyActive);
        }
        let session = DragSession {
            origin_position,
            origin_size: self.size,
            modality,
        };
        self.phase = ResizePhase::Resizing(session);
        self.emit(
            from,
            ResizeEffect::SessionStarted {
                origin_position,
                origin_size: session.origin_size,
                modality,
            },
        )
    }

    /// Apply a travel-axis delta against the session origin.
    ///
    /// The new size is `clamp(origin_size + delta)`; repeating the same
    /// delta is idempotent. Diagnosed no-op outside a session, when the
    /// clamped target equals the current size, or when the target is not a
    /// finite number.
    pub fn apply_delta(&mut self, delta: f64) -> ResizeTransition {
        let from = self.phase;
        let ResizePhase::Resizing(session) = self.phase else {
            return self.noop(from, ResizeNoopReason::NoActiveSession);
        };
        match self.clamp_target(session.origin_size + delta) {
            Ok(size) => {
                let previous = self.size;
                self.size = size;
                self.emit(from, ResizeEffect::SizeChanged { previous, size })
            }
            Err(reason) => self.noop(from, reason),
        }
    }

    /// Apply a discrete step from the current size. Valid in either phase;
    /// never enters Resizing.
    pub fn apply_step(&mut self, step: ResizeStep) -> ResizeTransition {
        let from = self.phase;
        if !self.is_resizable() {
            return self.noop(from, ResizeNoopReason::ResizingDisallowed);
        }
        let target = match step {
            ResizeStep::Increase { amount } => self.size + amount,
            ResizeStep::Decrease { amount } => self.size - amount,
            ResizeStep::ToMinimum => self.constraints.min,
            ResizeStep::ToMaximum => self.constraints.max,
        };
        match self.clamp_target(target) {
            Ok(size) => {
                let previous = self.size;
                self.size = size;
                self.emit(
                    from,
                    ResizeEffect::StepApplied {
                        step,
                        previous,
                        size,
                    },
                )
            }
            Err(reason) => self.noop(from, reason),
        }
    }

    /// End the active session and return to Idle.
    ///
    /// This is the single convergent exit path: natural release, touch
    /// interruption, disable-mid-drag, and unmount all funnel through it.
    /// Safe no-op when already Idle, so re-entrant calls during forced
    /// termination cannot double-fire.
    pub fn end_resize(&mut self) -> ResizeTransition {
        let from = self.phase;
        if !self.phase.is_resizing() {
            return self.noop(from, ResizeNoopReason::AlreadyIdle);
        }
        self.phase = ResizePhase::Idle;
        self.emit(
            from,
            ResizeEffect::SessionEnded {
                final_size: self.size,
            },
        )
    }

    /// Update the disabled flag. Turning resizing off mid-session force-ends
    /// the session through the normal exit path; the returned transition is
    /// that forced end.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<ResizeTransition> {
        self.disabled = disabled;
        self.force_end_if_disallowed()
    }

    /// Update the global resize suppression flag, with the same
    /// force-end-mid-session behavior as [`Self::set_disabled`].
    pub fn set_allow_resize(&mut self, allow_resize: bool) -> Option<ResizeTransition> {
        self.allow_resize = allow_resize;
        self.force_end_if_disallowed()
    }

    fn force_end_if_disallowed(&mut self) -> Option<ResizeTransition> {
        (!self.is_resizable() && self.phase.is_resizing()).then(|| self.end_resize())
    }

    fn clamp_target(&self, target: f64) -> Result<f64, ResizeNoopReason> {
        let next = self.constraints.clamp(target);
        if !next.is_finite() {
            return Err(ResizeNoopReason::NonFiniteTarget);
        }
        if next == self.size {
            return Err(ResizeNoopReason::SizeUnchanged);
        }
        Ok(next)
    }

    fn noop(&mut self, from: ResizePhase, reason: ResizeNoopReason) -> ResizeTransition {
        self.emit(from, ResizeEffect::Noop { reason })
    }

    fn emit(&mut self, from: ResizePhase, effect: ResizeEffect) -> ResizeTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        let transition = ResizeTransition {
            transition_id: self.transition_counter,
            from,
            to: self.phase,
            effect,
        };
        #[cfg(feature = "tracing")]
        Self::log_transition(&transition);
        transition
    }

    #[cfg(feature = "tracing")]
    fn log_transition(transition: &ResizeTransition) {
        tracing::debug!(
            message = "resize.transition",
            transition_id = transition.transition_id,
            resizing = transition.to.is_resizing(),
            noop = transition.effect.is_noop(),
            size = transition.effect.accepted_size(),
        );
    }
}

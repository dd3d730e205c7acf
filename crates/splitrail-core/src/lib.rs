#![forbid(unsafe_code)]

//! Core resize controller for the SplitRail dual-pane primitive.
//!
//! A split pane lays out two opaque content regions separated by a divider.
//! This crate owns the interaction model behind that divider: the
//! Idle/Resizing state machine, the drag session record, and the clamping
//! that keeps the leading pane's size inside its bounds under arbitrary
//! input. It knows nothing about rendering or input devices; adapters
//! (`splitrail-input`) translate host events into controller calls, and the
//! view layer (`splitrail-view`) is a pure function of controller state.
//!
//! Axis convention: [`Axis`] names the direction the divider *moves*.
//! `Axis::Horizontal` means the divider slides along x and the panes sit
//! left/right of it; `Axis::Vertical` means it slides along y and the panes
//! sit top/bottom. See the [`Axis`] docs.

pub mod controller;
pub mod geometry;
pub mod hooks;

pub use controller::{
    Axis, DragSession, ResizeController, ResizeEffect, ResizeModality, ResizeNoopReason,
    ResizePhase, ResizeStep, ResizeTransition, SizeConstraints, SplitConfig, SplitConfigError,
};
pub use geometry::{Point, Rect};
pub use hooks::ResizeHooks;

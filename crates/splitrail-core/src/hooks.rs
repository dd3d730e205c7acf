#![forbid(unsafe_code)]

//! Callback dispatch for controller transitions.
//!
//! The controller stays pure so its state can be cloned, compared, and
//! replayed. Hosts that want the `on_resize_start` / `on_resize` /
//! `on_resize_end` callback contract feed every emitted
//! [`ResizeTransition`] through [`ResizeHooks::dispatch`]. Because the
//! controller emits `SessionStarted` and `SessionEnded` exactly once per
//! session, the start/end callbacks bracket that session's `on_resize`
//! notifications exactly once each; no-op transitions invoke nothing.

use std::fmt;

use crate::controller::{ResizeEffect, ResizeTransition};

type SessionHook = Box<dyn FnMut()>;
type SizeHook = Box<dyn FnMut(f64)>;

/// Host callbacks invoked from accepted controller transitions.
#[derive(Default)]
pub struct ResizeHooks {
    on_resize_start: Option<SessionHook>,
    on_resize: Option<SizeHook>,
    on_resize_end: Option<SessionHook>,
}

impl fmt::Debug for ResizeHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeHooks")
            .field("on_resize_start", &self.on_resize_start.is_some())
            .field("on_resize", &self.on_resize.is_some())
            .field("on_resize_end", &self.on_resize_end.is_some())
            .finish()
    }
}

impl ResizeHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once when a drag session starts.
    #[must_use]
    pub fn on_resize_start(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_resize_start = Some(Box::new(hook));
        self
    }

    /// Called with the new size on every accepted size change, whether from
    /// a drag delta or a discrete step.
    #[must_use]
    pub fn on_resize(mut self, hook: impl FnMut(f64) + 'static) -> Self {
        self.on_resize = Some(Box::new(hook));
        self
    }

    /// Called once when a drag session ends, on natural release and forced
    /// termination alike.
    #[must_use]
    pub fn on_resize_end(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_resize_end = Some(Box::new(hook));
        self
    }

    /// Invoke the callbacks implied by one transition.
    pub fn dispatch(&mut self, transition: &ResizeTransition) {
        match transition.effect {
            ResizeEffect::SessionStarted { .. } => {
                if let Some(hook) = self.on_resize_start.as_mut() {
                    hook();
                }
            }
            ResizeEffect::SizeChanged { size, .. } | ResizeEffect::StepApplied { size, .. } => {
                if let Some(hook) = self.on_resize.as_mut() {
                    hook(size);
                }
            }
            ResizeEffect::SessionEnded { .. } => {
                if let Some(hook) = self.on_resize_end.as_mut() {
                    hook();
                }
            }
            ResizeEffect::Noop { .. } => {}
        }
    }
}

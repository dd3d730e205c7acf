#![forbid(unsafe_code)]

//! Scoped acquisition of globally-scoped input listeners.
//!
//! A drag must keep receiving move/release input after the cursor leaves the
//! divider's hit area, so the host attaches those listeners at document
//! scope rather than on the divider element. Document-scoped listeners are a
//! leak hazard: any path that attaches without an unconditionally-reached
//! detach is a defect. They are therefore modeled as an explicit resource —
//! an adapter acquires a [`GlobalSubscription`] when a session starts and
//! releases it exactly once, emitting [`SubscriptionCommand`]s the host
//! executes against its real event system.

use serde::{Deserialize, Serialize};
use splitrail_core::ResizeModality;

/// Host command controlling document-scoped listener lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SubscriptionCommand {
    /// Attach document-scoped move/release listeners for `modality`.
    AttachGlobal { modality: ResizeModality },
    /// Detach them. Emitted at most once per attach; a host that treats a
    /// redundant detach as harmless loses nothing, because adapters never
    /// send one.
    ReleaseGlobal { modality: ResizeModality },
}

/// Owned handle for one global-listener acquisition.
///
/// [`release`](Self::release) yields the release command on the first call
/// and `None` afterwards, so every exit path can call it unconditionally
/// without double-detaching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalSubscription {
    modality: ResizeModality,
    released: bool,
}

impl GlobalSubscription {
    /// Acquire a handle and the attach command the host must execute.
    #[must_use]
    pub const fn attach(modality: ResizeModality) -> (Self, SubscriptionCommand) {
        (
            Self {
                modality,
                released: false,
            },
            SubscriptionCommand::AttachGlobal { modality },
        )
    }

    /// Dispose the handle. First call returns the release command; later
    /// calls return `None`.
    pub fn release(&mut self) -> Option<SubscriptionCommand> {
        if self.released {
            return None;
        }
        self.released = true;
        Some(SubscriptionCommand::ReleaseGlobal {
            modality: self.modality,
        })
    }

    #[must_use]
    pub const fn is_released(&self) -> bool {
        self.released
    }
}

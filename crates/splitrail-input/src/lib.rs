#![forbid(unsafe_code)]

//! Input adapters for the SplitRail resize controller.
//!
//! Three adapters, one per modality, each independently attachable:
//!
//! - [`pointer::PointerResizeAdapter`] — mouse/pen lifecycles with
//!   primary-button activation and document-scoped listener commands.
//! - [`touch::TouchResizeAdapter`] — first-touch drags with second-finger
//!   interruption and scroll suppression.
//! - [`keyboard::KeyboardResizeAdapter`] — discrete steps from axis-aligned
//!   arrow keys plus Home/End bound jumps.
//!
//! Shared discipline: adapters hold no size state. They read the drag
//! origin from the controller's session and route every mutation through
//! the controller's transition API, so session exclusivity across
//! modalities falls out of the controller's own no-op rules. Adapters that
//! acquire globally-scoped listeners release them exactly once, on
//! whichever of natural release, interruption, or forced termination
//! happens first; see [`subscription`].

pub mod keyboard;
pub mod pointer;
pub mod subscription;
pub mod touch;

pub use keyboard::{
    DividerKey, KeyDispatch, KeyIgnoredReason, KeyboardAdapterConfig, KeyboardConfigError,
    KeyboardResizeAdapter, DEFAULT_KEYBOARD_STEP,
};
pub use pointer::{
    PointerAdapterConfig, PointerButton, PointerDispatch, PointerIgnoredReason,
    PointerResizeAdapter,
};
pub use subscription::{GlobalSubscription, SubscriptionCommand};
pub use touch::{TouchDispatch, TouchIgnoredReason, TouchPoint, TouchResizeAdapter};

#![forbid(unsafe_code)]

//! Pointer adapter: drives the resize controller from mouse/pen lifecycles.
//!
//! On pointer-down over the divider with the activation button, the adapter
//! starts a session and acquires document-scoped listeners via
//! [`SubscriptionCommand::AttachGlobal`], so the drag survives the cursor
//! leaving the divider's hit area. Moves compute the travel-axis delta
//! against the session origin held by the controller; release ends the
//! session and emits the single release command.
//!
//! [`PointerResizeAdapter::cancel`] is the forced-termination entry
//! (unmount, disable-mid-drag). It converges on the same release path as
//! natural pointer-up, and stays harmless when called redundantly.

use serde::{Deserialize, Serialize};
use splitrail_core::{Point, ResizeController, ResizeEffect, ResizeModality, ResizeTransition};

use crate::subscription::{GlobalSubscription, SubscriptionCommand};

/// Pointer device button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Auxiliary,
}

/// Adapter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerAdapterConfig {
    /// Button required to begin a drag.
    pub activation_button: PointerButton,
}

/// Why a raw pointer event was rejected before reaching the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerIgnoredReason {
    ButtonNotAllowed,
    ActivePointerAlreadyInProgress,
    NoActivePointer,
    PointerMismatch,
    ButtonMismatch,
    /// The controller's session vanished underneath an active pointer (e.g.
    /// a disable force-ended it); the adapter resynchronized and released
    /// its listeners.
    SessionUnavailable,
}

/// Result of one pointer lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDispatch {
    /// Controller transition, when the event reached the controller.
    pub transition: Option<ResizeTransition>,
    /// Host listener command, when acquisition state changed.
    pub command: Option<SubscriptionCommand>,
    /// Adapter-level rejection, when the event never reached the controller.
    pub ignored: Option<PointerIgnoredReason>,
}

impl PointerDispatch {
    fn ignored(reason: PointerIgnoredReason) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "pointer.ignored", reason = ?reason);
        Self {
            transition: None,
            command: None,
            ignored: Some(reason),
        }
    }

    fn forwarded(transition: ResizeTransition, command: Option<SubscriptionCommand>) -> Self {
        Self {
            transition: Some(transition),
            command,
            ignored: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActivePointer {
    pointer_id: u32,
    button: PointerButton,
    subscription: GlobalSubscription,
}

/// Pointer lifecycle adapter. Tracks one active pointer at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerResizeAdapter {
    config: PointerAdapterConfig,
    active: Option<ActivePointer>,
}

impl PointerResizeAdapter {
    #[must_use]
    pub const fn new(config: PointerAdapterConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// Active pointer id, if a drag is in progress.
    #[must_use]
    pub fn active_pointer_id(&self) -> Option<u32> {
        self.active.map(|active| active.pointer_id)
    }

    /// Whether document-scoped listeners are currently held.
    #[must_use]
    pub fn holds_subscription(&self) -> bool {
        self.active
            .is_some_and(|active| !active.subscription.is_released())
    }

    /// Handle pointer-down on the divider.
    ///
    /// Attaches global listeners only when the controller actually starts a
    /// session; a press while another modality is mid-drag (or while the
    /// component is disabled) forwards the controller's diagnosed no-op and
    /// acquires nothing.
    pub fn pointer_down(
        &mut self,
        controller: &mut ResizeController,
        pointer_id: u32,
        button: PointerButton,
        position: Point,
    ) -> PointerDispatch {
        if button != self.config.activation_button {
            return PointerDispatch::ignored(PointerIgnoredReason::ButtonNotAllowed);
        }
        if self.active.is_some() {
            return PointerDispatch::ignored(PointerIgnoredReason::ActivePointerAlreadyInProgress);
        }

        let origin = position.along(controller.axis());
        let transition = controller.begin_resize(origin, ResizeModality::Pointer);
        if matches!(transition.effect, ResizeEffect::SessionStarted { .. }) {
            let (subscription, command) = GlobalSubscription::attach(ResizeModality::Pointer);
            self.active = Some(ActivePointer {
                pointer_id,
                button,
                subscription,
            });
            PointerDispatch::forwarded(transition, Some(command))
        } else {
            PointerDispatch::forwarded(transition, None)
        }
    }

    /// Handle a pointer move during an active drag.
    pub fn pointer_move(
        &mut self,
        controller: &mut ResizeController,
        pointer_id: u32,
        position: Point,
    ) -> PointerDispatch {
        let Some(active) = self.active else {
            return PointerDispatch::ignored(PointerIgnoredReason::NoActivePointer);
        };
        if active.pointer_id != pointer_id {
            return PointerDispatch::ignored(PointerIgnoredReason::PointerMismatch);
        }
        let Some(session) = controller.drag_session() else {
            let command = self.release();
            return PointerDispatch {
                transition: None,
                command,
                ignored: Some(PointerIgnoredReason::SessionUnavailable),
            };
        };

        let delta = position.along(controller.axis()) - session.origin_position;
        PointerDispatch::forwarded(controller.apply_delta(delta), None)
    }

    /// Handle pointer release: ends the session and releases the listeners.
    pub fn pointer_up(
        &mut self,
        controller: &mut ResizeController,
        pointer_id: u32,
        button: PointerButton,
    ) -> PointerDispatch {
        let Some(active) = self.active else {
            return PointerDispatch::ignored(PointerIgnoredReason::NoActivePointer);
        };
        if active.pointer_id != pointer_id {
            return PointerDispatch::ignored(PointerIgnoredReason::PointerMismatch);
        }
        if active.button != button {
            return PointerDispatch::ignored(PointerIgnoredReason::ButtonMismatch);
        }

        let transition = controller.end_resize();
        let command = self.release();
        PointerDispatch {
            transition: Some(transition),
            command,
            ignored: None,
        }
    }

    /// Forced termination (unmount, disable). Ends any session and releases
    /// the listeners; safe when nothing is active, and safe after the
    /// controller was already force-ended elsewhere.
    pub fn cancel(&mut self, controller: &mut ResizeController) -> PointerDispatch {
        if self.active.is_none() {
            return PointerDispatch::ignored(PointerIgnoredReason::NoActivePointer);
        }
        let transition = controller.end_resize();
        let command = self.release();
        PointerDispatch {
            transition: Some(transition),
            command,
            ignored: None,
        }
    }

    fn release(&mut self) -> Option<SubscriptionCommand> {
        let command = self
            .active
            .as_mut()
            .and_then(|active| active.subscription.release());
        self.active = None;
        command
    }
}

#[cfg(test)]
mod tests {
    use splitrail_core::{
        Point, ResizeController, ResizeEffect, ResizeModality, ResizeNoopReason, SizeConstraints,
        SplitConfig,
    };

    use super::{
        PointerAdapterConfig, PointerButton, PointerIgnoredReason, PointerResizeAdapter,
    };
    use crate::subscription::SubscriptionCommand;

    fn controller() -> ResizeController {
        ResizeController::new(SplitConfig {
            default_size: 300.0,
            constraints: SizeConstraints::new(100.0, 500.0).expect("valid"),
            ..SplitConfig::default()
        })
        .expect("config is valid")
    }

    fn adapter() -> PointerResizeAdapter {
        PointerResizeAdapter::new(PointerAdapterConfig::default())
    }

    fn pos(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn down_starts_session_and_attaches_listeners() {
        let mut ctl = controller();
        let mut adapter = adapter();
        let dispatch = adapter.pointer_down(&mut ctl, 7, PointerButton::Primary, pos(120.0, 40.0));
        assert_eq!(
            dispatch.command,
            Some(SubscriptionCommand::AttachGlobal {
                modality: ResizeModality::Pointer
            })
        );
        assert_eq!(adapter.active_pointer_id(), Some(7));
        assert!(adapter.holds_subscription());
        assert_eq!(
            ctl.drag_session().expect("session started").origin_position,
            120.0
        );
    }

    #[test]
    fn secondary_button_is_rejected_without_state_change() {
        let mut ctl = controller();
        let mut adapter = adapter();
        let dispatch =
            adapter.pointer_down(&mut ctl, 7, PointerButton::Secondary, pos(120.0, 40.0));
        assert_eq!(
            dispatch.ignored,
            Some(PointerIgnoredReason::ButtonNotAllowed)
        );
        assert_eq!(dispatch.transition, None);
        assert!(!ctl.is_resizing());
        assert!(!adapter.holds_subscription());
    }

    #[test]
    fn down_while_disabled_attaches_nothing() {
        let mut ctl = controller();
        ctl.set_disabled(true);
        let mut adapter = adapter();
        let dispatch = adapter.pointer_down(&mut ctl, 7, PointerButton::Primary, pos(120.0, 40.0));
        assert_eq!(dispatch.command, None);
        assert!(!adapter.holds_subscription());
        assert_eq!(
            dispatch.transition.expect("forwarded").effect,
            ResizeEffect::Noop {
                reason: ResizeNoopReason::ResizingDisallowed
            }
        );
    }

    #[test]
    fn moves_resolve_deltas_along_the_travel_axis() {
        let mut ctl = controller();
        let mut adapter = adapter();
        adapter.pointer_down(&mut ctl, 7, PointerButton::Primary, pos(120.0, 40.0));
        // Horizontal travel axis: only x matters.
        adapter.pointer_move(&mut ctl, 7, pos(170.0, 999.0));
        assert_eq!(ctl.size(), 350.0);
        adapter.pointer_move(&mut ctl, 7, pos(20.0, 0.0));
        assert_eq!(ctl.size(), 200.0);
    }

    #[test]
    fn move_from_other_pointer_is_ignored() {
        let mut ctl = controller();
        let mut adapter = adapter();
        adapter.pointer_down(&mut ctl, 7, PointerButton::Primary, pos(120.0, 40.0));
        let dispatch = adapter.pointer_move(&mut ctl, 99, pos(400.0, 0.0));
        assert_eq!(dispatch.ignored, Some(PointerIgnoredReason::PointerMismatch));
        assert_eq!(ctl.size(), 300.0);
        assert_eq!(adapter.active_pointer_id(), Some(7));
    }

    #[test]
    fn up_ends_session_and_releases_exactly_once() {
        let mut ctl = controller();
        let mut adapter = adapter();
        adapter.pointer_down(&mut ctl, 7, PointerButton::Primary, pos(120.0, 40.0));
        adapter.pointer_move(&mut ctl, 7, pos(150.0, 0.0));

        let up = adapter.pointer_up(&mut ctl, 7, PointerButton::Primary);
        assert_eq!(
            up.command,
            Some(SubscriptionCommand::ReleaseGlobal {
                modality: ResizeModality::Pointer
            })
        );
        assert_eq!(
            up.transition.expect("forwarded").effect,
            ResizeEffect::SessionEnded { final_size: 330.0 }
        );
        assert!(!ctl.is_resizing());
        assert!(!adapter.holds_subscription());

        // Redundant cancel after natural release: no second release command.
        let cancel = adapter.cancel(&mut ctl);
        assert_eq!(cancel.command, None);
        assert_eq!(cancel.ignored, Some(PointerIgnoredReason::NoActivePointer));
    }

    #[test]
    fn wrong_button_release_is_ignored() {
        let mut ctl = controller();
        let mut adapter = adapter();
        adapter.pointer_down(&mut ctl, 7, PointerButton::Primary, pos(120.0, 40.0));
        let up = adapter.pointer_up(&mut ctl, 7, PointerButton::Secondary);
        assert_eq!(up.ignored, Some(PointerIgnoredReason::ButtonMismatch));
        assert!(ctl.is_resizing());
        assert!(adapter.holds_subscription());
    }

    #[test]
    fn cancel_mid_drag_releases_and_ends() {
        let mut ctl = controller();
        let mut adapter = adapter();
        adapter.pointer_down(&mut ctl, 7, PointerButton::Primary, pos(120.0, 40.0));
        let dispatch = adapter.cancel(&mut ctl);
        assert_eq!(
            dispatch.command,
            Some(SubscriptionCommand::ReleaseGlobal {
                modality: ResizeModality::Pointer
            })
        );
        assert!(!ctl.is_resizing());
        assert!(!adapter.holds_subscription());
    }

    #[test]
    fn move_after_external_force_end_resynchronizes() {
        let mut ctl = controller();
        let mut adapter = adapter();
        adapter.pointer_down(&mut ctl, 7, PointerButton::Primary, pos(120.0, 40.0));
        // Disable force-ends the controller session behind the adapter's back.
        ctl.set_disabled(true);

        let dispatch = adapter.pointer_move(&mut ctl, 7, pos(200.0, 0.0));
        assert_eq!(
            dispatch.ignored,
            Some(PointerIgnoredReason::SessionUnavailable)
        );
        assert_eq!(
            dispatch.command,
            Some(SubscriptionCommand::ReleaseGlobal {
                modality: ResizeModality::Pointer
            })
        );
        assert_eq!(ctl.size(), 300.0);
        assert!(!adapter.holds_subscription());
    }

    #[test]
    fn second_down_while_active_is_rejected_before_the_controller() {
        let mut ctl = controller();
        let mut adapter = adapter();
        adapter.pointer_down(&mut ctl, 7, PointerButton::Primary, pos(120.0, 40.0));
        let dispatch = adapter.pointer_down(&mut ctl, 8, PointerButton::Primary, pos(10.0, 0.0));
        assert_eq!(
            dispatch.ignored,
            Some(PointerIgnoredReason::ActivePointerAlreadyInProgress)
        );
        assert_eq!(adapter.active_pointer_id(), Some(7));
    }
}

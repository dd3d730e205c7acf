#![forbid(unsafe_code)]

//! Touch adapter: first-touch drags with interruption semantics.
//!
//! The adapter tracks the first active touch point and treats the divider as
//! a one-finger control: a second touch starting while one is tracked
//! interrupts the gesture and implicitly ends the session, as does losing
//! the tracked id from a move. While a session is active,
//! [`TouchResizeAdapter::suppress_scroll`] reports true and the host must
//! call `preventDefault` from a *non-passive* touchmove handler — a passive
//! listener cannot stop the page from scrolling mid-drag, which silently
//! breaks the gesture.

use serde::{Deserialize, Serialize};
use splitrail_core::{Point, ResizeController, ResizeEffect, ResizeModality, ResizeTransition};

use crate::subscription::{GlobalSubscription, SubscriptionCommand};

/// One touch point as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: u32,
    pub position: Point,
}

/// Why a raw touch event was rejected before reaching the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchIgnoredReason {
    /// A start event carried no touch points.
    NoTouches,
    /// Move/end input while nothing is tracked.
    NoActiveTouch,
    /// An end event that did not lift the tracked touch.
    TrackedTouchStillDown,
    /// The controller's session vanished underneath the tracked touch; the
    /// adapter resynchronized and released its listeners.
    SessionUnavailable,
}

/// Result of one touch lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchDispatch {
    pub transition: Option<ResizeTransition>,
    pub command: Option<SubscriptionCommand>,
    pub ignored: Option<TouchIgnoredReason>,
}

impl TouchDispatch {
    fn ignored(reason: TouchIgnoredReason) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "touch.ignored", reason = ?reason);
        Self {
            transition: None,
            command: None,
            ignored: Some(reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveTouch {
    touch_id: u32,
    subscription: GlobalSubscription,
}

/// Touch lifecycle adapter. Tracks the first active touch point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchResizeAdapter {
    active: Option<ActiveTouch>,
}

impl TouchResizeAdapter {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Tracked touch id, if a drag is in progress.
    #[must_use]
    pub fn tracked_touch_id(&self) -> Option<u32> {
        self.active.map(|active| active.touch_id)
    }

    /// Whether document-scoped listeners are currently held.
    #[must_use]
    pub fn holds_subscription(&self) -> bool {
        self.active
            .is_some_and(|active| !active.subscription.is_released())
    }

    /// Whether the host must suppress default scrolling right now.
    #[must_use]
    pub const fn suppress_scroll(&self) -> bool {
        self.active.is_some()
    }

    /// Handle touch-start on the divider.
    ///
    /// Starting a second touch while one is tracked is an interruption: the
    /// live session implicitly ends instead of the new touch taking over.
    pub fn touch_start(
        &mut self,
        controller: &mut ResizeController,
        touches: &[TouchPoint],
    ) -> TouchDispatch {
        if self.active.is_some() {
            let transition = controller.end_resize();
            let command = self.release();
            return TouchDispatch {
                transition: Some(transition),
                command,
                ignored: None,
            };
        }
        let Some(first) = touches.first() else {
            return TouchDispatch::ignored(TouchIgnoredReason::NoTouches);
        };

        let origin = first.position.along(controller.axis());
        let transition = controller.begin_resize(origin, ResizeModality::Touch);
        if matches!(transition.effect, ResizeEffect::SessionStarted { .. }) {
            let (subscription, command) = GlobalSubscription::attach(ResizeModality::Touch);
            self.active = Some(ActiveTouch {
                touch_id: first.id,
                subscription,
            });
            TouchDispatch {
                transition: Some(transition),
                command: Some(command),
                ignored: None,
            }
        } else {
            TouchDispatch {
                transition: Some(transition),
                command: None,
                ignored: None,
            }
        }
    }

    /// Handle touch-move with the current active touch list.
    ///
    /// Losing the tracked id from the list is treated as an implicit end.
    pub fn touch_move(
        &mut self,
        controller: &mut ResizeController,
        touches: &[TouchPoint],
    ) -> TouchDispatch {
        let Some(active) = self.active else {
            return TouchDispatch::ignored(TouchIgnoredReason::NoActiveTouch);
        };
        let Some(point) = touches.iter().find(|touch| touch.id == active.touch_id) else {
            let transition = controller.end_resize();
            let command = self.release();
            return TouchDispatch {
                transition: Some(transition),
                command,
                ignored: None,
            };
        };
        let Some(session) = controller.drag_session() else {
            let command = self.release();
            return TouchDispatch {
                transition: None,
                command,
                ignored: Some(TouchIgnoredReason::SessionUnavailable),
            };
        };

        let delta = point.position.along(controller.axis()) - session.origin_position;
        TouchDispatch {
            transition: Some(controller.apply_delta(delta)),
            command: None,
            ignored: None,
        }
    }

    /// Handle touch-end, where `ended` lists the touches that lifted.
    pub fn touch_end(
        &mut self,
        controller: &mut ResizeController,
        ended: &[TouchPoint],
    ) -> TouchDispatch {
        let Some(active) = self.active else {
            return TouchDispatch::ignored(TouchIgnoredReason::NoActiveTouch);
        };
        if !ended.iter().any(|touch| touch.id == active.touch_id) {
            return TouchDispatch::ignored(TouchIgnoredReason::TrackedTouchStillDown);
        }

        let transition = controller.end_resize();
        let command = self.release();
        TouchDispatch {
            transition: Some(transition),
            command,
            ignored: None,
        }
    }

    /// Forced termination (host touch-cancel, unmount, disable). Converges
    /// on the same release path as a natural end.
    pub fn cancel(&mut self, controller: &mut ResizeController) -> TouchDispatch {
        if self.active.is_none() {
            return TouchDispatch::ignored(TouchIgnoredReason::NoActiveTouch);
        }
        let transition = controller.end_resize();
        let command = self.release();
        TouchDispatch {
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
        Axis, Point, ResizeController, ResizeEffect, ResizeModality, SizeConstraints, SplitConfig,
    };

    use super::{TouchIgnoredReason, TouchPoint, TouchResizeAdapter};
    use crate::subscription::SubscriptionCommand;

    fn controller(axis: Axis) -> ResizeController {
        ResizeController::new(SplitConfig {
            axis,
            default_size: 300.0,
            constraints: SizeConstraints::new(100.0, 500.0).expect("valid"),
            ..SplitConfig::default()
        })
        .expect("config is valid")
    }

    fn touch(id: u32, x: f64, y: f64) -> TouchPoint {
        TouchPoint {
            id,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn first_touch_starts_session_and_suppresses_scroll() {
        let mut ctl = controller(Axis::Vertical);
        let mut adapter = TouchResizeAdapter::new();
        let dispatch = adapter.touch_start(&mut ctl, &[touch(1, 10.0, 200.0)]);
        assert_eq!(
            dispatch.command,
            Some(SubscriptionCommand::AttachGlobal {
                modality: ResizeModality::Touch
            })
        );
        assert!(adapter.suppress_scroll());
        assert_eq!(adapter.tracked_touch_id(), Some(1));
        // Vertical travel axis: origin comes from y.
        assert_eq!(
            ctl.drag_session().expect("session started").origin_position,
            200.0
        );
    }

    #[test]
    fn moves_follow_the_tracked_touch_only() {
        let mut ctl = controller(Axis::Vertical);
        let mut adapter = TouchResizeAdapter::new();
        adapter.touch_start(&mut ctl, &[touch(1, 10.0, 200.0)]);
        adapter.touch_move(&mut ctl, &[touch(1, 0.0, 260.0)]);
        assert_eq!(ctl.size(), 360.0);
    }

    #[test]
    fn second_touch_interrupts_and_ends_the_session() {
        let mut ctl = controller(Axis::Vertical);
        let mut adapter = TouchResizeAdapter::new();
        adapter.touch_start(&mut ctl, &[touch(1, 10.0, 200.0)]);

        let dispatch = adapter.touch_start(&mut ctl, &[touch(1, 10.0, 200.0), touch(2, 0.0, 0.0)]);
        assert_eq!(
            dispatch.transition.expect("forwarded").effect,
            ResizeEffect::SessionEnded { final_size: 300.0 }
        );
        assert_eq!(
            dispatch.command,
            Some(SubscriptionCommand::ReleaseGlobal {
                modality: ResizeModality::Touch
            })
        );
        assert!(!adapter.suppress_scroll());
        assert!(!ctl.is_resizing());
    }

    #[test]
    fn losing_the_tracked_touch_mid_move_ends_the_session() {
        let mut ctl = controller(Axis::Vertical);
        let mut adapter = TouchResizeAdapter::new();
        adapter.touch_start(&mut ctl, &[touch(1, 10.0, 200.0)]);

        let dispatch = adapter.touch_move(&mut ctl, &[touch(2, 0.0, 50.0)]);
        assert!(matches!(
            dispatch.transition.expect("forwarded").effect,
            ResizeEffect::SessionEnded { .. }
        ));
        assert!(dispatch.command.is_some());
        assert!(!adapter.holds_subscription());
    }

    #[test]
    fn end_of_an_untracked_touch_is_ignored() {
        let mut ctl = controller(Axis::Vertical);
        let mut adapter = TouchResizeAdapter::new();
        adapter.touch_start(&mut ctl, &[touch(1, 10.0, 200.0)]);

        let dispatch = adapter.touch_end(&mut ctl, &[touch(2, 0.0, 0.0)]);
        assert_eq!(
            dispatch.ignored,
            Some(TouchIgnoredReason::TrackedTouchStillDown)
        );
        assert!(ctl.is_resizing());
        assert!(adapter.suppress_scroll());
    }

    #[test]
    fn natural_end_releases_exactly_once() {
        let mut ctl = controller(Axis::Vertical);
        let mut adapter = TouchResizeAdapter::new();
        adapter.touch_start(&mut ctl, &[touch(1, 10.0, 200.0)]);
        adapter.touch_move(&mut ctl, &[touch(1, 0.0, 150.0)]);

        let end = adapter.touch_end(&mut ctl, &[touch(1, 0.0, 150.0)]);
        assert_eq!(
            end.command,
            Some(SubscriptionCommand::ReleaseGlobal {
                modality: ResizeModality::Touch
            })
        );
        assert_eq!(ctl.size(), 250.0);
        assert!(!ctl.is_resizing());

        let cancel = adapter.cancel(&mut ctl);
        assert_eq!(cancel.command, None);
        assert_eq!(cancel.ignored, Some(TouchIgnoredReason::NoActiveTouch));
    }

    #[test]
    fn empty_start_is_ignored() {
        let mut ctl = controller(Axis::Vertical);
        let mut adapter = TouchResizeAdapter::new();
        let dispatch = adapter.touch_start(&mut ctl, &[]);
        assert_eq!(dispatch.ignored, Some(TouchIgnoredReason::NoTouches));
        assert!(!ctl.is_resizing());
    }
}

//! Cursor-pinned tooltip shown while the pointer is over the hero highlight.
//!
//! The tooltip follows the pointer while it is shown. On exit it stays up for a short
//! leaving transition and is then hidden by a one-shot timer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::{ReentryPolicy, TooltipTiming};
use crate::scheduler::{Scheduler, TaskHandle};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPhase {
    #[default]
    Hidden,
    Visible,
    Leaving,
}

/// The `{visible, leaving}` flag pair the markup is driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TooltipVisibility {
    pub visible: bool,
    pub leaving: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TooltipState {
    pub phase: TooltipPhase,
    pub position: PointerPosition,
}

impl TooltipState {
    pub fn visibility(&self) -> TooltipVisibility {
        TooltipVisibility {
            visible: self.phase != TooltipPhase::Hidden,
            leaving: self.phase == TooltipPhase::Leaving,
        }
    }
}

struct Shared {
    state: RefCell<TooltipState>,
    pending_hide: RefCell<Option<TaskHandle>>,
    listener: Box<dyn Fn(TooltipState)>,
}

impl Shared {
    /// Applies `change` and notifies the listener only if the state moved.
    fn transition(&self, change: impl FnOnce(&mut TooltipState)) {
        let (before, after) = {
            let mut state = self.state.borrow_mut();
            let before = *state;
            change(&mut *state);
            (before, *state)
        };
        if before != after {
            (self.listener)(after);
        }
    }

    fn cancel_hide(&self) {
        let pending = self.pending_hide.borrow_mut().take();
        if let Some(mut handle) = pending {
            handle.cancel();
        }
    }

    fn expire(&self) {
        // the task already ran; releasing the handle only clears a spent timer id
        let spent = self.pending_hide.borrow_mut().take();
        drop(spent);
        self.transition(|state| {
            if state.phase == TooltipPhase::Leaving {
                state.phase = TooltipPhase::Hidden;
            }
        });
    }
}

pub struct CursorTooltip<S: Scheduler> {
    scheduler: S,
    timing: TooltipTiming,
    shared: Rc<Shared>,
}

impl<S: Scheduler> CursorTooltip<S> {
    pub fn new(scheduler: S, timing: TooltipTiming, listener: impl Fn(TooltipState) + 'static) -> Self {
        Self {
            scheduler,
            timing,
            shared: Rc::new(Shared {
                state: RefCell::new(TooltipState::default()),
                pending_hide: RefCell::new(None),
                listener: Box::new(listener),
            }),
        }
    }

    pub fn state(&self) -> TooltipState {
        *self.shared.state.borrow()
    }

    pub fn has_pending_hide(&self) -> bool {
        self.shared.pending_hide.borrow().is_some()
    }

    pub fn pointer_enter(&self) {
        let phase = self.state().phase;
        match (phase, self.timing.reentry) {
            (TooltipPhase::Hidden, _) => {
                self.shared.transition(|state| state.phase = TooltipPhase::Visible);
            }
            (TooltipPhase::Leaving, ReentryPolicy::CancelPendingHide) => {
                self.shared.cancel_hide();
                self.shared.transition(|state| state.phase = TooltipPhase::Visible);
            }
            (TooltipPhase::Leaving, ReentryPolicy::KeepPendingHide) | (TooltipPhase::Visible, _) => {}
        }
    }

    pub fn pointer_move(&self, position: PointerPosition) {
        self.shared.transition(|state| {
            if state.phase != TooltipPhase::Hidden {
                state.position = position;
            }
        });
    }

    pub fn pointer_leave(&self) {
        if self.state().phase != TooltipPhase::Visible || self.has_pending_hide() {
            return;
        }
        let shared: Weak<Shared> = Rc::downgrade(&self.shared);
        let scheduled = self.scheduler.set_timeout(
            self.timing.hide_delay,
            Box::new(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.expire();
                }
            }),
        );
        match scheduled {
            Ok(handle) => {
                *self.shared.pending_hide.borrow_mut() = Some(handle);
                self.shared.transition(|state| state.phase = TooltipPhase::Leaving);
            }
            Err(err) => {
                // without a timer there is no transition to run, so hide right away
                log::warn!("tooltip hide timer unavailable: {err}");
                self.shared.transition(|state| state.phase = TooltipPhase::Hidden);
            }
        }
    }

    /// Cancels a pending hide. Safe to call at any time, including when nothing is pending.
    pub fn teardown(&self) {
        self.shared.cancel_hide();
    }
}

impl<S: Scheduler> Drop for CursorTooltip<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::time::Duration;

    fn tooltip(
        reentry: ReentryPolicy,
    ) -> (
        ManualScheduler,
        CursorTooltip<ManualScheduler>,
        Rc<RefCell<Vec<TooltipState>>>,
    ) {
        let scheduler = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let timing = TooltipTiming {
            hide_delay: Duration::from_millis(200),
            reentry,
        };
        let tooltip = CursorTooltip::new(scheduler.clone(), timing, move |state| {
            sink.borrow_mut().push(state)
        });
        (scheduler, tooltip, seen)
    }

    fn flags(tooltip: &CursorTooltip<ManualScheduler>) -> (bool, bool) {
        let v = tooltip.state().visibility();
        (v.visible, v.leaving)
    }

    #[test]
    fn test_enter_shows_immediately() {
        let (_, tooltip, seen) = tooltip(ReentryPolicy::default());
        assert_eq!(flags(&tooltip), (false, false));
        tooltip.pointer_enter();
        assert_eq!(flags(&tooltip), (true, false));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_leave_hides_after_exactly_200ms() {
        let (scheduler, tooltip, _) = tooltip(ReentryPolicy::default());
        tooltip.pointer_enter();
        tooltip.pointer_leave();
        assert_eq!(flags(&tooltip), (true, true));

        scheduler.advance(Duration::from_millis(199));
        assert_eq!(flags(&tooltip), (true, true));
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(flags(&tooltip), (false, false));
        assert!(!tooltip.has_pending_hide());
    }

    #[test]
    fn test_move_tracks_exact_coordinates() {
        let (scheduler, tooltip, _) = tooltip(ReentryPolicy::default());
        tooltip.pointer_move(PointerPosition::new(5.0, 5.0));
        assert_eq!(tooltip.state().position, PointerPosition::default());

        tooltip.pointer_enter();
        tooltip.pointer_move(PointerPosition::new(120.5, 48.25));
        assert_eq!(tooltip.state().position, PointerPosition::new(120.5, 48.25));

        tooltip.pointer_leave();
        tooltip.pointer_move(PointerPosition::new(130.0, 50.0));
        assert_eq!(tooltip.state().position, PointerPosition::new(130.0, 50.0));

        scheduler.advance(Duration::from_millis(200));
        tooltip.pointer_move(PointerPosition::new(1.0, 1.0));
        assert_eq!(tooltip.state().position, PointerPosition::new(130.0, 50.0));
    }

    #[test]
    fn test_reentry_cancels_pending_hide() {
        let (scheduler, tooltip, _) = tooltip(ReentryPolicy::CancelPendingHide);
        tooltip.pointer_enter();
        tooltip.pointer_leave();
        scheduler.advance(Duration::from_millis(150));
        tooltip.pointer_enter();
        assert_eq!(flags(&tooltip), (true, false));
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(Duration::from_millis(500));
        assert_eq!(flags(&tooltip), (true, false));
    }

    #[test]
    fn test_keep_policy_lets_stale_hide_fire() {
        let (scheduler, tooltip, _) = tooltip(ReentryPolicy::KeepPendingHide);
        tooltip.pointer_enter();
        tooltip.pointer_leave();
        scheduler.advance(Duration::from_millis(150));
        tooltip.pointer_enter();
        assert_eq!(flags(&tooltip), (true, true));

        scheduler.advance(Duration::from_millis(50));
        assert_eq!(flags(&tooltip), (false, false));
    }

    #[test]
    fn test_repeated_leave_keeps_single_timer() {
        let (scheduler, tooltip, _) = tooltip(ReentryPolicy::default());
        tooltip.pointer_enter();
        tooltip.pointer_leave();
        scheduler.advance(Duration::from_millis(100));
        tooltip.pointer_leave();
        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(flags(&tooltip), (false, false));
    }

    #[test]
    fn test_leave_without_enter_is_ignored() {
        let (scheduler, tooltip, seen) = tooltip(ReentryPolicy::default());
        tooltip.pointer_leave();
        assert_eq!(scheduler.pending(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_teardown_cancels_pending_hide() {
        let (scheduler, tooltip, seen) = tooltip(ReentryPolicy::default());
        tooltip.teardown();
        tooltip.pointer_enter();
        tooltip.pointer_leave();
        tooltip.teardown();
        tooltip.teardown();
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(flags(&tooltip), (true, true));
        assert_eq!(seen.borrow().len(), 2);

        drop(tooltip);
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_drop_cancels_pending_hide() {
        let (scheduler, tooltip, seen) = tooltip(ReentryPolicy::default());
        tooltip.pointer_enter();
        tooltip.pointer_leave();
        drop(tooltip);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(seen.borrow().len(), 2);
    }
}

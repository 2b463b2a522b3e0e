//! Deadline bookkeeping for the engine's delayed work.
//!
//! There is exactly one slot for a phase-advance timer and one for the
//! per-frame animation handle. Scheduling into an occupied slot cancels the
//! previous occupant first, so stale callbacks can never fire.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    Dwell,
    CycleStep,
    Hold,
    FadeOut,
    Cooldown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub handle: TimerHandle,
    pub kind: TimerKind,
    pub due: Duration,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    phase_timer: Option<Timer>,
    animation: Option<TimerHandle>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_handle(&mut self) -> TimerHandle {
        self.next_id += 1;
        TimerHandle(self.next_id)
    }

    /// Replace the pending phase-advance timer.
    pub fn schedule(&mut self, kind: TimerKind, due: Duration) -> TimerHandle {
        self.cancel_timer();
        let handle = self.next_handle();
        self.phase_timer = Some(Timer { handle, kind, due });
        handle
    }

    pub fn cancel_timer(&mut self) -> Option<Timer> {
        self.phase_timer.take()
    }

    /// Acquire the animation handle, reusing the current one if held.
    pub fn start_animation(&mut self) -> TimerHandle {
        match self.animation {
            Some(h) => h,
            None => {
                let h = self.next_handle();
                self.animation = Some(h);
                h
            }
        }
    }

    pub fn stop_animation(&mut self) {
        self.animation = None;
    }

    /// Drop every pending timer and the animation handle in one step.
    pub fn cancel_all(&mut self) {
        self.phase_timer = None;
        self.animation = None;
    }

    /// Pop the phase timer if it is due at `now`.
    pub fn take_due(&mut self, now: Duration) -> Option<Timer> {
        match self.phase_timer {
            Some(t) if t.due <= now => self.phase_timer.take(),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&Timer> {
        self.phase_timer.as_ref()
    }

    pub fn pending_count(&self) -> usize {
        usize::from(self.phase_timer.is_some())
    }

    pub fn animating(&self) -> bool {
        self.animation.is_some()
    }
}

// Host-side tests for the single-slot timer bookkeeping.

use picker_core::{Scheduler, TimerKind};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn scheduling_replaces_pending_timer() {
    let mut s = Scheduler::new();
    let a = s.schedule(TimerKind::Dwell, ms(2000));
    let b = s.schedule(TimerKind::Dwell, ms(2500));
    assert_ne!(a, b);
    assert_eq!(s.pending_count(), 1);

    let t = s.pending().copied().unwrap();
    assert_eq!(t.handle, b);
    assert_eq!(t.due, ms(2500));
}

#[test]
fn take_due_only_pops_expired_timer() {
    let mut s = Scheduler::new();
    s.schedule(TimerKind::Hold, ms(100));
    assert_eq!(s.take_due(ms(99)), None);
    assert_eq!(s.pending_count(), 1);

    let fired = s.take_due(ms(100)).unwrap();
    assert_eq!(fired.kind, TimerKind::Hold);
    assert_eq!(s.pending_count(), 0);
    assert_eq!(s.take_due(ms(1000)), None);
}

#[test]
fn cancel_all_clears_timer_and_animation() {
    let mut s = Scheduler::new();
    s.schedule(TimerKind::FadeOut, ms(10));
    let h = s.start_animation();
    assert_eq!(s.start_animation(), h);
    assert!(s.animating());

    s.cancel_all();
    assert_eq!(s.pending_count(), 0);
    assert!(!s.animating());
    assert_eq!(s.take_due(ms(1_000)), None);
}

#[test]
fn cancelled_timer_is_returned_once() {
    let mut s = Scheduler::new();
    s.schedule(TimerKind::Cooldown, ms(5));
    assert_eq!(s.cancel_timer().map(|t| t.kind), Some(TimerKind::Cooldown));
    assert_eq!(s.cancel_timer(), None);
}

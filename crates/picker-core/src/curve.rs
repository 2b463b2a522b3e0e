//! Intensity as a pure function of phase and elapsed time.
//!
//! Nothing here holds state or schedules work; the engine evaluates these on
//! every tick and the results are trivially testable.

use crate::config::PickerConfig;
use crate::constants::{BLINK_FLOOR, CYCLING_FLOOR, NOMINAL_FRAME};
use crate::state::Phase;
use std::f32::consts::TAU;
use std::time::Duration;

const MIN_FADE_RATE: f32 = 1e-4;

fn fade_rate(cfg: &PickerConfig) -> f32 {
    cfg.fade_step_rate.clamp(MIN_FADE_RATE, 1.0)
}

/// How long a fade from 1 to 0 takes at the configured per-frame rate.
pub fn fade_duration(cfg: &PickerConfig) -> Duration {
    NOMINAL_FRAME.div_f32(fade_rate(cfg))
}

/// Length of the attention blink at the start of Selected.
///
/// Saturates rather than overflowing for configs that skipped validation.
pub fn blink_window(cfg: &PickerConfig) -> Duration {
    cfg.blink_period()
        .checked_mul(cfg.blink_count)
        .unwrap_or(Duration::MAX)
}

/// Dwell to the end of cooldown for one uninterrupted round.
pub fn round_duration(cfg: &PickerConfig) -> Duration {
    let cycling = if cfg.cycling_active() {
        cfg.cycling_step_delay()
            .checked_mul(cfg.cycling_steps)
            .unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    };
    [
        cfg.dwell_delay(),
        cycling,
        cfg.hold_duration(),
        fade_duration(cfg),
        cfg.cooldown().unwrap_or_default(),
    ]
    .into_iter()
    .fold(Duration::ZERO, Duration::saturating_add)
}

/// Emphasis of the highlighted touch `elapsed` into `phase`, in \[0, 1\].
pub fn intensity(phase: Phase, elapsed: Duration, cfg: &PickerConfig) -> f32 {
    let v = match phase {
        Phase::Idle | Phase::Armed | Phase::Cooldown => 0.0,
        Phase::Cycling => cycling_flash(elapsed, cfg),
        Phase::Selected => selected_blink(elapsed, cfg),
        Phase::Fading => fade_level(elapsed, cfg),
    };
    v.clamp(0.0, 1.0)
}

// Each highlight step flashes to 1 and decays towards the floor.
fn cycling_flash(elapsed: Duration, cfg: &PickerConfig) -> f32 {
    let step = cfg.cycling_step_delay().as_secs_f32();
    if step <= 0.0 {
        return 1.0;
    }
    let frac = (elapsed.as_secs_f32() / step).fract();
    1.0 - (1.0 - CYCLING_FLOOR) * frac
}

fn selected_blink(elapsed: Duration, cfg: &PickerConfig) -> f32 {
    if elapsed >= blink_window(cfg) {
        return 1.0;
    }
    let period = cfg.blink_period().as_secs_f32();
    let wave = 0.5 + 0.5 * (TAU * elapsed.as_secs_f32() / period).cos();
    BLINK_FLOOR + (1.0 - BLINK_FLOOR) * wave
}

fn fade_level(elapsed: Duration, cfg: &PickerConfig) -> f32 {
    let frames = elapsed.as_secs_f32() / NOMINAL_FRAME.as_secs_f32();
    (1.0 - fade_rate(cfg) * frames).max(0.0)
}

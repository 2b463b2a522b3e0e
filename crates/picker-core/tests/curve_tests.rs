// Host-side tests for the intensity curves. These are pure functions of
// (phase, elapsed, config), so no engine or clock is needed.

use picker_core::curve::{blink_window, fade_duration, intensity, round_duration};
use picker_core::{PickerConfig, Phase, BLINK_FLOOR, CYCLING_FLOOR};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn resting_phases_have_no_emphasis() {
    let cfg = PickerConfig::default();
    for phase in [Phase::Idle, Phase::Armed, Phase::Cooldown] {
        for t in [0, 10, 1_000, 60_000] {
            assert_eq!(intensity(phase, ms(t), &cfg), 0.0);
        }
    }
}

#[test]
fn default_fade_lasts_fifty_frames() {
    let d = fade_duration(&PickerConfig::default());
    assert!(d > ms(830) && d < ms(836), "fade lasted {d:?}");

    let fast = PickerConfig {
        fade_step_rate: 1.0,
        ..PickerConfig::default()
    };
    let d = fade_duration(&fast);
    assert!(d > ms(16) && d < ms(18), "fade lasted {d:?}");
}

#[test]
fn fade_is_strictly_decreasing_until_zero() {
    let cfg = PickerConfig::default();
    let end = fade_duration(&cfg);
    assert_eq!(intensity(Phase::Fading, Duration::ZERO, &cfg), 1.0);

    let mut prev = 1.0;
    let mut t = ms(10);
    while t + ms(10) < end {
        let v = intensity(Phase::Fading, t, &cfg);
        assert!(v < prev, "not decreasing at {t:?}");
        assert!(v > 0.0);
        prev = v;
        t += ms(10);
    }
    assert!(intensity(Phase::Fading, end, &cfg) < 1e-3);
    assert_eq!(intensity(Phase::Fading, end + ms(100), &cfg), 0.0);
}

#[test]
fn fade_matches_per_frame_decrement() {
    let cfg = PickerConfig::default();
    // ten nominal frames at 0.02 per frame
    let v = intensity(Phase::Fading, Duration::from_micros(166_670), &cfg);
    assert!((v - 0.8).abs() < 1e-3, "got {v}");
}

#[test]
fn steady_selection_without_blinks() {
    let cfg = PickerConfig::default();
    assert_eq!(blink_window(&cfg), Duration::ZERO);
    for t in [0, 1, 500, 2_999] {
        assert_eq!(intensity(Phase::Selected, ms(t), &cfg), 1.0);
    }
}

#[test]
fn blink_stays_bounded_then_settles() {
    let cfg = PickerConfig {
        blink_count: 3,
        blink_period_ms: 200,
        ..PickerConfig::default()
    };
    assert_eq!(blink_window(&cfg), ms(600));
    assert_eq!(intensity(Phase::Selected, Duration::ZERO, &cfg), 1.0);

    let mut lowest: f32 = 1.0;
    for t in 0..600 {
        let v = intensity(Phase::Selected, ms(t), &cfg);
        assert!(v >= BLINK_FLOOR - 1e-5 && v <= 1.0, "{v} at {t}ms");
        lowest = lowest.min(v);
    }
    assert!(lowest < BLINK_FLOOR + 0.01);
    assert_eq!(intensity(Phase::Selected, ms(600), &cfg), 1.0);
    assert_eq!(intensity(Phase::Selected, ms(2_000), &cfg), 1.0);
}

#[test]
fn cycling_flashes_once_per_step() {
    let cfg = PickerConfig {
        cycling_enabled: true,
        cycling_step_delay_ms: 100,
        ..PickerConfig::default()
    };
    assert_eq!(intensity(Phase::Cycling, Duration::ZERO, &cfg), 1.0);
    let half = intensity(Phase::Cycling, ms(50), &cfg);
    assert!(half < 1.0 && half > CYCLING_FLOOR);
    let late = intensity(Phase::Cycling, ms(99), &cfg);
    assert!(late < half && late >= CYCLING_FLOOR);
    // next step starts bright again
    let next = intensity(Phase::Cycling, ms(101), &cfg);
    assert!(next > 0.95);
}

#[test]
fn unvalidated_blink_window_saturates() {
    let cfg = PickerConfig {
        blink_count: u32::MAX,
        blink_period_ms: u64::MAX,
        ..PickerConfig::default()
    };
    assert_eq!(blink_window(&cfg), Duration::MAX);
    let v = intensity(Phase::Selected, ms(10), &cfg);
    assert!((BLINK_FLOOR..=1.0).contains(&v));
}

#[test]
fn round_covers_every_timed_phase() {
    let cfg = PickerConfig::default();
    assert_eq!(round_duration(&cfg), ms(5_000) + fade_duration(&cfg));

    let cfg = PickerConfig {
        cycling_enabled: true,
        cooldown_ms: 500,
        ..PickerConfig::default()
    };
    assert_eq!(
        round_duration(&cfg),
        ms(2_000 + 12 * 90 + 3_000 + 500) + fade_duration(&cfg)
    );
}

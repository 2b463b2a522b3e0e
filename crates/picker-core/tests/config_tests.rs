// Host-side tests for configuration defaults, validation and query parsing.

use picker_core::{ConfigError, DeparturePolicy, PickerConfig};
use std::time::Duration;

#[test]
fn defaults_match_documented_timings() {
    let cfg = PickerConfig::default();
    assert_eq!(cfg.dwell_delay(), Duration::from_millis(2000));
    assert_eq!(cfg.hold_duration(), Duration::from_millis(3000));
    assert!((cfg.fade_step_rate - 0.02).abs() < f32::EPSILON);
    assert!(!cfg.cycling_enabled);
    assert_eq!(cfg.cooldown(), None);
    assert_eq!(cfg.stale_threshold(), None);
    assert!(cfg.auto_repeat);
    assert_eq!(cfg.departure_policy, DeparturePolicy::Rearm);
    assert!(!cfg.reset_clears_touches);
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn empty_query_gives_defaults() {
    assert_eq!(PickerConfig::from_query(""), Ok(PickerConfig::default()));
    assert_eq!(PickerConfig::from_query("?"), Ok(PickerConfig::default()));
}

#[test]
fn query_overrides_short_and_long_keys() {
    let cfg = PickerConfig::from_query(
        "?dwell=1500&hold_duration_ms=4000&cycle&cycle_steps=8&cooldown=250&stale=1000&departure=keep&repeat=off",
    )
    .unwrap();
    assert_eq!(cfg.dwell_delay_ms, 1500);
    assert_eq!(cfg.hold_duration_ms, 4000);
    assert!(cfg.cycling_enabled);
    assert_eq!(cfg.cycling_steps, 8);
    assert_eq!(cfg.cooldown(), Some(Duration::from_millis(250)));
    assert_eq!(cfg.stale_threshold(), Some(Duration::from_millis(1000)));
    assert_eq!(cfg.departure_policy, DeparturePolicy::Keep);
    assert!(!cfg.auto_repeat);
}

#[test]
fn query_rejects_unknown_keys_and_bad_values() {
    assert_eq!(
        PickerConfig::from_query("speed=9"),
        Err(ConfigError::UnknownKey("speed".into()))
    );
    assert_eq!(
        PickerConfig::from_query("dwell=soon"),
        Err(ConfigError::InvalidValue {
            key: "dwell".into(),
            value: "soon".into()
        })
    );
    assert!(matches!(
        PickerConfig::from_query("cycle=maybe"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        PickerConfig::from_query("departure=sometimes"),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn query_result_is_validated() {
    assert_eq!(
        PickerConfig::from_query("fade=0"),
        Err(ConfigError::FadeRate(0.0))
    );
    assert_eq!(
        PickerConfig::from_query("cycle=1&cycle_ms=0"),
        Err(ConfigError::Cycling)
    );
    assert_eq!(
        PickerConfig::from_query("blinks=2&blink_ms=0"),
        Err(ConfigError::BlinkPeriod)
    );
}

#[test]
fn validation_bounds_fade_rate() {
    for bad in [0.0, -0.5, 1.5, f32::NAN] {
        let cfg = PickerConfig {
            fade_step_rate: bad,
            ..PickerConfig::default()
        };
        assert!(cfg.validate().is_err(), "accepted fade rate {bad}");
    }
    let cfg = PickerConfig {
        fade_step_rate: 1.0,
        ..PickerConfig::default()
    };
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn disabled_cycling_ignores_its_knobs() {
    let cfg = PickerConfig {
        cycling_steps: 0,
        cycling_step_delay_ms: 0,
        ..PickerConfig::default()
    };
    assert_eq!(cfg.validate(), Ok(()));
    assert!(!cfg.cycling_active());
}

#[test]
fn errors_render_readable_messages() {
    let msg = ConfigError::UnknownKey("x".into()).to_string();
    assert_eq!(msg, "unknown config key `x`");
    let msg = ConfigError::FadeRate(2.0).to_string();
    assert!(msg.contains("fade_step_rate"));
}

#[test]
fn oversized_blink_window_is_rejected() {
    let err = PickerConfig::from_query("?blinks=4294967295&blink_ms=18446744073709551615&dwell=10");
    assert_eq!(err, Err(ConfigError::BlinkWindow));

    let cfg = PickerConfig::from_query("?blinks=4&blink_ms=18446744073709551615");
    assert_eq!(cfg, Err(ConfigError::BlinkWindow));

    let cfg = PickerConfig::from_query("?blinks=3&blink_ms=200").unwrap();
    assert_eq!(cfg.blink_count, 3);
}

//! Engine configuration.
//!
//! Every timing knob of the picker lives here. Front ends start from
//! [`PickerConfig::default`] and may layer `key=value` overrides on top (a URL
//! query string on the web, command-line arguments natively).

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

/// What a departure that leaves other touches behind does to a cycle in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeparturePolicy {
    /// Any departure while armed or cycling restarts the dwell from scratch.
    #[default]
    Rearm,
    /// Only an emptied registry or the loss of the selected touch interrupts.
    Keep,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fade_step_rate must be in (0, 1], got {0}")]
    FadeRate(f32),
    #[error("cycling needs at least one step and a non-zero step delay")]
    Cycling,
    #[error("blink_period_ms must be non-zero when blink_count > 0")]
    BlinkPeriod,
    #[error("blink_count * blink_period_ms does not fit in a duration")]
    BlinkWindow,
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PickerConfig {
    pub dwell_delay_ms: u64,
    pub hold_duration_ms: u64,
    pub fade_step_rate: f32,
    pub cycling_enabled: bool,
    pub cycling_steps: u32,
    pub cycling_step_delay_ms: u64,
    /// Pause between a fade finishing and the next dwell. 0 skips the Cooldown phase.
    pub cooldown_ms: u64,
    /// Touches not updated for this long are dropped. 0 disables the policy.
    pub stale_touch_threshold_ms: u64,
    /// Start a new round after a fade when fingers are still down.
    pub auto_repeat: bool,
    /// Attention blinks shown at the start of Selected.
    pub blink_count: u32,
    pub blink_period_ms: u64,
    pub departure_policy: DeparturePolicy,
    pub reset_clears_touches: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            dwell_delay_ms: DEFAULT_DWELL_DELAY_MS,
            hold_duration_ms: DEFAULT_HOLD_DURATION_MS,
            fade_step_rate: DEFAULT_FADE_STEP_RATE,
            cycling_enabled: false,
            cycling_steps: DEFAULT_CYCLING_STEPS,
            cycling_step_delay_ms: DEFAULT_CYCLING_STEP_DELAY_MS,
            cooldown_ms: 0,
            stale_touch_threshold_ms: 0,
            auto_repeat: true,
            blink_count: 0,
            blink_period_ms: DEFAULT_BLINK_PERIOD_MS,
            departure_policy: DeparturePolicy::Rearm,
            reset_clears_touches: false,
        }
    }
}

impl PickerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fade_step_rate > 0.0 && self.fade_step_rate <= 1.0) {
            return Err(ConfigError::FadeRate(self.fade_step_rate));
        }
        if self.cycling_enabled && (self.cycling_steps == 0 || self.cycling_step_delay_ms == 0) {
            return Err(ConfigError::Cycling);
        }
        if self.blink_count > 0 && self.blink_period_ms == 0 {
            return Err(ConfigError::BlinkPeriod);
        }
        if self.blink_period().checked_mul(self.blink_count).is_none() {
            return Err(ConfigError::BlinkWindow);
        }
        Ok(())
    }

    /// Parse `key=value` pairs separated by `&` on top of the defaults.
    ///
    /// A leading `?` is ignored so `location.search` can be passed verbatim.
    /// Keys accept both the short form (`dwell`) and the field name
    /// (`dwell_delay_ms`). The result is validated before it is returned.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            cfg.set(key.trim(), value.trim())?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "dwell" | "dwell_delay_ms" => self.dwell_delay_ms = parse(key, value)?,
            "hold" | "hold_duration_ms" => self.hold_duration_ms = parse(key, value)?,
            "fade" | "fade_step_rate" => self.fade_step_rate = parse(key, value)?,
            "cycle" | "cycling_enabled" => self.cycling_enabled = parse_flag(key, value)?,
            "cycle_steps" | "cycling_steps" => self.cycling_steps = parse(key, value)?,
            "cycle_ms" | "cycling_step_delay_ms" => self.cycling_step_delay_ms = parse(key, value)?,
            "cooldown" | "cooldown_ms" => self.cooldown_ms = parse(key, value)?,
            "stale" | "stale_touch_threshold_ms" => {
                self.stale_touch_threshold_ms = parse(key, value)?
            }
            "repeat" | "auto_repeat" => self.auto_repeat = parse_flag(key, value)?,
            "blinks" | "blink_count" => self.blink_count = parse(key, value)?,
            "blink_ms" | "blink_period_ms" => self.blink_period_ms = parse(key, value)?,
            "departure" | "departure_policy" => {
                self.departure_policy = match value {
                    "rearm" => DeparturePolicy::Rearm,
                    "keep" => DeparturePolicy::Keep,
                    _ => return Err(invalid(key, value)),
                }
            }
            "reset_clears" | "reset_clears_touches" => {
                self.reset_clears_touches = parse_flag(key, value)?
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn dwell_delay(&self) -> Duration {
        Duration::from_millis(self.dwell_delay_ms)
    }

    pub fn hold_duration(&self) -> Duration {
        Duration::from_millis(self.hold_duration_ms)
    }

    pub fn cycling_step_delay(&self) -> Duration {
        Duration::from_millis(self.cycling_step_delay_ms)
    }

    pub fn cooldown(&self) -> Option<Duration> {
        (self.cooldown_ms > 0).then(|| Duration::from_millis(self.cooldown_ms))
    }

    pub fn stale_threshold(&self) -> Option<Duration> {
        (self.stale_touch_threshold_ms > 0)
            .then(|| Duration::from_millis(self.stale_touch_threshold_ms))
    }

    pub fn blink_period(&self) -> Duration {
        Duration::from_millis(self.blink_period_ms)
    }

    /// Cycling only runs when enabled with a usable step count.
    pub fn cycling_active(&self) -> bool {
        self.cycling_enabled && self.cycling_steps > 0
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "" | "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

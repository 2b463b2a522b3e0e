use std::time::Duration;

// Shared timing/visual tuning constants used by both web and native frontends.

// Default timings
pub const DEFAULT_DWELL_DELAY_MS: u64 = 2_000; // fingers down before a pick starts
pub const DEFAULT_HOLD_DURATION_MS: u64 = 3_000; // selection shown at full intensity
pub const DEFAULT_FADE_STEP_RATE: f32 = 0.02; // intensity lost per nominal frame
pub const DEFAULT_CYCLING_STEPS: u32 = 12;
pub const DEFAULT_CYCLING_STEP_DELAY_MS: u64 = 90;
pub const DEFAULT_BLINK_PERIOD_MS: u64 = 250;

// The fade is expressed per display frame; 60 Hz is the nominal refresh rate.
pub const NOMINAL_FRAME: Duration = Duration::from_micros(16_667);

// Intensity floors keep the highlighted touch visible while it animates
pub const CYCLING_FLOOR: f32 = 0.35;
pub const BLINK_FLOOR: f32 = 0.25;

// Upper bound on timer firings processed by one tick (late frames catch up)
pub const MAX_CATCHUP_TRANSITIONS: usize = 64;

// Circle sizing in CSS/logical pixels
pub const TOUCH_RADIUS: f32 = 50.0;
pub const TOUCH_HALO_RADIUS: f32 = 55.0;
pub const GLOW_OUTER_RADIUS: f32 = 90.0;
pub const GLOW_INNER_RADIUS: f32 = 70.0;

// Palette (linear 0..1 RGB)
pub const SELECTED_RGB: [f32; 3] = [1.0, 0.843, 0.0]; // gold
pub const IDLE_RGB: [f32; 3] = [0.290, 0.565, 0.886]; // soft blue
pub const BACKGROUND_RGB: [f32; 3] = [0.0, 0.0, 0.0];

// Alpha of each selection layer at full intensity: outer glow, inner glow, core
pub const GLOW_ALPHAS: [f32; 3] = [0.2, 0.4, 0.9];
pub const RING_ALPHA: f32 = 0.8;
pub const HALO_ALPHA: f32 = 0.2;

// Synthetic id used when a mouse stands in for a finger
pub const MOUSE_TOUCH_ID: i64 = -1;

use glam::Vec2;

// Shared dial and session tuning constants used by the core and the web frontend.

// Dial scale
pub const DIAL_MAX_SECONDS: u32 = 3600; // one full turn is sixty minutes
pub const DIAL_STEPS: u32 = 60; // pointer snaps to whole minutes

// Face layout, in SVG viewBox units (0..100)
pub const FACE_CENTER: Vec2 = Vec2::new(50.0, 50.0);
pub const FACE_RADIUS: f32 = 48.0;
pub const FACE_TICK_COUNT: usize = 60;
pub const FACE_MAJOR_EVERY: usize = 5;
pub const MAJOR_TICK_LENGTH: f32 = 4.0;
pub const MINOR_TICK_LENGTH: f32 = 1.5;
pub const MAJOR_TICK_WIDTH: f32 = 0.8;
pub const MINOR_TICK_WIDTH: f32 = 0.4;
pub const LABEL_RADIUS: f32 = 36.0; // labels sit inside the tick ring

// A full 60:00 wedge ends this far left of 12 o'clock so the arc never degenerates
pub const FULL_CIRCLE_GAP: f32 = 0.01;

// Miniature indicator (favicon) size in pixels
pub const INDICATOR_SIZE_PX: u32 = 32;

// Countdown driver
pub const TICK_INTERVAL_MS: i32 = 1000;

// Focus cycle
pub const CYCLE_TARGET_SECONDS: u32 = 90 * 60;

// Ritual
pub const FEELING_MIN: u8 = 1;
pub const FEELING_MAX: u8 = 5;
pub const FEELING_DEFAULT: u8 = 3;

// Storage keys
pub const BRIDGE_STORAGE_KEY: &str = "stamp_bridge_v2";
pub const CYCLE_STORAGE_KEY: &str = "focusCycleTime";

// Checklist
pub const CHECKLIST_STATE_KEY: &str = "focusDayChecklistState_v16";
pub const CHECKLIST_CONTENT_KEY: &str = "focusDayChecklistContent_v16";
pub const TASK_MAX_MINUTES: u32 = 180;

// Confetti, in CSS pixels per 60 Hz frame
pub const CONFETTI_BURST_COUNT: usize = 100;
pub const CONFETTI_SPRINKLE_COUNT: usize = 20;
pub const CONFETTI_GRAVITY: f32 = 0.1;
pub const CONFETTI_MAX_FALL_SPEED: f32 = 20.0;
pub const CONFETTI_FADE_PER_FRAME: f32 = 0.01;
pub const CONFETTI_FRAME_SECONDS: f32 = 1.0 / 60.0;
pub const CONFETTI_BURST_COLORS: [&str; 4] = ["#22c55e", "#10b981", "#34d399", "#6ee7b7"];
pub const CONFETTI_SPRINKLE_COLORS: [&str; 4] = ["#ef4444", "#facc15", "#3b82f6", "#dc2626"];

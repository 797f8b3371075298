// Shared tuning constants for the particle field, effects and page timings.

// Particle field
pub const MAX_PARTICLES: usize = 150;
pub const PIXELS_PER_PARTICLE: f64 = 10.0; // one ambient particle per 10px of viewport width
pub const PARTICLE_MAX_SPEED: f32 = 0.25; // per axis, px/frame
pub const PARTICLE_RADIUS_MIN: f32 = 0.5;
pub const PARTICLE_RADIUS_MAX: f32 = 2.5;
pub const PARTICLE_CHANNEL_MIN: u8 = 155; // red/green floor for the blue-white palette
pub const PARTICLE_ALPHA_MIN: f32 = 0.2;
pub const PARTICLE_ALPHA_MAX: f32 = 0.7;

// Pointer influence
pub const POINTER_RADIUS: f32 = 100.0;
pub const POINTER_STRENGTH: f32 = 2.0; // max nudge in px at distance 0

// Card tilt
pub const CARD_PERSPECTIVE_PX: f32 = 1000.0;
pub const CARD_TILT_RANGE_DEG: f32 = 20.0; // full sweep across the viewport

// Shooting stars
pub const SHOOTING_STAR_CHANCE: f64 = 0.005; // per frame
pub const SHOOTING_STAR_SPEED_MIN: f32 = 5.0;
pub const SHOOTING_STAR_SPEED_MAX: f32 = 15.0;
pub const SHOOTING_STAR_LINE_WIDTH: f32 = 2.0;
pub const SHOOTING_STAR_ALPHA: f32 = 0.7;
pub const SHOOTING_STAR_TRAIL_RADIUS: f32 = 2.0;

// Burst particles (universe mode)
pub const BURST_COUNT: usize = 50;
pub const BURST_STAGGER_MS: f64 = 50.0;
pub const BURST_LIFETIME_MS: f64 = 2000.0;
pub const BURST_LIFE_FRAMES: u32 = 100;
pub const BURST_MAX_SPEED: f32 = 1.0;
pub const BURST_RADIUS_MIN: f32 = 1.0;
pub const BURST_RADIUS_MAX: f32 = 4.0;
pub const BURST_SATURATION: f32 = 100.0;
pub const BURST_LIGHTNESS: f32 = 70.0;

// Page timings (milliseconds)
pub const NOTIFICATION_MS: f64 = 3000.0;
pub const SKILL_ANIMATION_DELAY_MS: f64 = 300.0;
pub const SKILL_FILL_MS: f64 = 1000.0;
pub const BOT_REPLY_DELAY_MS: f64 = 1000.0;
pub const TYPING_PAUSE_AFTER_MS: f64 = 3500.0;
pub const TYPING_RESTART_AFTER_MS: f64 = 100.0;

// Visualizer
pub const ANALYSER_FFT_SIZE: u32 = 256;
pub const ANALYSER_BINS: usize = 128; // fft size / 2
pub const VISUALIZER_HEIGHT_PX: u32 = 60;
pub const BAR_WIDTH_FACTOR: f32 = 2.5;
pub const BAR_GAP_PX: f32 = 1.0;
pub const TONE_HZ: f32 = 440.0;
pub const TONE_GAIN: f32 = 0.1;

// Timer wheel
pub const WHEEL_TICK_MS: f64 = 10.0;
pub const WHEEL_SLOTS: usize = 256;

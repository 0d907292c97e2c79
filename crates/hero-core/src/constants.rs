// Visual tuning constants for the hero particle field. These are defaults
// for `FieldConfig`, not invariants.

// Point set
pub const NUM_POINTS: usize = 600;
pub const RADIUS_FRACTION: f32 = 0.4; // sphere radius relative to the surface side
pub const BASE_SIZE_MIN: f32 = 1.0;
pub const BASE_SIZE_SPAN: f32 = 0.5;
pub const PULSE_SPEED_MIN: f32 = 0.002; // radians per millisecond
pub const PULSE_SPEED_SPAN: f32 = 0.005;
pub const PULSE_AMPLITUDE: f32 = 0.2; // fraction of base size

// Motion and projection
pub const ROTATION_STEP: f32 = 0.002; // radians per frame about the vertical axis
pub const FOCAL_LENGTH: f32 = 800.0;

// Surface
pub const SURFACE_SIZE_CAP: u32 = 800;

// Cursor interaction
pub const CURSOR_RADIUS_BASE: f32 = 100.0;
pub const CURSOR_RADIUS_PER_SPEED: f32 = 0.5;
pub const REPEL_STRENGTH_BASE: f32 = 80.0;
pub const REPEL_STRENGTH_PER_SPEED: f32 = 0.3;
pub const CURSOR_GLOW_BASE: f32 = 30.0;
pub const CURSOR_GLOW_PER_SPEED: f32 = 0.5;
pub const CURSOR_DOT_RADIUS: f32 = 4.0;
pub const CURSOR_TRAIL_RADIUS: f32 = 2.0;

// Scroll
pub const SCROLL_NORMALIZER: f32 = 500.0; // px of page scroll per unit
pub const SCROLL_DEPTH_FACTOR: f32 = 0.05; // depth offset per unit, in radii

// Connections
pub const CONNECTION_FRACTION: f32 = 0.5; // max link length relative to radius
pub const CONNECTION_ALPHA: f32 = 0.15;
pub const CONNECTION_WIDTH: f32 = 0.5;

// Focal points
pub const FOCAL_POINT_COUNT: usize = 3;
pub const FOCAL_STRIDE: usize = 5; // every n-th point links to a focal point
pub const FOCAL_REACH: f32 = 1.5; // in units of max connection distance
pub const FOCAL_ALPHA: f32 = 0.08;
pub const FOCAL_LINK_OPACITY: f32 = 0.1;
pub const FOCAL_LINK_WIDTH: f32 = 0.3;
pub const FOCAL_PERIOD_X_MS: f64 = 10_000.0;
pub const FOCAL_PERIOD_Y_MS: f64 = 12_000.0;

// Point sprites
pub const POINT_GLOW_SCALE: f32 = 3.0;
pub const POINT_GLOW_ALPHA: f32 = 0.3;
pub const POINT_OPACITY_SCALE: f32 = 0.8;

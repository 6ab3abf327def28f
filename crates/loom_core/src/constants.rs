// Geometry is in logical pixels of the drawing surface.
// Opacity and alpha are in [0, 1]; hue is in degrees.

/// Radius around the pointer inside which threads feel a force
pub const POINTER_RADIUS: f32 = 200.0;

/// Opacity gained per unit of pointer force
pub const POINTER_GLOW_GAIN: f32 = 0.3;

/// Threads closer than this are joined by a line
pub const CONNECTION_DISTANCE: f32 = 120.0;

/// Links and threads this close to the pointer are drawn brighter
pub const HIGHLIGHT_RADIUS: f32 = 150.0;

/// Alpha multiplier for links near the pointer
pub const HIGHLIGHT_BOOST: f32 = 1.5;

/// Line width for links near the pointer (1.0 elsewhere)
pub const HIGHLIGHT_LINE_WIDTH: f32 = 2.0;

/// Glow radius as a multiple of the thread size
pub const GLOW_SCALE: f32 = 3.0;

/// Glow alpha as a fraction of the thread opacity
pub const GLOW_ALPHA: f32 = 0.2;

/// Opacity never decays below this
pub const OPACITY_FLOOR: f32 = 0.3;

/// Upper bound of the opacity a thread is seeded with
pub const OPACITY_SEED_MAX: f32 = 0.9;

/// Multiplicative opacity decay per tick away from the pointer
pub const OPACITY_DECAY: f32 = 0.99;

/// Seed velocity components are drawn from +-this
pub const SEED_VELOCITY: f32 = 0.1;

/// Hue range of the thread palette (blue to cyan)
pub const HUE_MIN: f32 = 180.0;
pub const HUE_MAX: f32 = 240.0;

/// Thread radius range
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_MAX: f32 = 3.0;

/// Saturation and lightness shared by every thread colour
pub const THREAD_SATURATION: f32 = 0.7;
pub const THREAD_LIGHTNESS: f32 = 0.6;

/// Thread count for the untiered build
pub const UNTIERED_THREAD_COUNT: usize = 12;

/// Fallback device hints when the host reports nothing
pub const FALLBACK_MEMORY_GB: f32 = 4.0;
pub const FALLBACK_CORES: u32 = 4;

/// Minimum time the loading screen stays up after the projects are in (ms)
pub const LOADING_LINGER_MS: u64 = 800;

/// Delay between card reveal steps (ms)
pub const REVEAL_STEP_MS: u64 = 100;

/// Highest reveal step a card can get
pub const MAX_REVEAL_STEP: usize = 4;

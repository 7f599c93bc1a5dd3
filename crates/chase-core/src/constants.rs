// Shared motion tuning constants used by the core and the web frontend.

// Default slider values (pixels per second / pixels)
pub const DEFAULT_BASE_VELOCITY: f32 = 300.0;
pub const DEFAULT_REFERENCE_DISTANCE: f32 = 300.0;

// Speed floor for the distance-aware models; keeps the marker from stalling near the target
pub const MIN_SPEED_PER_SEC: f32 = 5.0;

// Page element ids and sizing used by the web frontend.
// These mirror the markup in `index.html`; keep the two in sync.

// Marker element and its half-size, so positions address the circle's centre
pub const MARKER_ID: &str = "circle";
pub const MARKER_RADIUS_PX: f32 = 25.0;

// Motion model `<select>`; option values are the model names
pub const MODE_SELECT_ID: &str = "current-function";

// Every parameter slider carries this class
pub const SLIDER_CLASS: &str = "slider";

// Class toggled on a slider container to hide it
pub const HIDDEN_CLASS: &str = "is-hidden";

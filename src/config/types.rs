//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Drawing defaults applied when a session is created.
///
/// Everything here can be changed at runtime through the session façade;
/// the config only seeds the initial state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingDefaults {
    /// Initial shape kind, by kebab-case name (e.g. "circle",
    /// "right-triangle"). Falls back to the highest-priority enabled kind
    /// when unknown or not enabled on the session.
    #[serde(default = "default_type")]
    pub default_type: String,

    /// Initial value of the shared `color` parameter
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Initial content for text-kind shapes
    #[serde(default = "default_draw_text")]
    pub draw_text: String,

    /// Control-point capture radius in pixels (valid range: 1.0 - 64.0)
    #[serde(default = "default_capture_radius")]
    pub capture_radius: f64,
}

impl Default for DrawingDefaults {
    fn default() -> Self {
        Self {
            default_type: default_type(),
            default_color: default_color(),
            draw_text: default_draw_text(),
            capture_radius: default_capture_radius(),
        }
    }
}

/// Performance tuning options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceTuning {
    /// Minimum gap between non-final redraw requests in milliseconds
    /// (valid range: 0 - 1000). Final gesture events always redraw.
    #[serde(default = "default_redraw_interval_ms")]
    pub redraw_interval_ms: u64,
}

impl Default for PerformanceTuning {
    fn default() -> Self {
        Self {
            redraw_interval_ms: default_redraw_interval_ms(),
        }
    }
}

fn default_type() -> String {
    "point".to_string()
}

fn default_color() -> String {
    "lightblue".to_string()
}

fn default_draw_text() -> String {
    "EDIT ME".to_string()
}

fn default_capture_radius() -> f64 {
    8.0
}

fn default_redraw_interval_ms() -> u64 {
    20
}

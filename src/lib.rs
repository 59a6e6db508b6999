//! Bouncing Squares - a fixed-canvas drifting squares demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (placement, motion, collision)
//! - `renderer`: wgpu rendering pipeline
//! - `app`: winit window, event loop, and frame pacing

pub mod app;
pub mod renderer;
pub mod sim;

pub use sim::{Rect, Square, World};

/// Demo configuration constants
pub mod consts {
    use std::time::Duration;

    /// Canvas dimensions in logical units
    pub const CANVAS_WIDTH: f32 = 1000.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Number of squares spawned at startup
    pub const SQUARE_COUNT: usize = 25;

    /// Half-size range for generated squares
    pub const MIN_RADIUS: f32 = 20.0;
    pub const MAX_RADIUS: f32 = 50.0;

    /// Alpha channel applied to every generated fill color
    pub const FILL_ALPHA: u8 = 200;

    /// Spawn centers are sampled from this margined sub-rectangle so a
    /// maximum-size square still starts inside the canvas
    pub const SPAWN_X_MIN: f32 = 100.0;
    pub const SPAWN_X_MAX: f32 = 900.0;
    pub const SPAWN_Y_MIN: f32 = 25.0;
    pub const SPAWN_Y_MAX: f32 = 575.0;

    /// Placement gives up after this many rejected candidates
    pub const PLACEMENT_ATTEMPTS: u32 = 100;

    /// Horizontal step choices (logical units per frame)
    pub const STEP_CHOICES: [f32; 4] = [-2.0, -1.0, 1.0, 2.0];

    /// Target frame interval (60 Hz)
    pub const FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 60);

    /// Window title
    pub const WINDOW_TITLE: &str = "Bouncing Squares";
}

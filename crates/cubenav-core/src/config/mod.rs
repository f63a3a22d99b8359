//! Configuration and tuning constants.
//!
//! This module contains:
//! - `WidgetConfig` - the TOML-backed widget configuration
//! - Navigation, click, wobble, intro and viewport constants

mod widget;

pub use widget::*;

/// Orientation convergence.
///
/// The cube approaches its target by a fixed fraction of the remaining
/// rotation each frame: 0.12 leaves ~0.1% of the angle after 55 frames.
pub mod navigation {
    /// Default per-frame slerp factor.
    pub const DEFAULT_SMOOTHING: f32 = 0.12;

    /// Remaining angle (radians) below which the orientation snaps to target.
    pub const CONVERGENCE_EPSILON: f32 = 1e-4;

    /// Index of the home face in every face table.
    pub const HOME_INDEX: usize = 0;
}

/// Click region thresholds, in texture coordinates.
pub mod click {
    pub const DEFAULT_EDGE_MARGIN: f32 = 0.25;
    pub const DEFAULT_CENTER_MIN: f32 = 0.35;
    pub const DEFAULT_CENTER_MAX: f32 = 0.65;

    /// Material slot of the +z (front) face of the cube geometry.
    pub const FRONT_MATERIAL_SLOT: usize = 4;
}

/// Idle wobble applied while resting on the home face.
pub mod wobble {
    /// Angular frequency of the X rotation wobble (rad/s).
    pub const ROTATION_X_FREQ: f32 = 1.13;
    /// Angular frequency of the Y rotation wobble (rad/s).
    pub const ROTATION_Y_FREQ: f32 = 1.37;
    /// Peak rotation offset (radians).
    pub const ROTATION_AMPLITUDE: f32 = 0.005;

    /// Angular frequency of the vertical bob (rad/s).
    pub const BOB_FREQ: f32 = 1.35;
    /// Peak vertical offset (world units).
    pub const BOB_AMPLITUDE: f32 = 0.07;
}

/// Intro animation timing.
///
/// Phases: FlyIn 0-30%, Spin 30-65%, Settle 65-85%, Crossfade 85-100%.
pub mod intro {
    use std::time::Duration;

    pub const DEFAULT_DURATION: Duration = Duration::from_millis(3200);

    /// End of each phase as a fraction of the total duration.
    pub const PHASE_ENDS: [f32; 4] = [0.30, 0.65, 0.85, 1.0];

    /// Starting depth of the fly-in, relative to the resting position.
    pub const FLY_IN_DEPTH: f32 = -12.0;

    /// Forward tilt (radians) held from the fly-in until the settle.
    pub const TILT: f32 = 0.45;
}

/// Canvas sizing.
pub mod viewport {
    /// Canvas height as a fraction of the window height.
    pub const HEIGHT_RATIO: f32 = 0.90;
}

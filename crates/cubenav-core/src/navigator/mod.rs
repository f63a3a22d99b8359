//! Face navigation and orientation control.
//!
//! The navigator owns which face is active and where the cube is pointing.
//! Intents move the target discretely; [`FaceNavigator::advance`] moves the
//! current orientation towards it once per frame by exponential decay.

mod adjacency;
mod panel;

pub use adjacency::Adjacency;
pub use panel::{InfoPanel, NullPanel, PanelUpdate};

use glam::{EulerRot, Quat, Vec3};
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::navigation::{CONVERGENCE_EPSILON, HOME_INDEX};
use crate::config::wobble;
use crate::error::{Error, Result};
use crate::face::{Face, FaceTable};
use crate::input::{ClickRegions, HitTest, Intent};
use crate::orientation::angular_distance;

/// Outcome of a navigation intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    Moved { from: usize, to: usize },
    Ignored,
}

/// Cosmetic idle motion layered over the orientation at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wobble {
    pub rotation: Quat,
    pub offset: Vec3,
}

impl Wobble {
    pub const NONE: Self = Self {
        rotation: Quat::IDENTITY,
        offset: Vec3::ZERO,
    };

    /// Wobble at `elapsed` seconds.
    pub fn at(elapsed: f32) -> Self {
        let rx = (elapsed * wobble::ROTATION_X_FREQ).sin() * wobble::ROTATION_AMPLITUDE;
        let ry = (elapsed * wobble::ROTATION_Y_FREQ).cos() * wobble::ROTATION_AMPLITUDE;
        let bob = (elapsed * wobble::BOB_FREQ).sin() * wobble::BOB_AMPLITUDE;
        Self {
            rotation: Quat::from_euler(EulerRot::XYZ, rx, ry, 0.0),
            offset: Vec3::new(0.0, bob, 0.0),
        }
    }
}

pub struct FaceNavigator<P: InfoPanel> {
    faces: FaceTable,
    adjacency: Adjacency,
    regions: ClickRegions,
    panel: P,
    smoothing: f32,
    current_face: usize,
    current_orientation: Quat,
    target_orientation: Quat,
}

impl<P: InfoPanel> FaceNavigator<P> {
    /// Create a navigator resting on the home face.
    ///
    /// The panel receives an initial hidden update.
    pub fn new(faces: FaceTable, regions: ClickRegions, panel: P, smoothing: f32) -> Result<Self> {
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            return Err(Error::InvalidSmoothing(smoothing));
        }
        regions.validate()?;

        let home = faces.home().orientation;
        let mut navigator = Self {
            adjacency: Adjacency::from_faces(&faces),
            faces,
            regions,
            panel,
            smoothing,
            current_face: HOME_INDEX,
            current_orientation: home,
            target_orientation: home,
        };
        navigator.notify_panel();
        Ok(navigator)
    }

    /// Turn towards face `index` and update the panel.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a face of this navigator. Callers are expected
    /// to only pass indices produced by the adjacency table.
    pub fn go_to_face(&mut self, index: usize) {
        assert!(
            index < self.faces.len(),
            "face index {} out of range (0..{})",
            index,
            self.faces.len()
        );

        let face = self.faces.get(index).expect("index checked above");
        debug!("Going to face {} ({})", index, face.label);
        self.target_orientation = face.orientation;
        self.current_face = index;
        self.notify_panel();
    }

    /// Apply `intent` against the menu graph; absent edges are no-ops.
    pub fn on_navigation_intent(&mut self, intent: Intent) -> Transition {
        let from = self.current_face;
        match self.adjacency.next(from, intent) {
            Some(to) => {
                self.go_to_face(to);
                Transition::Moved { from, to }
            }
            None => {
                debug!("Ignoring {} at face {}", intent, from);
                Transition::Ignored
            }
        }
    }

    /// Route a hit on the cube through the click regions.
    pub fn on_click(&mut self, hit: &HitTest) -> Transition {
        match self.regions.classify_hit(hit) {
            Some(intent) => self.on_navigation_intent(intent),
            None => {
                trace!("Click {:?} outside any region", hit);
                Transition::Ignored
            }
        }
    }

    /// Move the current orientation a fraction `delta_factor` of the way to
    /// the target. The factor is clamped to `[0, 1]`.
    pub fn advance(&mut self, delta_factor: f32) {
        let t = delta_factor.clamp(0.0, 1.0);
        if !(t > 0.0) || self.current_orientation == self.target_orientation {
            return;
        }

        let next = self
            .current_orientation
            .slerp(self.target_orientation, t)
            .normalize();
        self.current_orientation = if angular_distance(next, self.target_orientation)
            < CONVERGENCE_EPSILON
        {
            self.target_orientation
        } else {
            next
        };
    }

    /// One frame of convergence at the configured smoothing factor.
    pub fn step(&mut self) {
        self.advance(self.smoothing);
    }

    /// Idle wobble for the current frame; only the home face wobbles.
    pub fn wobble(&self, elapsed: f32) -> Wobble {
        if self.current_face == HOME_INDEX {
            Wobble::at(elapsed)
        } else {
            Wobble::NONE
        }
    }

    fn notify_panel(&mut self) {
        let update = PanelUpdate::for_face(self.current());
        self.panel.update(&update);
    }

    pub fn current(&self) -> &Face {
        self.faces
            .get(self.current_face)
            .expect("current face is valid")
    }

    pub fn current_face(&self) -> usize {
        self.current_face
    }

    pub fn current_orientation(&self) -> Quat {
        self.current_orientation
    }

    pub fn target_orientation(&self) -> Quat {
        self.target_orientation
    }

    /// Remaining rotation (radians) between current and target.
    pub fn angular_distance(&self) -> f32 {
        angular_distance(self.current_orientation, self.target_orientation)
    }

    pub fn is_settled(&self) -> bool {
        self.current_orientation == self.target_orientation
    }

    pub fn is_home(&self) -> bool {
        self.current_face == HOME_INDEX
    }

    pub fn faces(&self) -> &FaceTable {
        &self.faces
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn into_panel(self) -> P {
        self.panel
    }
}

//! Intro animation played once before the menu takes input.
//!
//! The sequence is a pure function of elapsed time: each phase owns a fixed
//! fraction of the total duration and `sample` interpolates within it.

use std::time::Duration;

use glam::{Quat, Vec3};
use serde::Serialize;
use strum::{Display, IntoStaticStr};
use tracing::debug;

use crate::config::intro::{DEFAULT_DURATION, FLY_IN_DEPTH, PHASE_ENDS, TILT};
use crate::orientation::{ease_in_out_cubic, ease_out_cubic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IntroPhase {
    /// Cube travels in from the distance, tilted towards the viewer.
    FlyIn,
    /// One full turn about the vertical axis.
    Spin,
    /// Tilt eases out to the home orientation.
    Settle,
    /// Face labels fade in over the blank faces.
    Crossfade,
}

impl IntroPhase {
    const ALL: [IntroPhase; 4] = [Self::FlyIn, Self::Spin, Self::Settle, Self::Crossfade];

    fn index(self) -> usize {
        match self {
            Self::FlyIn => 0,
            Self::Spin => 1,
            Self::Settle => 2,
            Self::Crossfade => 3,
        }
    }

    /// Start and end of this phase as fractions of the total duration.
    pub fn bounds(self) -> (f32, f32) {
        let i = self.index();
        let start = if i == 0 { 0.0 } else { PHASE_ENDS[i - 1] };
        (start, PHASE_ENDS[i])
    }
}

/// What the renderer should show at one instant of the intro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntroFrame {
    /// `None` once the sequence has completed.
    pub phase: Option<IntroPhase>,
    pub orientation: Quat,
    pub position_offset: Vec3,
    pub label_opacity: f32,
}

#[derive(Debug, Clone)]
pub struct IntroSequence {
    duration: Duration,
    home: Quat,
    skipped: bool,
}

impl Default for IntroSequence {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION, Quat::IDENTITY)
    }
}

impl IntroSequence {
    /// Intro of total length `duration`, ending on the `home` orientation.
    pub fn new(duration: Duration, home: Quat) -> Self {
        Self {
            duration,
            home,
            skipped: false,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Phase active at `elapsed`, or `None` when the intro is over.
    pub fn phase_at(&self, elapsed: Duration) -> Option<IntroPhase> {
        if self.skipped || elapsed >= self.duration {
            return None;
        }
        let p = self.progress(elapsed);
        IntroPhase::ALL
            .into_iter()
            .find(|phase| p < phase.bounds().1)
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.phase_at(elapsed).is_none()
    }

    /// Skip to the end. Refused while the cube is still flying in.
    pub fn try_skip(&mut self, elapsed: Duration) -> bool {
        match self.phase_at(elapsed) {
            None => true,
            Some(IntroPhase::FlyIn) => false,
            Some(phase) => {
                debug!("Intro skipped during {}", phase);
                self.skipped = true;
                true
            }
        }
    }

    pub fn sample(&self, elapsed: Duration) -> IntroFrame {
        let Some(phase) = self.phase_at(elapsed) else {
            return IntroFrame {
                phase: None,
                orientation: self.home,
                position_offset: Vec3::ZERO,
                label_opacity: 1.0,
            };
        };

        let (start, end) = phase.bounds();
        let local = ((self.progress(elapsed) - start) / (end - start)).clamp(0.0, 1.0);
        let tilted = Quat::from_rotation_x(TILT) * self.home;

        let (orientation, position_offset, label_opacity) = match phase {
            IntroPhase::FlyIn => {
                let z = FLY_IN_DEPTH * (1.0 - ease_out_cubic(local));
                (tilted, Vec3::new(0.0, 0.0, z), 0.0)
            }
            IntroPhase::Spin => {
                let turn = std::f32::consts::TAU * ease_in_out_cubic(local);
                (Quat::from_rotation_y(turn) * tilted, Vec3::ZERO, 0.0)
            }
            IntroPhase::Settle => {
                let q = tilted.slerp(self.home, ease_in_out_cubic(local));
                (q.normalize(), Vec3::ZERO, 0.0)
            }
            IntroPhase::Crossfade => (self.home, Vec3::ZERO, local),
        };

        IntroFrame {
            phase: Some(phase),
            orientation,
            position_offset,
            label_opacity,
        }
    }
}

use std::f32::consts::FRAC_PI_2;

use glam::Quat;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::config::click::FRONT_MATERIAL_SLOT;

/// Edge of the home face, and the way the cube turns to reach its neighbour.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Position in a `[_; 4]` table indexed by direction.
    pub(crate) fn slot(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// Cube orientation that turns the face on this edge towards the camera.
    ///
    /// Rotating +pi/2 about X carries the top face (+y) onto +z; rotating
    /// -pi/2 about Y carries the right face (+x) onto +z.
    pub fn face_orientation(self) -> Quat {
        match self {
            Self::Up => Quat::from_rotation_x(FRAC_PI_2),
            Self::Down => Quat::from_rotation_x(-FRAC_PI_2),
            Self::Right => Quat::from_rotation_y(-FRAC_PI_2),
            Self::Left => Quat::from_rotation_y(FRAC_PI_2),
        }
    }

    /// Box geometry material slot of the face on this edge.
    pub fn material_slot(self) -> usize {
        match self {
            Self::Right => 0,
            Self::Left => 1,
            Self::Up => 2,
            Self::Down => 3,
        }
    }
}

/// Orientation for a face given its edge (`None` is home).
pub fn orientation_for_edge(edge: Option<Direction>) -> Quat {
    edge.map_or(Quat::IDENTITY, Direction::face_orientation)
}

/// Material slot for a face given its edge (`None` is home).
pub fn material_slot_for_edge(edge: Option<Direction>) -> usize {
    edge.map_or(FRONT_MATERIAL_SLOT, Direction::material_slot)
}

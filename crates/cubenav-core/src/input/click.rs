//! Click routing by texture coordinates.
//!
//! The front face is split into four edge bands and a centre:
//!
//! ```text
//!   v=1 +-----+-----+-----+
//!       |     | Up  |     |
//!       +-----+-----+-----+
//!       |Left |     |Right|
//!       +-----+-----+-----+
//!       |     |Down |     |
//!   v=0 +-----+-----+-----+
//!      u=0               u=1
//! ```
//!
//! Each band is `edge_margin` deep and limited to `[center_min, center_max]`
//! on the other axis, so corners and the centre carry no intent.

use serde::{Deserialize, Serialize};

use crate::config::click::{
    DEFAULT_CENTER_MAX, DEFAULT_CENTER_MIN, DEFAULT_EDGE_MARGIN, FRONT_MATERIAL_SLOT,
};
use crate::error::{Error, Result};

use super::Intent;

/// Result of the renderer's ray intersection against the cube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitTest {
    pub material_index: usize,
    pub u: f32,
    pub v: f32,
}

impl HitTest {
    pub fn new(material_index: usize, u: f32, v: f32) -> Self {
        Self {
            material_index,
            u,
            v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickRegions {
    pub edge_margin: f32,
    pub center_min: f32,
    pub center_max: f32,
}

impl Default for ClickRegions {
    fn default() -> Self {
        Self {
            edge_margin: DEFAULT_EDGE_MARGIN,
            center_min: DEFAULT_CENTER_MIN,
            center_max: DEFAULT_CENTER_MAX,
        }
    }
}

impl ClickRegions {
    pub fn new(edge_margin: f32, center_min: f32, center_max: f32) -> Result<Self> {
        let regions = Self {
            edge_margin,
            center_min,
            center_max,
        };
        regions.validate()?;
        Ok(regions)
    }

    pub fn validate(&self) -> Result<()> {
        let margin_ok = self.edge_margin > 0.0 && self.edge_margin < 0.5;
        let band_ok =
            self.center_min >= 0.0 && self.center_min < self.center_max && self.center_max <= 1.0;
        if margin_ok && band_ok {
            Ok(())
        } else {
            Err(Error::InvalidClickRegions {
                edge_margin: self.edge_margin,
                center_min: self.center_min,
                center_max: self.center_max,
            })
        }
    }

    fn in_band(&self, x: f32) -> bool {
        (self.center_min..=self.center_max).contains(&x)
    }

    /// Classify a point on the front face. Pure in `(u, v)` and the thresholds.
    pub fn classify_click(&self, u: f32, v: f32) -> Option<Intent> {
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            return None;
        }

        let far = 1.0 - self.edge_margin;
        if v >= far && self.in_band(u) {
            Some(Intent::Up)
        } else if v <= self.edge_margin && self.in_band(u) {
            Some(Intent::Down)
        } else if u >= far && self.in_band(v) {
            Some(Intent::Right)
        } else if u <= self.edge_margin && self.in_band(v) {
            Some(Intent::Left)
        } else {
            None
        }
    }

    /// Classify a hit, ignoring anything but the front material slot.
    pub fn classify_hit(&self, hit: &HitTest) -> Option<Intent> {
        if hit.material_index != FRONT_MATERIAL_SLOT {
            return None;
        }
        self.classify_click(hit.u, hit.v)
    }
}

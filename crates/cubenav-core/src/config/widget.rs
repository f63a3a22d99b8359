use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::face::{FaceSpec, FaceTable, default_specs};
use crate::input::ClickRegions;

use super::{intro, navigation};

/// Widget configuration, usually read from a TOML file.
///
/// Every field is optional in the file; missing values use the defaults.
///
/// ```toml
/// smoothing = 0.12
///
/// [click]
/// edge_margin = 0.25
///
/// [intro]
/// enabled = false
///
/// [[menu.sections]]
/// label = "Blog"
/// text = "Notes and write-ups."
/// edge = "right"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Per-frame slerp factor, in (0, 1].
    pub smoothing: f32,
    pub click: ClickRegions,
    pub wobble: WobbleConfig,
    pub intro: IntroConfig,
    pub menu: MenuConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            smoothing: navigation::DEFAULT_SMOOTHING,
            click: ClickRegions::default(),
            wobble: WobbleConfig::default(),
            intro: IntroConfig::default(),
            menu: MenuConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WobbleConfig {
    pub enabled: bool,
}

impl Default for WobbleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub enabled: bool,
    pub duration_secs: f32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_secs: intro::DEFAULT_DURATION.as_secs_f32(),
        }
    }
}

impl IntroConfig {
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.duration_secs).unwrap_or(intro::DEFAULT_DURATION)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub home: FaceSpec,
    pub sections: Vec<FaceSpec>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        let (home, sections) = default_specs();
        Self { home, sections }
    }
}

impl WidgetConfig {
    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate config content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(Error::InvalidSmoothing(self.smoothing));
        }
        self.click.validate()?;
        if !(self.intro.duration_secs.is_finite() && self.intro.duration_secs >= 0.0) {
            return Err(Error::ConfigParse(format!(
                "intro.duration_secs must be a non-negative number, got {}",
                self.intro.duration_secs
            )));
        }
        self.face_table().map(|_| ())
    }

    pub fn face_table(&self) -> Result<FaceTable> {
        FaceTable::from_specs(self.menu.home.clone(), self.menu.sections.clone())
    }
}

pub mod config;
pub mod error;
pub mod face;
pub mod input;
pub mod intro;
pub mod navigator;
pub mod orientation;
pub mod widget;

pub use config::WidgetConfig;
pub use error::{Error, Result};
pub use face::{Direction, Face, FaceContent, FaceSpec, FaceTable, MenuEntry};
pub use input::{ClickRegions, HitTest, Intent, KeyEdgeDetector, NavKey};
pub use intro::{IntroFrame, IntroPhase, IntroSequence};
pub use navigator::{FaceNavigator, InfoPanel, NullPanel, PanelUpdate, Transition, Wobble};
pub use widget::{CubeWidget, FrameState, Renderer, Viewport};

//! Input handling for the cube menu.
//!
//! Keyboard and pointer events are reduced to [`Intent`]s before they reach
//! the navigator.

pub mod click;
pub mod intent;
pub mod keyboard;

pub use click::{ClickRegions, HitTest};
pub use intent::Intent;
pub use keyboard::{KeyEdgeDetector, NavKey};

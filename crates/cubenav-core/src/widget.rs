//! Widget instance tying the intro, input and navigator together.
//!
//! A `CubeWidget` is created once per page and driven by an external frame
//! scheduler: input callbacks between frames, then [`CubeWidget::frame`].

use std::time::Duration;

use glam::{Quat, Vec3};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{WidgetConfig, viewport};
use crate::error::Result;
use crate::face::FaceTable;
use crate::input::{HitTest, KeyEdgeDetector, NavKey};
use crate::intro::{IntroPhase, IntroSequence};
use crate::navigator::{FaceNavigator, InfoPanel, Transition, Wobble};

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameState {
    pub orientation: Quat,
    pub position_offset: Vec3,
    pub label_opacity: f32,
    pub face: usize,
    pub intro_phase: Option<IntroPhase>,
    pub settled: bool,
}

/// Rendering collaborator.
pub trait Renderer {
    /// Receive static per-face content once, before the first frame.
    fn load_faces(&mut self, faces: &FaceTable) -> Result<()>;

    /// Window size changed; also sent once before the first frame.
    fn resize(&mut self, viewport: &Viewport) -> Result<()>;

    fn render(&mut self, frame: &FrameState) -> Result<()>;
}

/// Canvas size derived from the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn from_window(window_width: f32, window_height: f32) -> Self {
        Self {
            width: window_width,
            height: window_height * viewport::HEIGHT_RATIO,
        }
    }

    /// Track a window resize; returns the new aspect ratio.
    pub fn resize(&mut self, window_width: f32, window_height: f32) -> f32 {
        *self = Self::from_window(window_width, window_height);
        self.aspect()
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

pub struct CubeWidget<P: InfoPanel> {
    navigator: FaceNavigator<P>,
    keys: KeyEdgeDetector,
    intro: Option<IntroSequence>,
    wobble: bool,
    last_elapsed: Duration,
}

impl<P: InfoPanel> CubeWidget<P> {
    pub fn new(config: &WidgetConfig, panel: P) -> Result<Self> {
        config.validate()?;
        let faces = config.face_table()?;
        let home = faces.home().orientation;
        let navigator = FaceNavigator::new(faces, config.click, panel, config.smoothing)?;
        let intro = config
            .intro
            .enabled
            .then(|| IntroSequence::new(config.intro.duration(), home));

        info!(
            "Cube widget ready: {} faces, intro {}",
            navigator.faces().len(),
            if intro.is_some() { "on" } else { "off" }
        );

        Ok(Self {
            navigator,
            keys: KeyEdgeDetector::new(),
            intro,
            wobble: config.wobble.enabled,
            last_elapsed: Duration::ZERO,
        })
    }

    /// Hand the static face content to the renderer.
    pub fn load_renderer<R: Renderer>(&self, renderer: &mut R) -> Result<()> {
        renderer.load_faces(self.navigator.faces())
    }

    /// Produce the frame at `elapsed` since widget start.
    pub fn frame(&mut self, elapsed: Duration) -> FrameState {
        self.last_elapsed = elapsed;

        if let Some(intro) = &self.intro {
            if !intro.is_complete(elapsed) {
                let sample = intro.sample(elapsed);
                return FrameState {
                    orientation: sample.orientation,
                    position_offset: sample.position_offset,
                    label_opacity: sample.label_opacity,
                    face: self.navigator.current_face(),
                    intro_phase: sample.phase,
                    settled: false,
                };
            }
            info!("Intro finished at {:.2}s", elapsed.as_secs_f32());
            self.intro = None;
        }

        self.navigator.step();
        let wobble = if self.wobble {
            self.navigator.wobble(elapsed.as_secs_f32())
        } else {
            Wobble::NONE
        };

        FrameState {
            orientation: wobble.rotation * self.navigator.current_orientation(),
            position_offset: wobble.offset,
            label_opacity: 1.0,
            face: self.navigator.current_face(),
            intro_phase: None,
            settled: self.navigator.is_settled(),
        }
    }

    /// Returns true if the intro swallowed the input.
    fn intro_consumes_input(&mut self) -> bool {
        let elapsed = self.last_elapsed;
        let Some(intro) = self.intro.as_mut() else {
            return false;
        };
        if intro.is_complete(elapsed) {
            return false;
        }
        if intro.try_skip(elapsed) {
            info!("Intro skipped by input");
        } else {
            debug!("Input ignored during fly-in");
        }
        true
    }

    pub fn key_down(&mut self, key: NavKey) -> Transition {
        let Some(intent) = self.keys.key_down(key) else {
            return Transition::Ignored;
        };
        if self.intro_consumes_input() {
            return Transition::Ignored;
        }
        self.navigator.on_navigation_intent(intent)
    }

    /// Key by DOM-style identifier; unknown keys are ignored.
    pub fn key_down_identifier(&mut self, key: &str) -> Transition {
        match NavKey::from_identifier(key) {
            Some(key) => self.key_down(key),
            None => Transition::Ignored,
        }
    }

    pub fn key_up(&mut self, key: NavKey) {
        self.keys.key_up(key);
    }

    /// Focus lost: key releases will not arrive.
    pub fn blur(&mut self) {
        self.keys.reset();
    }

    pub fn click(&mut self, hit: &HitTest) -> Transition {
        if self.intro_consumes_input() {
            return Transition::Ignored;
        }
        self.navigator.on_click(hit)
    }

    pub fn intro_active(&self) -> bool {
        self.intro
            .as_ref()
            .is_some_and(|intro| !intro.is_complete(self.last_elapsed))
    }

    pub fn navigator(&self) -> &FaceNavigator<P> {
        &self.navigator
    }

    /// Tear the widget down, returning the panel collaborator.
    pub fn teardown(self) -> P {
        info!(
            "Cube widget torn down on face {}",
            self.navigator.current_face()
        );
        self.navigator.into_panel()
    }
}

//! Terminal renderer and info panel for the interactive session.
//!
//! The front face is drawn as a character box; clicks inside it are mapped
//! back to texture coordinates so they go through the same click regions
//! as a pointer on the real cube.

use std::io::Write;

use crossterm::{cursor, queue, terminal};
use cubenav_core::{
    Direction, Error, Face, FaceContent, FaceTable, FrameState, HitTest, InfoPanel, PanelUpdate,
    Renderer, Viewport,
};
use glam::EulerRot;
use tracing::debug;

const FACE_X: u16 = 4;
const FACE_Y: u16 = 3;
const FACE_W: u16 = 40;
const FACE_H: u16 = 13;

/// Keeps the latest panel update for display.
#[derive(Debug, Default)]
pub struct ConsolePanel {
    current: Option<PanelUpdate>,
}

impl ConsolePanel {
    pub fn current(&self) -> Option<&PanelUpdate> {
        self.current.as_ref()
    }
}

impl InfoPanel for ConsolePanel {
    fn update(&mut self, update: &PanelUpdate) {
        debug!("Panel: visible={} label={:?}", update.visible, update.label);
        self.current = Some(update.clone());
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    faces: Vec<Face>,
    panel: Option<PanelUpdate>,
    frame_count: usize,
    /// Top-left corner of the face box border.
    origin: (u16, u16),
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            faces: Vec::new(),
            panel: None,
            frame_count: 0,
            origin: (FACE_X, FACE_Y),
        }
    }

    pub fn set_panel(&mut self, panel: Option<&PanelUpdate>) {
        self.panel = panel.cloned();
    }

    /// Map a terminal cell inside the face box to a hit on `material`.
    pub fn hit_at(&self, column: u16, row: u16, material: usize) -> Option<HitTest> {
        let x0 = self.origin.0 + 1;
        let y0 = self.origin.1 + 1;
        if !(x0..x0 + FACE_W).contains(&column) || !(y0..y0 + FACE_H).contains(&row) {
            return None;
        }
        let u = ((column - x0) as f32 + 0.5) / FACE_W as f32;
        let v = 1.0 - ((row - y0) as f32 + 0.5) / FACE_H as f32;
        Some(HitTest::new(material, u, v))
    }

    /// Lines of the face box interior for `face`.
    fn face_lines(face: &Face, show_labels: bool) -> Vec<String> {
        let w = FACE_W as usize;
        let h = FACE_H as usize;
        let mut grid = vec![vec![' '; w]; h];

        if show_labels {
            match &face.content {
                FaceContent::MainMenu { entries } => {
                    put_centered(&mut grid[h / 2], w / 2, &face.label);
                    for entry in entries {
                        let label = entry.label.as_str();
                        match entry.direction {
                            Direction::Up => put_centered(&mut grid[0], w / 2, label),
                            Direction::Down => {
                                put_centered(&mut grid[h - 1], w / 2, label)
                            }
                            Direction::Left => put_at(&mut grid[h / 2 - 2], 1, label),
                            Direction::Right => {
                                let start = w.saturating_sub(label.chars().count() + 1);
                                put_at(&mut grid[h / 2 + 2], start, label)
                            }
                        }
                    }
                }
                FaceContent::Section { title, body } => {
                    put_centered(&mut grid[h / 2 - 2], w / 2, title);
                    for (i, line) in wrap(body, w - 4).iter().take(3).enumerate() {
                        put_centered(&mut grid[h / 2 + i], w / 2, line);
                    }
                    put_centered(&mut grid[h - 1], w / 2, "Esc: back");
                }
            }
        }

        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }

    /// Compose the full screen for a frame.
    fn compose(&self, frame: &FrameState) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(format!(
            "cubenav | frame {} | arrows move, Esc back, click an edge, q quits",
            self.frame_count
        ));
        let heading = match (frame.intro_phase, self.faces.get(frame.face)) {
            (Some(phase), _) => format!("intro: {}", phase),
            (None, Some(face)) => format!("face {}: {}", face.index, face.label),
            (None, None) => String::new(),
        };
        lines.push(heading);
        while lines.len() < self.origin.1 as usize {
            lines.push(String::new());
        }

        let pad = " ".repeat(self.origin.0 as usize);
        lines.push(format!("{}┌{}┐", pad, "─".repeat(FACE_W as usize)));
        let interior = match self.faces.get(frame.face) {
            Some(face) => Self::face_lines(face, frame.label_opacity >= 0.5),
            None => vec![" ".repeat(FACE_W as usize); FACE_H as usize],
        };
        for row in interior {
            lines.push(format!("{}│{}│", pad, row));
        }
        lines.push(format!("{}└{}┘", pad, "─".repeat(FACE_W as usize)));

        let (x, y, z) = frame.orientation.to_euler(EulerRot::XYZ);
        lines.push(format!(
            "rotation [{:7.2} {:7.2} {:7.2}] deg  offset [{:5.2} {:5.2} {:6.2}]  {}",
            x.to_degrees(),
            y.to_degrees(),
            z.to_degrees(),
            frame.position_offset.x,
            frame.position_offset.y,
            frame.position_offset.z,
            if frame.settled { "settled" } else { "moving" }
        ));
        lines.push(match &self.panel {
            Some(p) if p.visible => format!("panel: {} - {}", p.label, p.text),
            _ => "panel: hidden".to_string(),
        });
        lines
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn load_faces(&mut self, faces: &FaceTable) -> cubenav_core::Result<()> {
        self.faces = faces.iter().cloned().collect();
        Ok(())
    }

    fn resize(&mut self, viewport: &Viewport) -> cubenav_core::Result<()> {
        self.origin = box_origin(viewport);
        debug!("Face box at {:?} for aspect {:.2}", self.origin, viewport.aspect());
        Ok(())
    }

    fn render(&mut self, frame: &FrameState) -> cubenav_core::Result<()> {
        if self.faces.is_empty() {
            return Err(Error::Render("faces not loaded".into()));
        }
        let lines = self.compose(frame);
        queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16))?;
            write!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        self.frame_count += 1;
        Ok(())
    }
}

/// Centre the face box in the viewport, below the header lines.
fn box_origin(viewport: &Viewport) -> (u16, u16) {
    let width = viewport.width.max(0.0) as u16;
    let height = viewport.height.max(0.0) as u16;
    let x = (width.saturating_sub(FACE_W + 2) / 2).max(FACE_X);
    let y = (height.saturating_sub(FACE_H + 2) / 2).max(FACE_Y);
    (x, y)
}

fn put_at(row: &mut [char], start: usize, text: &str) {
    for (cell, ch) in row.iter_mut().skip(start).zip(text.chars()) {
        *cell = ch;
    }
}

fn put_centered(row: &mut [char], center: usize, text: &str) {
    let len = text.chars().count().min(row.len());
    put_at(row, center.saturating_sub(len / 2), text);
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use cubenav_core::config::click::FRONT_MATERIAL_SLOT;
    use cubenav_core::{ClickRegions, Intent};
    use glam::{Quat, Vec3};

    use super::*;

    fn frame(face: usize) -> FrameState {
        FrameState {
            orientation: Quat::IDENTITY,
            position_offset: Vec3::ZERO,
            label_opacity: 1.0,
            face,
            intro_phase: None,
            settled: true,
        }
    }

    #[test]
    fn test_hit_mapping_matches_regions() {
        let regions = ClickRegions::default();
        let r = TerminalRenderer::new(Vec::new());
        let top = r
            .hit_at(FACE_X + 1 + FACE_W / 2, FACE_Y + 1, FRONT_MATERIAL_SLOT)
            .unwrap();
        assert_eq!(regions.classify_hit(&top), Some(Intent::Up));

        let right = r
            .hit_at(FACE_X + FACE_W, FACE_Y + 1 + FACE_H / 2, FRONT_MATERIAL_SLOT)
            .unwrap();
        assert_eq!(regions.classify_hit(&right), Some(Intent::Right));

        let center = r
            .hit_at(FACE_X + 1 + FACE_W / 2, FACE_Y + 1 + FACE_H / 2, FRONT_MATERIAL_SLOT)
            .unwrap();
        assert_eq!(regions.classify_hit(&center), None);
    }

    #[test]
    fn test_hit_outside_box() {
        let r = TerminalRenderer::new(Vec::new());
        assert!(r.hit_at(0, 0, FRONT_MATERIAL_SLOT).is_none());
        assert!(r.hit_at(FACE_X, FACE_Y + 2, FRONT_MATERIAL_SLOT).is_none());
    }

    #[test]
    fn test_resize_moves_face_box() {
        let mut r = TerminalRenderer::new(Vec::new());
        r.load_faces(&FaceTable::default_menu()).unwrap();
        // 120x40 window: canvas is 120x36, box border at (39, 10)
        r.resize(&Viewport::from_window(120.0, 40.0)).unwrap();
        assert_eq!(r.origin, (39, 10));

        assert!(r.hit_at(FACE_X + 1, FACE_Y + 1, FRONT_MATERIAL_SLOT).is_none());
        let top = r.hit_at(40 + FACE_W / 2, 11, FRONT_MATERIAL_SLOT).unwrap();
        assert_eq!(ClickRegions::default().classify_hit(&top), Some(Intent::Up));

        let screen = r.compose(&frame(0));
        assert!(screen[10].starts_with(&format!("{}┌", " ".repeat(39))));
    }

    #[test]
    fn test_small_viewport_keeps_minimum_origin() {
        let mut r = TerminalRenderer::new(Vec::new());
        r.resize(&Viewport::from_window(20.0, 10.0)).unwrap();
        assert_eq!(r.origin, (FACE_X, FACE_Y));
    }

    #[test]
    fn test_compose_home_shows_menu() {
        let mut r = TerminalRenderer::new(Vec::new());
        r.load_faces(&FaceTable::default_menu()).unwrap();
        let screen = r.compose(&frame(0)).join("\n");
        for label in ["About Me", "Projects", "Academics", "Contact"] {
            assert!(screen.contains(label), "missing {}", label);
        }
        assert!(screen.contains("panel: hidden"));
    }

    #[test]
    fn test_compose_section_with_panel() {
        let faces = FaceTable::default_menu();
        let mut r = TerminalRenderer::new(Vec::new());
        r.load_faces(&faces).unwrap();
        let about = faces.get(1).unwrap();
        r.set_panel(Some(&PanelUpdate::for_face(about)));

        let screen = r.compose(&frame(1)).join("\n");
        assert!(screen.contains("face 1: About Me"));
        assert!(screen.contains("Esc: back"));
        assert!(screen.contains("panel: About Me"));
    }

    #[test]
    fn test_render_writes_output() {
        let mut r = TerminalRenderer::new(Vec::new());
        r.load_faces(&FaceTable::default_menu()).unwrap();
        r.render(&frame(0)).unwrap();
        assert!(!r.out.is_empty());
        assert_eq!(r.frame_count, 1);
    }

    #[test]
    fn test_render_before_load_fails() {
        let mut r = TerminalRenderer::new(Vec::new());
        assert!(matches!(r.render(&frame(0)), Err(Error::Render(_))));
        assert!(r.out.is_empty());
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn test_console_panel_keeps_latest() {
        let mut panel = ConsolePanel::default();
        panel.update(&PanelUpdate::hidden());
        assert_eq!(panel.current(), Some(&PanelUpdate::hidden()));
    }
}

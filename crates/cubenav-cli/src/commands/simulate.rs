//! Simulate command: run a key sequence headlessly and report each step.

use std::time::Duration;

use anyhow::{Result, anyhow};
use cubenav_core::{CubeWidget, Intent, NavKey, PanelUpdate, Transition, WidgetConfig};
use glam::{EulerRot, Quat};
use owo_colors::OwoColorize;
use serde::Serialize;

const FRAME_TIME: Duration = Duration::from_millis(16);

/// State after one key and its frames.
#[derive(Debug, Serialize)]
struct Snapshot {
    key: String,
    transition: Transition,
    face: usize,
    label: String,
    settled: bool,
    remaining_deg: f32,
    orientation: Quat,
    panel: Option<PanelUpdate>,
}

/// Resolve a key argument: an intent name or a key identifier.
pub fn parse_key(name: &str) -> Result<NavKey> {
    if let Ok(intent) = name.parse::<Intent>() {
        return Ok(match intent {
            Intent::Up => NavKey::ArrowUp,
            Intent::Down => NavKey::ArrowDown,
            Intent::Left => NavKey::ArrowLeft,
            Intent::Right => NavKey::ArrowRight,
            Intent::Back => NavKey::Escape,
            Intent::Select => NavKey::Enter,
        });
    }
    NavKey::from_identifier(name).ok_or_else(|| anyhow!("Unknown key: {:?}", name))
}

pub fn run(mut config: WidgetConfig, keys: &[String], frames: u32, json: bool) -> Result<()> {
    let keys = keys
        .iter()
        .map(|k| parse_key(k.trim()).map(|key| (k.trim().to_string(), key)))
        .collect::<Result<Vec<_>>>()?;

    config.intro.enabled = false;
    let mut widget = CubeWidget::new(&config, Vec::<PanelUpdate>::new())?;
    let mut elapsed = Duration::ZERO;
    widget.frame(elapsed);

    for (name, key) in keys {
        let panel_before = widget.navigator().panel().len();
        let transition = widget.key_down(key);
        widget.key_up(key);

        for _ in 0..frames {
            elapsed += FRAME_TIME;
            widget.frame(elapsed);
        }

        let nav = widget.navigator();
        let snapshot = Snapshot {
            key: name,
            transition,
            face: nav.current_face(),
            label: nav.current().label.clone(),
            settled: nav.is_settled(),
            remaining_deg: nav.angular_distance().to_degrees(),
            orientation: nav.current_orientation(),
            panel: nav.panel().get(panel_before..).and_then(|u| u.last()).cloned(),
        };

        if json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else {
            print_snapshot(&snapshot);
        }
    }

    widget.teardown();
    Ok(())
}

fn print_snapshot(s: &Snapshot) {
    let moved = match s.transition {
        Transition::Moved { from, to } => format!("{} -> {}", from, to).green().to_string(),
        Transition::Ignored => "ignored".dimmed().to_string(),
    };
    let (x, y, z) = s.orientation.to_euler(EulerRot::XYZ);
    println!(
        "{:<10} {:<12} face {} ({}) rot [{:6.1} {:6.1} {:6.1}] {}",
        s.key,
        moved,
        s.face,
        s.label.bold(),
        x.to_degrees(),
        y.to_degrees(),
        z.to_degrees(),
        if s.settled {
            "settled".to_string()
        } else {
            format!("{:.2} deg left", s.remaining_deg)
        }
    );
    if let Some(panel) = &s.panel {
        if panel.visible {
            println!("           panel: {} - {}", panel.label, panel.text);
        } else {
            println!("           panel: hidden");
        }
    }
}

//! Classify command: show which intent a click would produce.

use anyhow::Result;
use cubenav_core::{HitTest, WidgetConfig};
use owo_colors::OwoColorize;

pub fn run(config: &WidgetConfig, u: f32, v: f32, material: usize) -> Result<()> {
    let hit = HitTest::new(material, u, v);
    match config.click.classify_hit(&hit) {
        Some(intent) => println!("({:.3}, {:.3}) -> {}", u, v, intent.to_string().green()),
        None => println!("({:.3}, {:.3}) -> {}", u, v, "none".dimmed()),
    }
    Ok(())
}

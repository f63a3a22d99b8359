//! Run command: interactive cube menu in the terminal.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags, MouseButton,
    MouseEventKind, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{cursor, execute, terminal};
use cubenav_core::{CubeWidget, NavKey, Renderer, Transition, Viewport, WidgetConfig};
use tracing::{debug, info, warn};

use crate::terminal::{ConsolePanel, TerminalRenderer};

/// Restores the terminal when dropped, including on early error returns.
struct TerminalGuard {
    enhanced: bool,
}

impl TerminalGuard {
    fn enter(out: &mut Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            cursor::Hide
        )?;

        let enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true));
        if enhanced {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        } else {
            debug!("Keyboard enhancement unsupported, releasing keys on press");
        }
        Ok(Self { enhanced })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.enhanced {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            out,
            cursor::Show,
            DisableFocusChange,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        let _ = out.flush();
    }
}

fn nav_key(code: KeyCode) -> Option<NavKey> {
    match code {
        KeyCode::Up => Some(NavKey::ArrowUp),
        KeyCode::Down => Some(NavKey::ArrowDown),
        KeyCode::Left => Some(NavKey::ArrowLeft),
        KeyCode::Right => Some(NavKey::ArrowRight),
        KeyCode::Esc => Some(NavKey::Escape),
        KeyCode::Enter => Some(NavKey::Enter),
        KeyCode::Char(' ') => Some(NavKey::Space),
        _ => None,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn log_transition(source: &str, transition: Transition) {
    if let Transition::Moved { from, to } = transition {
        info!("{}: face {} -> {}", source, from, to);
    }
}

pub fn run(mut config: WidgetConfig, no_intro: bool, fps: u32) -> Result<()> {
    if no_intro {
        config.intro.enabled = false;
    }
    if fps == 0 {
        warn!("fps of 0 treated as 1");
    }
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));

    let mut widget = CubeWidget::new(&config, ConsolePanel::default())?;
    let mut stdout = io::stdout();
    let (cols, rows) = terminal::size()?;
    let mut viewport = Viewport::from_window(f32::from(cols), f32::from(rows));

    let guard = TerminalGuard::enter(&mut stdout)?;
    let mut renderer = TerminalRenderer::new(stdout);
    widget.load_renderer(&mut renderer)?;
    renderer.resize(&viewport)?;

    let start = Instant::now();
    'frames: loop {
        let deadline = Instant::now() + frame_time;
        let frame = widget.frame(start.elapsed());
        renderer.set_panel(widget.navigator().panel().current());
        renderer.render(&frame)?;

        while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && is_quit(&key) {
                        break 'frames;
                    }
                    let Some(nav) = nav_key(key.code) else {
                        continue;
                    };
                    match key.kind {
                        KeyEventKind::Press => {
                            log_transition("key", widget.key_down(nav));
                            if !guard.enhanced {
                                widget.key_up(nav);
                            }
                        }
                        KeyEventKind::Release => widget.key_up(nav),
                        KeyEventKind::Repeat => {}
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let material = widget.navigator().current().material_slot;
                    if let Some(hit) = renderer.hit_at(mouse.column, mouse.row, material) {
                        debug!("Click at uv ({:.2}, {:.2})", hit.u, hit.v);
                        log_transition("click", widget.click(&hit));
                    }
                }
                Event::Resize(cols, rows) => {
                    let aspect = viewport.resize(f32::from(cols), f32::from(rows));
                    debug!("Resized to {}x{}, aspect {:.2}", cols, rows, aspect);
                    renderer.resize(&viewport)?;
                }
                Event::FocusLost => widget.blur(),
                _ => {}
            }
        }
    }

    drop(renderer);
    drop(guard);

    let panel = widget.teardown();
    if let Some(update) = panel.current().filter(|u| u.visible) {
        println!("Last section: {}", update.label);
    }
    Ok(())
}

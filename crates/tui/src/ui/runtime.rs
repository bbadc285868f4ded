//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Route input to `MainView` and apply the returned `Effect`s.
//! - Render only when the shared dirty flag was marked.
//!
//! Event Loop Strategy
//! - A dedicated OS thread blocks on `crossterm::event::read()` and forwards
//!   events over a channel, so the loop itself never blocks on the terminal.
//! - A slow ticker (1 s) expires notifications; it only marks the app dirty
//!   when something visible changed.
//!
//! Entry Point
//! - `run_app(options)` is called from `lib::run` and performs setup,
//!   event processing, and teardown.
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::app::{App, Effect};
use crate::demo::{DemoOptions, build_demo};
use crate::ui::components::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const MOUSE_MOVE_THROTTLE: Duration = Duration::from_millis(16);

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    thread::spawn(move || {
        let mut last_mouse_move = Instant::now();
        loop {
            match event::read() {
                Ok(event) => {
                    // Throttle mouse move events to one per 16 ms.
                    if event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved) {
                        if last_mouse_move.elapsed() < MOUSE_MOVE_THROTTLE {
                            continue;
                        }
                        last_mouse_move = Instant::now();
                    }
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read event: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
///
/// Returns a ratatui `Terminal` backed by Crossterm for later drawing.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Routes one crossterm event to the main view.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind == event::KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(_, _) => {
            app.dirty.mark();
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Entry point for the TUI runtime: builds the demo menu, sets up the
/// terminal, runs the event loop, and performs cleanup on exit.
pub async fn run_app(options: DemoOptions) -> Result<()> {
    let mut app = App::new(theme::load(options.theme.as_deref()));
    build_demo(&app, &options).context("building the demo menu")?;
    let mut main_view = MainView::new();

    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal().context("initializing the terminal")?;
    info!("side menu demo started");

    let result = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    info!("side menu demo stopped");
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    let mut ticker = time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;
    app.dirty.take();

    loop {
        tokio::select! {
            // Terminal input events
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; break out to shut down cleanly.
                    break;
                };
                let effects = handle_input_event(app, main_view, event);
                app.apply_effects(effects);
            }
            _ = ticker.tick() => {
                app.tick(Instant::now());
            }
            // Handle Ctrl+C
            _ = signal::ctrl_c() => { break; }
        }

        if app.should_quit {
            break;
        }
        if app.dirty.take() {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    #[test]
    fn key_releases_are_ignored() {
        let mut app = App::new(Box::new(DraculaTheme::new()));
        let mut view = MainView::new();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(handle_input_event(&mut app, &mut view, Event::Key(release)).is_empty());

        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let effects = handle_input_event(&mut app, &mut view, Event::Key(press));
        app.apply_effects(effects);
        assert!(app.should_quit);
    }

    #[test]
    fn resize_requests_a_redraw() {
        let mut app = App::new(Box::new(DraculaTheme::new()));
        app.dirty.take();
        handle_input_event(&mut app, &mut MainView::new(), Event::Resize(80, 24));
        assert!(app.dirty.is_dirty());
    }
}

pub(crate) mod commands;
mod input;
pub(crate) mod menu;
mod state;
pub use state::*;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::keys::KeybindingMap;

/// Tick granularity for the menu's scheduled transitions. The entrance
/// delay is tens of milliseconds, so the tick has to be finer than that.
const TICK_INTERVAL: Duration = Duration::from_millis(25);

pub async fn run(config: &AppConfig, terminal: &mut DefaultTerminal) -> Result<()> {
    let keybindings =
        KeybindingMap::from_preset(&config.keybindings.preset, &config.keybindings.bindings)?;

    let mut state = AppState::new(config, keybindings.hints());

    let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();

    // Spawn event reader task
    let event_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if event_tx.send(AppMessage::Key(key)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
                _ => {}
            }
        }
    });

    // Spawn tick timer
    let tick_tx = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(AppMessage::Tick).is_err() {
                break;
            }
        }
    });

    // Main loop
    loop {
        sync_viewport(&mut state, terminal);
        terminal.draw(|frame| crate::ui::render(frame, &state))?;

        if let Some(msg) = rx.recv().await {
            let now = Instant::now();
            match msg {
                AppMessage::Key(key) => {
                    input::handle_key(&mut state, &key, &keybindings, now);
                }
                AppMessage::Tick => {
                    for handle in state.scheduler.due(now) {
                        menu::handle_timer(&mut state, handle);
                    }
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Mirror the layout the renderer will use so anchor and scroll math work
/// against the same editor pane dimensions.
fn sync_viewport(state: &mut AppState, terminal: &DefaultTerminal) {
    if let Ok(size) = terminal.size() {
        let sidebar = if state.sidebar_open {
            crate::ui::sidebar_cells(size.width, state.sidebar_width_percent)
        } else {
            0
        };
        state.editor_width = size.width.saturating_sub(sidebar).max(1);
        // one header row, one status row
        state.editor_height = size.height.saturating_sub(2).max(1);
    }
}

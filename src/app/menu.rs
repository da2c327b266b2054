//! Command menu lifecycle.
//!
//! The menu has two timed transitions: a short entrance delay before the
//! "entered" visual state lands, and an exit grace window that keeps the
//! popup mounted after it turns invisible. Both run through the scheduler;
//! whoever schedules a timer first cancels the one it replaces, and a fired
//! handle is checked against the current one so a stale callback cannot
//! force an outdated visual state.

use std::time::Instant;

use crate::sched::TimerHandle;

use super::state::AppState;

/// Open the menu for `target_block`, or refresh target/anchor if it is
/// already open. The selection resets to the top either way.
pub fn open(state: &mut AppState, target_block: usize, anchor: (u16, u16), now: Instant) {
    let was_visible = state.menu.visible;

    if let Some(handle) = state.menu.exit_timer.take() {
        state.scheduler.cancel(handle);
    }

    state.menu.visible = true;
    state.menu.mounted = true;
    state.menu.target_block = Some(target_block);
    state.menu.anchor = anchor;
    state.menu.selected = 0;

    if !was_visible {
        if let Some(handle) = state.menu.entrance_timer.take() {
            state.scheduler.cancel(handle);
        }
        state.menu.entered = false;
        state.menu.entrance_timer = Some(state.scheduler.schedule(state.menu_open_delay, now));
    }
}

/// Make the menu invisible, keeping it mounted for the grace window.
pub fn close(state: &mut AppState, now: Instant) {
    if !state.menu.visible {
        return;
    }
    if let Some(handle) = state.menu.entrance_timer.take() {
        state.scheduler.cancel(handle);
    }
    if let Some(handle) = state.menu.exit_timer.take() {
        state.scheduler.cancel(handle);
    }
    state.menu.visible = false;
    state.menu.entered = false;
    state.menu.exit_timer = Some(state.scheduler.schedule(state.menu_close_grace, now));
}

/// Immediate unmount with no animation, used on file switches.
pub fn hard_reset(state: &mut AppState) {
    if let Some(handle) = state.menu.entrance_timer.take() {
        state.scheduler.cancel(handle);
    }
    if let Some(handle) = state.menu.exit_timer.take() {
        state.scheduler.cancel(handle);
    }
    state.menu = super::state::MenuState::idle();
}

/// Route a fired scheduler handle to the transition it belongs to. Handles
/// that match neither pending timer are stale and ignored.
pub fn handle_timer(state: &mut AppState, fired: TimerHandle) {
    if state.menu.entrance_timer == Some(fired) {
        state.menu.entrance_timer = None;
        if state.menu.visible {
            state.menu.entered = true;
        }
    } else if state.menu.exit_timer == Some(fired) {
        state.menu.exit_timer = None;
        if !state.menu.visible {
            state.menu.mounted = false;
            state.menu.target_block = None;
        }
    }
}

/// Move the selection down, wrapping past the last command.
pub fn select_next(state: &mut AppState) {
    let count = state.commands.len();
    if count > 0 {
        state.menu.selected = (state.menu.selected + 1) % count;
    }
}

/// Move the selection up, wrapping past the first command.
pub fn select_prev(state: &mut AppState) {
    let count = state.commands.len();
    if count > 0 {
        state.menu.selected = (state.menu.selected + count - 1) % count;
    }
}

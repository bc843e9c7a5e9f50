use crate::error::{AppError, AppResult};
use crate::filter::Theme as ProjectTheme;
use crate::state::{Focus, State, View};
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration, time::Instant};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel. The polling thread
/// owns the only sender, so the channel disconnects when it stops.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => {
                        if let Ok(CrosstermEvent::Key(key)) = event::read() {
                            if key.kind == KeyEventKind::Press
                                && tx.send(Event::Input(key)).is_err()
                            {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler::with_receiver(rx)
    }

    fn with_receiver(rx: mpsc::Receiver<Event<KeyEvent>>) -> Self {
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> AppResult<bool> {
        let event = self
            .rx
            .recv()
            .map_err(|e| AppError::Terminal(e.to_string()))?;
        match event {
            Event::Input(key) => Ok(handle_key(key, state, Instant::now())),
            Event::Tick => {
                state.tick(Instant::now());
                Ok(true)
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State, now: Instant) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }
    state.take_status_message();

    match state.current_focus() {
        Focus::Search => handle_search_key(key, state, now),
        Focus::Filters => handle_filter_panel_key(key, state),
        Focus::Results => match state.current_view() {
            View::ProjectDetail => return handle_detail_key(key, state),
            View::Projects => return handle_results_key(key, state),
        },
    }
    true
}

fn handle_search_key(key: KeyEvent, state: &mut State, now: Instant) {
    match key.code {
        KeyCode::Char(c) => {
            state.add_search_char(c, now);
        }
        KeyCode::Backspace => {
            state.backspace_search(now);
        }
        KeyCode::Enter => {
            debug!("Processing submit search event '{:?}'...", key);
            state.submit_search();
        }
        KeyCode::Esc => {
            debug!("Processing exit search mode event '{:?}'...", key);
            state.exit_search_mode();
        }
        _ => {}
    }
}

fn handle_filter_panel_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_filter();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_filter();
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            state.toggle_current_filter();
        }
        KeyCode::Char('c') => {
            state.clear_all();
        }
        KeyCode::Char('f') | KeyCode::Esc => {
            state.toggle_filter_panel();
        }
        _ => {}
    }
}

fn handle_detail_key(key: KeyEvent, state: &mut State) -> bool {
    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
            state.close_detail();
        }
        KeyCode::Char('y') => copy_location(state),
        _ => {}
    }
    true
}

fn handle_results_key(key: KeyEvent, state: &mut State) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_result();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_result();
        }
        KeyCode::Enter | KeyCode::Char('l') => {
            state.open_detail();
        }
        KeyCode::Char('/') => {
            state.enter_search_mode();
        }
        KeyCode::Char('f') => {
            state.toggle_filter_panel();
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(theme) = ProjectTheme::ALL.get(index) {
                state.select_theme(*theme);
            }
        }
        KeyCode::Char('c') => {
            state.clear_all();
        }
        KeyCode::Char('b') => {
            state.go_back();
        }
        KeyCode::Char('t') => {
            state.cycle_theme();
        }
        KeyCode::Char('d') => {
            state.toggle_log();
        }
        KeyCode::Char('y') => copy_location(state),
        _ => {}
    }
    true
}

/// Copy the current page location to the system clipboard.
///
fn copy_location(state: &mut State) {
    let location = state.location().to_string();
    let result = ClipboardContext::new().and_then(|mut ctx| ctx.set_contents(location.clone()));
    match result {
        Ok(()) => {
            info!("Copied {} to clipboard", location);
            state.set_status_message("Link copied");
        }
        Err(e) => {
            warn!("Failed to copy location to clipboard: {}", e);
            state.set_status_message("Clipboard unavailable");
        }
    }
}

use crate::form::{FieldKind, Key, Modifiers};
use crate::state::State;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

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

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => error!("Failed to read terminal event: {}", e),
                    },
                    Ok(false) => (),
                    Err(e) => error!("Failed to poll terminal events: {}", e),
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(event, state)),
            Event::Tick => {
                state.tick();
                Ok(true)
            }
        }
    }
}

/// Map crossterm modifiers onto the form's. Cmd arrives as SUPER or META
/// depending on the terminal.
///
fn modifiers(event: &KeyEvent) -> Modifiers {
    Modifiers {
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        meta: event
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META),
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub fn handle_key(event: KeyEvent, state: &mut State) -> bool {
    let mods = modifiers(&event);
    let ctrl = mods.ctrl;
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    if ctrl && matches!(event.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }

    // The reset confirmation swallows everything else while open
    if state.is_confirming_reset() {
        match event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => state.answer_reset(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => state.answer_reset(false),
            _ => (),
        }
        return true;
    }

    let on_select = state
        .focused_field()
        .map(|f| f.kind == FieldKind::Select)
        .unwrap_or(false);

    match event.code {
        KeyCode::Enter if mods.ctrl || mods.meta => state.key_down(Key::Enter, mods),
        // Terminals rarely report Ctrl+Enter, so Ctrl+S and Alt+Enter stand in
        KeyCode::Enter if alt => state.submit_shortcut(),
        KeyCode::Char('s') if ctrl => state.submit_shortcut(),
        KeyCode::Char('x') if ctrl => state.dismiss_notification(),
        KeyCode::F(2) => state.toggle_log(),
        KeyCode::Esc => state.escape(),
        KeyCode::Tab | KeyCode::Down => state.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.focus_prev(),
        KeyCode::Left if on_select => state.cycle_option(false),
        KeyCode::Right if on_select => state.cycle_option(true),
        KeyCode::Backspace => state.backspace(),
        KeyCode::Enter => state.activate(),
        KeyCode::Char(c) if !ctrl && !alt && !mods.meta => state.type_char(c),
        _ => debug!("Ignoring terminal event '{:?}'", event),
    }
    true
}

/// Keyboard → game input.
///
/// Movement is polled as held state every frame; start, reset and quit are
/// one-shot commands taken from key presses.
///
/// A key counts as held if its last press/repeat event arrived within
/// `HOLD_WINDOW` frames. Terminals that report key releases drop the key
/// immediately; classic terminals only send repeated presses, so the key
/// expires on its own shortly after the OS stops repeating it.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// OS key-repeat runs at ≥ 15 Hz; at 60 FPS that is at most 4 frames
/// between repeats, so 8 frames of grace keeps a held key alive.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    Quit,
}

/// Directions held during the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Map a one-shot key press to a command.
pub fn command_for(event: &KeyEvent) -> Option<Command> {
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char(' ') => Some(Command::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        _ => None,
    }
}

/// Tracks the frame each key was last seen so held state can be polled.
#[derive(Debug, Default)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event. Returns the command for fresh presses.
    pub fn record(&mut self, event: &KeyEvent, frame: u64) -> Option<Command> {
        match event.kind {
            KeyEventKind::Press => {
                self.last_seen.insert(event.code, frame);
                command_for(event)
            }
            KeyEventKind::Repeat => {
                self.last_seen.insert(event.code, frame);
                None
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&event.code);
                None
            }
        }
    }

    pub fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(k, frame))
    }

    pub fn held(&self, frame: u64) -> HeldKeys {
        use KeyCode::{Char, Down, Left, Right, Up};
        HeldKeys {
            left: self.any_held(&[Left, Char('a'), Char('A')], frame),
            right: self.any_held(&[Right, Char('d'), Char('D')], frame),
            up: self.any_held(&[Up, Char('w'), Char('W')], frame),
            down: self.any_held(&[Down, Char('s'), Char('S')], frame),
        }
    }
}

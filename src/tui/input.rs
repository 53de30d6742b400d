//! Key event handling.
//!
//! Domain keys (hjkl movement, slot editing) are matched directly; the
//! crossterm-actions dispatcher covers the standard navigation and app
//! events (arrows, quit, help) on top.

use crossterm_actions::{
    emacs_defaults, AppEvent, EventDispatcher, NavigationEvent, SelectionEvent, TuiEvent,
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Single-key adjustment step.
pub const LITTLE_STEP: usize = 1;
/// Shifted adjustment step.
pub const BIG_STEP: usize = 10;

/// Semantic action derived from a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Exit the picker.
    Quit,
    /// Toggle the help overlay.
    Help,
    /// Force a full terminal repaint.
    Sync,
    /// Focus the previous section.
    FocusPrev,
    /// Focus the next section.
    FocusNext,
    /// Increase the focused section's value by the given step.
    ValueUp(usize),
    /// Decrease the focused section's value by the given step.
    ValueDown(usize),
    /// Add a palette slot after the selected one.
    AddSlot,
    /// Remove the selected palette slot.
    RemoveSlot,
    /// Nothing to do.
    None,
}

/// Maps key events to [`Action`]s.
pub struct EventHandler {
    dispatcher: EventDispatcher<TuiEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            dispatcher: EventDispatcher::new(emacs_defaults()),
        }
    }

    pub fn handle(&self, key: KeyEvent) -> Action {
        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            BIG_STEP
        } else {
            LITTLE_STEP
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('l') = key.code {
                return Action::Sync;
            }
        } else {
            match key.code {
                KeyCode::Char('h') => return Action::ValueDown(LITTLE_STEP),
                KeyCode::Char('l') => return Action::ValueUp(LITTLE_STEP),
                KeyCode::Char('H') => return Action::ValueDown(BIG_STEP),
                KeyCode::Char('L') => return Action::ValueUp(BIG_STEP),
                KeyCode::Char('k') => return Action::FocusPrev,
                KeyCode::Char('j') => return Action::FocusNext,
                KeyCode::Char('a') => return Action::AddSlot,
                KeyCode::Char('x') => return Action::RemoveSlot,
                KeyCode::Char('?') => return Action::Help,
                KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
                KeyCode::Left => return Action::ValueDown(step),
                KeyCode::Right => return Action::ValueUp(step),
                KeyCode::Up => return Action::FocusPrev,
                KeyCode::Down => return Action::FocusNext,
                _ => {}
            }
        }

        if let Some(event) = self.dispatcher.dispatch(&key) {
            return match event {
                TuiEvent::App(AppEvent::Quit) => Action::Quit,
                TuiEvent::App(AppEvent::Help) => Action::Help,
                TuiEvent::App(AppEvent::Refresh) => Action::Sync,
                TuiEvent::Navigation(NavigationEvent::Left) => Action::ValueDown(step),
                TuiEvent::Navigation(NavigationEvent::Right) => Action::ValueUp(step),
                TuiEvent::Navigation(NavigationEvent::Up) => Action::FocusPrev,
                TuiEvent::Navigation(NavigationEvent::Down) => Action::FocusNext,
                TuiEvent::Selection(SelectionEvent::Next) => Action::FocusNext,
                TuiEvent::Selection(SelectionEvent::Prev) => Action::FocusPrev,
                _ => Action::None,
            };
        }

        Action::None
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vi_movement_keys() {
        let handler = EventHandler::new();
        assert_eq!(handler.handle(key(KeyCode::Char('h'))), Action::ValueDown(1));
        assert_eq!(handler.handle(key(KeyCode::Char('l'))), Action::ValueUp(1));
        assert_eq!(handler.handle(key(KeyCode::Char('k'))), Action::FocusPrev);
        assert_eq!(handler.handle(key(KeyCode::Char('j'))), Action::FocusNext);
    }

    #[test]
    fn shifted_movement_uses_big_steps() {
        let handler = EventHandler::new();
        let shifted = KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle(shifted), Action::ValueUp(BIG_STEP));
        let shifted = KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT);
        assert_eq!(handler.handle(shifted), Action::ValueUp(BIG_STEP));
    }

    #[test]
    fn structural_and_app_keys() {
        let handler = EventHandler::new();
        assert_eq!(handler.handle(key(KeyCode::Char('a'))), Action::AddSlot);
        assert_eq!(handler.handle(key(KeyCode::Char('x'))), Action::RemoveSlot);
        assert_eq!(handler.handle(key(KeyCode::Char('?'))), Action::Help);
        assert_eq!(handler.handle(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handler.handle(key(KeyCode::Esc)), Action::Quit);

        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle(ctrl_l), Action::Sync);
    }

    #[test]
    fn arrow_keys_navigate() {
        let handler = EventHandler::new();
        assert_eq!(handler.handle(key(KeyCode::Left)), Action::ValueDown(1));
        assert_eq!(handler.handle(key(KeyCode::Right)), Action::ValueUp(1));
        assert_eq!(handler.handle(key(KeyCode::Up)), Action::FocusPrev);
        assert_eq!(handler.handle(key(KeyCode::Down)), Action::FocusNext);
    }
}

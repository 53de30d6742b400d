//! The picker display: owns the widget stack, focus, and change
//! propagation.

use std::sync::Arc;

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::input::{Action, BIG_STEP, EventHandler};
use super::theme::Theme;
use super::widgets::{
    ErrorMsg, HueBar, PaletteBox, SaturationBar, Section, ValueBar, bar_rows, draw_help_overlay,
};
use crate::state::State;

const PADDING_X: u16 = 2;
const MIN_WIDTH: u16 = 26;
const MIN_HEIGHT: u16 = 22;
const MAX_WIDTH: u16 = 105;

/// What the event loop should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Clear and repaint the whole terminal.
    Sync,
    Quit,
}

/// Top-level controller: one focused section at a time, all mutation
/// funneled through the state's pending-change accumulator.
pub struct App {
    state: Arc<State>,
    sections: Vec<Box<dyn Section>>,
    section_n: usize,
    events: EventHandler,
    err_msg: ErrorMsg,
    theme: Theme,
    show_help: bool,
    big_step: bool,
    term: (u16, u16),
    width: u16,
    x_pos: u16,
    too_small: bool,
}

impl App {
    pub fn new(state: Arc<State>, size: (u16, u16)) -> Self {
        let theme = Theme::default();
        let sections: Vec<Box<dyn Section>> = vec![
            Box::new(PaletteBox::new(Arc::clone(&state), &theme)),
            Box::new(HueBar::new(Arc::clone(&state), &theme)),
            Box::new(SaturationBar::new(Arc::clone(&state), &theme)),
            Box::new(ValueBar::new(Arc::clone(&state), &theme)),
        ];

        let mut app = Self {
            state,
            sections,
            section_n: 0,
            events: EventHandler::new(),
            err_msg: ErrorMsg::new(),
            theme,
            show_help: false,
            big_step: false,
            term: size,
            width: 0,
            x_pos: 0,
            too_small: false,
        };
        app.resize(size.0, size.1);
        app.apply_changes();
        if app.state.is_new() {
            let msg = format!("creating new palette file: {}", app.state.path().display());
            app.err_msg.set(msg);
        }
        app
    }

    /// Re-layout every widget for a new terminal size.
    pub fn resize(&mut self, w: u16, h: u16) {
        self.term = (w, h);
        if w < MIN_WIDTH || h < MIN_HEIGHT {
            self.too_small = true;
            return;
        }
        self.too_small = false;

        self.width = (w - (PADDING_X * 2 + 1)).min(MAX_WIDTH);
        self.x_pos = (w - self.width) / 2;

        for section in &mut self.sections {
            section.resize(self.width, h);
        }
        self.err_msg.resize(self.width);
    }

    /// Flush pending state changes and distribute them to every section,
    /// exactly once per cycle.
    fn apply_changes(&mut self) {
        let change = self.state.flush();
        if change.is_empty() {
            return;
        }
        let _span = tracing::debug_span!("handle", ?change).entered();
        tracing::debug!(
            hue = self.state.hue(),
            saturation = self.state.saturation(),
            value = self.state.value(),
            "propagating change"
        );
        for section in &mut self.sections {
            section.handle(change);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Flow {
        if self.show_help {
            // any key dismisses the overlay
            self.show_help = false;
            return Flow::Continue;
        }

        let action = self.events.handle(key);
        self.big_step = matches!(
            action,
            Action::ValueUp(BIG_STEP) | Action::ValueDown(BIG_STEP)
        );

        match action {
            Action::Quit => return Flow::Quit,
            Action::Sync => return Flow::Sync,
            Action::Help => self.show_help = true,
            Action::FocusPrev => self.section_n = self.section_n.saturating_sub(1),
            Action::FocusNext => {
                if self.section_n + 1 < self.sections.len() {
                    self.section_n += 1;
                }
            }
            Action::ValueUp(step) => {
                self.sections[self.section_n].up(step);
                self.apply_changes();
            }
            Action::ValueDown(step) => {
                self.sections[self.section_n].down(step);
                self.apply_changes();
            }
            Action::AddSlot => {
                if self.state.add() {
                    // structural change: the caller re-layouts
                    self.resize(self.term.0, self.term.1);
                    self.apply_changes();
                } else {
                    self.err_msg.set("palette is full");
                }
            }
            Action::RemoveSlot => {
                if self.state.remove() {
                    self.resize(self.term.0, self.term.1);
                    self.apply_changes();
                } else {
                    self.err_msg.set("cannot remove the last color");
                }
            }
            Action::None => {}
        }
        Flow::Continue
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>) {
        let _span = tracing::debug_span!("draw").entered();

        if self.too_small {
            self.draw_size_err(frame);
            return;
        }

        let area = frame.area();
        let content = Rect {
            x: self.x_pos,
            y: area.y,
            width: self.width.min(area.width.saturating_sub(self.x_pos)),
            height: area.height,
        };

        let bar = bar_rows(self.term.1);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(PaletteBox::rows(self.term.1)),
                Constraint::Length(bar),
                Constraint::Length(bar),
                Constraint::Length(bar),
                Constraint::Min(0),
                Constraint::Length(1), // message line
            ])
            .split(content);

        self.draw_header(frame, chunks[0]);

        for (n, section) in self.sections.iter_mut().enumerate() {
            let style = if n == self.section_n {
                self.theme.indicator_hi
            } else {
                self.theme.indicator
            };
            section.set_pointer_style(style);
            section.draw(frame, chunks[n + 1]);
        }

        self.err_msg.draw(frame, chunks[6], &self.theme);

        if self.show_help {
            draw_help_overlay(frame, &self.theme);
        }
    }

    fn draw_header(&self, frame: &mut Frame<'_>, area: Rect) {
        let glyph = if self.big_step { "⏩" } else { "⏵" };
        let name = self.state.name();
        let gap = usize::from(area.width)
            .saturating_sub(glyph.chars().count() + name.chars().count());
        let line = Line::from(vec![
            Span::styled(glyph, self.theme.text_box),
            Span::raw(" ".repeat(gap)),
            Span::styled(name, self.theme.text_box),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_size_err(&self, frame: &mut Frame<'_>) {
        let (w, h) = self.term;
        let lines = vec![
            Line::from(Span::styled("screen too small!", self.theme.error)),
            Line::from(Span::styled(format!("[cur] {w}x{h}"), self.theme.error)),
            Line::from(Span::styled(
                format!("[min] {MIN_WIDTH}x{MIN_HEIGHT}"),
                self.theme.error,
            )),
        ];
        frame.render_widget(Paragraph::new(lines), frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};
    use std::path::PathBuf;

    fn app() -> App {
        let state = Arc::new(State::new_default(PathBuf::from("test.toml")));
        App::new(state, (80, 30))
    }

    fn press(app: &mut App, code: KeyCode) -> Flow {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn focus_is_clamped_at_both_ends() {
        let mut app = app();
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.section_n, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.section_n, app.sections.len() - 1);
    }

    #[test]
    fn movement_on_palette_cycles_selection() {
        let mut app = app();
        let start = app.state.pos();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.state.pos(), (start + 1) % app.state.len());
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.state.pos(), start);
    }

    #[test]
    fn hue_movement_flushes_exactly_once() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j')); // focus hue bar
        press(&mut app, KeyCode::Char('l'));
        // the change was flushed and handled inside on_key
        assert!(app.state.flush().is_empty());
    }

    #[test]
    fn add_and_remove_relayout_within_bounds() {
        let mut app = app();
        let len = app.state.len();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state.len(), len + 1);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state.len(), len);

        for _ in 0..len {
            press(&mut app, KeyCode::Char('x'));
        }
        assert_eq!(app.state.len(), 1); // bounded below, no-op afterwards
    }

    #[test]
    fn quit_and_help_flow() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('?')), Flow::Continue);
        assert!(app.show_help);
        // any key dismisses help without acting
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Continue);
        assert!(!app.show_help);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Quit);
    }

    #[test]
    fn tiny_terminal_flags_size_error() {
        let mut app = app();
        app.resize(10, 5);
        assert!(app.too_small);
        app.resize(80, 30);
        assert!(!app.too_small);
    }
}

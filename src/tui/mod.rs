//! Interactive picker TUI.
//!
//! The event loop polls terminal events, routes keys through the focused
//! section, and flushes pending state changes into every widget before
//! each redraw. The palette is saved when the picker exits.

mod app;
mod input;
mod theme;
pub mod widgets;

use std::io::{Stdout, stdout};
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::event::{self, Event, KeyEventKind},
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

pub use app::{App, Flow};
pub use theme::Theme;

use crate::state::State;

/// Idle poll between termination checks and message-timeout repaints.
const TICK: Duration = Duration::from_millis(50);

/// Run the picker until the user quits, then persist the palette.
pub fn run(state: Arc<State>) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let size = terminal.size()?;
    let mut app = App::new(Arc::clone(&state), (size.width, size.height));
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result?;
    state.save().wrap_err("failed to save palette")
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if !event::poll(TICK)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match app.on_key(key) {
                Flow::Quit => return Ok(()),
                Flow::Sync => {
                    terminal.clear()?;
                }
                Flow::Continue => {}
            },
            Event::Resize(w, h) => app.resize(w, h),
            _ => {}
        }
    }
}

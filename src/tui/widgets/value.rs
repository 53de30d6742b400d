//! Value (brightness) navigation bar.

use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;

use super::navbar::NavBar;
use super::saturation::percent_scale;
use super::{Section, tcolor};
use crate::change::Change;
use crate::color::hsv_to_rgb;
use crate::state::State;
use crate::tui::theme::Theme;

/// Bar cycling the value axis: entries vary value at the selected slot's
/// hue and saturation.
pub struct ValueBar {
    bar: NavBar,
    state: Arc<State>,
}

impl ValueBar {
    pub fn new(state: Arc<State>, theme: &Theme) -> Self {
        Self {
            bar: NavBar::new(percent_scale(), theme),
            state,
        }
    }
}

impl Section for ValueBar {
    fn up(&mut self, step: usize) {
        self.bar.up(step);
        self.state.set_value(self.bar.value());
    }

    fn down(&mut self, step: usize) {
        self.bar.down(step);
        self.state.set_value(self.bar.value());
    }

    fn handle(&mut self, change: Change) {
        if change.intersects(Change::HUE | Change::SATURATION) {
            let (hue, saturation) = (self.state.hue(), self.state.saturation());
            self.bar
                .rebuild(|value| tcolor(hsv_to_rgb(hue, saturation, value)));
        }
        if change.intersects(Change::SELECTED | Change::VALUE) {
            self.bar.set_value(self.state.value());
        }
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) {
        self.bar.draw(frame, area);
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.bar.resize(width, height);
    }

    fn set_pointer_style(&mut self, style: Style) {
        self.bar.set_pointer_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn movement_clamps_and_writes_back() {
        let state = Arc::new(State::new_default(PathBuf::from("test.toml")));
        let mut bar = ValueBar::new(Arc::clone(&state), &Theme::default());
        bar.resize(42, 24);
        bar.handle(state.flush());
        assert_eq!(bar.bar.value(), 100.0);

        bar.up(50); // already at the top of the scale
        assert_eq!(state.value(), 100.0);

        bar.down(10);
        assert_eq!(state.value(), 95.0);
        bar.down(100_000);
        assert_eq!(state.value(), 0.0);
    }
}

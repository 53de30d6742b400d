//! Hue navigation bar.

use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;

use super::navbar::NavBar;
use super::{Section, tcolor};
use crate::change::Change;
use crate::color::hsv_to_rgb;
use crate::state::State;
use crate::tui::theme::Theme;

const HUE_MAX: f64 = 359.0;
const HUE_INCR: f64 = 0.5;

/// Bar cycling the hue axis: entries vary hue at the selected slot's
/// saturation and value.
pub struct HueBar {
    bar: NavBar,
    state: Arc<State>,
}

impl HueBar {
    pub fn new(state: Arc<State>, theme: &Theme) -> Self {
        let count = (HUE_MAX / HUE_INCR) as usize;
        let scale = (0..count).map(|n| n as f64 * HUE_INCR).collect();
        Self {
            bar: NavBar::new(scale, theme),
            state,
        }
    }
}

impl Section for HueBar {
    fn up(&mut self, step: usize) {
        self.bar.up(step);
        self.state.set_hue(self.bar.value());
    }

    fn down(&mut self, step: usize) {
        self.bar.down(step);
        self.state.set_hue(self.bar.value());
    }

    fn handle(&mut self, change: Change) {
        // colors depend on the other two axes; position on this one
        if change.intersects(Change::SATURATION | Change::VALUE) {
            let (saturation, value) = (self.state.saturation(), self.state.value());
            self.bar
                .rebuild(|hue| tcolor(hsv_to_rgb(hue, saturation, value)));
        }
        if change.intersects(Change::SELECTED | Change::HUE) {
            self.bar.set_value(self.state.hue());
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

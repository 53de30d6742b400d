//! Saturation navigation bar.

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

/// Bar cycling the saturation axis: entries vary saturation at the
/// selected slot's hue and value.
pub struct SaturationBar {
    bar: NavBar,
    state: Arc<State>,
}

impl SaturationBar {
    pub fn new(state: Arc<State>, theme: &Theme) -> Self {
        Self {
            bar: NavBar::new(percent_scale(), theme),
            state,
        }
    }
}

/// 0-100 in 0.5 steps, inclusive.
pub(super) fn percent_scale() -> Vec<f64> {
    (0..=200).map(|n| f64::from(n) * 0.5).collect()
}

impl Section for SaturationBar {
    fn up(&mut self, step: usize) {
        self.bar.up(step);
        self.state.set_saturation(self.bar.value());
    }

    fn down(&mut self, step: usize) {
        self.bar.down(step);
        self.state.set_saturation(self.bar.value());
    }

    fn handle(&mut self, change: Change) {
        if change.intersects(Change::HUE | Change::VALUE) {
            let (hue, value) = (self.state.hue(), self.state.value());
            self.bar
                .rebuild(|saturation| tcolor(hsv_to_rgb(hue, saturation, value)));
        }
        if change.intersects(Change::SELECTED | Change::SATURATION) {
            self.bar.set_value(self.state.saturation());
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

//! Scrollable navigation bar: the windowed scroll cursor shared by the
//! hue, saturation and value bars.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::bar_height;
use crate::tui::theme::Theme;

/// Look-ahead margin so the cursor is never pinned at the window edge.
const SCROLL_AHEAD: usize = 3;

/// Largest minimap sampling stride; keeps the overview from degenerating
/// to a single sample on huge scales.
const MAX_MINI_STRIDE: usize = 13;

/// A fixed scale of scalar values with one rendered color per entry, a
/// cursor, and a scrolling visible window.
///
/// Window invariant, re-established after every call:
/// `offset <= pos <= offset + width`.
pub struct NavBar {
    scale: Vec<f64>,
    items: Vec<Color>,
    mini: Vec<usize>,
    pos: usize,
    offset: usize,
    width: usize,
    height: usize,
    pointer: Style,
    label_style: Style,
}

impl NavBar {
    pub fn new(scale: Vec<f64>, theme: &Theme) -> Self {
        let items = vec![Color::Reset; scale.len()];
        Self {
            scale,
            items,
            mini: Vec::new(),
            pos: 0,
            offset: 0,
            width: 0,
            height: 1,
            pointer: theme.indicator,
            label_style: theme.text_box,
        }
    }

    /// The scale value under the cursor.
    pub fn value(&self) -> f64 {
        self.scale.get(self.pos).copied().unwrap_or(0.0)
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn items(&self) -> &[Color] {
        &self.items
    }

    pub fn set_pointer_style(&mut self, style: Style) {
        self.pointer = style;
    }

    /// Move the cursor up the scale, clamped at the top, then re-clamp
    /// the window. A zero step is a safe no-op that still re-clamps.
    pub fn up(&mut self, step: usize) {
        let Some(max) = self.scale.len().checked_sub(1) else {
            return;
        };
        if step > 0 {
            if self.pos == max {
                return;
            }
            self.pos = (self.pos + step).min(max);
        }

        if self.pos > self.offset + self.width.saturating_sub(SCROLL_AHEAD) {
            self.offset = (self.pos + SCROLL_AHEAD).saturating_sub(self.width);
        }
        let max_offset = max.saturating_sub(self.width);
        self.offset = self.offset.min(max_offset).min(self.pos);
    }

    /// Move the cursor down the scale, clamped at zero, then re-clamp
    /// the window. A zero step is a safe no-op that still re-clamps.
    pub fn down(&mut self, step: usize) {
        if self.scale.is_empty() {
            return;
        }
        if step > 0 {
            if self.pos == 0 {
                return;
            }
            self.pos = self.pos.saturating_sub(step);
        }

        if self.pos < self.offset + SCROLL_AHEAD {
            self.offset = self.pos.saturating_sub(SCROLL_AHEAD);
        }
        // the look-ahead must never push the cursor out of the window
        self.offset = self
            .offset
            .max(self.pos.saturating_sub(self.width))
            .min(self.pos);
    }

    /// Position the cursor on `target`: the largest scale index whose
    /// value does not exceed it, routed through `up`/`down` so the
    /// window invariant is re-established rather than set directly.
    pub fn set_value(&mut self, target: f64) {
        if self.scale.is_empty() {
            return;
        }
        let mut idx = 0;
        while idx < self.scale.len() - 1 && self.scale[idx + 1] <= target {
            idx += 1;
        }
        if idx > self.pos {
            self.up(idx - self.pos);
        } else if idx < self.pos {
            self.down(self.pos - idx);
        }
    }

    /// Adopt a new size: a zero-step nudge in both directions re-clamps
    /// the window, and the minimap sampling is rebuilt for the width.
    pub fn resize(&mut self, width: u16, term_height: u16) {
        self.width = usize::from(width).saturating_sub(2);
        self.height = usize::from(bar_height(term_height));
        self.up(0);
        self.down(0);
        self.rebuild_mini();
    }

    /// Recompute every rendered color by evaluating `f` at each scale
    /// value. Called whenever the baseline color changes.
    pub fn rebuild(&mut self, mut f: impl FnMut(f64) -> Color) {
        for (item, &value) in self.items.iter_mut().zip(self.scale.iter()) {
            *item = f(value);
        }
    }

    fn rebuild_mini(&mut self) {
        self.mini.clear();
        if self.width == 0 || self.scale.is_empty() {
            return;
        }
        let stride = self
            .scale
            .len()
            .div_ceil(self.width)
            .clamp(1, MAX_MINI_STRIDE);
        let mut n = 0;
        while n < self.scale.len() {
            self.mini.push(n);
            n += stride;
        }
    }

    /// Minimap sample holding the cursor: the last sample whose
    /// successor is at or past `pos`.
    fn mini_pos(&self) -> usize {
        let mut mpos = 0;
        while mpos + 1 < self.mini.len() {
            if self.mini[mpos + 1] >= self.pos {
                break;
            }
            mpos += 1;
        }
        mpos
    }

    /// Visible minimap samples: a window centered on the current sample,
    /// gathered with modular arithmetic.
    fn minimap_window(&self) -> Vec<usize> {
        centered_window(self.mini.len(), self.mini_pos(), self.width)
    }

    pub fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.width == 0 || area.height == 0 || self.width == 0 {
            return;
        }
        let mut lines = Vec::with_capacity(self.height + 3);

        // pointer row
        let pointer_col = 1 + (self.pos - self.offset).min(self.width);
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(pointer_col)),
            Span::styled("▾", self.pointer),
        ]));

        // bar body with border columns
        let end = (self.offset + self.width).min(self.items.len());
        for _ in 0..self.height {
            let mut spans = Vec::with_capacity(self.width + 2);
            spans.push(Span::styled("│", self.pointer));
            for idx in self.offset..end {
                spans.push(Span::styled(" ", Style::default().bg(self.items[idx])));
            }
            let shown = end.saturating_sub(self.offset);
            if shown < self.width {
                spans.push(Span::raw(" ".repeat(self.width - shown)));
            }
            spans.push(Span::styled("│", self.pointer));
            lines.push(Line::from(spans));
        }

        // minimap strip, centered
        let window = self.minimap_window();
        let pad = 1 + (self.width.saturating_sub(window.len())) / 2;
        let mut spans = Vec::with_capacity(window.len() + 1);
        spans.push(Span::raw(" ".repeat(pad)));
        for sample in window {
            spans.push(Span::styled(
                " ",
                Style::default().bg(self.items[self.mini[sample]]),
            ));
        }
        lines.push(Line::from(spans));

        // value label, centered
        let label = format!("{:5.1}", self.value());
        let pad = (self.width + 2).saturating_sub(label.len()) / 2;
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(label, self.label_style),
        ]));

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Indices of a window of `width` cells centered on `center`, wrapping
/// modularly over a ring of `len` entries.
fn centered_window(len: usize, center: usize, width: usize) -> Vec<usize> {
    if len == 0 || width == 0 {
        return Vec::new();
    }
    let w = width.min(len);
    let half = w / 2;
    (0..w).map(|i| (center + len - half + i) % len).collect()
}

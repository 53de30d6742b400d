//! Palette slot row: every slot side by side, selection highlighted.

use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{Section, bar_height, tcolor};
use crate::change::Change;
use crate::state::State;
use crate::tui::theme::Theme;

/// Renders all palette slots with a dynamic-width centered layout and
/// owns slot selection (circular, via `State::next`/`prev`).
pub struct PaletteBox {
    state: Arc<State>,
    width: usize,
    box_height: usize,
    pointer: Style,
    theme: Theme,
}

impl PaletteBox {
    pub fn new(state: Arc<State>, theme: &Theme) -> Self {
        Self {
            state,
            width: 0,
            box_height: 2,
            pointer: theme.indicator,
            theme: theme.clone(),
        }
    }

    /// Rows this widget needs at the given terminal height.
    pub fn rows(term_height: u16) -> u16 {
        let box_height = u16::from(bar_height(term_height)) + 1;
        // header + active panel + top edge + swatches + bottom edge
        1 + box_height * 2 + 1 + box_height + 1
    }

    fn header_text(&self) -> String {
        const SPACER: &str = "  ▎ ";
        let slots = self.state.slots();
        let selected = &slots[self.state.pos()];
        format!(
            "{}{}{}{}{}",
            selected.rgb_string(),
            SPACER,
            selected.hex_string(),
            SPACER,
            selected.hsv_string()
        )
    }
}

impl Section for PaletteBox {
    fn up(&mut self, _step: usize) {
        self.state.next();
    }

    fn down(&mut self, _step: usize) {
        self.state.prev();
    }

    fn handle(&mut self, _change: Change) {
        // draws straight from state; nothing cached
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) {
        if area.width == 0 || area.height == 0 || self.width == 0 {
            return;
        }
        let colors = self.state.slot_colors();
        let pos = self.state.pos();
        let selected = tcolor(colors[pos]);

        let base = self.width / colors.len();
        let stretch = self.width % colors.len();
        let widths = box_widths(colors.len(), base, stretch);

        // the selected slot carries the pointer style, so it dims when
        // focus is on one of the bars
        let hi = self.pointer;
        let lo = self.theme.indicator;
        let mut lines = Vec::new();

        // header: readout of the selected color
        let header = self.header_text();
        let pad = self.width.saturating_sub(header.chars().count()) / 2;
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(header, self.theme.text_box),
        ]));

        // active color panel
        let panel_style = Style::default().bg(selected);
        for _ in 0..self.box_height * 2 {
            lines.push(Line::from(Span::styled(
                " ".repeat(self.width),
                panel_style,
            )));
        }

        // top edge of the slot boxes
        let mut edge = Vec::with_capacity(colors.len());
        for (n, &bw) in widths.iter().enumerate() {
            let st = if n == pos { hi } else { lo };
            edge.push(Span::styled("▁".repeat(bw), st));
        }
        lines.push(Line::from(edge));

        // slot swatches with side borders
        for _ in 0..self.box_height {
            let mut spans = Vec::with_capacity(colors.len() * 3);
            for (n, &bw) in widths.iter().enumerate() {
                let border = if n == pos { hi } else { lo };
                let fill = Style::default().bg(tcolor(colors[n]));
                spans.push(Span::styled("▎", border));
                if bw > 2 {
                    spans.push(Span::styled(" ".repeat(bw - 2), fill));
                }
                if bw > 1 {
                    spans.push(Span::styled("▕", border));
                }
            }
            lines.push(Line::from(spans));
        }

        // bottom edge
        let mut edge = Vec::with_capacity(colors.len());
        for (n, &bw) in widths.iter().enumerate() {
            let st = if n == pos { hi } else { lo };
            edge.push(Span::styled("▔".repeat(bw), st));
        }
        lines.push(Line::from(edge));

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = usize::from(width);
        self.box_height = usize::from(bar_height(height)) + 1;
    }

    fn set_pointer_style(&mut self, style: Style) {
        self.pointer = style;
    }
}

/// Distribute `stretch` leftover columns across `count` slots of `base`
/// width so the row stays centered: the center slot takes the remainder,
/// sheds it outward two-for-one, each left slot passes surplus further
/// left, and the settled left half is mirrored onto the right.
///
/// For an odd `count` the result is a palindrome and sums to
/// `base * count + stretch` exactly; the center slot holds at most two
/// surplus columns over its neighbors.
fn box_widths(count: usize, base: usize, stretch: usize) -> Vec<usize> {
    let mut widths = vec![0usize; count];
    if count == 0 {
        return widths;
    }
    let center = count / 2;
    widths[center] = stretch;

    if center > 0 {
        while widths[center] / 3 >= 1 {
            widths[center] -= 2;
            widths[center - 1] += 1;
        }
        let mut idx = center - 1;
        while idx > 0 {
            while widths[idx] >= 2 {
                widths[idx] -= 1;
                widths[idx - 1] += 1;
            }
            idx -= 1;
        }
        for n in (center + 1)..count {
            widths[n] = widths[count - 1 - n];
        }
    }

    for w in &mut widths {
        *w += base;
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn layout_is_a_palindrome_for_odd_counts() {
        for count in [1usize, 3, 5, 7, 9, 21] {
            for width in 20..120 {
                let base = width / count;
                let stretch = width % count;
                let widths = box_widths(count, base, stretch);
                for i in 0..count {
                    assert_eq!(
                        widths[i],
                        widths[count - 1 - i],
                        "count={count} width={width}"
                    );
                }
            }
        }
    }

    #[test]
    fn layout_conserves_width_for_odd_counts() {
        for count in [1usize, 3, 5, 7, 9, 21] {
            for width in 20..120 {
                let widths = box_widths(count, width / count, width % count);
                assert_eq!(
                    widths.iter().sum::<usize>(),
                    width,
                    "count={count} width={width}"
                );
            }
        }
    }

    #[test]
    fn layout_never_exceeds_width_with_slack_below_count() {
        for count in 1usize..=22 {
            for width in count..160 {
                let widths = box_widths(count, width / count, width % count);
                let sum: usize = widths.iter().sum();
                assert!(sum <= width, "count={count} width={width} sum={sum}");
                assert!(width - sum < count, "count={count} width={width} sum={sum}");
            }
        }
    }

    #[test]
    fn neighboring_slots_differ_by_at_most_two() {
        // the center keeps up to 2 surplus columns at equilibrium; the
        // rest spreads out in single columns
        for count in [3usize, 5, 7, 9, 21] {
            for width in 30..120 {
                let widths = box_widths(count, width / count, width % count);
                for pair in widths.windows(2) {
                    assert!(
                        pair[0].abs_diff(pair[1]) <= 2,
                        "count={count} width={width} {widths:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn selection_maps_to_state_cursor() {
        let state = Arc::new(State::new_default(PathBuf::from("test.toml")));
        let mut pb = PaletteBox::new(Arc::clone(&state), &Theme::default());
        let len = state.len();

        for _ in 0..len {
            pb.up(1);
        }
        assert_eq!(state.pos(), 0);

        pb.down(1);
        assert_eq!(state.pos(), len - 1);
        pb.up(1);
        assert_eq!(state.pos(), 0);
    }
}

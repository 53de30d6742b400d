//! Help overlay listing keybindings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::theme::Theme;

const BINDINGS: [(&str, &str); 9] = [
    ("↑, k", "navigate up"),
    ("↓, j", "navigate down"),
    ("←, h", "decrease selected value"),
    ("→, l", "increase selected value"),
    ("shift + ←/→/h/l", "adjust selected value quickly"),
    ("a", "add a new palette color"),
    ("x", "remove the selected palette color"),
    ("q, esc", "exit"),
    ("?", "show this help menu"),
];

/// Draw the keybinding overlay centered over the display. Any key
/// dismisses it.
pub fn draw_help_overlay(frame: &mut Frame<'_>, theme: &Theme) {
    let key_w = BINDINGS.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let desc_w = BINDINGS.iter().map(|(_, d)| d.len()).max().unwrap_or(0);
    let menu_w = (key_w + desc_w + 7) as u16;
    let menu_h = BINDINGS.len() as u16 + 2;

    let area = frame.area();
    if area.width < menu_w || area.height < menu_h {
        return;
    }
    let overlay = Rect {
        x: (area.width - menu_w) / 2,
        y: 2.min(area.height - menu_h),
        width: menu_w,
        height: menu_h,
    };

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {key:key_w$} "), theme.indicator_hi),
                Span::styled("│ ", theme.indicator),
                Span::styled(*desc, Style::default()),
            ])
        })
        .collect();

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_box),
        ),
        overlay,
    );
}

//! Transient status/error message line.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::tui::theme::Theme;

const DISPLAY_TIMEOUT: Duration = Duration::from_secs(2);

/// A one-line message that clears itself after a short timeout.
#[derive(Debug, Default)]
pub struct ErrorMsg {
    message: Option<(Instant, String)>,
    width: usize,
}

impl ErrorMsg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.message = Some((Instant::now(), text.into()));
    }

    pub fn resize(&mut self, width: u16) {
        self.width = usize::from(width);
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let Some((since, text)) = &self.message else {
            return;
        };
        if since.elapsed() >= DISPLAY_TIMEOUT {
            self.message = None;
            return;
        }
        let text: String = text.chars().take(self.width.max(1)).collect();
        frame.render_widget(Paragraph::new(Span::styled(text, theme.error)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_expires() {
        let mut msg = ErrorMsg::new();
        msg.set("oops");
        let (ts, _) = msg.message.as_mut().unwrap();
        *ts = Instant::now() - DISPLAY_TIMEOUT;

        // drawing after the timeout clears it; a fresh set restores it
        assert!(msg.message.as_ref().unwrap().0.elapsed() >= DISPLAY_TIMEOUT);
        msg.set("again");
        assert!(msg.message.as_ref().unwrap().0.elapsed() < DISPLAY_TIMEOUT);
    }
}

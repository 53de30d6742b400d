//! Picker widgets.

mod errmsg;
mod help;
mod hue;
mod navbar;
mod palette_box;
mod saturation;
mod value;

pub use errmsg::ErrorMsg;
pub use help::draw_help_overlay;
pub use hue::HueBar;
pub use navbar::NavBar;
pub use palette_box::PaletteBox;
pub use saturation::SaturationBar;
pub use value::ValueBar;

use palette::Srgb;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use crate::change::Change;

/// A focusable row of the picker display.
///
/// The controller drives every widget through this seam: `up`/`down` for
/// value adjustment, `handle` for change propagation after each state
/// flush, `resize` on layout changes, and `set_pointer_style` to mark
/// focus.
pub trait Section {
    /// Increase the section's value by `step`.
    fn up(&mut self, step: usize);
    /// Decrease the section's value by `step`.
    fn down(&mut self, step: usize);
    /// React to state changes since the last render cycle.
    fn handle(&mut self, change: Change);
    /// Render into `area`.
    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect);
    /// Re-layout for a new terminal size.
    fn resize(&mut self, width: u16, height: u16);
    /// Set the pointer/border style (focused or not).
    fn set_pointer_style(&mut self, style: Style);
}

/// Bar body height for a given terminal height.
pub(crate) fn bar_height(term_height: u16) -> u16 {
    if term_height >= 29 { 2 } else { 1 }
}

/// Rows a bar section occupies: pointer row, body, minimap, label.
pub(crate) fn bar_rows(term_height: u16) -> u16 {
    bar_height(term_height) + 3
}

/// Terminal cell color for an 8-bit sRGB value.
pub(crate) fn tcolor(rgb: Srgb<u8>) -> Color {
    Color::Rgb(rgb.red, rgb.green, rgb.blue)
}

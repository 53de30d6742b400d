//! tintpick: an interactive terminal HSV palette picker.
//!
//! The picker presents a row of palette slots plus hue, saturation and
//! value bars for the selected slot. All mutation flows through
//! [`state::State`], which accumulates a [`change::Change`] bitset that
//! the widgets consume once per render cycle to decide what to
//! recompute.

pub mod change;
pub mod cli;
pub mod color;
pub mod config;
pub mod logging;
pub mod state;
pub mod tui;

//! Pending-change tracking for the palette state.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bitset of palette-state fields mutated since the last flush.
///
/// Every `State` mutator ORs its flag into the pending accumulator;
/// `State::flush` hands the union to the widgets exactly once per render
/// cycle and resets it to [`Change::NONE`].
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Change(u8);

impl Change {
    /// Nothing changed.
    pub const NONE: Self = Self(0);
    /// A different palette slot was selected.
    pub const SELECTED: Self = Self(1 << 0);
    /// The selected slot's hue changed.
    pub const HUE: Self = Self(1 << 1);
    /// The selected slot's saturation changed.
    pub const SATURATION: Self = Self(1 << 2);
    /// The selected slot's value changed.
    pub const VALUE: Self = Self(1 << 3);
    /// Every field is considered changed (slot switch, structural edits).
    pub const ALL: Self = Self(1 << 0 | 1 << 1 | 1 << 2 | 1 << 3);

    /// True if any bit of `other` is set in `self`.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every bit of `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if no bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Change {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Change {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Change({:04b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_by_or() {
        let mut pending = Change::NONE;
        pending |= Change::HUE;
        pending |= Change::SATURATION;
        assert!(pending.contains(Change::HUE | Change::SATURATION));
        assert!(!pending.intersects(Change::VALUE));
    }

    #[test]
    fn all_covers_every_field() {
        for flag in [
            Change::SELECTED,
            Change::HUE,
            Change::SATURATION,
            Change::VALUE,
        ] {
            assert!(Change::ALL.contains(flag));
        }
    }

    #[test]
    fn none_is_empty() {
        assert!(Change::NONE.is_empty());
        assert!(!Change::NONE.intersects(Change::ALL));
    }
}

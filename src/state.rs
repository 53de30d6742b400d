//! Palette state: the single source of truth for slot colors, the
//! selection cursor, and pending change tracking.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use palette::Srgb;

use crate::change::Change;
use crate::color::{hex_string, hsv_to_rgb, rgb_to_hsv};
use crate::config::{PaletteColor, PaletteError, PaletteFile};

/// Fewest palette slots a state may hold.
pub const MIN_SLOTS: usize = 1;
/// Most palette slots a state may hold.
pub const MAX_SLOTS: usize = 22;

const DEFAULT_SLOT_COUNT: usize = 7;

/// One palette slot: canonical HSV components plus the derived RGB triple,
/// recomputed eagerly on every mutation.
///
/// HSV is canonical so a fully desaturated or darkened slot never forgets
/// its hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubState {
    hue: f64,
    saturation: f64,
    value: f64,
    rgb: Srgb<u8>,
}

impl SubState {
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
            rgb: hsv_to_rgb(hue, saturation, value),
        }
    }

    pub fn from_rgb(rgb: Srgb<u8>) -> Self {
        let (hue, saturation, value) = rgb_to_hsv(rgb);
        Self {
            hue,
            saturation,
            value,
            rgb,
        }
    }

    pub fn hsv(&self) -> (f64, f64, f64) {
        (self.hue, self.saturation, self.value)
    }

    pub fn rgb(&self) -> Srgb<u8> {
        self.rgb
    }

    pub fn set_hue(&mut self, hue: f64) {
        self.hue = hue;
        self.rgb = hsv_to_rgb(self.hue, self.saturation, self.value);
    }

    pub fn set_saturation(&mut self, saturation: f64) {
        self.saturation = saturation;
        self.rgb = hsv_to_rgb(self.hue, self.saturation, self.value);
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.rgb = hsv_to_rgb(self.hue, self.saturation, self.value);
    }

    pub fn set_rgb(&mut self, rgb: Srgb<u8>) {
        (self.hue, self.saturation, self.value) = rgb_to_hsv(rgb);
        self.rgb = rgb;
    }

    pub fn hex_string(&self) -> String {
        hex_string(self.rgb)
    }

    pub fn hsv_string(&self) -> String {
        format!(
            "{:03.0} {:03.0} {:03.0}",
            self.hue, self.saturation, self.value
        )
    }

    pub fn rgb_string(&self) -> String {
        format!("{:03} {:03} {:03}", self.rgb.red, self.rgb.green, self.rgb.blue)
    }
}

impl Default for SubState {
    fn default() -> Self {
        Self::from_rgb(Srgb::new(128, 128, 128))
    }
}

struct Inner {
    slots: Vec<SubState>,
    pos: usize,
    pending: Change,
}

/// The palette: an ordered set of slots, a selection cursor, and the
/// accumulated not-yet-consumed [`Change`].
///
/// Only the slot at the cursor is ever mutated, so the pending change
/// always describes "the currently selected slot". Accessors take a
/// reader/writer lock so the render path can share the state with the
/// event-handling path through an `Arc`; there is a single logical
/// writer.
pub struct State {
    name: String,
    path: PathBuf,
    is_new: bool,
    inner: RwLock<Inner>,
}

impl State {
    /// A state with the default palette: a fixed hue ladder at full
    /// saturation and value.
    pub fn new_default(path: PathBuf) -> Self {
        let slots = (0..DEFAULT_SLOT_COUNT)
            .map(|n| SubState::from_hsv(20.0 + 30.0 * n as f64, 100.0, 100.0))
            .collect();
        Self {
            name: String::new(),
            path,
            is_new: true,
            inner: RwLock::new(Inner {
                slots,
                pos: 0,
                pending: Change::ALL,
            }),
        }
    }

    /// Load a stored palette from `path`.
    ///
    /// An absent file is the first-run case and yields the default
    /// palette; a malformed or out-of-range file is an error.
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let mut state = Self::new_default(path.to_path_buf());
        let Some(file) = PaletteFile::load(path)? else {
            tracing::info!(path = %path.display(), "no palette file, using defaults");
            return Ok(state);
        };

        if !file.colors.is_empty() {
            let mut slots = Vec::with_capacity(file.colors.len().min(MAX_SLOTS));
            for (n, record) in file.colors.iter().take(MAX_SLOTS).enumerate() {
                let (h, s, v) = record.resolve(n)?;
                slots.push(SubState::from_hsv(h, s, v));
            }
            state.inner = RwLock::new(Inner {
                slots,
                pos: 0,
                pending: Change::ALL,
            });
        }
        state.name = file.name;
        state.is_new = false;
        tracing::info!(path = %path.display(), "loaded palette");
        Ok(state)
    }

    /// Persist the palette as HSV records.
    pub fn save(&self) -> Result<(), PaletteError> {
        let inner = self.read();
        let file = PaletteFile {
            name: self.name.clone(),
            colors: inner
                .slots
                .iter()
                .map(|s| {
                    let (h, sat, v) = s.hsv();
                    PaletteColor::from_hsv(h, sat, v)
                })
                .collect(),
        };
        drop(inner);
        tracing::info!(path = %self.path.display(), "saving palette");
        file.save(&self.path)
    }

    /// Whether this state was freshly created rather than loaded.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Persistent file path for this palette.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Palette name; falls back to the file stem.
    pub fn name(&self) -> String {
        if self.name.is_empty() {
            self.path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "palette".to_string())
        } else {
            self.name.clone()
        }
    }

    pub fn pos(&self) -> usize {
        self.read().pos
    }

    pub fn len(&self) -> usize {
        self.read().slots.len()
    }

    /// Hue of the selected slot.
    pub fn hue(&self) -> f64 {
        let inner = self.read();
        inner.slots[inner.pos].hue
    }

    /// Saturation of the selected slot.
    pub fn saturation(&self) -> f64 {
        let inner = self.read();
        inner.slots[inner.pos].saturation
    }

    /// Value of the selected slot.
    pub fn value(&self) -> f64 {
        let inner = self.read();
        inner.slots[inner.pos].value
    }

    /// RGB of the selected slot.
    pub fn selected_color(&self) -> Srgb<u8> {
        let inner = self.read();
        inner.slots[inner.pos].rgb
    }

    /// RGB of every slot, in order.
    pub fn slot_colors(&self) -> Vec<Srgb<u8>> {
        self.read().slots.iter().map(|s| s.rgb).collect()
    }

    /// Every slot, in order.
    pub fn slots(&self) -> Vec<SubState> {
        self.read().slots.clone()
    }

    /// Advance the cursor, wrapping at the end.
    pub fn next(&self) {
        let mut inner = self.write();
        inner.pos = if inner.pos + 1 >= inner.slots.len() {
            0
        } else {
            inner.pos + 1
        };
        inner.pending |= Change::ALL;
    }

    /// Retreat the cursor, wrapping at the start.
    pub fn prev(&self) {
        let mut inner = self.write();
        inner.pos = match inner.pos {
            0 => inner.slots.len() - 1,
            p => p - 1,
        };
        inner.pending |= Change::ALL;
    }

    /// Insert a default slot after the cursor. No-op at capacity;
    /// returns whether the palette changed (the caller re-layouts on
    /// success).
    pub fn add(&self) -> bool {
        let mut inner = self.write();
        if inner.slots.len() >= MAX_SLOTS {
            return false;
        }
        let at = inner.pos + 1;
        inner.slots.insert(at, SubState::default());
        inner.pending |= Change::ALL;
        true
    }

    /// Remove the slot at the cursor. No-op at the lower bound; returns
    /// whether the palette changed.
    pub fn remove(&self) -> bool {
        let mut inner = self.write();
        if inner.slots.len() <= MIN_SLOTS {
            return false;
        }
        let at = inner.pos;
        inner.slots.remove(at);
        if inner.pos >= inner.slots.len() {
            inner.pos = inner.slots.len() - 1;
        }
        inner.pending |= Change::ALL;
        true
    }

    pub fn set_hue(&self, hue: f64) {
        let mut inner = self.write();
        let pos = inner.pos;
        inner.slots[pos].set_hue(hue);
        inner.pending |= Change::HUE;
    }

    pub fn set_saturation(&self, saturation: f64) {
        let mut inner = self.write();
        let pos = inner.pos;
        inner.slots[pos].set_saturation(saturation);
        inner.pending |= Change::SATURATION;
    }

    pub fn set_value(&self, value: f64) {
        let mut inner = self.write();
        let pos = inner.pos;
        inner.slots[pos].set_value(value);
        inner.pending |= Change::VALUE;
    }

    /// Replace the selected slot's color wholesale.
    pub fn set_rgb(&self, rgb: Srgb<u8>) {
        let mut inner = self.write();
        let pos = inner.pos;
        inner.slots[pos].set_rgb(rgb);
        inner.pending |= Change::HUE | Change::SATURATION | Change::VALUE;
    }

    /// Atomically take the accumulated change, resetting it to
    /// [`Change::NONE`]. Called once per render cycle; the caller
    /// distributes the result to every widget in that cycle.
    pub fn flush(&self) -> Change {
        let mut inner = self.write();
        std::mem::replace(&mut inner.pending, Change::NONE)
    }

    /// Comma-separated hex rendition of every slot.
    pub fn hex_string(&self) -> String {
        self.join_slots(SubState::hex_string)
    }

    /// Comma-separated HSV rendition of every slot.
    pub fn hsv_string(&self) -> String {
        self.join_slots(SubState::hsv_string)
    }

    /// Comma-separated RGB rendition of every slot.
    pub fn rgb_string(&self) -> String {
        self.join_slots(SubState::rgb_string)
    }

    /// Aligned table rendition of every slot.
    pub fn table_string(&self) -> String {
        let mut out = String::from(" #   HEX      HSV          RGB\n");
        for (n, slot) in self.read().slots.iter().enumerate() {
            out.push_str(&format!(
                "{:2}   {}  {}  {}\n",
                n,
                slot.hex_string(),
                slot.hsv_string(),
                slot.rgb_string()
            ));
        }
        out
    }

    fn join_slots(&self, f: impl Fn(&SubState) -> String) -> String {
        self.read()
            .slots
            .iter()
            .map(f)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.read();
        f.debug_struct("State")
            .field("name", &self.name)
            .field("len", &inner.slots.len())
            .field("pos", &inner.pos)
            .field("pending", &inner.pending)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state() -> State {
        State::new_default(PathBuf::from("test.toml"))
    }

    #[test]
    fn default_palette_is_a_hue_ladder() {
        let s = state();
        assert_eq!(s.len(), DEFAULT_SLOT_COUNT);
        assert_relative_eq!(s.hue(), 20.0);
        assert_relative_eq!(s.saturation(), 100.0);
        assert_relative_eq!(s.value(), 100.0);
        s.next();
        assert_relative_eq!(s.hue(), 50.0);
    }

    #[test]
    fn changes_accumulate_until_flushed() {
        let s = state();
        s.flush(); // discard the initial ALL
        s.set_hue(120.0);
        s.set_saturation(50.0);

        let change = s.flush();
        assert!(change.contains(Change::HUE | Change::SATURATION));
        assert!(!change.intersects(Change::VALUE | Change::SELECTED));
        assert_eq!(s.flush(), Change::NONE);
    }

    #[test]
    fn selection_wraps_circularly() {
        let s = state();
        let start = s.pos();
        for _ in 0..s.len() {
            s.next();
        }
        assert_eq!(s.pos(), start);

        s.next();
        s.prev();
        assert_eq!(s.pos(), start);

        s.prev();
        assert_eq!(s.pos(), s.len() - 1);
    }

    #[test]
    fn selection_marks_all_changed() {
        let s = state();
        s.flush();
        s.next();
        assert_eq!(s.flush(), Change::ALL);
    }

    #[test]
    fn add_and_remove_are_bounded() {
        let s = state();
        while s.add() {}
        assert_eq!(s.len(), MAX_SLOTS);
        assert!(!s.add());

        while s.remove() {}
        assert_eq!(s.len(), MIN_SLOTS);
        assert!(!s.remove());
        assert_eq!(s.pos(), 0);
    }

    #[test]
    fn remove_reclamps_cursor() {
        let s = state();
        for _ in 0..s.len() - 1 {
            s.next();
        }
        assert_eq!(s.pos(), s.len() - 1);
        assert!(s.remove());
        assert_eq!(s.pos(), s.len() - 1);
    }

    #[test]
    fn only_selected_slot_is_mutated() {
        let s = state();
        let before = s.slot_colors();
        s.set_value(10.0);
        let after = s.slot_colors();
        assert_ne!(before[0], after[0]);
        assert_eq!(before[1..], after[1..]);
    }

    #[test]
    fn substate_keeps_hue_at_zero_saturation() {
        let mut slot = SubState::from_hsv(210.0, 80.0, 90.0);
        slot.set_saturation(0.0);
        slot.set_value(0.0);
        let (h, _, _) = slot.hsv();
        assert_relative_eq!(h, 210.0);
    }

    #[test]
    fn set_rgb_marks_every_component() {
        let s = state();
        s.flush();
        s.set_rgb(Srgb::new(0, 0, 255));
        let change = s.flush();
        assert!(change.contains(Change::HUE | Change::SATURATION | Change::VALUE));
        assert!(!change.intersects(Change::SELECTED));
        assert_relative_eq!(s.hue(), 240.0, epsilon = 0.5);
    }

    #[test]
    fn substate_recomputes_rgb_eagerly() {
        let mut slot = SubState::from_hsv(0.0, 100.0, 100.0);
        assert_eq!(slot.rgb(), Srgb::new(255, 0, 0));
        slot.set_hue(120.0);
        assert_eq!(slot.rgb(), Srgb::new(0, 255, 0));
    }
}

// File: crates/graph-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, border widths, styles).

/// Default canvas height in rows.
pub const ROWS: usize = 24;
/// Default canvas width in columns.
pub const COLS: usize = 80;

/// Opaque style identifier handed to the backend with every glyph.
///
/// Backends map these to whatever they have (curses color pairs, ANSI codes).
pub type StyleId = u16;

/// Border widths around the plot area, in cells.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // Left gutter for y labels, two bottom rows for x tick marks + labels.
        Self::new(8, 0, 0, 2)
    }
}

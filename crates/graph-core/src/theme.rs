// File: crates/graph-core/src/theme.rs
// Summary: Glyph and style themes for chart rendering.

use crate::types::StyleId;

/// Glyph set plus style assignments for one look. Styles are opaque ids the
/// backend resolves (color pairs, ANSI sequences); the engine only hands them
/// through.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub point: char,
    pub line: char,
    pub axis_h: char,
    pub axis_v: char,
    pub origin: char,
    pub arrow_right: char,
    pub arrow_up: char,
    pub grid_dot: char,
    pub tick: char,
    pub axis_style: StyleId,
    pub grid_style: StyleId,
    pub tick_style: StyleId,
    pub legend_style: StyleId,
    /// Round-robin palette for series, indexed by `Series::color_index`.
    pub series_styles: [StyleId; 6],
}

impl Theme {
    pub fn ascii() -> Self {
        Self {
            name: "ascii",
            point: '#',
            line: '*',
            axis_h: '-',
            axis_v: '|',
            origin: '+',
            arrow_right: '>',
            arrow_up: '^',
            grid_dot: '.',
            tick: '+',
            axis_style: 1,
            grid_style: 2,
            tick_style: 3,
            legend_style: 4,
            series_styles: [10, 11, 12, 13, 14, 15],
        }
    }

    pub fn heavy() -> Self {
        Self {
            name: "heavy",
            point: '\u{25cf}',      // ●
            line: '\u{00b7}',       // ·
            axis_h: '\u{2500}',     // ─
            axis_v: '\u{2502}',     // │
            origin: '\u{253c}',     // ┼
            arrow_right: '\u{25b6}', // ▶
            arrow_up: '\u{25b2}',   // ▲
            grid_dot: '\u{2059}',   // ⁙
            tick: '\u{253c}',       // ┼
            axis_style: 1,
            grid_style: 2,
            tick_style: 3,
            legend_style: 4,
            series_styles: [10, 11, 12, 13, 14, 15],
        }
    }

    pub fn minimal() -> Self {
        Self {
            name: "minimal",
            point: '*',
            line: '.',
            axis_h: '-',
            axis_v: '|',
            origin: '+',
            arrow_right: '-',
            arrow_up: '|',
            grid_dot: ' ',
            tick: '|',
            axis_style: 0,
            grid_style: 0,
            tick_style: 0,
            legend_style: 0,
            series_styles: [0, 0, 0, 0, 0, 0],
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ascii()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::ascii(), Theme::heavy(), Theme::minimal()]
}

/// Find a theme by its `name`, falling back to ascii.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::ascii()
}

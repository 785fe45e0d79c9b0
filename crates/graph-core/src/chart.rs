// File: crates/graph-core/src/chart.rs
// Summary: Chart struct and the per-frame redraw pipeline onto a character canvas.

use log::debug;

use crate::canvas::Canvas;
use crate::clip::clip_segment;
use crate::error::GraphError;
use crate::geometry::GridRect;
use crate::mapping::CoordMap;
use crate::raster::rasterize;
use crate::series::{Series, SeriesId};
use crate::theme::Theme;
use crate::ticks::{format_tick, TickPlan, X_MIN_TICKS, Y_MIN_TICKS};
use crate::types::{Insets, StyleId};
use crate::viewport::Viewport;

/// Presentation options fixed at construction; everything that changes at
/// runtime lives on the chart itself.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub insets: Insets,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { insets: Insets::default(), theme: Theme::default() }
    }
}

/// A scene of data series plus the viewport and overlay toggles, drawn onto
/// any `Canvas` one full frame at a time.
///
/// Single-threaded by construction: `redraw` runs to completion before the
/// next input event, so no partial frame is ever observable. The plot area is
/// re-derived from the live canvas size every frame because the backend may
/// have been resized in between.
pub struct Chart {
    pub series: Vec<Series>,
    pub viewport: Viewport,
    pub options: RenderOptions,
    show_legend: bool,
    show_ticks: bool,
    show_lines: bool,
    show_grid: bool,
    next_color: usize,
}

impl Chart {
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            series: Vec::new(),
            viewport: Viewport::default(),
            options,
            show_legend: false,
            show_ticks: true,
            show_lines: true,
            show_grid: false,
            next_color: 0,
        }
    }

    /// Manual axis override. `auto = false` freezes the viewport until the
    /// next call or `autosize`.
    pub fn set_axis(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64, auto: bool) {
        self.viewport = Viewport::new(x_min, x_max, y_min, y_max, auto);
    }

    /// Append a series without drawing; useful for headless setup.
    pub fn add_series(&mut self, series: Series) -> SeriesId {
        let id = SeriesId(self.series.len());
        self.series.push(series);
        self.next_color += 1;
        id
    }

    /// Validate, append (palette color assigned round-robin), and redraw.
    pub fn plot<C: Canvas>(
        &mut self,
        canvas: &mut C,
        xs: &[f64],
        ys: &[f64],
        label: impl Into<String>,
    ) -> Result<SeriesId, GraphError> {
        let series = Series::new(xs, ys, label, self.next_color)?;
        let id = self.add_series(series);
        self.redraw(canvas)?;
        Ok(id)
    }

    /// Drop all series; the viewport is left as-is.
    pub fn clear_data(&mut self) {
        self.series.clear();
        self.next_color = 0;
    }

    pub fn legend_shown(&self) -> bool { self.show_legend }
    pub fn ticks_shown(&self) -> bool { self.show_ticks }
    pub fn lines_shown(&self) -> bool { self.show_lines }
    pub fn grid_shown(&self) -> bool { self.show_grid }

    pub fn toggle_legend<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.show_legend = !self.show_legend;
        self.redraw(canvas)
    }

    pub fn toggle_ticks<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.show_ticks = !self.show_ticks;
        self.redraw(canvas)
    }

    pub fn toggle_lines<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.show_lines = !self.show_lines;
        self.redraw(canvas)
    }

    pub fn toggle_grid<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.show_grid = !self.show_grid;
        self.redraw(canvas)
    }

    // Interactive viewport operations: mutate bounds, then redraw. None of
    // them touch series data.

    pub fn move_left<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.viewport.pan_left();
        self.redraw(canvas)
    }

    pub fn move_right<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.viewport.pan_right();
        self.redraw(canvas)
    }

    pub fn move_up<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.viewport.pan_up();
        self.redraw(canvas)
    }

    pub fn move_down<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.viewport.pan_down();
        self.redraw(canvas)
    }

    pub fn zoom_in_x<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.viewport.zoom_in_x();
        self.redraw(canvas)
    }

    pub fn zoom_out_x<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.viewport.zoom_out_x();
        self.redraw(canvas)
    }

    pub fn zoom_in_y<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.viewport.zoom_in_y();
        self.redraw(canvas)
    }

    pub fn zoom_out_y<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.viewport.zoom_out_y();
        self.redraw(canvas)
    }

    pub fn autosize<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        self.viewport.autosize();
        self.redraw(canvas)
    }

    /// Redraw the whole frame: plot area from the live canvas size, auto-fit,
    /// rebuild the mapping, then grid, axes, series (lines under points),
    /// ticks, legend. Deterministic given the same state.
    pub fn redraw<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), GraphError> {
        let (rows, cols) = canvas.size();
        let area = self.plot_area(rows, cols)?;

        if self.viewport.auto && self.viewport.fit_to(&self.series) {
            debug!(
                "auto axis: x [{}, {}] y [{}, {}]",
                self.viewport.x_min, self.viewport.x_max, self.viewport.y_min, self.viewport.y_max
            );
        }

        let map = CoordMap::new(self.viewport, area)?;
        let plans = self.tick_plans()?;
        canvas.clear();

        if self.show_grid {
            if let Some((x_plan, y_plan)) = &plans {
                self.draw_grid(canvas, &map, x_plan, y_plan);
            }
        }
        self.draw_axes(canvas, &map);
        for series in &self.series {
            self.draw_series(canvas, &map, series);
        }
        if self.show_ticks {
            if let Some((x_plan, y_plan)) = &plans {
                self.draw_ticks(canvas, &map, x_plan, y_plan, rows);
            }
        }
        if self.show_legend {
            self.draw_legend(canvas, area);
        }
        debug!("redraw: {} series on {}x{} canvas", self.series.len(), rows, cols);
        Ok(())
    }

    fn plot_area(&self, rows: usize, cols: usize) -> Result<GridRect, GraphError> {
        let insets = self.options.insets;
        // The label borders only exist while ticks are shown.
        let (left, bottom) = if self.show_ticks { (insets.left, insets.bottom) } else { (0, 0) };
        let area = GridRect::from_ltrb(
            left as i32,
            insets.top as i32,
            cols as i32 - 1 - insets.right as i32,
            rows as i32 - 1 - bottom as i32,
        );
        if !area.is_valid() {
            return Err(GraphError::CanvasTooSmall { rows, cols });
        }
        Ok(area)
    }

    fn tick_plans(&self) -> Result<Option<(TickPlan, TickPlan)>, GraphError> {
        if !self.show_ticks && !self.show_grid {
            return Ok(None);
        }
        let vp = &self.viewport;
        let x_plan = TickPlan::compute(vp.x_min.min(vp.x_max), vp.x_min.max(vp.x_max), X_MIN_TICKS)?;
        let y_plan = TickPlan::compute(vp.y_min.min(vp.y_max), vp.y_min.max(vp.y_max), Y_MIN_TICKS)?;
        Ok(Some((x_plan, y_plan)))
    }

    fn draw_grid<C: Canvas>(&self, canvas: &mut C, map: &CoordMap, x_plan: &TickPlan, y_plan: &TickPlan) {
        let theme = &self.options.theme;
        let area = map.area();
        for &t in &x_plan.positions {
            let col = map.map_x(t);
            for row in area.top..=area.bottom {
                put(canvas, row, col, theme.grid_dot, theme.grid_style);
            }
        }
        for &t in &y_plan.positions {
            let row = map.map_y(t);
            for col in area.left..=area.right {
                put(canvas, row, col, theme.grid_dot, theme.grid_style);
            }
        }
    }

    // Origin cross with arrowheads at the screen-positive ends. Each axis
    // line is drawn only when its zero coordinate is inside the view, so a
    // panned-away origin degrades to one line or none.
    fn draw_axes<C: Canvas>(&self, canvas: &mut C, map: &CoordMap) {
        let theme = &self.options.theme;
        let area = map.area();
        let x_visible = map.fits_x(0.0);
        let y_visible = map.fits_y(0.0);

        if x_visible {
            let col = map.map_x(0.0);
            for row in area.top..=area.bottom {
                put(canvas, row, col, theme.axis_v, theme.axis_style);
            }
            put(canvas, area.top, col, theme.arrow_up, theme.axis_style);
        }
        if y_visible {
            let row = map.map_y(0.0);
            for col in area.left..=area.right {
                put(canvas, row, col, theme.axis_h, theme.axis_style);
            }
            put(canvas, row, area.right, theme.arrow_right, theme.axis_style);
        }
        if x_visible && y_visible {
            put(canvas, map.map_y(0.0), map.map_x(0.0), theme.origin, theme.axis_style);
        }
    }

    fn draw_series<C: Canvas>(&self, canvas: &mut C, map: &CoordMap, series: &Series) {
        let theme = &self.options.theme;
        let style = theme.series_styles[series.color_index() % theme.series_styles.len()];
        let xs = series.xs();
        let ys = series.ys();
        let codes = map.classify(xs, ys);

        // Lines first so markers end up on top of them.
        if self.show_lines && series.len() >= 2 {
            let viewport = map.viewport();
            for i in 0..series.len() - 1 {
                if codes[i] & codes[i + 1] != 0 {
                    continue;
                }
                let Some((p, q)) = clip_segment(series.point(i), series.point(i + 1), &viewport)
                else {
                    continue;
                };
                let ca = map.map(p);
                let cb = map.map(q);
                if ca == cb {
                    continue;
                }
                for cell in rasterize(ca, cb) {
                    put(canvas, cell.row, cell.col, theme.line, style);
                }
            }
        }

        for i in 0..series.len() {
            if map.fits(xs[i], ys[i]) {
                let cell = map.map(series.point(i));
                put(canvas, cell.row, cell.col, theme.point, style);
            }
        }
    }

    fn draw_ticks<C: Canvas>(
        &self,
        canvas: &mut C,
        map: &CoordMap,
        x_plan: &TickPlan,
        y_plan: &TickPlan,
        rows: usize,
    ) {
        let theme = &self.options.theme;
        let insets = self.options.insets;
        let area = map.area();

        if insets.bottom >= 1 {
            let mark_row = area.bottom + 1;
            let label_row = (area.bottom + 2).min(rows as i32 - 1);
            for &t in &x_plan.positions {
                let col = map.map_x(t);
                put(canvas, mark_row, col, theme.tick, theme.tick_style);
                if insets.bottom >= 2 {
                    let label = format_tick(t, x_plan.spacing);
                    let width = label.chars().count() as i32;
                    let start = (col - width / 2).max(0);
                    draw_text(canvas, label_row, start, &label, theme.tick_style);
                }
            }
        }

        if insets.left >= 1 {
            let mark_col = area.left - 1;
            for &t in &y_plan.positions {
                let row = map.map_y(t);
                put(canvas, row, mark_col, theme.tick, theme.tick_style);
                if insets.left >= 2 {
                    let label = format_tick(t, y_plan.spacing);
                    let width = label.chars().count() as i32;
                    // Right-aligned into the gutter, truncating on the left
                    // when the gutter is narrower than the label.
                    let start = mark_col - 1 - width;
                    draw_text(canvas, row, start, &label, theme.tick_style);
                }
            }
        }
    }

    // Upper-right anchored list of swatch + label, drawn last so it sits
    // above data. Rows that would not fit are skipped.
    fn draw_legend<C: Canvas>(&self, canvas: &mut C, area: GridRect) {
        let theme = &self.options.theme;
        for (i, series) in self.series.iter().enumerate() {
            let row = area.top + 1 + i as i32;
            if row >= area.bottom {
                break;
            }
            let width = series.label().chars().count() as i32 + 2;
            let start = area.right - width;
            if start <= area.left {
                continue;
            }
            let style = theme.series_styles[series.color_index() % theme.series_styles.len()];
            put(canvas, row, start, theme.point, style);
            draw_text(canvas, row, start + 2, series.label(), theme.legend_style);
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn put<C: Canvas>(canvas: &mut C, row: i32, col: i32, glyph: char, style: StyleId) {
    if row < 0 || col < 0 {
        return;
    }
    canvas.draw_char(row as usize, col as usize, glyph, style);
}

fn draw_text<C: Canvas>(canvas: &mut C, row: i32, start_col: i32, text: &str, style: StyleId) {
    for (i, glyph) in text.chars().enumerate() {
        put(canvas, row, start_col + i as i32, glyph, style);
    }
}

//! SVG drawing of a [`HeatmapOption`].
//!
//! The same markup is injected into the chart surface and handed to the
//! rasterizer for export, so what the user sees is what gets snapshotted.

use std::fmt::Write;

use crate::core::format::format_value;

use super::instance::Surface;
use super::option::HeatmapOption;
use super::palette::{ColorScale, Rgb};

const FONT_FAMILY: &str = "Inter, Arial, Helvetica, sans-serif";

// Layout fractions of the surface.
const TITLE_TOP: f64 = 0.02;
const GRID_TOP: f64 = 0.15;
const GRID_HEIGHT: f64 = 0.65;
const GRID_SIDE: f64 = 0.10;
const LEGEND_BOTTOM: f64 = 0.05;

const LEGEND_LENGTH: f64 = 200.0;
const LEGEND_THICKNESS: f64 = 14.0;

const SPLIT_BANDS: [&str; 2] = ["rgba(250,250,250,0.3)", "rgba(210,219,238,0.3)"];

/// Grid area in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn for_surface(surface: Surface) -> Self {
        let width = f64::from(surface.width);
        let height = f64::from(surface.height);
        Self {
            left: width * GRID_SIDE,
            top: height * GRID_TOP,
            width: width * (1.0 - 2.0 * GRID_SIDE),
            height: height * GRID_HEIGHT,
        }
    }
}

pub fn render_svg(option: &HeatmapOption, surface: Surface) -> String {
    let width = f64::from(surface.width);
    let height = f64::from(surface.height);
    let area = PlotArea::for_surface(surface);

    let mut out = String::with_capacity(4096 + option.series.len() * 160);
    let _ = write!(
        out,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}' font-family='{FONT_FAMILY}'>",
        w = surface.width,
        h = surface.height,
    );

    let _ = write!(
        out,
        "<text x='{x:.1}' y='{y:.1}' text-anchor='middle' font-size='18' font-weight='bold' fill='#000000'>{title}</text>",
        x = width / 2.0,
        y = height * TITLE_TOP + 18.0,
        title = escape_xml(&option.title),
    );

    if option.is_empty() {
        draw_empty_axes(&mut out, area);
    } else {
        draw_split_areas(&mut out, area, option.rows(), option.columns());
        draw_cells(&mut out, area, option);
    }

    if let Some(map) = &option.visual_map {
        draw_legend(&mut out, width, height, map.min, map.max);
    }

    if let Some(text) = option.average_text() {
        let _ = write!(
            out,
            "<text x='20' y='{y:.1}' font-size='16' font-weight='bold' fill='#000000' stroke='#ffffff' stroke-width='2' paint-order='stroke'>{text}</text>",
            y = height - 20.0,
            text = escape_xml(&text),
        );
    }

    out.push_str("</svg>");
    out
}

fn draw_empty_axes(out: &mut String, area: PlotArea) {
    let bottom = area.top + area.height;
    let right = area.left + area.width;
    let _ = write!(
        out,
        "<g stroke='#6e7079' stroke-width='1'><line x1='{l:.1}' y1='{b:.1}' x2='{r:.1}' y2='{b:.1}'/><line x1='{l:.1}' y1='{t:.1}' x2='{l:.1}' y2='{b:.1}'/></g>",
        l = area.left,
        r = right,
        t = area.top,
        b = bottom,
    );
}

fn draw_split_areas(out: &mut String, area: PlotArea, rows: usize, cols: usize) {
    if rows == 0 || cols == 0 {
        return;
    }
    let band_h = area.height / rows as f64;
    let band_w = area.width / cols as f64;

    out.push_str("<g class='split-area'>");
    for row in 0..rows {
        let fill = SPLIT_BANDS[row % 2];
        let _ = write!(
            out,
            "<rect x='{x:.2}' y='{y:.2}' width='{w:.2}' height='{h:.2}' fill='{fill}'/>",
            x = area.left,
            y = area.top + row as f64 * band_h,
            w = area.width,
            h = band_h,
        );
    }
    for col in 0..cols {
        let fill = SPLIT_BANDS[col % 2];
        let _ = write!(
            out,
            "<rect x='{x:.2}' y='{y:.2}' width='{w:.2}' height='{h:.2}' fill='{fill}'/>",
            x = area.left + col as f64 * band_w,
            y = area.top,
            w = band_w,
            h = area.height,
        );
    }
    out.push_str("</g>");
}

fn draw_cells(out: &mut String, area: PlotArea, option: &HeatmapOption) {
    let Some(map) = &option.visual_map else {
        return;
    };
    let rows = option.rows();
    let cols = option.columns();
    if rows == 0 || cols == 0 {
        return;
    }

    let scale = ColorScale::new(map.min, map.max);
    let cell_w = area.width / cols as f64;
    let cell_h = area.height / rows as f64;

    out.push_str("<g class='heat-cells'>");
    for point in &option.series {
        // y counts from the bottom of the plot.
        let top_index = rows.saturating_sub(1).saturating_sub(point.y);
        let _ = write!(
            out,
            "<rect x='{x:.2}' y='{y:.2}' width='{w:.2}' height='{h:.2}' fill='{fill}'><title>{tip}</title></rect>",
            x = area.left + point.x as f64 * cell_w,
            y = area.top + top_index as f64 * cell_h,
            w = cell_w,
            h = cell_h,
            fill = scale.color_at(point.value).to_hex(),
            tip = escape_xml(&HeatmapOption::tooltip_for(point)),
        );
    }
    out.push_str("</g>");
}

fn draw_legend(out: &mut String, width: f64, height: f64, min: f64, max: f64) {
    let scale = ColorScale::new(min, max);
    let x = (width - LEGEND_LENGTH) / 2.0;
    let y = height * (1.0 - LEGEND_BOTTOM) - LEGEND_THICKNESS;

    out.push_str("<defs><linearGradient id='heat-legend' x1='0' y1='0' x2='1' y2='0'>");
    let last = scale.stops().len().saturating_sub(1).max(1);
    for (idx, Rgb(r, g, b)) in scale.stops().iter().enumerate() {
        let _ = write!(
            out,
            "<stop offset='{pct:.1}%' stop-color='rgb({r},{g},{b})'/>",
            pct = idx as f64 * 100.0 / last as f64,
        );
    }
    out.push_str("</linearGradient></defs>");

    let _ = write!(
        out,
        "<rect x='{x:.1}' y='{y:.1}' width='{LEGEND_LENGTH}' height='{LEGEND_THICKNESS}' fill='url(#heat-legend)'/>",
    );
    let baseline = y + LEGEND_THICKNESS - 2.0;
    let _ = write!(
        out,
        "<text x='{lx:.1}' y='{baseline:.1}' text-anchor='end' font-size='12' fill='#333333'>{min}</text>",
        lx = x - 8.0,
        min = format_value(min),
    );
    let _ = write!(
        out,
        "<text x='{rx:.1}' y='{baseline:.1}' font-size='12' fill='#333333'>{max}</text>",
        rx = x + LEGEND_LENGTH + 8.0,
        max = format_value(max),
    );
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::option::build_option;
    use crate::core::grid::Grid;

    const SURFACE: Surface = Surface {
        width: 1000,
        height: 500,
    };

    #[test]
    fn empty_option_draws_title_and_axes_only() {
        let svg = render_svg(&build_option(&Grid::empty(3, 3), "Boş <harita>"), SURFACE);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Boş &lt;harita&gt;"));
        assert!(!svg.contains("heat-cells"));
        assert!(!svg.contains("Ortalama"));
        assert!(svg.contains("<line"));
    }

    #[test]
    fn cells_are_placed_top_down() {
        let mut grid = Grid::empty(2, 2);
        grid.set_raw(0, 0, "1");
        grid.set_raw(1, 1, "4");
        let svg = render_svg(&build_option(&grid, "t"), SURFACE);

        // Plot area: left 100, top 75, 800 × 325; cells 400 × 162.5.
        assert!(svg.contains("<rect x='100.00' y='75.00' width='400.00' height='162.50' fill='#ffffcc'>"));
        assert!(svg.contains("<rect x='500.00' y='237.50' width='400.00' height='162.50' fill='#a50026'>"));
        assert!(svg.contains("<title>Sıcaklık: 4.00</title>"));
        assert!(svg.contains("Ortalama: 2.50"));
    }

    #[test]
    fn legend_spans_palette() {
        let mut grid = Grid::empty(1, 2);
        grid.set_raw(0, 0, "-2");
        grid.set_raw(0, 1, "8");
        let svg = render_svg(&build_option(&grid, "t"), SURFACE);
        assert!(svg.contains("stop-color='rgb(255,255,204)'"));
        assert!(svg.contains("offset='100.0%' stop-color='rgb(165,0,38)'"));
        assert!(svg.contains(">-2.00</text>"));
        assert!(svg.contains(">8.00</text>"));
    }

    #[test]
    fn plot_area_scales_with_surface() {
        let area = PlotArea::for_surface(SURFACE);
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(area.left, 100.0));
        assert!(close(area.top, 75.0));
        assert!(close(area.width, 800.0));
        assert!(close(area.height, 325.0));
    }
}

//! Inline SVG charts. Geometry lives in `geometry` and is DOM-free.

pub mod axes;
pub mod bar_chart;
pub mod donut_chart;
pub mod geometry;
pub mod grouped_bar_chart;
pub mod line_chart;

pub use bar_chart::BarChart;
pub use donut_chart::DonutChart;
pub use grouped_bar_chart::{ChartSeries, GroupedBarChart};
pub use line_chart::LineChart;

/// Category colors, reused cyclically.
pub const PALETTE: [&str; 8] = [
    "#4e79a7", "#f28e2b", "#59a14f", "#e15759", "#76b7b2", "#edc948", "#b07aa1", "#9c755f",
];

pub const NEGATIVE_COLOR: &str = "#e15759";

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// SVG attribute value with one decimal.
pub(crate) fn coord(value: f64) -> String {
    format!("{:.1}", value)
}

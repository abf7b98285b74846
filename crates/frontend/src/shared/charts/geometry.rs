//! Pure chart geometry: value ranges, bar rectangles, line points and donut arcs.
//!
//! Coordinates are SVG user units (y grows downwards). Nothing here touches the DOM.

use std::f64::consts::PI;

/// Drawing surface with margins reserved for axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl PlotArea {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin_left: 72.0,
            margin_right: 16.0,
            margin_top: 16.0,
            margin_bottom: 32.0,
        }
    }

    pub fn left(&self) -> f64 {
        self.margin_left
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn top(&self) -> f64 {
        self.margin_top
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn inner_width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.bottom() - self.top()).max(0.0)
    }

    /// Vertical position of `value`.
    pub fn y_for(&self, value: f64, range: &ValueRange) -> f64 {
        self.top() + self.inner_height() * (1.0 - range.fraction(value))
    }

    /// Horizontal slot of category `index` out of `count`: `(x, width)`.
    pub fn band(&self, index: usize, count: usize) -> (f64, f64) {
        if count == 0 {
            return (self.left(), 0.0);
        }
        let width = self.inner_width() / count as f64;
        (self.left() + width * index as f64, width)
    }

    pub fn band_center(&self, index: usize, count: usize) -> f64 {
        let (x, width) = self.band(index, count);
        x + width / 2.0
    }
}

/// Closed value interval mapped onto the plot height. Always contains zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn including_zero<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if max - min <= f64::EPSILON {
            Self { min, max: min + 1.0 }
        } else {
            Self { min, max }
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// `count + 1` evenly spaced values from `min` to `max`.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.max(1);
        let step = self.span() / count as f64;
        (0..=count).map(|i| self.min + step * i as f64).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
    pub negative: bool,
}

/// Share of a band left empty between neighbouring bars.
const BAND_GAP: f64 = 0.2;

/// One bar per value, growing up (or down, for negatives) from the zero line.
pub fn bar_rects(values: &[f64], area: &PlotArea, range: &ValueRange) -> Vec<BarRect> {
    let count = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let (band_x, band_w) = area.band(i, count);
            let gap = band_w * BAND_GAP;
            bar_between(band_x + gap / 2.0, band_w - gap, value, area, range)
        })
        .collect()
}

/// Bars of several series side by side within each category band.
///
/// Returns one `Vec<BarRect>` per series. Series shorter than the longest one
/// simply have no bars in the trailing bands.
pub fn grouped_bar_rects(
    series: &[Vec<f64>],
    area: &PlotArea,
    range: &ValueRange,
) -> Vec<Vec<BarRect>> {
    let count = series.iter().map(Vec::len).max().unwrap_or(0);
    let groups = series.len().max(1) as f64;

    series
        .iter()
        .enumerate()
        .map(|(s, values)| {
            values
                .iter()
                .enumerate()
                .map(|(i, &value)| {
                    let (band_x, band_w) = area.band(i, count);
                    let gap = band_w * BAND_GAP;
                    let bar_w = (band_w - gap) / groups;
                    let x = band_x + gap / 2.0 + bar_w * s as f64;
                    bar_between(x, bar_w, value, area, range)
                })
                .collect()
        })
        .collect()
}

fn bar_between(x: f64, width: f64, value: f64, area: &PlotArea, range: &ValueRange) -> BarRect {
    let zero = area.y_for(0.0, range);
    let top = area.y_for(value, range);
    BarRect {
        x,
        y: top.min(zero),
        width: width.max(0.0),
        height: (top - zero).abs(),
        value,
        negative: value < 0.0,
    }
}

/// Points of a line chart, one per value, centred in its band.
pub fn line_points(values: &[f64], area: &PlotArea, range: &ValueRange) -> Vec<(f64, f64)> {
    let count = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| (area.band_center(i, count), area.y_for(value, range)))
        .collect()
}

/// SVG `points` attribute for a polyline.
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Show every n-th axis label so that at most `max_labels` are drawn.
pub fn label_step(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 || count <= max_labels {
        1
    } else {
        count.div_ceil(max_labels)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    /// Position of the value in the input slice
    pub index: usize,
    pub value: f64,
    pub fraction: f64,
    /// SVG path data for the ring segment
    pub path: String,
}

/// Ring segments for every positive value, clockwise from 12 o'clock.
///
/// Non-positive values get no segment. A single segment covering the whole
/// ring is drawn as two half-rings, since one SVG arc cannot close a circle;
/// render it with `fill-rule="evenodd"`.
pub fn donut_slices(values: &[f64], cx: f64, cy: f64, outer: f64, inner: f64) -> Vec<DonutSlice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    let mut slices = Vec::new();
    for (index, &value) in values.iter().enumerate() {
        if value <= 0.0 {
            continue;
        }
        let fraction = value / total;
        let end = start + fraction * 2.0 * PI;
        let path = if fraction >= 0.9999 {
            full_ring_path(cx, cy, outer, inner)
        } else {
            ring_segment_path(cx, cy, outer, inner, start, end)
        };
        slices.push(DonutSlice {
            index,
            value,
            fraction,
            path,
        });
        start = end;
    }
    slices
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

fn ring_segment_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let large_arc = if end - start > PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, start);
    format!(
        "M {ox0:.2} {oy0:.2} A {outer:.2} {outer:.2} 0 {large_arc} 1 {ox1:.2} {oy1:.2} \
         L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 {large_arc} 0 {ix0:.2} {iy0:.2} Z"
    )
}

fn full_ring_path(cx: f64, cy: f64, outer: f64, inner: f64) -> String {
    let circle = |r: f64| {
        let top = cy - r;
        let bottom = cy + r;
        format!("M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bottom:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z")
    };
    format!("{} {}", circle(outer), circle(inner))
}

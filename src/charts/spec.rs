//! Chart Specification Module
//! Renderer-independent description of the chart a page shows.

use crate::charts::palette::ColorTheme;
use crate::stats::{BucketEntry, HistogramBin, StateCount};
use egui::Color32;

/// A company plotted on the location map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub name: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
    pub revenue: f64,
    pub profit: f64,
}

/// A named (x, y) point.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterMapSpec {
    pub title: String,
    pub points: Vec<MapPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChoroplethSpec {
    pub title: String,
    pub value_label: String,
    pub counts: Vec<StateCount>,
    pub theme: ColorTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<LabeledPoint>,
    /// Single marker color; the plot default when `None`.
    pub color: Option<Color32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bins: Vec<HistogramBin>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub title: String,
    pub legend_title: String,
    pub slices: Vec<BucketEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<BucketEntry>,
    pub color: Color32,
}

/// Everything a renderer needs to draw one page.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    ScatterMap(ScatterMapSpec),
    Choropleth(ChoroplethSpec),
    Scatter(ScatterSpec),
    Histogram(HistogramSpec),
    /// Two pies shown side by side.
    PiePair(PieSpec, PieSpec),
    Bar(BarSpec),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::ScatterMap(s) => &s.title,
            ChartSpec::Choropleth(s) => &s.title,
            ChartSpec::Scatter(s) => &s.title,
            ChartSpec::Histogram(s) => &s.title,
            ChartSpec::PiePair(left, _) => &left.title,
            ChartSpec::Bar(s) => &s.title,
        }
    }

    /// True when there is nothing to plot (e.g. a filter matched no rows).
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::ScatterMap(s) => s.points.is_empty(),
            ChartSpec::Choropleth(s) => s.counts.is_empty(),
            ChartSpec::Scatter(s) => s.points.is_empty(),
            ChartSpec::Histogram(s) => s.bins.is_empty(),
            ChartSpec::PiePair(left, right) => left
                .slices
                .iter()
                .chain(&right.slices)
                .all(|slice| slice.value == 0.0),
            ChartSpec::Bar(s) => s.bars.is_empty(),
        }
    }
}

//! Charts module - chart specifications, palettes and egui_plot rendering

pub mod palette;
mod plotter;
mod spec;
mod tile_map;

pub use palette::ColorTheme;
pub use plotter::ChartPlotter;
pub use spec::{
    BarSpec, ChartSpec, ChoroplethSpec, HistogramSpec, LabeledPoint, MapPoint, PieSpec,
    ScatterMapSpec, ScatterSpec,
};
pub use tile_map::{tile_for, STATE_TILES};

//! Chart Plotter Module
//! Draws a `ChartSpec` with egui_plot.

use crate::charts::palette::category_color;
use crate::charts::spec::{
    BarSpec, ChartSpec, ChoroplethSpec, HistogramSpec, LabeledPoint, MapPoint, PieSpec,
    ScatterMapSpec, ScatterSpec,
};
use crate::charts::tile_map::{tile_for, STATE_TILES};
use egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};
use std::collections::BTreeMap;
use std::f64::consts::TAU;

const PLOT_HEIGHT: f32 = 480.0;
const PIE_HEIGHT: f32 = 380.0;
const MARKER_RADIUS: f32 = 3.5;
const NO_DATA_TILE: Color32 = Color32::from_rgb(225, 225, 225);
/// Segments used to approximate a full pie circle.
const PIE_SEGMENTS: usize = 180;

/// Stateless drawing functions, one per chart kind.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw any chart spec.
    pub fn draw(ui: &mut egui::Ui, spec: &ChartSpec) {
        match spec {
            ChartSpec::ScatterMap(map) => Self::draw_scatter_map(ui, map),
            ChartSpec::Choropleth(map) => Self::draw_choropleth(ui, map),
            ChartSpec::Scatter(scatter) => Self::draw_scatter(ui, scatter),
            ChartSpec::Histogram(hist) => Self::draw_histogram(ui, hist),
            ChartSpec::PiePair(left, right) => {
                ui.columns(2, |cols| {
                    Self::draw_pie(&mut cols[0], left);
                    Self::draw_pie(&mut cols[1], right);
                });
            }
            ChartSpec::Bar(bar) => Self::draw_bar(ui, bar),
        }

        if spec.is_empty() {
            ui.label(
                RichText::new("No companies match the current selection")
                    .italics()
                    .color(Color32::GRAY),
            );
        }
    }

    /// Headquarters markers on longitude/latitude axes, one series per state.
    pub fn draw_scatter_map(ui: &mut egui::Ui, spec: &ScatterMapSpec) {
        let mut by_state: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
        for p in &spec.points {
            by_state
                .entry(p.state.as_str())
                .or_default()
                .push([p.longitude, p.latitude]);
        }

        let lookup = spec.points.clone();

        Plot::new("company_locations")
            .height(PLOT_HEIGHT)
            .data_aspect(1.0)
            .legend(Legend::default())
            .x_axis_label("Longitude")
            .y_axis_label("Latitude")
            .allow_scroll(false)
            .label_formatter(move |name, value| Self::map_hover(&lookup, name, value))
            .show(ui, |plot_ui| {
                for (i, (state, coords)) in by_state.into_iter().enumerate() {
                    plot_ui.points(
                        Points::new(PlotPoints::from(coords))
                            .radius(MARKER_RADIUS)
                            .color(category_color(i))
                            .name(state),
                    );
                }
            });
    }

    fn map_hover(points: &[MapPoint], series: &str, value: &PlotPoint) -> String {
        points
            .iter()
            .find(|p| p.longitude == value.x && p.latitude == value.y)
            .map(|p| {
                format!(
                    "{}\nState: {}\nRevenue: {:.1}\nProfit: {:.1}",
                    p.name, p.state, p.revenue, p.profit
                )
            })
            .unwrap_or_else(|| {
                if series.is_empty() {
                    String::new()
                } else {
                    series.to_string()
                }
            })
    }

    /// US tile-grid map shaded by value.
    pub fn draw_choropleth(ui: &mut egui::Ui, spec: &ChoroplethSpec) {
        let counts: BTreeMap<&str, usize> = spec
            .counts
            .iter()
            .map(|c| (c.state.as_str(), c.count))
            .collect();
        let min = counts.values().copied().min().unwrap_or(0) as f64;
        let max = counts.values().copied().max().unwrap_or(0) as f64;
        let scale = |v: f64| if max > min { (v - min) / (max - min) } else { 1.0 };

        ui.label(RichText::new(&spec.title).size(16.0).strong());

        Plot::new("state_choropleth")
            .height(PLOT_HEIGHT)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show_x(false)
            .show_y(false)
            .show(ui, |plot_ui| {
                for (code, col, row) in STATE_TILES {
                    let count = counts.get(code).copied();
                    let fill = match count {
                        Some(n) => spec.theme.sample(scale(n as f64)),
                        None => NO_DATA_TILE,
                    };

                    let (x, y) = (col as f64, -(row as f64));
                    let square = vec![
                        [x - 0.45, y - 0.45],
                        [x + 0.45, y - 0.45],
                        [x + 0.45, y + 0.45],
                        [x - 0.45, y + 0.45],
                    ];
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(square))
                            .fill_color(fill)
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );

                    let label = match count {
                        Some(n) => format!("{}\n{}", code, n),
                        None => code.to_string(),
                    };
                    plot_ui.text(
                        Text::new(PlotPoint::new(x, y), RichText::new(label).size(11.0))
                            .color(Self::contrast_text(fill))
                            .anchor(Align2::CENTER_CENTER),
                    );
                }
            });

        // Color bar
        ui.horizontal(|ui| {
            ui.label(format!("{}: {:.0}", spec.value_label, min));
            for step in 0..=10 {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(18.0, 12.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 0.0, spec.theme.sample(step as f64 / 10.0));
            }
            ui.label(format!("{:.0}", max));
        });

        let off_map: Vec<&str> = counts
            .keys()
            .copied()
            .filter(|code| tile_for(code).is_none())
            .collect();
        if !off_map.is_empty() {
            ui.label(
                RichText::new(format!("Not on map: {}", off_map.join(", ")))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }
    }

    /// Black or white, whichever reads better on `fill`.
    fn contrast_text(fill: Color32) -> Color32 {
        let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
        if luma > 140.0 {
            Color32::BLACK
        } else {
            Color32::WHITE
        }
    }

    /// Scatter plot with the point label on hover.
    pub fn draw_scatter(ui: &mut egui::Ui, spec: &ScatterSpec) {
        ui.label(RichText::new(&spec.title).size(16.0).strong());

        let coords: Vec<[f64; 2]> = spec.points.iter().map(|p| [p.x, p.y]).collect();
        let lookup = spec.points.clone();
        let (x_label, y_label) = (spec.x_label.clone(), spec.y_label.clone());

        Plot::new(format!("scatter_{}", spec.title))
            .height(PLOT_HEIGHT)
            .x_axis_label(spec.x_label.as_str())
            .y_axis_label(spec.y_label.as_str())
            .allow_scroll(false)
            .label_formatter(move |_name, value| {
                Self::point_hover(&lookup, &x_label, &y_label, value)
            })
            .show(ui, |plot_ui| {
                let mut points = Points::new(PlotPoints::from(coords)).radius(MARKER_RADIUS);
                if let Some(color) = spec.color {
                    points = points.color(color);
                }
                plot_ui.points(points);
            });
    }

    fn point_hover(points: &[LabeledPoint], x_label: &str, y_label: &str, value: &PlotPoint) -> String {
        match points.iter().find(|p| p.x == value.x && p.y == value.y) {
            Some(p) => format!("{}\n{}: {:.1}\n{}: {:.1}", p.label, x_label, p.x, y_label, p.y),
            None => format!("{}: {:.1}\n{}: {:.1}", x_label, value.x, y_label, value.y),
        }
    }

    /// Histogram bars; each bar's height is the summed weight of its bin.
    pub fn draw_histogram(ui: &mut egui::Ui, spec: &HistogramSpec) {
        ui.label(RichText::new(&spec.title).size(16.0).strong());

        let bars: Vec<Bar> = spec
            .bins
            .iter()
            .map(|bin| {
                Bar::new(bin.center(), bin.weight)
                    .width(bin.width())
                    .name(format!(
                        "{:.0} - {:.0} employees ({} companies)",
                        bin.start, bin.end, bin.count
                    ))
            })
            .collect();

        Plot::new("employee_histogram")
            .height(PLOT_HEIGHT)
            .x_axis_label(spec.x_label.as_str())
            .y_axis_label(spec.y_label.as_str())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(category_color(0))
                        .name("Revenue"),
                );
            });
    }

    /// Pie built from polygon wedges with percentage labels.
    pub fn draw_pie(ui: &mut egui::Ui, spec: &PieSpec) {
        ui.label(RichText::new(&spec.title).size(15.0).strong());

        let total: f64 = spec.slices.iter().map(|s| s.value).sum();

        Plot::new(format!("pie_{}", spec.title))
            .height(PIE_HEIGHT)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show_x(false)
            .show_y(false)
            .include_x(-1.1)
            .include_x(1.1)
            .include_y(-1.1)
            .include_y(1.1)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                if total <= 0.0 {
                    return;
                }

                let mut start = 0.0;
                for (i, slice) in spec.slices.iter().enumerate() {
                    if slice.value <= 0.0 {
                        continue;
                    }
                    let fraction = slice.value / total;
                    let end = start + fraction * TAU;

                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(Self::wedge(start, end)))
                            .fill_color(category_color(i))
                            .stroke(Stroke::new(1.0, Color32::WHITE))
                            .name(&slice.label),
                    );

                    let mid = (start + end) / 2.0;
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(0.6 * mid.cos(), 0.6 * mid.sin()),
                            RichText::new(format!("{:.1}%", fraction * 100.0)).size(11.0),
                        )
                        .color(Color32::WHITE)
                        .anchor(Align2::CENTER_CENTER),
                    );

                    start = end;
                }
            });

        ui.label(RichText::new(&spec.legend_title).size(11.0).color(Color32::GRAY));
    }

    /// Closed wedge outline from the origin, angles in radians.
    fn wedge(start: f64, end: f64) -> Vec<[f64; 2]> {
        let steps = (((end - start) / TAU) * PIE_SEGMENTS as f64).ceil().max(1.0) as usize;
        let mut outline = Vec::with_capacity(steps + 2);
        outline.push([0.0, 0.0]);
        for i in 0..=steps {
            let angle = start + (end - start) * i as f64 / steps as f64;
            outline.push([angle.cos(), angle.sin()]);
        }
        outline
    }

    /// Bar chart with category labels on the x axis.
    pub fn draw_bar(ui: &mut egui::Ui, spec: &BarSpec) {
        ui.label(RichText::new(&spec.title).size(16.0).strong());

        let labels: Vec<String> = spec.bars.iter().map(|b| b.label.clone()).collect();
        let bars: Vec<Bar> = spec
            .bars
            .iter()
            .enumerate()
            .map(|(i, b)| Bar::new(i as f64, b.value).width(0.7).name(&b.label))
            .collect();

        Plot::new(format!("bar_{}", spec.title))
            .height(PLOT_HEIGHT)
            .x_axis_label(spec.x_label.as_str())
            .y_axis_label(spec.y_label.as_str())
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < labels.len() {
                    labels[idx as usize].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(spec.color).name(&spec.y_label));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedge_starts_at_origin_and_follows_the_arc() {
        let outline = ChartPlotter::wedge(0.0, TAU / 4.0);
        assert_eq!(outline[0], [0.0, 0.0]);
        assert_eq!(outline[1], [1.0, 0.0]);
        let last = outline[outline.len() - 1];
        assert!(last[0].abs() < 1e-9 && (last[1] - 1.0).abs() < 1e-9);
        assert_eq!(outline.len(), 45 + 2);
    }

    #[test]
    fn contrast_text_picks_readable_color() {
        assert_eq!(ChartPlotter::contrast_text(Color32::WHITE), Color32::BLACK);
        assert_eq!(ChartPlotter::contrast_text(Color32::from_rgb(13, 8, 135)), Color32::WHITE);
    }

    #[test]
    fn hover_names_the_company_under_the_cursor() {
        let points = vec![LabeledPoint {
            label: "Acme".into(),
            x: 10.0,
            y: 2.0,
        }];
        let text = ChartPlotter::point_hover(&points, "Revenue", "Profit", &PlotPoint::new(10.0, 2.0));
        assert!(text.starts_with("Acme\n"));

        let miss = ChartPlotter::point_hover(&points, "Revenue", "Profit", &PlotPoint::new(3.0, 2.0));
        assert_eq!(miss, "Revenue: 3.0\nProfit: 2.0");
    }
}

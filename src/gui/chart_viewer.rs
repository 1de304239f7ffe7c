//! Chart Viewer Widget
//! Central area: title, dataset summary strip and the active chart.

use crate::charts::{ChartPlotter, ChartSpec};
use crate::stats::DatasetSummary;
use egui::{Color32, RichText, ScrollArea};

/// Chart viewer for the selected page.
#[derive(Default)]
pub struct ChartViewer {
    pub spec: Option<ChartSpec>,
    pub summary: Option<DatasetSummary>,
    /// Load failure shown in place of any chart.
    pub error: Option<String>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_spec(&mut self, spec: ChartSpec) {
        self.spec = Some(spec);
    }

    pub fn set_summary(&mut self, summary: DatasetSummary) {
        self.summary = Some(summary);
    }

    pub fn set_error(&mut self, message: String) {
        self.spec = None;
        self.error = Some(message);
    }

    /// Draw the chart viewer
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Fortune 500 Companies Analysis").size(24.0).strong());
        });
        ui.add_space(8.0);

        if let Some(message) = &self.error {
            egui::Frame::none()
                .rounding(8.0)
                .stroke(egui::Stroke::new(2.0, Color32::from_rgb(220, 53, 69)))
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("⚠ {}", message))
                            .size(15.0)
                            .color(Color32::from_rgb(220, 53, 69)),
                    );
                });
            return;
        }

        if let Some(summary) = &self.summary {
            Self::draw_summary(ui, summary);
            ui.add_space(8.0);
            ui.separator();
        }

        let Some(spec) = &self.spec else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(RichText::new(spec.title()).size(18.0).strong());
                ui.add_space(6.0);
                ChartPlotter::draw(ui, spec);
            });
    }

    fn draw_summary(ui: &mut egui::Ui, summary: &DatasetSummary) {
        let cells = [
            ("Companies", summary.company_count.to_string()),
            ("States", summary.state_count.to_string()),
            (
                "Total Revenue",
                DatasetSummary::format_millions(summary.total_revenue),
            ),
            (
                "Median Revenue",
                DatasetSummary::format_millions(summary.median_revenue),
            ),
            (
                "Total Profit",
                DatasetSummary::format_millions(summary.total_profit),
            ),
            (
                "Median Profit",
                DatasetSummary::format_millions(summary.median_profit),
            ),
        ];

        ui.horizontal_wrapped(|ui| {
            for (label, value) in cells {
                egui::Frame::none()
                    .rounding(6.0)
                    .fill(ui.visuals().widgets.noninteractive.bg_fill)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(label).size(11.0).color(Color32::GRAY));
                            ui.label(RichText::new(value).size(15.0).strong());
                        });
                    });
                ui.add_space(6.0);
            }
        });
    }
}

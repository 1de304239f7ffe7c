//! HQ Insight Main Application
//! Main window with control panel and chart viewer.

use crate::config::AppConfig;
use crate::dashboard::{dispatch, Selection, UiState};
use crate::data::{CompanyTable, DataError};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::stats::DatasetSummary;
use egui::SidePanel;
use log::debug;

/// Main application window.
pub struct HqInsightApp {
    table: CompanyTable,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    /// Selection the current chart was built from.
    rendered: Option<Selection>,
    loaded: bool,
}

impl HqInsightApp {
    /// `data` is the outcome of the startup load; a failure is shown in the
    /// window instead of any chart.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        data: Result<CompanyTable, DataError>,
        config: &AppConfig,
    ) -> Self {
        let ui_state = UiState {
            range: config.default_range,
            top_n: config.default_top_n,
            ..UiState::default()
        };
        let mut control_panel = ControlPanel::new(ui_state);
        let mut chart_viewer = ChartViewer::new();

        let (table, loaded) = match data {
            Ok(table) => {
                control_panel.set_options(table.states(), table.names());
                control_panel.set_status(&format!("{} companies loaded", table.len()));
                chart_viewer.set_summary(DatasetSummary::compute(&table));
                (table, true)
            }
            Err(e) => {
                control_panel.set_status("Error: data not loaded");
                chart_viewer.set_error(e.to_string());
                (CompanyTable::default(), false)
            }
        };

        let mut app = Self {
            table,
            control_panel,
            chart_viewer,
            rendered: None,
            loaded,
        };
        app.refresh();
        app
    }

    /// Rebuild the chart if the selection differs from the one on screen.
    fn refresh(&mut self) {
        if !self.loaded {
            return;
        }

        let selection = self.control_panel.state.selection();
        if self.rendered.as_ref() == Some(&selection) {
            return;
        }

        let spec = dispatch(&self.table, &selection);
        debug!("Rendered {:?}: {}", selection.page(), spec.title());
        self.chart_viewer.set_spec(spec);
        self.rendered = Some(selection);
    }
}

impl eframe::App for HqInsightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::PageChanged(page) => {
                            debug!("Page changed to {}", page.title());
                            self.refresh();
                        }
                        ControlPanelAction::SelectionChanged => self.refresh(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

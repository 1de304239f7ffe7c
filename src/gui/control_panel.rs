//! Control Panel Widget
//! Left sidebar: page navigation plus the widgets of the active page.

use crate::charts::ColorTheme;
use crate::dashboard::{Page, RangeOption, UiState, TOP_N_RANGE};
use crate::data::Metric;
use egui::{Color32, ComboBox, RichText, ScrollArea};

/// Left side control panel.
pub struct ControlPanel {
    pub state: UiState,
    /// Options for the state filter.
    pub states: Vec<String>,
    /// Options for the company filter.
    pub companies: Vec<String>,
    company_search: String,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            state: UiState::default(),
            states: Vec::new(),
            companies: Vec::new(),
            company_search: String::new(),
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new(state: UiState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Set filter options from the loaded table.
    pub fn set_options(&mut self, states: Vec<String>, companies: Vec<String>) {
        self.states = states;
        self.companies = companies;
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let before = self.state.clone();

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏢 HQ Insight")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(RichText::new("Navigation").size(11.0).color(Color32::GRAY));
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Page Section =====
        ui.label(RichText::new("Select a Visualization").size(14.0).strong());
        ui.add_space(5.0);
        for page in Page::ALL {
            ui.radio_value(&mut self.state.page, page, page.title());
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Page Options =====
        match self.state.page {
            Page::Locations => self.show_map_options(ui),
            Page::RevenueVsProfit => self.show_filter_options(ui),
            Page::EmployeeVsRevenue => self.show_range_options(ui),
            Page::RevenueCountByState => {
                ui.label(RichText::new("Number of States").size(14.0).strong());
                ui.add(egui::Slider::new(&mut self.state.top_n, TOP_N_RANGE).text("states"));
            }
            Page::RankVsProfit => {
                ui.label(RichText::new("No options for this page").color(Color32::GRAY));
            }
            Page::TopTen => {
                ui.label(RichText::new("Metric").size(14.0).strong());
                for metric in Metric::FINANCIAL {
                    ui.radio_value(&mut self.state.metric, metric, metric.label());
                }
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        let status_color = if self.status.contains("Error") || self.status.contains("not found") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        if self.state.page != before.page {
            ControlPanelAction::PageChanged(self.state.page)
        } else if self.state != before {
            ControlPanelAction::SelectionChanged
        } else {
            ControlPanelAction::None
        }
    }

    fn show_map_options(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Select Type of Map").size(14.0).strong());
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.state.choropleth, false, "Normal");
            ui.radio_value(&mut self.state.choropleth, true, "Heat");
        });

        if self.state.choropleth {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Choose a Color Theme:");
                ComboBox::from_id_salt("color_theme")
                    .selected_text(self.state.theme.name())
                    .show_ui(ui, |ui| {
                        for theme in ColorTheme::ALL {
                            ui.selectable_value(&mut self.state.theme, theme, theme.name());
                        }
                    });
            });
        }
    }

    fn show_filter_options(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Filter by State:");
            ComboBox::from_id_salt("state_filter")
                .selected_text(self.state.state_filter.as_deref().unwrap_or("All"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.state.state_filter, None, "All");
                    for state in &self.states {
                        ui.selectable_value(
                            &mut self.state.state_filter,
                            Some(state.clone()),
                            state.as_str(),
                        );
                    }
                });
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Filter by Company:");
            if ui.small_button("Clear").clicked() {
                self.state.company_filter.clear();
            }
        });
        ui.text_edit_singleline(&mut self.company_search);

        let needle = self.company_search.to_lowercase();
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(5.0)
            .show(ui, |ui| {
                ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                    for name in &self.companies {
                        if !needle.is_empty() && !name.to_lowercase().contains(&needle) {
                            continue;
                        }
                        let mut checked = self.state.company_filter.contains(name);
                        if ui.checkbox(&mut checked, name.as_str()).changed() {
                            if checked {
                                self.state.company_filter.push(name.clone());
                            } else {
                                self.state.company_filter.retain(|n| n != name);
                            }
                        }
                    }
                });
            });

        if !self.state.company_filter.is_empty() {
            ui.label(
                RichText::new(format!("{} selected", self.state.company_filter.len()))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }
    }

    fn show_range_options(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Change Employee Range").size(14.0).strong());

        let mut idx = RangeOption::ALL
            .iter()
            .position(|r| *r == self.state.range)
            .unwrap_or(1);
        let last = RangeOption::ALL.len() - 1;
        ui.add(
            egui::Slider::new(&mut idx, 0..=last)
                .step_by(1.0)
                .custom_formatter(move |v, _| RangeOption::ALL[(v as usize).min(last)].label().to_string()),
        );
        self.state.range = RangeOption::ALL[idx.min(last)];
        ui.label(
            RichText::new(format!("{} bins", self.state.range.bins()))
                .size(11.0)
                .color(Color32::GRAY),
        );
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    PageChanged(Page),
    SelectionChanged,
}

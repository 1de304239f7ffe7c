//! Page Selection Module
//! The closed set of pages, their sub-selections, and the widget state that
//! produces them.

use crate::charts::ColorTheme;
use crate::data::Metric;
use serde::Deserialize;

/// Top-N choices offered on the "Revenue and Count by State" page.
pub const TOP_N_RANGE: std::ops::RangeInclusive<usize> = 1..=10;
pub const DEFAULT_TOP_N: usize = 5;

/// Sidebar pages, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Locations,
    RevenueVsProfit,
    EmployeeVsRevenue,
    RevenueCountByState,
    RankVsProfit,
    TopTen,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Locations,
        Page::RevenueVsProfit,
        Page::EmployeeVsRevenue,
        Page::RevenueCountByState,
        Page::RankVsProfit,
        Page::TopTen,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Locations => "Company Locations Map",
            Page::RevenueVsProfit => "Revenue vs Profit Analysis",
            Page::EmployeeVsRevenue => "Employee vs Revenue Histogram",
            Page::RevenueCountByState => "Revenue and Count by State",
            Page::RankVsProfit => "Rank vs Profit",
            Page::TopTen => "Top 10 Revenues, Expenses, and Profits",
        }
    }
}

/// Kind of map on the Locations page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    /// One marker per headquarters.
    Points,
    /// States shaded by company count.
    Choropleth(ColorTheme),
}

/// Qualitative histogram resolution, mapped to a fixed bin count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum RangeOption {
    Broad,
    #[default]
    Medium,
    Detailed,
    Narrow,
}

impl RangeOption {
    pub const ALL: [RangeOption; 4] = [
        RangeOption::Broad,
        RangeOption::Medium,
        RangeOption::Detailed,
        RangeOption::Narrow,
    ];

    pub fn bins(&self) -> usize {
        match self {
            RangeOption::Broad => 25,
            RangeOption::Medium => 50,
            RangeOption::Detailed => 125,
            RangeOption::Narrow => 250,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RangeOption::Broad => "Broad",
            RangeOption::Medium => "Medium",
            RangeOption::Detailed => "Detailed",
            RangeOption::Narrow => "Narrow",
        }
    }
}

/// A page together with every sub-selection it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Locations(MapKind),
    RevenueVsProfit {
        state: Option<String>,
        companies: Vec<String>,
    },
    EmployeeVsRevenue(RangeOption),
    RevenueCountByState {
        top_n: usize,
    },
    RankVsProfit,
    TopTen(Metric),
}

impl Selection {
    pub fn page(&self) -> Page {
        match self {
            Selection::Locations(_) => Page::Locations,
            Selection::RevenueVsProfit { .. } => Page::RevenueVsProfit,
            Selection::EmployeeVsRevenue(_) => Page::EmployeeVsRevenue,
            Selection::RevenueCountByState { .. } => Page::RevenueCountByState,
            Selection::RankVsProfit => Page::RankVsProfit,
            Selection::TopTen(_) => Page::TopTen,
        }
    }
}

/// Current value of every sidebar widget. Values for pages that are not
/// shown are kept so switching back restores them.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub page: Page,
    pub choropleth: bool,
    pub theme: ColorTheme,
    pub state_filter: Option<String>,
    pub company_filter: Vec<String>,
    pub range: RangeOption,
    pub top_n: usize,
    pub metric: Metric,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            page: Page::default(),
            choropleth: false,
            theme: ColorTheme::default(),
            state_filter: None,
            company_filter: Vec::new(),
            range: RangeOption::default(),
            top_n: DEFAULT_TOP_N,
            metric: Metric::Profit,
        }
    }
}

impl UiState {
    /// The selection the dispatcher should render for the active page.
    pub fn selection(&self) -> Selection {
        match self.page {
            Page::Locations => Selection::Locations(if self.choropleth {
                MapKind::Choropleth(self.theme)
            } else {
                MapKind::Points
            }),
            Page::RevenueVsProfit => Selection::RevenueVsProfit {
                state: self.state_filter.clone(),
                companies: self.company_filter.clone(),
            },
            Page::EmployeeVsRevenue => Selection::EmployeeVsRevenue(self.range),
            Page::RevenueCountByState => Selection::RevenueCountByState {
                top_n: self
                    .top_n
                    .clamp(*TOP_N_RANGE.start(), *TOP_N_RANGE.end()),
            },
            Page::RankVsProfit => Selection::RankVsProfit,
            Page::TopTen => Selection::TopTen(self.metric),
        }
    }
}

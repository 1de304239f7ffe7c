//! Selection Dispatcher
//! Maps a page selection to one aggregation and the chart it renders.

use crate::charts::{
    palette, BarSpec, ChartSpec, ChoroplethSpec, HistogramSpec, LabeledPoint, MapPoint, PieSpec,
    ScatterMapSpec, ScatterSpec,
};
use crate::dashboard::page::{MapKind, Selection};
use crate::data::{CompanyTable, Metric};
use crate::stats::{Aggregator, BucketEntry, GroupKey, ValueKey, COMPANY_COUNT_LABEL};

/// Rows shown on the "Top 10" page.
pub const TOP_K: usize = 10;

const LEGEND_TITLE: &str = "State Key";

/// Build the chart for `selection`. Pure; empty inputs give empty charts.
pub fn dispatch(table: &CompanyTable, selection: &Selection) -> ChartSpec {
    match selection {
        Selection::Locations(MapKind::Points) => company_locations(table),
        Selection::Locations(MapKind::Choropleth(theme)) => ChartSpec::Choropleth(ChoroplethSpec {
            title: "Fortune 500 Companies by State".to_string(),
            value_label: COMPANY_COUNT_LABEL.to_string(),
            counts: Aggregator::count_by_state(table),
            theme: *theme,
        }),
        Selection::RevenueVsProfit { state, companies } => {
            revenue_vs_profit(table, state.as_deref(), companies)
        }
        Selection::EmployeeVsRevenue(range) => ChartSpec::Histogram(HistogramSpec {
            title: "Revenue Histogram by Employee Count".to_string(),
            x_label: "Employee Count".to_string(),
            y_label: "Sum of Revenues (Millions)".to_string(),
            bins: Aggregator::weighted_histogram(table, range.bins()),
        }),
        Selection::RevenueCountByState { top_n } => revenue_count_by_state(table, *top_n),
        Selection::RankVsProfit => ChartSpec::Scatter(ScatterSpec {
            title: "Rank vs Profit Scatterplot".to_string(),
            x_label: "Rank".to_string(),
            y_label: "Profit (Millions)".to_string(),
            points: table
                .iter()
                .map(|c| LabeledPoint {
                    label: c.name.clone(),
                    x: c.rank as f64,
                    y: c.profit,
                })
                .collect(),
            color: Some(palette::RED),
        }),
        Selection::TopTen(metric) => top_companies(table, *metric),
    }
}

fn company_locations(table: &CompanyTable) -> ChartSpec {
    ChartSpec::ScatterMap(ScatterMapSpec {
        title: "Company Locations Map".to_string(),
        points: table
            .iter()
            .map(|c| MapPoint {
                name: c.name.clone(),
                state: c.state.clone(),
                latitude: c.latitude,
                longitude: c.longitude,
                revenue: c.revenue,
                profit: c.profit,
            })
            .collect(),
    })
}

fn revenue_vs_profit(table: &CompanyTable, state: Option<&str>, companies: &[String]) -> ChartSpec {
    let rows = Aggregator::filter_companies(table, state, companies);

    ChartSpec::Scatter(ScatterSpec {
        title: format!(
            "Revenue vs Profit Analysis ({})",
            state.unwrap_or("All States")
        ),
        x_label: "Revenue (Millions)".to_string(),
        y_label: "Profit (Millions)".to_string(),
        points: rows
            .into_iter()
            .map(|c| LabeledPoint {
                label: c.name.clone(),
                x: c.revenue,
                y: c.profit,
            })
            .collect(),
        color: None,
    })
}

fn revenue_count_by_state(table: &CompanyTable, top_n: usize) -> ChartSpec {
    let revenue =
        Aggregator::top_n_with_other(table, GroupKey::State, ValueKey::Sum(Metric::Revenue), top_n);
    let count = Aggregator::top_n_with_other(table, GroupKey::State, ValueKey::Count, top_n);

    let pie = |title: &str, slices: Vec<BucketEntry>| PieSpec {
        title: title.to_string(),
        legend_title: LEGEND_TITLE.to_string(),
        slices,
    };

    ChartSpec::PiePair(
        pie("Revenue by Top States", revenue.entries().cloned().collect()),
        pie("Count by Top States", count.entries().cloned().collect()),
    )
}

fn top_companies(table: &CompanyTable, metric: Metric) -> ChartSpec {
    let bars = Aggregator::find_top_k(table, TOP_K, &[metric])
        .into_iter()
        .flat_map(|(_, rows)| rows)
        .map(|c| BucketEntry {
            label: c.name.clone(),
            value: c.metric(metric),
        })
        .collect();

    ChartSpec::Bar(BarSpec {
        title: format!("Top 10 Companies' {}", metric.label()),
        x_label: "Company".to_string(),
        y_label: format!("{} in Millions", metric.label()),
        bars,
        color: palette::metric_color(metric),
    })
}

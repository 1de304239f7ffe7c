//! Dataset Summary Module
//! Headline figures shown above every page.

use crate::data::CompanyTable;
use statrs::statistics::{Data, Median, Statistics};

/// Descriptive statistics for the whole table.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub company_count: usize,
    pub state_count: usize,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub mean_revenue: f64,
    pub median_revenue: f64,
    pub mean_profit: f64,
    pub median_profit: f64,
}

impl DatasetSummary {
    pub fn compute(table: &CompanyTable) -> Self {
        let revenues: Vec<f64> = table.iter().map(|c| c.revenue).collect();
        let profits: Vec<f64> = table.iter().map(|c| c.profit).collect();

        Self {
            company_count: table.len(),
            state_count: table.states().len(),
            total_revenue: revenues.iter().sum(),
            total_profit: profits.iter().sum(),
            mean_revenue: revenues.iter().mean(),
            median_revenue: Self::median(revenues),
            mean_profit: profits.iter().mean(),
            median_profit: Self::median(profits),
        }
    }

    fn median(values: Vec<f64>) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        Data::new(values).median()
    }

    /// Format a millions figure for display, `-` when undefined.
    pub fn format_millions(value: f64) -> String {
        if value.is_nan() {
            "-".to_string()
        } else {
            format!("${:.1}M", value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{company, table};

    #[test]
    fn summary_of_small_table() {
        let table = table(vec![
            company(1, "A", "CA", 10.0, 1.0),
            company(2, "B", "CA", 20.0, 4.0),
            company(3, "C", "NY", 60.0, -2.0),
        ]);
        let summary = DatasetSummary::compute(&table);

        assert_eq!(summary.company_count, 3);
        assert_eq!(summary.state_count, 2);
        assert_eq!(summary.total_revenue, 90.0);
        assert_eq!(summary.total_profit, 3.0);
        assert_eq!(summary.mean_revenue, 30.0);
        assert_eq!(summary.median_revenue, 20.0);
        assert_eq!(summary.median_profit, 1.0);
    }

    #[test]
    fn empty_table_has_undefined_averages() {
        let summary = DatasetSummary::compute(&CompanyTable::default());
        assert_eq!(summary.company_count, 0);
        assert!(summary.mean_revenue.is_nan());
        assert!(summary.median_profit.is_nan());
        assert_eq!(DatasetSummary::format_millions(summary.median_profit), "-");
    }

    #[test]
    fn millions_formatting() {
        assert_eq!(DatasetSummary::format_millions(1234.56), "$1234.6M");
    }
}

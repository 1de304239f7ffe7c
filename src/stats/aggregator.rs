//! Aggregation Module
//! Pure grouping, ranking and filtering functions over the company table.

use crate::data::{Company, CompanyTable, Metric};
use std::collections::{BTreeMap, HashMap};

/// Display label for per-state company counts.
pub const COMPANY_COUNT_LABEL: &str = "Company Count";

/// Label of the synthetic remainder bucket.
pub const OTHER_LABEL: &str = "Other";

/// Number of companies headquartered in a state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateCount {
    pub state: String,
    pub count: usize,
}

/// Column to group rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    State,
}

impl GroupKey {
    fn key<'a>(&self, company: &'a Company) -> &'a str {
        match self {
            GroupKey::State => &company.state,
        }
    }
}

/// How each group is reduced to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKey {
    Sum(Metric),
    Count,
}

impl ValueKey {
    fn value(&self, company: &Company) -> f64 {
        match self {
            ValueKey::Sum(metric) => company.metric(*metric),
            ValueKey::Count => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BucketEntry {
    pub label: String,
    pub value: f64,
}

/// The N largest groups plus one "Other" entry for everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct TopNBucket {
    pub top: Vec<BucketEntry>,
    /// Always present; zero when every group made the top.
    pub other: BucketEntry,
}

impl TopNBucket {
    /// Top entries followed by "Other".
    pub fn entries(&self) -> impl Iterator<Item = &BucketEntry> {
        self.top.iter().chain(std::iter::once(&self.other))
    }

    pub fn total(&self) -> f64 {
        self.entries().map(|e| e.value).sum()
    }
}

/// One equal-width employee-count bin.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
    /// Sum of revenue of the companies in this bin.
    pub weight: f64,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Stateless aggregations used by the dashboard pages.
pub struct Aggregator;

impl Aggregator {
    /// Company count per state, in state-code order.
    pub fn count_by_state(table: &CompanyTable) -> Vec<StateCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for company in table {
            *counts.entry(company.state.as_str()).or_default() += 1;
        }

        counts
            .into_iter()
            .map(|(state, count)| StateCount {
                state: state.to_string(),
                count,
            })
            .collect()
    }

    /// Reduce groups by `value`, keep the `n` largest and fold the rest into
    /// "Other". Equal values keep the order in which groups first appear.
    pub fn top_n_with_other(
        table: &CompanyTable,
        group: GroupKey,
        value: ValueKey,
        n: usize,
    ) -> TopNBucket {
        let mut groups: Vec<BucketEntry> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for company in table {
            let key = group.key(company);
            let pos = *positions.entry(key).or_insert_with(|| {
                groups.push(BucketEntry {
                    label: key.to_string(),
                    value: 0.0,
                });
                groups.len() - 1
            });
            groups[pos].value += value.value(company);
        }

        groups.sort_by(|a, b| b.value.total_cmp(&a.value));

        let rest = groups.split_off(n.min(groups.len()));
        let other = BucketEntry {
            label: OTHER_LABEL.to_string(),
            value: rest.iter().map(|e| e.value).sum(),
        };

        TopNBucket { top: groups, other }
    }

    /// For each metric, the `k` companies with the largest value, descending.
    /// Ties keep table order.
    pub fn find_top_k<'a>(
        table: &'a CompanyTable,
        k: usize,
        metrics: &[Metric],
    ) -> Vec<(Metric, Vec<&'a Company>)> {
        metrics
            .iter()
            .map(|&metric| {
                let mut ranked: Vec<&Company> = table.iter().collect();
                ranked.sort_by(|a, b| b.metric(metric).total_cmp(&a.metric(metric)));
                ranked.truncate(k);
                (metric, ranked)
            })
            .collect()
    }

    /// Rows matching the state (if set) AND the company set (if non-empty).
    pub fn filter_companies<'a>(
        table: &'a CompanyTable,
        state: Option<&str>,
        companies: &[String],
    ) -> Vec<&'a Company> {
        table
            .iter()
            .filter(|c| state.map_or(true, |s| c.state == s))
            .filter(|c| companies.is_empty() || companies.iter().any(|name| *name == c.name))
            .collect()
    }

    /// Equal-width bins over employee count, weighted by revenue.
    pub fn weighted_histogram(table: &CompanyTable, bins: usize) -> Vec<HistogramBin> {
        if table.is_empty() {
            return Vec::new();
        }

        let (min, max) = table
            .iter()
            .map(|c| c.employees as f64)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        let (bins, width) = if max > min {
            let bins = bins.max(1);
            (bins, (max - min) / bins as f64)
        } else {
            (1, 1.0)
        };

        let mut result: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                start: min + i as f64 * width,
                end: min + (i + 1) as f64 * width,
                count: 0,
                weight: 0.0,
            })
            .collect();

        for company in table {
            let offset = (company.employees as f64 - min) / width;
            let idx = (offset.floor() as usize).min(bins - 1);
            result[idx].count += 1;
            result[idx].weight += company.revenue;
        }

        result
    }
}

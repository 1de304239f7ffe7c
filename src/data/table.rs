//! Company Table Module
//! Typed, immutable view of the cleaned headquarters dataset.

use std::collections::HashMap;

/// One Fortune 500 headquarters record.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub fid: i64,
    pub name: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
    pub revenue: f64,
    pub profit: f64,
    /// Always `revenue - profit`.
    pub expenses: f64,
    pub employees: i64,
    pub rank: i64,
}

impl Company {
    /// Value of a numeric metric for this company.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.revenue,
            Metric::Expenses => self.expenses,
            Metric::Profit => self.profit,
            Metric::Employees => self.employees as f64,
        }
    }
}

/// Numeric columns that charts and aggregators can rank or sum by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Revenue,
    Expenses,
    Profit,
    Employees,
}

impl Metric {
    /// Metrics offered on the "Top 10" page.
    pub const FINANCIAL: [Metric; 3] = [Metric::Revenue, Metric::Expenses, Metric::Profit];

    /// Source column name in the cleaned dataset.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Revenue => "REVENUES",
            Metric::Expenses => "EXPENSES",
            Metric::Profit => "PROFIT",
            Metric::Employees => "EMPLOYEES",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Revenue => "Revenues",
            Metric::Expenses => "Expenses",
            Metric::Profit => "Profit",
            Metric::Employees => "Employees",
        }
    }
}

/// Cleaned dataset, indexed by `FID`.
///
/// Built once by [`crate::data::DataCleaner`] and shared by reference. Row
/// order follows the input file.
#[derive(Debug, Clone, Default)]
pub struct CompanyTable {
    companies: Vec<Company>,
    index: HashMap<i64, usize>,
}

impl CompanyTable {
    /// Build a table, returning the first duplicated `fid` on conflict.
    pub fn from_companies(companies: Vec<Company>) -> Result<Self, i64> {
        let mut index = HashMap::with_capacity(companies.len());
        for (row, company) in companies.iter().enumerate() {
            if index.insert(company.fid, row).is_some() {
                return Err(company.fid);
            }
        }
        Ok(Self { companies, index })
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Company> {
        self.companies.iter()
    }

    /// Look up a company by its stable identifier.
    pub fn get(&self, fid: i64) -> Option<&Company> {
        self.index.get(&fid).map(|&row| &self.companies[row])
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Distinct state codes, sorted.
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self.companies.iter().map(|c| c.state.clone()).collect();
        states.sort();
        states.dedup();
        states
    }

    /// Distinct company names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.companies.iter().map(|c| c.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}

impl<'a> IntoIterator for &'a CompanyTable {
    type Item = &'a Company;
    type IntoIter = std::slice::Iter<'a, Company>;

    fn into_iter(self) -> Self::IntoIter {
        self.companies.iter()
    }
}

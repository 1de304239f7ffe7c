//! Data Cleaner Module
//! Drops unused columns, validates numeric fields, title-cases names and
//! derives EXPENSES, producing a typed `CompanyTable`.

use crate::data::loader::DataLoader;
use crate::data::table::{Company, CompanyTable, Metric};
use log::{debug, info};
use polars::prelude::*;
use thiserror::Error;

/// Geometry, address and admin metadata no chart uses.
pub const DROPPED_COLUMNS: [&str; 13] = [
    "X",
    "Y",
    "OBJECTID",
    "ADDRESS",
    "ADDRESS2",
    "CITY",
    "ZIP",
    "COUNTY",
    "SOURCE",
    "PRC",
    "COUNTYFIPS",
    "COMMENTS",
    "WEBSITE",
];

/// Columns every record must carry.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "FID",
    "NAME",
    "STATE",
    "LATITUDE",
    "LONGITUDE",
    "REVENUES",
    "PROFIT",
    "EMPLOYEES",
    "RANK",
];

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Missing required column {0}")]
    MissingColumn(String),
    #[error("Malformed value {value:?} in column {column} at row {row}")]
    MalformedRow {
        row: usize,
        column: String,
        value: String,
    },
    #[error("Duplicate FID {0}")]
    DuplicateId(i64),
}

/// Python `str.title()` casing: the first letter of every alphabetic run is
/// upper-cased, the rest lower-cased.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                // Multi-char uppercase forms (e.g. ß) keep only the first char upper.
                let mut upper = c.to_uppercase();
                if let Some(first) = upper.next() {
                    out.push(first);
                }
                for rest in upper {
                    out.extend(rest.to_lowercase());
                }
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Handles the one-shot cleaning of the raw frame.
pub struct DataCleaner;

impl DataCleaner {
    /// Clean a raw frame into a typed table. The input frame is not modified.
    pub fn clean(raw: &DataFrame) -> Result<CompanyTable, CleanError> {
        let df = Self::drop_unused(raw)?;

        for name in REQUIRED_COLUMNS {
            if df.column(name).is_err() {
                return Err(CleanError::MissingColumn(name.to_string()));
            }
        }

        let fids = Self::int_values(&df, "FID")?;
        let names = Self::string_values(&df, "NAME")?;
        let states = Self::string_values(&df, "STATE")?;
        let latitudes = Self::float_values(&df, "LATITUDE")?;
        let longitudes = Self::float_values(&df, "LONGITUDE")?;
        let revenues = Self::float_values(&df, Metric::Revenue.column())?;
        let profits = Self::float_values(&df, Metric::Profit.column())?;
        let employees = Self::int_values(&df, Metric::Employees.column())?;
        let ranks = Self::int_values(&df, "RANK")?;

        let companies: Vec<Company> = (0..df.height())
            .map(|i| Company {
                fid: fids[i],
                name: title_case(&names[i]),
                state: states[i].trim().to_string(),
                latitude: latitudes[i],
                longitude: longitudes[i],
                revenue: revenues[i],
                profit: profits[i],
                expenses: revenues[i] - profits[i],
                employees: employees[i],
                rank: ranks[i],
            })
            .collect();

        let table = CompanyTable::from_companies(companies).map_err(CleanError::DuplicateId)?;
        info!("Cleaned {} company records", table.len());
        Ok(table)
    }

    /// Drop the fixed set of unused columns, tolerating absent ones.
    pub fn drop_unused(df: &DataFrame) -> Result<DataFrame, CleanError> {
        let (dropped, kept): (Vec<String>, Vec<String>) = DataLoader::column_names(df)
            .into_iter()
            .partition(|name| DROPPED_COLUMNS.contains(&name.as_str()));

        if !dropped.is_empty() {
            debug!("Dropping unused columns: {}", dropped.join(", "));
        }

        Ok(df.select(kept)?)
    }

    fn malformed(df: &DataFrame, column: &str, row: usize) -> CleanError {
        let value = df
            .column(column)
            .ok()
            .and_then(|col| col.get(row).ok())
            .map(|v| {
                if v.is_null() {
                    String::new()
                } else {
                    v.to_string().trim_matches('"').to_string()
                }
            })
            .unwrap_or_default();

        CleanError::MalformedRow {
            row,
            column: column.to_string(),
            value,
        }
    }

    fn float_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, CleanError> {
        let values = df.column(column)?.cast(&DataType::Float64)?;
        let ca = values.f64()?;

        ca.into_iter()
            .enumerate()
            .map(|(row, v)| match v {
                Some(v) if v.is_finite() => Ok(v),
                _ => Err(Self::malformed(df, column, row)),
            })
            .collect()
    }

    fn int_values(df: &DataFrame, column: &str) -> Result<Vec<i64>, CleanError> {
        // Go through f64 so "12.0" style cells parse, then reject fractions.
        let values = df.column(column)?.cast(&DataType::Float64)?;
        let ca = values.f64()?;

        ca.into_iter()
            .enumerate()
            .map(|(row, v)| match v {
                Some(v) if v.is_finite() && v.fract() == 0.0 => Ok(v as i64),
                _ => Err(Self::malformed(df, column, row)),
            })
            .collect()
    }

    fn string_values(df: &DataFrame, column: &str) -> Result<Vec<String>, CleanError> {
        let values = df.column(column)?.cast(&DataType::String)?;
        let ca = values.str()?;

        ca.into_iter()
            .enumerate()
            .map(|(row, v)| match v {
                Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
                _ => Err(Self::malformed(df, column, row)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_frame() -> DataFrame {
        df!(
            "X" => [-122.0, -74.0, -74.1],
            "Y" => [37.0, 40.7, 40.8],
            "FID" => [1i64, 2, 3],
            "NAME" => ["WALMART", "exxon mobil", "at&t inc."],
            "ADDRESS" => ["702 SW 8th St", "5959 Las Colinas", "208 S Akard St"],
            "STATE" => ["AR", "TX", "TX"],
            "LATITUDE" => [36.3, 32.8, 32.7],
            "LONGITUDE" => [-94.2, -96.9, -96.8],
            "REVENUES" => [100.0, 250.5, 160.0],
            "PROFIT" => [30.0, 50.5, -10.0],
            "EMPLOYEES" => [2_300_000i64, 72_700, 268_540],
            "RANK" => [1i64, 2, 3],
            "WEBSITE" => ["walmart.com", "exxonmobil.com", "att.com"]
        )
        .unwrap()
    }

    #[test]
    fn expenses_equal_revenue_minus_profit() {
        let table = DataCleaner::clean(&raw_frame()).unwrap();
        for c in table.iter() {
            assert_eq!(c.expenses, c.revenue - c.profit);
        }
        assert_eq!(table.get(1).unwrap().expenses, 70.0);
        assert_eq!(table.get(3).unwrap().expenses, 170.0);
    }

    #[test]
    fn names_are_title_cased() {
        let table = DataCleaner::clean(&raw_frame()).unwrap();
        let names: Vec<&str> = table.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Walmart", "Exxon Mobil", "At&T Inc."]);
    }

    #[test]
    fn unused_columns_are_dropped_and_input_untouched() {
        let raw = raw_frame();
        let trimmed = DataCleaner::drop_unused(&raw).unwrap();
        let cols: Vec<String> = trimmed
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert!(!cols.iter().any(|c| c == "X" || c == "ADDRESS" || c == "WEBSITE"));
        assert_eq!(cols.len(), REQUIRED_COLUMNS.len());
        assert_eq!(raw.width(), 13);
    }

    #[test]
    fn absent_dropped_columns_are_tolerated() {
        let raw = raw_frame()
            .select(REQUIRED_COLUMNS.iter().map(|s| s.to_string()))
            .unwrap();
        let table = DataCleaner::clean(&raw).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn missing_required_column_fails() {
        let raw = raw_frame().drop("PROFIT").unwrap();
        match DataCleaner::clean(&raw) {
            Err(CleanError::MissingColumn(name)) => assert_eq!(name, "PROFIT"),
            other => panic!("expected MissingColumn, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn non_numeric_revenue_is_malformed() {
        let raw = df!(
            "FID" => [1i64, 2],
            "NAME" => ["a", "b"],
            "STATE" => ["CA", "NY"],
            "LATITUDE" => [1.0, 2.0],
            "LONGITUDE" => [1.0, 2.0],
            "REVENUES" => ["100", "n/a"],
            "PROFIT" => [1.0, 2.0],
            "EMPLOYEES" => [1i64, 2],
            "RANK" => [1i64, 2]
        )
        .unwrap();

        match DataCleaner::clean(&raw) {
            Err(CleanError::MalformedRow { row, column, value }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "REVENUES");
                assert_eq!(value, "n/a");
            }
            other => panic!("expected MalformedRow, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn fractional_rank_is_malformed() {
        let raw = df!(
            "FID" => [1i64],
            "NAME" => ["a"],
            "STATE" => ["CA"],
            "LATITUDE" => [1.0],
            "LONGITUDE" => [1.0],
            "REVENUES" => [1.0],
            "PROFIT" => [1.0],
            "EMPLOYEES" => [1i64],
            "RANK" => [1.5]
        )
        .unwrap();

        assert!(matches!(
            DataCleaner::clean(&raw),
            Err(CleanError::MalformedRow { row: 0, ref column, .. }) if column == "RANK"
        ));
    }

    #[test]
    fn duplicate_fid_fails() {
        let mut raw = raw_frame();
        raw.with_column(Column::new("FID".into(), vec![1i64, 2, 1]))
            .unwrap();
        assert!(matches!(
            DataCleaner::clean(&raw),
            Err(CleanError::DuplicateId(1))
        ));
    }

    #[test]
    fn title_case_matches_python_semantics() {
        assert_eq!(title_case("GENERAL MOTORS"), "General Motors");
        assert_eq!(title_case("3m company"), "3M Company");
        assert_eq!(title_case("o'reilly automotive"), "O'Reilly Automotive");
        assert_eq!(title_case("jpmorgan chase & co."), "Jpmorgan Chase & Co.");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_is_idempotent() {
        for name in [
            "WALMART",
            "berkshire hathaway",
            "at&t inc.",
            "3M",
            "straße AG",
            "  spaced   out  ",
            "L3HARRIS technologies",
        ] {
            let once = title_case(name);
            assert_eq!(title_case(&once), once, "input {:?}", name);
        }
    }
}

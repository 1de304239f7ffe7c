//! CSV Data Loader Module
//! Reads the headquarters CSV file into a Polars DataFrame.

use log::{debug, info};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rows sampled for schema inference.
const INFER_SCHEMA_ROWS: usize = 10_000;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("The data file {} was not found. Please make sure it is available.", .0.display())]
    MissingInputFile(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("No data rows in {}", .0.display())]
    NoData(PathBuf),
}

/// Loads the raw headquarters file.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file using Polars.
    pub fn load_csv(path: &Path) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::MissingInputFile(path.to_path_buf()));
        }

        debug!("Reading CSV from {}", path.display());

        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .finish()?
            .collect()?;

        if df.height() == 0 {
            return Err(LoaderError::NoData(path.to_path_buf()));
        }

        info!(
            "Loaded {} rows, {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );
        Ok(df)
    }

    /// Column names of a loaded frame.
    pub fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported() {
        let path = Path::new("definitely/not/here/fortune_500_hq.csv");
        match DataLoader::load_csv(path) {
            Err(LoaderError::MissingInputFile(p)) => assert_eq!(p, path),
            other => panic!("expected MissingInputFile, got {:?}", other.map(|df| df.height())),
        }
    }

    #[test]
    fn missing_file_message_names_the_file() {
        let err = LoaderError::MissingInputFile(PathBuf::from("fortune_500_hq.csv"));
        assert_eq!(
            err.to_string(),
            "The data file fortune_500_hq.csv was not found. Please make sure it is available."
        );
    }

    fn temp_csv(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hq_insight-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn header_only_file_has_no_data() {
        let path = temp_csv(
            "header_only.csv",
            "FID,NAME,STATE,LATITUDE,LONGITUDE,REVENUES,PROFIT,EMPLOYEES,RANK\n",
        );
        match DataLoader::load_csv(&path) {
            Err(LoaderError::NoData(p)) => assert_eq!(p, path),
            other => panic!("expected NoData, got {:?}", other.map(|df| df.height())),
        }
    }

    #[test]
    fn reads_rows_with_inferred_types() {
        let path = temp_csv("two_rows.csv", "FID,NAME,REVENUES\n1,ACME,10.5\n2,GLOBEX,20\n");
        let df = DataLoader::load_csv(&path).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("REVENUES").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn column_names_follow_frame_order() {
        let df = df!("FID" => [1i64], "NAME" => ["acme"]).unwrap();
        assert_eq!(DataLoader::column_names(&df), vec!["FID", "NAME"]);
    }
}

//! Data module - CSV loading, cleaning and the typed company table

mod cleaner;
mod loader;
mod table;

pub use cleaner::{title_case, CleanError, DataCleaner, DROPPED_COLUMNS, REQUIRED_COLUMNS};
pub use loader::{DataLoader, LoaderError};
pub use table::{Company, CompanyTable, Metric};

#[cfg(test)]
pub(crate) use table::fixtures;

use std::path::Path;
use thiserror::Error;

/// Any failure between opening the file and holding a clean table.
#[derive(Error, Debug)]
pub enum DataError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("Invalid data: {0}")]
    Clean(#[from] CleanError),
}

/// Load and clean the dataset in one step.
pub fn load_table(path: &Path) -> Result<CompanyTable, DataError> {
    let raw = DataLoader::load_csv(path)?;
    Ok(DataCleaner::clean(&raw)?)
}

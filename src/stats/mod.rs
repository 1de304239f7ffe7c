//! Stats module - aggregations and dataset summary

mod aggregator;
mod summary;

pub use aggregator::{
    Aggregator, BucketEntry, GroupKey, HistogramBin, StateCount, TopNBucket,
    ValueKey, COMPANY_COUNT_LABEL, OTHER_LABEL,
};
pub use summary::DatasetSummary;

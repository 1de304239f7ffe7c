//! Dashboard module - page selections and the dispatcher that turns them into charts

mod dispatcher;
mod page;

pub use dispatcher::{dispatch, TOP_K};
pub use page::{
    MapKind, Page, RangeOption, Selection, UiState, DEFAULT_TOP_N, TOP_N_RANGE,
};

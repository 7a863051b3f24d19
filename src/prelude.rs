pub use crate::components::{
    HeaderCell, PageWindow, ProjectedCell, ProjectedRow, SortIndicator, TableBody,
    TableProjection, TableProps, TableSort, TableSortDirection, TableView, TableViewState,
};
pub use crate::error::PageSizeError;
pub use crate::id::ComponentId;
pub use crate::record::Record;
pub use crate::value::Value;

#[cfg(feature = "ui")]
pub use crate::components::DataTable;

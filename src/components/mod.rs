pub mod control;
pub mod table_columns;
pub mod table_filter;
pub mod table_props;
pub mod table_sort;
pub mod table_state;
pub mod table_view;
pub mod text_edit;

#[cfg(feature = "ui")]
mod table;

#[cfg(feature = "ui")]
pub use table::DataTable;

pub use table_columns::{SENSITIVE_FIELDS, visible_fields};
pub use table_filter::search_records;
pub use table_props::{CellRenderer, RowActions, TableProps, ValueTransform};
pub use table_sort::{SortIndicator, TableSort, TableSortDirection, sort_records};
pub use table_state::{DEFAULT_PAGE_SIZE, PageWindow, TableViewState, page_count};
pub use table_view::{
    HeaderCell, ProjectedCell, ProjectedRow, TableBody, TableProjection, TableView,
};

#[cfg(test)]
mod test_state_logic;

//! Searchable, sortable, paginated data-table view state.
//!
//! Records flow through a fixed pipeline on every render:
//! visible columns, then search, then sort, then pagination. The only mutable
//! state is [`TableViewState`] (search term, sort, page, page size), changed
//! solely by its interaction handlers. Enable the `ui` feature for the gpui
//! [`DataTable`](components::DataTable) element.

pub mod components;
pub mod error;
pub mod id;
pub mod prelude;
pub mod record;
pub mod value;

pub use components::{
    PageWindow, TableBody, TableProjection, TableProps, TableSort, TableSortDirection,
    TableView, TableViewState,
};
pub use error::PageSizeError;
pub use id::ComponentId;
pub use record::Record;
pub use value::Value;

//! Derived table contents: the filter, sort and paginate pipeline plus the
//! render-ready projection built on top of it.

use crate::record::Record;

use super::table_columns::visible_fields;
use super::table_filter::search_records;
use super::table_props::TableProps;
use super::table_sort::{SortIndicator, TableSort, sort_records};
use super::table_state::{PageWindow, TableViewState};

/// Result of running the pipeline once. Borrows from the props it was
/// derived from.
#[derive(Debug)]
pub struct TableView<'p> {
    pub visible_fields: Vec<&'p str>,
    /// Every record matching the search, in display order.
    pub sorted: Vec<&'p Record>,
    pub window: PageWindow,
}

impl<'p> TableView<'p> {
    pub fn derive<A>(state: &TableViewState, props: &'p TableProps<A>) -> Self {
        let visible_fields = visible_fields(props.field_names(), props.excluded());
        let filtered = search_records(
            props.source_records(),
            &visible_fields,
            state.search_term(),
        );
        let sorted = sort_records(filtered, state.sort());
        let window = state.window(sorted.len());
        log::trace!(
            "table derived {} of {} records, page {}/{}",
            sorted.len(),
            props.source_records().len(),
            window.page,
            window.page_count
        );
        Self {
            visible_fields,
            sorted,
            window,
        }
    }

    pub fn page_rows(&self) -> &[&'p Record] {
        self.window.slice(&self.sorted)
    }

    pub fn total_rows(&self) -> usize {
        self.sorted.len()
    }

    pub fn page_count(&self) -> usize {
        self.window.page_count
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HeaderCell {
    pub field: String,
    pub label: String,
    pub indicator: SortIndicator,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedCell<A> {
    pub field: String,
    pub text: String,
    /// Output of the field's cell renderer, when one is registered.
    pub content: Option<A>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedRow<A> {
    /// 1-based position within the current page.
    pub ordinal: usize,
    pub cells: Vec<ProjectedCell<A>>,
    pub actions: Option<A>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableBody<A> {
    /// Placeholder rows while data loads; one per slot of the current page.
    Loading { rows: usize },
    Rows(Vec<ProjectedRow<A>>),
}

impl<A> TableBody<A> {
    pub fn rows(&self) -> &[ProjectedRow<A>] {
        match self {
            TableBody::Loading { .. } => &[],
            TableBody::Rows(rows) => rows,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TableProjection<A> {
    pub heading: String,
    pub search_term: String,
    pub page_size_draft: String,
    pub headers: Vec<HeaderCell>,
    pub body: TableBody<A>,
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl<A> TableProjection<A> {
    pub fn build(state: &TableViewState, props: &TableProps<A>) -> Self {
        let view = TableView::derive(state, props);
        let headers = view
            .visible_fields
            .iter()
            .map(|field| HeaderCell {
                field: field.to_string(),
                label: props.header_label(field).to_string(),
                indicator: TableSort::indicator_for(state.sort(), field),
            })
            .collect();

        let body = if props.is_loading() {
            TableBody::Loading {
                rows: state.page_size(),
            }
        } else {
            TableBody::Rows(
                view.page_rows()
                    .iter()
                    .enumerate()
                    .map(|(index, record)| ProjectedRow {
                        ordinal: index + 1,
                        cells: view
                            .visible_fields
                            .iter()
                            .map(|field| ProjectedCell {
                                field: field.to_string(),
                                text: props.cell_text(field, record),
                                content: props.cell_content(field, record),
                            })
                            .collect(),
                        actions: props.actions_for(record),
                    })
                    .collect(),
            )
        };

        Self {
            heading: format!("{} Table", props.title_text()),
            search_term: state.search_term().to_string(),
            page_size_draft: state.page_size_draft().to_string(),
            headers,
            body,
            page: view.window.page,
            page_count: view.window.page_count,
            total_rows: view.total_rows(),
            prev_disabled: !view.window.has_previous(),
            next_disabled: !view.window.has_next(),
        }
    }

    pub fn summary(&self) -> String {
        format!("Page {} of {}", self.page, self.page_count)
    }
}

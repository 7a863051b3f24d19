use std::ops::Range;

use crate::error::PageSizeError;

use super::table_sort::TableSort;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of pages needed for `total_rows`; never less than one.
pub fn page_count(total_rows: usize, page_size: usize) -> usize {
    total_rows.div_ceil(page_size.max(1)).max(1)
}

/// Parses a typed page size. Only whole numbers of at least one are accepted.
pub fn parse_page_size(input: &str) -> Result<usize, PageSizeError> {
    let value = input
        .trim()
        .parse::<i64>()
        .map_err(|_| PageSizeError::not_a_number(input))?;
    if value < 1 {
        return Err(PageSizeError::NotPositive { value });
    }
    usize::try_from(value).map_err(|_| PageSizeError::not_a_number(input))
}

/// Slice of the sorted rows shown for one page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// Resolves the half-open row range `[(page - 1) * size, page * size)`
    /// clipped to `total_rows`. A page past the end yields an empty range
    /// rather than being pulled back; navigation is what keeps pages in range.
    pub fn resolve(total_rows: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page = page.max(1);
        let start = (page - 1).saturating_mul(page_size).min(total_rows);
        let end = page.saturating_mul(page_size).min(total_rows);
        Self {
            page,
            page_size,
            page_count: page_count(total_rows, page_size),
            start,
            end,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        rows.get(self.range()).unwrap_or_default()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page != self.page_count
    }
}

/// Interaction state of one mounted table.
///
/// Every handler only touches these fields; rows are derived from them and
/// the caller's records on each render. `page_size_draft` is the text shown in
/// the page-size box and may differ from the committed `page_size` (for
/// example `"05"`), but a rejected entry always resets it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableViewState {
    search_term: String,
    sort: Option<TableSort>,
    page: usize,
    page_size: usize,
    page_size_draft: String,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl TableViewState {
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            search_term: String::new(),
            sort: None,
            page: 1,
            page_size,
            page_size_draft: page_size.to_string(),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> Option<&TableSort> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_size_draft(&self) -> &str {
        &self.page_size_draft
    }

    /// Replaces the search term and returns to the first page, even when the
    /// term is unchanged.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
        log::trace!("table search term set to {:?}", self.search_term);
    }

    /// Applies a header click. The current page is kept.
    pub fn toggle_sort(&mut self, field: &str) -> &TableSort {
        let next = TableSort::toggled(self.sort.as_ref(), field);
        log::debug!("table sort changed to {} {:?}", next.key, next.direction);
        self.sort.insert(next)
    }

    /// Direct page-size entry. Accepted values commit and reset to page 1;
    /// rejected ones restore the draft to the committed size and change
    /// nothing else.
    pub fn enter_page_size(&mut self, input: impl Into<String>) -> Result<usize, PageSizeError> {
        self.page_size_draft = input.into();
        self.commit_page_size_draft()
    }

    pub fn increment_page_size(&mut self) -> Result<usize, PageSizeError> {
        let current = self.draft_or_committed();
        self.page_size_draft = current.saturating_add(1).to_string();
        self.commit_page_size_draft()
    }

    /// Steps the draft down by one, floored at 1, then commits it like a
    /// direct entry. Pressing it at 1 still resets to page 1.
    pub fn decrement_page_size(&mut self) -> Result<usize, PageSizeError> {
        let current = self.draft_or_committed();
        self.page_size_draft = current.saturating_sub(1).max(1).to_string();
        self.commit_page_size_draft()
    }

    fn draft_or_committed(&self) -> usize {
        parse_page_size(&self.page_size_draft).unwrap_or(self.page_size)
    }

    fn commit_page_size_draft(&mut self) -> Result<usize, PageSizeError> {
        match parse_page_size(&self.page_size_draft) {
            Ok(size) => {
                self.page_size = size;
                self.page = 1;
                log::debug!("table page size committed: {size}");
                Ok(size)
            }
            Err(error) => {
                log::debug!("table page size entry rejected: {error}");
                self.page_size_draft = self.page_size.to_string();
                Err(error)
            }
        }
    }

    /// Moves one page back, stopping at page 1. Returns whether the page moved.
    pub fn go_to_previous_page(&mut self) -> bool {
        let next = self.page.saturating_sub(1).max(1);
        self.move_to(next)
    }

    /// Moves one page forward, clamped to `[1, page_count]`.
    pub fn go_to_next_page(&mut self, page_count: usize) -> bool {
        let next = self.page.saturating_add(1).min(page_count.max(1));
        self.move_to(next)
    }

    /// Jumps to `page`, clamped to `[1, page_count]`.
    pub fn go_to_page(&mut self, page: usize, page_count: usize) -> bool {
        self.move_to(page.clamp(1, page_count.max(1)))
    }

    fn move_to(&mut self, page: usize) -> bool {
        if page == self.page {
            return false;
        }
        log::debug!("table page {} -> {page}", self.page);
        self.page = page;
        true
    }

    pub fn window(&self, total_rows: usize) -> PageWindow {
        PageWindow::resolve(total_rows, self.page, self.page_size)
    }
}

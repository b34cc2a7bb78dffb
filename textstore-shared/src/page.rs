//! Pagination types for search results.

/// A zero-based page descriptor supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: usize,
    /// Maximum number of items on the page.
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Index of the first item on this page within the overall result set.
    pub fn offset(&self) -> usize {
        self.page * self.size
    }
}

/// One search result: the stored record plus the highlight fragments the
/// search service produced for it. Fragments are kept verbatim and in
/// response order; a record can match without any fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<T> {
    pub source: T,
    pub highlights: Vec<String>,
}

impl<T> SearchHit<T> {
    pub fn new(source: T, highlights: Vec<String>) -> Self {
        Self { source, highlights }
    }
}

/// One page of search results in server relevance order.
///
/// `items.len() <= size` always holds, and `total_matches` counts every
/// match across all pages, not just this one.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage<T> {
    pub items: Vec<SearchHit<T>>,
    pub total_matches: u64,
    pub page: usize,
    pub size: usize,
}

impl<T> SearchPage<T> {
    pub fn new(items: Vec<SearchHit<T>>, total_matches: u64, request: PageRequest) -> Self {
        Self {
            items,
            total_matches,
            page: request.page,
            size: request.size,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages needed to cover every match at this page size.
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_matches.div_ceil(self.size as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 25).offset(), 75);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page: SearchPage<()> = SearchPage::new(vec![], 25, PageRequest::new(0, 10));
        assert_eq!(page.total_pages(), 3);

        let exact: SearchPage<()> = SearchPage::new(vec![], 30, PageRequest::new(0, 10));
        assert_eq!(exact.total_pages(), 3);
    }
}

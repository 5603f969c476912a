/// Number of page buttons shown at once.
pub const PAGE_WINDOW: u64 = 5;

pub const DEFAULT_PER_PAGE: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub page: u64,
    pub is_current: bool,
}

/// Paging state over a list of `total` items; pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    per_page: u64,
    total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl Pagination {
    pub fn new(per_page: u64) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            total: 0,
        }
    }

    /// Current page, always within `1..=total_pages()`.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Items per page, never zero.
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.set_total(total);
        self
    }

    /// Updates the item count, pulling the current page back into range.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        self.page = self.page.clamp(1, self.total_pages());
    }

    /// Never less than one, so an empty list still shows "page 1 of 1".
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.per_page).max(1)
    }

    /// Zero-based index of the first item on the current page.
    pub fn first_item_index(&self) -> u64 {
        (self.page - 1) * self.per_page
    }

    /// Zero-based index of the last item on the current page, `None` for an empty list.
    pub fn last_item_index(&self) -> Option<u64> {
        if self.total == 0 {
            return None;
        }
        Some((self.first_item_index() + self.per_page - 1).min(self.total - 1))
    }

    /// Up to five page buttons around the current page.
    pub fn page_window(&self) -> Vec<PageButton> {
        let total_pages = self.total_pages();
        let mut start = self.page.saturating_sub(PAGE_WINDOW / 2).max(1);
        let end = (start + PAGE_WINDOW - 1).min(total_pages);

        if end - start + 1 < PAGE_WINDOW {
            start = (end + 1).saturating_sub(PAGE_WINDOW).max(1);
        }

        (start..=end)
            .map(|page| PageButton {
                page,
                is_current: page == self.page,
            })
            .collect()
    }

    /// Moves to `page` if it exists; out-of-range pages are ignored.
    pub fn go_to(&mut self, page: u64) {
        if (1..=self.total_pages()).contains(&page) {
            self.page = page;
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    pub fn first(&mut self) {
        self.page = 1;
    }

    pub fn last(&mut self) {
        self.page = self.total_pages();
    }

    /// Changes the page size, keeping the first visible item on screen.
    pub fn change_items_per_page(&mut self, per_page: u64) {
        let per_page = per_page.max(1);
        let first = self.first_item_index();

        self.per_page = per_page;
        self.page = (first / per_page + 1).min(self.total_pages());
    }

    /// Items of the current page.
    pub fn paginate<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len() as u64;
        let start = self.first_item_index().min(len) as usize;
        let end = (self.first_item_index() + self.per_page).min(len) as usize;
        &items[start..end]
    }

    /// "Showing 11 to 20 of 42".
    pub fn summary(&self) -> String {
        match self.last_item_index() {
            Some(last) => format!(
                "Showing {} to {} of {}",
                self.first_item_index() + 1,
                last + 1,
                self.total
            ),
            None => "No entries".to_string(),
        }
    }
}

#[cfg(test)]
mod test;

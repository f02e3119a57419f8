//! Page sizes, page state and the pagination arithmetic.

use std::ops::Range;

use thiserror::Error;

/// Maximum number of page buttons shown without ellipsis.
const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported page size: {0} (expected one of 5, 10, 20, 50)")]
pub struct PageSizeError(pub usize);

/// Page sizes offered by the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [Self::Five, Self::Ten, Self::Twenty, Self::Fifty];

    pub fn get(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(PageSizeError(value))
    }
}

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: PageSize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl PageState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    /// Builds a state for an explicit page; 0 becomes 1.
    pub fn at(current_page: usize, page_size: PageSize) -> Self {
        Self {
            current_page: current_page.max(1),
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Changes the page size, returning to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        if self.page_size != page_size {
            self.page_size = page_size;
            self.current_page = 1;
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Moves to `page`, clamped into `[1, page_count]`.
    pub fn go_to(&mut self, page: usize, page_count: usize) {
        self.current_page = page.clamp(1, page_count.max(1));
    }
}

/// Entry in the page-button strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page buttons for `current` out of `total` pages.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(Page).collect();
    }

    let mut pages = Vec::with_capacity(7);
    if current <= 3 {
        pages.extend((1..=4).map(Page));
        pages.push(Ellipsis);
        pages.push(Page(total));
    } else if current >= total - 2 {
        pages.push(Page(1));
        pages.push(Ellipsis);
        pages.extend((total - 3..=total).map(Page));
    } else {
        pages.push(Page(1));
        pages.push(Ellipsis);
        pages.extend((current - 1..=current + 1).map(Page));
        pages.push(Ellipsis);
        pages.push(Page(total));
    }
    pages
}

/// Pagination of `total_items` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total_items: usize,
    pub page_size: usize,
    pub current_page: usize,
    /// `ceil(total_items / page_size)`; 0 when there are no items.
    pub total_pages: usize,
    pub first_index: usize,
    pub last_index: usize,
}

/// Computes the visible window. A zero page size is treated as 1 and the
/// page is clamped into range, so the window is always a valid slice.
pub fn paginate(total_items: usize, page_size: usize, current_page: usize) -> Pagination {
    let page_size = page_size.max(1);
    let total_pages = total_items.div_ceil(page_size);
    let current_page = current_page.clamp(1, total_pages.max(1));
    let first_index = (current_page - 1) * page_size;
    let last_index = (current_page * page_size).min(total_items);

    Pagination {
        total_items,
        page_size,
        current_page,
        total_pages,
        first_index,
        last_index,
    }
}

impl Pagination {
    /// Half-open index range of the visible page.
    pub fn range(&self) -> Range<usize> {
        self.first_index..self.last_index
    }

    /// Number of pages, counting an empty list as one empty page.
    pub fn page_count(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// Whether pagination controls are needed at all.
    pub fn is_paginated(&self) -> bool {
        self.total_items > self.page_size
    }

    /// 1-based `(first, last, total)` for "Showing first to last of total".
    pub fn showing(&self) -> Option<(usize, usize, usize)> {
        if self.total_items == 0 {
            return None;
        }
        Some((self.first_index + 1, self.last_index, self.total_items))
    }

    pub fn page_items(&self) -> Vec<PageItem> {
        page_numbers(self.current_page, self.page_count())
    }
}

use serde::{Deserialize, Serialize};

use crate::kernel::constants::DEFAULT_PAGE_SIZE;

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pageable {
    pub page: usize,
    pub size: usize,
}

impl Pageable {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Index of the first row on this page
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

impl Default for Pageable {
    fn default() -> Self {
        Self { page: 0, size: DEFAULT_PAGE_SIZE }
    }
}

/// One page of results together with the overall row count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub pageable: Pageable,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: Pageable, total_elements: u64) -> Self {
        Self { content, pageable, total_elements }
    }

    pub fn total_pages(&self) -> u64 {
        if self.pageable.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.pageable.size as u64)
    }

    pub fn has_next(&self) -> bool {
        (self.pageable.page as u64) + 1 < self.total_pages()
    }
}

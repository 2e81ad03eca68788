//! Ordered page window over the stored users

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageList<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page_number: u32,
    pub page_size: u32,
}

impl<T> PageList<T> {
    pub fn new(items: Vec<T>, total_count: usize, page_number: u32, page_size: u32) -> Self {
        Self {
            items,
            total_count,
            page_number,
            page_size,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size as usize)
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        (self.page_number as usize) < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page: PageList<u8> = PageList::new(vec![], 21, 1, 10);
        assert_eq!(page.total_pages(), 3);
        assert!(!page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn test_empty_store_has_no_pages() {
        let page: PageList<u8> = PageList::new(vec![], 0, 1, 10);
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_last_page() {
        let page: PageList<u8> = PageList::new(vec![1], 21, 3, 10);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }
}

use serde::Serialize;
use ts_rs::TS;

/// 一页有序结果及其分页元数据
///
/// 页码从 1 开始。请求页码小于 1 时取第 1 页，超过最后一页时取最后一页，
/// 因此只要有匹配数据就不会返回空页。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "pagination.ts")]
pub struct PaginatedList<T: TS> {
    pub items: Vec<T>,
    pub page_index: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// 计算总页数
pub fn total_pages(total_items: u64, page_size: u64) -> u64 {
    total_items.div_ceil(page_size.max(1))
}

/// 将请求的页码收敛到 [1, total_pages]；没有数据时为 1
pub fn clamp_page_index(requested: Option<i64>, total_pages: u64) -> u64 {
    let requested = requested.unwrap_or(1).max(1) as u64;
    requested.min(total_pages.max(1))
}

impl<T: TS> PaginatedList<T> {
    /// 由已取出的当前页数据构造
    pub fn new(items: Vec<T>, page_index: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = total_pages(total_items, page_size);
        Self {
            items,
            page_index,
            page_size,
            total_items,
            total_pages,
            has_previous_page: page_index > 1,
            has_next_page: page_index < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 3), 0);
        assert_eq!(total_pages(1, 3), 1);
        assert_eq!(total_pages(3, 3), 1);
        assert_eq!(total_pages(4, 3), 2);
        assert_eq!(total_pages(9, 3), 3);
        assert_eq!(total_pages(10, 3), 4);
    }

    #[test]
    fn test_clamp_page_index() {
        assert_eq!(clamp_page_index(None, 4), 1);
        assert_eq!(clamp_page_index(Some(0), 4), 1);
        assert_eq!(clamp_page_index(Some(-7), 4), 1);
        assert_eq!(clamp_page_index(Some(2), 4), 2);
        assert_eq!(clamp_page_index(Some(99), 4), 4);
        assert_eq!(clamp_page_index(Some(5), 0), 1);
    }

    #[test]
    fn test_navigation_flags() {
        let first = PaginatedList::new(vec![1, 2, 3], 1, 3, 7);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_previous_page);
        assert!(first.has_next_page);

        let middle = PaginatedList::new(vec![4, 5, 6], 2, 3, 7);
        assert!(middle.has_previous_page);
        assert!(middle.has_next_page);

        let last = PaginatedList::new(vec![7], 3, 3, 7);
        assert!(last.has_previous_page);
        assert!(!last.has_next_page);
    }
}

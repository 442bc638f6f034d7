use serde::Serialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// One-based page request. Both fields are positive; the handlers reject
/// anything else before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Slices `[(page-1)*limit, page*limit)` out of `items`, clamped to its
/// bounds. Pages past the end are empty; `total` always reports the full
/// length of `items`.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let limit = request.limit.max(1) as usize;
    let page = request.page.max(1) as usize;

    let start = (page - 1).saturating_mul(limit).min(total);
    let end = page.saturating_mul(limit).min(total);

    let items = items.into_iter().skip(start).take(end - start).collect();

    Page {
        items,
        pagination: Pagination {
            total,
            page: request.page,
            limit: request.limit,
            total_pages: total.div_ceil(limit),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: u32, limit: u32) -> PageRequest {
        PageRequest { page, limit }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(PageRequest::default(), request(1, 10));
    }

    #[test]
    fn test_boundary_pages() {
        let items: Vec<u32> = (0..25).collect();

        let first = paginate(items.clone(), request(1, 10));
        assert_eq!(first.items, (0..10).collect::<Vec<_>>());
        assert_eq!(first.pagination.total_pages, 3);

        let third = paginate(items.clone(), request(3, 10));
        assert_eq!(third.items, vec![20, 21, 22, 23, 24]);

        let fourth = paginate(items, request(4, 10));
        assert!(fourth.items.is_empty());
        assert_eq!(fourth.pagination.total, 25);
        assert_eq!(fourth.pagination.page, 4);
    }

    #[test]
    fn test_empty_collection_has_zero_pages() {
        let page = paginate(Vec::<u32>::new(), request(1, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn test_pages_concatenate_to_input() {
        for total in [1usize, 7, 10, 11, 30] {
            for limit in [1u32, 3, 10, 50] {
                let items: Vec<usize> = (0..total).collect();
                let pages = paginate(items.clone(), request(1, limit)).pagination.total_pages;

                let mut collected = Vec::new();
                for page in 1..=pages as u32 {
                    collected.extend(paginate(items.clone(), request(page, limit)).items);
                }

                assert_eq!(collected, items, "total={total} limit={limit}");
            }
        }
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let page = paginate(vec![1, 2, 3], request(u32::MAX, u32::MAX));
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_serializes_camel_case() {
        let pagination = paginate(vec![1, 2, 3], request(1, 2)).pagination;
        let json = serde_json::to_value(pagination).unwrap();
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["total"], 3);
    }
}

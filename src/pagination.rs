//! Pagination parameters and list payloads.

use serde::{Deserialize, Serialize};

/// Default number of objects per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Query parameters for object list requests.
///
/// Serializes to `pageSize=<n>&pageNumber=<n>`, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    /// Number of items per page.
    pub page_size: u32,
    /// Page number (1-indexed).
    pub page_number: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 1,
        }
    }
}

impl PageParams {
    /// Create pagination params for a specific page.
    #[must_use]
    pub fn new(page_size: u32, page_number: u32) -> Self {
        Self {
            page_size,
            page_number,
        }
    }
}

/// One page of objects as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPage<T> {
    /// Total rows across all pages, when the server reports it.
    #[serde(default)]
    pub total_rows: Option<u64>,
    /// The objects on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// The page that was requested.
    #[serde(skip)]
    pub params: PageParams,
}

impl<T> ObjectPage<T> {
    /// Record which page this is.
    #[must_use]
    pub fn with_params(mut self, params: PageParams) -> Self {
        self.params = params;
        self
    }

    /// Whether later pages exist.
    ///
    /// Uses `totalRows` when present, otherwise assumes a full page means more.
    /// A zero page size never has more.
    pub fn has_more(&self) -> bool {
        let PageParams {
            page_size,
            page_number,
        } = self.params;
        if page_size == 0 {
            return false;
        }
        match self.total_rows {
            Some(total) => u64::from(page_number) * u64::from(page_size) < total,
            None => self.data.len() >= page_size as usize,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for ObjectPage<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_params() {
        let params = PageParams::default();
        assert_eq!(params.page_size, 20);
        assert_eq!(params.page_number, 1);
    }

    #[test]
    fn test_params_query_names() {
        let value = serde_json::to_value(PageParams::new(10, 2)).unwrap();
        assert_eq!(value, json!({"pageSize": 10, "pageNumber": 2}));
    }

    #[test]
    fn test_has_more_with_total() {
        let page: ObjectPage<i32> = serde_json::from_value(json!({
            "totalRows": 25,
            "data": vec![1; 10]
        }))
        .unwrap();

        assert!(page.clone().with_params(PageParams::new(10, 2)).has_more());
        assert!(!page.with_params(PageParams::new(10, 3)).has_more());
    }

    #[test]
    fn test_has_more_without_total() {
        let full: ObjectPage<i32> = serde_json::from_value(json!({"data": [1, 2]})).unwrap();
        assert!(full.with_params(PageParams::new(2, 1)).has_more());

        let partial: ObjectPage<i32> = serde_json::from_value(json!({"data": [1]})).unwrap();
        assert!(!partial.with_params(PageParams::new(2, 1)).has_more());
    }

    #[test]
    fn test_zero_page_size_has_no_more() {
        let with_total: ObjectPage<i32> =
            serde_json::from_value(json!({"totalRows": 5, "data": []})).unwrap();
        assert!(!with_total.with_params(PageParams::new(0, 1)).has_more());

        let without_total: ObjectPage<i32> = serde_json::from_value(json!({"data": []})).unwrap();
        assert!(!without_total.with_params(PageParams::new(0, 3)).has_more());
    }
}

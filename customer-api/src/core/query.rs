//! Read-side filtering, pagination and aggregation
//!
//! Pure business logic with no I/O dependencies

use std::collections::BTreeMap;

use shared::Customer;

use crate::error::{ApiError, ApiResult};

/// AND-combined, case-insensitive equality filters. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    first_name: Option<String>,
    last_name: Option<String>,
    city: Option<String>,
}

impl CustomerFilter {
    /// Empty strings are treated like absent filters
    pub fn new(first_name: Option<&str>, last_name: Option<&str>, city: Option<&str>) -> Self {
        let normalize = |value: Option<&str>| {
            value
                .filter(|v| !v.is_empty())
                .map(str::to_lowercase)
        };

        Self {
            first_name: normalize(first_name),
            last_name: normalize(last_name),
            city: normalize(city),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.city.is_none()
    }

    pub fn matches(&self, customer: &Customer) -> bool {
        fn field_matches(expected: &Option<String>, actual: &str) -> bool {
            expected
                .as_ref()
                .is_none_or(|expected| actual.to_lowercase() == *expected)
        }

        field_matches(&self.first_name, &customer.first_name)
            && field_matches(&self.last_name, &customer.last_name)
            && field_matches(&self.city, &customer.city)
    }
}

/// One-based page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_LIMIT: i64 = 10;

    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// `[start, end)` of the window; saturates instead of overflowing
    pub fn bounds(&self) -> (i64, i64) {
        let start = self.page.saturating_sub(1).saturating_mul(self.limit);
        (start, start.saturating_add(self.limit))
    }

    /// Slice `items` to this window.
    ///
    /// The window must lie entirely inside `items`: a negative start is
    /// `InvalidPage`, and a negative limit or an end past the last item is
    /// `InvalidLimit`. Short final pages are rejected, not truncated.
    pub fn apply<T>(&self, items: Vec<T>) -> ApiResult<Vec<T>> {
        let (start, end) = self.bounds();

        if start < 0 {
            return Err(ApiError::InvalidPage { page: self.page });
        }
        if self.limit < 0 || end > items.len() as i64 {
            return Err(ApiError::InvalidLimit { limit: self.limit });
        }

        // Both bounds are within 0..=len here
        Ok(items
            .into_iter()
            .skip(start as usize)
            .take((end - start) as usize)
            .collect())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_LIMIT)
    }
}

/// Records matching `filter`, in collection order
pub fn filter_customers<'a>(customers: &'a [Customer], filter: &CustomerFilter) -> Vec<&'a Customer> {
    customers.iter().filter(|customer| filter.matches(customer)).collect()
}

/// Filter then paginate, returning owned records for the response
pub fn list_customers(
    customers: &[Customer],
    filter: &CustomerFilter,
    pagination: Pagination,
) -> ApiResult<Vec<Customer>> {
    let matching = filter_customers(customers, filter);
    let page = pagination.apply(matching)?;
    Ok(page.into_iter().cloned().collect())
}

/// Number of customers per city over the whole collection
pub fn city_counts(customers: &[Customer]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for customer in customers {
        *counts.entry(customer.city.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customers() -> Vec<Customer> {
        vec![
            Customer::new(1, "Ada", "Lovelace", "Paris", "Acme"),
            Customer::new(2, "ada", "Byron", "paris", "Acme"),
            Customer::new(3, "Alan", "Turing", "Lyon", "Bletchley"),
            Customer::new(4, "Grace", "Hopper", "Paris", "Navy"),
            Customer::new(5, "Adam", "Smith", "Lyon", "Acme"),
        ]
    }

    fn ids(records: &[Customer]) -> Vec<i64> {
        records.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let all = customers();
        let filter = CustomerFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter_customers(&all, &filter).len(), all.len());
    }

    #[test]
    fn test_filters_are_case_insensitive_exact_matches() {
        let all = customers();

        let by_name = CustomerFilter::new(Some("ADA"), None, None);
        let matched: Vec<i64> = filter_customers(&all, &by_name).iter().map(|c| c.id).collect();
        assert_eq!(matched, vec![1, 2]);

        // "Ad" is a prefix of "Adam" and "Ada" but must not match either
        let prefix = CustomerFilter::new(Some("Ad"), None, None);
        assert!(filter_customers(&all, &prefix).is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let all = customers();
        let filter = CustomerFilter::new(Some("ada"), None, Some("PARIS"));
        let matched = filter_customers(&all, &filter);
        assert_eq!(matched.len(), 2);

        let filter = CustomerFilter::new(Some("ada"), Some("lovelace"), Some("paris"));
        let matched: Vec<i64> = filter_customers(&all, &filter).iter().map(|c| c.id).collect();
        assert_eq!(matched, vec![1]);
    }

    #[test]
    fn test_every_result_satisfies_every_filter() {
        let all = customers();
        let filters = [
            CustomerFilter::new(None, None, Some("lyon")),
            CustomerFilter::new(Some("alan"), None, Some("Lyon")),
            CustomerFilter::new(None, Some("HOPPER"), None),
            CustomerFilter::new(Some("nobody"), None, None),
        ];

        for filter in &filters {
            for customer in filter_customers(&all, filter) {
                assert!(filter.matches(customer));
                assert!(all.contains(customer));
            }
        }
    }

    #[test]
    fn test_pagination_window() {
        let all = customers();
        let page = list_customers(&all, &CustomerFilter::default(), Pagination::new(2, 2)).unwrap();
        assert_eq!(ids(&page), vec![3, 4]);

        let exact = list_customers(&all, &CustomerFilter::default(), Pagination::new(1, 5)).unwrap();
        assert_eq!(ids(&exact), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_past_end_is_invalid_limit() {
        let all = customers();

        // Default window of 10 over 5 records
        let err = list_customers(&all, &CustomerFilter::default(), Pagination::default()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidLimit { limit: 10 }));

        // Short last page
        let err = list_customers(&all, &CustomerFilter::default(), Pagination::new(3, 2)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidLimit { limit: 2 }));
    }

    #[test]
    fn test_negative_start_is_invalid_page() {
        let all = customers();
        let err = list_customers(&all, &CustomerFilter::default(), Pagination::new(-1, 2)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidPage { page: -1 }));
    }

    #[test]
    fn test_negative_limit_is_invalid_limit() {
        let all = customers();
        let err = list_customers(&all, &CustomerFilter::default(), Pagination::new(1, -3)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidLimit { limit: -3 }));
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let all = customers();
        let err = list_customers(&all, &CustomerFilter::default(), Pagination::new(i64::MAX, i64::MAX))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidLimit { .. }));
    }

    #[test]
    fn test_pagination_applies_after_filtering() {
        let all = customers();
        let filter = CustomerFilter::new(None, None, Some("paris"));
        let page = list_customers(&all, &filter, Pagination::new(2, 1)).unwrap();
        assert_eq!(ids(&page), vec![2]);
    }

    #[test]
    fn test_city_counts() {
        let all = vec![
            Customer::new(1, "", "", "Paris", ""),
            Customer::new(2, "", "", "Paris", ""),
            Customer::new(3, "", "", "Lyon", ""),
        ];
        let counts = city_counts(&all);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["Paris"], 2);
        assert_eq!(counts["Lyon"], 1);
    }

    #[test]
    fn test_city_counts_are_case_sensitive() {
        let counts = city_counts(&customers());
        assert_eq!(counts["Paris"], 2);
        assert_eq!(counts["paris"], 1);
        assert_eq!(counts["Lyon"], 2);
    }
}

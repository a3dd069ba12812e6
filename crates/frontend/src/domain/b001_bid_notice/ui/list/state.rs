//! Query state of the bid board.
//!
//! The transitions live on the plain struct so the whole contract is
//! testable without a DOM: sort-header clicks, filter commits and the page
//! guard all go through here, the component only wires signals to it.

use contracts::domain::b001_bid_notice::{
    BidNoticeFilter, BidNoticeListResponse, SortDirection, SortField,
};

/// The board always shows ten rows per page.
pub const PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct BidListState {
    /// 1-indexed; always within [1, max(1, total_pages)].
    pub current_page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// Committed filter; drafts live in the filter form until submitted.
    pub filters: BidNoticeFilter,
}

impl Default for BidListState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_elements: 0,
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            filters: BidNoticeFilter::default(),
        }
    }
}

impl BidListState {
    /// Sort-header click: the active field flips direction, a new field
    /// becomes active descending. Sort changes always restart at page 1.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Descending;
        }
        self.current_page = 1;
    }

    /// Replace the committed filter and restart at page 1.
    pub fn commit_filter(&mut self, filter: BidNoticeFilter) {
        self.filters = filter;
        self.current_page = 1;
    }

    /// Page guard: requests outside [1, total_pages] are dropped, as is
    /// everything while there are no pages at all. Re-requesting the
    /// current page is allowed (it is a legitimate re-fetch).
    pub fn page_in_range(&self, page: u32) -> bool {
        page >= 1 && self.total_pages != 0 && page <= self.total_pages
    }

    /// Adopt the pagination metadata of a response in one step.
    pub fn apply_response(&mut self, response: &BidNoticeListResponse) {
        self.current_page = response.current_page;
        self.total_pages = response.total_pages;
        self.total_elements = response.total_elements;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FIELDS: [SortField; 7] = [
        SortField::BidNo,
        SortField::AptName,
        SortField::BidTitle,
        SortField::BidMethod,
        SortField::PblancDate,
        SortField::BidCloseDate,
        SortField::BidStatus,
    ];

    #[test]
    fn test_defaults() {
        let state = BidListState::default();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.sort_field, SortField::PblancDate);
        assert_eq!(state.sort_direction, SortDirection::Descending);
        assert_eq!(state.filters, BidNoticeFilter::default());
    }

    #[test]
    fn test_toggle_same_field_flips_direction() {
        let mut state = BidListState::default();
        state.toggle_sort(SortField::PblancDate);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
        state.toggle_sort(SortField::PblancDate);
        assert_eq!(state.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_toggle_new_field_resets_to_descending_from_any_state() {
        for prior_field in ALL_FIELDS {
            for prior_direction in [SortDirection::Ascending, SortDirection::Descending] {
                for next_field in ALL_FIELDS {
                    if next_field == prior_field {
                        continue;
                    }
                    let mut state = BidListState {
                        sort_field: prior_field,
                        sort_direction: prior_direction,
                        current_page: 4,
                        total_pages: 9,
                        ..Default::default()
                    };
                    state.toggle_sort(next_field);
                    assert_eq!(state.sort_field, next_field);
                    assert_eq!(state.sort_direction, SortDirection::Descending);
                    assert_eq!(state.current_page, 1);
                }
            }
        }
    }

    #[test]
    fn test_page_guard_bounds() {
        let state = BidListState {
            current_page: 3,
            total_pages: 5,
            ..Default::default()
        };
        assert!(!state.page_in_range(0));
        assert!(state.page_in_range(1));
        assert!(state.page_in_range(5));
        assert!(!state.page_in_range(6));
    }

    #[test]
    fn test_same_page_is_a_valid_refetch() {
        let state = BidListState {
            current_page: 3,
            total_pages: 5,
            ..Default::default()
        };
        assert!(state.page_in_range(3));
    }

    #[test]
    fn test_page_guard_with_no_pages() {
        let state = BidListState::default();
        assert_eq!(state.total_pages, 0);
        assert!(!state.page_in_range(1));
    }

    #[test]
    fn test_commit_filter_resets_page() {
        let mut state = BidListState {
            current_page: 4,
            total_pages: 8,
            ..Default::default()
        };
        let filter = BidNoticeFilter {
            keyword: "보수공사".to_string(),
            ..Default::default()
        };
        state.commit_filter(filter.clone());
        assert_eq!(state.current_page, 1);
        assert_eq!(state.filters, filter);
    }

    #[test]
    fn test_apply_response_updates_pagination_together() {
        let mut state = BidListState::default();
        state.apply_response(&BidNoticeListResponse {
            items: Vec::new(),
            current_page: 2,
            total_pages: 7,
            total_elements: 65,
        });
        assert_eq!(state.current_page, 2);
        assert_eq!(state.total_pages, 7);
        assert_eq!(state.total_elements, 65);
    }
}

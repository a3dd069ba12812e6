//! Helpers shared by sortable list views

use contracts::domain::b001_bid_notice::{SortDirection, SortField};

/// Indicator appended to a sortable column header.
pub fn sort_indicator(
    current_field: SortField,
    field: SortField,
    direction: SortDirection,
) -> &'static str {
    if current_field == field {
        match direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(
            sort_indicator(SortField::BidNo, SortField::BidNo, SortDirection::Ascending),
            " ▲"
        );
        assert_eq!(
            sort_indicator(SortField::BidNo, SortField::BidNo, SortDirection::Descending),
            " ▼"
        );
        assert_eq!(
            sort_indicator(SortField::BidNo, SortField::AptName, SortDirection::Ascending),
            " ⇅"
        );
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a bid announcement.
///
/// The status is never stored; it is derived from the announcement and
/// closing dates relative to "today" every time a record is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidStatus {
    #[serde(rename = "new")]
    New,
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "imminent")]
    ClosingSoon,
    #[serde(rename = "end")]
    Closed,
}

/// Announcements younger than this many days count as "new".
const NEW_WINDOW_DAYS: i64 = 7;
/// Announcements closing within this many days count as "closing soon".
const IMMINENT_WINDOW_DAYS: i64 = 3;

impl BidStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BidStatus::New => "new",
            BidStatus::Open => "open",
            BidStatus::ClosingSoon => "imminent",
            BidStatus::Closed => "end",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BidStatus::New => "신규공고",
            BidStatus::Open => "진행중",
            BidStatus::ClosingSoon => "마감임박",
            BidStatus::Closed => "마감",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(BidStatus::New),
            "open" => Some(BidStatus::Open),
            "imminent" => Some(BidStatus::ClosingSoon),
            "end" => Some(BidStatus::Closed),
            _ => None,
        }
    }

    /// Derive the status from the announcement dates.
    ///
    /// Closing wins over everything, then the imminent window, then the
    /// new-announcement window.
    pub fn from_dates(pblanc_date: NaiveDate, bid_close_date: NaiveDate, today: NaiveDate) -> Self {
        if bid_close_date < today {
            return BidStatus::Closed;
        }
        if (bid_close_date - today).num_days() <= IMMINENT_WINDOW_DAYS {
            return BidStatus::ClosingSoon;
        }
        if (today - pblanc_date).num_days() <= NEW_WINDOW_DAYS {
            return BidStatus::New;
        }
        BidStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_status_derivation() {
        let today = d("2025-08-05");
        // closed yesterday
        assert_eq!(
            BidStatus::from_dates(d("2025-07-01"), d("2025-08-04"), today),
            BidStatus::Closed
        );
        // closes in 2 days
        assert_eq!(
            BidStatus::from_dates(d("2025-07-01"), d("2025-08-07"), today),
            BidStatus::ClosingSoon
        );
        // announced 3 days ago, closes far out
        assert_eq!(
            BidStatus::from_dates(d("2025-08-02"), d("2025-09-01"), today),
            BidStatus::New
        );
        // old announcement, closes far out
        assert_eq!(
            BidStatus::from_dates(d("2025-06-01"), d("2025-09-01"), today),
            BidStatus::Open
        );
    }

    #[test]
    fn test_closing_today_is_imminent() {
        let today = d("2025-08-05");
        assert_eq!(
            BidStatus::from_dates(d("2025-06-01"), today, today),
            BidStatus::ClosingSoon
        );
    }

    #[test]
    fn test_code_round_trip() {
        for status in [
            BidStatus::New,
            BidStatus::Open,
            BidStatus::ClosingSoon,
            BidStatus::Closed,
        ] {
            assert_eq!(BidStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(BidStatus::from_code("whatever"), None);
    }
}

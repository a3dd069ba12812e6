use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{BidMethod, BidStatus};

/// One row of the bid announcement board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidNoticeDto {
    /// Server-side serial number, unique across all source servers.
    pub bid_pblanc_sn: i64,
    pub bid_no: String,
    pub bid_title: String,
    /// Apartment complex the announcement belongs to.
    pub apt_name: String,
    pub bid_method: BidMethod,
    pub bid_status: BidStatus,
    pub pblanc_date: NaiveDate,
    pub bid_close_date: NaiveDate,
    /// Source server the record was aggregated from.
    pub server_name: String,
}

/// Detail payload with the extended announcement fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidNoticeDetailDto {
    pub bid_pblanc_sn: i64,
    pub bid_no: String,
    pub bid_title: String,
    pub apt_name: String,
    pub bid_method: BidMethod,
    pub bid_status: BidStatus,
    pub pblanc_date: NaiveDate,
    pub bid_close_date: NaiveDate,
    pub server_name: String,
    /// Free-text announcement body.
    pub bid_content: String,
    pub required_docs: String,
    /// Bid deposit as a percentage of the estimated price.
    pub bid_deposit_rate: u32,
    /// Whether an on-site briefing is held, and where.
    pub spot_yn: bool,
    pub spot_place: Option<String>,
}

/// Which column the keyword search applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidSearchType {
    #[default]
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "no")]
    Number,
}

/// Which date column the period filter applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidDateType {
    /// Announcement date.
    #[default]
    #[serde(rename = "reg")]
    Announced,
    /// Closing date.
    #[serde(rename = "close")]
    Closing,
}

/// Columns the board can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    BidNo,
    AptName,
    BidTitle,
    BidMethod,
    #[default]
    PblancDate,
    BidCloseDate,
    BidStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Multi-field filter of the bid board.
///
/// Every field defaults to empty/unset; an unset field means "no
/// constraint", never "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BidNoticeFilter {
    #[serde(default)]
    pub search_type: BidSearchType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub keyword: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub apt_name: String,
    #[serde(default)]
    pub date_type: BidDateType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_status: Option<BidStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_method: Option<BidMethod>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category2: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category3: String,
}

impl BidNoticeFilter {
    /// Number of constraints the user actually set (for the filter badge).
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.keyword.trim().is_empty() {
            count += 1;
        }
        if !self.apt_name.trim().is_empty() {
            count += 1;
        }
        if self.start_date.is_some() || self.end_date.is_some() {
            count += 1;
        }
        if self.bid_status.is_some() {
            count += 1;
        }
        if self.bid_method.is_some() {
            count += 1;
        }
        if !self.category1.is_empty() || !self.category2.is_empty() || !self.category3.is_empty() {
            count += 1;
        }
        count
    }
}

/// Wire request of the list endpoint.
///
/// Kept flat (no nested filter struct) so it survives the query-string
/// (de)serialization both directions; axum's `Query` cannot handle
/// `serde(flatten)` together with numeric fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidNoticeListRequest {
    #[serde(default = "default_page")]
    pub current_page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub sort_field: SortField,
    #[serde(default)]
    pub sort_direction: SortDirection,
    #[serde(default)]
    pub search_type: BidSearchType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub keyword: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub apt_name: String,
    #[serde(default)]
    pub date_type: BidDateType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_status: Option<BidStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_method: Option<BidMethod>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category2: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category3: String,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

impl BidNoticeListRequest {
    pub fn from_parts(
        current_page: u32,
        page_size: u32,
        sort_field: SortField,
        sort_direction: SortDirection,
        filter: &BidNoticeFilter,
    ) -> Self {
        Self {
            current_page,
            page_size,
            sort_field,
            sort_direction,
            search_type: filter.search_type,
            keyword: filter.keyword.clone(),
            apt_name: filter.apt_name.clone(),
            date_type: filter.date_type,
            start_date: filter.start_date,
            end_date: filter.end_date,
            bid_status: filter.bid_status,
            bid_method: filter.bid_method,
            category1: filter.category1.clone(),
            category2: filter.category2.clone(),
            category3: filter.category3.clone(),
        }
    }

    pub fn filter(&self) -> BidNoticeFilter {
        BidNoticeFilter {
            search_type: self.search_type,
            keyword: self.keyword.clone(),
            apt_name: self.apt_name.clone(),
            date_type: self.date_type,
            start_date: self.start_date,
            end_date: self.end_date,
            bid_status: self.bid_status,
            bid_method: self.bid_method,
            category1: self.category1.clone(),
            category2: self.category2.clone(),
            category3: self.category3.clone(),
        }
    }
}

/// Wire response of the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidNoticeListResponse {
    pub items: Vec<BidNoticeDto>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_omits_empty_filter_fields() {
        let req = BidNoticeListRequest::from_parts(
            1,
            10,
            SortField::default(),
            SortDirection::default(),
            &BidNoticeFilter::default(),
        );
        let qs = serde_qs::to_string(&req).unwrap();
        assert!(qs.contains("current_page=1"));
        assert!(qs.contains("sort_field=pblanc_date"));
        assert!(qs.contains("sort_direction=desc"));
        assert!(!qs.contains("keyword"));
        assert!(!qs.contains("start_date"));
        assert!(!qs.contains("bid_status"));
    }

    #[test]
    fn test_request_query_string_round_trip() {
        let filter = BidNoticeFilter {
            search_type: BidSearchType::Number,
            keyword: "2025-".to_string(),
            apt_name: "행복".to_string(),
            date_type: BidDateType::Closing,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30),
            bid_status: Some(BidStatus::New),
            bid_method: Some(BidMethod::Electronic),
            category1: "01".to_string(),
            category2: "A".to_string(),
            category3: String::new(),
        };
        let req = BidNoticeListRequest::from_parts(
            3,
            10,
            SortField::BidCloseDate,
            SortDirection::Ascending,
            &filter,
        );
        let qs = serde_qs::to_string(&req).unwrap();
        let parsed: BidNoticeListRequest = serde_qs::from_str(&qs).unwrap();
        assert_eq!(parsed.current_page, 3);
        assert_eq!(parsed.sort_field, SortField::BidCloseDate);
        assert_eq!(parsed.sort_direction, SortDirection::Ascending);
        assert_eq!(parsed.filter(), filter);
    }

    #[test]
    fn test_missing_params_fall_back_to_defaults() {
        let parsed: BidNoticeListRequest = serde_qs::from_str("").unwrap();
        assert_eq!(parsed.current_page, 1);
        assert_eq!(parsed.page_size, 10);
        assert_eq!(parsed.sort_field, SortField::PblancDate);
        assert_eq!(parsed.sort_direction, SortDirection::Descending);
        assert_eq!(parsed.filter(), BidNoticeFilter::default());
    }

    #[test]
    fn test_detail_dto_json_round_trip() {
        let detail = BidNoticeDetailDto {
            bid_pblanc_sn: 1042,
            bid_no: "2025-10042".to_string(),
            bid_title: "행복마을 1단지 옥상 방수 보수공사".to_string(),
            apt_name: "행복마을 1단지".to_string(),
            bid_method: BidMethod::Electronic,
            bid_status: BidStatus::ClosingSoon,
            pblanc_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            bid_close_date: NaiveDate::from_ymd_opt(2025, 8, 6).unwrap(),
            server_name: "서울본사_Server".to_string(),
            bid_content: "1. 입찰건명 ...".to_string(),
            required_docs: "입찰참가신청서".to_string(),
            bid_deposit_rate: 5,
            spot_yn: true,
            spot_place: Some("행복마을 1단지 관리사무소".to_string()),
        };
        let json = serde_json::to_string(&detail).unwrap();
        assert!(json.contains("\"bid_status\":\"imminent\""));
        assert!(json.contains("\"pblanc_date\":\"2025-07-01\""));
        let parsed: BidNoticeDetailDto = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, detail);
    }

    #[test]
    fn test_sort_direction_toggle() {
        assert_eq!(
            SortDirection::Descending.toggled(),
            SortDirection::Ascending
        );
        assert_eq!(
            SortDirection::Ascending.toggled(),
            SortDirection::Descending
        );
    }

    #[test]
    fn test_active_filter_count() {
        assert_eq!(BidNoticeFilter::default().active_count(), 0);
        let filter = BidNoticeFilter {
            keyword: "보수공사".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30),
            bid_status: Some(BidStatus::Closed),
            ..Default::default()
        };
        assert_eq!(filter.active_count(), 3);
    }
}

//! Pure query engine of the bid board: filter, sort, paginate.
//!
//! Separated from the axum handlers so the whole list contract is testable
//! without a server.

use chrono::NaiveDate;
use contracts::domain::b001_bid_notice::{
    BidDateType, BidNoticeDto, BidNoticeListRequest, BidNoticeListResponse, BidSearchType,
    SortDirection, SortField,
};

use super::dataset::BidNoticeRecord;

pub fn run(
    records: &[BidNoticeRecord],
    req: &BidNoticeListRequest,
    today: NaiveDate,
) -> BidNoticeListResponse {
    let mut rows: Vec<BidNoticeDto> = records
        .iter()
        .filter(|r| matches(r, req, today))
        .map(|r| r.to_dto(today))
        .collect();

    sort_rows(&mut rows, req.sort_field, req.sort_direction);

    let total_elements = rows.len() as u64;
    let page_size = req.page_size.max(1) as u64;
    let total_pages = (total_elements.div_ceil(page_size)) as u32;
    let current_page = if total_pages == 0 {
        1
    } else {
        req.current_page.clamp(1, total_pages)
    };

    let start = (current_page as u64 - 1) * page_size;
    let items = rows
        .into_iter()
        .skip(start as usize)
        .take(page_size as usize)
        .collect();

    BidNoticeListResponse {
        items,
        current_page,
        total_pages,
        total_elements,
    }
}

/// An unset filter field never constrains the result.
fn matches(record: &BidNoticeRecord, req: &BidNoticeListRequest, today: NaiveDate) -> bool {
    let keyword = req.keyword.trim();
    if !keyword.is_empty() {
        let haystack = match req.search_type {
            BidSearchType::Title => &record.bid_title,
            BidSearchType::Number => &record.bid_no,
        };
        if !haystack.contains(keyword) {
            return false;
        }
    }

    let apt = req.apt_name.trim();
    if !apt.is_empty() && !record.apt_name.contains(apt) {
        return false;
    }

    let date = match req.date_type {
        BidDateType::Announced => record.pblanc_date,
        BidDateType::Closing => record.bid_close_date,
    };
    if let Some(start) = req.start_date {
        if date < start {
            return false;
        }
    }
    if let Some(end) = req.end_date {
        if date > end {
            return false;
        }
    }

    if let Some(status) = req.bid_status {
        if record.status(today) != status {
            return false;
        }
    }
    if let Some(method) = req.bid_method {
        if record.bid_method != method {
            return false;
        }
    }

    if !req.category1.is_empty() && record.category1 != req.category1 {
        return false;
    }
    if !req.category2.is_empty() && record.category2 != req.category2 {
        return false;
    }
    if !req.category3.is_empty() && record.category3 != req.category3 {
        return false;
    }

    true
}

fn sort_rows(rows: &mut [BidNoticeDto], field: SortField, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = match field {
            SortField::BidNo => a.bid_no.cmp(&b.bid_no),
            SortField::AptName => a.apt_name.cmp(&b.apt_name),
            SortField::BidTitle => a.bid_title.cmp(&b.bid_title),
            SortField::BidMethod => a.bid_method.code().cmp(b.bid_method.code()),
            SortField::PblancDate => a.pblanc_date.cmp(&b.pblanc_date),
            SortField::BidCloseDate => a.bid_close_date.cmp(&b.bid_close_date),
            SortField::BidStatus => (a.bid_status as u8).cmp(&(b.bid_status as u8)),
        }
        // serial number keeps equal keys in a stable, reproducible order
        .then_with(|| a.bid_pblanc_sn.cmp(&b.bid_pblanc_sn));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::b001_bid_notice::BidNoticeFilter;
    use contracts::enums::{BidMethod, BidStatus};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn today() -> NaiveDate {
        d("2025-08-05")
    }

    fn record(
        sn: i64,
        bid_no: &str,
        title: &str,
        apt: &str,
        method: BidMethod,
        pblanc: &str,
        close: &str,
        category1: &'static str,
    ) -> BidNoticeRecord {
        BidNoticeRecord {
            bid_pblanc_sn: sn,
            bid_no: bid_no.to_string(),
            bid_title: title.to_string(),
            apt_name: apt.to_string(),
            bid_method: method,
            pblanc_date: d(pblanc),
            bid_close_date: d(close),
            server_name: "서울본사_Server".to_string(),
            category1,
            category2: "A",
            category3: "001",
            bid_content: String::new(),
            required_docs: String::new(),
            bid_deposit_rate: 5,
            spot_yn: false,
            spot_place: None,
        }
    }

    fn fixture() -> Vec<BidNoticeRecord> {
        vec![
            // closed long ago
            record(
                1,
                "2025-00001",
                "행복마을 1단지 옥상 방수 보수공사",
                "행복마을 1단지",
                BidMethod::Electronic,
                "2025-03-01",
                "2025-03-20",
                "01",
            ),
            // open, announced months ago
            record(
                2,
                "2025-00002",
                "은하수 아파트 경비용역 위탁업체 선정",
                "은하수 아파트",
                BidMethod::Direct,
                "2025-06-10",
                "2025-09-01",
                "02",
            ),
            // new announcement
            record(
                3,
                "2025-00003",
                "푸른솔 타운 외벽 재도장공사",
                "푸른솔 타운",
                BidMethod::Electronic,
                "2025-08-03",
                "2025-08-25",
                "01",
            ),
            // closing soon
            record(
                4,
                "2025-00004",
                "송도 마린뷰 청소용역 위탁업체 선정",
                "송도 마린뷰",
                BidMethod::Electronic,
                "2025-07-01",
                "2025-08-06",
                "02",
            ),
        ]
    }

    fn request(filter: BidNoticeFilter) -> BidNoticeListRequest {
        BidNoticeListRequest::from_parts(
            1,
            10,
            SortField::default(),
            SortDirection::default(),
            &filter,
        )
    }

    #[test]
    fn test_no_filter_returns_everything() {
        let response = run(&fixture(), &request(BidNoticeFilter::default()), today());
        assert_eq!(response.total_elements, 4);
        assert_eq!(response.total_pages, 1);
        assert_eq!(response.items.len(), 4);
    }

    #[test]
    fn test_keyword_search_by_title() {
        let filter = BidNoticeFilter {
            keyword: "보수공사".to_string(),
            ..Default::default()
        };
        let response = run(&fixture(), &request(filter), today());
        assert_eq!(response.total_elements, 1);
        assert_eq!(response.items[0].bid_pblanc_sn, 1);
    }

    #[test]
    fn test_keyword_search_by_number() {
        let filter = BidNoticeFilter {
            search_type: BidSearchType::Number,
            keyword: "00003".to_string(),
            ..Default::default()
        };
        let response = run(&fixture(), &request(filter), today());
        assert_eq!(response.total_elements, 1);
        assert_eq!(response.items[0].bid_no, "2025-00003");
    }

    #[test]
    fn test_apt_name_contains() {
        let filter = BidNoticeFilter {
            apt_name: "마린뷰".to_string(),
            ..Default::default()
        };
        let response = run(&fixture(), &request(filter), today());
        assert_eq!(response.total_elements, 1);
        assert_eq!(response.items[0].apt_name, "송도 마린뷰");
    }

    #[test]
    fn test_date_range_on_announcement_date() {
        let filter = BidNoticeFilter {
            start_date: Some(d("2025-06-01")),
            end_date: Some(d("2025-07-31")),
            ..Default::default()
        };
        let response = run(&fixture(), &request(filter), today());
        let sns: Vec<i64> = response.items.iter().map(|i| i.bid_pblanc_sn).collect();
        assert_eq!(sns, vec![4, 2]); // desc by announcement date
    }

    #[test]
    fn test_date_range_on_closing_date() {
        let filter = BidNoticeFilter {
            date_type: BidDateType::Closing,
            start_date: Some(d("2025-08-01")),
            end_date: Some(d("2025-08-31")),
            ..Default::default()
        };
        let response = run(&fixture(), &request(filter), today());
        let mut sns: Vec<i64> = response.items.iter().map(|i| i.bid_pblanc_sn).collect();
        sns.sort_unstable();
        assert_eq!(sns, vec![3, 4]);
    }

    #[test]
    fn test_status_filter_uses_derived_status() {
        let filter = BidNoticeFilter {
            bid_status: Some(BidStatus::ClosingSoon),
            ..Default::default()
        };
        let response = run(&fixture(), &request(filter), today());
        assert_eq!(response.total_elements, 1);
        assert_eq!(response.items[0].bid_pblanc_sn, 4);

        let filter = BidNoticeFilter {
            bid_status: Some(BidStatus::Closed),
            ..Default::default()
        };
        let response = run(&fixture(), &request(filter), today());
        assert_eq!(response.total_elements, 1);
        assert_eq!(response.items[0].bid_pblanc_sn, 1);
    }

    #[test]
    fn test_method_and_category_filters() {
        let filter = BidNoticeFilter {
            bid_method: Some(BidMethod::Direct),
            ..Default::default()
        };
        let response = run(&fixture(), &request(filter), today());
        assert_eq!(response.total_elements, 1);
        assert_eq!(response.items[0].bid_pblanc_sn, 2);

        let filter = BidNoticeFilter {
            category1: "02".to_string(),
            ..Default::default()
        };
        let response = run(&fixture(), &request(filter), today());
        assert_eq!(response.total_elements, 2);
    }

    #[test]
    fn test_sort_by_closing_date_ascending() {
        let req = BidNoticeListRequest::from_parts(
            1,
            10,
            SortField::BidCloseDate,
            SortDirection::Ascending,
            &BidNoticeFilter::default(),
        );
        let response = run(&fixture(), &req, today());
        let sns: Vec<i64> = response.items.iter().map(|i| i.bid_pblanc_sn).collect();
        assert_eq!(sns, vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_pagination_math() {
        let mut records = Vec::new();
        for i in 0..7 {
            records.push(record(
                i,
                &format!("2025-1{:04}", i),
                "공사",
                "단지",
                BidMethod::Electronic,
                "2025-07-01",
                "2025-09-01",
                "01",
            ));
        }
        let mut req = request(BidNoticeFilter::default());
        req.page_size = 3;
        req.current_page = 2;

        let response = run(&records, &req, today());
        assert_eq!(response.total_elements, 7);
        assert_eq!(response.total_pages, 3);
        assert_eq!(response.current_page, 2);
        assert_eq!(response.items.len(), 3);

        req.current_page = 3;
        let response = run(&records, &req, today());
        assert_eq!(response.items.len(), 1);
    }

    #[test]
    fn test_empty_result_is_zero_pages_not_an_error() {
        let filter = BidNoticeFilter {
            keyword: "존재하지 않는 공고".to_string(),
            ..Default::default()
        };
        let response = run(&fixture(), &request(filter), today());
        assert_eq!(response.total_elements, 0);
        assert_eq!(response.total_pages, 0);
        assert!(response.items.is_empty());
        assert_eq!(response.current_page, 1);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let mut req = request(BidNoticeFilter::default());
        req.current_page = 99;
        let response = run(&fixture(), &req, today());
        assert_eq!(response.current_page, 1);
        assert_eq!(response.items.len(), 4);
    }
}

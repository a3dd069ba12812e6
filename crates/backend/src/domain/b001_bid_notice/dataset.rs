//! Generated demo dataset for the bid announcement board.
//!
//! There is no database behind the portal; the board serves a dataset that
//! is generated once at startup from a fixed seed. Announcement dates are
//! anchored to the server start date so status derivation stays meaningful.
//! Statuses themselves are never stored, they are derived per request.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use contracts::domain::b001_bid_notice::{BidNoticeDetailDto, BidNoticeDto};
use contracts::enums::{BidMethod, BidStatus};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};

const DATASET_SEED: u64 = 0xB001_2025;
const DATASET_SIZE: usize = 480;

/// Complexes managed by the portal, each aggregated from a regional server.
const COMPLEXES: &[(&str, &str)] = &[
    ("행복마을 1단지", "서울본사_Server"),
    ("은하수 아파트", "서울본사_Server"),
    ("푸른솔 타운", "서울본사_Server"),
    ("해운대 센트럴", "부산지사_Server"),
    ("광안 바다뜰", "부산지사_Server"),
    ("수성 힐스테이트", "대구지사_Server"),
    ("동대구 팰리스", "대구지사_Server"),
    ("송도 마린뷰", "인천지사_Server"),
    ("계양 그린빌", "인천지사_Server"),
];

/// (category1, category2, category3, work title) — 3-level classification
/// codes follow 공사(01)/용역(02)/물품(03) with mid/minor subcodes.
const WORKS: &[(&str, &str, &str, &str)] = &[
    ("01", "A", "001", "옥상 방수 보수공사"),
    ("01", "A", "002", "외벽 균열보수 및 재도장공사"),
    ("01", "B", "003", "승강기 교체공사"),
    ("01", "B", "004", "지하주차장 급배수관 교체공사"),
    ("01", "C", "005", "공용부 LED 조명 교체공사"),
    ("02", "D", "006", "경비용역 위탁업체 선정"),
    ("02", "D", "007", "청소용역 위탁업체 선정"),
    ("02", "D", "008", "저수조 청소 및 소독용역"),
    ("02", "E", "009", "조경 유지관리 용역"),
    ("03", "F", "010", "동절기 제설자재 구매"),
    ("03", "F", "011", "재활용품 수거업체 선정"),
];

/// Source record of the board. Everything except the status.
#[derive(Debug, Clone, PartialEq)]
pub struct BidNoticeRecord {
    pub bid_pblanc_sn: i64,
    pub bid_no: String,
    pub bid_title: String,
    pub apt_name: String,
    pub bid_method: BidMethod,
    pub pblanc_date: NaiveDate,
    pub bid_close_date: NaiveDate,
    pub server_name: String,
    pub category1: &'static str,
    pub category2: &'static str,
    pub category3: &'static str,
    pub bid_content: String,
    pub required_docs: String,
    pub bid_deposit_rate: u32,
    pub spot_yn: bool,
    pub spot_place: Option<String>,
}

impl BidNoticeRecord {
    pub fn status(&self, today: NaiveDate) -> BidStatus {
        BidStatus::from_dates(self.pblanc_date, self.bid_close_date, today)
    }

    pub fn to_dto(&self, today: NaiveDate) -> BidNoticeDto {
        BidNoticeDto {
            bid_pblanc_sn: self.bid_pblanc_sn,
            bid_no: self.bid_no.clone(),
            bid_title: self.bid_title.clone(),
            apt_name: self.apt_name.clone(),
            bid_method: self.bid_method,
            bid_status: self.status(today),
            pblanc_date: self.pblanc_date,
            bid_close_date: self.bid_close_date,
            server_name: self.server_name.clone(),
        }
    }

    pub fn to_detail_dto(&self, today: NaiveDate) -> BidNoticeDetailDto {
        BidNoticeDetailDto {
            bid_pblanc_sn: self.bid_pblanc_sn,
            bid_no: self.bid_no.clone(),
            bid_title: self.bid_title.clone(),
            apt_name: self.apt_name.clone(),
            bid_method: self.bid_method,
            bid_status: self.status(today),
            pblanc_date: self.pblanc_date,
            bid_close_date: self.bid_close_date,
            server_name: self.server_name.clone(),
            bid_content: self.bid_content.clone(),
            required_docs: self.required_docs.clone(),
            bid_deposit_rate: self.bid_deposit_rate,
            spot_yn: self.spot_yn,
            spot_place: self.spot_place.clone(),
        }
    }
}

/// Board dataset, generated once per process.
pub static DATASET: Lazy<Vec<BidNoticeRecord>> =
    Lazy::new(|| generate(Utc::now().date_naive(), DATASET_SIZE));

/// Build `count` records with dates spread over the ~5 months before and
/// the month after `today`.
pub fn generate(today: NaiveDate, count: usize) -> Vec<BidNoticeRecord> {
    let mut rng = StdRng::seed_from_u64(DATASET_SEED);
    let mut records = Vec::with_capacity(count);

    for i in 0..count {
        let (apt_name, server_name) = COMPLEXES[rng.gen_range(0..COMPLEXES.len())];
        let (category1, category2, category3, work) = WORKS[rng.gen_range(0..WORKS.len())];

        let pblanc_date = today - Duration::days(rng.gen_range(0..=150));
        let bid_close_date = pblanc_date + Duration::days(rng.gen_range(10..=35));

        let bid_method = if rng.gen_bool(0.7) {
            BidMethod::Electronic
        } else {
            BidMethod::Direct
        };
        let bid_deposit_rate = if rng.gen_bool(0.8) { 5 } else { 10 };
        let spot_yn = rng.gen_bool(0.4);

        let bid_title = format!("{} {}", apt_name, work);
        let bid_content = format!(
            "1. 입찰건명 : {}\n\
             2. 대상단지 : {}\n\
             3. 입찰방법 : {}\n\
             4. 입찰서 제출마감 : {} 18:00\n\
             5. 기타 자세한 사항은 관리사무소로 문의하시기 바랍니다.",
            bid_title,
            apt_name,
            bid_method.display_name(),
            bid_close_date.format("%Y-%m-%d"),
        );

        records.push(BidNoticeRecord {
            bid_pblanc_sn: 1000 + i as i64,
            bid_no: format!("{}-{:05}", pblanc_date.year(), 10000 + i),
            bid_title,
            apt_name: apt_name.to_string(),
            bid_method,
            pblanc_date,
            bid_close_date,
            server_name: server_name.to_string(),
            category1,
            category2,
            category3,
            bid_content,
            required_docs: "입찰참가신청서, 사업자등록증 사본, 산출내역서, 인감증명서".to_string(),
            bid_deposit_rate,
            spot_yn,
            spot_place: spot_yn.then(|| format!("{} 관리사무소", apt_name)),
        });
    }

    records
}

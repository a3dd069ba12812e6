use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use contracts::domain::b001_bid_notice::{
    BidNoticeDetailDto, BidNoticeListRequest, BidNoticeListResponse,
};
use serde::Deserialize;

use super::{dataset, query};

/// GET /api/bid-notice/list
pub async fn list_notices(Query(req): Query<BidNoticeListRequest>) -> Json<BidNoticeListResponse> {
    let today = Utc::now().date_naive();
    Json(query::run(&dataset::DATASET, &req, today))
}

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub server_name: Option<String>,
}

/// GET /api/bid-notice/view/:sn
pub async fn get_notice_detail(
    Path(sn): Path<i64>,
    Query(q): Query<DetailQuery>,
) -> Result<Json<BidNoticeDetailDto>, StatusCode> {
    let record = dataset::DATASET
        .iter()
        .find(|r| r.bid_pblanc_sn == sn)
        .ok_or(StatusCode::NOT_FOUND)?;

    // the source-server qualifier must agree with the record it came from
    if let Some(server_name) = &q.server_name {
        if &record.server_name != server_name {
            tracing::warn!(sn, %server_name, "Detail requested with mismatched server");
            return Err(StatusCode::NOT_FOUND);
        }
    }

    Ok(Json(record.to_detail_dto(Utc::now().date_naive())))
}

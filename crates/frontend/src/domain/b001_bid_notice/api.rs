use contracts::domain::b001_bid_notice::{
    BidNoticeDetailDto, BidNoticeListRequest, BidNoticeListResponse,
};

use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_notice_list(
    req: &BidNoticeListRequest,
) -> Result<BidNoticeListResponse, ApiError> {
    let query = serde_qs::to_string(req).map_err(|e| ApiError::Encode(e.to_string()))?;
    api_utils::get_json(&format!("/api/bid-notice/list?{}", query)).await
}

pub async fn fetch_notice_detail(
    sn: i64,
    server_name: &str,
) -> Result<BidNoticeDetailDto, ApiError> {
    let mut path = format!("/api/bid-notice/view/{}", sn);
    if !server_name.is_empty() {
        path.push_str(&format!(
            "?server_name={}",
            urlencoding::encode(server_name)
        ));
    }
    api_utils::get_json(&path).await
}

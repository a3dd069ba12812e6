use contracts::domain::b001_bid_notice::BidNoticeDetailDto;
use contracts::enums::BidStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::domain::b001_bid_notice::api;
use crate::shared::date_utils::format_date;

fn go_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}

/// Detail view of one announcement, addressed by serial number plus the
/// source-server qualifier from the query string. Fetched exactly once per
/// (sn, server) pair; a failed fetch is unrecoverable here, the user is
/// notified and sent back to the board.
#[component]
pub fn BidNoticeDetailPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    let (data, set_data) = signal(None::<BidNoticeDetailDto>);
    let (loading, set_loading) = signal(true);
    let last_key = StoredValue::new(None::<(i64, String)>);

    Effect::new(move |_| {
        let Some(sn) = params.get().get("sn").and_then(|s| s.parse::<i64>().ok()) else {
            return;
        };
        let server_name = query.get().get("server_name").unwrap_or_default();

        let key = (sn, server_name.clone());
        if last_key.get_value().as_ref() == Some(&key) {
            return;
        }
        last_key.set_value(Some(key));
        set_loading.set(true);

        spawn_local(async move {
            match api::fetch_notice_detail(sn, &server_name).await {
                Ok(detail) => {
                    set_data.set(Some(detail));
                    set_loading.set(false);
                }
                Err(e) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&e.user_message());
                    }
                    set_loading.set(false);
                    go_back();
                }
            }
        });
    });

    let th_style = "background: #f1f3f5; padding: 12px; text-align: left; width: 130px; font-size: 0.85rem; color: #495057; border-right: 1px solid #e9ecef;";
    let td_style = "padding: 12px; font-size: 0.875rem; color: #212529;";

    view! {
        <div style="max-width: 960px; margin: 0 auto; background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.06); padding: 24px;">
            {move || {
                if loading.get() {
                    return view! {
                        <div style="text-align: center; padding: 80px 0; color: #868e96;">
                            "데이터 로딩중..."
                        </div>
                    }
                        .into_any();
                }
                let Some(detail) = data.get() else {
                    return view! {
                        <div style="text-align: center; padding: 80px 0; color: #868e96;">
                            "데이터가 없습니다."
                        </div>
                    }
                        .into_any();
                };

                let spot_text = if detail.spot_yn {
                    format!("실시 ({})", detail.spot_place.as_deref().unwrap_or("-"))
                } else {
                    "미실시".to_string()
                };
                let closed = detail.bid_status == BidStatus::Closed;

                view! {
                    <div>
                        <div style="border-bottom: 2px solid #343a40; padding-bottom: 14px; margin-bottom: 20px;">
                            <h1 style="margin: 0; font-size: 1.25rem; color: #212529;">
                                "[" {detail.bid_status.display_name()} "] " {detail.bid_title.clone()}
                            </h1>
                            <div style="display: flex; justify-content: space-between; margin-top: 8px; font-size: 0.85rem; color: #868e96;">
                                <span>"공고번호 : " {detail.bid_no.clone()}</span>
                                <span>"작성일 : " {format_date(detail.pblanc_date)}</span>
                            </div>
                        </div>

                        <table style="width: 100%; border-collapse: collapse; border-top: 1px solid #dee2e6; border-bottom: 1px solid #dee2e6;">
                            <tbody>
                                <tr style="border-bottom: 1px solid #e9ecef;">
                                    <th style=th_style>"단지명"</th>
                                    <td style=td_style>{detail.apt_name.clone()}</td>
                                    <th style=th_style>"낙찰방법"</th>
                                    <td style=td_style>{detail.bid_method.display_name()}</td>
                                </tr>
                                <tr style="border-bottom: 1px solid #e9ecef;">
                                    <th style=th_style>"공고일자"</th>
                                    <td style=td_style>{format_date(detail.pblanc_date)}</td>
                                    <th style=th_style>"마감일자"</th>
                                    <td style=format!("{} color: #c92a2a; font-weight: bold;", td_style)>
                                        {format_date(detail.bid_close_date)}
                                    </td>
                                </tr>
                                <tr style="border-bottom: 1px solid #e9ecef;">
                                    <th style=th_style>"현장설명회"</th>
                                    <td style=td_style>{spot_text}</td>
                                    <th style=th_style>"입찰보증금"</th>
                                    <td style=td_style>{detail.bid_deposit_rate} "%"</td>
                                </tr>
                                <tr>
                                    <th style=th_style>"필수서류"</th>
                                    <td style=td_style colspan="3">{detail.required_docs.clone()}</td>
                                </tr>
                            </tbody>
                        </table>

                        <div style="margin-top: 20px; min-height: 180px; padding: 20px; background: #f8f9fa; border: 1px solid #e9ecef; border-radius: 4px; white-space: pre-line; line-height: 1.7; color: #495057; font-size: 0.9rem;">
                            {detail.bid_content.clone()}
                        </div>

                        <div style="margin-top: 28px; display: flex; justify-content: center; gap: 8px;">
                            <button
                                on:click=move |_| go_back()
                                style="padding: 10px 26px; background: #495057; color: white; border: none; border-radius: 4px; cursor: pointer;"
                            >
                                "목록으로"
                            </button>
                            <Show when=move || !closed>
                                <button style="padding: 10px 26px; background: #1971c2; color: white; border: none; border-radius: 4px; cursor: pointer;">
                                    "입찰 참여하기"
                                </button>
                            </Show>
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

pub mod state;

use contracts::domain::b001_bid_notice::{
    BidNoticeDto, BidNoticeFilter, BidNoticeListRequest, SortField,
};
use contracts::enums::BidStatus;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::b001_bid_notice::api;
use crate::domain::b001_bid_notice::ui::filter::BidNoticeFilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::sort_indicator;
use state::{BidListState, PAGE_SIZE};

fn status_badge_style(status: BidStatus) -> &'static str {
    match status {
        BidStatus::New => {
            "padding: 2px 10px; border-radius: 10px; font-size: 0.75rem; background: #d3f9d8; color: #2b8a3e; border: 1px solid #b2f2bb;"
        }
        BidStatus::ClosingSoon => {
            "padding: 2px 10px; border-radius: 10px; font-size: 0.75rem; background: #ffe3e3; color: #c92a2a; border: 1px solid #ffc9c9;"
        }
        BidStatus::Closed => {
            "padding: 2px 10px; border-radius: 10px; font-size: 0.75rem; background: #e9ecef; color: #868e96; border: 1px solid #dee2e6;"
        }
        BidStatus::Open => {
            "padding: 2px 10px; border-radius: 10px; font-size: 0.75rem; background: #d0ebff; color: #1971c2; border: 1px solid #a5d8ff;"
        }
    }
}

#[component]
pub fn BidNoticeListPage() -> impl IntoView {
    let state = RwSignal::new(BidListState::default());
    let (rows, set_rows) = signal(Vec::<BidNoticeDto>::new());
    let (loading, set_loading) = signal(false);

    // Sequence number of the newest fetch; responses of superseded fetches
    // are dropped so the most recently initiated request always wins.
    let request_seq = StoredValue::new(0u64);

    let load_page = move |page: u32| {
        let st = state.get_untracked();
        let req = BidNoticeListRequest::from_parts(
            page,
            PAGE_SIZE,
            st.sort_field,
            st.sort_direction,
            &st.filters,
        );

        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        set_loading.set(true);

        spawn_local(async move {
            let result = api::fetch_notice_list(&req).await;
            if request_seq.get_value() != seq {
                // a newer fetch was issued while this one was in flight
                return;
            }
            match result {
                Ok(response) => {
                    state.update(|s| s.apply_response(&response));
                    set_rows.set(response.items);
                    set_loading.set(false);
                }
                Err(e) => {
                    log!("Failed to fetch bid notices: {:?}", e);
                    // prior rows and pagination stay untouched
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&e.user_message());
                    }
                    set_loading.set(false);
                }
            }
        });
    };

    let handle_sort = move |field: SortField| {
        state.update(|s| s.toggle_sort(field));
        load_page(1);
    };

    let handle_search = move |filter: BidNoticeFilter| {
        state.update(|s| s.commit_filter(filter));
        load_page(1);
    };

    let handle_page_change = move |page: u32| {
        if !state.get_untracked().page_in_range(page) {
            return;
        }
        load_page(page);
    };

    // initial load
    Effect::new(move |_| {
        load_page(1);
    });

    let navigate = use_navigate();

    let th_style = "padding: 10px 8px; text-align: center; font-size: 0.8rem; color: #495057; cursor: pointer; user-select: none; white-space: nowrap; background: #f1f3f5; border-bottom: 2px solid #dee2e6;";

    view! {
        <div class="bid-notice-list" style="background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.06); padding: 24px;">
            <div style="display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid #dee2e6; padding-bottom: 16px; margin-bottom: 16px;">
                <h1 style="margin: 0; font-size: 1.3rem; color: #212529;">"통합 입찰 공고 게시판"</h1>
                <div style="font-size: 0.875rem; color: #868e96;">
                    "총 "
                    <span style="font-weight: bold; color: #1971c2;">
                        {move || state.get().total_elements}
                    </span>
                    "건"
                </div>
            </div>

            <BidNoticeFilterPanel on_search=Callback::new(handle_search) />

            <div style="overflow-x: auto; min-height: 420px;">
                <table style="width: 100%; border-collapse: collapse; font-size: 0.875rem;">
                    <thead>
                        <tr>
                            <th style="padding: 10px 8px; text-align: center; font-size: 0.8rem; color: #495057; white-space: nowrap; background: #f1f3f5; border-bottom: 2px solid #dee2e6; width: 48px;">
                                "번호"
                            </th>
                            <th style=th_style on:click=move |_| handle_sort(SortField::BidNo)>
                                "공고번호"
                                {move || sort_indicator(state.get().sort_field, SortField::BidNo, state.get().sort_direction)}
                            </th>
                            <th style=th_style on:click=move |_| handle_sort(SortField::AptName)>
                                "단지명"
                                {move || sort_indicator(state.get().sort_field, SortField::AptName, state.get().sort_direction)}
                            </th>
                            <th style=th_style on:click=move |_| handle_sort(SortField::BidTitle)>
                                "공고명"
                                {move || sort_indicator(state.get().sort_field, SortField::BidTitle, state.get().sort_direction)}
                            </th>
                            <th style=th_style on:click=move |_| handle_sort(SortField::BidMethod)>
                                "낙찰방법"
                                {move || sort_indicator(state.get().sort_field, SortField::BidMethod, state.get().sort_direction)}
                            </th>
                            <th style=th_style on:click=move |_| handle_sort(SortField::PblancDate)>
                                "공고일"
                                {move || sort_indicator(state.get().sort_field, SortField::PblancDate, state.get().sort_direction)}
                            </th>
                            <th style=th_style on:click=move |_| handle_sort(SortField::BidCloseDate)>
                                "마감일"
                                {move || sort_indicator(state.get().sort_field, SortField::BidCloseDate, state.get().sort_direction)}
                            </th>
                            <th style=th_style on:click=move |_| handle_sort(SortField::BidStatus)>
                                "상태"
                                {move || sort_indicator(state.get().sort_field, SortField::BidStatus, state.get().sort_direction)}
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                view! {
                                    <tr>
                                        <td colspan="8" style="padding: 60px 0; text-align: center; color: #868e96;">
                                            "데이터를 불러오는 중입니다..."
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else if rows.get().is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="8" style="padding: 60px 0; text-align: center; color: #868e96;">
                                            "조회된 데이터가 없습니다."
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                let page = state.get().current_page;
                                let navigate = navigate.clone();
                                view! {
                                    <For
                                        each=move || {
                                            let items: Vec<(usize, BidNoticeDto)> = rows
                                                .get()
                                                .into_iter()
                                                .enumerate()
                                                .collect();
                                            items
                                        }
                                        key=|(_, item)| item.bid_pblanc_sn
                                        children=move |(index, item): (usize, BidNoticeDto)| {
                                            let navigate = navigate.clone();
                                            let detail_url = format!(
                                                "/bids/{}?server_name={}",
                                                item.bid_pblanc_sn,
                                                urlencoding::encode(&item.server_name),
                                            );
                                            view! {
                                                <tr
                                                    style="border-bottom: 1px solid #e9ecef; cursor: pointer;"
                                                    on:click=move |_| navigate(&detail_url, Default::default())
                                                >
                                                    <td style="padding: 10px 8px; text-align: center; color: #868e96;">
                                                        {(page - 1) as usize * PAGE_SIZE as usize + index + 1}
                                                    </td>
                                                    <td style="padding: 10px 8px; text-align: center; font-family: monospace; color: #495057; white-space: nowrap;">
                                                        {item.bid_no.clone()}
                                                    </td>
                                                    <td style="padding: 10px 8px; white-space: nowrap; font-weight: 600; color: #343a40;">
                                                        {item.apt_name.clone()}
                                                    </td>
                                                    <td style="padding: 10px 8px; color: #212529;">
                                                        {item.bid_title.clone()}
                                                    </td>
                                                    <td style="padding: 10px 8px; text-align: center; color: #495057; white-space: nowrap;">
                                                        {item.bid_method.display_name()}
                                                    </td>
                                                    <td style="padding: 10px 8px; text-align: center; color: #495057; white-space: nowrap;">
                                                        {format_date(item.pblanc_date)}
                                                    </td>
                                                    <td style="padding: 10px 8px; text-align: center; color: #c92a2a; white-space: nowrap;">
                                                        {format_date(item.bid_close_date)}
                                                    </td>
                                                    <td style="padding: 10px 8px; text-align: center; white-space: nowrap;">
                                                        <span style=status_badge_style(item.bid_status)>
                                                            {item.bid_status.display_name()}
                                                        </span>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                }
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.get().current_page)
                total_pages=Signal::derive(move || state.get().total_pages)
                total_count=Signal::derive(move || state.get().total_elements)
                on_page_change=Callback::new(handle_page_change)
            />
        </div>
    }
}

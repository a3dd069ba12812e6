use chrono::Utc;
use contracts::domain::b001_bid_notice::{BidDateType, BidNoticeFilter, BidSearchType};
use contracts::enums::{BidMethod, BidStatus};
use leptos::prelude::*;

use crate::shared::date_utils::{format_date, months_back_range, parse_date_input};

const CATEGORY1_OPTIONS: &[(&str, &str)] = &[("", "대분류 전체"), ("01", "공사"), ("02", "용역"), ("03", "물품")];

const CATEGORY2_OPTIONS: &[(&str, &str)] = &[
    ("", "중분류 전체"),
    ("A", "건축"),
    ("B", "설비"),
    ("C", "전기"),
    ("D", "위생·소독"),
    ("E", "조경"),
    ("F", "자재"),
];

const CATEGORY3_OPTIONS: &[(&str, &str)] = &[
    ("", "소분류 전체"),
    ("001", "방수"),
    ("002", "도장"),
    ("003", "승강기"),
    ("004", "급배수관"),
    ("005", "조명"),
    ("006", "경비"),
    ("007", "청소"),
    ("008", "소독"),
    ("009", "조경관리"),
    ("010", "제설자재"),
    ("011", "재활용"),
];

/// Collapsible search form of the bid board.
///
/// Holds a draft filter; nothing leaves this component until the user
/// submits, at which point the parent receives a snapshot of the draft.
#[component]
pub fn BidNoticeFilterPanel(on_search: Callback<BidNoticeFilter>) -> impl IntoView {
    let is_expanded = RwSignal::new(true);
    let draft = RwSignal::new(BidNoticeFilter::default());

    let set_quick_range = move |months: u32| {
        let (start, end) = months_back_range(Utc::now().date_naive(), months);
        draft.update(|f| {
            f.start_date = Some(start);
            f.end_date = Some(end);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(draft.get_untracked());
    };

    let label_style = "width: 110px; background: #f1f3f5; display: flex; align-items: center; padding: 0 14px; font-size: 0.8rem; font-weight: bold; color: #495057; flex-shrink: 0;";
    let row_style = "display: flex; border-bottom: 1px solid #e9ecef; min-height: 46px;";
    let input_area_style = "flex: 1; display: flex; align-items: center; padding: 7px 12px; gap: 8px; flex-wrap: wrap;";
    let control_style = "border: 1px solid #ced4da; border-radius: 4px; padding: 5px 8px; font-size: 0.85rem;";

    view! {
        <div style="border: 1px solid #dee2e6; border-radius: 8px; margin-bottom: 20px; overflow: hidden;">
            // accordion header
            <div
                style="background: #f8f9fa; padding: 12px 16px; display: flex; justify-content: space-between; align-items: center; cursor: pointer; border-bottom: 1px solid #e9ecef;"
                on:click=move |_| is_expanded.update(|e| *e = !*e)
            >
                <span style="font-weight: bold; color: #343a40; font-size: 0.9rem;">
                    "상세 검색 조건"
                    {move || {
                        let count = draft.get().active_count();
                        if count > 0 {
                            view! {
                                <span style="margin-left: 8px; padding: 1px 8px; border-radius: 10px; background: #1971c2; color: white; font-size: 0.75rem;">
                                    {count}
                                </span>
                            }
                                .into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                    <span style="font-weight: normal; color: #868e96; font-size: 0.8rem; margin-left: 8px;">
                        "(원하는 조건을 선택하여 검색하세요)"
                    </span>
                </span>
                <span style="color: #868e96; font-size: 0.8rem;">
                    {move || if is_expanded.get() { "▲ 접기" } else { "▼ 펼치기" }}
                </span>
            </div>

            // accordion body; pure presentation state, the draft survives collapse
            <Show when=move || is_expanded.get()>
                <form on:submit=on_submit>
                    // Row 1: keyword + complex name
                    <div style=row_style>
                        <div style=label_style>"검색조건"</div>
                        <div style=input_area_style>
                            <select
                                style=control_style
                                on:change=move |ev| {
                                    let search_type = match event_target_value(&ev).as_str() {
                                        "no" => BidSearchType::Number,
                                        _ => BidSearchType::Title,
                                    };
                                    draft.update(|f| f.search_type = search_type);
                                }
                            >
                                <option value="title">"공고명"</option>
                                <option value="no">"공고번호"</option>
                            </select>
                            <input
                                type="text"
                                placeholder="검색어 입력"
                                style="flex: 1; min-width: 160px; border: 1px solid #ced4da; border-radius: 4px; padding: 5px 10px; font-size: 0.85rem;"
                                prop:value=move || draft.get().keyword
                                on:input=move |ev| draft.update(|f| f.keyword = event_target_value(&ev))
                            />
                        </div>
                        <div style=label_style>"단지명"</div>
                        <div style=input_area_style>
                            <input
                                type="text"
                                style="width: 100%; border: 1px solid #ced4da; border-radius: 4px; padding: 5px 10px; font-size: 0.85rem;"
                                prop:value=move || draft.get().apt_name
                                on:input=move |ev| draft.update(|f| f.apt_name = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    // Row 2: date range
                    <div style=row_style>
                        <div style=label_style>"기간 설정"</div>
                        <div style=input_area_style>
                            <select
                                style=control_style
                                on:change=move |ev| {
                                    let date_type = match event_target_value(&ev).as_str() {
                                        "close" => BidDateType::Closing,
                                        _ => BidDateType::Announced,
                                    };
                                    draft.update(|f| f.date_type = date_type);
                                }
                            >
                                <option value="reg">"공고일"</option>
                                <option value="close">"마감일"</option>
                            </select>
                            <input
                                type="date"
                                style=control_style
                                prop:value=move || draft.get().start_date.map(format_date).unwrap_or_default()
                                on:input=move |ev| {
                                    draft.update(|f| f.start_date = parse_date_input(&event_target_value(&ev)))
                                }
                            />
                            "~"
                            <input
                                type="date"
                                style=control_style
                                prop:value=move || draft.get().end_date.map(format_date).unwrap_or_default()
                                on:input=move |ev| {
                                    draft.update(|f| f.end_date = parse_date_input(&event_target_value(&ev)))
                                }
                            />
                            <div style="display: flex; gap: 4px; margin-left: auto;">
                                <button type="button" style=control_style on:click=move |_| set_quick_range(1)>"1개월"</button>
                                <button type="button" style=control_style on:click=move |_| set_quick_range(3)>"3개월"</button>
                                <button type="button" style=control_style on:click=move |_| set_quick_range(6)>"6개월"</button>
                            </div>
                        </div>
                    </div>

                    // Row 3: status + method
                    <div style=row_style>
                        <div style=label_style>"공고상태"</div>
                        <div style=input_area_style>
                            <select
                                style="width: 100%; border: 1px solid #ced4da; border-radius: 4px; padding: 5px 8px; font-size: 0.85rem;"
                                on:change=move |ev| {
                                    let status = BidStatus::from_code(&event_target_value(&ev));
                                    draft.update(|f| f.bid_status = status);
                                }
                            >
                                <option value="">"전체"</option>
                                <option value="new">"신규공고"</option>
                                <option value="open">"진행중"</option>
                                <option value="imminent">"마감임박"</option>
                                <option value="end">"마감"</option>
                            </select>
                        </div>
                        <div style=label_style>"입찰방법"</div>
                        <div style=input_area_style>
                            <select
                                style="width: 100%; border: 1px solid #ced4da; border-radius: 4px; padding: 5px 8px; font-size: 0.85rem;"
                                on:change=move |ev| {
                                    let method = BidMethod::from_code(&event_target_value(&ev));
                                    draft.update(|f| f.bid_method = method);
                                }
                            >
                                <option value="">"전체"</option>
                                <option value="electronic">"전자입찰"</option>
                                <option value="direct">"직접입찰"</option>
                            </select>
                        </div>
                    </div>

                    // Row 4: 3-level classification
                    <div style=row_style>
                        <div style=label_style>"입찰분류"</div>
                        <div style=input_area_style>
                            <select
                                style=control_style
                                on:change=move |ev| draft.update(|f| f.category1 = event_target_value(&ev))
                            >
                                {CATEGORY1_OPTIONS
                                    .iter()
                                    .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                                    .collect_view()}
                            </select>
                            <select
                                style=control_style
                                on:change=move |ev| draft.update(|f| f.category2 = event_target_value(&ev))
                            >
                                {CATEGORY2_OPTIONS
                                    .iter()
                                    .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                                    .collect_view()}
                            </select>
                            <select
                                style=control_style
                                on:change=move |ev| draft.update(|f| f.category3 = event_target_value(&ev))
                            >
                                {CATEGORY3_OPTIONS
                                    .iter()
                                    .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <div style="background: #f8f9fa; padding: 10px; display: flex; justify-content: center;">
                        <button
                            type="submit"
                            style="background: #1971c2; color: white; border: none; border-radius: 4px; padding: 8px 28px; font-size: 0.875rem; cursor: pointer;"
                        >
                            "조건 검색"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

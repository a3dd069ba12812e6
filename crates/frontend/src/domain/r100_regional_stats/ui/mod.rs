use std::collections::HashSet;

use leptos::prelude::*;

use super::data;
use super::flatten::{flatten, FlatRow};
use super::model::CellValue;
use super::transform;
use crate::shared::number_format::format_count;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PeriodMode {
    Monthly,
    Yearly,
}

#[component]
pub fn RegionalAveragePage() -> impl IntoView {
    let (mode, set_mode) = signal(PeriodMode::Monthly);
    let (selected_year, set_selected_year) = signal(transform::BASELINE_YEAR);
    let (selected_month, set_selected_month) = signal(transform::BASELINE_MONTH);
    let expanded = RwSignal::new(HashSet::<String>::new());

    // period-specific tree; recomputed only when the period changes
    let tree = Memo::new(move |_| {
        let yearly = mode.get() == PeriodMode::Yearly;
        let base = if yearly {
            data::base_yearly()
        } else {
            data::base_monthly()
        };
        transform::period_view(&base, selected_year.get(), selected_month.get(), yearly)
    });

    let rows = Memo::new(move |_| flatten(&tree.get(), &expanded.get()));

    let toggle_row = move |id: String| {
        expanded.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };

    let is_synthetic = move || {
        !transform::is_baseline(
            selected_year.get(),
            selected_month.get(),
            mode.get() == PeriodMode::Yearly,
        )
    };

    let tab_style = move |tab: PeriodMode| {
        if mode.get() == tab {
            "padding: 8px 24px; font-size: 0.875rem; border: 1px solid #343a40; background: #343a40; color: white; cursor: pointer;"
        } else {
            "padding: 8px 24px; font-size: 0.875rem; border: 1px solid #ced4da; background: white; color: #495057; cursor: pointer;"
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 20px;">
            // controls
            <div style="background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.06); padding: 16px 24px; display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 12px;">
                <div style="display: flex;">
                    <button
                        style=move || format!("{} border-radius: 6px 0 0 6px;", tab_style(PeriodMode::Monthly))
                        on:click=move |_| set_mode.set(PeriodMode::Monthly)
                    >
                        "월별"
                    </button>
                    <button
                        style=move || format!("{} border-radius: 0 6px 6px 0; border-left: none;", tab_style(PeriodMode::Yearly))
                        on:click=move |_| set_mode.set(PeriodMode::Yearly)
                    >
                        "연도별"
                    </button>
                </div>

                <div style="display: flex; align-items: center; gap: 8px;">
                    <select
                        style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem;"
                        on:change=move |ev| {
                            if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                                set_selected_year.set(year);
                            }
                        }
                    >
                        <option value="2025">"2025"</option>
                        <option value="2024">"2024"</option>
                        <option value="2023">"2023"</option>
                    </select>
                    <Show when=move || mode.get() == PeriodMode::Monthly>
                        <select
                            style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem;"
                            on:change=move |ev| {
                                if let Ok(month) = event_target_value(&ev).parse::<u32>() {
                                    set_selected_month.set(month);
                                }
                            }
                        >
                            {(1u32..=12)
                                .map(|m| {
                                    let selected = move || selected_month.get() == m;
                                    view! {
                                        <option value=m.to_string() selected=selected>
                                            {format!("{:02}월", m)}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </Show>
                </div>
            </div>

            // drill-down table
            <div style="background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.06);">
                <div style="padding: 18px 24px; display: flex; justify-content: space-between; align-items: center;">
                    <h3 style="margin: 0; font-size: 1rem; color: #212529;">
                        "관리비등 세부항목 지역별 평균표"
                    </h3>
                    <span style="font-size: 0.8rem; color: #868e96;">
                        "(단위:원/㎡, 주거전용면적기준)"
                    </span>
                </div>

                <div style="border-top: 1px solid #e9ecef; overflow-x: auto;">
                    <table style="width: 100%; border-collapse: collapse; font-size: 0.875rem;">
                        <thead>
                            <tr style="background: #f8f9fa;">
                                <th style="padding: 10px 16px; text-align: left; font-size: 0.8rem; color: #495057; white-space: nowrap; width: 240px; border-bottom: 1px solid #dee2e6;">
                                    "분류(클릭시 펼침)"
                                </th>
                                {data::REGIONS
                                    .iter()
                                    .map(|region| {
                                        view! {
                                            <th style="padding: 10px 16px; text-align: right; font-size: 0.8rem; color: #495057; white-space: nowrap; border-bottom: 1px solid #dee2e6;">
                                                {*region}
                                            </th>
                                        }
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || rows.get()
                                key=|row| row.id.clone()
                                children=move |row: FlatRow| {
                                    let row_id = row.id.clone();
                                    let is_expanded = {
                                        let id = row.id.clone();
                                        move || expanded.get().contains(&id)
                                    };
                                    view! {
                                        <tr style="border-bottom: 1px solid #f1f3f5;">
                                            <td style="padding: 8px 16px; white-space: nowrap;">
                                                <div style=format!(
                                                    "display: flex; align-items: center; padding-left: {}px;",
                                                    row.depth * 20,
                                                )>
                                                    {if row.has_children {
                                                        view! {
                                                            <button
                                                                style="margin-right: 8px; width: 20px; height: 20px; border: none; background: none; color: #1971c2; font-weight: bold; cursor: pointer;"
                                                                on:click=move |_| toggle_row(row_id.clone())
                                                            >
                                                                {move || if is_expanded() { "−" } else { "+" }}
                                                            </button>
                                                        }
                                                            .into_any()
                                                    } else {
                                                        view! { <span style="margin-right: 8px; width: 20px; display: inline-block;"></span> }
                                                            .into_any()
                                                    }}
                                                    <span style=if row.depth == 0 {
                                                        "font-weight: 600; color: #343a40;"
                                                    } else {
                                                        "color: #495057;"
                                                    }>{row.name.clone()}</span>
                                                </div>
                                            </td>
                                            {row
                                                .values
                                                .iter()
                                                .map(|value| {
                                                    let text = match value {
                                                        CellValue::Number(v) => format_count(*v),
                                                        CellValue::Text(t) => t.clone(),
                                                    };
                                                    view! {
                                                        <td style="padding: 8px 16px; text-align: right; color: #495057; white-space: nowrap;">
                                                            {text}
                                                        </td>
                                                    }
                                                })
                                                .collect_view()}
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            <Show when=is_synthetic>
                <div style="padding: 12px 16px; background: #fff9db; border: 1px solid #ffe066; border-radius: 8px; font-size: 0.85rem; color: #997404;">
                    "※ 선택한 기간의 수치는 기준 기간 자료를 바탕으로 산출한 추정치이며, 실제 공시 자료와 다를 수 있습니다."
                </div>
            </Show>

            <div style="padding: 14px 16px; background: #fff4e6; border: 1px solid #ffd8a8; border-radius: 8px; font-size: 0.85rem; color: #b35c00; line-height: 1.6;">
                <p style="margin: 0 0 6px 0; font-weight: 600;">
                    "관리비를 공개한 단지 전체를 기준으로 집계한 자료임에 유의"
                </p>
                <ul style="margin: 0; padding-left: 18px;">
                    <li>
                        "개별사용료 중 난방비 및 급탕비 값의 경우 개별난방(난방비·급탕비 0원) 단지의 값도 포함되어 있음"
                    </li>
                    <li>"난방방식 등 특정 기준에 따른 관리비 확인은 지역별 맞춤형 통계 추출 메뉴 활용"</li>
                </ul>
            </div>
        </div>
    }
}

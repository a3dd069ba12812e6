use leptos::prelude::*;

/// PaginationControls component - reusable 1-indexed pagination controls
///
/// The page size is fixed by the caller; only navigation is offered here.
/// Bounds are enforced both by disabling the buttons and by the caller's
/// page guard.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages (0 when the result set is empty)
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let btn_style = "padding: 6px 14px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: white; color: #495057; cursor: pointer;";

    view! {
        <div class="pagination-controls" style="display: flex; justify-content: center; align-items: center; gap: 8px; margin-top: 20px;">
            <button
                class="pagination-btn"
                style=btn_style
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
            >
                "< 이전"
            </button>
            <span class="pagination-info" style="font-size: 0.875rem; color: #495057; padding: 0 8px;">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    let count = total_count.get();
                    format!("{} / {} 페이지 (총 {}건)", page, total, count)
                }}
            </span>
            <button
                class="pagination-btn"
                style=btn_style
                on:click=move |_| {
                    let page = current_page.get();
                    let total = total_pages.get();
                    if page < total {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || {
                    let total = total_pages.get();
                    total == 0 || current_page.get() >= total
                }
            >
                "다음 >"
            </button>
        </div>
    }
}

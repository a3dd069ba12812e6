use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    let link_style = "display: block; padding: 10px 16px; color: #dee2e6; text-decoration: none; border-radius: 4px; font-size: 0.9rem;";

    view! {
        <aside style="width: 220px; background: #212529; padding: 16px 12px; flex-shrink: 0;">
            <div style="color: white; font-weight: bold; font-size: 1.05rem; padding: 8px 16px 20px 16px;">
                "공동주택 통합관리"
            </div>
            <nav>
                <A href="/bids" attr:style=link_style>"입찰공고 게시판"</A>
                <A href="/stats/regional-average" attr:style=link_style>"관리비 지역별 평균"</A>
            </nav>
        </aside>
    }
}

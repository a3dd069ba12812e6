use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::b001_bid_notice::ui::details::BidNoticeDetailPage;
use crate::domain::b001_bid_notice::ui::list::BidNoticeListPage;
use crate::domain::r100_regional_stats::ui::RegionalAveragePage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p style="padding: 24px;">"페이지를 찾을 수 없습니다."</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/bids" /> } />
                    <Route path=path!("/bids") view=BidNoticeListPage />
                    <Route path=path!("/bids/:sn") view=BidNoticeDetailPage />
                    <Route path=path!("/stats/regional-average") view=RegionalAveragePage />
                </Routes>
            </Shell>
        </Router>
    }
}

/// Everything behind the session gate; unauthenticated visitors only ever
/// see the login page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

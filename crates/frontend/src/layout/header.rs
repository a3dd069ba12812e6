use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::use_auth, storage};

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let user_label = move || {
        auth_state
            .get()
            .user_info
            .map(|u| {
                let name = u.display_name.unwrap_or(u.username);
                match u.department {
                    Some(dept) => format!("{} · {}", dept, name),
                    None => name,
                }
            })
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        spawn_local(async move {
            // best effort: revoke server-side, always drop the local session
            if let Some(refresh_token) = storage::get_refresh_token() {
                let _ = api::logout(refresh_token).await;
            }
            storage::clear_tokens();
            set_auth_state.set(Default::default());
        });
    };

    view! {
        <header style="display: flex; justify-content: flex-end; align-items: center; gap: 16px; background: white; border-bottom: 1px solid #dee2e6; padding: 10px 24px;">
            <span style="font-size: 0.875rem; color: #495057;">{user_label}</span>
            <button
                on:click=on_logout
                style="padding: 6px 14px; border: 1px solid #ced4da; border-radius: 4px; background: white; color: #495057; font-size: 0.8rem; cursor: pointer;"
            >
                "로그아웃"
            </button>
        </header>
    }
}

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::system::auth::{api, context::use_auth, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    storage::save_tokens(&response.access_token, &response.refresh_token);

                    // switching the auth state swaps the login page for the shell
                    set_auth_state.set(crate::system::auth::context::AuthState {
                        access_token: Some(response.access_token),
                        user_info: Some(response.user),
                    });

                    set_is_loading.set(false);
                }
                Err(e) => {
                    log::warn!("Login failed: {:?}", e);
                    let message = match e {
                        // a 401 here means the credentials, not the session
                        ApiError::Client(401) => {
                            "아이디 또는 비밀번호를 확인해 주세요.".to_string()
                        }
                        other => other.user_message(),
                    };
                    set_error_message.set(Some(message));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container" style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f1f3f5;">
            <div class="login-box" style="background: white; padding: 40px; border-radius: 8px; box-shadow: 0 4px 16px rgba(0,0,0,0.08); width: 360px;">
                <h1 style="margin: 0 0 4px 0; font-size: 1.4rem;">"공동주택 통합관리 포털"</h1>
                <h2 style="margin: 0 0 24px 0; font-size: 1rem; color: #666; font-weight: normal;">"관리자 로그인"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message" style="margin-bottom: 16px; padding: 10px; border-radius: 4px; background: #fdecea; color: #b71c1c; font-size: 0.875rem;">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group" style="margin-bottom: 16px;">
                        <label for="username" style="display: block; margin-bottom: 4px; font-size: 0.875rem; color: #333;">"아이디"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="admin"
                            style="width: 100%; padding: 8px 10px; border: 1px solid #ced4da; border-radius: 4px;"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group" style="margin-bottom: 24px;">
                        <label for="password" style="display: block; margin-bottom: 4px; font-size: 0.875rem; color: #333;">"비밀번호"</label>
                        <input
                            type="password"
                            id="password"
                            style="width: 100%; padding: 8px 10px; border: 1px solid #ced4da; border-radius: 4px;"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        style="width: 100%; padding: 10px; background: #1971c2; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.95rem;"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "확인 중..." } else { "로그인" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

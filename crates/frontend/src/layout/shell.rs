use leptos::prelude::*;

use super::header::Header;
use super::sidebar::Sidebar;

/// Application chrome: sidebar on the left, header on top, routed content
/// in the center. Presentation only.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div style="display: flex; min-height: 100vh; background: #f8f9fa;">
            <Sidebar />
            <div style="flex: 1; display: flex; flex-direction: column; min-width: 0;">
                <Header />
                <main style="flex: 1; padding: 24px;">
                    {children()}
                </main>
            </div>
        </div>
    }
}

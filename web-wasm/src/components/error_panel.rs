//! エラー表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="error-section">
            <p class="error-text">"⚠️ "{message}</p>
        </div>
    }
}

//! 読み込み中表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-section">
            <div class="spinner"></div>
            <p class="loading-text">"聖地を検索中..."</p>
        </div>
    }
}

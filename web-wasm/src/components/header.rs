//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🗾 聖地巡礼サーチ"</h1>
            <p class="subtitle">"アニメ・映画・ドラマの舞台を探そう"</p>
        </header>
    }
}

//! 検索フォームコンポーネント

use leptos::prelude::*;
use seichi_common::SearchMode;
use web_sys::KeyboardEvent;

/// 都道府県タグ（クリックでそのまま検索）
const POPULAR_PREFECTURES: [&str; 8] = [
    "東京都", "京都府", "神奈川県", "埼玉県", "静岡県", "岐阜県", "長野県", "広島県",
];

/// オートコンプリート候補のid
const TITLE_LIST_ID: &str = "titleList";

#[component]
pub fn SearchForm<FI, FS, FP>(
    mode: Memo<SearchMode>,
    titles: ReadSignal<Vec<String>>,
    location_value: Memo<String>,
    title_value: Memo<String>,
    on_input: FI,
    on_search: FS,
    on_search_prefecture: FP,
) -> impl IntoView
where
    FI: Fn(SearchMode, String) + 'static + Clone + Send,
    FS: Fn(()) + 'static + Clone + Send,
    FP: Fn(String) + 'static + Clone + Send,
{
    // Enterキーで検索
    let on_keypress = {
        let on_search = on_search.clone();
        move |ev: KeyboardEvent| {
            if ev.key() == "Enter" {
                on_search(());
            }
        }
    };

    view! {
        <div class="search-form" class:active=move || mode.get() == SearchMode::ByLocation>
            <div class="input-group">
                <input
                    type="text"
                    placeholder="例: 東京都、京都府、埼玉県..."
                    prop:value=move || location_value.get()
                    on:input={
                        let on_input = on_input.clone();
                        move |ev| on_input(SearchMode::ByLocation, event_target_value(&ev))
                    }
                    on:keypress=on_keypress.clone()
                />
                <button
                    class="search-button"
                    on:click={
                        let on_search = on_search.clone();
                        move |_| on_search(())
                    }
                >
                    "🔍 検索"
                </button>
            </div>
            <div class="prefecture-tags">
                {POPULAR_PREFECTURES
                    .into_iter()
                    .map(|name| {
                        let on_search_prefecture = on_search_prefecture.clone();
                        view! {
                            <span
                                class="prefecture-tag"
                                on:click=move |_| on_search_prefecture(name.to_string())
                            >
                                {name}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>

        <div class="search-form" class:active=move || mode.get() == SearchMode::ByTitle>
            <div class="input-group">
                <input
                    type="text"
                    list=TITLE_LIST_ID
                    placeholder="例: 君の名は。、らき☆すた..."
                    prop:value=move || title_value.get()
                    on:input={
                        let on_input = on_input.clone();
                        move |ev| on_input(SearchMode::ByTitle, event_target_value(&ev))
                    }
                    on:keypress=on_keypress
                />
                <button
                    class="search-button"
                    on:click={
                        let on_search = on_search.clone();
                        move |_| on_search(())
                    }
                >
                    "🔍 検索"
                </button>
            </div>
            <datalist id=TITLE_LIST_ID>
                <For
                    each=move || titles.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=|(_, title)| view! { <option value=title></option> }
                />
            </datalist>
        </div>
    }
}

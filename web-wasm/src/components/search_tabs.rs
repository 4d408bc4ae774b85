//! 検索タブコンポーネント

use leptos::prelude::*;
use seichi_common::SearchMode;

#[component]
pub fn SearchTabs<F>(mode: Memo<SearchMode>, on_switch: F) -> impl IntoView
where
    F: Fn(SearchMode) + 'static + Clone + Send,
{
    view! {
        <div class="search-tabs">
            {SearchMode::ALL
                .into_iter()
                .map(|tab| {
                    let on_switch = on_switch.clone();
                    view! {
                        <button
                            class="tab-button"
                            class:active=move || mode.get() == tab
                            on:click=move |_| on_switch(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

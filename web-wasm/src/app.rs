//! メインアプリケーションコンポーネント

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use seichi_common::{ApiConfig, Completion, PendingSearch, SearchController, SearchMode, UiState};

use crate::api::seichi::{load_titles, search_seichi};
use crate::components::{
    header::Header,
    search_tabs::SearchTabs,
    search_form::SearchForm,
    loading_indicator::LoadingIndicator,
    error_panel::ErrorPanel,
    result_section::ResultSection,
};

/// 検索リクエストを送り、レスポンスをコントローラに反映する
fn dispatch(
    controller: RwSignal<SearchController>,
    config: StoredValue<ApiConfig>,
    pending: Option<PendingSearch>,
) {
    let Some(pending) = pending else {
        return;
    };
    let url = config.with_value(|c| c.search_url(&pending.query));

    spawn_local(async move {
        let outcome = search_seichi(&url).await;
        if let Err(err) = &outcome {
            console::error!("検索エラー:", err.to_string());
        }

        let completion = controller.try_update(|c| c.complete(pending.token, outcome));
        if completion == Some(Completion::Stale) {
            console::log!(format!("古い検索結果を破棄: {}", url));
        }
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = StoredValue::new(ApiConfig::default());
    let controller = RwSignal::new(SearchController::new());
    let (titles, set_titles) = signal(Vec::<String>::new());

    // 作品名一覧の先読み
    spawn_local(async move {
        let loaded = load_titles(&config.get_value()).await;
        set_titles.set(loaded);
    });

    let mode = Memo::new(move |_| controller.with(|c| c.mode()));
    let state = Memo::new(move |_| controller.with(|c| c.state().clone()));
    let location_value = Memo::new(move |_| {
        controller.with(|c| c.input(SearchMode::ByLocation).to_string())
    });
    let title_value = Memo::new(move |_| {
        controller.with(|c| c.input(SearchMode::ByTitle).to_string())
    });

    // タブ切り替えハンドラ
    let on_switch = move |mode: SearchMode| {
        controller.update(|c| c.switch_tab(mode));
    };

    // 入力ハンドラ
    let on_input = move |mode: SearchMode, value: String| {
        controller.update(|c| c.set_input(mode, value));
    };

    // 検索ハンドラ
    let on_search = move |_| {
        let pending = controller.try_update(|c| c.search()).flatten();
        dispatch(controller, config, pending);
    };

    // 都道府県タグ
    let on_search_prefecture = move |name: String| {
        let pending = controller
            .try_update(|c| c.search_by_prefecture(&name))
            .flatten();
        dispatch(controller, config, pending);
    };

    // 作品名タグ
    let on_search_title = move |name: String| {
        let pending = controller.try_update(|c| c.search_by_title(&name)).flatten();
        dispatch(controller, config, pending);
    };

    view! {
        <div class="container">
            <Header />

            <div class="search-section">
                <SearchTabs mode=mode on_switch=on_switch />

                <SearchForm
                    mode=mode
                    titles=titles
                    location_value=location_value
                    title_value=title_value
                    on_input=on_input
                    on_search=on_search
                    on_search_prefecture=on_search_prefecture
                />
            </div>

            <Show when=move || state.with(UiState::is_loading)>
                <LoadingIndicator />
            </Show>

            {move || {
                state.with(|s| s.error_message().map(str::to_string)).map(|message| {
                    view! { <ErrorPanel message=message /> }
                })
            }}

            {move || {
                state.with(|s| s.results().cloned()).map(|result| {
                    view! { <ResultSection result=result on_search_title=on_search_title /> }
                })
            }}
        </div>
    }
}

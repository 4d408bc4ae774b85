//! 検索結果コンポーネント（統計 + 聖地カード一覧）

use leptos::prelude::*;
use seichi_common::{SearchResult, SearchStats};
use crate::components::seichi_grid::SeichiGrid;

#[component]
pub fn ResultSection<F>(result: SearchResult, on_search_title: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let stats = SearchStats::from_result(&result);

    view! {
        <div class="result-section">
            <StatsPanel stats=stats />
            <SeichiGrid records=result.seichi_list on_search_title=on_search_title />
        </div>
    }
}

#[component]
fn StatsPanel(stats: SearchStats) -> impl IntoView {
    view! {
        <div class="stats-section">
            <div class="stat-item">
                <div class="stat-number">{stats.total}</div>
                <div>"発見された聖地"</div>
            </div>
            <div class="stat-item">
                <div class="stat-number">{stats.anime}</div>
                <div>"アニメ作品"</div>
            </div>
            <div class="stat-item">
                <div class="stat-number">{stats.movie_drama}</div>
                <div>"映画・ドラマ"</div>
            </div>
        </div>
    }
}

//! 聖地カード一覧コンポーネント

use leptos::prelude::*;
use seichi_common::{SeichiCard, SeichiRecord};

#[component]
pub fn SeichiGrid<F>(records: Vec<SeichiRecord>, on_search_title: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="seichi-grid">
            {records
                .iter()
                .map(|record| {
                    let on_search_title = on_search_title.clone();
                    view! { <SeichiCardView card=SeichiCard::from(record) on_search_title=on_search_title /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SeichiCardView<F>(card: SeichiCard, on_search_title: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let tag_class = card.tag_class();
    let title = card.title.clone();

    view! {
        <div class="seichi-card">
            <h3>
                <span class="emoji">{card.emoji}</span>
                <span
                    class="title-link"
                    on:click=move |_| on_search_title(title.clone())
                >
                    {card.title}
                </span>
                <span class=tag_class>{card.category}</span>
            </h3>
            <div class="location-name">{card.location}</div>
            <div class="description">{card.description}</div>
            <div class="access-info">{card.access_line}</div>
            {card.famous_scene_line.map(|line| view! { <div class="famous-scene">{line}</div> })}
        </div>
    }
}

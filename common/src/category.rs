//! カテゴリー判定
//!
//! カテゴリー文字列は自由記述のため、部分一致のルール表を上から順に評価する。
//! 複合カテゴリー（アニメ映画）は単独の「アニメ」「映画」より先に判定する。

/// アニメを示す文字列
pub const ANIME_MARKER: &str = "アニメ";
/// 映画を示す文字列
pub const MOVIE_MARKER: &str = "映画";
/// ドラマを示す文字列
pub const DRAMA_MARKER: &str = "ドラマ";
/// アニメ映画を示す文字列
pub const ANIME_MOVIE_MARKER: &str = "アニメ映画";

/// カードに付けるCSSクラスと絵文字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub class: &'static str,
    pub emoji: &'static str,
}

/// 判定ルール（パターン, スタイル）
pub const CATEGORY_RULES: &[(&str, CategoryStyle)] = &[
    (ANIME_MOVIE_MARKER, CategoryStyle { class: "anime-movie-tag", emoji: "🎬" }),
    (ANIME_MARKER, CategoryStyle { class: "anime-tag", emoji: "📺" }),
    (MOVIE_MARKER, CategoryStyle { class: "movie-tag", emoji: "🎬" }),
    (DRAMA_MARKER, CategoryStyle { class: "drama-tag", emoji: "📺" }),
];

/// どのルールにも一致しない場合
pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle {
    class: "anime-tag",
    emoji: "🌟",
};

/// カテゴリー文字列からスタイルを決定
pub fn classify(category: &str) -> CategoryStyle {
    CATEGORY_RULES
        .iter()
        .find(|(pattern, _)| category.contains(pattern))
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}

//! 検索結果の統計

use crate::category::{ANIME_MARKER, DRAMA_MARKER, MOVIE_MARKER};
use crate::types::SearchResult;

/// 統計欄に表示する数値
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 発見された聖地
    pub total: u64,
    /// アニメ作品
    pub anime: usize,
    /// 映画・ドラマ（映画とドラマの件数の合計）
    pub movie_drama: usize,
}

impl SearchStats {
    pub fn from_result(result: &SearchResult) -> Self {
        let count = |marker: &str| {
            result
                .seichi_list
                .iter()
                .filter(|s| s.category.contains(marker))
                .count()
        };

        Self {
            total: result.displayed_total(),
            anime: count(ANIME_MARKER),
            movie_drama: count(MOVIE_MARKER) + count(DRAMA_MARKER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SeichiRecord;

    fn record(category: &str) -> SeichiRecord {
        SeichiRecord {
            category: category.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_stats_single_anime() {
        let result = SearchResult {
            seichi_list: vec![record("アニメ")],
            total_count: Some(1),
        };
        let stats = SearchStats::from_result(&result);
        assert_eq!(stats, SearchStats { total: 1, anime: 1, movie_drama: 0 });
    }

    #[test]
    fn test_stats_total_without_count() {
        let result = SearchResult {
            seichi_list: vec![record("映画"), record("ドラマ"), record("小説")],
            total_count: None,
        };
        let stats = SearchStats::from_result(&result);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.anime, 0);
        assert_eq!(stats.movie_drama, 2);
    }

    #[test]
    fn test_stats_counts_overlapping_markers() {
        // アニメ映画はアニメと映画の両方に数える
        let result = SearchResult {
            seichi_list: vec![record("アニメ映画"), record("映画・ドラマ")],
            total_count: None,
        };
        let stats = SearchStats::from_result(&result);
        assert_eq!(stats.anime, 1);
        assert_eq!(stats.movie_drama, 3);
    }

    #[test]
    fn test_stats_empty() {
        let stats = SearchStats::from_result(&SearchResult::default());
        assert_eq!(stats, SearchStats::default());
    }
}

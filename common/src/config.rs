//! API接続設定

use serde::Deserialize;

use crate::query::SearchQuery;

/// APIのベースパス（既定値）
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// 作品名一覧のURL
    pub fn titles_url(&self) -> String {
        format!("{}/get_titles", self.base())
    }

    /// 聖地検索のURL
    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/search_seichi?{}", self.base(), query.to_query_string())
    }

    fn base(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }
}

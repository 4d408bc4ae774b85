//! 聖地検索APIの型定義
//!
//! - SeichiRecord: 聖地1件
//! - SearchResponse: `/search_seichi` のレスポンス
//! - TitlesResponse: `/get_titles` のレスポンス
//! - SearchResult: 描画に渡す検索結果

use serde::{Deserialize, Deserializer};

use crate::error::{Error, GENERIC_RETRY_MESSAGE};

/// 聖地1件
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeichiRecord {
    pub title: String,          // 作品名
    pub location: String,       // 場所
    pub description: String,    // 説明
    pub access: String,         // アクセス
    pub category: String,       // カテゴリー（複数含む場合あり）

    /// 名シーン（空文字・nullは未設定扱い）
    #[serde(deserialize_with = "non_empty_string")]
    pub famous_scene: Option<String>,
}

/// 検索APIレスポンス
///
/// エラー時は `seichi_list` が無いことがあるため、欠落の判定は `into_result` で行う。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub error: bool,
    pub message: Option<String>,
    pub seichi_list: Option<Vec<SeichiRecord>>,
    pub total_count: Option<u64>,
}

impl SearchResponse {
    /// サーバーのエラーフラグを解釈して検索結果に変換
    pub fn into_result(self) -> Result<SearchResult, Error> {
        if self.error {
            let message = self
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_RETRY_MESSAGE.to_string());
            return Err(Error::Server(message));
        }
        let seichi_list = self
            .seichi_list
            .ok_or_else(|| Error::InvalidResponse("seichi_list がありません".to_string()))?;
        Ok(SearchResult {
            seichi_list,
            total_count: self.total_count,
        })
    }
}

/// 作品名一覧APIレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TitlesResponse {
    pub titles: Vec<String>,
    pub error: bool,
}

impl TitlesResponse {
    /// オートコンプリート候補（エラー時は空）
    pub fn into_titles(self) -> Vec<String> {
        if self.error {
            Vec::new()
        } else {
            self.titles
        }
    }
}

/// 描画用の検索結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub seichi_list: Vec<SeichiRecord>,
    pub total_count: Option<u64>,
}

impl SearchResult {
    /// 表示する総件数（total_countが無いか0なら件数で代用）
    pub fn displayed_total(&self) -> u64 {
        match self.total_count {
            Some(count) if count > 0 => count,
            _ => self.seichi_list.len() as u64,
        }
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialize() {
        let json = r#"{
            "title": "けいおん!",
            "location": "豊郷小学校旧校舎群",
            "description": "桜が丘高校のモデル",
            "access": "豊郷駅から徒歩10分",
            "category": "アニメ",
            "famous_scene": "軽音部の部室"
        }"#;

        let record: SeichiRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.title, "けいおん!");
        assert_eq!(record.category, "アニメ");
        assert_eq!(record.famous_scene.as_deref(), Some("軽音部の部室"));
    }

    #[test]
    fn test_record_deserialize_missing_fields() {
        let json = r#"{"title": "最小"}"#;

        let record: SeichiRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.title, "最小");
        assert_eq!(record.access, "");
        assert_eq!(record.famous_scene, None);
    }

    #[test]
    fn test_record_famous_scene_null_or_empty() {
        let record: SeichiRecord =
            serde_json::from_str(r#"{"famous_scene": null}"#).expect("デシリアライズ失敗");
        assert_eq!(record.famous_scene, None);

        let record: SeichiRecord =
            serde_json::from_str(r#"{"famous_scene": ""}"#).expect("デシリアライズ失敗");
        assert_eq!(record.famous_scene, None);
    }

    #[test]
    fn test_search_response_error_flag() {
        let json = r#"{"error": true, "message": "該当なし"}"#;
        let response: SearchResponse = serde_json::from_str(json).expect("デシリアライズ失敗");

        let err = response.into_result().unwrap_err();
        assert!(matches!(err, Error::Server(ref m) if m == "該当なし"));
    }

    #[test]
    fn test_search_response_error_without_message() {
        let response = SearchResponse {
            error: true,
            ..Default::default()
        };
        let err = response.into_result().unwrap_err();
        assert_eq!(err.user_message(), GENERIC_RETRY_MESSAGE);
    }

    #[test]
    fn test_search_response_success() {
        let json = r#"{
            "error": false,
            "seichi_list": [{"title": "A", "category": "アニメ"}],
            "total_count": 1
        }"#;
        let response: SearchResponse = serde_json::from_str(json).expect("デシリアライズ失敗");

        let result = response.into_result().expect("検索結果の変換失敗");
        assert_eq!(result.seichi_list.len(), 1);
        assert_eq!(result.displayed_total(), 1);
    }

    #[test]
    fn test_search_response_missing_list() {
        let json = r#"{"detail": "Internal Server Error"}"#;
        let response: SearchResponse = serde_json::from_str(json).expect("デシリアライズ失敗");

        let err = response.into_result().unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
        assert_eq!(err.user_message(), GENERIC_RETRY_MESSAGE);
    }

    #[test]
    fn test_search_response_empty_list_is_ok() {
        let json = r#"{"error": false, "seichi_list": []}"#;
        let response: SearchResponse = serde_json::from_str(json).expect("デシリアライズ失敗");

        let result = response.into_result().expect("検索結果の変換失敗");
        assert!(result.seichi_list.is_empty());
    }

    #[test]
    fn test_displayed_total_falls_back_to_len() {
        let result = SearchResult {
            seichi_list: vec![SeichiRecord::default(); 3],
            total_count: None,
        };
        assert_eq!(result.displayed_total(), 3);

        let result = SearchResult {
            seichi_list: vec![SeichiRecord::default(); 2],
            total_count: Some(0),
        };
        assert_eq!(result.displayed_total(), 2);
    }

    #[test]
    fn test_displayed_total_prefers_server_count() {
        let result = SearchResult {
            seichi_list: vec![SeichiRecord::default(); 2],
            total_count: Some(40),
        };
        assert_eq!(result.displayed_total(), 40);
    }

    #[test]
    fn test_titles_response() {
        let json = r#"{"titles": ["君の名は。", "らき☆すた"]}"#;
        let response: TitlesResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.into_titles(), vec!["君の名は。", "らき☆すた"]);

        let json = r#"{"titles": ["x"], "error": true}"#;
        let response: TitlesResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(response.into_titles().is_empty());
    }
}

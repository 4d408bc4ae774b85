//! 検索モードと検索クエリ
//!
//! 入力値のトリム・空チェックと、`encodeURIComponent` 互換のエンコードを行う。

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use crate::error::{Error, Result};

/// `encodeURIComponent` がエスケープしない記号を除いた集合
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 検索モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// 都道府県・地名で検索
    #[default]
    ByLocation,
    /// 作品名で検索
    ByTitle,
}

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [SearchMode::ByLocation, SearchMode::ByTitle];

    /// APIのクエリパラメータ名
    pub fn param_name(&self) -> &'static str {
        match self {
            SearchMode::ByLocation => "prefecture",
            SearchMode::ByTitle => "title",
        }
    }

    /// 入力が空のときのメッセージ
    pub fn empty_input_message(&self) -> &'static str {
        match self {
            SearchMode::ByLocation => "都道府県名を入力してください",
            SearchMode::ByTitle => "作品名を入力してください",
        }
    }

    /// タブの表示名
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::ByLocation => "📍 都道府県から探す",
            SearchMode::ByTitle => "🎬 作品名から探す",
        }
    }
}

/// 検証済みの検索クエリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    mode: SearchMode,
    value: String,
}

impl SearchQuery {
    /// 入力値をトリムしてクエリを作る
    ///
    /// 空（空白のみを含む）の場合は `Error::EmptyInput` を返す。
    pub fn new(mode: SearchMode, raw: &str) -> Result<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(Error::EmptyInput(mode));
        }
        Ok(Self {
            mode,
            value: value.to_string(),
        })
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// `prefecture=...` / `title=...` 形式のクエリ文字列
    pub fn to_query_string(&self) -> String {
        format!(
            "{}={}",
            self.mode.param_name(),
            encode_uri_component(&self.value)
        )
    }
}

/// `encodeURIComponent` と同じ規則でエンコード
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

//! 検索コントローラ
//!
//! 画面の状態（検索モード・入力値・表示状態）を1つのオブジェクトで持つ。
//! 通信はここでは行わず、`search()` が返す `PendingSearch` を呼び出し側が
//! 実行し、結果を `complete()` に渡す。
//!
//! 検索を開始するたびに世代番号を進め、古い世代のレスポンスは捨てる。
//! 後から開始した検索の結果だけが画面に反映される。

use crate::error::{Error, Result};
use crate::query::{SearchMode, SearchQuery};
use crate::types::{SearchResponse, SearchResult};

/// 画面の表示状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    ShowingResults(SearchResult),
    ShowingError(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn results(&self) -> Option<&SearchResult> {
        match self {
            UiState::ShowingResults(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::ShowingError(message) => Some(message),
            _ => None,
        }
    }
}

/// 実行待ちの検索リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub token: u64,
    pub query: SearchQuery,
}

/// レスポンス反映の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// 新しい検索が始まっていたため破棄した
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct SearchController {
    mode: SearchMode,
    location_input: String,
    title_input: String,
    state: UiState,
    generation: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn input(&self, mode: SearchMode) -> &str {
        match mode {
            SearchMode::ByLocation => &self.location_input,
            SearchMode::ByTitle => &self.title_input,
        }
    }

    pub fn set_input(&mut self, mode: SearchMode, value: impl Into<String>) {
        let value = value.into();
        match mode {
            SearchMode::ByLocation => self.location_input = value,
            SearchMode::ByTitle => self.title_input = value,
        }
    }

    /// タブ切り替え
    ///
    /// 結果とエラーの表示を消す。通信中の表示はそのまま残す。
    pub fn switch_tab(&mut self, mode: SearchMode) {
        self.mode = mode;
        if !self.state.is_loading() {
            self.state = UiState::Idle;
        }
    }

    /// 現在のモードの入力値で検索を開始
    ///
    /// 入力が空ならエラー表示にして `None` を返す（通信しない）。
    pub fn search(&mut self) -> Option<PendingSearch> {
        match SearchQuery::new(self.mode, self.input(self.mode)) {
            Ok(query) => {
                self.generation += 1;
                self.state = UiState::Loading;
                Some(PendingSearch {
                    token: self.generation,
                    query,
                })
            }
            Err(err) => {
                self.state = UiState::ShowingError(err.user_message());
                None
            }
        }
    }

    /// 都道府県タグから検索
    pub fn search_by_prefecture(&mut self, name: &str) -> Option<PendingSearch> {
        self.search_with(SearchMode::ByLocation, name)
    }

    /// 作品名タグから検索
    pub fn search_by_title(&mut self, name: &str) -> Option<PendingSearch> {
        self.search_with(SearchMode::ByTitle, name)
    }

    fn search_with(&mut self, mode: SearchMode, value: &str) -> Option<PendingSearch> {
        self.set_input(mode, value);
        self.switch_tab(mode);
        self.search()
    }

    /// 検索レスポンスを反映
    pub fn complete(&mut self, token: u64, outcome: Result<SearchResponse>) -> Completion {
        if token != self.generation {
            return Completion::Stale;
        }

        self.state = match outcome.and_then(SearchResponse::into_result) {
            Ok(result) => UiState::ShowingResults(result),
            Err(err) => UiState::ShowingError(err.user_message()),
        };
        Completion::Applied
    }

    /// 通信失敗を反映
    pub fn fail(&mut self, token: u64, err: Error) -> Completion {
        self.complete(token, Err(err))
    }
}

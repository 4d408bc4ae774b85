//! Seichi Search Common Library
//!
//! 聖地検索画面の状態管理・API型・表示ルール（WASM非依存）

pub mod types;
pub mod query;
pub mod category;
pub mod stats;
pub mod card;
pub mod config;
pub mod controller;
pub mod error;

pub use types::{SeichiRecord, SearchResponse, SearchResult, TitlesResponse};
pub use query::{SearchMode, SearchQuery};
pub use category::{classify, CategoryStyle};
pub use stats::SearchStats;
pub use card::SeichiCard;
pub use config::ApiConfig;
pub use controller::{Completion, PendingSearch, SearchController, UiState};
pub use error::{Error, Result, GENERIC_RETRY_MESSAGE};

//! エラー型定義

use thiserror::Error;

use crate::query::SearchMode;

/// 通信エラー時にユーザーへ表示する汎用メッセージ
pub const GENERIC_RETRY_MESSAGE: &str =
    "通信エラーが発生しました。しばらくしてから再度お試しください。";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 入力欄が空（空白のみを含む）
    #[error("{}", .0.empty_input_message())]
    EmptyInput(SearchMode),

    /// サーバーが `error: true` を返した
    #[error("{0}")]
    Server(String),

    /// レスポンスに必要な項目が無い
    #[error("レスポンス形式が不正: {0}")]
    InvalidResponse(String),

    /// fetch失敗・HTTPステータス異常
    #[error("通信エラー: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 画面に表示するメッセージ
    ///
    /// 通信系のエラーは原因を隠し、汎用メッセージに置き換える。
    pub fn user_message(&self) -> String {
        match self {
            Error::EmptyInput(_) | Error::Server(_) => self.to_string(),
            Error::InvalidResponse(_) | Error::Transport(_) | Error::Json(_) => {
                GENERIC_RETRY_MESSAGE.to_string()
            }
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

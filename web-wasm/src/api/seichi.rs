//! 聖地検索API呼び出し
//!
//! `/get_titles`: 作品名一覧（オートコンプリート用）
//! `/search_seichi`: 聖地検索

use gloo::console;
use seichi_common::{ApiConfig, Error, Result, SearchResponse, TitlesResponse};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// GETしてJSONを読み込む（共通処理）
///
/// HTTPステータスが異常でも本文のJSONを読む。
/// サーバーは `error: true` を本文に入れて返すことがある。
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let request = build_request(url)?;

    let window = web_sys::window()
        .ok_or_else(|| Error::Transport("windowが取得できません".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        console::warn!(format!("API status {}: {}", resp.status(), url));
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::Transport(format!("レスポンス形式が不正: {}", e)))
}

/// GETリクエストを組み立てる（ベースパスが別オリジンでも通るようCORS）
fn build_request(url: &str) -> Result<Request> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;
    Ok(request)
}

/// 作品名一覧を取得
///
/// 失敗してもエラーは表示せず、コンソールに出して空のリストを返す。
pub async fn load_titles(config: &ApiConfig) -> Vec<String> {
    match fetch_json::<TitlesResponse>(&config.titles_url()).await {
        Ok(response) => {
            if response.error {
                console::error!("タイトルリストの読み込みエラー: サーバーがエラーを返しました");
            }
            response.into_titles()
        }
        Err(err) => {
            console::error!("タイトルリストの読み込みエラー:", err.to_string());
            Vec::new()
        }
    }
}

/// 聖地検索
pub async fn search_seichi(url: &str) -> Result<SearchResponse> {
    fetch_json(url).await
}

/// JavaScript側の例外をエラー型に変換
fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(message)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_js_error_from_string() {
        let err = js_error(JsValue::from_str("Failed to fetch"));
        assert!(matches!(err, Error::Transport(ref m) if m == "Failed to fetch"));
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_from_error_object() {
        let err = js_error(js_sys::Error::new("NetworkError").into());
        assert!(matches!(err, Error::Transport(ref m) if m == "NetworkError"));
        assert_eq!(err.user_message(), seichi_common::GENERIC_RETRY_MESSAGE);
    }

    #[wasm_bindgen_test]
    fn wasm_search_response_from_js_value() {
        let value = js_sys::JSON::parse(
            r#"{"error":false,"seichi_list":[{"title":"A","category":"アニメ"}],"total_count":1}"#,
        )
        .expect("JSON.parse失敗");

        let response: SearchResponse =
            serde_wasm_bindgen::from_value(value).expect("変換失敗");
        assert_eq!(response.seichi_list.len(), 1);
        assert_eq!(response.total_count, Some(1));
    }

    #[wasm_bindgen_test]
    fn wasm_request_uses_cors_mode() {
        let config = ApiConfig::new("https://example.com/api");
        let request = build_request(&config.titles_url()).expect("リクエスト作成失敗");
        assert_eq!(request.mode(), RequestMode::Cors);
        assert_eq!(request.method(), "GET");
        assert_eq!(request.url(), "https://example.com/api/get_titles");
    }

    #[wasm_bindgen_test]
    async fn wasm_load_titles_failure_returns_empty() {
        // テストサーバーに存在しないパス（JSONが返らない）
        let config = ApiConfig::new("/__seichi_missing__/api");
        let titles = load_titles(&config).await;
        assert!(titles.is_empty());
    }

    #[wasm_bindgen_test]
    async fn wasm_search_failure_is_transport_error() {
        let config = ApiConfig::new("/__seichi_missing__/api");
        let err = search_seichi(&format!("{}/search_seichi?title=x", config.base_path))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), seichi_common::GENERIC_RETRY_MESSAGE);
    }
}

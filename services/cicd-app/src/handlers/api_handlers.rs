use std::any::Any;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use common::{ErrorResponse, HealthResponse, STATUS_HEALTHY};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::ServiceConfig;

pub type SharedConfig = Arc<ServiceConfig>;

pub const WELCOME_MESSAGE: &str = "Welcome to the CI/CD Learning App";
pub const DEFAULT_GREETING_NAME: &str = "World";

/// ビルドに使われた rustc のバージョン（例: "1.80.1"）
pub const RUNTIME_VERSION: &str = env!("RUSTC_VERSION");

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub hostname: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EchoResponse {
    pub echo: Value,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub version: String,
    pub hostname: String,
    pub runtime_version: String,
    pub environment: String,
}

/// GET / - アプリ情報
pub async fn root(State(config): State<SharedConfig>) -> Json<RootResponse> {
    tracing::debug!("GET /");

    Json(RootResponse {
        message: WELCOME_MESSAGE.to_string(),
        version: config.version.clone(),
        hostname: config.hostname.clone(),
        status: STATUS_HEALTHY.to_string(),
    })
}

/// GET /health - ヘルスチェック
pub async fn health(State(config): State<SharedConfig>) -> Json<HealthResponse> {
    tracing::debug!("GET /health");

    Json(HealthResponse::healthy(config.version.as_str()))
}

/// GET /api/hello - 挨拶（`name` はそのまま埋め込む）
///
/// `name` が複数ある場合は最初の値を使う。
pub async fn hello(
    State(config): State<SharedConfig>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<HelloResponse> {
    let name = first_param(&params, "name").unwrap_or(DEFAULT_GREETING_NAME);
    tracing::debug!(name, "GET /api/hello");

    Json(HelloResponse {
        message: format!("Hello, {}!", name),
        version: config.version.clone(),
    })
}

/// POST /api/echo - リクエストボディをそのまま返す
///
/// ボディが空・不正な JSON・偽値の場合はエラーにせず `{}` を返す。
pub async fn echo(State(config): State<SharedConfig>, body: Bytes) -> Json<EchoResponse> {
    let echo = parse_echo_body(&body);
    tracing::debug!(body_len = body.len(), "POST /api/echo");

    Json(EchoResponse {
        echo,
        version: config.version.clone(),
    })
}

/// GET /api/info - 実行環境情報
pub async fn info(State(config): State<SharedConfig>) -> Json<InfoResponse> {
    tracing::debug!("GET /api/info");

    Json(InfoResponse {
        version: config.version.clone(),
        hostname: config.hostname.clone(),
        runtime_version: RUNTIME_VERSION.to_string(),
        environment: config.environment.clone(),
    })
}

/// 未登録ルート
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(%uri, "route not found");

    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found")))
}

/// ハンドラ内の panic を 500 に変換する
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal Server Error")),
    )
        .into_response()
}

fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

pub(crate) fn parse_echo_body(body: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) if is_truthy(&value) => value,
        _ => Value::Object(Map::new()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

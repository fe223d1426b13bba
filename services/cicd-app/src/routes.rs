use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::ServiceConfig;
use crate::handlers::{echo, handle_panic, health, hello, info, not_found, root, SharedConfig};

/// 全ルートを登録したルーターを構築する
pub fn create_router(config: ServiceConfig) -> Router {
    let state: SharedConfig = Arc::new(config);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/hello", get(hello))
        .route("/api/echo", post(echo))
        .route("/api/info", get(info))
        // JSON の ErrorResponse を返すのは 404 と panic 時の 500 のみ。
        // 405 や axum 抽出器の拒否（413 など）は axum 標準のテキスト/空ボディのまま。
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ヘルスチェック時のステータス値
pub const STATUS_HEALTHY: &str = "healthy";

/// 共有型: ヘルスチェックレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: STATUS_HEALTHY.to_string(),
            version: version.into(),
        }
    }
}

/// 共有型: エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// tracing初期化
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serializes_status_and_version() {
        let value = serde_json::to_value(HealthResponse::healthy("1.2.3")).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "status": "healthy", "version": "1.2.3" })
        );
    }

    #[test]
    fn test_error_response_shape() {
        let value = serde_json::to_value(ErrorResponse::new("Not Found")).unwrap();

        assert_eq!(value, serde_json::json!({ "error": "Not Found" }));
    }
}

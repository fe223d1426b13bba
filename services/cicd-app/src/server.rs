use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::error::StartupError;

/// 設定されたポートで待ち受けを開始する
pub async fn bind(config: &ServiceConfig) -> Result<TcpListener, StartupError> {
    let addr = config.bind_addr();

    TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

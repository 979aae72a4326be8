use anyhow::Context;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let mut config = mock_server::Config::default();
    if let Ok(bytes) = std::env::var("PAYLOAD_BYTES") {
        config.payload_len = bytes
            .parse()
            .with_context(|| format!("PAYLOAD_BYTES is not a byte count: {bytes}"))?;
    }

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    log::info!("listening on {addr} (payload {} bytes)", config.payload_len);
    mock_server::run_with(listener, config).await?;
    Ok(())
}

use anyhow::Context;
use sentence_search::config::ServerConfig;
use sentence_search::http::router;
use sentence_search::search::TextIndex;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?.with_args(std::env::args().skip(1))?;

    // 1. Corpus + index, before any route exists:
    let index = TextIndex::load(&config.corpus_path).with_context(|| {
        format!("cannot start without corpus {}", config.corpus_path.display())
    })?;
    tracing::info!("Corpus ready: {} bytes", index.len());

    // 2. HTTP Router:
    let app = router(Arc::new(index));

    // 3. Start HTTP server:
    let bind_addr = config.bind_addr();
    tracing::info!("Listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

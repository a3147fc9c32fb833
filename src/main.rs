use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use news_verifier::{
    api::routes::create_router,
    config::Config,
    extract::HttpArticleExtractor,
    llm::OpenAiJudge,
    search::{GNewsClient, NewsApiClient, SearchProvider},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    let server_addr = config.server_addr;

    // One pooled client shared by every outbound collaborator.
    let client = ClientBuilder::new()
        .timeout(config.http_timeout)
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .user_agent(concat!("news-verifier/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let search_providers: Vec<Arc<dyn SearchProvider>> = vec![
        Arc::new(GNewsClient::new(client.clone(), config.gnews_api_key.clone())),
        Arc::new(NewsApiClient::new(client.clone(), config.newsapi_key.clone())),
    ];

    let app_state = AppState {
        extractor: Arc::new(HttpArticleExtractor::new(client.clone())),
        search_providers,
        judge: Arc::new(OpenAiJudge::new(client, config.openai_api_key.clone())),
        config: Arc::new(config),
    };

    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;
    info!(%server_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

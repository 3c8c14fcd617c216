mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    match config.auth_api_url.as_deref() {
        Some(url) => tracing::info!(%url, "relaying auth requests"),
        None => tracing::warn!("AUTH_API_URL not set; /login and /signup will answer 503"),
    }

    let state = state::AppState::new(&config).expect("http client init failed");
    let app = routes::app(state).expect("leptos configuration failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "auth host listening");
    axum::serve(listener, app).await.expect("server failed");
}

use worklink_api::{app, config};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up SECURITY_*_SECRET, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Worklink API in {:?} mode", config.environment);

    // Outside development the token secrets must come from the environment
    if !matches!(config.environment, config::Environment::Development)
        && (config.security.user_token_secret.is_empty()
            || config.security.server_token_secret.is_empty())
    {
        panic!("SECURITY_USER_TOKEN_SECRET and SECURITY_SERVER_TOKEN_SECRET must be set");
    }

    // Allow tests or deployments to override port via env
    let port = std::env::var("WORKLINK_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Worklink API listening on http://{}", bind_addr);

    axum::serve(listener, app()).await.expect("server");
}

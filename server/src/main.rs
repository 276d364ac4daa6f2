mod config;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;
use std::time::Duration;

use services::session::{SessionRegistry, spawn_prune_task};
use services::supabase::SupabaseClient;

const SESSION_PRUNE_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let supabase = Arc::new(SupabaseClient::new(&config.supabase).expect("supabase client init failed"));
    tracing::info!(url = %config.supabase.url, session_write = ?config.session_write, "supabase client initialized");

    let sessions = SessionRegistry::new(config.session_ttl);
    let _pruner = spawn_prune_task(sessions.clone(), SESSION_PRUNE_INTERVAL);

    let state = state::AppState::new(
        supabase.clone(),
        supabase,
        sessions,
        config.session_write,
        config.cookie_secure,
    );

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "teller desk listening");
    axum::serve(listener, app).await.expect("server failed");
}

mod routes;
mod services;
mod state;

use std::time::Duration as StdDuration;

use time::Duration;

use crate::services::admin::AdminConfig;
use crate::services::contact::ContactMailer;

/// How often the expired-session sweep runs.
const PURGE_INTERVAL: StdDuration = StdDuration::from_secs(15 * 60);

const DEFAULT_SESSION_TTL_MINUTES: i64 = 12 * 60;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let session_ttl = std::env::var("SESSION_TTL_MINUTES")
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(DEFAULT_SESSION_TTL_MINUTES);

    // Optional capabilities: the site still serves without either, with the
    // matching endpoints reporting themselves unavailable.
    let admin = AdminConfig::from_env();
    if admin.is_none() {
        tracing::warn!("ADMIN_EMAIL / ADMIN_PASSWORD_SHA256 not set — sign-in disabled");
    }
    let mailer = ContactMailer::from_env();
    if mailer.is_none() {
        tracing::warn!("RESEND_API_KEY / CONTACT_FROM / CONTACT_TO not set — contact delivery disabled");
    }

    let state = state::AppState::new(Duration::minutes(session_ttl), admin, mailer);

    // Background sweep keeps the in-memory session map bounded.
    let sessions = state.sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let removed = sessions.purge_expired();
            if removed > 0 {
                tracing::debug!(%removed, "purged expired sessions");
            }
        }
    });

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "marlowe site listening");
    axum::serve(listener, app).await.expect("server failed");
}

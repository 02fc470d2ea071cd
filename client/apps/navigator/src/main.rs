//! Navigator Entry Point
//!
//! Wires transport, identity provider, session store and navigation guard
//! from the environment, then resolves the paths given on the command line.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use kernel::error::app_error::AppResult;
use platform::api_client::ApiClient;
use platform::config::TransportConfig;
use platform::cookie::split_cookie_list;
use session::{
    HttpIdentityProvider, Identity, NavigationGuard, Navigator, RouteTable, SessionConfig,
    SessionStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Read an environment variable, treating "unset" as `None`
fn optional_var(name: &str) -> AppResult<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn transport_config() -> AppResult<TransportConfig> {
    let mut config = if cfg!(debug_assertions) {
        TransportConfig::development()
    } else {
        TransportConfig::default()
    };

    if let Some(base_url) = optional_var("API_BASE_URL")? {
        config.base_url = base_url;
    }
    if let Some(identity_path) = optional_var("IDENTITY_PATH")? {
        config.identity_path = identity_path;
    }
    Ok(config)
}

fn session_config() -> AppResult<SessionConfig> {
    let mut config = if cfg!(debug_assertions) {
        SessionConfig::development()
    } else {
        SessionConfig::default()
    };

    if let Some(timeout_ms) = optional_var("VERIFY_TIMEOUT_MS")? {
        let timeout_ms: u64 = timeout_ms.trim().parse()?;
        config.verify_timeout = Duration::from_millis(timeout_ms);
    }
    Ok(config)
}

fn render_identity(identity: &Identity) -> AppResult<String> {
    Ok(serde_json::to_string(identity)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "navigator=info,session=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let transport_config = transport_config()?;
    let session_config = session_config()?;

    tracing::info!(
        base_url = %transport_config.base_url,
        identity_path = %transport_config.identity_path,
        verify_timeout_ms = session_config.verify_timeout_ms(),
        "Navigator configured"
    );

    // Transport with credentials seeded from the environment
    let client = ApiClient::new(transport_config)?;
    if let Some(cookies) = optional_var("SESSION_COOKIE")? {
        let cookies = split_cookie_list(&cookies);
        tracing::debug!(count = cookies.len(), "Seeding cookie jar");
        for cookie in &cookies {
            client.add_cookie_str(cookie);
        }
    }

    let provider = Arc::new(HttpIdentityProvider::new(client));
    let store = SessionStore::new(provider, Arc::new(session_config));
    let guard = NavigationGuard::new(store.clone());
    let navigator = Navigator::new(guard, Arc::new(RouteTable::default()));

    let mut paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        paths.push("/".to_string());
    }

    // All navigations start before the session is known; they share one round-trip
    let outcomes =
        futures::future::join_all(paths.iter().map(|path| navigator.navigate("/", path))).await;

    for (path, outcome) in paths.iter().zip(outcomes) {
        println!("{path} -> {outcome}");
    }

    let state = store.snapshot();
    match state.identity() {
        Some(identity) => println!("authenticated as {}", render_identity(identity)?),
        None => println!("not authenticated"),
    }
    tracing::info!(round_trips = store.round_trips(), "Navigation finished");

    Ok(())
}

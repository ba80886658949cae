//! Startup connection to the document store.
//!
//! The connection is attempted once per process start, retrying with
//! exponential backoff. If it never succeeds the server still starts and
//! database-backed routes answer 503.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::store::{DocumentStore, MemoryStore, PostgresStore};

const MAX_BACKOFF: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub enum DatabaseState {
    Connected(Arc<dyn DocumentStore>),
    Unavailable { reason: String },
}

impl DatabaseState {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        DatabaseState::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, DatabaseState::Connected(_))
    }

    pub fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        match self {
            DatabaseState::Connected(store) => Some(store),
            DatabaseState::Unavailable { .. } => None,
        }
    }
}

impl fmt::Debug for DatabaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseState::Connected(store) => f
                .debug_tuple("Connected")
                .field(&store.backend_name())
                .finish(),
            DatabaseState::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Memory,
    Postgres,
}

fn backend_for(url: &str) -> Option<Backend> {
    let scheme = url.split("://").next().unwrap_or_default().to_lowercase();
    match scheme.as_str() {
        "memory" => Some(Backend::Memory),
        "postgres" | "postgresql" => Some(Backend::Postgres),
        _ => None,
    }
}

/// Delay before retry number `attempt` (1-based).
pub fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
    base.saturating_mul(factor).min(MAX_BACKOFF)
}

fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}

pub async fn connect(config: &DatabaseConfig) -> DatabaseState {
    let Some(url) = config.url.as_deref() else {
        tracing::warn!("DATABASE_URL is not set; persistence features are disabled");
        return DatabaseState::unavailable("no database configured");
    };

    match backend_for(url) {
        Some(Backend::Memory) => {
            tracing::warn!("using in-memory document store; data is lost on restart");
            DatabaseState::Connected(Arc::new(MemoryStore::new()))
        }
        Some(Backend::Postgres) => connect_postgres(url, config).await,
        None => {
            tracing::error!(url = %redact(url), "unsupported database URL scheme");
            DatabaseState::unavailable("unsupported database URL scheme")
        }
    }
}

async fn connect_postgres(url: &str, config: &DatabaseConfig) -> DatabaseState {
    let attempts = config.connect_retries.max(1);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        match PostgresStore::connect(url).await {
            Ok(store) => {
                tracing::info!(url = %redact(url), attempt, "connected to database");
                return DatabaseState::Connected(Arc::new(store));
            }
            Err(e) => {
                last_error = e.to_string();
                if attempt < attempts {
                    let delay = backoff_delay(config.retry_base, attempt);
                    tracing::warn!(
                        attempt,
                        attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "database connection failed; retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    tracing::error!(attempts, error = %last_error, "giving up on database connection");
    DatabaseState::unavailable(format!("database connection failed: {}", last_error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_and_caps() {
        let base = Duration::from_millis(1000);
        assert_eq!(backoff_delay(base, 1), Duration::from_millis(1000));
        assert_eq!(backoff_delay(base, 2), Duration::from_millis(2000));
        assert_eq!(backoff_delay(base, 4), Duration::from_millis(8000));
        assert_eq!(backoff_delay(base, 10), MAX_BACKOFF);
        assert_eq!(backoff_delay(base, 40), MAX_BACKOFF);
    }

    #[test]
    fn schemes_map_to_backends() {
        assert_eq!(backend_for("memory://"), Some(Backend::Memory));
        assert_eq!(backend_for("postgres://u:p@h/db"), Some(Backend::Postgres));
        assert_eq!(backend_for("PostgreSQL://h/db"), Some(Backend::Postgres));
        assert_eq!(backend_for("mongodb+srv://cluster/db"), None);
    }

    #[test]
    fn credentials_are_redacted() {
        assert_eq!(redact("postgres://user:secret@db:5432/app"), "postgres://***@db:5432/app");
        assert_eq!(redact("memory://"), "memory://");
    }

    #[tokio::test]
    async fn missing_or_unsupported_urls_are_unavailable() {
        let mut config = DatabaseConfig {
            url: None,
            connect_retries: 1,
            retry_base: Duration::from_millis(1),
        };
        assert!(!connect(&config).await.is_connected());

        config.url = Some("mongodb://localhost/agency".to_string());
        assert!(!connect(&config).await.is_connected());

        config.url = Some("memory://".to_string());
        assert!(connect(&config).await.is_connected());
    }
}

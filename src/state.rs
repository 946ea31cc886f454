use crate::config::Config;
use crate::db::Store;
use crate::error::Result;
use crate::middleware_layer::rate_limit::LoginAttempts;

/// The application's state.
#[derive(Clone)]
pub struct AppState {
    /// Where users, teachers and sessions live.
    pub store: Store,
    /// The application's configuration.
    pub config: Config,
    /// Failed login attempts per email.
    pub login_attempts: LoginAttempts,
}

impl AppState {
    /// Creates a new `AppState`, connecting to PostgreSQL when a database
    /// URL is configured.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AppState`.
    pub async fn new(config: &Config) -> Result<Self> {
        let store = match config.database_url.as_deref() {
            Some(url) => {
                let store = Store::postgres(url).await?;
                tracing::info!("✅ PostgreSQL Pool initialized with deadpool-postgres");
                store
            }
            None => {
                tracing::warn!("⚠️ DATABASE_URL not set, using the in-memory store (data is lost on restart)");
                Store::memory()
            }
        };

        Ok(Self::with_store(config, store))
    }

    /// Creates an `AppState` over an existing store.
    pub fn with_store(config: &Config, store: Store) -> Self {
        AppState {
            store,
            config: config.clone(),
            login_attempts: LoginAttempts::new(),
        }
    }
}

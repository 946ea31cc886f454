use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;
use crate::error::{AppError, Result};
use crate::models::{teacher::Teacher, user::UserRecord, yoga_session::ClassSession};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Tables created at startup when running against PostgreSQL.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    email VARCHAR(50) NOT NULL UNIQUE,
    first_name VARCHAR(20) NOT NULL,
    last_name VARCHAR(20) NOT NULL,
    password VARCHAR(255) NOT NULL,
    admin BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS teachers (
    id BIGSERIAL PRIMARY KEY,
    first_name VARCHAR(40) NOT NULL,
    last_name VARCHAR(40) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS sessions (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(50) NOT NULL,
    description VARCHAR(2500) NOT NULL,
    date TIMESTAMPTZ NOT NULL,
    teacher_id BIGINT NOT NULL REFERENCES teachers (id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS participate (
    user_id BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
    session_id BIGINT NOT NULL REFERENCES sessions (id) ON DELETE CASCADE,
    PRIMARY KEY (user_id, session_id)
);
"#;

/// Creates a new database connection pool.
///
/// # Arguments
///
/// * `database_url` - The URL of the PostgreSQL database.
///
/// # Returns
///
/// A `Result` containing the `Pool`.
pub fn create_pool(database_url: &str) -> Result<Pool> {
    let mut cfg = Config::new();
    let pg_config: tokio_postgres::Config = database_url.parse()?;

    if let Some(tokio_postgres::config::Host::Tcp(hostname)) = pg_config.get_hosts().first() {
        cfg.host = Some(hostname.to_string());
    }

    if let Some(port) = pg_config.get_ports().first() {
        cfg.port = Some(*port);
    }

    if let Some(dbname) = pg_config.get_dbname() {
        cfg.dbname = Some(dbname.to_string());
    }

    if let Some(user) = pg_config.get_user() {
        cfg.user = Some(user.to_string());
    }

    if let Some(password) = pg_config.get_password() {
        cfg.password = Some(String::from_utf8_lossy(password).to_string());
    }

    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });

    cfg.pool = Some(PoolConfig {
        max_size: 32,
        timeouts: deadpool_postgres::Timeouts {
            wait: Some(Duration::from_secs(5)),
            create: Some(Duration::from_secs(2)),
            recycle: Some(Duration::from_secs(1)),
        },
        ..PoolConfig::default()
    });

    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
        .map_err(AppError::from)
}

/// Creates the schema if it does not exist yet.
pub async fn migrate(pool: &Pool) -> Result<()> {
    let client = pool.get().await?;
    client.batch_execute(SCHEMA).await?;
    tracing::info!("✅ Database schema ready");
    Ok(())
}

/// In-process tables used when no database is configured, and by tests.
#[derive(Debug, Default)]
pub struct MemoryDb {
    pub users: BTreeMap<i64, UserRecord>,
    pub teachers: BTreeMap<i64, Teacher>,
    pub sessions: BTreeMap<i64, ClassSession>,
    next_id: BTreeMap<&'static str, i64>,
}

impl MemoryDb {
    /// Hands out the next id for `table`, starting at 1.
    pub fn next_id(&mut self, table: &'static str) -> i64 {
        let counter = self.next_id.entry(table).or_insert(0);
        *counter += 1;
        *counter
    }
}

/// Where repositories read and write.
#[derive(Clone)]
pub enum Store {
    /// A PostgreSQL connection pool.
    Postgres(Pool),
    /// Shared in-memory tables.
    Memory(Arc<RwLock<MemoryDb>>),
}

impl Store {
    /// An empty in-memory store.
    pub fn memory() -> Self {
        Store::Memory(Arc::new(RwLock::new(MemoryDb::default())))
    }

    /// Connects to PostgreSQL and prepares the schema.
    pub async fn postgres(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url)?;
        migrate(&pool).await?;
        Ok(Store::Postgres(pool))
    }
}

use std::env;
use std::net::SocketAddr;
use anyhow::{Context, Result};
use zeroize::{Zeroize, Zeroizing};

/// Cost parameters for Argon2id password hashing.
#[derive(Clone, Copy, Debug)]
pub struct PasswordCost {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of iterations.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for PasswordCost {
    fn default() -> Self {
        Self {
            memory_kib: 19 * 1024,
            iterations: 3,
            parallelism: 6,
        }
    }
}

/// The application's configuration.
#[derive(Clone)]
pub struct Config {
    /// The URL of the PostgreSQL database. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// The address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// The HMAC key used to sign bearer tokens.
    pub jwt_secret: Zeroizing<Vec<u8>>,
    /// How long an issued token stays valid, in hours.
    pub jwt_expiration_hours: i64,
    /// Argon2id cost for new password hashes.
    pub password_cost: PasswordCost,
    /// Whether to create the demo admin and teachers at startup.
    pub seed_demo_data: bool,
    /// Browser origins allowed by CORS.
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        let mut secret_hex = env::var("JWT_SECRET")
            .context("JWT_SECRET must be set (generate with: openssl rand -hex 32)")?;

        let secret_bytes = hex::decode(&secret_hex)
            .context("JWT_SECRET must be valid hexadecimal")?;

        secret_hex.zeroize();

        if secret_bytes.len() < 32 {
            anyhow::bail!("JWT_SECRET must be at least 32 bytes (64 hex characters)");
        }

        let defaults = PasswordCost::default();

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty()),
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
                .parse()
                .context("Invalid BIND_ADDR")?,
            jwt_secret: Zeroizing::new(secret_bytes),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .context("Invalid JWT_EXPIRATION_HOURS")?,
            password_cost: PasswordCost {
                memory_kib: parse_or("ARGON2_MEMORY_KIB", defaults.memory_kib)?,
                iterations: parse_or("ARGON2_ITERATIONS", defaults.iterations)?,
                parallelism: parse_or("ARGON2_PARALLELISM", defaults.parallelism)?,
            },
            seed_demo_data: parse_or("SEED_DEMO_DATA", true)?,
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:4200".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        })
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().with_context(|| format!("Invalid {key}")),
        Err(_) => Ok(default),
    }
}

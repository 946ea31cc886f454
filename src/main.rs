use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yoga_studio::{seed, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing::info!("✅ Configuration loaded successfully");

    let state = AppState::new(&config).await?;
    tracing::info!("✅ AppState initialized");

    if config.seed_demo_data {
        match seed::ensure_demo_data(&state).await {
            Ok(admin_id) => {
                tracing::info!("✅ Demo data validation completed - admin: {}", admin_id);
            }
            Err(e) => {
                tracing::error!("❌ Failed to seed demo data: {}", e);
                return Err(e.into());
            }
        }
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("✅ All systems operational");

    yoga_studio::serve(listener, state).await
}

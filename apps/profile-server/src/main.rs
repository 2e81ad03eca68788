use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use profile_api::{build_router, AppState};
use profile_core::repositories::UserRepository;
use profile_infrastructure::InMemoryUserRepository;
use profile_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env, config files, PROFILE__* overrides)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    profile_shared::telemetry::init_telemetry(&config.log)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    // User store lives for the whole process
    let user_repo: Arc<dyn UserRepository> = if config.users.seed_admin {
        Arc::new(InMemoryUserRepository::seeded())
    } else {
        Arc::new(InMemoryUserRepository::new())
    };
    info!("User store ready with {} record(s)", user_repo.count().await?);

    // Build router
    let state = AppState::new(user_repo, config.clone());
    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use group_schedule::api::router;
use group_schedule::clock::{Clock, FixedClock, SystemClock};
use group_schedule::config::AppConfig;
use group_schedule::state::AppState;
use group_schedule::store::PageStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "group_schedule=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;

    let clock: Arc<dyn Clock> = match config.today {
        Some(date) => Arc::new(FixedClock(date)),
        None => Arc::new(SystemClock),
    };

    let mut store = PageStore::new(config.group.clone(), config.students);
    if config.seed_demo {
        store.seed_demo(clock.today());
    }

    let state = AppState::new(store, clock);
    let app = router(state);

    info!("schedule for group {} listening on http://{}", config.group, config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

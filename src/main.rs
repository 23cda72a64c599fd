use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use eagerbirds_api::{ApiState, config::ApiConfig};
use eagerbirds_core::{access::SlotAccess, store::SlotStore};
use eagerbirds_db::{
    create_pool, rest::RestAuthClient, rest::RestSlotStore, schema::initialize_database,
    store::PgSlotStore,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    eagerbirds_api::init_tracing(config.log_level)?;

    // Pick the slot store: a local database if configured, the hosted backend otherwise
    let store: Arc<dyn SlotStore> = match &config.database_url {
        Some(database_url) => {
            info!("Using Postgres slot store");
            let db_pool = create_pool(database_url).await?;
            initialize_database(&db_pool).await?;
            Arc::new(PgSlotStore::new(db_pool))
        }
        None => {
            info!("Using hosted slot store at {}", config.scheduler.store_endpoint);
            Arc::new(RestSlotStore::new(&config.scheduler)?)
        }
    };

    let state = Arc::new(ApiState {
        access: Arc::new(SlotAccess::new(store, &config.scheduler)),
        verifier: Arc::new(RestAuthClient::new(&config.scheduler)),
    });

    // Start API server
    eagerbirds_api::start_server(config, state).await?;

    Ok(())
}

//! Seed command handler

use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{CatalogService, SeaOrmCatalogService, SeedOutcome};

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.database.url).await?;
    let service = SeaOrmCatalogService::new(Arc::new(store.clone()));

    match service.seed_sample_data().await? {
        SeedOutcome::Skipped => {
            println!("Series already exist. Skipping seed.");
        }
        SeedOutcome::Inserted { series, episodes } => {
            println!("✓ Inserted {} series and {} episodes", series, episodes);
        }
    }

    store.close().await
}

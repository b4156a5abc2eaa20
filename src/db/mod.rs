use crate::domain::DocumentId;
use crate::models::{Creator, Episode, NewCreator, NewEpisode, NewSeries, Series};
use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement, TransactionTrait,
};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

use repositories::creator::CreatorRepository;
use repositories::episode::EpisodeRepository;
use repositories::series::SeriesRepository;

/// Bookkeeping tables that are not document collections.
const INTERNAL_TABLES: &[&str] = &["seaql_migrations"];

/// Number of documents written by one batch insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchCounts {
    pub series: usize,
    pub episodes: usize,
}

/// The storage shim: one connection pool, opened once and shared by cloning.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let path_str = db_url.trim_start_matches("sqlite:");
        let in_memory = path_str.starts_with(":memory:");

        if !in_memory {
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // Every sqlite memory connection is its own database.
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        // Recycling the only memory connection would drop the database.
        if !in_memory {
            opt.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
        }

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & collections ready (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    /// Names of the document collections, alphabetically, at most `limit`.
    pub async fn collection_names(&self, limit: usize) -> Result<Vec<String>> {
        let backend = self.conn.get_database_backend();
        let rows = self
            .conn
            .query_all(Statement::from_string(
                backend,
                "SELECT name FROM sqlite_master \
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
                 ORDER BY name"
                    .to_string(),
            ))
            .await?;

        let mut names = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row.try_get("", "name")?;
            if !INTERNAL_TABLES.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names.truncate(limit);

        Ok(names)
    }

    /// Closes the pool. Other clones of this store become unusable.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        info!("Database connection closed");
        Ok(())
    }

    fn series_repo(&self) -> SeriesRepository<'_, DatabaseConnection> {
        SeriesRepository::new(&self.conn)
    }

    fn episode_repo(&self) -> EpisodeRepository<'_, DatabaseConnection> {
        EpisodeRepository::new(&self.conn)
    }

    fn creator_repo(&self) -> CreatorRepository<'_, DatabaseConnection> {
        CreatorRepository::new(&self.conn)
    }

    pub async fn create_series(&self, series: &NewSeries) -> Result<DocumentId> {
        self.series_repo().insert(series).await
    }

    pub async fn list_series(&self, limit: u64) -> Result<Vec<Series>> {
        self.series_repo().find(limit).await
    }

    pub async fn get_series(&self, id: DocumentId) -> Result<Option<Series>> {
        self.series_repo().get(id).await
    }

    pub async fn create_episode(&self, episode: &NewEpisode) -> Result<DocumentId> {
        self.episode_repo().insert(episode).await
    }

    pub async fn list_episodes(&self, series_id: &str, limit: u64) -> Result<Vec<Episode>> {
        self.episode_repo().find_for_series(series_id, limit).await
    }

    pub async fn create_creator(&self, creator: &NewCreator) -> Result<DocumentId> {
        self.creator_repo().insert(creator).await
    }

    pub async fn list_creators(&self, limit: u64) -> Result<Vec<Creator>> {
        self.creator_repo().find(limit).await
    }

    /// Inserts `series` in order, then the episodes `episodes_for` builds from
    /// the new series ids. All rows land in one transaction or none do.
    pub async fn insert_series_with_episodes<F>(
        &self,
        series: &[NewSeries],
        episodes_for: F,
    ) -> Result<BatchCounts>
    where
        F: FnOnce(&[DocumentId]) -> Vec<NewEpisode>,
    {
        let txn = self.conn.begin().await?;

        let mut series_ids = Vec::with_capacity(series.len());
        {
            let repo = SeriesRepository::new(&txn);
            for new in series {
                series_ids.push(repo.insert(new).await?);
            }
        }

        let episodes = episodes_for(&series_ids);
        {
            let repo = EpisodeRepository::new(&txn);
            for new in &episodes {
                repo.insert(new).await?;
            }
        }

        txn.commit().await?;

        Ok(BatchCounts {
            series: series_ids.len(),
            episodes: episodes.len(),
        })
    }
}

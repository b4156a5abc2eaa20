use crate::domain::DocumentId;
use crate::entities::{prelude::*, series};
use crate::models::{NewSeries, Series as SeriesRecord};
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, QuerySelect, Set};
use tracing::debug;

pub struct SeriesRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> SeriesRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model(model: series::Model) -> SeriesRecord {
        SeriesRecord {
            id: DocumentId::new(model.id),
            title: model.title,
            description: model.description,
            cover_url: model.cover_url,
            banner_url: model.banner_url,
            genres: serde_json::from_str(&model.genres).unwrap_or_default(),
            rating: model.rating,
            featured: model.featured,
            creator_ids: serde_json::from_str(&model.creator_ids).unwrap_or_default(),
        }
    }

    pub async fn insert(&self, new: &NewSeries) -> anyhow::Result<DocumentId> {
        let active_model = series::ActiveModel {
            title: Set(new.title.clone()),
            description: Set(new.description.clone()),
            cover_url: Set(new.cover_url.clone()),
            banner_url: Set(new.banner_url.clone()),
            genres: Set(serde_json::to_string(&new.genres)?),
            rating: Set(new.rating),
            featured: Set(new.featured),
            creator_ids: Set(serde_json::to_string(&new.creator_ids)?),
            ..Default::default()
        };

        let result = Series::insert(active_model).exec(self.conn).await?;
        let id = DocumentId::new(result.last_insert_id);

        debug!("Inserted series {}: {}", id, new.title);
        Ok(id)
    }

    /// Up to `limit` series in insertion order.
    pub async fn find(&self, limit: u64) -> anyhow::Result<Vec<SeriesRecord>> {
        let rows = Series::find()
            .order_by_asc(series::Column::Id)
            .limit(limit)
            .all(self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: DocumentId) -> anyhow::Result<Option<SeriesRecord>> {
        let row = Series::find_by_id(id.value()).one(self.conn).await?;
        Ok(row.map(Self::map_model))
    }
}

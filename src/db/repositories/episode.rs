use crate::domain::DocumentId;
use crate::entities::{episode, prelude::*};
use crate::models::{Episode as EpisodeRecord, NewEpisode};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use tracing::debug;

pub struct EpisodeRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> EpisodeRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model(model: episode::Model) -> EpisodeRecord {
        EpisodeRecord {
            id: DocumentId::new(model.id),
            series_id: model.series_id,
            title: model.title,
            synopsis: model.synopsis,
            thumb_url: model.thumb_url,
            video_url: model.video_url,
            episode_number: model.episode_number,
            season: model.season,
            duration_sec: model.duration_sec,
        }
    }

    pub async fn insert(&self, new: &NewEpisode) -> anyhow::Result<DocumentId> {
        let active_model = episode::ActiveModel {
            series_id: Set(new.series_id.clone()),
            title: Set(new.title.clone()),
            synopsis: Set(new.synopsis.clone()),
            thumb_url: Set(new.thumb_url.clone()),
            video_url: Set(new.video_url.clone()),
            episode_number: Set(new.episode_number),
            season: Set(new.season),
            duration_sec: Set(new.duration_sec),
            ..Default::default()
        };

        let result = Episode::insert(active_model).exec(self.conn).await?;
        let id = DocumentId::new(result.last_insert_id);

        debug!(
            "Inserted episode {} (series {}, #{})",
            id, new.series_id, new.episode_number
        );
        Ok(id)
    }

    /// Up to `limit` episodes whose stored `series_id` equals `series_id`
    /// exactly, in insertion order.
    pub async fn find_for_series(
        &self,
        series_id: &str,
        limit: u64,
    ) -> anyhow::Result<Vec<EpisodeRecord>> {
        let rows = Episode::find()
            .filter(episode::Column::SeriesId.eq(series_id))
            .order_by_asc(episode::Column::Id)
            .limit(limit)
            .all(self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }
}

use crate::domain::DocumentId;
use crate::entities::{creator, prelude::*};
use crate::models::{Creator as CreatorRecord, NewCreator};
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, QuerySelect, Set};

pub struct CreatorRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CreatorRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model(model: creator::Model) -> CreatorRecord {
        CreatorRecord {
            id: DocumentId::new(model.id),
            name: model.name,
            avatar_url: model.avatar_url,
            bio: model.bio,
            social: serde_json::from_str(&model.social).unwrap_or_default(),
        }
    }

    pub async fn insert(&self, new: &NewCreator) -> anyhow::Result<DocumentId> {
        let active_model = creator::ActiveModel {
            name: Set(new.name.clone()),
            avatar_url: Set(new.avatar_url.clone()),
            bio: Set(new.bio.clone()),
            social: Set(serde_json::to_string(&new.social)?),
            ..Default::default()
        };

        let result = Creator::insert(active_model).exec(self.conn).await?;
        Ok(DocumentId::new(result.last_insert_id))
    }

    pub async fn find(&self, limit: u64) -> anyhow::Result<Vec<CreatorRecord>> {
        let rows = Creator::find()
            .order_by_asc(creator::Column::Id)
            .limit(limit)
            .all(self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }
}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "episode")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stringified series id. No foreign key: episodes may point at series
    /// that do not exist.
    pub series_id: String,
    pub title: String,
    pub synopsis: Option<String>,
    pub thumb_url: Option<String>,
    pub video_url: Option<String>,
    pub episode_number: i32,
    pub season: Option<i32>,
    pub duration_sec: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

/// Movie ids come from the content catalog, not the database.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub thumbnail: String,
    pub description: String,
    pub tags: String,
    pub draft: bool,
    pub video_source_type: String,
    pub video_source: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

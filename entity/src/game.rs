use sea_orm::entity::prelude::*;

/// How a game's media is presented on its detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum MediaKind {
    /// Playable in an embedded frame
    #[sea_orm(string_value = "embed")]
    Embed,
    /// Hosted elsewhere, opened through an external link
    #[sea_orm(string_value = "link")]
    Link,
    /// Uploaded file offered for download
    #[sea_orm(string_value = "download")]
    Download,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub media_kind: MediaKind,
    pub media_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::game_reaction::Entity")]
    GameReaction,
    #[sea_orm(has_many = "super::game_favorite::Entity")]
    GameFavorite,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::game_reaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameReaction.def()
    }
}

impl Related<super::game_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

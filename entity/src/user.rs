use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enzonic_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game::Entity")]
    Game,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::game_reaction::Entity")]
    GameReaction,
    #[sea_orm(has_many = "super::game_favorite::Entity")]
    GameFavorite,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
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

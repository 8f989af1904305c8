pub use sea_orm_migration::prelude::*;

mod m20251014_000001_create_user_table;
mod m20251014_000002_create_game_table;
mod m20251014_000003_create_game_reaction_table;
mod m20251014_000004_create_game_favorite_table;
mod m20251014_000005_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251014_000001_create_user_table::Migration),
            Box::new(m20251014_000002_create_game_table::Migration),
            Box::new(m20251014_000003_create_game_reaction_table::Migration),
            Box::new(m20251014_000004_create_game_favorite_table::Migration),
            Box::new(m20251014_000005_create_comment_table::Migration),
        ]
    }
}

//! Anime database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Anime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "anime")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Anime {
    fn from(model: Model) -> Self {
        Anime {
            id: model.id,
            name: model.name,
        }
    }
}

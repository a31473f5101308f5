use sea_orm::entity::prelude::*;

use crate::domain::model::Color;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "colors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub hexadecimal: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Color {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            hexadecimal: m.hexadecimal,
        }
    }
}

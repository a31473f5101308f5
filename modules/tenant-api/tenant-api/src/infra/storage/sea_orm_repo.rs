use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::domain::model::{Color, ColorPatch};
use crate::domain::repo::ColorRepository;

use super::entity::{self, Entity as Colors};

/// Colors repository bound to one tenant connection.
pub struct SeaOrmColorRepository {
    db: DatabaseConnection,
}

impl SeaOrmColorRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ColorRepository for SeaOrmColorRepository {
    async fn all(&self) -> anyhow::Result<Vec<Color>> {
        let rows = Colors::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find(&self, id: i32) -> anyhow::Result<Option<Color>> {
        Ok(Colors::find_by_id(id).one(&self.db).await?.map(Into::into))
    }

    async fn create(&self, name: &str, hexadecimal: &str) -> anyhow::Result<Color> {
        let model = entity::ActiveModel {
            name: ActiveValue::Set(name.to_owned()),
            hexadecimal: ActiveValue::Set(hexadecimal.to_uppercase()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(model.into())
    }

    async fn update(&self, id: i32, patch: &ColorPatch) -> anyhow::Result<Option<Color>> {
        if patch.is_empty() {
            return self.find(id).await;
        }

        let mut update = Colors::update_many().filter(entity::Column::Id.eq(id));
        if let Some(name) = &patch.name {
            update = update.col_expr(entity::Column::Name, Expr::value(name.clone()));
        }
        if let Some(hex) = &patch.hexadecimal {
            update = update.col_expr(entity::Column::Hexadecimal, Expr::value(hex.to_uppercase()));
        }
        update.exec(&self.db).await?;

        self.find(id).await
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let result = Colors::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

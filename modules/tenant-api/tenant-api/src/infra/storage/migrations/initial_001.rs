use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Colors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Colors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Colors::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Colors::Hexadecimal).char_len(7).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Colors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Colors {
    Table,
    Id,
    Name,
    Hexadecimal,
}

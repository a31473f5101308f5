use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientCredentials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClientCredentials::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClientCredentials::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ClientCredentials::Name).string().not_null())
                    .col(ColumnDef::new(ClientCredentials::DbHost).string().not_null())
                    .col(ColumnDef::new(ClientCredentials::DbUser).string().not_null())
                    .col(
                        ColumnDef::new(ClientCredentials::DbPassword)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClientCredentials::DbName).string().not_null())
                    .col(
                        ColumnDef::new(ClientCredentials::StorageEndpoint)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClientCredentials::StorageAccessKey)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClientCredentials::StorageSecretKey)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClientCredentials::StorageBucket)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClientCredentials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ClientCredentials {
    Table,
    Id,
    Email,
    Name,
    DbHost,
    DbUser,
    DbPassword,
    DbName,
    StorageEndpoint,
    StorageAccessKey,
    StorageSecretKey,
    StorageBucket,
}

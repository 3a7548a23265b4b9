use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Slides::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Slides::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Slides::Title).string().not_null())
                    .col(ColumnDef::new(Slides::MediaType).string().not_null())
                    .col(ColumnDef::new(Slides::YoutubeUrl).string())
                    .col(ColumnDef::new(Slides::ImageUrl).string())
                    .col(ColumnDef::new(Slides::SortOrder).integer().not_null())
                    .col(ColumnDef::new(Slides::Active).boolean().not_null())
                    .col(
                        ColumnDef::new(Slides::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Slides::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Slides::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Slides {
    Table,
    Id,
    Title,
    MediaType,
    YoutubeUrl,
    ImageUrl,
    SortOrder,
    Active,
    CreatedAt,
    UpdatedAt,
}

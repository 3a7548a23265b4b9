use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonials::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Testimonials::CustomerName).string().not_null())
                    .col(ColumnDef::new(Testimonials::CustomerImage).string())
                    .col(ColumnDef::new(Testimonials::Rating).integer().not_null())
                    .col(ColumnDef::new(Testimonials::Comment).text().not_null())
                    .col(ColumnDef::new(Testimonials::Active).boolean().not_null())
                    .col(
                        ColumnDef::new(Testimonials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Testimonials::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Testimonials {
    Table,
    Id,
    CustomerName,
    CustomerImage,
    Rating,
    Comment,
    Active,
    CreatedAt,
    UpdatedAt,
}

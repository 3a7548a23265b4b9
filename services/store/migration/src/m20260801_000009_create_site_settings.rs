use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteSettings::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SiteSettings::LogoUrl).string().not_null())
                    .col(
                        ColumnDef::new(SiteSettings::TopbarMessage)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SiteSettings::FooterAbout).string().not_null())
                    .col(ColumnDef::new(SiteSettings::FooterPhone).string().not_null())
                    .col(ColumnDef::new(SiteSettings::FooterEmail).string().not_null())
                    .col(
                        ColumnDef::new(SiteSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SiteSettings {
    Table,
    Id,
    LogoUrl,
    TopbarMessage,
    FooterAbout,
    FooterPhone,
    FooterEmail,
    UpdatedAt,
}

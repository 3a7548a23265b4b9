use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PaymentSettings::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PaymentSettings::AccountHolderName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PaymentSettings::Iban).string().not_null())
                    .col(ColumnDef::new(PaymentSettings::BankName).string())
                    .col(
                        ColumnDef::new(PaymentSettings::CardPaymentEnabled)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PaymentSettings::CardPaymentProvider)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PaymentSettings::IyzicoApiKey).string())
                    .col(ColumnDef::new(PaymentSettings::IyzicoSecretKey).string())
                    .col(
                        ColumnDef::new(PaymentSettings::IyzicoSandbox)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PaymentSettings::PaytrMerchantId).string())
                    .col(ColumnDef::new(PaymentSettings::PaytrMerchantKey).string())
                    .col(ColumnDef::new(PaymentSettings::PaytrMerchantSalt).string())
                    .col(
                        ColumnDef::new(PaymentSettings::PaytrSandbox)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PaymentSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentSettings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PaymentSettings {
    Table,
    Id,
    AccountHolderName,
    Iban,
    BankName,
    CardPaymentEnabled,
    CardPaymentProvider,
    IyzicoApiKey,
    IyzicoSecretKey,
    IyzicoSandbox,
    PaytrMerchantId,
    PaytrMerchantKey,
    PaytrMerchantSalt,
    PaytrSandbox,
    UpdatedAt,
}

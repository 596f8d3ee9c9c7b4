use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // domains 表
        manager
            .create_table(
                Table::create()
                    .table(Domain::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Domain::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Domain::DomainName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Domain::RegistrationDate)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Domain::ExpirationDate)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Domain::DaysToExpire)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Domain::Remark)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Domain::IsOnline)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Domain::StatusCode)
                            .string()
                            .not_null()
                            .default("N/A"),
                    )
                    .col(
                        ColumnDef::new(Domain::ResponseTimeMs)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Domain::LastChecked).string().not_null())
                    .col(
                        ColumnDef::new(Domain::Position)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // monitor_config 表（单行）
        manager
            .create_table(
                Table::create()
                    .table(MonitorConfig::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MonitorConfig::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MonitorConfig::GistToken)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(MonitorConfig::GistId)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(MonitorConfig::WebdavUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(MonitorConfig::WebdavUser)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(MonitorConfig::WebdavPass)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonitorConfig::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Domain::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Domain {
    #[sea_orm(iden = "domains")]
    Table,
    Id,
    DomainName,
    RegistrationDate,
    ExpirationDate,
    DaysToExpire,
    Remark,
    IsOnline,
    StatusCode,
    ResponseTimeMs,
    LastChecked,
    Position,
}

#[derive(DeriveIden)]
enum MonitorConfig {
    #[sea_orm(iden = "monitor_config")]
    Table,
    Id,
    GistToken,
    GistId,
    WebdavUrl,
    WebdavUser,
    WebdavPass,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000001_create_hackathon_table::Hackathon;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityLog::Table)
                    .if_not_exists()
                    .col(pk_uuid(ActivityLog::Id))
                    .col(uuid_null(ActivityLog::HackathonId))
                    .col(uuid_null(ActivityLog::AdminId))
                    .col(uuid_null(ActivityLog::UserId))
                    .col(uuid_null(ActivityLog::TeamId))
                    .col(string_len(ActivityLog::Action, 100))
                    .col(json_binary(ActivityLog::Details))
                    .col(string_len_null(ActivityLog::IpAddress, 64))
                    .col(timestamp_with_time_zone(ActivityLog::Timestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_logs_hackathon_id")
                            .from(ActivityLog::Table, ActivityLog::HackathonId)
                            .to(Hackathon::Table, Hackathon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_logs_timestamp")
                    .table(ActivityLog::Table)
                    .col(ActivityLog::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActivityLog {
    #[sea_orm(iden = "activity_logs")]
    Table,
    Id,
    HackathonId,
    AdminId,
    UserId,
    TeamId,
    Action,
    Details,
    IpAddress,
    Timestamp,
}

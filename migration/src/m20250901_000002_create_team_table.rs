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
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_uuid(Team::Id))
                    .col(uuid(Team::HackathonId))
                    .col(string_len(Team::Name, 255))
                    .col(text_null(Team::Description))
                    .col(string_len(Team::Status, 16).default("pending"))
                    .col(string_len(Team::SubmissionStatus, 16).default("not_submitted"))
                    .col(double_null(Team::AiScore))
                    .col(string_len_null(Team::Eligibility, 100))
                    .col(timestamp_with_time_zone(Team::CreatedAt))
                    .col(timestamp_with_time_zone(Team::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teams_hackathon_id")
                            .from(Team::Table, Team::HackathonId)
                            .to(Hackathon::Table, Hackathon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_teams_hackathon_name_unique")
                            .col(Team::HackathonId)
                            .col(Team::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    #[sea_orm(iden = "teams")]
    Table,
    Id,
    HackathonId,
    Name,
    Description,
    Status,
    SubmissionStatus,
    AiScore,
    Eligibility,
    CreatedAt,
    UpdatedAt,
}

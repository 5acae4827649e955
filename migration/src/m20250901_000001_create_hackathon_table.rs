use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hackathon::Table)
                    .if_not_exists()
                    .col(pk_uuid(Hackathon::Id))
                    .col(uuid(Hackathon::OrganizerId))
                    .col(string_len(Hackathon::Title, 500))
                    .col(text(Hackathon::ProblemStatement))
                    .col(string_len(Hackathon::Mode, 16))
                    .col(string_len_null(Hackathon::BannerUrl, 500))
                    .col(string_len_null(Hackathon::LogoUrl, 500))
                    .col(json_binary(Hackathon::Timeline))
                    .col(json_binary(Hackathon::ParticipationRules))
                    .col(json_binary(Hackathon::SubmissionRequirements))
                    .col(json_binary(Hackathon::CommunicationResources))
                    .col(json_binary(Hackathon::PrizeRewards))
                    .col(json_binary(Hackathon::Settings))
                    .col(string_len(Hackathon::Status, 16).default("draft"))
                    .col(timestamp_with_time_zone(Hackathon::CreatedAt))
                    .col(timestamp_with_time_zone(Hackathon::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hackathons_organizer_id")
                    .table(Hackathon::Table)
                    .col(Hackathon::OrganizerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hackathon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hackathon {
    #[sea_orm(iden = "hackathons")]
    Table,
    Id,
    OrganizerId,
    Title,
    ProblemStatement,
    Mode,
    BannerUrl,
    LogoUrl,
    Timeline,
    ParticipationRules,
    SubmissionRequirements,
    CommunicationResources,
    PrizeRewards,
    Settings,
    Status,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Podcast::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Podcast::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Podcast::FeedUrl).string().not_null().unique_key())
                    .col(ColumnDef::new(Podcast::Title).string().not_null())
                    .col(ColumnDef::new(Podcast::Link).string())
                    .col(ColumnDef::new(Podcast::Description).string())
                    .col(ColumnDef::new(Podcast::Language).string())
                    .col(ColumnDef::new(Podcast::Copyright).string())
                    .col(ColumnDef::new(Podcast::LastBuildDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Podcast::ItunesAuthor).string())
                    .col(ColumnDef::new(Podcast::ItunesCategory).string())
                    .col(ColumnDef::new(Podcast::ItunesExplicit).boolean().not_null())
                    .col(ColumnDef::new(Podcast::ItunesImageUrl).string())
                    .col(ColumnDef::new(Podcast::ItunesOwnerEmail).string())
                    .col(ColumnDef::new(Podcast::ItunesOwnerName).string())
                    .col(ColumnDef::new(Podcast::ItunesSubtitle).string())
                    .col(ColumnDef::new(Podcast::ItunesSummary).string())
                    .col(ColumnDef::new(Podcast::ArtworkId).big_integer())
                    .col(ColumnDef::new(Podcast::DeleteRequested).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_podcast_artwork")
                            .from(Podcast::Table, Podcast::ArtworkId)
                            .to(Artwork::Table, Artwork::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PodcastEpisode::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PodcastEpisode::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PodcastEpisode::PodcastId).big_integer().not_null())
                    .col(ColumnDef::new(PodcastEpisode::AudioRelativePath).string().not_null())
                    .col(ColumnDef::new(PodcastEpisode::ManualDownloadState).string().not_null())
                    .col(ColumnDef::new(PodcastEpisode::EnclosureUrl).string())
                    .col(ColumnDef::new(PodcastEpisode::EnclosureLength).big_integer())
                    .col(ColumnDef::new(PodcastEpisode::EnclosureType).string())
                    .col(ColumnDef::new(PodcastEpisode::PubDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(PodcastEpisode::DurationMs).big_integer())
                    .col(ColumnDef::new(PodcastEpisode::ArtworkId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_podcast_episode_podcast")
                            .from(PodcastEpisode::Table, PodcastEpisode::PodcastId)
                            .to(Podcast::Table, Podcast::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_podcast_episode_artwork")
                            .from(PodcastEpisode::Table, PodcastEpisode::ArtworkId)
                            .to(Artwork::Table, Artwork::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_podcast_episode_podcast")
                    .table(PodcastEpisode::Table)
                    .col(PodcastEpisode::PodcastId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PodcastEpisode::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Podcast::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Artwork {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Podcast {
    Table,
    Id,
    FeedUrl,
    Title,
    Link,
    Description,
    Language,
    Copyright,
    LastBuildDate,
    ItunesAuthor,
    ItunesCategory,
    ItunesExplicit,
    ItunesImageUrl,
    ItunesOwnerEmail,
    ItunesOwnerName,
    ItunesSubtitle,
    ItunesSummary,
    ArtworkId,
    DeleteRequested,
}

#[derive(DeriveIden)]
enum PodcastEpisode {
    Table,
    Id,
    PodcastId,
    AudioRelativePath,
    ManualDownloadState,
    EnclosureUrl,
    EnclosureLength,
    EnclosureType,
    PubDate,
    DurationMs,
    ArtworkId,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Track::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Track::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Track::AbsolutePath).string().not_null().unique_key())
                    .col(ColumnDef::new(Track::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Track::LastWriteTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Track::AddedTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Track::Name).string().not_null())
                    .col(ColumnDef::new(Track::DurationMs).big_integer().not_null())
                    .col(ColumnDef::new(Track::Bitrate).integer())
                    .col(ColumnDef::new(Track::BitsPerSample).integer())
                    .col(ColumnDef::new(Track::SampleRate).integer())
                    .col(ColumnDef::new(Track::ChannelCount).integer())
                    .col(ColumnDef::new(Track::TrackNumber).integer())
                    .col(ColumnDef::new(Track::Date).string())
                    .col(ColumnDef::new(Track::OriginalDate).string())
                    .col(ColumnDef::new(Track::Mbid).string())
                    .col(ColumnDef::new(Track::RecordingMbid).string())
                    .col(ColumnDef::new(Track::Copyright).string())
                    .col(ColumnDef::new(Track::CopyrightUrl).string())
                    .col(ColumnDef::new(Track::Advisory).string().not_null())
                    .col(ColumnDef::new(Track::ReplayGain).double())
                    .col(ColumnDef::new(Track::ArtistDisplayName).string().not_null())
                    .col(ColumnDef::new(Track::Comment).string())
                    .col(ColumnDef::new(Track::ReleaseId).big_integer())
                    .col(ColumnDef::new(Track::MediumId).big_integer())
                    .col(ColumnDef::new(Track::MediaLibraryId).big_integer())
                    .col(ColumnDef::new(Track::DirectoryId).big_integer())
                    // No DB-level FK on either artwork column: see m...catalog_tables.
                    .col(ColumnDef::new(Track::PreferredArtworkId).big_integer())
                    .col(ColumnDef::new(Track::PreferredMediaArtworkId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_release")
                            .from(Track::Table, Track::ReleaseId)
                            .to(Release::Table, Release::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_medium")
                            .from(Track::Table, Track::MediumId)
                            .to(Medium::Table, Medium::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_media_library")
                            .from(Track::Table, Track::MediaLibraryId)
                            .to(MediaLibrary::Table, MediaLibrary::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_directory")
                            .from(Track::Table, Track::DirectoryId)
                            .to(Directory::Table, Directory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, col) in [
            ("idx_track_name", Track::Name),
            ("idx_track_release", Track::ReleaseId),
            ("idx_track_directory", Track::DirectoryId),
            ("idx_track_media_library", Track::MediaLibraryId),
            ("idx_track_last_write_time", Track::LastWriteTime),
            ("idx_track_mbid", Track::Mbid),
        ] {
            manager
                .create_index(Index::create().name(name).table(Track::Table).col(col).to_owned())
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(TrackArtistLink::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackArtistLink::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrackArtistLink::TrackId).big_integer().not_null())
                    .col(ColumnDef::new(TrackArtistLink::ArtistId).big_integer().not_null())
                    .col(ColumnDef::new(TrackArtistLink::LinkType).string().not_null())
                    .col(ColumnDef::new(TrackArtistLink::Subtype).string())
                    .col(ColumnDef::new(TrackArtistLink::RawArtistName).string().not_null())
                    .col(ColumnDef::new(TrackArtistLink::RawSortName).string().not_null())
                    .col(ColumnDef::new(TrackArtistLink::MbidMatched).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_artist_link_track")
                            .from(TrackArtistLink::Table, TrackArtistLink::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_artist_link_artist")
                            .from(TrackArtistLink::Table, TrackArtistLink::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_track_artist_link_track")
                    .table(TrackArtistLink::Table)
                    .col(TrackArtistLink::TrackId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_track_artist_link_artist")
                    .table(TrackArtistLink::Table)
                    .col(TrackArtistLink::ArtistId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ClusterType::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClusterType::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClusterType::Name).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cluster::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cluster::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cluster::ClusterTypeId).big_integer().not_null())
                    .col(ColumnDef::new(Cluster::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cluster_cluster_type")
                            .from(Cluster::Table, Cluster::ClusterTypeId)
                            .to(ClusterType::Table, ClusterType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cluster_type_name_unique")
                    .table(Cluster::Table)
                    .col(Cluster::ClusterTypeId)
                    .col(Cluster::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrackCluster::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TrackCluster::TrackId).big_integer().not_null())
                    .col(ColumnDef::new(TrackCluster::ClusterId).big_integer().not_null())
                    .primary_key(Index::create().col(TrackCluster::TrackId).col(TrackCluster::ClusterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_cluster_track")
                            .from(TrackCluster::Table, TrackCluster::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_cluster_cluster")
                            .from(TrackCluster::Table, TrackCluster::ClusterId)
                            .to(Cluster::Table, Cluster::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_track_cluster_cluster")
                    .table(TrackCluster::Table)
                    .col(TrackCluster::ClusterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrackLyrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackLyrics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrackLyrics::TrackId).big_integer().not_null())
                    .col(ColumnDef::new(TrackLyrics::Language).string().not_null())
                    .col(ColumnDef::new(TrackLyrics::OffsetMs).big_integer())
                    .col(ColumnDef::new(TrackLyrics::Content).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_lyrics_track")
                            .from(TrackLyrics::Table, TrackLyrics::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrackEmbeddedImage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackEmbeddedImage::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrackEmbeddedImage::TrackId).big_integer().not_null())
                    .col(ColumnDef::new(TrackEmbeddedImage::MimeType).string().not_null())
                    .col(ColumnDef::new(TrackEmbeddedImage::Description).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_embedded_image_track")
                            .from(TrackEmbeddedImage::Table, TrackEmbeddedImage::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrackEmbeddedImageLink::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackEmbeddedImageLink::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrackEmbeddedImageLink::TrackId).big_integer().not_null())
                    .col(
                        ColumnDef::new(TrackEmbeddedImageLink::TrackEmbeddedImageId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TrackEmbeddedImageLink::Index).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_embedded_image_link_track")
                            .from(TrackEmbeddedImageLink::Table, TrackEmbeddedImageLink::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_embedded_image_link_image")
                            .from(
                                TrackEmbeddedImageLink::Table,
                                TrackEmbeddedImageLink::TrackEmbeddedImageId,
                            )
                            .to(TrackEmbeddedImage::Table, TrackEmbeddedImage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackEmbeddedImageLink::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TrackEmbeddedImage::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(TrackLyrics::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(TrackCluster::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Cluster::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ClusterType::Table).to_owned()).await?;
        manager
            .drop_table(Table::drop().table(TrackArtistLink::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(Track::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Track {
    Table,
    Id,
    AbsolutePath,
    FileSize,
    LastWriteTime,
    AddedTime,
    Name,
    DurationMs,
    Bitrate,
    BitsPerSample,
    SampleRate,
    ChannelCount,
    TrackNumber,
    Date,
    OriginalDate,
    Mbid,
    RecordingMbid,
    Copyright,
    CopyrightUrl,
    Advisory,
    ReplayGain,
    ArtistDisplayName,
    Comment,
    ReleaseId,
    MediumId,
    MediaLibraryId,
    DirectoryId,
    PreferredArtworkId,
    PreferredMediaArtworkId,
}

#[derive(DeriveIden)]
enum Release {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Medium {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum MediaLibrary {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Directory {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Artist {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TrackArtistLink {
    Table,
    Id,
    TrackId,
    ArtistId,
    LinkType,
    Subtype,
    RawArtistName,
    RawSortName,
    MbidMatched,
}

#[derive(DeriveIden)]
enum ClusterType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Cluster {
    Table,
    Id,
    ClusterTypeId,
    Name,
}

#[derive(DeriveIden)]
enum TrackCluster {
    Table,
    TrackId,
    ClusterId,
}

#[derive(DeriveIden)]
enum TrackLyrics {
    Table,
    Id,
    TrackId,
    Language,
    OffsetMs,
    Content,
}

#[derive(DeriveIden)]
enum TrackEmbeddedImage {
    Table,
    Id,
    TrackId,
    MimeType,
    Description,
}

#[derive(DeriveIden)]
enum TrackEmbeddedImageLink {
    Table,
    Id,
    TrackId,
    TrackEmbeddedImageId,
    Index,
}

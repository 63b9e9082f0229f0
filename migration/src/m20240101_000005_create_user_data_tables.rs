use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthToken::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuthToken::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AuthToken::UserId).big_integer().not_null())
                    .col(ColumnDef::new(AuthToken::Value).string().not_null().unique_key())
                    .col(ColumnDef::new(AuthToken::Expiry).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auth_token_user")
                            .from(AuthToken::Table, AuthToken::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrackList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackList::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrackList::UserId).big_integer().not_null())
                    .col(ColumnDef::new(TrackList::Name).string().not_null())
                    .col(ColumnDef::new(TrackList::ListType).string().not_null())
                    .col(ColumnDef::new(TrackList::IsPublic).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracklist_user")
                            .from(TrackList::Table, TrackList::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrackListEntry::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackListEntry::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrackListEntry::TrackListId).big_integer().not_null())
                    .col(ColumnDef::new(TrackListEntry::TrackId).big_integer().not_null())
                    .col(ColumnDef::new(TrackListEntry::DateTime).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracklist_entry_tracklist")
                            .from(TrackListEntry::Table, TrackListEntry::TrackListId)
                            .to(TrackList::Table, TrackList::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracklist_entry_track")
                            .from(TrackListEntry::Table, TrackListEntry::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tracklist_entry_tracklist")
                    .table(TrackListEntry::Table)
                    .col(TrackListEntry::TrackListId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StarredArtist::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StarredArtist::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StarredArtist::UserId).big_integer().not_null())
                    .col(ColumnDef::new(StarredArtist::ArtistId).big_integer().not_null())
                    .col(ColumnDef::new(StarredArtist::Backend).string().not_null())
                    .col(ColumnDef::new(StarredArtist::Date).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(StarredArtist::SyncState).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_starred_artist_user")
                            .from(StarredArtist::Table, StarredArtist::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_starred_artist_artist")
                            .from(StarredArtist::Table, StarredArtist::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_starred_artist_unique")
                    .table(StarredArtist::Table)
                    .col(StarredArtist::UserId)
                    .col(StarredArtist::ArtistId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StarredRelease::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StarredRelease::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StarredRelease::UserId).big_integer().not_null())
                    .col(ColumnDef::new(StarredRelease::ReleaseId).big_integer().not_null())
                    .col(ColumnDef::new(StarredRelease::Backend).string().not_null())
                    .col(ColumnDef::new(StarredRelease::Date).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(StarredRelease::SyncState).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_starred_release_user")
                            .from(StarredRelease::Table, StarredRelease::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_starred_release_release")
                            .from(StarredRelease::Table, StarredRelease::ReleaseId)
                            .to(Release::Table, Release::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_starred_release_unique")
                    .table(StarredRelease::Table)
                    .col(StarredRelease::UserId)
                    .col(StarredRelease::ReleaseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StarredTrack::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StarredTrack::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StarredTrack::UserId).big_integer().not_null())
                    .col(ColumnDef::new(StarredTrack::TrackId).big_integer().not_null())
                    .col(ColumnDef::new(StarredTrack::Backend).string().not_null())
                    .col(ColumnDef::new(StarredTrack::Date).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(StarredTrack::SyncState).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_starred_track_user")
                            .from(StarredTrack::Table, StarredTrack::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_starred_track_track")
                            .from(StarredTrack::Table, StarredTrack::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_starred_track_unique")
                    .table(StarredTrack::Table)
                    .col(StarredTrack::UserId)
                    .col(StarredTrack::TrackId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrackBookmark::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackBookmark::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrackBookmark::UserId).big_integer().not_null())
                    .col(ColumnDef::new(TrackBookmark::TrackId).big_integer().not_null())
                    .col(ColumnDef::new(TrackBookmark::OffsetMs).big_integer().not_null())
                    .col(ColumnDef::new(TrackBookmark::Comment).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_bookmark_user")
                            .from(TrackBookmark::Table, TrackBookmark::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_bookmark_track")
                            .from(TrackBookmark::Table, TrackBookmark::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_track_bookmark_unique")
                    .table(TrackBookmark::Table)
                    .col(TrackBookmark::UserId)
                    .col(TrackBookmark::TrackId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TrackBookmark::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(StarredTrack::Table).to_owned()).await?;
        manager
            .drop_table(Table::drop().table(StarredRelease::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(StarredArtist::Table).to_owned()).await?;
        manager
            .drop_table(Table::drop().table(TrackListEntry::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(TrackList::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(AuthToken::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Artist {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Release {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Track {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum AuthToken {
    Table,
    Id,
    UserId,
    Value,
    Expiry,
}

#[derive(DeriveIden)]
enum TrackList {
    Table,
    Id,
    UserId,
    Name,
    ListType,
    IsPublic,
}

#[derive(DeriveIden)]
enum TrackListEntry {
    Table,
    Id,
    TrackListId,
    TrackId,
    DateTime,
}

#[derive(DeriveIden)]
enum StarredArtist {
    Table,
    Id,
    UserId,
    ArtistId,
    Backend,
    Date,
    SyncState,
}

#[derive(DeriveIden)]
enum StarredRelease {
    Table,
    Id,
    UserId,
    ReleaseId,
    Backend,
    Date,
    SyncState,
}

#[derive(DeriveIden)]
enum StarredTrack {
    Table,
    Id,
    UserId,
    TrackId,
    Backend,
    Date,
    SyncState,
}

#[derive(DeriveIden)]
enum TrackBookmark {
    Table,
    Id,
    UserId,
    TrackId,
    OffsetMs,
    Comment,
}

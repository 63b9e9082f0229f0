use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artist::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artist::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artist::Name).string().not_null())
                    .col(ColumnDef::new(Artist::SortName).string().not_null())
                    .col(ColumnDef::new(Artist::Mbid).string())
                    // No DB-level FK: artwork -> track_embedded_image -> track would
                    // close a cycle back to artist/release/track. Enforced by the
                    // repository layer instead (see artwork::set_preferred_on).
                    .col(ColumnDef::new(Artist::PreferredArtworkId).big_integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artist_name")
                    .table(Artist::Table)
                    .col(Artist::Name)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_artist_mbid")
                    .table(Artist::Table)
                    .col(Artist::Mbid)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Label::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Label::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Label::Name).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Country::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Country::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Country::Name).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReleaseType::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReleaseType::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ReleaseType::Name).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Release::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Release::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Release::Name).string().not_null())
                    .col(ColumnDef::new(Release::SortName).string().not_null())
                    .col(ColumnDef::new(Release::Mbid).string())
                    .col(ColumnDef::new(Release::ReleaseGroupMbid).string())
                    .col(ColumnDef::new(Release::TotalDiscCount).integer())
                    .col(ColumnDef::new(Release::Compilation).boolean().not_null())
                    .col(ColumnDef::new(Release::ArtistDisplayName).string().not_null())
                    .col(ColumnDef::new(Release::Barcode).string())
                    .col(ColumnDef::new(Release::Comment).string())
                    .col(ColumnDef::new(Release::PreferredArtworkId).big_integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_release_name")
                    .table(Release::Table)
                    .col(Release::Name)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_release_mbid")
                    .table(Release::Table)
                    .col(Release::Mbid)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReleaseLabel::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ReleaseLabel::ReleaseId).big_integer().not_null())
                    .col(ColumnDef::new(ReleaseLabel::LabelId).big_integer().not_null())
                    .primary_key(Index::create().col(ReleaseLabel::ReleaseId).col(ReleaseLabel::LabelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_release_label_release")
                            .from(ReleaseLabel::Table, ReleaseLabel::ReleaseId)
                            .to(Release::Table, Release::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_release_label_label")
                            .from(ReleaseLabel::Table, ReleaseLabel::LabelId)
                            .to(Label::Table, Label::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReleaseReleaseType::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ReleaseReleaseType::ReleaseId).big_integer().not_null())
                    .col(ColumnDef::new(ReleaseReleaseType::ReleaseTypeId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ReleaseReleaseType::ReleaseId)
                            .col(ReleaseReleaseType::ReleaseTypeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_release_release_type_release")
                            .from(ReleaseReleaseType::Table, ReleaseReleaseType::ReleaseId)
                            .to(Release::Table, Release::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_release_release_type_type")
                            .from(ReleaseReleaseType::Table, ReleaseReleaseType::ReleaseTypeId)
                            .to(ReleaseType::Table, ReleaseType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Medium::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Medium::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Medium::ReleaseId).big_integer().not_null())
                    .col(ColumnDef::new(Medium::Position).integer().not_null())
                    .col(ColumnDef::new(Medium::Name).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medium_release")
                            .from(Medium::Table, Medium::ReleaseId)
                            .to(Release::Table, Release::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_medium_release")
                    .table(Medium::Table)
                    .col(Medium::ReleaseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Medium::Table).to_owned()).await?;
        manager
            .drop_table(Table::drop().table(ReleaseReleaseType::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReleaseLabel::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(Release::Table).to_owned()).await?;
        manager
            .drop_table(Table::drop().table(ReleaseType::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(Country::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Label::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Artist::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Artist {
    Table,
    Id,
    Name,
    SortName,
    Mbid,
    PreferredArtworkId,
}

#[derive(DeriveIden)]
enum Label {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Country {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum ReleaseType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Release {
    Table,
    Id,
    Name,
    SortName,
    Mbid,
    ReleaseGroupMbid,
    TotalDiscCount,
    Compilation,
    ArtistDisplayName,
    Barcode,
    Comment,
    PreferredArtworkId,
}

#[derive(DeriveIden)]
enum ReleaseLabel {
    Table,
    ReleaseId,
    LabelId,
}

#[derive(DeriveIden)]
enum ReleaseReleaseType {
    Table,
    ReleaseId,
    ReleaseTypeId,
}

#[derive(DeriveIden)]
enum Medium {
    Table,
    Id,
    ReleaseId,
    Position,
    Name,
}

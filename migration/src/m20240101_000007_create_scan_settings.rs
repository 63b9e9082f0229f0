use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScanSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScanSettings::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScanSettings::AudioScanVersion).integer().not_null())
                    .col(ColumnDef::new(ScanSettings::ArtistInfoScanVersion).integer().not_null())
                    .col(ColumnDef::new(ScanSettings::StartTimeOfDayMinutes).integer().not_null())
                    .col(ColumnDef::new(ScanSettings::UpdatePeriod).string().not_null())
                    .col(ColumnDef::new(ScanSettings::SimilarityEngineType).string().not_null())
                    .col(ColumnDef::new(ScanSettings::ExtraTagsToScan).string().not_null())
                    .col(ColumnDef::new(ScanSettings::ArtistTagDelimiters).string().not_null())
                    .col(ColumnDef::new(ScanSettings::DefaultTagDelimiters).string().not_null())
                    .col(ColumnDef::new(ScanSettings::ArtistsToNotSplit).string().not_null())
                    .col(ColumnDef::new(ScanSettings::SkipSingleReleasePlaylists).boolean().not_null())
                    .col(ColumnDef::new(ScanSettings::AllowMbidArtistMerge).boolean().not_null())
                    .col(
                        ColumnDef::new(ScanSettings::ArtistImageFallbackToRelease)
                            .boolean()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        let insert = Query::insert()
            .into_table(ScanSettings::Table)
            .columns([
                ScanSettings::Id,
                ScanSettings::AudioScanVersion,
                ScanSettings::ArtistInfoScanVersion,
                ScanSettings::StartTimeOfDayMinutes,
                ScanSettings::UpdatePeriod,
                ScanSettings::SimilarityEngineType,
                ScanSettings::ExtraTagsToScan,
                ScanSettings::ArtistTagDelimiters,
                ScanSettings::DefaultTagDelimiters,
                ScanSettings::ArtistsToNotSplit,
                ScanSettings::SkipSingleReleasePlaylists,
                ScanSettings::AllowMbidArtistMerge,
                ScanSettings::ArtistImageFallbackToRelease,
            ])
            .values_panic([
                1_i64.into(),
                1_i32.into(),
                1_i32.into(),
                180_i32.into(),
                "daily".into(),
                "clusters".into(),
                "".into(),
                "".into(),
                "".into(),
                "".into(),
                false.into(),
                true.into(),
                true.into(),
            ])
            .to_owned();
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ScanSettings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ScanSettings {
    Table,
    Id,
    AudioScanVersion,
    ArtistInfoScanVersion,
    StartTimeOfDayMinutes,
    UpdatePeriod,
    SimilarityEngineType,
    ExtraTagsToScan,
    ArtistTagDelimiters,
    DefaultTagDelimiters,
    ArtistsToNotSplit,
    SkipSingleReleasePlaylists,
    AllowMbidArtistMerge,
    ArtistImageFallbackToRelease,
}

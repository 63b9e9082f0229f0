use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Image::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Image::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Image::AbsolutePath).string().not_null().unique_key())
                    .col(ColumnDef::new(Image::FileLastWriteTime).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Artwork::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artwork::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artwork::ImageId).big_integer())
                    .col(ColumnDef::new(Artwork::TrackEmbeddedImageId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artwork_image")
                            .from(Artwork::Table, Artwork::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artwork_track_embedded_image")
                            .from(Artwork::Table, Artwork::TrackEmbeddedImageId)
                            .to(TrackEmbeddedImage::Table, TrackEmbeddedImage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Artwork::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Image::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Image {
    Table,
    Id,
    AbsolutePath,
    FileLastWriteTime,
}

#[derive(DeriveIden)]
enum TrackEmbeddedImage {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Artwork {
    Table,
    Id,
    ImageId,
    TrackEmbeddedImageId,
}

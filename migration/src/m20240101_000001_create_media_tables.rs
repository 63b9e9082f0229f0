use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaLibrary::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MediaLibrary::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MediaLibrary::RootPath).string().not_null().unique_key())
                    .col(ColumnDef::new(MediaLibrary::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Directory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Directory::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Directory::AbsolutePath).string().not_null().unique_key())
                    .col(ColumnDef::new(Directory::Name).string().not_null())
                    .col(ColumnDef::new(Directory::ParentDirectoryId).big_integer())
                    .col(ColumnDef::new(Directory::MediaLibraryId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_directory_parent")
                            .from(Directory::Table, Directory::ParentDirectoryId)
                            .to(Directory::Table, Directory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_directory_media_library")
                            .from(Directory::Table, Directory::MediaLibraryId)
                            .to(MediaLibrary::Table, MediaLibrary::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_directory_parent")
                    .table(Directory::Table)
                    .col(Directory::ParentDirectoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(User::LoginName).string().not_null().unique_key())
                    .col(ColumnDef::new(User::PasswordHash).string().not_null())
                    .col(ColumnDef::new(User::PasswordSalt).string().not_null())
                    .col(ColumnDef::new(User::Role).string().not_null())
                    .col(ColumnDef::new(User::TranscodeEnabled).boolean().not_null())
                    .col(ColumnDef::new(User::TranscodeFormat).string())
                    .col(ColumnDef::new(User::TranscodeBitrate).integer())
                    .col(ColumnDef::new(User::ScrobblingBackend).string().not_null())
                    .col(ColumnDef::new(User::FeedbackBackend).string().not_null())
                    .col(ColumnDef::new(User::ListenbrainzToken).string())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Directory::Table).to_owned()).await?;
        manager
            .drop_table(Table::drop().table(MediaLibrary::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MediaLibrary {
    Table,
    Id,
    RootPath,
    Name,
}

#[derive(DeriveIden)]
enum Directory {
    Table,
    Id,
    AbsolutePath,
    Name,
    ParentDirectoryId,
    MediaLibraryId,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    LoginName,
    PasswordHash,
    PasswordSalt,
    Role,
    TranscodeEnabled,
    TranscodeFormat,
    TranscodeBitrate,
    ScrobblingBackend,
    FeedbackBackend,
    ListenbrainzToken,
}

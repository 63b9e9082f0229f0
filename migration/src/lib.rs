pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_media_tables;
mod m20240101_000002_create_catalog_tables;
mod m20240101_000003_create_track_tables;
mod m20240101_000004_create_artwork_tables;
mod m20240101_000005_create_user_data_tables;
mod m20240101_000006_create_podcast_tables;
mod m20240101_000007_create_scan_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_media_tables::Migration),
            Box::new(m20240101_000002_create_catalog_tables::Migration),
            Box::new(m20240101_000003_create_track_tables::Migration),
            Box::new(m20240101_000004_create_artwork_tables::Migration),
            Box::new(m20240101_000005_create_user_data_tables::Migration),
            Box::new(m20240101_000006_create_podcast_tables::Migration),
            Box::new(m20240101_000007_create_scan_settings::Migration),
        ]
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Singleton settings row (id is always 1).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scan_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub audio_scan_version: i32,
    pub artist_info_scan_version: i32,
    /// Minutes since midnight.
    pub start_time_of_day_minutes: i32,
    /// ScanUpdatePeriod::as_str()
    pub update_period: String,
    /// SimilarityEngineType::as_str()
    pub similarity_engine_type: String,
    /// Comma-separated list of extra tag names to scan.
    pub extra_tags_to_scan: String,
    pub artist_tag_delimiters: String,
    pub default_tag_delimiters: String,
    pub artists_to_not_split: String,
    pub skip_single_release_playlists: bool,
    pub allow_mbid_artist_merge: bool,
    pub artist_image_fallback_to_release: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

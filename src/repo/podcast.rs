use chrono::{DateTime, Utc};
use entity::podcast::{ActiveModel, Model};
use entity::podcast_episode::{ActiveModel as EpisodeActiveModel, Model as EpisodeModel};
use entity::prelude::{Podcast, PodcastEpisode};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use crate::enums::PodcastEpisodeManualDownloadState;
use crate::ids::Id;
use crate::repo::modify;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

pub struct NewPodcast {
    pub feed_url: String,
    pub title: String,
    pub link: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
}

pub async fn create(txn: &WriteTransaction<'_>, new: NewPodcast) -> StorageResult<Model> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        feed_url: Set(new.feed_url),
        title: Set(new.title),
        link: Set(new.link),
        description: Set(new.description),
        language: Set(new.language),
        copyright: Set(None),
        last_build_date: Set(None),
        itunes_author: Set(None),
        itunes_category: Set(None),
        itunes_explicit: Set(false),
        itunes_image_url: Set(None),
        itunes_owner_email: Set(None),
        itunes_owner_name: Set(None),
        itunes_subtitle: Set(None),
        itunes_summary: Set(None),
        artwork_id: Set(None),
        delete_requested: Set(false),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_by_feed_url(access: &impl ReadAccess, feed_url: &str) -> StorageResult<Option<Model>> {
    let row = Podcast::find()
        .filter(entity::podcast::Column::FeedUrl.eq(feed_url.to_string()))
        .one(access.connection())
        .await?;
    Ok(row)
}

pub async fn request_delete(txn: &WriteTransaction<'_>, model: Model) -> StorageResult<Model> {
    modify::<entity::podcast::Entity, _>(txn, model, |active| {
        active.delete_requested = Set(true);
    })
    .await
}

pub async fn remove(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
    Podcast::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

pub async fn create_episode(
    txn: &WriteTransaction<'_>,
    podcast_id: Id<Model>,
    enclosure_url: Option<String>,
    enclosure_length: Option<i64>,
    enclosure_type: Option<String>,
    pub_date: Option<DateTime<Utc>>,
) -> StorageResult<EpisodeModel> {
    let active = EpisodeActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        podcast_id: Set(podcast_id.get()),
        audio_relative_path: Set(String::new()),
        manual_download_state: Set(PodcastEpisodeManualDownloadState::None.as_str().to_string()),
        enclosure_url: Set(enclosure_url),
        enclosure_length: Set(enclosure_length),
        enclosure_type: Set(enclosure_type),
        pub_date: Set(pub_date),
        duration_ms: Set(None),
        artwork_id: Set(None),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn mark_downloaded(
    txn: &WriteTransaction<'_>,
    model: EpisodeModel,
    audio_relative_path: String,
    duration_ms: i64,
) -> StorageResult<EpisodeModel> {
    modify::<entity::podcast_episode::Entity, _>(txn, model, |active| {
        active.audio_relative_path = Set(audio_relative_path);
        active.duration_ms = Set(Some(duration_ms));
        active.manual_download_state = Set(PodcastEpisodeManualDownloadState::None.as_str().to_string());
    })
    .await
}

pub async fn list_episodes(access: &impl ReadAccess, podcast_id: Id<Model>) -> StorageResult<Vec<EpisodeModel>> {
    let rows = PodcastEpisode::find()
        .filter(entity::podcast_episode::Column::PodcastId.eq(podcast_id.get()))
        .all(access.connection())
        .await?;
    Ok(rows)
}

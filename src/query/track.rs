use chrono::{DateTime, Utc};
use entity::prelude::{
    Artist, Cluster, Directory, MediaLibrary, Medium, Release, Track, TrackArtistLink, TrackCluster,
    TrackList, TrackListEntry,
};
use entity::{artist, track, track_artist_link, track_cluster, tracklist_entry};
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect};

use crate::enums::{TrackArtistLinkType, TrackSortMethod};
use crate::ids::Id;
use crate::query::{like_condition, nocase};
use crate::range::{Range, RangeResults};
use crate::transaction::ReadAccess;
use crate::StorageResult;

/// Filters accepted by `track::find`. Every field is optional; an empty
/// `TrackFindParameters::default()` matches every track.
#[derive(Clone, Debug, Default)]
pub struct TrackFindParameters {
    /// Tracks must belong to *all* of these clusters (intersection, not union).
    pub cluster_ids: Vec<Id<Cluster>>,
    /// Each keyword must substring-match `name`, case-insensitively.
    pub keywords: Vec<String>,
    pub exact_name: Option<String>,
    pub written_after: Option<DateTime<Utc>>,
    pub starred_by_user: Option<(Id<entity::user::Model>, String)>,
    pub artist_id: Option<Id<Artist>>,
    pub link_types: Vec<TrackArtistLinkType>,
    pub artist_name: Option<String>,
    pub non_release_only: bool,
    pub medium_id: Option<Id<Medium>>,
    pub release_id: Option<Id<Release>>,
    pub release_name: Option<String>,
    pub tracklist_id: Option<Id<TrackList>>,
    pub track_number: Option<i32>,
    pub directory_id: Option<Id<Directory>>,
    pub file_size: Option<i64>,
    pub embedded_image_id: Option<Id<entity::track_embedded_image::Model>>,
    pub media_library_id: Option<Id<MediaLibrary>>,
    pub sort: TrackSortMethod,
    pub range: Range,
}

impl TrackFindParameters {
    pub fn new(range: Range) -> Self {
        TrackFindParameters { range, sort: TrackSortMethod::None, ..Default::default() }
    }

    pub fn with_cluster_ids(mut self, ids: Vec<Id<Cluster>>) -> Self {
        self.cluster_ids = ids;
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_sort(mut self, sort: TrackSortMethod) -> Self {
        self.sort = sort;
        self
    }

    fn build_condition(&self) -> Condition {
        let mut condition = Condition::all();

        if !self.cluster_ids.is_empty() {
            let ids: Vec<i64> = self.cluster_ids.iter().map(|id| id.get()).collect();
            let n = ids.len() as i64;
            let subquery = Query::select()
                .column(track_cluster::Column::TrackId)
                .from(TrackCluster)
                .and_where(Expr::col(track_cluster::Column::ClusterId).is_in(ids))
                .group_by_col(track_cluster::Column::TrackId)
                .and_having(Expr::expr(Expr::col(track_cluster::Column::ClusterId).count_distinct()).eq(n))
                .to_owned();
            condition = condition.add(track::Column::Id.in_subquery(subquery));
        }

        for keyword in &self.keywords {
            condition = condition.add(like_condition(track::Column::Name, keyword));
        }

        if let Some(name) = &self.exact_name {
            condition = condition.add(track::Column::Name.eq(name.clone()));
        }

        if let Some(after) = self.written_after {
            condition = condition.add(track::Column::LastWriteTime.gt(after));
        }

        if let Some((user_id, backend)) = &self.starred_by_user {
            let subquery = Query::select()
                .column(entity::starred_track::Column::TrackId)
                .from(entity::starred_track::Entity)
                .and_where(entity::starred_track::Column::UserId.eq(user_id.get()))
                .and_where(entity::starred_track::Column::Backend.eq(backend.clone()))
                .to_owned();
            condition = condition.add(track::Column::Id.in_subquery(subquery));
        }

        if let Some(artist_id) = self.artist_id {
            let mut link_query = Query::select()
                .column(track_artist_link::Column::TrackId)
                .from(TrackArtistLink)
                .and_where(track_artist_link::Column::ArtistId.eq(artist_id.get()))
                .to_owned();
            if !self.link_types.is_empty() {
                let types: Vec<String> = self.link_types.iter().map(|t| t.as_str().to_string()).collect();
                link_query.and_where(Expr::col(track_artist_link::Column::LinkType).is_in(types));
            }
            condition = condition.add(track::Column::Id.in_subquery(link_query));
        }

        if let Some(artist_name) = &self.artist_name {
            let subquery = Query::select()
                .column(track_artist_link::Column::TrackId)
                .from(TrackArtistLink)
                .inner_join(
                    Artist,
                    Expr::col((TrackArtistLink, track_artist_link::Column::ArtistId))
                        .equals((Artist, artist::Column::Id)),
                )
                .and_where(like_condition(artist::Column::Name, artist_name))
                .to_owned();
            condition = condition.add(track::Column::Id.in_subquery(subquery));
        }

        if self.non_release_only {
            condition = condition.add(track::Column::ReleaseId.is_null());
        }

        if let Some(medium_id) = self.medium_id {
            condition = condition.add(track::Column::MediumId.eq(medium_id.get()));
        }

        if let Some(release_id) = self.release_id {
            condition = condition.add(track::Column::ReleaseId.eq(release_id.get()));
        }

        if let Some(release_name) = &self.release_name {
            let subquery = Query::select()
                .column(track::Column::Id)
                .from(Track)
                .inner_join(
                    Release,
                    Expr::col((Track, track::Column::ReleaseId)).equals((Release, entity::release::Column::Id)),
                )
                .and_where(like_condition(entity::release::Column::Name, release_name))
                .to_owned();
            condition = condition.add(track::Column::Id.in_subquery(subquery));
        }

        if let Some(tracklist_id) = self.tracklist_id {
            let subquery = Query::select()
                .column(tracklist_entry::Column::TrackId)
                .from(TrackListEntry)
                .and_where(tracklist_entry::Column::TracklistId.eq(tracklist_id.get()))
                .to_owned();
            condition = condition.add(track::Column::Id.in_subquery(subquery));
        }

        if let Some(track_number) = self.track_number {
            condition = condition.add(track::Column::TrackNumber.eq(track_number));
        }

        if let Some(directory_id) = self.directory_id {
            condition = condition.add(track::Column::DirectoryId.eq(directory_id.get()));
        }

        if let Some(file_size) = self.file_size {
            condition = condition.add(track::Column::FileSize.eq(file_size));
        }

        if let Some(embedded_image_id) = self.embedded_image_id {
            let subquery = Query::select()
                .column(entity::track_embedded_image::Column::TrackId)
                .from(entity::track_embedded_image::Entity)
                .and_where(entity::track_embedded_image::Column::Id.eq(embedded_image_id.get()))
                .to_owned();
            condition = condition.add(track::Column::Id.in_subquery(subquery));
        }

        if let Some(media_library_id) = self.media_library_id {
            condition = condition.add(track::Column::MediaLibraryId.eq(media_library_id.get()));
        }

        condition
    }
}

/// Runs `params` and returns one page. Over-fetches `size + 1` rows to set
/// `more_results` without a separate count query.
pub async fn find(
    access: &impl ReadAccess,
    params: &TrackFindParameters,
) -> StorageResult<RangeResults<track::Model>> {
    let mut query = Track::find().filter(params.build_condition());

    query = match params.sort {
        TrackSortMethod::None => query,
        TrackSortMethod::Name => query.order_by_asc(nocase("name")),
        TrackSortMethod::AddedDesc => query.order_by(track::Column::AddedTime, Order::Desc),
        TrackSortMethod::LastWrittenDesc => query.order_by(track::Column::LastWriteTime, Order::Desc),
        TrackSortMethod::Random => query.order_by_desc(Expr::cust("RANDOM()")),
        TrackSortMethod::TrackList | TrackSortMethod::Release | TrackSortMethod::DateDescThenRelease => {
            query.order_by(track::Column::Id, Order::Asc)
        }
    };

    let rows = query
        .offset(params.range.offset)
        .limit(params.range.size + 1)
        .all(access.connection())
        .await?;

    Ok(RangeResults::from_overfetch(rows, params.range))
}

/// Streams every row of `params` through `visit` without materializing the
/// whole page as a `Vec` beyond what the DB driver buffers.
pub async fn find_visit<F>(
    access: &impl ReadAccess,
    params: &TrackFindParameters,
    mut visit: F,
) -> StorageResult<()>
where
    F: FnMut(&track::Model),
{
    let page = find(access, params).await?;
    for row in &page.results {
        visit(row);
    }
    Ok(())
}

/// Keyset page: `WHERE id > last_id ORDER BY id LIMIT count`. Used by batch
/// scans that must not revisit rows already seen.
pub async fn find_after_id(
    access: &impl ReadAccess,
    last_id: Id<entity::track::Model>,
    count: u64,
) -> StorageResult<Vec<track::Model>> {
    let rows = Track::find()
        .filter(track::Column::Id.gt(last_id.get()))
        .order_by(track::Column::Id, Order::Asc)
        .limit(count)
        .all(access.connection())
        .await?;
    Ok(rows)
}

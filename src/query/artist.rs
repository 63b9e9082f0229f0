use entity::prelude::Artist;
use entity::{artist, starred_artist, track_artist_link};
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::enums::ArtistSortMethod;
use crate::ids::Id;
use crate::query::{like_condition, nocase};
use crate::range::{Range, RangeResults};
use crate::transaction::ReadAccess;
use crate::StorageResult;

#[derive(Clone, Debug, Default)]
pub struct ArtistFindParameters {
    pub keywords: Vec<String>,
    pub exact_name: Option<String>,
    pub starred_by_user: Option<(Id<entity::user::Model>, String)>,
    pub sort: ArtistSortMethod,
    pub range: Range,
}

impl ArtistFindParameters {
    pub fn new(range: Range) -> Self {
        ArtistFindParameters { range, sort: ArtistSortMethod::None, ..Default::default() }
    }

    fn build_condition(&self) -> Condition {
        let mut condition = Condition::all();

        for keyword in &self.keywords {
            condition = condition.add(
                Condition::any()
                    .add(like_condition(artist::Column::Name, keyword))
                    .add(like_condition(artist::Column::SortName, keyword)),
            );
        }

        if let Some(name) = &self.exact_name {
            condition = condition.add(artist::Column::Name.eq(name.clone()));
        }

        if let Some((user_id, backend)) = &self.starred_by_user {
            let subquery = Query::select()
                .column(starred_artist::Column::ArtistId)
                .from(starred_artist::Entity)
                .and_where(starred_artist::Column::UserId.eq(user_id.get()))
                .and_where(starred_artist::Column::Backend.eq(backend.clone()))
                .to_owned();
            condition = condition.add(artist::Column::Id.in_subquery(subquery));
        }

        condition
    }
}

/// Artists with zero `TrackArtistLink` rows, orphaned per the same rule
/// `orphan::find_orphan_artist_ids` applies during a write-transaction sweep.
pub fn orphan_condition() -> Condition {
    let subquery = Query::select()
        .expr(Expr::val(1))
        .from(track_artist_link::Entity)
        .and_where(Expr::col((track_artist_link::Entity, track_artist_link::Column::ArtistId)).equals((
            entity::artist::Entity,
            artist::Column::Id,
        )))
        .to_owned();
    Condition::all().add(Expr::exists(subquery).not())
}

pub async fn find(
    access: &impl ReadAccess,
    params: &ArtistFindParameters,
) -> StorageResult<RangeResults<artist::Model>> {
    let mut query = Artist::find().filter(params.build_condition());

    query = match params.sort {
        ArtistSortMethod::None => query,
        ArtistSortMethod::Name => query.order_by_asc(nocase("sort_name")),
        ArtistSortMethod::Random => query.order_by_desc(Expr::cust("RANDOM()")),
    };

    let rows = query
        .offset(params.range.offset)
        .limit(params.range.size + 1)
        .all(access.connection())
        .await?;

    Ok(RangeResults::from_overfetch(rows, params.range))
}

use entity::prelude::Release;
use entity::{release, release_label, release_release_type, starred_release};
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect};

use crate::enums::ReleaseSortMethod;
use crate::ids::Id;
use crate::query::{like_condition, nocase};
use crate::range::{Range, RangeResults};
use crate::transaction::ReadAccess;
use crate::StorageResult;

#[derive(Clone, Debug, Default)]
pub struct ReleaseFindParameters {
    pub keywords: Vec<String>,
    pub exact_name: Option<String>,
    pub label_id: Option<Id<entity::label::Model>>,
    pub release_type_id: Option<Id<entity::release_type::Model>>,
    pub starred_by_user: Option<(Id<entity::user::Model>, String)>,
    pub compilation: Option<bool>,
    pub sort: ReleaseSortMethod,
    pub range: Range,
}

impl ReleaseFindParameters {
    pub fn new(range: Range) -> Self {
        ReleaseFindParameters { range, sort: ReleaseSortMethod::None, ..Default::default() }
    }

    fn build_condition(&self) -> Condition {
        let mut condition = Condition::all();

        for keyword in &self.keywords {
            condition = condition.add(like_condition(release::Column::Name, keyword));
        }

        if let Some(name) = &self.exact_name {
            condition = condition.add(release::Column::Name.eq(name.clone()));
        }

        if let Some(label_id) = self.label_id {
            let subquery = Query::select()
                .column(release_label::Column::ReleaseId)
                .from(release_label::Entity)
                .and_where(release_label::Column::LabelId.eq(label_id.get()))
                .to_owned();
            condition = condition.add(release::Column::Id.in_subquery(subquery));
        }

        if let Some(release_type_id) = self.release_type_id {
            let subquery = Query::select()
                .column(release_release_type::Column::ReleaseId)
                .from(release_release_type::Entity)
                .and_where(release_release_type::Column::ReleaseTypeId.eq(release_type_id.get()))
                .to_owned();
            condition = condition.add(release::Column::Id.in_subquery(subquery));
        }

        if let Some((user_id, backend)) = &self.starred_by_user {
            let subquery = Query::select()
                .column(starred_release::Column::ReleaseId)
                .from(starred_release::Entity)
                .and_where(starred_release::Column::UserId.eq(user_id.get()))
                .and_where(starred_release::Column::Backend.eq(backend.clone()))
                .to_owned();
            condition = condition.add(release::Column::Id.in_subquery(subquery));
        }

        if let Some(compilation) = self.compilation {
            condition = condition.add(release::Column::Compilation.eq(compilation));
        }

        condition
    }
}

pub async fn find(
    access: &impl ReadAccess,
    params: &ReleaseFindParameters,
) -> StorageResult<RangeResults<release::Model>> {
    let mut query = Release::find().filter(params.build_condition());

    query = match params.sort {
        ReleaseSortMethod::None => query,
        ReleaseSortMethod::Name => query.order_by_asc(nocase("sort_name")),
        ReleaseSortMethod::Random => query.order_by_desc(Expr::cust("RANDOM()")),
        ReleaseSortMethod::ArtistNameThenDate => query
            .order_by(release::Column::ArtistDisplayName, Order::Asc)
            .order_by(release::Column::Id, Order::Asc),
    };

    let rows = query
        .offset(params.range.offset)
        .limit(params.range.size + 1)
        .all(access.connection())
        .await?;

    Ok(RangeResults::from_overfetch(rows, params.range))
}

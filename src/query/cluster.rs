use entity::cluster;
use entity::prelude::Cluster;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::enums::ClusterSortMethod;
use crate::ids::Id;
use crate::query::{like_condition, nocase};
use crate::range::{Range, RangeResults};
use crate::transaction::ReadAccess;
use crate::StorageResult;

#[derive(Clone, Debug, Default)]
pub struct ClusterFindParameters {
    pub cluster_type_id: Option<Id<entity::cluster_type::Model>>,
    pub keywords: Vec<String>,
    pub sort: ClusterSortMethod,
    pub range: Range,
}

impl ClusterFindParameters {
    pub fn new(range: Range) -> Self {
        ClusterFindParameters { range, sort: ClusterSortMethod::None, ..Default::default() }
    }

    fn build_condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(cluster_type_id) = self.cluster_type_id {
            condition = condition.add(cluster::Column::ClusterTypeId.eq(cluster_type_id.get()));
        }

        for keyword in &self.keywords {
            condition = condition.add(like_condition(cluster::Column::Name, keyword));
        }

        condition
    }
}

pub async fn find(
    access: &impl ReadAccess,
    params: &ClusterFindParameters,
) -> StorageResult<RangeResults<cluster::Model>> {
    let mut query = Cluster::find().filter(params.build_condition());

    query = match params.sort {
        ClusterSortMethod::None => query,
        ClusterSortMethod::Name => query.order_by_asc(nocase("name")),
    };

    let rows = query
        .offset(params.range.offset)
        .limit(params.range.size + 1)
        .all(access.connection())
        .await?;

    Ok(RangeResults::from_overfetch(rows, params.range))
}

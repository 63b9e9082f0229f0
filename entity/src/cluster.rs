use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cluster")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub cluster_type_id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cluster_type::Entity",
        from = "Column::ClusterTypeId",
        to = "super::cluster_type::Column::Id",
        on_delete = "Cascade"
    )]
    ClusterType,
    #[sea_orm(has_many = "super::track_cluster::Entity")]
    TrackCluster,
}

impl Related<super::cluster_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClusterType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

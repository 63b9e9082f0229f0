use entity::cluster::{ActiveModel as ClusterActiveModel, Model as ClusterModel};
use entity::cluster_type::{ActiveModel as ClusterTypeActiveModel, Model as ClusterTypeModel};
use entity::prelude::{Cluster, ClusterType};
use entity::{cluster, cluster_type};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use crate::ids::Id;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

pub async fn create_cluster_type(txn: &WriteTransaction<'_>, name: String) -> StorageResult<ClusterTypeModel> {
    let active = ClusterTypeActiveModel { id: sea_orm::ActiveValue::NotSet, name: Set(name) };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_cluster_type_by_name(
    access: &impl ReadAccess,
    name: &str,
) -> StorageResult<Option<ClusterTypeModel>> {
    let row = ClusterType::find()
        .filter(cluster_type::Column::Name.eq(name.to_string()))
        .one(access.connection())
        .await?;
    Ok(row)
}

pub async fn remove_cluster_type(txn: &WriteTransaction<'_>, id: Id<ClusterTypeModel>) -> StorageResult<()> {
    ClusterType::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

/// `(cluster_type_id, name)` is unique (migration 3's composite index); the
/// caller should check `find_by_type_and_name` before calling `create` if it
/// cares about a pre-existing row rather than an `IntegrityViolation`.
pub async fn create(
    txn: &WriteTransaction<'_>,
    cluster_type_id: Id<ClusterTypeModel>,
    name: String,
) -> StorageResult<ClusterModel> {
    let active = ClusterActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        cluster_type_id: Set(cluster_type_id.get()),
        name: Set(name),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_by_type_and_name(
    access: &impl ReadAccess,
    cluster_type_id: Id<ClusterTypeModel>,
    name: &str,
) -> StorageResult<Option<ClusterModel>> {
    let row = Cluster::find()
        .filter(cluster::Column::ClusterTypeId.eq(cluster_type_id.get()))
        .filter(cluster::Column::Name.eq(name.to_string()))
        .one(access.connection())
        .await?;
    Ok(row)
}

pub async fn find_by_id(access: &impl ReadAccess, id: Id<ClusterModel>) -> StorageResult<Option<ClusterModel>> {
    let row = Cluster::find_by_id(id.get()).one(access.connection()).await?;
    Ok(row)
}

pub async fn remove(txn: &WriteTransaction<'_>, id: Id<ClusterModel>) -> StorageResult<()> {
    Cluster::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

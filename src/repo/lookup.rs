//! The three plain name-keyed lookup tables (Label, Country, ReleaseType):
//! no mutable fields beyond the unique name, so `create`/`find_by_name`/
//! `remove` is the whole surface. One macro instantiation per table, same
//! shape as `starred_repo!` in `repo::starred`.

macro_rules! lookup_repo {
    ($module:ident, $entity:ty) => {
        pub mod $module {
            use entity::$module::{ActiveModel, Column, Model};
            use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

            use crate::ids::Id;
            use crate::transaction::{ReadAccess, WriteTransaction};
            use crate::StorageResult;

            pub async fn create(txn: &WriteTransaction<'_>, name: String) -> StorageResult<Model> {
                let active = ActiveModel {
                    id: sea_orm::ActiveValue::NotSet,
                    name: Set(name),
                };
                let saved = active.insert(txn.connection()).await?;
                Ok(saved)
            }

            pub async fn find_by_id(access: &impl ReadAccess, id: Id<Model>) -> StorageResult<Option<Model>> {
                let row = <$entity>::find_by_id(id.get()).one(access.connection()).await?;
                Ok(row)
            }

            pub async fn find_by_name(access: &impl ReadAccess, name: &str) -> StorageResult<Option<Model>> {
                let row = <$entity>::find()
                    .filter(Column::Name.eq(name.to_string()))
                    .one(access.connection())
                    .await?;
                Ok(row)
            }

            pub async fn remove(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
                <$entity>::delete_by_id(id.get()).exec(txn.connection()).await?;
                Ok(())
            }
        }
    };
}

lookup_repo!(label, entity::prelude::Label);
lookup_repo!(country, entity::prelude::Country);
lookup_repo!(release_type, entity::prelude::ReleaseType);

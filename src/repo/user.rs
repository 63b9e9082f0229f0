use entity::prelude::{AuthToken, User};
use entity::user::{ActiveModel, Model};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use crate::enums::{FeedbackBackend, ScrobblingBackend, UserRole};
use crate::ids::Id;
use crate::repo::modify;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

pub struct NewUser {
    pub login_name: String,
    pub password_hash: String,
    pub password_salt: String,
    pub role: UserRole,
}

pub async fn create(txn: &WriteTransaction<'_>, new: NewUser) -> StorageResult<Model> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        login_name: Set(new.login_name),
        password_hash: Set(new.password_hash),
        password_salt: Set(new.password_salt),
        role: Set(new.role.as_str().to_string()),
        transcode_enabled: Set(false),
        transcode_format: Set(None),
        transcode_bitrate: Set(None),
        scrobbling_backend: Set(ScrobblingBackend::None.as_str().to_string()),
        feedback_backend: Set(FeedbackBackend::None.as_str().to_string()),
        listenbrainz_token: Set(None),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_by_id(access: &impl ReadAccess, id: Id<Model>) -> StorageResult<Option<Model>> {
    let row = User::find_by_id(id.get()).one(access.connection()).await?;
    Ok(row)
}

pub async fn find_by_login_name(access: &impl ReadAccess, login_name: &str) -> StorageResult<Option<Model>> {
    let row = User::find()
        .filter(entity::user::Column::LoginName.eq(login_name.to_string()))
        .one(access.connection())
        .await?;
    Ok(row)
}

pub async fn set_password(
    txn: &WriteTransaction<'_>,
    model: Model,
    password_hash: String,
    password_salt: String,
) -> StorageResult<Model> {
    modify::<entity::user::Entity, _>(txn, model, |active| {
        active.password_hash = Set(password_hash);
        active.password_salt = Set(password_salt);
    })
    .await
}

pub async fn remove(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
    User::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

pub async fn create_auth_token(
    txn: &WriteTransaction<'_>,
    user_id: Id<Model>,
    value: String,
    expiry: chrono::DateTime<chrono::Utc>,
) -> StorageResult<entity::auth_token::Model> {
    let active = entity::auth_token::ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        user_id: Set(user_id.get()),
        value: Set(value),
        expiry: Set(expiry),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_auth_token(
    access: &impl ReadAccess,
    value: &str,
) -> StorageResult<Option<entity::auth_token::Model>> {
    let row = AuthToken::find()
        .filter(entity::auth_token::Column::Value.eq(value.to_string()))
        .one(access.connection())
        .await?;
    Ok(row)
}

/// Removed explicitly when expired or consumed; the auth-token table has no
/// automatic expiry sweep, matching §3's "removed when expired or consumed".
pub async fn remove_auth_token(txn: &WriteTransaction<'_>, id: Id<entity::auth_token::Model>) -> StorageResult<()> {
    AuthToken::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

use notable_common::types::User;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::entities::user::{self, Column, Entity};
use crate::error::{Result, StorageError};
use crate::store::NoteStore;

fn to_user(m: user::Model) -> User {
    User {
        id: m.id,
        username: m.username,
        password_hash: m.password_hash,
    }
}

impl NoteStore {
    /// Insert a new user. The UNIQUE constraint on `username` is the sole
    /// safety net under concurrent registration; a violation surfaces as
    /// [`StorageError::Conflict`].
    pub async fn create_user(&self, username: &str, password_hash: &str) -> Result<User> {
        let am = user::ActiveModel {
            username: Set(username.to_owned()),
            password_hash: Set(password_hash.to_owned()),
            ..Default::default()
        };
        match am.insert(self.db()).await {
            Ok(model) => Ok(to_user(model)),
            Err(e) if e.to_string().contains("UNIQUE constraint") => {
                Err(StorageError::Conflict {
                    entity: "user",
                    field: "username",
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let model = Entity::find()
            .filter(Column::Username.eq(username))
            .one(self.db())
            .await?;
        Ok(model.map(to_user))
    }

    pub async fn count_users(&self) -> Result<u64> {
        Ok(Entity::find().count(self.db()).await?)
    }

    /// No HTTP endpoint deletes users; this exists for the storage contract
    /// and exercises the `ON DELETE CASCADE` on owned notes.
    pub async fn delete_user(&self, id: i32) -> Result<bool> {
        let res = Entity::delete_by_id(id).exec(self.db()).await?;
        Ok(res.rows_affected > 0)
    }
}

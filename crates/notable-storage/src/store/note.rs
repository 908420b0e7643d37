use chrono::Utc;
use notable_common::types::{Note, NotePatch};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};

use crate::entities::note::{self, Column, Entity};
use crate::error::Result;
use crate::store::NoteStore;

fn to_note(m: note::Model) -> Note {
    Note {
        id: m.id,
        title: m.title,
        content: m.content,
        created_on: m.created_on,
        user_id: m.user_id,
    }
}

impl NoteStore {
    /// Insert a new note. `created_on` is set here, server-side, to the
    /// current UTC time and is never touched again.
    pub async fn create_note(
        &self,
        title: &str,
        content: &str,
        user_id: Option<i32>,
    ) -> Result<Note> {
        let am = note::ActiveModel {
            title: Set(Some(title.to_owned())),
            content: Set(Some(content.to_owned())),
            created_on: Set(Utc::now()),
            user_id: Set(user_id),
            ..Default::default()
        };
        let model = am.insert(self.db()).await?;
        Ok(to_note(model))
    }

    pub async fn get_note(&self, id: i32) -> Result<Option<Note>> {
        let model = Entity::find_by_id(id).one(self.db()).await?;
        Ok(model.map(to_note))
    }

    /// All notes in insertion order.
    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        let models = Entity::find()
            .order_by_asc(Column::Id)
            .all(self.db())
            .await?;
        Ok(models.into_iter().map(to_note).collect())
    }

    /// Apply a partial update. Only fields present in the patch are written;
    /// `created_on` and `user_id` are never altered here. Returns the updated
    /// note, or `None` when no note has that id.
    pub async fn update_note(&self, id: i32, patch: &NotePatch) -> Result<Option<Note>> {
        let Some(model) = Entity::find_by_id(id).one(self.db()).await? else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(to_note(model)));
        }

        let mut active: note::ActiveModel = model.into();
        if let Some(title) = &patch.title {
            active.title = Set(Some(title.clone()));
        }
        if let Some(content) = &patch.content {
            active.content = Set(Some(content.clone()));
        }
        let updated = active.update(self.db()).await?;
        Ok(Some(to_note(updated)))
    }

    /// Returns `false` when no note had that id.
    pub async fn delete_note(&self, id: i32) -> Result<bool> {
        let res = Entity::delete_by_id(id).exec(self.db()).await?;
        Ok(res.rows_affected > 0)
    }
}

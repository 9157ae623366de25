//! Repository for the `notes` collection.
//!
//! Every operation is owner-scoped: the owner id is part of the WHERE
//! clause, so a note belonging to someone else is indistinguishable from a
//! missing one. Each call is a single statement; concurrent updates to the
//! same note are last-write-wins.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, content, created_at";

/// Provides single-document operations on notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List all notes for an owner, newest first. Id is a tiebreaker so
    /// notes sharing a creation timestamp still list in a stable order.
    pub async fn list_by_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE owner_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new note with a freshly generated id, returning the created
    /// row. `created_at` is assigned by the store.
    pub async fn create(
        pool: &PgPool,
        owner_id: Uuid,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (id, owner_id, title, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(Uuid::new_v4())
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Overwrite title and content of the owner's note. `created_at` is
    /// never touched.
    ///
    /// Returns `None` if no note with the given id belongs to `owner_id`.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        owner_id: Uuid,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET title = $3, content = $4
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete the owner's note. Returns `true` if a row was removed, so a
    /// repeated delete reports not-found to the caller.
    pub async fn delete(pool: &PgPool, id: Uuid, owner_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

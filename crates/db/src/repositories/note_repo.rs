//! Repository for the `notes` table.

use chrono::Utc;
use quicknote_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::note::{CreateNote, Note, NoteFilter, ReplaceNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category, completed, created_at, updated_at";

/// Newest first; `id` breaks ties between notes created in the same instant.
///
/// `julianday` compares instants rather than text, so rows stamped by the
/// column default (`YYYY-MM-DD HH:MM:SS`) interleave correctly with rows
/// stamped here (RFC 3339).
const ORDER_BY: &str = "ORDER BY julianday(created_at) DESC, id DESC";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning its assigned id.
    ///
    /// `completed` starts false and both timestamps are set to now.
    pub async fn create(pool: &SqlitePool, input: &CreateNote) -> Result<DbId, sqlx::Error> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO notes (title, description, category, completed, created_at, updated_at) \
             VALUES ($1, $2, $3, 0, $4, $4)",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.category)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Find a note by id.
    ///
    /// Read-back helper: the HTTP surface has no single-note endpoint, so
    /// this serves tooling and tests that need to inspect one row.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notes matching `filter`, newest first.
    ///
    /// Search terms match as literal substrings: `%`, `_` and `\` in the
    /// term are escaped before being bound into the `LIKE` pattern.
    pub async fn list(pool: &SqlitePool, filter: &NoteFilter) -> Result<Vec<Note>, sqlx::Error> {
        match filter {
            NoteFilter::All => {
                let query = format!("SELECT {COLUMNS} FROM notes {ORDER_BY}");
                sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
            }
            NoteFilter::Search(search) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM notes \
                     WHERE title LIKE $1 ESCAPE '\\' OR description LIKE $1 ESCAPE '\\' \
                     {ORDER_BY}"
                );
                sqlx::query_as::<_, Note>(&query)
                    .bind(like_pattern(search))
                    .fetch_all(pool)
                    .await
            }
            NoteFilter::Category(category) => {
                let query = format!("SELECT {COLUMNS} FROM notes WHERE category = $1 {ORDER_BY}");
                sqlx::query_as::<_, Note>(&query)
                    .bind(category)
                    .fetch_all(pool)
                    .await
            }
            NoteFilter::SearchAndCategory { search, category } => {
                let query = format!(
                    "SELECT {COLUMNS} FROM notes \
                     WHERE (title LIKE $1 ESCAPE '\\' OR description LIKE $1 ESCAPE '\\') \
                       AND category = $2 \
                     {ORDER_BY}"
                );
                sqlx::query_as::<_, Note>(&query)
                    .bind(like_pattern(search))
                    .bind(category)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Replace every mutable field of a note and refresh `updated_at`.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        input: &ReplaceNote,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notes SET \
                title = $2, \
                description = $3, \
                category = $4, \
                completed = $5, \
                updated_at = $6 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.category)
        .bind(input.completed)
        .bind(Utc::now())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a note. Returns `false` if no row with the given `id` exists.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build a `LIKE` pattern matching `term` anywhere in the column.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

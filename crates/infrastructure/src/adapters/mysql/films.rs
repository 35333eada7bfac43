//! MySQL implementation of the film repository.

use chrono::NaiveDate;
use sqlx::Row;
use sqlx::mysql::MySqlRow;

use filmotek_domain::film::{
    Film, FilmDescription, FilmDraft, FilmId, FilmPatch, FilmTitle, Genre, MpaRating, ReleaseDate,
    RunningTime,
};
use filmotek_workflow::errors::WorkflowError;
use filmotek_workflow::ports::{FilmRepository, WorkflowResult};

use super::{MySqlPool, corrupt_row, storage_error};

// =============================================================================
// MySqlFilmRepository
// =============================================================================

/// MySQL-backed film repository.
///
/// Films live in the `films` table; their genres in the `film_genres`
/// join table, resolved against the in-code genre vocabulary. Identifier
/// assignment is the table's auto-increment column.
#[derive(Debug, Clone)]
pub struct MySqlFilmRepository {
    pool: MySqlPool,
}

impl MySqlFilmRepository {
    /// Creates a new MySQL film repository on the given pool.
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Rewrites the genre rows for a film.
    async fn replace_genres(
        &self,
        operation: &'static str,
        id: FilmId,
        genres: &[Genre],
    ) -> WorkflowResult<()> {
        sqlx::query("DELETE FROM film_genres WHERE film_id = ?")
            .bind(id.value())
            .execute(self.pool.as_inner())
            .await
            .map_err(|error| storage_error(operation, &error))?;

        for genre in genres {
            sqlx::query("INSERT INTO film_genres (film_id, genre_id) VALUES (?, ?)")
                .bind(id.value())
                .bind(genre.id())
                .execute(self.pool.as_inner())
                .await
                .map_err(|error| storage_error(operation, &error))?;
        }

        Ok(())
    }
}

// =============================================================================
// FilmRepository Implementation
// =============================================================================

impl FilmRepository for MySqlFilmRepository {
    async fn create(&self, draft: FilmDraft) -> WorkflowResult<Film> {
        let result = sqlx::query(
            r#"
            INSERT INTO films (title, description, release_date, duration_minutes, mpa_rating_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(draft.title().value())
        .bind(draft.description().map(FilmDescription::value))
        .bind(draft.release_date().value())
        .bind(draft.duration().minutes())
        .bind(draft.mpa().map(|mpa| mpa.id()))
        .execute(self.pool.as_inner())
        .await
        .map_err(|error| storage_error("create", &error))?;

        let id = FilmId::new(result.last_insert_id() as i64);
        self.replace_genres("create", id, draft.genres()).await?;

        tracing::info!("Created film id={}, title={}", id, draft.title());
        Ok(Film::new(id, draft))
    }

    async fn update(&self, id: FilmId, patch: FilmPatch) -> WorkflowResult<Film> {
        let mut film = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("Film", id.to_string()))?;
        film.apply_patch(patch);

        sqlx::query(
            r#"
            UPDATE films
            SET title = ?, description = ?, release_date = ?, duration_minutes = ?, mpa_rating_id = ?
            WHERE id = ?
            "#,
        )
        .bind(film.title().value())
        .bind(film.description().map(FilmDescription::value))
        .bind(film.release_date().value())
        .bind(film.duration().minutes())
        .bind(film.mpa().map(|mpa| mpa.id()))
        .bind(id.value())
        .execute(self.pool.as_inner())
        .await
        .map_err(|error| storage_error("update", &error))?;

        self.replace_genres("update", id, film.genres()).await?;

        tracing::info!("Updated film id={}, title={}", id, film.title());
        Ok(film)
    }

    async fn find_by_id(&self, id: FilmId) -> WorkflowResult<Option<Film>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, release_date, duration_minutes, mpa_rating_id
            FROM films
            WHERE id = ?
            "#,
        )
        .bind(id.value())
        .fetch_optional(self.pool.as_inner())
        .await
        .map_err(|error| storage_error("find_by_id", &error))?;

        match row {
            Some(row) => {
                let genres = load_genres(&self.pool, "find_by_id", id).await?;
                Ok(Some(film_from_row("find_by_id", &row, genres)?))
            }
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> WorkflowResult<Vec<Film>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, release_date, duration_minutes, mpa_rating_id
            FROM films
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_inner())
        .await
        .map_err(|error| storage_error("list_all", &error))?;

        let mut films = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: i64 = row
                .try_get("id")
                .map_err(|error| storage_error("list_all", &error))?;
            let genres = load_genres(&self.pool, "list_all", FilmId::new(id)).await?;
            films.push(film_from_row("list_all", row, genres)?);
        }
        Ok(films)
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

/// Loads the genre list for a film, resolved against the vocabulary.
pub(super) async fn load_genres(
    pool: &MySqlPool,
    operation: &'static str,
    film_id: FilmId,
) -> WorkflowResult<Vec<Genre>> {
    let rows = sqlx::query("SELECT genre_id FROM film_genres WHERE film_id = ? ORDER BY genre_id")
        .bind(film_id.value())
        .fetch_all(pool.as_inner())
        .await
        .map_err(|error| storage_error(operation, &error))?;

    let mut genres = Vec::with_capacity(rows.len());
    for row in &rows {
        let genre_id: i64 = row
            .try_get("genre_id")
            .map_err(|error| storage_error(operation, &error))?;
        let genre = Genre::by_id(genre_id)
            .ok_or_else(|| corrupt_row(operation, format!("unknown genre id {}", genre_id)))?;
        genres.push(genre);
    }
    Ok(genres)
}

/// Reconstructs a film aggregate from a `films` row.
///
/// Row data passes through the same value-object constructors as API
/// input, so a row violating the domain constraints is reported instead
/// of silently accepted.
pub(super) fn film_from_row(
    operation: &'static str,
    row: &MySqlRow,
    genres: Vec<Genre>,
) -> WorkflowResult<Film> {
    let id: i64 = row
        .try_get("id")
        .map_err(|error| storage_error(operation, &error))?;
    let title: String = row
        .try_get("title")
        .map_err(|error| storage_error(operation, &error))?;
    let description: Option<String> = row
        .try_get("description")
        .map_err(|error| storage_error(operation, &error))?;
    let release_date: NaiveDate = row
        .try_get("release_date")
        .map_err(|error| storage_error(operation, &error))?;
    let duration_minutes: i32 = row
        .try_get("duration_minutes")
        .map_err(|error| storage_error(operation, &error))?;
    let mpa_rating_id: Option<i64> = row
        .try_get("mpa_rating_id")
        .map_err(|error| storage_error(operation, &error))?;

    let title = FilmTitle::new(title).map_err(|error| corrupt_row(operation, error))?;
    let description = description
        .map(FilmDescription::new)
        .transpose()
        .map_err(|error| corrupt_row(operation, error))?;
    let release_date =
        ReleaseDate::new(release_date).map_err(|error| corrupt_row(operation, error))?;
    let duration =
        RunningTime::new(duration_minutes).map_err(|error| corrupt_row(operation, error))?;
    let mpa = mpa_rating_id
        .map(|rating_id| {
            MpaRating::by_id(rating_id).ok_or_else(|| {
                corrupt_row(operation, format!("unknown MPA rating id {}", rating_id))
            })
        })
        .transpose()?;

    let draft = FilmDraft::new(title, description, release_date, duration, genres, mpa);
    Ok(Film::new(FilmId::new(id), draft))
}

//! The film aggregate and its create / partial-update inputs.

use super::{FilmDescription, FilmId, FilmTitle, Genre, MpaRating, ReleaseDate, RunningTime};

// =============================================================================
// Film
// =============================================================================

/// A catalog film.
///
/// The identifier is assigned by the store; every other attribute is a
/// validated value object, so a `Film` that exists is well-formed.
/// Likes are not part of the aggregate; they live in the like store and
/// are joined on at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    id: FilmId,
    title: FilmTitle,
    description: Option<FilmDescription>,
    release_date: ReleaseDate,
    duration: RunningTime,
    genres: Vec<Genre>,
    mpa: Option<MpaRating>,
}

impl Film {
    /// Assembles a film from a store-assigned identifier and a draft.
    #[must_use]
    pub fn new(id: FilmId, draft: FilmDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            release_date: draft.release_date,
            duration: draft.duration,
            genres: draft.genres,
            mpa: draft.mpa,
        }
    }

    #[must_use]
    pub const fn id(&self) -> FilmId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &FilmTitle {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&FilmDescription> {
        self.description.as_ref()
    }

    #[must_use]
    pub const fn release_date(&self) -> ReleaseDate {
        self.release_date
    }

    #[must_use]
    pub const fn duration(&self) -> RunningTime {
        self.duration
    }

    #[must_use]
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    #[must_use]
    pub const fn mpa(&self) -> Option<MpaRating> {
        self.mpa
    }

    /// Applies a partial update.
    ///
    /// Only the fields present in the patch change; the patch was fully
    /// validated when it was built, so application cannot fail and never
    /// leaves the aggregate half-updated.
    pub fn apply_patch(&mut self, patch: FilmPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(release_date) = patch.release_date {
            self.release_date = release_date;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(genres) = patch.genres {
            self.genres = normalize_genres(genres);
        }
        if let Some(mpa) = patch.mpa {
            self.mpa = Some(mpa);
        }
    }
}

// =============================================================================
// FilmDraft
// =============================================================================

/// Validated input for creating a film.
///
/// A draft is a film without an identifier. Genres are deduplicated and
/// ordered by id on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmDraft {
    title: FilmTitle,
    description: Option<FilmDescription>,
    release_date: ReleaseDate,
    duration: RunningTime,
    genres: Vec<Genre>,
    mpa: Option<MpaRating>,
}

impl FilmDraft {
    #[must_use]
    pub fn new(
        title: FilmTitle,
        description: Option<FilmDescription>,
        release_date: ReleaseDate,
        duration: RunningTime,
        genres: Vec<Genre>,
        mpa: Option<MpaRating>,
    ) -> Self {
        Self {
            title,
            description,
            release_date,
            duration,
            genres: normalize_genres(genres),
            mpa,
        }
    }

    #[must_use]
    pub fn title(&self) -> &FilmTitle {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&FilmDescription> {
        self.description.as_ref()
    }

    #[must_use]
    pub const fn release_date(&self) -> ReleaseDate {
        self.release_date
    }

    #[must_use]
    pub const fn duration(&self) -> RunningTime {
        self.duration
    }

    #[must_use]
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    #[must_use]
    pub const fn mpa(&self) -> Option<MpaRating> {
        self.mpa
    }
}

// =============================================================================
// FilmPatch
// =============================================================================

/// Validated partial update for a film.
///
/// Absent fields are left untouched on application. An all-absent patch
/// is legal and a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilmPatch {
    pub title: Option<FilmTitle>,
    pub description: Option<FilmDescription>,
    pub release_date: Option<ReleaseDate>,
    pub duration: Option<RunningTime>,
    pub genres: Option<Vec<Genre>>,
    pub mpa: Option<MpaRating>,
}

impl FilmPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.release_date.is_none()
            && self.duration.is_none()
            && self.genres.is_none()
            && self.mpa.is_none()
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Deduplicates genres and orders them by id.
fn normalize_genres(mut genres: Vec<Genre>) -> Vec<Genre> {
    genres.sort_by_key(Genre::id);
    genres.dedup();
    genres
}

// =============================================================================
// Tests
// =============================================================================

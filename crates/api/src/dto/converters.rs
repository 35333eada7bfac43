//! Conversions between DTOs and domain types.
//!
//! Request conversion is where eager validation happens: every field
//! passes through its value-object constructor, and vocabulary
//! references resolve against the static tables, before any workflow
//! runs.

use filmotek_domain::film::{
    Film, FilmDescription, FilmDraft, FilmId, FilmPatch, FilmTitle, Genre, MpaRating, ReleaseDate,
    RunningTime,
};
use filmotek_domain::user::{Birthday, Email, Login, User, UserDraft, UserId, UserPatch};

use super::request::{
    CreateFilmRequest, CreateUserRequest, GenreRef, MpaRef, UpdateFilmRequest, UpdateUserRequest,
};
use super::response::{FilmResponse, GenreResponse, MpaResponse, UserResponse};
use crate::errors::ApiError;

// =============================================================================
// Film Requests → Domain
// =============================================================================

/// Validates a film creation request into a draft.
pub fn film_draft_from_request(request: CreateFilmRequest) -> Result<FilmDraft, ApiError> {
    let title = FilmTitle::new(request.name)?;
    let description = request
        .description
        .map(FilmDescription::new)
        .transpose()?;
    let release_date = ReleaseDate::new(request.release_date)?;
    let duration = RunningTime::new(request.duration)?;
    let genres = resolve_genres(&request.genres)?;
    let mpa = request.mpa.map(resolve_mpa).transpose()?;

    Ok(FilmDraft::new(
        title,
        description,
        release_date,
        duration,
        genres,
        mpa,
    ))
}

/// Validates a film update request into an identifier and a patch.
pub fn film_patch_from_request(
    request: UpdateFilmRequest,
) -> Result<(FilmId, FilmPatch), ApiError> {
    let patch = FilmPatch {
        title: request.name.map(FilmTitle::new).transpose()?,
        description: request
            .description
            .map(FilmDescription::new)
            .transpose()?,
        release_date: request.release_date.map(ReleaseDate::new).transpose()?,
        duration: request.duration.map(RunningTime::new).transpose()?,
        genres: request
            .genres
            .as_deref()
            .map(resolve_genres)
            .transpose()?,
        mpa: request.mpa.map(resolve_mpa).transpose()?,
    };

    Ok((FilmId::new(request.id), patch))
}

fn resolve_genres(references: &[GenreRef]) -> Result<Vec<Genre>, ApiError> {
    references
        .iter()
        .map(|reference| {
            Genre::by_id(reference.id)
                .ok_or_else(|| ApiError::not_found("Genre", reference.id.to_string()))
        })
        .collect()
}

fn resolve_mpa(reference: MpaRef) -> Result<MpaRating, ApiError> {
    MpaRating::by_id(reference.id)
        .ok_or_else(|| ApiError::not_found("MpaRating", reference.id.to_string()))
}

// =============================================================================
// User Requests → Domain
// =============================================================================

/// Validates a user registration request into a draft.
pub fn user_draft_from_request(request: CreateUserRequest) -> Result<UserDraft, ApiError> {
    let email = Email::new(request.email)?;
    let login = Login::new(request.login)?;
    let birthday = request.birthday.map(Birthday::new).transpose()?;

    Ok(UserDraft::new(email, login, request.name, birthday))
}

/// Validates a user update request into an identifier and a patch.
pub fn user_patch_from_request(
    request: UpdateUserRequest,
) -> Result<(UserId, UserPatch), ApiError> {
    let patch = UserPatch {
        email: request.email.map(Email::new).transpose()?,
        login: request.login.map(Login::new).transpose()?,
        name: request.name,
        birthday: request.birthday.map(Birthday::new).transpose()?,
    };

    Ok((UserId::new(request.id), patch))
}

// =============================================================================
// Domain → Responses
// =============================================================================

/// Renders a film with its like count.
#[must_use]
pub fn film_to_response(film: &Film, likes: u64) -> FilmResponse {
    FilmResponse {
        id: film.id().value(),
        name: film.title().value().to_string(),
        description: film
            .description()
            .map(|description| description.value().to_string()),
        release_date: film.release_date().value(),
        duration: film.duration().minutes(),
        genres: film.genres().iter().copied().map(genre_to_response).collect(),
        mpa: film.mpa().map(mpa_to_response),
        likes,
    }
}

/// Renders a user.
#[must_use]
pub fn user_to_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id().value(),
        email: user.email().value().to_string(),
        login: user.login().value().to_string(),
        name: user.name().to_string(),
        birthday: user.birthday().map(|birthday| birthday.value()),
    }
}

/// Renders a genre as `(id, name)`.
#[must_use]
pub fn genre_to_response(genre: Genre) -> GenreResponse {
    GenreResponse {
        id: genre.id(),
        name: genre.name().to_string(),
    }
}

/// Renders an MPA rating as `(id, name)`.
#[must_use]
pub fn mpa_to_response(rating: MpaRating) -> MpaResponse {
    MpaResponse {
        id: rating.id(),
        name: rating.code().to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

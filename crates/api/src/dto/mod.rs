//! Request and response DTOs.
//!
//! Request DTOs are plain serde structs; the converters turn them into
//! validated domain drafts and patches before any workflow runs, so a
//! malformed field aborts the whole operation with nothing mutated.

pub mod converters;
pub mod request;
pub mod response;

pub use converters::{
    film_draft_from_request, film_patch_from_request, film_to_response, genre_to_response,
    mpa_to_response, user_draft_from_request, user_patch_from_request, user_to_response,
};
pub use request::{
    CreateFilmRequest, CreateUserRequest, GenreRef, MpaRef, PopularFilmsParams, UpdateFilmRequest,
    UpdateUserRequest,
};
pub use response::{
    ErrorDetailResponse, ErrorResponse, FilmResponse, GenreResponse, HealthResponse, MpaResponse,
    UserResponse,
};

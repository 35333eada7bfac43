//! Film catalog subdomain.
//!
//! This module provides:
//!
//! - **FilmId**: store-assigned film identifier
//! - **FilmTitle / FilmDescription / ReleaseDate / RunningTime**: validated
//!   attribute value objects
//! - **Genre / MpaRating**: static catalog vocabularies
//! - **Film / FilmDraft / FilmPatch**: the aggregate plus its create and
//!   partial-update inputs
//! - **rank_by_likes**: the popularity ordering

mod aggregate;
mod attributes;
mod genre;
mod identifier;
mod ranking;
mod rating;

pub use aggregate::{Film, FilmDraft, FilmPatch};
pub use attributes::{FilmDescription, FilmTitle, ReleaseDate, RunningTime};
pub use genre::Genre;
pub use identifier::FilmId;
pub use ranking::rank_by_likes;
pub use rating::MpaRating;

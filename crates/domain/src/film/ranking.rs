//! Popularity ranking over like counts.

use super::Film;

// =============================================================================
// rank_by_likes
// =============================================================================

/// Orders films by popularity and truncates to `limit`.
///
/// Primary key: like count, descending. Tie-break: film id, ascending,
/// so the ordering is reproducible across runs and across store
/// implementations.
///
/// Fewer entries than `limit` returns all of them; an empty input
/// returns an empty list. The ranking is recomputed per call: at catalog
/// sizes of tens to low thousands a full sort is the whole algorithm.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use filmotek_domain::film::{
///     Film, FilmDraft, FilmId, FilmTitle, ReleaseDate, RunningTime, rank_by_likes,
/// };
///
/// let film = |id: i64, title: &str| {
///     Film::new(
///         FilmId::new(id),
///         FilmDraft::new(
///             FilmTitle::new(title).unwrap(),
///             None,
///             ReleaseDate::new(NaiveDate::from_ymd_opt(1999, 3, 31).unwrap()).unwrap(),
///             RunningTime::new(136).unwrap(),
///             vec![],
///             None,
///         ),
///     )
/// };
///
/// let ranked = rank_by_likes(
///     vec![(film(1, "First"), 2), (film(2, "Second"), 2), (film(3, "Third"), 1)],
///     2,
/// );
///
/// let ids: Vec<i64> = ranked.iter().map(|film| film.id().value()).collect();
/// assert_eq!(ids, vec![1, 2]);
/// ```
#[must_use]
pub fn rank_by_likes(mut entries: Vec<(Film, u64)>, limit: usize) -> Vec<Film> {
    entries.sort_by(|(left_film, left_count), (right_film, right_count)| {
        right_count
            .cmp(left_count)
            .then_with(|| left_film.id().cmp(&right_film.id()))
    });

    entries
        .into_iter()
        .take(limit)
        .map(|(film, _)| film)
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

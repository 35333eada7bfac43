//! MPA rating vocabulary.

use std::fmt;

// =============================================================================
// MpaRating
// =============================================================================

/// Motion Picture Association rating from the fixed vocabulary.
///
/// Like [`Genre`](crate::film::Genre), ratings are resolved through an
/// explicit `(id, rating)` table instead of enum declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MpaRating {
    G,
    Pg,
    Pg13,
    R,
    Nc17,
}

/// The rating lookup table as stable `(id, rating)` pairs, ordered by id.
static RATING_TABLE: [(i64, MpaRating); 5] = [
    (1, MpaRating::G),
    (2, MpaRating::Pg),
    (3, MpaRating::Pg13),
    (4, MpaRating::R),
    (5, MpaRating::Nc17),
];

impl MpaRating {
    /// All ratings, ordered by id.
    #[must_use]
    pub fn all() -> impl Iterator<Item = MpaRating> {
        RATING_TABLE.iter().map(|(_, rating)| *rating)
    }

    /// Looks a rating up by its stable id.
    #[must_use]
    pub fn by_id(id: i64) -> Option<MpaRating> {
        RATING_TABLE
            .iter()
            .find(|(table_id, _)| *table_id == id)
            .map(|(_, rating)| *rating)
    }

    /// Returns the rating's stable id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        match self {
            Self::G => 1,
            Self::Pg => 2,
            Self::Pg13 => 3,
            Self::R => 4,
            Self::Nc17 => 5,
        }
    }

    /// Returns the rating's display code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::G => "G",
            Self::Pg => "PG",
            Self::Pg13 => "PG-13",
            Self::R => "R",
            Self::Nc17 => "NC-17",
        }
    }

    /// Returns the rating's audience description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::G => "no age restrictions",
            Self::Pg => "parental guidance suggested",
            Self::Pg13 => "not recommended under 13",
            Self::R => "under 17 requires an accompanying adult",
            Self::Nc17 => "no one under 18 admitted",
        }
    }
}

impl fmt::Display for MpaRating {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.code())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, MpaRating::G, "G")]
    #[case(2, MpaRating::Pg, "PG")]
    #[case(3, MpaRating::Pg13, "PG-13")]
    #[case(4, MpaRating::R, "R")]
    #[case(5, MpaRating::Nc17, "NC-17")]
    fn by_id_finds_rating(#[case] id: i64, #[case] expected: MpaRating, #[case] code: &str) {
        let rating = MpaRating::by_id(id).unwrap();
        assert_eq!(rating, expected);
        assert_eq!(rating.code(), code);
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(-3)]
    fn by_id_unknown_returns_none(#[case] id: i64) {
        assert_eq!(MpaRating::by_id(id), None);
    }

    #[rstest]
    fn id_round_trips_through_table() {
        for rating in MpaRating::all() {
            assert_eq!(MpaRating::by_id(rating.id()), Some(rating));
        }
    }

    #[rstest]
    fn descriptions_are_non_empty() {
        for rating in MpaRating::all() {
            assert!(!rating.description().is_empty());
        }
    }

    #[rstest]
    fn display_uses_code() {
        assert_eq!(format!("{}", MpaRating::Pg13), "PG-13");
    }
}

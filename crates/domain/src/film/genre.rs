//! Film genre vocabulary.

use std::fmt;

// =============================================================================
// Genre
// =============================================================================

/// Film genre from the fixed catalog vocabulary.
///
/// Genres are identified by a stable numeric id through an explicit
/// lookup table rather than the enum's declaration order, so reordering
/// variants can never silently change persisted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Comedy,
    Drama,
    Cartoon,
    Thriller,
    Documentary,
    Action,
}

/// The genre lookup table as stable `(id, genre)` pairs, ordered by id.
static GENRE_TABLE: [(i64, Genre); 6] = [
    (1, Genre::Comedy),
    (2, Genre::Drama),
    (3, Genre::Cartoon),
    (4, Genre::Thriller),
    (5, Genre::Documentary),
    (6, Genre::Action),
];

impl Genre {
    /// All genres, ordered by id.
    #[must_use]
    pub fn all() -> impl Iterator<Item = Genre> {
        GENRE_TABLE.iter().map(|(_, genre)| *genre)
    }

    /// Looks a genre up by its stable id.
    #[must_use]
    pub fn by_id(id: i64) -> Option<Genre> {
        GENRE_TABLE
            .iter()
            .find(|(table_id, _)| *table_id == id)
            .map(|(_, genre)| *genre)
    }

    /// Returns the genre's stable id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        match self {
            Self::Comedy => 1,
            Self::Drama => 2,
            Self::Cartoon => 3,
            Self::Thriller => 4,
            Self::Documentary => 5,
            Self::Action => 6,
        }
    }

    /// Returns the genre's display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Cartoon => "Cartoon",
            Self::Thriller => "Thriller",
            Self::Documentary => "Documentary",
            Self::Action => "Action",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================

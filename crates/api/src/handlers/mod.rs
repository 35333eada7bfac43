//! Request handlers.

pub mod catalog;
pub mod films;
pub mod friends;
pub mod health;
pub mod likes;
pub mod users;

// Re-export handlers for convenient access
pub use catalog::{get_genre, get_genres, get_mpa_rating, get_mpa_ratings};
pub use films::{create_film, get_film, get_films, get_popular_films, update_film};
pub use friends::{
    add_friend, confirm_friend, get_common_friends, get_confirmed_friends, get_friends,
    remove_friend,
};
pub use health::health_check;
pub use likes::{add_like, remove_like};
pub use users::{create_user, get_user, get_users, update_user};

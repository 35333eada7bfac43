//! Routing definitions.
//!
//! All routes live at the root, mirroring the service's public surface:
//! films (with likes and the popularity listing), users (with the
//! friendship graph), and the static genre / MPA vocabularies.

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use filmotek_workflow::ports::{FilmRepository, FriendshipStore, LikeStore, UserRepository};

use crate::handlers;
use crate::middleware::{RequestIdLayer, ResponseTimeLayer};
use crate::state::AppState;

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the API router over the given state.
///
/// # Examples
///
/// ```ignore
/// use filmotek_api::routes::create_router;
/// use filmotek_api::state::AppState;
///
/// let state = AppState::new(films, users, likes, friendships);
/// let router = create_router(state);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router<Films, Users, Likes, Friends>(
    state: AppState<Films, Users, Likes, Friends>,
) -> Router
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Films
        .route(
            "/films",
            post(handlers::create_film::<Films, Users, Likes, Friends>)
                .put(handlers::update_film::<Films, Users, Likes, Friends>)
                .get(handlers::get_films::<Films, Users, Likes, Friends>),
        )
        .route(
            "/films/popular",
            get(handlers::get_popular_films::<Films, Users, Likes, Friends>),
        )
        .route(
            "/films/{film_id}",
            get(handlers::get_film::<Films, Users, Likes, Friends>),
        )
        // Likes
        .route(
            "/films/{film_id}/like/{user_id}",
            put(handlers::add_like::<Films, Users, Likes, Friends>)
                .delete(handlers::remove_like::<Films, Users, Likes, Friends>),
        )
        // Vocabularies
        .route("/genres", get(handlers::get_genres))
        .route("/genres/{genre_id}", get(handlers::get_genre))
        .route("/mpa", get(handlers::get_mpa_ratings))
        .route("/mpa/{rating_id}", get(handlers::get_mpa_rating))
        // Users
        .route(
            "/users",
            post(handlers::create_user::<Films, Users, Likes, Friends>)
                .put(handlers::update_user::<Films, Users, Likes, Friends>)
                .get(handlers::get_users::<Films, Users, Likes, Friends>),
        )
        .route(
            "/users/{user_id}",
            get(handlers::get_user::<Films, Users, Likes, Friends>),
        )
        // Friendships
        .route(
            "/users/{user_id}/friends",
            get(handlers::get_friends::<Films, Users, Likes, Friends>),
        )
        .route(
            "/users/{user_id}/friends/confirmed",
            get(handlers::get_confirmed_friends::<Films, Users, Likes, Friends>),
        )
        .route(
            "/users/{user_id}/friends/common/{other_id}",
            get(handlers::get_common_friends::<Films, Users, Likes, Friends>),
        )
        .route(
            "/users/{user_id}/friends/{friend_id}",
            put(handlers::add_friend::<Films, Users, Likes, Friends>)
                .delete(handlers::remove_friend::<Films, Users, Likes, Friends>),
        )
        .route(
            "/users/{user_id}/friends/{friend_id}/confirm",
            put(handlers::confirm_friend::<Films, Users, Likes, Friends>),
        )
        // Middleware
        .layer(ResponseTimeLayer::new())
        .layer(RequestIdLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

/// Permissive CORS; deployments fronting this service restrict origins
/// at the edge.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use filmotek_infrastructure::adapters::memory::{
        MemoryFilmRepository, MemoryFriendshipStore, MemoryLikeStore, MemoryUserRepository,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        let films = MemoryFilmRepository::new();
        let likes = MemoryLikeStore::new(films.clone());
        let state = AppState::new(
            films,
            MemoryUserRepository::new(),
            likes,
            MemoryFriendshipStore::new(),
        );
        create_router(state)
    }

    #[rstest]
    #[tokio::test]
    async fn health_check_returns_200() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[rstest]
    #[tokio::test]
    async fn health_check_returns_json() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "healthy");
    }

    #[rstest]
    #[tokio::test]
    async fn get_missing_film_returns_404_with_error_body() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/films/12")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "FILM_NOT_FOUND");
    }

    #[rstest]
    #[tokio::test]
    async fn popular_route_takes_precedence_over_film_id() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/films/popular")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[rstest]
    #[tokio::test]
    async fn adds_request_id_header() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }

    #[rstest]
    #[tokio::test]
    async fn preserves_provided_request_id() {
        let app = create_test_app();
        let request_id = "test-request-id-123";

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", request_id)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get("x-request-id").unwrap(), request_id);
    }

    #[rstest]
    #[tokio::test]
    async fn adds_response_time_header() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().contains_key("x-response-time"));
    }
}

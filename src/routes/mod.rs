use axum::Router;

use crate::{AppState, Error};

pub mod artist_routes;
pub mod genre_routes;
pub mod mood_routes;
pub mod playlist_routes;
pub mod song_routes;

use self::{
    artist_routes::ArtistRoutes, genre_routes::GenreRoutes, mood_routes::MoodRoutes,
    playlist_routes::PlaylistRoutes, song_routes::SongRoutes,
};

/// All API routes, without the tracing and CORS layers added in `main`.
pub fn routes_all(app_state: AppState) -> Router {
    let routes_api = Router::new()
        .merge(ArtistRoutes::routes())
        .merge(GenreRoutes::routes())
        .merge(SongRoutes::routes())
        .merge(PlaylistRoutes::routes())
        .merge(MoodRoutes::routes());

    Router::new()
        .nest("/api", routes_api)
        .fallback(handler_404)
        .with_state(app_state)
}

async fn handler_404() -> Error {
    Error::RouteNotFound
}

use axum::{routing::get, Router};

use crate::{controllers::song_controller::SongController, AppState};

pub struct SongRoutes;

impl SongRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route("/songs", get(SongController::get_songs))
            .route("/songs/sort/{order}", get(SongController::get_songs_sorted))
            .route("/songs/{song_id}", get(SongController::get_song))
            .route(
                "/songs/search/begin/{substring}",
                get(SongController::search_begins_with),
            )
            .route(
                "/songs/search/any/{substring}",
                get(SongController::search_contains),
            )
            .route(
                "/songs/search/year/{year}",
                get(SongController::search_by_year),
            )
            .route(
                "/songs/artist/{artist_id}",
                get(SongController::get_songs_by_artist),
            )
            .route(
                "/songs/genre/{genre_id}",
                get(SongController::get_songs_by_genre),
            )
    }
}

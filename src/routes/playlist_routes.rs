use axum::{routing::get, Router};

use crate::{controllers::playlist_controller::PlaylistController, AppState};

pub struct PlaylistRoutes;

impl PlaylistRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new().route(
            "/playlists/{playlist_id}",
            get(PlaylistController::get_playlist),
        )
    }
}

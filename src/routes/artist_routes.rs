use axum::{routing::get, Router};

use crate::{controllers::artist_controller::ArtistController, AppState};

pub struct ArtistRoutes;

impl ArtistRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route("/artists", get(ArtistController::get_artists))
            .route("/artists/{artist_id}", get(ArtistController::get_artist))
            .route(
                "/artists/averages/{artist_id}",
                get(ArtistController::get_artist_averages),
            )
    }
}

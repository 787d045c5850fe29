use axum::{routing::get, Router};

use crate::{controllers::genre_controller::GenreController, AppState};

pub struct GenreRoutes;

impl GenreRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new().route("/genres", get(GenreController::get_genres))
    }
}

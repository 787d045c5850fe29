use axum::{routing::get, Router};

use crate::{controllers::mood_controller::MoodController, AppState};

pub struct MoodRoutes;

impl MoodRoutes {
    /// `/mood/{mood}` ranks with the default count.
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route("/mood/{mood}", get(MoodController::top_songs))
            .route(
                "/mood/{mood}/{count}",
                get(MoodController::top_songs_with_count),
            )
    }
}

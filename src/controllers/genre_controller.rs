use axum::{extract::State, Json};

use crate::{
    error::Result, helpers::response_helpers::rows_or_not_found, models::genre::Genre,
    services::genre_service::GenreService, AppState,
};

pub struct GenreController;

impl GenreController {
    pub async fn get_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>> {
        let genres = GenreService::get_genres(state.db.as_ref()).await;
        rows_or_not_found(genres, || "No genres found".to_string())
    }
}

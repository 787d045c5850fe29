use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::Result,
    helpers::response_helpers::rows_or_not_found,
    models::artist::{Artist, ArtistAverages},
    services::artist_service::ArtistService,
    AppState,
};

pub struct ArtistController;

impl ArtistController {
    pub async fn get_artists(State(state): State<AppState>) -> Result<Json<Vec<Artist>>> {
        let artists = ArtistService::get_artists(state.db.as_ref()).await;
        rows_or_not_found(artists, || "No artists found".to_string())
    }

    pub async fn get_artist(
        State(state): State<AppState>,
        Path(artist_id): Path<String>,
    ) -> Result<Json<Vec<Artist>>> {
        let artists = ArtistService::get_artist(state.db.as_ref(), &artist_id).await;
        rows_or_not_found(artists, || {
            format!("No artist match found for the artist_id {artist_id}")
        })
    }

    pub async fn get_artist_averages(
        State(state): State<AppState>,
        Path(artist_id): Path<String>,
    ) -> Result<Json<Vec<ArtistAverages>>> {
        let averages = ArtistService::get_artist_averages(state.db.as_ref(), &artist_id).await;
        rows_or_not_found(averages, || {
            format!("No songs found to average for the artist_id {artist_id}")
        })
    }
}

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::Result, helpers::response_helpers::rows_or_not_found,
    models::playlist::PlaylistEntry, services::playlist_service::PlaylistService, AppState,
};

pub struct PlaylistController;

impl PlaylistController {
    pub async fn get_playlist(
        State(state): State<AppState>,
        Path(playlist_id): Path<String>,
    ) -> Result<Json<Vec<PlaylistEntry>>> {
        let entries = PlaylistService::get_playlist(state.db.as_ref(), &playlist_id).await;
        rows_or_not_found(entries, || {
            format!("No playlist match found for the playlist_id {playlist_id}")
        })
    }
}

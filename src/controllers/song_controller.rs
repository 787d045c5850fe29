use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::Result, helpers::response_helpers::rows_or_not_found, models::song::Song,
    services::song_service::SongService, AppState,
};

pub struct SongController;

impl SongController {
    pub async fn get_songs(State(state): State<AppState>) -> Result<Json<Vec<Song>>> {
        let songs = SongService::get_songs(state.db.as_ref()).await;
        rows_or_not_found(songs, || "No songs found".to_string())
    }

    pub async fn get_songs_sorted(
        State(state): State<AppState>,
        Path(order): Path<String>,
    ) -> Result<Json<Vec<Song>>> {
        let songs = SongService::get_songs_sorted(state.db.as_ref(), &order).await;
        rows_or_not_found(songs, || {
            format!("No songs found when sorting by the order field {order}")
        })
    }

    pub async fn get_song(
        State(state): State<AppState>,
        Path(song_id): Path<String>,
    ) -> Result<Json<Vec<Song>>> {
        let songs = SongService::get_song(state.db.as_ref(), &song_id).await;
        rows_or_not_found(songs, || {
            format!("The song_id parameter '{song_id}' did not return any data")
        })
    }

    pub async fn search_begins_with(
        State(state): State<AppState>,
        Path(substring): Path<String>,
    ) -> Result<Json<Vec<Song>>> {
        let songs = SongService::search_title_begins_with(state.db.as_ref(), &substring).await;
        rows_or_not_found(songs, || {
            format!("No song matches found beginning with the substring {substring}")
        })
    }

    pub async fn search_contains(
        State(state): State<AppState>,
        Path(substring): Path<String>,
    ) -> Result<Json<Vec<Song>>> {
        let songs = SongService::search_title_contains(state.db.as_ref(), &substring).await;
        rows_or_not_found(songs, || {
            format!("No song matches found containing the substring {substring}")
        })
    }

    pub async fn search_by_year(
        State(state): State<AppState>,
        Path(year): Path<String>,
    ) -> Result<Json<Vec<Song>>> {
        let songs = SongService::get_songs_by_year(state.db.as_ref(), &year).await;
        rows_or_not_found(songs, || {
            format!("No song matches found whose year is equal to {year}")
        })
    }

    pub async fn get_songs_by_artist(
        State(state): State<AppState>,
        Path(artist_id): Path<String>,
    ) -> Result<Json<Vec<Song>>> {
        let songs = SongService::get_songs_by_artist(state.db.as_ref(), &artist_id).await;
        rows_or_not_found(songs, || {
            format!("No song matches found for the artist_id {artist_id}")
        })
    }

    pub async fn get_songs_by_genre(
        State(state): State<AppState>,
        Path(genre_id): Path<String>,
    ) -> Result<Json<Vec<Song>>> {
        let songs = SongService::get_songs_by_genre(state.db.as_ref(), &genre_id).await;
        rows_or_not_found(songs, || {
            format!("No song matches found for the genre_id {genre_id}")
        })
    }
}

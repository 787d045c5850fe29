use std::str::FromStr;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{Error, Result},
    helpers::response_helpers::rows_or_not_found,
    services::mood_service::{Mood, MoodService, MoodSong},
    validators::count_validator::CountValidator,
    AppState,
};

pub struct MoodController;

impl MoodController {
    pub async fn top_songs(
        State(state): State<AppState>,
        Path(mood): Path<String>,
    ) -> Result<Json<Vec<MoodSong>>> {
        Self::rank(state, &mood, None).await
    }

    pub async fn top_songs_with_count(
        State(state): State<AppState>,
        Path((mood, count)): Path<(String, String)>,
    ) -> Result<Json<Vec<MoodSong>>> {
        Self::rank(state, &mood, Some(count.as_str())).await
    }

    async fn rank(state: AppState, mood: &str, count: Option<&str>) -> Result<Json<Vec<MoodSong>>> {
        // Unknown moods are unmatched routes, not bad parameters.
        let mood = Mood::from_str(mood).map_err(|_| Error::RouteNotFound)?;
        let count = CountValidator::validate(count)?;

        let songs = MoodService::get_top_songs(state.db.as_ref(), mood, count).await;
        rows_or_not_found(songs, || {
            format!(
                "No song matches found for the mood {} with count {count}",
                mood.as_ref()
            )
        })
    }
}

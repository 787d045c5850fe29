use serde::Serialize;
use serde_json::Value;

use crate::{
    models::song::Song,
    services::song_service::SongService,
    supabase::{QueryResult, QueryService, RpcCall},
};

/// Moods ranked by one column are plain selections; the others need a stored procedure
/// because PostgREST cannot order by an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::AsRefStr, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Mood {
    Dancing,
    Happy,
    Coffee,
    Studying,
}

/// Rows of a mood ranking. Procedure rows are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MoodSong {
    Song(Song),
    Ranked(Value),
}

pub struct MoodService;

impl MoodService {
    pub async fn get_top_songs(
        db: &dyn QueryService,
        mood: Mood,
        count: u32,
    ) -> QueryResult<Vec<MoodSong>> {
        match mood {
            Mood::Dancing => Self::by_feature(db, "danceability", count).await,
            Mood::Happy => Self::by_feature(db, "valence", count).await,
            // liveness / acousticness
            Mood::Coffee => Self::by_procedure(db, "top_songs_coffee", count).await,
            // energy * speechiness
            Mood::Studying => Self::by_procedure(db, "top_songs_studying", count).await,
        }
    }

    async fn by_feature(
        db: &dyn QueryService,
        feature: &str,
        count: u32,
    ) -> QueryResult<Vec<MoodSong>> {
        let songs = SongService::get_top_songs_by(db, feature, count).await?;
        Ok(songs.into_iter().map(MoodSong::Song).collect())
    }

    async fn by_procedure(
        db: &dyn QueryService,
        function: &str,
        count: u32,
    ) -> QueryResult<Vec<MoodSong>> {
        let call = RpcCall::new(function).arg("limit_count", count);
        let rows = db.rpc(&call).await?;
        Ok(rows.into_iter().map(MoodSong::Ranked).collect())
    }
}

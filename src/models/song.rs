use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Projection used by every song route. Artist and genre are inner joins, so songs
/// without a matching artist or genre never come back.
pub const SONG_COLUMNS: &str = "
    song_id,
    title,
    artist:artists!inner(artist_id, artist_name),
    genre:genres!inner(genre_id, genre_name),
    year,
    bpm,
    energy,
    danceability,
    loudness,
    liveness,
    valence,
    duration,
    acousticness,
    speechiness,
    popularity
";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Song {
    pub song_id: i64,
    pub title: Option<String>,

    // Relations
    pub artist: SongArtist,
    pub genre: SongGenre,

    pub year: Option<i32>,

    // Audio features, kept as the remote sent them
    pub bpm: Option<Number>, // tempo
    pub energy: Option<Number>,
    pub danceability: Option<Number>,
    pub loudness: Option<Number>,
    pub liveness: Option<Number>,
    pub valence: Option<Number>,
    pub duration: Option<Number>,
    pub acousticness: Option<Number>,
    pub speechiness: Option<Number>,
    pub popularity: Option<Number>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SongArtist {
    pub artist_id: i64,
    pub artist_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SongGenre {
    pub genre_id: i64,
    pub genre_name: Option<String>,
}

use serde::{Deserialize, Serialize};

pub const PLAYLIST_COLUMNS: &str = "
    playlist_id,
    song:songs!inner(
        song_id,
        title,
        year,
        artist:artists!inner(artist_name),
        genre:genres!inner(genre_name)
    )
";

/// One song of a playlist.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaylistEntry {
    pub playlist_id: i64,
    pub song: PlaylistSong,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaylistSong {
    pub song_id: i64,
    pub title: Option<String>,
    pub year: Option<i32>,
    pub artist: ArtistName,
    pub genre: GenreName,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArtistName {
    pub artist_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenreName {
    pub genre_name: Option<String>,
}

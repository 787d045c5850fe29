use serde::{Deserialize, Serialize};
use serde_json::Number;

pub const ARTIST_COLUMNS: &str = "
    artist_id,
    artist_name,
    types(type_name),
    artist_image_url,
    spotify_url,
    spotify_desc
";

pub const ARTIST_AVERAGE_COLUMNS: &str = "
    avg_bpm:bpm.avg(),
    avg_energy:energy.avg(),
    avg_danceability:danceability.avg(),
    avg_loudness:loudness.avg(),
    avg_liveness:liveness.avg(),
    avg_valence:valence.avg(),
    avg_duration:duration.avg(),
    avg_acousticness:acousticness.avg(),
    avg_speechiness:speechiness.avg(),
    avg_popularity:popularity.avg()
";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Artist {
    pub artist_id: i64,
    pub artist_name: Option<String>,
    pub types: Option<ArtistType>,
    pub artist_image_url: Option<String>,
    pub spotify_url: Option<String>,
    pub spotify_desc: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArtistType {
    pub type_name: Option<String>,
}

/// Averages of the audio features over all songs of one artist.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArtistAverages {
    pub avg_bpm: Option<Number>,
    pub avg_energy: Option<Number>,
    pub avg_danceability: Option<Number>,
    pub avg_loudness: Option<Number>,
    pub avg_liveness: Option<Number>,
    pub avg_valence: Option<Number>,
    pub avg_duration: Option<Number>,
    pub avg_acousticness: Option<Number>,
    pub avg_speechiness: Option<Number>,
    pub avg_popularity: Option<Number>,
}

impl ArtistAverages {
    /// An aggregate over zero songs still yields one row, with every average null.
    pub fn is_empty(&self) -> bool {
        [
            &self.avg_bpm,
            &self.avg_energy,
            &self.avg_danceability,
            &self.avg_loudness,
            &self.avg_liveness,
            &self.avg_valence,
            &self.avg_duration,
            &self.avg_acousticness,
            &self.avg_speechiness,
            &self.avg_popularity,
        ]
        .iter()
        .all(|avg| avg.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_averages_is_empty() {
        let empty: ArtistAverages = serde_json::from_value(json!({
            "avg_bpm": null, "avg_energy": null, "avg_danceability": null,
            "avg_loudness": null, "avg_liveness": null, "avg_valence": null,
            "avg_duration": null, "avg_acousticness": null, "avg_speechiness": null,
            "avg_popularity": null
        }))
        .unwrap();
        assert!(empty.is_empty());

        let filled = ArtistAverages {
            avg_bpm: Some(Number::from_f64(118.5).unwrap()),
            ..empty
        };
        assert!(!filled.is_empty());
    }
}

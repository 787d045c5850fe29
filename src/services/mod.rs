pub mod artist_service;
pub mod genre_service;
pub mod mood_service;
pub mod playlist_service;
pub mod song_service;

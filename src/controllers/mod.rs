pub mod artist_controller;
pub mod genre_controller;
pub mod mood_controller;
pub mod playlist_controller;
pub mod song_controller;

pub mod artist;
pub mod genre;
pub mod playlist;
pub mod song;

use crate::{
    helpers::order_helpers::song_order_column,
    models::song::{Song, SONG_COLUMNS},
    supabase::{select_as, OrderColumn, Pattern, QueryResult, QueryService, Selection},
};

pub struct SongService;

impl SongService {
    fn songs() -> Selection {
        Selection::table("songs").columns(SONG_COLUMNS)
    }

    pub async fn get_songs(db: &dyn QueryService) -> QueryResult<Vec<Song>> {
        let selection = Self::songs().order(OrderColumn::column("title"), true);
        select_as(db, &selection).await
    }

    pub async fn get_songs_sorted(db: &dyn QueryService, field: &str) -> QueryResult<Vec<Song>> {
        let selection = Self::songs().order(song_order_column(field), true);
        select_as(db, &selection).await
    }

    pub async fn get_song(db: &dyn QueryService, song_id: &str) -> QueryResult<Vec<Song>> {
        let selection = Self::songs().eq("song_id", song_id);
        select_as(db, &selection).await
    }

    pub async fn search_title_begins_with(
        db: &dyn QueryService,
        prefix: &str,
    ) -> QueryResult<Vec<Song>> {
        let selection = Self::songs().ilike("title", Pattern::Prefix(prefix.to_string()));
        select_as(db, &selection).await
    }

    pub async fn search_title_contains(
        db: &dyn QueryService,
        substring: &str,
    ) -> QueryResult<Vec<Song>> {
        let selection = Self::songs().ilike("title", Pattern::Contains(substring.to_string()));
        select_as(db, &selection).await
    }

    pub async fn get_songs_by_year(db: &dyn QueryService, year: &str) -> QueryResult<Vec<Song>> {
        let selection = Self::songs().eq("year", year);
        select_as(db, &selection).await
    }

    pub async fn get_songs_by_artist(
        db: &dyn QueryService,
        artist_id: &str,
    ) -> QueryResult<Vec<Song>> {
        let selection = Self::songs().eq("artist_id", artist_id);
        select_as(db, &selection).await
    }

    pub async fn get_songs_by_genre(
        db: &dyn QueryService,
        genre_id: &str,
    ) -> QueryResult<Vec<Song>> {
        let selection = Self::songs().eq("genre_id", genre_id);
        select_as(db, &selection).await
    }

    /// Top songs by a single audio feature, highest first.
    pub async fn get_top_songs_by(
        db: &dyn QueryService,
        feature: &str,
        count: u32,
    ) -> QueryResult<Vec<Song>> {
        let selection = Self::songs()
            .order(OrderColumn::column(feature), false)
            .limit(count);
        select_as(db, &selection).await
    }
}

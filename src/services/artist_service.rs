use crate::{
    models::artist::{Artist, ArtistAverages, ARTIST_AVERAGE_COLUMNS, ARTIST_COLUMNS},
    supabase::{select_as, OrderColumn, QueryResult, QueryService, Selection},
};

pub struct ArtistService;

impl ArtistService {
    pub async fn get_artists(db: &dyn QueryService) -> QueryResult<Vec<Artist>> {
        let selection = Selection::table("artists")
            .columns(ARTIST_COLUMNS)
            .order(OrderColumn::column("artist_name"), true);

        select_as(db, &selection).await
    }

    pub async fn get_artist(db: &dyn QueryService, artist_id: &str) -> QueryResult<Vec<Artist>> {
        let selection = Selection::table("artists")
            .columns(ARTIST_COLUMNS)
            .eq("artist_id", artist_id);

        select_as(db, &selection).await
    }

    /// Averages of the audio features over the songs of `artist_id`.
    ///
    /// Rows where every average is null (artist without songs) are dropped.
    pub async fn get_artist_averages(
        db: &dyn QueryService,
        artist_id: &str,
    ) -> QueryResult<Vec<ArtistAverages>> {
        let selection = Selection::table("songs")
            .columns(ARTIST_AVERAGE_COLUMNS)
            .eq("artist_id", artist_id);

        let averages: Vec<ArtistAverages> = select_as(db, &selection).await?;

        Ok(averages.into_iter().filter(|a| !a.is_empty()).collect())
    }
}

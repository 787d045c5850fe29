use crate::{
    models::playlist::{PlaylistEntry, PLAYLIST_COLUMNS},
    supabase::{select_as, QueryResult, QueryService, Selection},
};

pub struct PlaylistService;

impl PlaylistService {
    pub async fn get_playlist(
        db: &dyn QueryService,
        playlist_id: &str,
    ) -> QueryResult<Vec<PlaylistEntry>> {
        let selection = Selection::table("playlists")
            .columns(PLAYLIST_COLUMNS)
            .eq("playlist_id", playlist_id);

        select_as(db, &selection).await
    }
}

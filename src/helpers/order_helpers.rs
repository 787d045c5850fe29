use crate::supabase::OrderColumn;

/// Maps the logical sort field of `/api/songs/sort/{order}` to a column of the song projection.
///
/// Unknown fields are passed through as column names; PostgREST rejects the ones that don't exist.
pub fn song_order_column(field: &str) -> OrderColumn {
    match field {
        "id" => OrderColumn::column("song_id"),
        "artist" => OrderColumn::referenced("artist", "artist_name"),
        "genre" => OrderColumn::referenced("genre", "genre_name"),
        other => OrderColumn::column(other),
    }
}

use crate::{
    models::genre::Genre,
    supabase::{select_as, QueryResult, QueryService, Selection},
};

pub struct GenreService;

impl GenreService {
    pub async fn get_genres(db: &dyn QueryService) -> QueryResult<Vec<Genre>> {
        select_as(db, &Selection::table("genres")).await
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Genre {
    pub genre_id: i64,
    pub genre_name: Option<String>,
}

use crate::record::Record;
use serde::{Deserialize, Serialize};

/// A review of a catalog movie.
///
/// `movie_info_id` refers to a movie logically only; nothing checks that the
/// movie exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_id: Option<String>,
    pub movie_info_id: i64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub rating: f64,
}

impl Record for Review {
    type Index = i64;

    const COLLECTION: &'static str = "review";
    const INDEX_FIELD: &'static str = "movieInfoId";

    fn id(&self) -> Option<&str> {
        self.review_id.as_deref()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.review_id = id;
    }

    fn index(&self) -> &i64 {
        &self.movie_info_id
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ListReviewsQuery {
    #[serde(rename = "movieInfoId")]
    pub movie_info_id: Option<i64>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

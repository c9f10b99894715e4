use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ListMovieInfosQuery {
    pub year: Option<i32>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

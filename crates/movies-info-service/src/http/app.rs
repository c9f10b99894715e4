use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::http::handlers::{
    create_movie_info_handler, delete_movie_info_handler, get_movie_info_handler,
    health_handler, list_movie_infos_handler, update_movie_info_handler,
};
use crate::http::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/v1/movieinfos",
                get(list_movie_infos_handler).post(create_movie_info_handler),
            )
            .route(
                "/v1/movieinfos/{id}",
                get(get_movie_info_handler)
                    .put(update_movie_info_handler)
                    .delete(delete_movie_info_handler),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

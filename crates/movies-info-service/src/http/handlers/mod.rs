mod health;
mod movie_info;

pub use health::health_handler;
pub use movie_info::{
    create_movie_info_handler, delete_movie_info_handler, get_movie_info_handler,
    list_movie_infos_handler, update_movie_info_handler,
};

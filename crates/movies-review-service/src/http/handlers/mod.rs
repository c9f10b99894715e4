mod health;
mod review;

pub use health::{health_handler, hello_world_handler};
pub use review::{
    create_review_handler, delete_review_handler, get_review_handler, list_reviews_handler,
    update_review_handler,
};

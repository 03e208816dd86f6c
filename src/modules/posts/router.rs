use crate::dispatch::{Protection, Route};

use super::controller::{create_post, delete_post, get_all_posts, get_post, update_post};

pub fn routes() -> Vec<Route> {
    vec![
        Route::post("/posts", "create_post", create_post),
        Route::get("/posts", "get_all_posts", get_all_posts),
        Route::get("/posts/{id}", "get_post", get_post),
        Route::put("/posts/{id}", "update_post", update_post),
        Route::delete("/posts/{id}", "delete_post", delete_post),
    ]
    .into_iter()
    .map(|route| route.protected(Protection::Bearer))
    .collect()
}

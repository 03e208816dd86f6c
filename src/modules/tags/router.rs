use crate::dispatch::Route;

use super::controller::{
    create_tag, delete_tag, get_all_tags, get_popular_tags, get_tag, update_tag,
};

pub fn routes() -> Vec<Route> {
    vec![
        Route::post("/tags", "create_tag", create_tag),
        Route::get("/tags", "get_all_tags", get_all_tags),
        // static segment, matched ahead of `{id}`
        Route::get("/tags/popular", "get_popular_tags", get_popular_tags),
        Route::get("/tags/{id}", "get_tag", get_tag),
        Route::put("/tags/{id}", "update_tag", update_tag),
        Route::delete("/tags/{id}", "delete_tag", delete_tag),
    ]
}

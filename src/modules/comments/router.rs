use crate::dispatch::{Protection, Route};

use super::controller::{
    create_comment, delete_comment, get_all_comments, get_comment, update_comment,
};

pub fn routes() -> Vec<Route> {
    vec![
        Route::post("/comments", "create_comment", create_comment),
        Route::get("/comments", "get_all_comments", get_all_comments),
        Route::get("/comments/{id}", "get_comment", get_comment),
        Route::put("/comments/{id}", "update_comment", update_comment),
        Route::delete("/comments/{id}", "delete_comment", delete_comment),
    ]
    .into_iter()
    .map(|route| route.protected(Protection::Bearer))
    .collect()
}

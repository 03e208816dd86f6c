use crate::dispatch::Route;

use super::controller::{
    create_category, delete_category, get_all_categories, get_category, update_category,
    update_category_from_body,
};

pub fn routes() -> Vec<Route> {
    vec![
        Route::post("/categories", "create_category", create_category),
        Route::get("/categories", "get_all_categories", get_all_categories),
        Route::put("/categories", "update_category", update_category_from_body),
        Route::get("/categories/{id}", "get_category", get_category),
        Route::put("/categories/{id}", "update_category", update_category),
        Route::delete("/categories/{id}", "delete_category", delete_category),
    ]
}

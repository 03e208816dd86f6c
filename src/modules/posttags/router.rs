use crate::dispatch::Route;

use super::controller::{
    create_post_tag, delete_post_tag, get_all_post_tags, get_post_tag, get_posts_by_tag,
    update_post_tag,
};

pub fn routes() -> Vec<Route> {
    vec![
        Route::post("/posttags", "create_post_tag", create_post_tag),
        Route::get("/posttags", "get_all_post_tags", get_all_post_tags),
        // `{id}` is the tag id here
        Route::get("/posttags/{id}/posts", "get_posts_by_tag", get_posts_by_tag),
        // and the post id here
        Route::get("/posttags/{id}/{tag_id}", "get_post_tag", get_post_tag),
        Route::put("/posttags/{id}/{tag_id}", "update_post_tag", update_post_tag),
        Route::delete("/posttags/{id}/{tag_id}", "delete_post_tag", delete_post_tag),
    ]
}

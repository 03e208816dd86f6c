use forumgate_core::Pagination;
use forumgate_rpc::pb::post::{
    DeletePostRequest, GetAllPostsRequest, GetPostRequest, UpdatePostRequest,
};

use crate::dispatch::binder::identified_by_id;
use crate::dispatch::{Filters, Listing};

identified_by_id!(GetPostRequest, UpdatePostRequest, DeletePostRequest);

impl Listing for GetAllPostsRequest {
    fn paginate(&mut self, pagination: Pagination) {
        self.page = pagination.page;
        self.limit = pagination.limit;
    }

    fn apply_filters(&mut self, filters: &Filters<'_>) {
        self.user_id = filters.get("user_id");
        self.title = filters.get("title");
        self.category_id = filters.get("category_id");
        self.body = filters.get("body");
    }
}

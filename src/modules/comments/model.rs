use forumgate_core::Pagination;
use forumgate_rpc::pb::comment::{
    DeleteCommentRequest, GetAllCommentsRequest, GetCommentRequest, UpdateCommentRequest,
};

use crate::dispatch::binder::identified_by_id;
use crate::dispatch::{Filters, Listing};

identified_by_id!(GetCommentRequest, UpdateCommentRequest, DeleteCommentRequest);

impl Listing for GetAllCommentsRequest {
    fn paginate(&mut self, pagination: Pagination) {
        self.page = pagination.page;
        self.limit = pagination.limit;
    }

    fn apply_filters(&mut self, filters: &Filters<'_>) {
        self.post_id = filters.get("post_id");
        self.user_id = filters.get("user_id");
    }
}

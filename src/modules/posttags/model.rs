//! Binding for post-tag associations.
//!
//! An association is addressed by two path segments. The routes are
//! `/posttags/{id}/{tag_id}` and `/posttags/{id}/posts`: sibling parameters
//! must share a name, so `{id}` is the post id in the first pattern and the
//! tag id in the second.

use forumgate_core::{AppError, Pagination};
use forumgate_rpc::pb::posttag::{
    DeletePostTagRequest, GetAllPostTagsRequest, GetPostTagRequest, GetPostsByTagRequest,
    UpdatePostTagRequest,
};

use crate::dispatch::binder::{json_body, path_param};
use crate::dispatch::{Filters, Identified, Listing, RequestInput};

/// Post and tag ids of the association named in the path.
struct AssociationKey {
    post_id: String,
    tag_id: String,
}

impl AssociationKey {
    fn from_path(input: &RequestInput) -> Result<Self, AppError> {
        Ok(Self {
            post_id: path_param(input, "id")?,
            tag_id: path_param(input, "tag_id")?,
        })
    }
}

pub fn bind_get(input: &RequestInput) -> Result<GetPostTagRequest, AppError> {
    let key = AssociationKey::from_path(input)?;
    Ok(GetPostTagRequest {
        post_id: key.post_id,
        tag_id: key.tag_id,
    })
}

pub fn bind_delete(input: &RequestInput) -> Result<DeletePostTagRequest, AppError> {
    let key = AssociationKey::from_path(input)?;
    Ok(DeletePostTagRequest {
        post_id: key.post_id,
        tag_id: key.tag_id,
    })
}

/// Body supplies `new_tag_id`; the path always supplies the current key.
pub fn bind_update(input: &RequestInput) -> Result<UpdatePostTagRequest, AppError> {
    let mut request: UpdatePostTagRequest = json_body(input)?;
    let key = AssociationKey::from_path(input)?;
    request.post_id = key.post_id;
    request.tag_id = key.tag_id;
    Ok(request)
}

impl Listing for GetAllPostTagsRequest {
    fn paginate(&mut self, pagination: Pagination) {
        self.page = pagination.page;
        self.limit = pagination.limit;
    }

    fn apply_filters(&mut self, filters: &Filters<'_>) {
        self.post_id = filters.get("post_id");
        self.tag_id = filters.get("tag_id");
    }
}

impl Listing for GetPostsByTagRequest {
    fn paginate(&mut self, pagination: Pagination) {
        self.page = pagination.page;
        self.limit = pagination.limit;
    }
}

impl Identified for GetPostsByTagRequest {
    fn set_id(&mut self, id: String) {
        self.tag_id = id;
    }
}

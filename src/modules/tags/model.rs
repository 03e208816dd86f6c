use forumgate_rpc::pb::tag::{
    DeleteTagRequest, GetAllTagsRequest, GetPopularTagsRequest, GetTagRequest, UpdateTagRequest,
};

use crate::dispatch::binder::{identified_by_id, paginated};

identified_by_id!(GetTagRequest, UpdateTagRequest, DeleteTagRequest);

paginated!(GetAllTagsRequest, GetPopularTagsRequest);

use forumgate_rpc::pb::category::{
    DeleteCategoryRequest, GetAllCategoriesRequest, GetCategoryRequest, UpdateCategoryRequest,
};

use crate::dispatch::binder::{identified_by_id, paginated};

identified_by_id!(GetCategoryRequest, UpdateCategoryRequest, DeleteCategoryRequest);

paginated!(GetAllCategoriesRequest);

//! Service seams for the five forum backend services.
//!
//! Each trait mirrors one `forum.v1` gRPC service. Handlers depend on these
//! traits only, so the tonic client and in-process test doubles are
//! interchangeable. Methods default to `UNIMPLEMENTED`, matching how an
//! unregistered method on a real gRPC server answers.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tonic::Status;

use crate::context::CallContext;
use crate::pb::category::{
    Category, CreateCategoryRequest, DeleteCategoryRequest, DeleteCategoryResponse,
    GetAllCategoriesRequest, GetAllCategoriesResponse, GetCategoryRequest, UpdateCategoryRequest,
};
use crate::pb::comment::{
    Comment, CreateCommentRequest, DeleteCommentRequest, DeleteCommentResponse,
    GetAllCommentsRequest, GetAllCommentsResponse, GetCommentRequest, UpdateCommentRequest,
};
use crate::pb::post::{
    CreatePostRequest, DeletePostRequest, DeletePostResponse, GetAllPostsRequest,
    GetAllPostsResponse, GetPostRequest, Post, UpdatePostRequest,
};
use crate::pb::posttag::{
    CreatePostTagRequest, DeletePostTagRequest, DeletePostTagResponse, GetAllPostTagsRequest,
    GetAllPostTagsResponse, GetPostTagRequest, GetPostsByTagRequest, GetPostsByTagResponse,
    PostTag, UpdatePostTagRequest,
};
use crate::pb::tag::{
    CreateTagRequest, DeleteTagRequest, DeleteTagResponse, GetAllTagsRequest, GetAllTagsResponse,
    GetPopularTagsRequest, GetPopularTagsResponse, GetTagRequest, Tag, UpdateTagRequest,
};

fn unimplemented(method: &str) -> Status {
    Status::unimplemented(format!("method {method} is not implemented"))
}

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn create_category(
        &self,
        _ctx: &CallContext,
        _req: CreateCategoryRequest,
    ) -> Result<Category, Status> {
        Err(unimplemented("CreateCategory"))
    }

    async fn get_category(
        &self,
        _ctx: &CallContext,
        _req: GetCategoryRequest,
    ) -> Result<Category, Status> {
        Err(unimplemented("GetCategory"))
    }

    async fn update_category(
        &self,
        _ctx: &CallContext,
        _req: UpdateCategoryRequest,
    ) -> Result<Category, Status> {
        Err(unimplemented("UpdateCategory"))
    }

    async fn delete_category(
        &self,
        _ctx: &CallContext,
        _req: DeleteCategoryRequest,
    ) -> Result<DeleteCategoryResponse, Status> {
        Err(unimplemented("DeleteCategory"))
    }

    async fn get_all_categories(
        &self,
        _ctx: &CallContext,
        _req: GetAllCategoriesRequest,
    ) -> Result<GetAllCategoriesResponse, Status> {
        Err(unimplemented("GetAllCategories"))
    }
}

#[async_trait]
pub trait TagService: Send + Sync {
    async fn create_tag(&self, _ctx: &CallContext, _req: CreateTagRequest) -> Result<Tag, Status> {
        Err(unimplemented("CreateTag"))
    }

    async fn get_tag(&self, _ctx: &CallContext, _req: GetTagRequest) -> Result<Tag, Status> {
        Err(unimplemented("GetTag"))
    }

    async fn update_tag(&self, _ctx: &CallContext, _req: UpdateTagRequest) -> Result<Tag, Status> {
        Err(unimplemented("UpdateTag"))
    }

    async fn delete_tag(
        &self,
        _ctx: &CallContext,
        _req: DeleteTagRequest,
    ) -> Result<DeleteTagResponse, Status> {
        Err(unimplemented("DeleteTag"))
    }

    async fn get_all_tags(
        &self,
        _ctx: &CallContext,
        _req: GetAllTagsRequest,
    ) -> Result<GetAllTagsResponse, Status> {
        Err(unimplemented("GetAllTags"))
    }

    /// Tags ordered by how many posts carry them.
    async fn get_popular_tags(
        &self,
        _ctx: &CallContext,
        _req: GetPopularTagsRequest,
    ) -> Result<GetPopularTagsResponse, Status> {
        Err(unimplemented("GetPopularTags"))
    }
}

#[async_trait]
pub trait PostService: Send + Sync {
    async fn create_post(
        &self,
        _ctx: &CallContext,
        _req: CreatePostRequest,
    ) -> Result<Post, Status> {
        Err(unimplemented("CreatePost"))
    }

    async fn get_post(&self, _ctx: &CallContext, _req: GetPostRequest) -> Result<Post, Status> {
        Err(unimplemented("GetPost"))
    }

    async fn update_post(
        &self,
        _ctx: &CallContext,
        _req: UpdatePostRequest,
    ) -> Result<Post, Status> {
        Err(unimplemented("UpdatePost"))
    }

    async fn delete_post(
        &self,
        _ctx: &CallContext,
        _req: DeletePostRequest,
    ) -> Result<DeletePostResponse, Status> {
        Err(unimplemented("DeletePost"))
    }

    async fn get_all_posts(
        &self,
        _ctx: &CallContext,
        _req: GetAllPostsRequest,
    ) -> Result<GetAllPostsResponse, Status> {
        Err(unimplemented("GetAllPosts"))
    }
}

#[async_trait]
pub trait CommentService: Send + Sync {
    async fn create_comment(
        &self,
        _ctx: &CallContext,
        _req: CreateCommentRequest,
    ) -> Result<Comment, Status> {
        Err(unimplemented("CreateComment"))
    }

    async fn get_comment(
        &self,
        _ctx: &CallContext,
        _req: GetCommentRequest,
    ) -> Result<Comment, Status> {
        Err(unimplemented("GetComment"))
    }

    async fn update_comment(
        &self,
        _ctx: &CallContext,
        _req: UpdateCommentRequest,
    ) -> Result<Comment, Status> {
        Err(unimplemented("UpdateComment"))
    }

    async fn delete_comment(
        &self,
        _ctx: &CallContext,
        _req: DeleteCommentRequest,
    ) -> Result<DeleteCommentResponse, Status> {
        Err(unimplemented("DeleteComment"))
    }

    async fn get_all_comments(
        &self,
        _ctx: &CallContext,
        _req: GetAllCommentsRequest,
    ) -> Result<GetAllCommentsResponse, Status> {
        Err(unimplemented("GetAllComments"))
    }
}

#[async_trait]
pub trait PostTagService: Send + Sync {
    async fn create_post_tag(
        &self,
        _ctx: &CallContext,
        _req: CreatePostTagRequest,
    ) -> Result<PostTag, Status> {
        Err(unimplemented("CreatePostTag"))
    }

    async fn get_post_tag(
        &self,
        _ctx: &CallContext,
        _req: GetPostTagRequest,
    ) -> Result<PostTag, Status> {
        Err(unimplemented("GetPostTag"))
    }

    async fn update_post_tag(
        &self,
        _ctx: &CallContext,
        _req: UpdatePostTagRequest,
    ) -> Result<PostTag, Status> {
        Err(unimplemented("UpdatePostTag"))
    }

    async fn delete_post_tag(
        &self,
        _ctx: &CallContext,
        _req: DeletePostTagRequest,
    ) -> Result<DeletePostTagResponse, Status> {
        Err(unimplemented("DeletePostTag"))
    }

    async fn get_all_post_tags(
        &self,
        _ctx: &CallContext,
        _req: GetAllPostTagsRequest,
    ) -> Result<GetAllPostTagsResponse, Status> {
        Err(unimplemented("GetAllPostTags"))
    }

    async fn get_posts_by_tag(
        &self,
        _ctx: &CallContext,
        _req: GetPostsByTagRequest,
    ) -> Result<GetPostsByTagResponse, Status> {
        Err(unimplemented("GetPostsByTag"))
    }
}

/// One handle per backend service, shared by every request.
#[derive(Clone)]
pub struct ServiceClients {
    pub categories: Arc<dyn CategoryService>,
    pub tags: Arc<dyn TagService>,
    pub posts: Arc<dyn PostService>,
    pub comments: Arc<dyn CommentService>,
    pub post_tags: Arc<dyn PostTagService>,
}

impl ServiceClients {
    /// Serves all five services from a single backend value.
    pub fn from_shared<B>(backend: Arc<B>) -> Self
    where
        B: CategoryService + TagService + PostService + CommentService + PostTagService + 'static,
    {
        Self {
            categories: backend.clone(),
            tags: backend.clone(),
            posts: backend.clone(),
            comments: backend.clone(),
            post_tags: backend,
        }
    }
}

impl fmt::Debug for ServiceClients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClients").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    struct Nothing;

    impl CategoryService for Nothing {}
    impl TagService for Nothing {}
    impl PostService for Nothing {}
    impl CommentService for Nothing {}
    impl PostTagService for Nothing {}

    #[tokio::test]
    async fn default_methods_answer_unimplemented() {
        let clients = ServiceClients::from_shared(Arc::new(Nothing));
        let ctx = CallContext::new("t");

        let err = clients
            .tags
            .get_popular_tags(&ctx, GetPopularTagsRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Unimplemented);
        assert!(err.message().contains("GetPopularTags"));

        let err = clients
            .post_tags
            .get_posts_by_tag(&ctx, GetPostsByTagRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Unimplemented);
    }
}

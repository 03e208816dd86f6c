use async_trait::async_trait;
use forumgate_config::BackendConfig;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::Status;

use crate::context::CallContext;
use crate::pb::category::*;
use crate::pb::comment::*;
use crate::pb::post::*;
use crate::pb::posttag::*;
use crate::pb::tag::*;
use crate::services::{CategoryService, CommentService, PostService, PostTagService, TagService};

/// gRPC client for the forum service.
///
/// All five services share one multiplexed HTTP/2 channel; cloning the
/// client only clones the channel handle.
#[derive(Debug, Clone)]
pub struct ForumClient {
    channel: Channel,
}

impl ForumClient {
    /// Connects eagerly, failing if the backend is unreachable within the
    /// configured connect timeout.
    pub async fn connect(config: &BackendConfig) -> Result<Self, tonic::transport::Error> {
        let channel = Self::endpoint(config)?.connect().await?;
        Ok(Self { channel })
    }

    /// Builds a client whose connection is established on first use.
    pub fn connect_lazy(config: &BackendConfig) -> Result<Self, tonic::transport::Error> {
        let channel = Self::endpoint(config)?.connect_lazy();
        Ok(Self { channel })
    }

    fn endpoint(config: &BackendConfig) -> Result<Endpoint, tonic::transport::Error> {
        let endpoint = Endpoint::from_shared(config.addr.clone())?
            .connect_timeout(config.connect_timeout);
        Ok(match config.request_timeout {
            Some(timeout) => endpoint.timeout(timeout),
            None => endpoint,
        })
    }

    async fn unary<Req, Resp>(
        &self,
        ctx: &CallContext,
        path: &'static str,
        message: Req,
    ) -> Result<Resp, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        tracing::debug!(method = path, request_id = %ctx.request_id(), "calling forum service");

        let mut grpc = tonic::client::Grpc::new(self.channel.clone());
        grpc.ready()
            .await
            .map_err(|e| Status::unavailable(format!("backend not ready: {e}")))?;

        let codec = ProstCodec::<Req, Resp>::default();
        grpc.unary(ctx.into_request(message), PathAndQuery::from_static(path), codec)
            .await
            .map(tonic::Response::into_inner)
    }
}

#[async_trait]
impl CategoryService for ForumClient {
    async fn create_category(
        &self,
        ctx: &CallContext,
        req: CreateCategoryRequest,
    ) -> Result<Category, Status> {
        self.unary(ctx, "/forum.v1.CategoryService/CreateCategory", req).await
    }

    async fn get_category(
        &self,
        ctx: &CallContext,
        req: GetCategoryRequest,
    ) -> Result<Category, Status> {
        self.unary(ctx, "/forum.v1.CategoryService/GetCategory", req).await
    }

    async fn update_category(
        &self,
        ctx: &CallContext,
        req: UpdateCategoryRequest,
    ) -> Result<Category, Status> {
        self.unary(ctx, "/forum.v1.CategoryService/UpdateCategory", req).await
    }

    async fn delete_category(
        &self,
        ctx: &CallContext,
        req: DeleteCategoryRequest,
    ) -> Result<DeleteCategoryResponse, Status> {
        self.unary(ctx, "/forum.v1.CategoryService/DeleteCategory", req).await
    }

    async fn get_all_categories(
        &self,
        ctx: &CallContext,
        req: GetAllCategoriesRequest,
    ) -> Result<GetAllCategoriesResponse, Status> {
        self.unary(ctx, "/forum.v1.CategoryService/GetAllCategories", req).await
    }
}

#[async_trait]
impl TagService for ForumClient {
    async fn create_tag(&self, ctx: &CallContext, req: CreateTagRequest) -> Result<Tag, Status> {
        self.unary(ctx, "/forum.v1.TagService/CreateTag", req).await
    }

    async fn get_tag(&self, ctx: &CallContext, req: GetTagRequest) -> Result<Tag, Status> {
        self.unary(ctx, "/forum.v1.TagService/GetTag", req).await
    }

    async fn update_tag(&self, ctx: &CallContext, req: UpdateTagRequest) -> Result<Tag, Status> {
        self.unary(ctx, "/forum.v1.TagService/UpdateTag", req).await
    }

    async fn delete_tag(
        &self,
        ctx: &CallContext,
        req: DeleteTagRequest,
    ) -> Result<DeleteTagResponse, Status> {
        self.unary(ctx, "/forum.v1.TagService/DeleteTag", req).await
    }

    async fn get_all_tags(
        &self,
        ctx: &CallContext,
        req: GetAllTagsRequest,
    ) -> Result<GetAllTagsResponse, Status> {
        self.unary(ctx, "/forum.v1.TagService/GetAllTags", req).await
    }

    async fn get_popular_tags(
        &self,
        ctx: &CallContext,
        req: GetPopularTagsRequest,
    ) -> Result<GetPopularTagsResponse, Status> {
        self.unary(ctx, "/forum.v1.TagService/GetPopularTags", req).await
    }
}

#[async_trait]
impl PostService for ForumClient {
    async fn create_post(&self, ctx: &CallContext, req: CreatePostRequest) -> Result<Post, Status> {
        self.unary(ctx, "/forum.v1.PostService/CreatePost", req).await
    }

    async fn get_post(&self, ctx: &CallContext, req: GetPostRequest) -> Result<Post, Status> {
        self.unary(ctx, "/forum.v1.PostService/GetPost", req).await
    }

    async fn update_post(&self, ctx: &CallContext, req: UpdatePostRequest) -> Result<Post, Status> {
        self.unary(ctx, "/forum.v1.PostService/UpdatePost", req).await
    }

    async fn delete_post(
        &self,
        ctx: &CallContext,
        req: DeletePostRequest,
    ) -> Result<DeletePostResponse, Status> {
        self.unary(ctx, "/forum.v1.PostService/DeletePost", req).await
    }

    async fn get_all_posts(
        &self,
        ctx: &CallContext,
        req: GetAllPostsRequest,
    ) -> Result<GetAllPostsResponse, Status> {
        self.unary(ctx, "/forum.v1.PostService/GetAllPosts", req).await
    }
}

#[async_trait]
impl CommentService for ForumClient {
    async fn create_comment(
        &self,
        ctx: &CallContext,
        req: CreateCommentRequest,
    ) -> Result<Comment, Status> {
        self.unary(ctx, "/forum.v1.CommentService/CreateComment", req).await
    }

    async fn get_comment(
        &self,
        ctx: &CallContext,
        req: GetCommentRequest,
    ) -> Result<Comment, Status> {
        self.unary(ctx, "/forum.v1.CommentService/GetComment", req).await
    }

    async fn update_comment(
        &self,
        ctx: &CallContext,
        req: UpdateCommentRequest,
    ) -> Result<Comment, Status> {
        self.unary(ctx, "/forum.v1.CommentService/UpdateComment", req).await
    }

    async fn delete_comment(
        &self,
        ctx: &CallContext,
        req: DeleteCommentRequest,
    ) -> Result<DeleteCommentResponse, Status> {
        self.unary(ctx, "/forum.v1.CommentService/DeleteComment", req).await
    }

    async fn get_all_comments(
        &self,
        ctx: &CallContext,
        req: GetAllCommentsRequest,
    ) -> Result<GetAllCommentsResponse, Status> {
        self.unary(ctx, "/forum.v1.CommentService/GetAllComments", req).await
    }
}

#[async_trait]
impl PostTagService for ForumClient {
    async fn create_post_tag(
        &self,
        ctx: &CallContext,
        req: CreatePostTagRequest,
    ) -> Result<PostTag, Status> {
        self.unary(ctx, "/forum.v1.PostTagService/CreatePostTag", req).await
    }

    async fn get_post_tag(
        &self,
        ctx: &CallContext,
        req: GetPostTagRequest,
    ) -> Result<PostTag, Status> {
        self.unary(ctx, "/forum.v1.PostTagService/GetPostTag", req).await
    }

    async fn update_post_tag(
        &self,
        ctx: &CallContext,
        req: UpdatePostTagRequest,
    ) -> Result<PostTag, Status> {
        self.unary(ctx, "/forum.v1.PostTagService/UpdatePostTag", req).await
    }

    async fn delete_post_tag(
        &self,
        ctx: &CallContext,
        req: DeletePostTagRequest,
    ) -> Result<DeletePostTagResponse, Status> {
        self.unary(ctx, "/forum.v1.PostTagService/DeletePostTag", req).await
    }

    async fn get_all_post_tags(
        &self,
        ctx: &CallContext,
        req: GetAllPostTagsRequest,
    ) -> Result<GetAllPostTagsResponse, Status> {
        self.unary(ctx, "/forum.v1.PostTagService/GetAllPostTags", req).await
    }

    async fn get_posts_by_tag(
        &self,
        ctx: &CallContext,
        req: GetPostsByTagRequest,
    ) -> Result<GetPostsByTagResponse, Status> {
        self.unary(ctx, "/forum.v1.PostTagService/GetPostsByTag", req).await
    }
}

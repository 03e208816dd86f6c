#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

use forumgate::forumgate_auth::create_token;
use forumgate::forumgate_config::{BackendConfig, CorsConfig, JwtConfig};
use forumgate::forumgate_rpc::pb::category::*;
use forumgate::forumgate_rpc::pb::comment::*;
use forumgate::forumgate_rpc::pb::post::*;
use forumgate::forumgate_rpc::pb::posttag::*;
use forumgate::forumgate_rpc::pb::tag::*;
use forumgate::forumgate_rpc::{
    CallContext, CategoryService, CommentService, PostService, PostTagService, ServiceClients,
    Status, TagService,
};
use forumgate::router::init_router;
use forumgate::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// One backend call as the fake saw it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub request: Value,
    pub request_id: String,
    pub username: Option<String>,
}

/// In-process stand-in for the forum service.
///
/// Records every call, answers list calls with `list_size` items echoing the
/// requested pagination, and fails every call with `failure` when set.
#[derive(Default)]
pub struct FakeForum {
    calls: Mutex<Vec<RecordedCall>>,
    failure: Mutex<Option<Status>>,
    list_size: Mutex<usize>,
    delay: Mutex<Option<Duration>>,
}

impl FakeForum {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            list_size: Mutex::new(2),
            ..Default::default()
        })
    }

    pub fn failing(status: Status) -> Arc<Self> {
        let fake = Self::new();
        *fake.failure.lock().unwrap() = Some(status);
        fake
    }

    pub fn with_list_size(self: Arc<Self>, size: usize) -> Arc<Self> {
        *self.list_size.lock().unwrap() = size;
        self
    }

    pub fn with_delay(self: Arc<Self>, delay: Duration) -> Arc<Self> {
        *self.delay.lock().unwrap() = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no backend call recorded")
    }

    fn list_size(&self) -> usize {
        *self.list_size.lock().unwrap()
    }

    async fn respond<Req, Resp>(
        &self,
        method: &'static str,
        ctx: &CallContext,
        req: &Req,
        response: Resp,
    ) -> Result<Resp, Status>
    where
        Req: Serialize,
    {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            request: serde_json::to_value(req).unwrap(),
            request_id: ctx.request_id().to_string(),
            username: ctx.username().map(str::to_string),
        });

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.failure.lock().unwrap().clone() {
            Some(status) => Err(status),
            None => Ok(response),
        }
    }
}

const STAMP: &str = "2024-01-01T00:00:00Z";

fn category(id: impl Into<String>, name: impl Into<String>) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        created_at: STAMP.into(),
        updated_at: STAMP.into(),
    }
}

fn tag(id: impl Into<String>, name: impl Into<String>) -> Tag {
    Tag {
        id: id.into(),
        name: name.into(),
        created_at: STAMP.into(),
    }
}

fn post(id: impl Into<String>) -> Post {
    Post {
        id: id.into(),
        user_id: "u1".into(),
        title: "title".into(),
        body: "body".into(),
        category_id: "c1".into(),
        created_at: STAMP.into(),
        updated_at: STAMP.into(),
    }
}

fn comment(id: impl Into<String>) -> Comment {
    Comment {
        id: id.into(),
        post_id: "p1".into(),
        user_id: "u1".into(),
        body: "body".into(),
        created_at: STAMP.into(),
        updated_at: STAMP.into(),
    }
}

fn post_tag(post_id: impl Into<String>, tag_id: impl Into<String>) -> PostTag {
    PostTag {
        post_id: post_id.into(),
        tag_id: tag_id.into(),
        created_at: STAMP.into(),
    }
}

#[async_trait]
impl CategoryService for FakeForum {
    async fn create_category(
        &self,
        ctx: &CallContext,
        req: CreateCategoryRequest,
    ) -> Result<Category, Status> {
        let response = category("c-new", req.name.clone());
        self.respond("CreateCategory", ctx, &req, response).await
    }

    async fn get_category(
        &self,
        ctx: &CallContext,
        req: GetCategoryRequest,
    ) -> Result<Category, Status> {
        let response = category(req.id.clone(), "general");
        self.respond("GetCategory", ctx, &req, response).await
    }

    async fn update_category(
        &self,
        ctx: &CallContext,
        req: UpdateCategoryRequest,
    ) -> Result<Category, Status> {
        let response = category(req.id.clone(), req.name.clone());
        self.respond("UpdateCategory", ctx, &req, response).await
    }

    async fn delete_category(
        &self,
        ctx: &CallContext,
        req: DeleteCategoryRequest,
    ) -> Result<DeleteCategoryResponse, Status> {
        let response = DeleteCategoryResponse {
            message: format!("category {} deleted", req.id),
        };
        self.respond("DeleteCategory", ctx, &req, response).await
    }

    async fn get_all_categories(
        &self,
        ctx: &CallContext,
        req: GetAllCategoriesRequest,
    ) -> Result<GetAllCategoriesResponse, Status> {
        let response = GetAllCategoriesResponse {
            categories: (0..self.list_size())
                .map(|i| category(format!("c{i}"), format!("category {i}")))
                .collect(),
            page: req.page,
            limit: req.limit,
        };
        self.respond("GetAllCategories", ctx, &req, response).await
    }
}

#[async_trait]
impl TagService for FakeForum {
    async fn create_tag(&self, ctx: &CallContext, req: CreateTagRequest) -> Result<Tag, Status> {
        let response = tag("t-new", req.name.clone());
        self.respond("CreateTag", ctx, &req, response).await
    }

    async fn get_tag(&self, ctx: &CallContext, req: GetTagRequest) -> Result<Tag, Status> {
        let response = tag(req.id.clone(), "rust");
        self.respond("GetTag", ctx, &req, response).await
    }

    async fn update_tag(&self, ctx: &CallContext, req: UpdateTagRequest) -> Result<Tag, Status> {
        let response = tag(req.id.clone(), req.name.clone());
        self.respond("UpdateTag", ctx, &req, response).await
    }

    async fn delete_tag(
        &self,
        ctx: &CallContext,
        req: DeleteTagRequest,
    ) -> Result<DeleteTagResponse, Status> {
        let response = DeleteTagResponse {
            message: format!("tag {} deleted", req.id),
        };
        self.respond("DeleteTag", ctx, &req, response).await
    }

    async fn get_all_tags(
        &self,
        ctx: &CallContext,
        req: GetAllTagsRequest,
    ) -> Result<GetAllTagsResponse, Status> {
        let response = GetAllTagsResponse {
            tags: (0..self.list_size())
                .map(|i| tag(format!("t{i}"), format!("tag {i}")))
                .collect(),
            page: req.page,
            limit: req.limit,
        };
        self.respond("GetAllTags", ctx, &req, response).await
    }

    async fn get_popular_tags(
        &self,
        ctx: &CallContext,
        req: GetPopularTagsRequest,
    ) -> Result<GetPopularTagsResponse, Status> {
        let response = GetPopularTagsResponse {
            tags: (0..self.list_size())
                .map(|i| PopularTag {
                    id: format!("t{i}"),
                    name: format!("tag {i}"),
                    post_count: 100 - i as i64,
                })
                .collect(),
            page: req.page,
            limit: req.limit,
        };
        self.respond("GetPopularTags", ctx, &req, response).await
    }
}

#[async_trait]
impl PostService for FakeForum {
    async fn create_post(&self, ctx: &CallContext, req: CreatePostRequest) -> Result<Post, Status> {
        let response = Post {
            user_id: req.user_id.clone(),
            title: req.title.clone(),
            body: req.body.clone(),
            category_id: req.category_id.clone(),
            ..post("p-new")
        };
        self.respond("CreatePost", ctx, &req, response).await
    }

    async fn get_post(&self, ctx: &CallContext, req: GetPostRequest) -> Result<Post, Status> {
        let response = post(req.id.clone());
        self.respond("GetPost", ctx, &req, response).await
    }

    async fn update_post(&self, ctx: &CallContext, req: UpdatePostRequest) -> Result<Post, Status> {
        let response = Post {
            title: req.title.clone(),
            body: req.body.clone(),
            category_id: req.category_id.clone(),
            ..post(req.id.clone())
        };
        self.respond("UpdatePost", ctx, &req, response).await
    }

    async fn delete_post(
        &self,
        ctx: &CallContext,
        req: DeletePostRequest,
    ) -> Result<DeletePostResponse, Status> {
        let response = DeletePostResponse {
            message: format!("post {} deleted", req.id),
        };
        self.respond("DeletePost", ctx, &req, response).await
    }

    async fn get_all_posts(
        &self,
        ctx: &CallContext,
        req: GetAllPostsRequest,
    ) -> Result<GetAllPostsResponse, Status> {
        let response = GetAllPostsResponse {
            posts: (0..self.list_size()).map(|i| post(format!("p{i}"))).collect(),
            page: req.page,
            limit: req.limit,
        };
        self.respond("GetAllPosts", ctx, &req, response).await
    }
}

#[async_trait]
impl CommentService for FakeForum {
    async fn create_comment(
        &self,
        ctx: &CallContext,
        req: CreateCommentRequest,
    ) -> Result<Comment, Status> {
        let response = Comment {
            post_id: req.post_id.clone(),
            user_id: req.user_id.clone(),
            body: req.body.clone(),
            ..comment("cm-new")
        };
        self.respond("CreateComment", ctx, &req, response).await
    }

    async fn get_comment(
        &self,
        ctx: &CallContext,
        req: GetCommentRequest,
    ) -> Result<Comment, Status> {
        let response = comment(req.id.clone());
        self.respond("GetComment", ctx, &req, response).await
    }

    async fn update_comment(
        &self,
        ctx: &CallContext,
        req: UpdateCommentRequest,
    ) -> Result<Comment, Status> {
        let response = Comment {
            body: req.body.clone(),
            ..comment(req.id.clone())
        };
        self.respond("UpdateComment", ctx, &req, response).await
    }

    async fn delete_comment(
        &self,
        ctx: &CallContext,
        req: DeleteCommentRequest,
    ) -> Result<DeleteCommentResponse, Status> {
        let response = DeleteCommentResponse {
            message: format!("comment {} deleted", req.id),
        };
        self.respond("DeleteComment", ctx, &req, response).await
    }

    async fn get_all_comments(
        &self,
        ctx: &CallContext,
        req: GetAllCommentsRequest,
    ) -> Result<GetAllCommentsResponse, Status> {
        let response = GetAllCommentsResponse {
            comments: (0..self.list_size()).map(|i| comment(format!("cm{i}"))).collect(),
            page: req.page,
            limit: req.limit,
        };
        self.respond("GetAllComments", ctx, &req, response).await
    }
}

#[async_trait]
impl PostTagService for FakeForum {
    async fn create_post_tag(
        &self,
        ctx: &CallContext,
        req: CreatePostTagRequest,
    ) -> Result<PostTag, Status> {
        let response = post_tag(req.post_id.clone(), req.tag_id.clone());
        self.respond("CreatePostTag", ctx, &req, response).await
    }

    async fn get_post_tag(
        &self,
        ctx: &CallContext,
        req: GetPostTagRequest,
    ) -> Result<PostTag, Status> {
        let response = post_tag(req.post_id.clone(), req.tag_id.clone());
        self.respond("GetPostTag", ctx, &req, response).await
    }

    async fn update_post_tag(
        &self,
        ctx: &CallContext,
        req: UpdatePostTagRequest,
    ) -> Result<PostTag, Status> {
        let response = post_tag(req.post_id.clone(), req.new_tag_id.clone());
        self.respond("UpdatePostTag", ctx, &req, response).await
    }

    async fn delete_post_tag(
        &self,
        ctx: &CallContext,
        req: DeletePostTagRequest,
    ) -> Result<DeletePostTagResponse, Status> {
        let response = DeletePostTagResponse {
            message: format!("post tag {}/{} deleted", req.post_id, req.tag_id),
        };
        self.respond("DeletePostTag", ctx, &req, response).await
    }

    async fn get_all_post_tags(
        &self,
        ctx: &CallContext,
        req: GetAllPostTagsRequest,
    ) -> Result<GetAllPostTagsResponse, Status> {
        let response = GetAllPostTagsResponse {
            post_tags: (0..self.list_size())
                .map(|i| post_tag(format!("p{i}"), "t1"))
                .collect(),
            page: req.page,
            limit: req.limit,
        };
        self.respond("GetAllPostTags", ctx, &req, response).await
    }

    async fn get_posts_by_tag(
        &self,
        ctx: &CallContext,
        req: GetPostsByTagRequest,
    ) -> Result<GetPostsByTagResponse, Status> {
        let response = GetPostsByTagResponse {
            posts: (0..self.list_size()).map(|i| post(format!("p{i}"))).collect(),
            page: req.page,
            limit: req.limit,
        };
        self.respond("GetPostsByTag", ctx, &req, response).await
    }
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        required_role: "admin".to_string(),
    }
}

pub fn test_state(fake: Arc<FakeForum>, backend_config: BackendConfig) -> AppState {
    AppState::new(
        ServiceClients::from_shared(fake),
        jwt_config(),
        CorsConfig::from_lookup(|_| None),
        backend_config,
    )
}

pub fn test_app(fake: Arc<FakeForum>) -> Router {
    init_router(test_state(fake, BackendConfig::default()))
}

pub fn test_app_with_backend(fake: Arc<FakeForum>, backend_config: BackendConfig) -> Router {
    init_router(test_state(fake, backend_config))
}

pub fn token_for(username: &str) -> String {
    create_token(username, 3600, &jwt_config()).unwrap()
}

pub fn bearer() -> String {
    format!("Bearer {}", token_for("alice"))
}

pub fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn authed(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let mut req = request(method, uri, body);
    req.headers_mut()
        .insert("authorization", bearer().parse().unwrap());
    req
}

pub fn raw_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Sends the request and returns the status with the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

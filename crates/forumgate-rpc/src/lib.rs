pub mod client;
pub mod context;
pub mod pb;
pub mod services;

pub use client::ForumClient;
pub use context::CallContext;
pub use services::{
    CategoryService, CommentService, PostService, PostTagService, ServiceClients, TagService,
};
pub use tonic::{Code, Status};

//! # Forumgate
//!
//! A REST/JSON gateway in front of the forum gRPC service, built with Rust,
//! Axum and tonic.
//!
//! ## Overview
//!
//! Every HTTP request is translated into one unary call against the forum
//! backend and the reply is written back as JSON. Five resource families
//! share a single pipeline:
//!
//! - **Categories** and **Tags**: open CRUD plus listings (and popular tags)
//! - **Posts** and **Comments**: CRUD and filtered listings behind a bearer token
//! - **Post tags**: associations between posts and tags, and posts by tag
//!
//! The gateway holds no domain logic and persists nothing.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── dispatch/         # Request input, binders, pipeline, route table rows
//! ├── middleware/       # Bearer and role gates
//! ├── modules/          # Resource families
//! │   ├── categories/
//! │   ├── tags/
//! │   ├── posts/
//! │   ├── comments/
//! │   └── posttags/
//! ├── logging.rs        # Request logging and tracing setup
//! ├── router.rs         # Route table assembly, CORS, health
//! └── state.rs          # Shared application state
//! ```
//!
//! Workspace crates:
//!
//! - `forumgate-core`: `AppError` and pagination
//! - `forumgate-config`: environment-driven configuration
//! - `forumgate-auth`: bearer parsing and JWT verification
//! - `forumgate-rpc`: message types, service traits, tonic client, call context
//!
//! ## Request flow
//!
//! ```text
//! request → gate (if protected) → binder → service call → JSON response
//! ```
//!
//! | Failure | Status |
//! |---------|--------|
//! | Malformed body, pagination or path | 400 |
//! | Missing, malformed, invalid or expired token | 401 |
//! | Any backend error | 500 |
//!
//! Errors are always rendered as `{"error": "<message>"}`.
//!
//! ## Quick Start
//!
//! ```bash
//! FORUM_SERVICE_ADDR=http://localhost:8082
//! JWT_SECRET=your-shared-secret
//! HTTP_PORT=8080
//! ```
//!
//! ```bash
//! cargo run --bin forumgate
//! ```

pub mod dispatch;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use forumgate_auth;
pub use forumgate_config;
pub use forumgate_core;
pub use forumgate_rpc;

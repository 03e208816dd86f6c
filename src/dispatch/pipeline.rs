use std::future::Future;

use anyhow::anyhow;
use axum::{Json, http::StatusCode};
use forumgate_core::AppError;
use forumgate_rpc::{CallContext, ServiceClients, Status};
use serde::Serialize;
use tracing::{error, instrument, warn};

use super::input::RequestInput;
use crate::state::AppState;

pub type Dispatched<T> = Result<(StatusCode, Json<T>), AppError>;

/// Name and success status of one gateway operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub success: StatusCode,
}

impl Operation {
    pub const fn created(name: &'static str) -> Self {
        Self {
            name,
            success: StatusCode::CREATED,
        }
    }

    pub const fn ok(name: &'static str) -> Self {
        Self {
            name,
            success: StatusCode::OK,
        }
    }
}

/// Bind, call, respond.
///
/// A bind failure is a 400 and the backend is never called. Any backend
/// [`Status`] is a 500. The call runs under the request's [`CallContext`],
/// which is cancelled if this future is dropped before completion.
#[instrument(
    skip_all,
    fields(operation = op.name, request_id = %input.context.request_id())
)]
pub async fn dispatch<Req, Resp, B, C, Fut>(
    state: &AppState,
    op: Operation,
    input: RequestInput,
    bind: B,
    call: C,
) -> Dispatched<Resp>
where
    B: FnOnce(&RequestInput) -> Result<Req, AppError>,
    C: FnOnce(ServiceClients, CallContext, Req) -> Fut,
    Fut: Future<Output = Result<Resp, Status>>,
    Resp: Serialize,
{
    let request = bind(&input).inspect_err(|err| {
        warn!(error = %err.message(), "Rejected request");
    })?;

    let context = input.context;
    let _cancel_guard = context.cancel_on_drop();

    match context
        .run(call(state.clients.clone(), context.clone(), request))
        .await
    {
        Ok(response) => Ok((op.success, Json(response))),
        Err(status) => {
            error!(
                code = ?status.code(),
                message = %status.message(),
                "Backend call failed"
            );
            Err(backend_error(&status, state.backend_config.expose_errors))
        }
    }
}

pub fn backend_error(status: &Status, expose: bool) -> AppError {
    if !expose {
        return AppError::backend_redacted();
    }
    AppError::backend(anyhow!(
        "backend error ({:?}): {}",
        status.code(),
        status.message()
    ))
}

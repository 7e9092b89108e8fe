//! The interactions endpoint: an axum router that verifies, parses and dispatches interactions.
//!
//! Every `POST` passes the signature check before anything else looks at it. A request with a
//! missing or invalid signature gets `401 Bad request signature.` and its body is never parsed.

use std::future::Future;
use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

use crate::constants;
use crate::dispatch::{Dispatch, Dispatcher};
use crate::internal::prelude::*;
use crate::interactions_endpoint::Verifier;
use crate::model::prelude::*;

/// Largest request body read for signature verification.
pub const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Shared state of all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub application_id: ApplicationId,
    pub verifier: Arc<Verifier>,
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    #[must_use]
    pub fn new(application_id: ApplicationId, verifier: Verifier, dispatcher: Dispatcher) -> Self {
        Self {
            application_id,
            verifier: Arc::new(verifier),
            dispatcher: Arc::new(dispatcher),
        }
    }
}

/// Builds the router: `GET /` says hello, `POST /` takes interactions, everything else is a 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello).post(interaction).fallback(not_found))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), verify_signature))
        .with_state(state)
}

/// Serves [`router`] on `listener` until `shutdown` resolves.
///
/// Deferred tasks are not awaited here; see [`TaskSupervisor::shutdown`].
///
/// [`TaskSupervisor::shutdown`]: crate::dispatch::TaskSupervisor::shutdown
///
/// # Errors
///
/// Returns [`Error::Io`] if accepting connections fails.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(addr = ?listener.local_addr().ok(), "Interactions endpoint listening");
    axum::serve(listener, router(state)).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

async fn verify_signature(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if req.method() != Method::POST {
        return next.run(req).await;
    }

    let (parts, body) = req.into_parts();
    let header = |name: &str| {
        parts.headers.get(name).and_then(|value| value.to_str().ok()).unwrap_or_default()
    };
    let signature = header(constants::SIGNATURE_HEADER);
    let timestamp = header(constants::TIMESTAMP_HEADER);

    let Ok(body) = to_bytes(body, MAX_BODY_SIZE).await else {
        return (StatusCode::UNAUTHORIZED, constants::BAD_SIGNATURE_BODY).into_response();
    };

    if !state.verifier.verify(signature, timestamp, &body) {
        warn!("Rejected request with a bad signature");
        return (StatusCode::UNAUTHORIZED, constants::BAD_SIGNATURE_BODY).into_response();
    }

    next.run(Request::from_parts(parts, Body::from(body))).await
}

async fn hello(State(state): State<AppState>) -> String {
    format!("\u{1f44b} {}", state.application_id)
}

#[instrument(skip_all, fields(kind = tracing::field::Empty))]
async fn interaction(State(state): State<AppState>, body: Bytes) -> Response {
    let interaction: Interaction = match serde_json::from_slice(&body) {
        Ok(interaction) => interaction,
        Err(why) => {
            warn!("Could not parse interaction: {why}");
            return unknown_type();
        },
    };

    tracing::Span::current().record("kind", tracing::field::debug(interaction.kind()));

    match state.dispatcher.dispatch(&interaction).await {
        Dispatch::Respond(response) => Json(response).into_response(),
        Dispatch::Unknown => unknown_type(),
    }
}

fn unknown_type() -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({"error": constants::UNKNOWN_TYPE_ERROR}))).into_response()
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

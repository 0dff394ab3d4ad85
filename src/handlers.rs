// region:    --- Imports
use crate::auction::model::{AuctionDraft, AuctionPatch};
use crate::error::StoreError;
use crate::service::{AuctionService, InMemoryAuctionService};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

// endregion: --- Imports

type ServiceState = State<Arc<InMemoryAuctionService>>;

// region:    --- Router
/// 목업 경매 백엔드 라우터
pub fn router(service: Arc<InMemoryAuctionService>) -> Router {
    // 프론트엔드 개발 서버를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auctions", get(handle_list).post(handle_create))
        .route(
            "/auctions/:id",
            get(handle_get).patch(handle_update).delete(handle_delete),
        )
        .layer(cors)
        .with_state(service)
}
// endregion: --- Router

// region:    --- Error Response
/// 스토어 오류를 HTTP 응답으로 변환
fn error_response(e: StoreError) -> Response {
    let (status, code, message) = match &e {
        StoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", e.to_string()),
        StoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION", msg.clone()),
        StoreError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, "TIMEOUT", e.to_string()),
        StoreError::OperationFailed(_) | StoreError::MissingProvider { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "OPERATION_FAILED",
            e.to_string(),
        ),
    };
    (
        status,
        Json(serde_json::json!({ "error": message, "code": code })),
    )
        .into_response()
}
// endregion: --- Error Response

// region:    --- Handlers

/// 경매 목록 조회
pub async fn handle_list(State(service): ServiceState) -> Response {
    info!("{:<12} --> 경매 목록 조회", "Handler");
    match service.list().await {
        Ok(auctions) => Json(auctions).into_response(),
        Err(e) => error_response(e),
    }
}

/// 경매 단건 조회
pub async fn handle_get(State(service): ServiceState, Path(id): Path<String>) -> Response {
    info!("{:<12} --> 경매 조회 id: {}", "Handler", id);
    match service.get(&id).await {
        Ok(auction) => Json(auction).into_response(),
        Err(e) => error_response(e),
    }
}

/// 경매 생성
pub async fn handle_create(
    State(service): ServiceState,
    Json(draft): Json<AuctionDraft>,
) -> Response {
    info!("{:<12} --> 경매 생성 요청: {}", "Handler", draft.title);
    if let Err(e) = draft.validate() {
        return error_response(e);
    }
    match service.create(draft).await {
        Ok(auction) => (StatusCode::CREATED, Json(auction)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 경매 수정
pub async fn handle_update(
    State(service): ServiceState,
    Path(id): Path<String>,
    Json(patch): Json<AuctionPatch>,
) -> Response {
    info!("{:<12} --> 경매 수정 요청 id: {}", "Handler", id);
    match service.update(&id, patch).await {
        Ok(auction) => Json(auction).into_response(),
        Err(e) => error_response(e),
    }
}

/// 경매 삭제
pub async fn handle_delete(State(service): ServiceState, Path(id): Path<String>) -> Response {
    info!("{:<12} --> 경매 삭제 요청 id: {}", "Handler", id);
    match service.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

// endregion: --- Handlers

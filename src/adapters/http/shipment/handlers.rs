//! HTTP handlers for shipment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::shipment::{
    CreateShipmentCommand, CreateShipmentHandler, DeleteShipmentCommand, DeleteShipmentHandler,
    FindByTrackingNumberHandler, FindByTrackingNumberQuery, GetShipmentHandler, GetShipmentQuery,
    GetStatusStatsHandler, GetStatusStatsQuery, ListShipmentsHandler, ListShipmentsQuery,
    PageSizePolicy, SearchShipmentsHandler, SearchShipmentsQuery, ShipmentSaver,
    ToggleExpressCommand, ToggleExpressHandler, UpdateShipmentCommand, UpdateShipmentHandler,
};
use crate::domain::foundation::ShipmentId;
use crate::domain::shipment::{quote, ShipmentError, ShipmentFilter};
use crate::ports::{ShipmentReader, ShipmentRepository, TrackingNumberSource};

use super::dto::{
    DeleteShipmentResponse, ErrorResponse, ListShipmentsParams, QuoteParams, QuoteResponse,
    ShipmentListResponse, ShipmentRequest, ShipmentResponse, StatusStatsResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ShipmentAppState {
    create_handler: Arc<CreateShipmentHandler>,
    update_handler: Arc<UpdateShipmentHandler>,
    delete_handler: Arc<DeleteShipmentHandler>,
    toggle_express_handler: Arc<ToggleExpressHandler>,
    get_handler: Arc<GetShipmentHandler>,
    track_handler: Arc<FindByTrackingNumberHandler>,
    list_handler: Arc<ListShipmentsHandler>,
    search_handler: Arc<SearchShipmentsHandler>,
    stats_handler: Arc<GetStatusStatsHandler>,
}

impl ShipmentAppState {
    /// Wires every shipment handler over the given ports.
    pub fn new(
        repository: Arc<dyn ShipmentRepository>,
        reader: Arc<dyn ShipmentReader>,
        tracking_numbers: Arc<dyn TrackingNumberSource>,
        page_size: PageSizePolicy,
    ) -> Self {
        let saver = ShipmentSaver::new(repository.clone(), tracking_numbers);
        Self {
            create_handler: Arc::new(CreateShipmentHandler::new(saver.clone())),
            update_handler: Arc::new(UpdateShipmentHandler::new(repository.clone(), saver.clone())),
            delete_handler: Arc::new(DeleteShipmentHandler::new(repository.clone())),
            toggle_express_handler: Arc::new(ToggleExpressHandler::new(repository.clone(), saver)),
            get_handler: Arc::new(GetShipmentHandler::new(repository.clone())),
            track_handler: Arc::new(FindByTrackingNumberHandler::new(repository)),
            list_handler: Arc::new(ListShipmentsHandler::new(reader.clone(), page_size)),
            search_handler: Arc::new(SearchShipmentsHandler::new(reader.clone(), page_size)),
            stats_handler: Arc::new(GetStatusStatsHandler::new(reader)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/shipments - Create a shipment
pub async fn create_shipment(
    State(state): State<ShipmentAppState>,
    RequireAuth(user_id): RequireAuth,
    Json(req): Json<ShipmentRequest>,
) -> Response {
    let details = match req.into_details() {
        Ok(details) => details,
        Err(e) => return handle_shipment_error(e),
    };

    let cmd = CreateShipmentCommand { user_id, details };

    match state.create_handler.handle(cmd).await {
        Ok(shipment) => {
            let response = ShipmentResponse::from(shipment);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_shipment_error(e),
    }
}

/// GET /api/shipments - List the caller's shipments, or search them when `q` is set
pub async fn list_shipments(
    State(state): State<ShipmentAppState>,
    RequireAuth(user_id): RequireAuth,
    Query(params): Query<ListShipmentsParams>,
) -> Response {
    if let Some(term) = params.search_term() {
        let query = SearchShipmentsQuery {
            user_id,
            term: term.to_string(),
            page: params.page,
            per_page: params.per_page,
        };

        return match state.search_handler.handle(query).await {
            Ok(page) => {
                let response = ShipmentListResponse::new(page, Some(term.to_string()));
                (StatusCode::OK, Json(response)).into_response()
            }
            Err(e) => handle_shipment_error(e),
        };
    }

    let filter = match ShipmentFilter::from_raw(
        params.status.as_deref(),
        params.priority.as_deref(),
        params.express.as_deref(),
    ) {
        Ok(filter) => filter,
        Err(e) => return handle_shipment_error(e.into()),
    };

    let query = ListShipmentsQuery {
        user_id,
        filter,
        page: params.page,
        per_page: params.per_page,
    };

    match state.list_handler.handle(query).await {
        Ok(page) => {
            let response = ShipmentListResponse::new(page, None);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_shipment_error(e),
    }
}

/// GET /api/shipments/stats - Per-status counts and costs
pub async fn shipment_stats(
    State(state): State<ShipmentAppState>,
    RequireAuth(user_id): RequireAuth,
) -> Response {
    match state.stats_handler.handle(GetStatusStatsQuery { user_id }).await {
        Ok(stats) => (StatusCode::OK, Json(StatusStatsResponse { stats })).into_response(),
        Err(e) => handle_shipment_error(e),
    }
}

/// GET /api/shipments/track/:tracking - Look up one of the caller's shipments by tracking number
pub async fn track_shipment(
    State(state): State<ShipmentAppState>,
    RequireAuth(user_id): RequireAuth,
    Path(tracking_number): Path<String>,
) -> Response {
    let query = FindByTrackingNumberQuery {
        tracking_number,
        user_id: Some(user_id),
    };

    match state.track_handler.handle(query).await {
        Ok(shipment) => (StatusCode::OK, Json(ShipmentResponse::from(shipment))).into_response(),
        Err(e) => handle_shipment_error(e),
    }
}

/// GET /api/shipments/:id - Get shipment details
pub async fn get_shipment(
    State(state): State<ShipmentAppState>,
    RequireAuth(user_id): RequireAuth,
    Path(shipment_id): Path<String>,
) -> Response {
    let shipment_id = match parse_shipment_id(&shipment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetShipmentQuery {
        shipment_id,
        user_id,
    };

    match state.get_handler.handle(query).await {
        Ok(shipment) => (StatusCode::OK, Json(ShipmentResponse::from(shipment))).into_response(),
        Err(e) => handle_shipment_error(e),
    }
}

/// PUT /api/shipments/:id - Replace every client-supplied field
pub async fn update_shipment(
    State(state): State<ShipmentAppState>,
    RequireAuth(user_id): RequireAuth,
    Path(shipment_id): Path<String>,
    Json(req): Json<ShipmentRequest>,
) -> Response {
    let shipment_id = match parse_shipment_id(&shipment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let details = match req.into_details() {
        Ok(details) => details,
        Err(e) => return handle_shipment_error(e),
    };

    let cmd = UpdateShipmentCommand {
        shipment_id,
        user_id,
        details,
    };

    match state.update_handler.handle(cmd).await {
        Ok(shipment) => (StatusCode::OK, Json(ShipmentResponse::from(shipment))).into_response(),
        Err(e) => handle_shipment_error(e),
    }
}

/// DELETE /api/shipments/:id - Delete a shipment
pub async fn delete_shipment(
    State(state): State<ShipmentAppState>,
    RequireAuth(user_id): RequireAuth,
    Path(shipment_id): Path<String>,
) -> Response {
    let shipment_id = match parse_shipment_id(&shipment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteShipmentCommand {
        shipment_id,
        user_id,
    };

    match state.delete_handler.handle(cmd).await {
        Ok(deleted) => (StatusCode::OK, Json(DeleteShipmentResponse { deleted })).into_response(),
        Err(e) => handle_shipment_error(e),
    }
}

/// POST /api/shipments/:id/toggle-express - Flip express service and reprice
pub async fn toggle_express(
    State(state): State<ShipmentAppState>,
    RequireAuth(user_id): RequireAuth,
    Path(shipment_id): Path<String>,
) -> Response {
    let shipment_id = match parse_shipment_id(&shipment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ToggleExpressCommand {
        shipment_id,
        user_id,
    };

    match state.toggle_express_handler.handle(cmd).await {
        Ok(shipment) => (StatusCode::OK, Json(ShipmentResponse::from(shipment))).into_response(),
        Err(e) => handle_shipment_error(e),
    }
}

/// GET /api/pricing/quote - Cost preview; never touches storage
pub async fn pricing_quote(Query(params): Query<QuoteParams>) -> Json<QuoteResponse> {
    let shipping_cost = quote(
        params.weight.as_deref(),
        params.priority.as_deref(),
        params.express.as_deref() == Some("true"),
    );
    Json(QuoteResponse { shipping_cost })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_shipment_id(raw: &str) -> Result<ShipmentId, Response> {
    raw.parse::<ShipmentId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid shipment ID")),
        )
            .into_response()
    })
}

fn handle_shipment_error(error: ShipmentError) -> Response {
    let message = error.message();
    match error {
        ShipmentError::NotFound(_) | ShipmentError::TrackingNumberNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(message)),
        )
            .into_response(),
        ShipmentError::ValidationFailed { field, .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&field, message)),
        )
            .into_response(),
        ShipmentError::ConstraintViolation { constraint, .. } => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(&constraint, message)),
        )
            .into_response(),
        ShipmentError::Storage(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::unavailable("Shipment storage is unavailable, try again")),
        )
            .into_response(),
    }
}

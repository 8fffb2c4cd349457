//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::catalog::{CatalogError, DEFAULT_SUGGESTION_LIMIT, ImportMode};
use crate::domain::{DomainError, RouteDraft};
use crate::persist::{
    DEFAULT_ROUTES_FILE, PersistError, ShortTimes, export_json, records_from_values,
    records_to_routes,
};
use crate::planner::{PlanError, PlanRequest, Planner};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stops", get(search_stops))
        .route("/journey/plan", get(plan_journey))
        .route("/routes", get(list_routes).post(create_route))
        .route("/routes/export", get(export_routes))
        .route("/routes/import", post(import_routes))
        .route(
            "/routes/:id",
            get(get_route).put(update_route).delete(delete_route),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with plan form and route list.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog.snapshot().await;
    let template = IndexTemplate {
        routes: catalog
            .routes()
            .iter()
            .map(|r| RouteRowView::from_route(r))
            .collect(),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Suggest stop names containing the query text.
async fn search_stops(
    State(state): State<AppState>,
    Query(req): Query<StopSearchRequest>,
) -> Json<StopSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
        .min(DEFAULT_SUGGESTION_LIMIT);
    let catalog = state.catalog.snapshot().await;

    let stops = catalog
        .suggest_stops(&req.q, limit)
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    Json(StopSearchResponse { stops })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse a JSON body, logging it on failure.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(
            error = %e,
            body = %String::from_utf8_lossy(body),
            "Rejected request body"
        );
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Plan itineraries between two stops.
async fn plan_journey(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PlanQuery>,
) -> Result<Response, AppError> {
    let request = PlanRequest::new(&query.from, &query.to)?;

    let catalog = state.catalog.snapshot().await;
    let outcome = Planner::new(&state.config).plan(&catalog, &request);

    debug!(
        from = %request.start,
        to = %request.end,
        found = outcome.itineraries().len(),
        "Planned itineraries"
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = JourneyResultsTemplate::from_outcome(
            request.start.as_str(),
            request.end.as_str(),
            &outcome,
        );
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(PlanResponse::from_outcome(&outcome)).into_response())
    }
}

/// List every route in catalog order.
async fn list_routes(State(state): State<AppState>) -> Json<RouteListResponse> {
    let catalog = state.catalog.snapshot().await;
    let routes = catalog
        .routes()
        .iter()
        .map(|r| RouteDetailResult::from_route(r))
        .collect();
    Json(RouteListResponse { routes })
}

/// Show one route.
async fn get_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let catalog = state.catalog.snapshot().await;
    let detail = catalog.detail(&id)?;

    if accepts_html(&headers) {
        let template = RouteDetailTemplate {
            route: RouteView::from_detail(&detail),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(RouteDetailResult::from_detail(&detail)).into_response())
    }
}

/// Add a new route and save the catalog.
async fn create_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let input: RouteInput = parse_json(&body)?;
    let route = RouteDraft::from(input).into_route()?;
    let id = route.id().clone();

    let detail = state
        .catalog
        .update_and_commit::<_, AppError>(
            |c| {
                c.add(route)?;
                Ok(c.detail(id.as_str())?)
            },
            |c| Ok(state.store.save(c)?),
        )
        .await?;

    info!(route = %id, "Added route");
    Ok((
        StatusCode::CREATED,
        Json(RouteDetailResult::from_detail(&detail)),
    )
        .into_response())
}

/// Replace a route and save the catalog.
async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    let input: RouteInput = parse_json(&body)?;
    let route = RouteDraft::from(input).into_route()?;
    let new_id = route.id().clone();

    let detail = state
        .catalog
        .update_and_commit::<_, AppError>(
            |c| {
                c.replace(&id, route)?;
                Ok(c.detail(new_id.as_str())?)
            },
            |c| Ok(state.store.save(c)?),
        )
        .await?;

    info!(route = %id, now = %new_id, "Updated route");
    Ok(Json(RouteDetailResult::from_detail(&detail)).into_response())
}

/// Remove a route and save the catalog.
async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .catalog
        .update_and_commit::<_, AppError>(
            |c| Ok(c.remove(&id)?),
            |c| Ok(state.store.save(c)?),
        )
        .await?;

    info!(route = %id, "Removed route");
    Ok(StatusCode::NO_CONTENT)
}

/// Download the catalog in the on-disk format.
async fn export_routes(State(state): State<AppState>) -> Result<Response, AppError> {
    let catalog = state.catalog.snapshot().await;
    let json = export_json(&catalog)?;

    let disposition = format!("attachment; filename=\"{DEFAULT_ROUTES_FILE}\"");
    let mut response = json.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    Ok(response)
}

/// Parse the import mode query parameter.
fn parse_import_mode(mode: Option<&str>) -> Result<ImportMode, AppError> {
    match mode.map(str::trim) {
        None | Some("") => Ok(ImportMode::default()),
        Some(m) if m.eq_ignore_ascii_case("append") => Ok(ImportMode::Append),
        Some(m) if m.eq_ignore_ascii_case("replace") => Ok(ImportMode::Replace),
        Some(other) => Err(AppError::BadRequest {
            message: format!("Unknown import mode: {other}"),
        }),
    }
}

/// Import routes from a JSON array of route records.
async fn import_routes(
    State(state): State<AppState>,
    Query(query): Query<ImportQuery>,
    body: Bytes,
) -> Result<Json<ImportResponse>, AppError> {
    let mode = parse_import_mode(query.mode.as_deref())?;
    let values: Vec<serde_json::Value> = parse_json(&body)?;
    let routes = records_to_routes(records_from_values(values), ShortTimes::Pad);
    if routes.is_empty() {
        return Err(AppError::BadRequest {
            message: "no routes to import".to_string(),
        });
    }

    let (summary, total) = state
        .catalog
        .update_and_commit::<_, AppError>(
            |c| {
                let summary = c.import(routes, mode);
                Ok((summary, c.len()))
            },
            |c| Ok(state.store.save(c)?),
        )
        .await?;

    info!(
        ?mode,
        added = summary.added,
        replaced = summary.replaced,
        total,
        "Imported routes"
    );
    Ok(Json(ImportResponse::new(summary, total)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            CatalogError::DuplicateId(_) => AppError::Conflict {
                message: e.to_string(),
            },
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(msg) => AppError::BadRequest { message: msg },
        }
    }
}

impl From<PersistError> for AppError {
    fn from(e: PersistError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            debug!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

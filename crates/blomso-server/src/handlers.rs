//! HTTP request handlers for the site service.
//!
//! Implements lead submission, read-only content views, SEO artefacts and
//! product-link redirects using axum.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use blomso_content::site::{self, Page, PageMeta};
use blomso_content::Catalog;
use blomso_domain::{ClaimCategory, LeadStore, LeadType, LinkKey};
use blomso_leads::{validate_lead, LeadStoreError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Lead store shared by all handlers
pub type SharedLeadStore = Arc<dyn LeadStore<Error = LeadStoreError>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Content catalog, loaded once at startup
    pub catalog: Arc<Catalog>,
    /// Lead storage adapter
    pub leads: SharedLeadStore,
}

/// Optional category filter on claim listings
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    /// Category name (e.g. "metric")
    pub category: Option<String>,
}

/// Successful lead submission
#[derive(Debug, Serialize, Deserialize)]
pub struct LeadCreatedResponse {
    /// Always true
    pub success: bool,
    /// Generated lead id
    pub id: String,
}

/// Lead validation failure
#[derive(Debug, Serialize, Deserialize)]
pub struct LeadRejectedResponse {
    /// One message per failing rule
    pub errors: Vec<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Claims in the catalog
    pub claims: usize,
    /// Claims approved for display
    pub verified_claims: usize,
    /// Leads captured since startup
    pub leads: usize,
}

/// Page metadata plus the content the page may render
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    /// Canonical URL, Open Graph and Twitter tags
    pub meta: PageMeta,
    /// Page-specific content
    pub content: T,
}

/// Contact page content
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    /// Accepted values of the form's `type` field
    pub lead_types: [LeadType; 2],
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request body is not JSON
    InvalidJson,
    /// Bad query or path parameter
    BadRequest(String),
    /// Resource does not exist (or is not public)
    NotFound(String),
    /// Lead storage failed
    Store(LeadStoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidJson => (StatusCode::BAD_REQUEST, "Invalid JSON.".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Store(e) => {
                error!("Lead store failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<LeadStoreError> for AppError {
    fn from(e: LeadStoreError) -> Self {
        AppError::Store(e)
    }
}

fn parse_category(query: &CategoryQuery) -> Result<Option<ClaimCategory>, AppError> {
    query
        .category
        .as_deref()
        .map(|c| c.parse::<ClaimCategory>().map_err(AppError::BadRequest))
        .transpose()
}

/// POST /api/lead - Validate and store a contact-form submission
///
/// The body is read as raw bytes so malformed JSON maps to the documented
/// 400 response whatever the content type says.
async fn submit_lead(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?;

    let lead = match validate_lead(&payload) {
        Ok(lead) => lead,
        Err(errors) => {
            debug!(errors = errors.len(), "Lead rejected");
            let body = Json(LeadRejectedResponse { errors });
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response());
        }
    };

    let record = state.leads.save_lead(lead)?;

    let body = Json(LeadCreatedResponse {
        success: true,
        id: record.id,
    });
    Ok((StatusCode::CREATED, body).into_response())
}

/// GET /api/claims - Verified claims, optionally by category
async fn list_claims(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Response, AppError> {
    let category = parse_category(&query)?;
    let claims = state.catalog.registry().verified_claims(category);
    Ok(Json(claims).into_response())
}

/// GET /api/claims/:id - One verified claim
async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let claim = state
        .catalog
        .registry()
        .verified_claim_by_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("Claim not found: {}", id)))?;
    Ok(Json(claim).into_response())
}

/// GET /api/traction - Claims eligible under the traction policy
async fn list_traction(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Response, AppError> {
    let category = parse_category(&query)?;
    let claims = state.catalog.registry().traction_claims(category);
    Ok(Json(claims).into_response())
}

/// GET /api/supporters - Supporters grouped by band
async fn list_supporters(State(state): State<AppState>) -> Response {
    Json(state.catalog.supporter_groups()).into_response()
}

/// GET /api/pages/:page - Metadata plus the content a page may render
async fn get_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let page = Page::parse(&name)
        .ok_or_else(|| AppError::NotFound(format!("Page not found: {}", name)))?;
    let catalog = &state.catalog;
    let meta = page.meta();

    let response = match page {
        Page::Home => Json(PageResponse { meta, content: catalog.home_page() }).into_response(),
        Page::Platform => {
            Json(PageResponse { meta, content: catalog.platform_page() }).into_response()
        }
        Page::Traction => {
            Json(PageResponse { meta, content: catalog.traction_page() }).into_response()
        }
        Page::Contact => Json(PageResponse {
            meta,
            content: ContactContent {
                lead_types: [LeadType::Investor, LeadType::Operator],
            },
        })
        .into_response(),
    };

    Ok(response)
}

/// GET /sitemap.xml
async fn sitemap() -> Response {
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    (
        [(header::CONTENT_TYPE, "application/xml")],
        site::sitemap_xml(&today),
    )
        .into_response()
}

/// GET /manifest.webmanifest
async fn manifest() -> Response {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(site::web_manifest()),
    )
        .into_response()
}

/// GET /api/jsonld - Structured data documents
async fn json_ld() -> Json<Vec<Value>> {
    Json(site::json_ld())
}

/// 302 to an external product link
fn redirect(state: &AppState, key: LinkKey) -> Response {
    let href = state.catalog.links().get(key).href.clone();
    (StatusCode::FOUND, [(header::LOCATION, href)]).into_response()
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthCheckResponse>, AppError> {
    let registry = state.catalog.registry();

    Ok(Json(HealthCheckResponse {
        status: "healthy".to_string(),
        claims: registry.len(),
        verified_claims: registry.verified_claims(None).len(),
        leads: state.leads.count()?,
    }))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    let mut router = AxumRouter::new()
        .route("/api/lead", post(submit_lead))
        .route("/api/claims", get(list_claims))
        .route("/api/claims/:id", get(get_claim))
        .route("/api/traction", get(list_traction))
        .route("/api/supporters", get(list_supporters))
        .route("/api/pages/:page", get(get_page))
        .route("/api/jsonld", get(json_ld))
        .route("/sitemap.xml", get(sitemap))
        .route("/manifest.webmanifest", get(manifest))
        .route("/health", get(health_check));

    for key in LinkKey::ALL {
        router = router.route(
            &format!("/{}", key),
            get(move |State(state): State<AppState>| async move { redirect(&state, key) }),
        );
    }

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use blomso_leads::InMemoryLeadStore;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState {
        AppState {
            catalog: Arc::new(Catalog::builtin().unwrap()),
            leads: Arc::new(InMemoryLeadStore::new()),
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_redirect() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/roadmap")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://blomso.featurebase.app/roadmap"
        );
    }

    #[test]
    fn test_parse_category() {
        let query = CategoryQuery {
            category: Some("capability".to_string()),
        };
        assert_eq!(parse_category(&query).unwrap(), Some(ClaimCategory::Capability));

        let query = CategoryQuery { category: None };
        assert_eq!(parse_category(&query).unwrap(), None);

        let query = CategoryQuery {
            category: Some("gossip".to_string()),
        };
        assert!(matches!(parse_category(&query), Err(AppError::BadRequest(_))));
    }
}

// 🌐 REST API - the catalog over HTTP (axum)
//
// One ToolStore behind a mutex; every handler locks it for the duration of
// a single operation. Responses share the `{success, data, error, warning}`
// envelope.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tower_http::cors::CorsLayer;

use crate::comparison::ComparisonTable;
use crate::entities::{Category, Tool, ToolPatch};
use crate::error::CatalogError;
use crate::schema::{FieldError, ToolDraft};
use crate::sort::{sort_tools, SortKey};
use crate::store::{SaveStatus, ToolStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<ToolStore>>,
}

impl AppState {
    pub fn new(store: ToolStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn store(&self) -> MutexGuard<'_, ToolStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// API Response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            warning: None,
            fields: None,
        }
    }

    fn saved(data: T, status: &SaveStatus) -> Self {
        Self {
            warning: status.warning().map(|w| w.to_string()),
            ..Self::ok(data)
        }
    }
}

impl ApiResponse<()> {
    fn failure(error: String, fields: Option<Vec<FieldError>>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            warning: None,
            fields,
        }
    }
}

/// Catalog errors mapped onto HTTP statuses
#[derive(Debug)]
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CatalogError::DuplicateId(_) => StatusCode::CONFLICT,
            CatalogError::InvalidFields(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        let fields = match &self.0 {
            CatalogError::InvalidFields(fields) => Some(fields.clone()),
            _ => None,
        };

        (status, Json(ApiResponse::failure(self.0.to_string(), fields))).into_response()
    }
}

type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    q: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    sort: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryCount {
    pub value: Category,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Deleted {
    pub id: String,
    pub deleted: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SelectionToggle {
    pub id: String,
    pub selected: bool,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/categories - Every category with its tool count
async fn get_categories(State(state): State<AppState>) -> impl IntoResponse {
    let counts: Vec<CategoryCount> = state
        .store()
        .category_counts()
        .into_iter()
        .map(|(category, count)| CategoryCount {
            value: category,
            label: category.label().to_string(),
            count,
        })
        .collect();

    Json(ApiResponse::ok(counts))
}

/// GET /api/tools?q=&category=&sort= - Search, filter and sort
async fn list_tools(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let store = state.store();
    let mut tools = store.query(&params.q, &params.category);
    sort_tools(&mut tools, SortKey::parse_or_default(&params.sort));

    let response: Vec<Tool> = tools.into_iter().cloned().collect();
    Json(ApiResponse::ok(response))
}

/// POST /api/tools - Validate a draft and add it as a new tool
async fn create_tool(State(state): State<AppState>, Json(draft): Json<ToolDraft>) -> ApiResult<Tool> {
    let tool = draft.into_tool()?;
    let status = state.store().create(tool.clone())?;
    tracing::info!(id = %tool.id, name = %tool.name, "tool added via API");

    Ok((StatusCode::CREATED, Json(ApiResponse::saved(tool, &status))))
}

/// GET /api/tools/:id - One tool
async fn get_tool(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Tool> {
    let tool = state
        .store()
        .get_by_id(&id)
        .cloned()
        .ok_or(CatalogError::NotFound(id))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(tool))))
}

/// PATCH /api/tools/:id - Overwrite the supplied fields
async fn update_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ToolPatch>,
) -> ApiResult<Tool> {
    patch.validate().map_err(CatalogError::InvalidFields)?;

    let mut store = state.store();
    let status = store.update(&id, patch)?;
    let tool = store
        .get_by_id(&id)
        .cloned()
        .ok_or(CatalogError::NotFound(id))?;

    Ok((StatusCode::OK, Json(ApiResponse::saved(tool, &status))))
}

/// DELETE /api/tools/:id - Remove a tool (no-op if it is already gone)
async fn delete_tool(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Deleted> {
    let status = state.store().delete(&id);
    let deleted = Deleted {
        deleted: status != SaveStatus::Unchanged,
        id,
    };

    Ok((StatusCode::OK, Json(ApiResponse::saved(deleted, &status))))
}

/// GET /api/selection - Ids selected for comparison
async fn get_selection(State(state): State<AppState>) -> impl IntoResponse {
    let ids: Vec<String> = state.store().selected_ids().iter().cloned().collect();
    Json(ApiResponse::ok(ids))
}

/// POST /api/selection/:id - Toggle a tool in the comparison
async fn toggle_selection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<SelectionToggle> {
    let mut store = state.store();
    if store.get_by_id(&id).is_none() && !store.is_selected(&id) {
        return Err(CatalogError::NotFound(id).into());
    }
    let selected = store.toggle_selection(&id);

    Ok((StatusCode::OK, Json(ApiResponse::ok(SelectionToggle { id, selected }))))
}

/// DELETE /api/selection - Empty the comparison
async fn clear_selection(State(state): State<AppState>) -> impl IntoResponse {
    state.store().clear_selection();
    Json(ApiResponse::ok(Vec::<String>::new()))
}

/// GET /api/compare - Comparison table of the selected tools
async fn get_comparison(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store();
    Json(ApiResponse::ok(ComparisonTable::build(&store.selected_tools())))
}

// ============================================================================
// Router
// ============================================================================

/// All routes, nested under `/api`
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/categories", get(get_categories))
        .route("/tools", get(list_tools).post(create_tool))
        .route(
            "/tools/:id",
            get(get_tool).patch(update_tool).delete(delete_tool),
        )
        .route("/selection", get(get_selection).delete(clear_selection))
        .route("/selection/:id", post(toggle_selection))
        .route("/compare", get(get_comparison))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::builtin_tools;
    use crate::storage::MemoryStore;
    use axum::body::Body;
    use axum::http::Request;
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let store = ToolStore::load(Box::new(MemoryStore::new()), builtin_tools());
        router(AppState::new(store))
    }

    async fn send<T: DeserializeOwned>(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, ApiResponse<T>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = send::<String>(&app, "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data.as_deref(), Some("OK"));
    }

    #[tokio::test]
    async fn test_list_filters_and_sorts() {
        let app = test_app();
        let (status, body) =
            send::<Vec<Tool>>(&app, "GET", "/api/tools?category=image&sort=ratingDesc", None).await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<String> = body.data.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Midjourney", "DALL-E 3"]);

        let (_, body) = send::<Vec<Tool>>(&app, "GET", "/api/tools?q=anthropic", None).await;
        assert_eq!(body.data.unwrap()[0].id, "6");
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let app = test_app();
        let draft = serde_json::json!({
            "name": "Perplexity",
            "description": "Answer engine",
            "url": "https://perplexity.ai",
            "developer": "Perplexity AI",
            "category": "text",
            "tags": ["search"],
            "apiAccess": true
        });

        let (status, body) = send::<Tool>(&app, "POST", "/api/tools", Some(draft)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body.warning.is_none());
        let created = body.data.unwrap();

        let (status, body) =
            send::<Tool>(&app, "GET", &format!("/api/tools/{}", created.id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_invalid_draft_lists_fields() {
        let app = test_app();
        let draft = serde_json::json!({ "name": "", "url": "not a url", "category": "music" });

        let (status, body) = send::<()>(&app, "POST", "/api/tools", Some(draft)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!body.success);
        let fields: Vec<String> = body.fields.unwrap().into_iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["name", "description", "url", "developer", "category"]);
    }

    #[tokio::test]
    async fn test_patch_and_missing_tool() {
        let app = test_app();

        let (status, body) = send::<Tool>(
            &app,
            "PATCH",
            "/api/tools/3",
            Some(serde_json::json!({ "category": "multimodal", "rating": null })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let tool = body.data.unwrap();
        assert_eq!(tool.category, Category::Multimodal);
        assert_eq!(tool.rating, None);
        assert_eq!(tool.name, "Midjourney");

        let (status, _) = send::<()>(
            &app,
            "PATCH",
            "/api/tools/nope",
            Some(serde_json::json!({ "name": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send::<()>(&app, "GET", "/api/tools/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_clears_selection() {
        let app = test_app();

        let (status, body) = send::<SelectionToggle>(&app, "POST", "/api/selection/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.data.unwrap().selected);

        let (_, body) = send::<Deleted>(&app, "DELETE", "/api/tools/2", None).await;
        assert!(body.data.unwrap().deleted);

        let (_, body) = send::<Vec<String>>(&app, "GET", "/api/selection", None).await;
        assert!(body.data.unwrap().is_empty());

        let (status, body) = send::<Deleted>(&app, "DELETE", "/api/tools/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.data.unwrap().deleted);
    }

    #[tokio::test]
    async fn test_compare_selected_tools() {
        let app = test_app();
        send::<SelectionToggle>(&app, "POST", "/api/selection/8", None).await;
        send::<SelectionToggle>(&app, "POST", "/api/selection/1", None).await;

        let (_, body) = send::<serde_json::Value>(&app, "GET", "/api/compare", None).await;
        let table = body.data.unwrap();
        assert_eq!(table["toolNames"], serde_json::json!(["ChatGPT", "Runway Gen-2"]));

        let (status, _) = send::<()>(&app, "POST", "/api/selection/ghost", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_categories_counts() {
        let app = test_app();
        let (_, body) = send::<Vec<CategoryCount>>(&app, "GET", "/api/categories", None).await;
        let counts = body.data.unwrap();

        assert_eq!(counts.len(), 8);
        assert_eq!(
            counts[0],
            CategoryCount {
                value: Category::Text,
                label: "Text".to_string(),
                count: 2,
            }
        );
    }
}

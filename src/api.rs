// 🌐 HTTP API - Axum routes over a shared Kitchen
//
// Readers lock, render, release. Uploads parse first, then hold the upload
// lock across both the file write and the in-memory replace, so the saved
// files always match what is being served.

use crate::config::Config;
use crate::engine;
use crate::kitchen::Kitchen;
use crate::loader::{self, Ingested};
use crate::presentation::{KitchenView, RecipeView};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    kitchen: Arc<Mutex<Kitchen>>,
    uploads: Arc<tokio::sync::Mutex<()>>,
    config: Arc<Config>,
    today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(kitchen: Kitchen, config: Config) -> Self {
        AppState {
            kitchen: Arc::new(Mutex::new(kitchen)),
            uploads: Arc::new(tokio::sync::Mutex::new(())),
            config: Arc::new(config),
            today: None,
        }
    }

    /// Pin "today" instead of reading the local clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Kitchen>, ApiError> {
        self.kitchen
            .lock()
            .map_err(|_| ApiError::Internal("kitchen state is poisoned".to_string()))
    }
}

// ============================================================================
// RESPONSES
// ============================================================================

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            data: (),
            error: Some(message),
        }
    }
}

/// Result of replacing the fridge or the recipes
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    accepted: usize,
    rejected: usize,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!(%status, error = %self, "Request failed");
        (status, Json(ApiResponse::<()>::failure(self.to_string()))).into_response()
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /data.json, GET /api/kitchen - Usable food, today's recipe and every recipe's status
async fn kitchen_view(State(state): State<AppState>) -> Result<Json<KitchenView>, ApiError> {
    let today = state.today();
    let kitchen = state.lock()?;
    Ok(Json(KitchenView::build(&kitchen, today)))
}

/// GET /api/recipe - Today's recipe only
async fn todays_recipe(State(state): State<AppState>) -> Result<Json<ApiResponse<RecipeView>>, ApiError> {
    let today = state.today();
    let kitchen = state.lock()?;

    let food = kitchen.todays_food(today);
    let recipe = engine::select_recipe(kitchen.recipes(), &food);
    let cook_by = engine::cook_by_date(recipe.ingredients(), &food);

    Ok(Json(ApiResponse::ok(RecipeView::build(&recipe, cook_by))))
}

/// POST /api/fridge - Replace the fridge with a CSV body
async fn upload_fridge(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ApiResponse<UploadResponse>>, ApiError> {
    let Ingested { value: fridge, rejected } =
        loader::read_fridge(body.as_bytes()).map_err(|e| ApiError::BadRequest(format!("{:#}", e)))?;

    let _writer = state.uploads.lock().await;
    persist(state.config.fridge_path.as_deref(), &body).await?;

    let accepted = fridge.len();
    state.lock()?.replace_fridge(fridge);

    Ok(Json(ApiResponse::ok(UploadResponse { accepted, rejected })))
}

/// POST /api/recipes - Replace the recipes with a JSON body
async fn upload_recipes(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ApiResponse<UploadResponse>>, ApiError> {
    let Ingested { value: recipes, rejected } =
        loader::parse_recipes(&body).map_err(|e| ApiError::BadRequest(format!("{:#}", e)))?;

    let _writer = state.uploads.lock().await;
    persist(state.config.recipes_path.as_deref(), &body).await?;

    let accepted = recipes.len();
    state.lock()?.replace_recipes(recipes);

    Ok(Json(ApiResponse::ok(UploadResponse { accepted, rejected })))
}

/// Write an accepted upload back to its configured file, if there is one
async fn persist(path: Option<&Path>, body: &str) -> Result<(), ApiError> {
    let Some(path) = path else {
        return Ok(());
    };

    tokio::fs::write(path, body).await.map_err(|e| {
        ApiError::Internal(format!("Failed to save upload to {}: {}", path.display(), e))
    })?;
    tracing::info!(path = %path.display(), bytes = body.len(), "Upload saved");
    Ok(())
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let web_dir = state.config.web_dir.clone();

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/kitchen", get(kitchen_view))
        .route("/recipe", get(todays_recipe))
        .route("/fridge", post(upload_fridge))
        .route("/recipes", post(upload_recipes));

    Router::new()
        .route("/data.json", get(kitchen_view))
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(web_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ============================================================================
// TESTS
// ============================================================================

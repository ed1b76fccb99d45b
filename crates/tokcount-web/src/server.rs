use axum::{
    extract::{DefaultBodyLimit, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use tokcount_config::PageMeta;
use tokcount_core::{Breakdown, ModelPrice};
use tokcount_engine::Pipeline;

use crate::page::{render_page, PageContext};

/// Request body for POST /api/tokenize
#[derive(Deserialize)]
pub struct TokenizeRequest {
    pub text: String,
    #[serde(default)]
    pub model: Option<String>,
}

pub struct WebServer {
    pub pipeline: Arc<Pipeline>,
    pub page: PageMeta,
    pub example_text: String,
    pub default_model: String,
}

impl WebServer {
    pub fn new(
        pipeline: Arc<Pipeline>,
        page: PageMeta,
        example_text: impl Into<String>,
        default_model: Option<String>,
    ) -> Self {
        let default_model = default_model
            .or_else(|| pipeline.pricing().default_model().map(String::from))
            .unwrap_or_default();

        Self {
            pipeline,
            page,
            example_text: example_text.into(),
            default_model,
        }
    }

    /// Routes without a bound listener, so tests can drive them directly
    pub fn router(self) -> Router {
        // Add CORS layer to allow connections from any origin
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(serve_page))
            .route("/api/info", get(api_info))
            .route("/api/models", get(api_models))
            // Pasted text has no size cap
            .route(
                "/api/tokenize",
                post(api_tokenize).layer(DefaultBodyLimit::disable()),
            )
            .layer(cors)
            .with_state(Arc::new(self))
    }

    pub async fn serve(self, host: &str, port: u16) -> anyhow::Result<()> {
        let app = self.router();

        let addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&addr).await?;

        info!("Web UI listening on http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}

type AppState = Arc<WebServer>;

/// GET / - The single-page UI
async fn serve_page(State(state): State<AppState>) -> Html<String> {
    let pricing = state.pipeline.pricing();
    Html(render_page(&PageContext {
        meta: &state.page,
        models: pricing.models(),
        selected_model: &state.default_model,
        example_text: &state.example_text,
        encoding: state.pipeline.encoding_name(),
        palette: state.pipeline.palette(),
    }))
}

/// GET /api/info - Server info/health check
async fn api_info(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "tokcount",
        "version": env!("CARGO_PKG_VERSION"),
        "encoding": state.pipeline.encoding_name(),
        "default_model": state.default_model,
        "example_text": state.example_text,
    }))
}

/// GET /api/models - Models with their price per 1K tokens, in display order
async fn api_models(State(state): State<AppState>) -> Json<Vec<ModelPrice>> {
    Json(state.pipeline.pricing().rows())
}

/// POST /api/tokenize - Recompute the breakdown for one (text, model) pair
async fn api_tokenize(
    State(state): State<AppState>,
    Json(req): Json<TokenizeRequest>,
) -> Json<Breakdown> {
    let model = req.model.as_deref().unwrap_or(&state.default_model);
    Json(state.pipeline.compute(&req.text, model))
}

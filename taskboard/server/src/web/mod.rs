use axum::Router;
use axum::http::{HeaderValue, Method, header};
use migration::MigratorTrait;
use sea_orm::Database;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{self, Config};
use crate::task::{TaskState, api};

#[derive(OpenApi)]
#[openapi(
    paths(
        api::list_tasks_handler,
        api::get_task_handler,
        api::create_task_handler,
        api::update_task_handler,
        api::delete_task_handler,
    ),
    components(schemas(
        taskboard_core::Task,
        taskboard_core::TaskStatus,
        taskboard_core::CreateTaskRequest,
        taskboard_core::UpdateTaskRequest,
        taskboard_core::DeleteResponse,
        taskboard_core::ErrorResponse,
    )),
    tags((name = "Tasks", description = "Task management"))
)]
pub struct ApiDoc;

/// Builds the CORS layer from the configured origins.
///
/// Only the four task verbs and the `Content-Type`/`Authorization` headers are
/// let through. `Authorization` is accepted but never checked.
pub fn create_cors_layer(allowed_origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Assembles the full application: task API, health check, API docs and middleware.
pub fn create_app(db: sea_orm::DatabaseConnection, config: &Config) -> anyhow::Result<Router> {
    let task_state = Arc::new(TaskState { db: Arc::new(db) });
    let cors = create_cors_layer(&config.allowed_origins)?;

    let app = Router::new()
        .merge(api::create_api_router(task_state))
        .route("/health", axum::routing::get(health_check_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );
    Ok(app)
}

#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: config::Config) -> anyhow::Result<()> {
    let server_address = format!("0.0.0.0:{}", &config.port);
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Web server running on http://{}", server_address);

    let db = Database::connect(&config.db_url).await?;
    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied successfully");

    let app = create_app(db, &config)?;

    axum::serve(listener, app).await?;
    Ok(())
}

#[tracing::instrument]
pub async fn health_check_handler() -> &'static str {
    "OK"
}

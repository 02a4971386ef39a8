use axum::http::{header, HeaderName, Method};
use payroll_api::observability::{init_tracing, AppMetrics};
use payroll_api::routes::create_router;
use payroll_api::server;
use payroll_api::types::Envelope;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(payroll_api::handlers::save_user_handler),
    components(schemas(Envelope)),
    tags(
        (name = "Users", description = "User intake endpoints")
    ),
    info(
        title = "Payroll User API",
        description = "Minimal user intake service with health checks",
        version = "1.0.0"
    )
)]
struct ApiDoc;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderName::from_static("access-control-allow-method"),
        ]);

    let metrics = Arc::new(AppMetrics::new());
    let app = create_router(metrics)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http());

    // Port 0: let the OS assign one, then advertise the bound address.
    let handle = server::start(app, 0).await?;
    let addr = handle.addr();
    tracing::info!("Save-user endpoint: http://{}/saveuser", addr);
    tracing::info!("Health endpoints: http://{}/health http://{}/healthz", addr, addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown signal received");
    handle.stop().await?;

    Ok(())
}

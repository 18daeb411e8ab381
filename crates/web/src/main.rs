use std::sync::Arc;

use anyhow::Context;
use axum::{Extension, Router};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod notify;

use config::Config;
use middleware::auth::RoleKeys;
use notify::{LogMailer, SharedMailer};

#[derive(OpenApi)]
#[openapi(
    paths(
        features::classes::handlers::list_classes,
        features::classes::handlers::get_class,
        features::classes::handlers::create_class,
        features::classes::handlers::update_class,
        features::classes::handlers::delete_class,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::events::handlers::update_event,
        features::events::handlers::delete_event,
        features::registrations::handlers::list_registrations,
        features::registrations::handlers::get_registration,
        features::registrations::handlers::create_registration,
        features::registrations::handlers::update_registration,
        features::registrations::handlers::delete_registration,
        features::results::handlers::get_result,
        features::results::handlers::declare_result,
        features::results::handlers::update_result,
        features::results::handlers::delete_result,
        features::standings::handlers::get_standings,
    ),
    components(
        schemas(
            storage::dto::class::CreateClassRequest,
            storage::dto::class::UpdateClassRequest,
            storage::dto::class::ClassResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::registration::CreateRegistrationRequest,
            storage::dto::registration::UpdateRegistrationRequest,
            storage::dto::registration::RegistrationResponse,
            storage::dto::result::DeclareResultRequest,
            storage::dto::result::UpdateResultRequest,
            storage::dto::result::SoloPlacingRequest,
            storage::dto::result::SoloPlacingResponse,
            storage::dto::result::ResultResponse,
            storage::services::standings::StandingsEntry,
            storage::models::Category,
            storage::models::Class,
            storage::models::Event,
            storage::models::Registration,
            storage::models::EventResult,
            storage::models::SoloPlacing,
        )
    ),
    tags(
        (name = "classes", description = "Class administration endpoints"),
        (name = "events", description = "Event administration endpoints"),
        (name = "registrations", description = "Class-account registration endpoints"),
        (name = "results", description = "Result declaration endpoints"),
        (name = "standings", description = "Leaderboard endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting event-management API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let role_keys = RoleKeys::from_config(&config);
    let mailer: SharedMailer = Arc::new(LogMailer);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/classes", features::classes::routes::routes(role_keys.clone()))
        .nest("/api/events", features::events::routes::routes(role_keys.clone()))
        .nest(
            "/api/registrations",
            features::registrations::routes::routes(role_keys.clone()),
        )
        .nest("/api/results", features::results::routes::routes(role_keys))
        .nest("/api/standings", features::standings::routes::routes())
        .with_state(db)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(mailer))
        .layer(cors);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}

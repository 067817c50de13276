use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD Service API",
        version = "1.0.0",
        description = "Create, read and delete users over HTTP. \n\n**Responses:** plain text acknowledgements and HTML tables, no authentication."
    ),
    paths(
        // Users
        crate::api::users::greet,
        crate::api::users::get_all_users,
        crate::api::users::find_user_by_id,
        crate::api::users::add_user,
        crate::api::users::delete_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User create/read/delete endpoints. Lists are rendered as HTML tables."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui/`, document at `/api-docs/openapi.json`
pub fn service() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi())
}

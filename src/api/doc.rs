use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const HOME_TAG: &str = "Home";
pub const SERVICE_TAG: &str = "Services";
pub const REQUEST_TAG: &str = "Requests";
pub const REVIEW_TAG: &str = "Reviews";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TidyHub",
        description = "An api server for the TidyHub cleaning service marketplace",
    ),
    paths(
        crate::api::handlers::home::home,
        crate::api::handlers::home::health_check,
        crate::api::handlers::services::create_service,
        crate::api::handlers::services::get_service,
        crate::api::handlers::services::list_services,
        crate::api::handlers::services::update_service,
        crate::api::handlers::services::delete_service,
        crate::api::handlers::requests::create_request,
        crate::api::handlers::requests::get_request,
        crate::api::handlers::requests::list_requests,
        crate::api::handlers::requests::update_request,
        crate::api::handlers::requests::delete_request,
        crate::api::handlers::requests::assign_cleaner,
        crate::api::handlers::requests::get_requests_by_client,
        crate::api::handlers::requests::get_requests_by_cleaner,
        crate::api::handlers::reviews::create_review,
        crate::api::handlers::reviews::get_review,
        crate::api::handlers::reviews::update_review,
        crate::api::handlers::reviews::delete_review,
        crate::api::handlers::reviews::get_reviews_by_client,
        crate::api::handlers::reviews::get_reviews_by_cleaner,
    ),
    modifiers(&SecurityAddon),
    components(
        schemas(
            crate::models::Service,
            crate::models::Request,
            crate::models::Review,
        )
    ),
    tags(
        (name = HOME_TAG, description = "Service banner and health endpoints"),
        (name = SERVICE_TAG, description = "Cleaning service catalog endpoints"),
        (name = REQUEST_TAG, description = "Booking request endpoints"),
        (name = REVIEW_TAG, description = "Review endpoints"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer Token Authentication"))
                        .build(),
                ),
            )
        }
    }
}

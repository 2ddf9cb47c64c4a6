//! OpenAPI description of the HTTP surface
//!
//! Generated from the `#[utoipa::path]` annotations on the handlers. The
//! `ApiKeyAuth` scheme is documented for clients but not enforced.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::error::ErrorBody;
use crate::types::{Character, HealthStatus, ProbeStatus};

/// Where the generated document is served
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

/// Where the Swagger UI is served
pub const SWAGGER_UI_PATH: &str = "/api-docs";

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "ApiKeyAuth",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Anvil Recipes Web Service API",
        description = "A RESTful web service for managing D&D character data",
        license(
            name = "Apache 2.0",
            url = "http://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::liveness,
        crate::api::handlers::readiness,
        crate::api::handlers::list_characters,
        crate::api::handlers::create_character,
        crate::api::handlers::get_character,
        crate::api::handlers::update_character,
        crate::api::handlers::delete_character,
    ),
    components(schemas(Character, HealthStatus, ProbeStatus, ErrorBody)),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "characters", description = "D&D character management")
    )
)]
pub struct ApiDoc;

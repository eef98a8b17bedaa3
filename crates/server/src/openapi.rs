use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Stored product as returned by every read and write.
#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Exact decimal rendered as a string, e.g. `"10.0000"`.
    #[schema(example = "10.0000")]
    pub price: String,
}

/// Create/update payload. An empty `description` is stored as absent.
#[derive(ToSchema)]
pub struct ProductBodyDoc {
    pub name: String,
    pub description: Option<String>,
    #[schema(minimum = 0)]
    pub price: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::products::update,
        crate::routes::products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            ProductBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products")
    )
)]
pub struct ApiDoc;

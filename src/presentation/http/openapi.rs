// src/presentation/http/openapi.rs
use axum::Router;
use std::{
    collections::HashSet,
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::blog::home,
        crate::presentation::http::controllers::blog::listing,
        crate::presentation::http::controllers::posts::show,
        crate::presentation::http::controllers::categories::show,
        crate::presentation::http::controllers::system::health
    ),
    components(
        schemas(
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::system::HealthResponse,
            crate::application::dto::HomePage,
            crate::application::dto::BlogListingPage,
            crate::application::dto::CategoryPage,
            crate::application::dto::PostPage,
            crate::application::dto::PostSummaryDto,
            crate::application::dto::PostDetailDto,
            crate::application::dto::AuthorDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategoryWithCountDto,
            crate::application::dto::CommentDto,
            crate::application::dto::PaginationLink
        )
    ),
    tags(
        (name = "Blog", description = "Public blog pages"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Blogtastic API",
        description = "Read-only JSON payloads for a small blog",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs`, Redoc at `/redoc`. `SwaggerUi` also owns
/// `GET /openapi.json`, so no separate route is registered for it.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (default
/// [`DEFAULT_SNAPSHOT_PATH`]) and returns the path written.
pub fn write_openapi_snapshot() -> std::io::Result<PathBuf> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    write_openapi_to(path)?;
    Ok(path.to_path_buf())
}

pub fn write_openapi_to(path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

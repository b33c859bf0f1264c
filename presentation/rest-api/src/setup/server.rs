use poem::middleware::{NormalizePath, Tracing, TrailingSlash};
use poem::{Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Routes for every API plus the OpenAPI document and Swagger UI.
    ///
    /// OpenAPI paths are registered without a trailing slash, so request
    /// paths are trimmed before routing. `/api/products/` and
    /// `/api/products` reach the same operation.
    pub fn build_app(container: DependencyContainer, server_url: String) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (container.health_api, container.extraction_api),
            "Product Extractor API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(NormalizePath::new(TrailingSlash::Trim))
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::build_app(container, format!("http://{}", addr))
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

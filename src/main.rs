use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

mod api;
mod ledger;

use api::handlers::{self, NodeIdentity};
use ledger::Ledger;

/// Reads the listen port from the PORT environment variable
fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8080)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::full_chain,
        api::handlers::pending_transactions,
        api::handlers::new_transaction,
        api::handlers::mine,
        api::handlers::validate_chain
    ),
    components(
        schemas(
            ledger::Block,
            ledger::Transaction,
            api::handlers::ChainResponse,
            api::handlers::TransactionRequest,
            api::handlers::TransactionResponse
        )
    ),
    tags(
        (name = "ledger", description = "Ledger API endpoints")
    ),
    info(
        title = "Hashledger API",
        version = "0.1.0",
        description = "An append-only hash-linked ledger with a REST API",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
struct ApiDoc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // The ledger and the node identity live for the whole process
    let ledger = web::Data::new(Ledger::new());
    let node = web::Data::new(NodeIdentity(Uuid::new_v4().simple().to_string()));

    let port = server_port();
    info!("Node identity: {}", node.0);
    info!("Starting HTTP server at http://0.0.0.0:{}", port);

    // Start HTTP server
    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Configure OpenAPI documentation
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(ledger.clone())
            .app_data(node.clone())
            .app_data(handlers::json_config())
            // API routes
            .configure(api::configure_routes)
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

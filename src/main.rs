use anyhow::Context;
use axum::http::StatusCode;
use axum::{middleware::from_fn, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use banca_api::config;
use banca_api::database::manager::DatabaseManager;
use banca_api::handlers::{clientes, consultas, cuentas, monedas, movimientos, tipos_cuenta};
use banca_api::middleware::auth::verify_token;
use banca_api::webhook;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    if webhook::notifier().is_active() {
        tracing::info!("webhook fan-out enabled");
    }

    let app = app();

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    println!("Banca API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}

fn app() -> Router {
    Router::new()
        // Service endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // Open mount
        .nest("/api", api_routes())
        // Same surface behind the bearer gate
        .nest(
            "/api/protected-route",
            api_routes().layer(from_fn(verify_token)),
        )
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router {
    Router::new()
        .merge(cliente_routes())
        .merge(cuenta_routes())
        .merge(movimiento_routes())
}

fn cliente_routes() -> Router {
    use axum::routing::{post, put};

    Router::new()
        .route("/clientes", get(clientes::list))
        .route("/cliente", post(clientes::create))
        .route(
            "/cliente/:id",
            put(clientes::update).delete(clientes::delete),
        )
        .route(
            "/cliente-informacion/:no_cuenta",
            get(consultas::cliente_informacion),
        )
}

fn cuenta_routes() -> Router {
    Router::new()
        .route(
            "/tipos-de-cuenta",
            get(tipos_cuenta::list).post(tipos_cuenta::create),
        )
        .route(
            "/tipos-de-cuenta/:id",
            axum::routing::put(tipos_cuenta::update).delete(tipos_cuenta::delete),
        )
        .route("/cuentas", get(cuentas::list).post(cuentas::create))
        .route(
            "/cuentas/:no_cuenta",
            get(cuentas::detail)
                .put(cuentas::update)
                .delete(cuentas::delete),
        )
        .route("/monedas", get(monedas::list).post(monedas::create))
        .route(
            "/monedas/:id",
            get(monedas::detail)
                .put(monedas::update)
                .delete(monedas::delete),
        )
}

fn movimiento_routes() -> Router {
    Router::new()
        .route(
            "/movimientos",
            get(movimientos::list).post(movimientos::create),
        )
        // GET addresses by account number, PUT/DELETE by movement id
        .route(
            "/movimientos/:id",
            get(movimientos::by_cuenta)
                .put(movimientos::update)
                .delete(movimientos::delete),
        )
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Banca API",
        "version": version,
        "description": "REST gateway over the banking schema (clientes, cuentas, movimientos)",
        "endpoints": {
            "api": "/api/* (open)",
            "protected": "/api/protected-route/* (requires Authorization: Bearer <token>)",
            "health": "/health",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}

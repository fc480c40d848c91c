use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::handlers;

/// Configuración de todas las rutas HTTP de la aplicación
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        // ========================================
        // API CONSUMIDA POR LA UI
        // ========================================
        .route(
            "/api/factura/:numero_factura",
            get(handlers::factura::obtener),
        )
        .route(
            "/api/factura/descargar",
            post(handlers::factura::descargar),
        )
        // ========================================
        // API DEL GENERADOR
        // ========================================
        .route(
            "/facturas/v1/:numero_factura",
            get(handlers::factura::generar),
        )
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "timestamp": chrono::Utc::now() }))
}

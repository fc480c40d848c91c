use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::json;

use crate::domain::factura::service;
use crate::shared::config;

/// GET /api/factura/:numero_factura
///
/// Ruta consumida por la vista previa. Un número en blanco no identifica
/// ninguna factura.
pub async fn obtener(Path(numero_factura): Path<String>) -> Response {
    let numero = numero_factura.trim();
    if numero.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Factura no encontrada" })),
        )
            .into_response();
    }
    match service::generar_factura(numero, &config::get().generador) {
        Ok(factura) => Json(factura).into_response(),
        Err(e) => {
            tracing::error!("Error generando factura {}: {}", numero, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// GET /facturas/v1/:numero_factura
pub async fn generar(Path(numero_factura): Path<String>) -> Response {
    match service::generar_factura(&numero_factura, &config::get().generador) {
        Ok(factura) => Json(factura).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Error generando factura: {}", e) })),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct DescargarParams {
    pub numero_factura: String,
}

/// POST /api/factura/descargar
///
/// Destino del envío nativo del formulario: responde la factura como adjunto
/// para que el navegador dispare la descarga.
pub async fn descargar(Form(params): Form<DescargarParams>) -> Response {
    let numero = params.numero_factura.trim();
    if numero.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "Por favor, ingresa un número de factura" })),
        )
            .into_response();
    }
    match service::generar_factura(numero, &config::get().generador) {
        Ok(factura) => (
            [(
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"factura_{}.json\"", nombre_archivo(numero)),
            )],
            Json(factura),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

// El número lo escribe el usuario; en el nombre de archivo solo pueden viajar
// caracteres válidos para un header
fn nombre_archivo(numero: &str) -> String {
    numero
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use contracts::domain::factura::Factura;

    async fn cuerpo_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn obtener_devuelve_la_factura_pedida() {
        let response = obtener(Path("A-001".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = cuerpo_json(response).await;
        let factura: Factura = serde_json::from_value(json).unwrap();
        assert_eq!(factura.numero_factura, "A-001");
        assert!(!factura.items.is_empty());
    }

    #[tokio::test]
    async fn obtener_con_numero_en_blanco_es_404() {
        let response = obtener(Path("   ".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = cuerpo_json(response).await;
        assert_eq!(json["error"], "Factura no encontrada");
    }

    #[tokio::test]
    async fn generar_responde_el_esquema_completo() {
        let response = generar(Path("F003-001".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = cuerpo_json(response).await;
        for campo in [
            "numero_factura",
            "fecha_emision",
            "cliente_nombre",
            "cliente_email",
            "cliente_telefono",
            "cliente_direccion",
            "cliente_ciudad",
            "items",
            "subtotal",
            "iva",
            "total",
        ] {
            assert!(json.get(campo).is_some(), "falta el campo {}", campo);
        }
    }

    #[tokio::test]
    async fn descargar_marca_la_respuesta_como_adjunto() {
        let response = descargar(Form(DescargarParams {
            numero_factura: "A-001".to_string(),
        }))
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("attachment"));
        assert!(disposition.contains("factura_A-001.json"));
    }

    #[tokio::test]
    async fn descargar_sin_numero_es_422() {
        let response = descargar(Form(DescargarParams {
            numero_factura: "  ".to_string(),
        }))
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn nombre_archivo_reemplaza_caracteres_raros() {
        assert_eq!(nombre_archivo("A-001"), "A-001");
        assert_eq!(nombre_archivo("año 2024/01"), "a_o_2024_01");
        assert_eq!(nombre_archivo("F001.v2_x"), "F001.v2_x");
    }
}

use contracts::domain::factura::Factura;
use gloo_net::http::Request;

/// Trae la factura del endpoint que consume la vista previa.
///
/// GET /api/factura/{numero}
pub async fn fetch_factura(numero: &str) -> Result<Factura, String> {
    let url = format!("/api/factura/{}", urlencoding::encode(numero));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    // Cualquier estado no exitoso se reporta como factura inexistente,
    // sin intentar leer el cuerpo
    if !response.ok() {
        return Err("Factura no encontrada".to_string());
    }

    let factura: Factura = response
        .json()
        .await
        .map_err(|e| format!("Respuesta inválida: {}", e))?;

    Ok(factura)
}

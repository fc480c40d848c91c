use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// IVA colombiano aplicado a todas las facturas.
pub const IVA_RATE: f64 = 0.19;

// ============================================================================
// Línea de factura
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFactura {
    pub descripcion: String,
    pub cantidad: u32,
    pub precio_unitario: f64,
    pub subtotal: f64,
}

// ============================================================================
// Factura
// ============================================================================
/// Wire schema shared by backend and frontend. Field names are the JSON
/// contract; the client renders `subtotal`/`iva`/`total` verbatim and never
/// recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factura {
    pub numero_factura: String,
    pub fecha_emision: NaiveDate,
    pub cliente_nombre: String,
    pub cliente_email: String,
    pub cliente_telefono: String,
    pub cliente_direccion: String,
    pub cliente_ciudad: String,
    pub items: Vec<ItemFactura>,
    pub subtotal: f64,
    pub iva: f64,
    pub total: f64,
}

impl Factura {
    pub fn validate(&self) -> Result<(), String> {
        if self.numero_factura.trim().is_empty() {
            return Err("El número de factura no puede estar vacío".into());
        }
        if self.items.is_empty() {
            return Err("La factura debe tener al menos un item".into());
        }
        Ok(())
    }
}

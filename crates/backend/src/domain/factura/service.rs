use chrono::Duration;
use contracts::domain::factura::{Factura, ItemFactura, IVA_RATE};
use rand::Rng;
use thiserror::Error;

use super::datos;
use crate::shared::config::GeneradorConfig;

#[derive(Debug, Error)]
pub enum GeneracionError {
    #[error("rango de generación inválido: {0}")]
    RangoInvalido(String),
}

// Todos los montos viajan con dos decimales
fn redondear2(valor: f64) -> f64 {
    (valor * 100.0).round() / 100.0
}

/// Genera una factura sintética para el número pedido.
///
/// El número se devuelve tal cual llegó; los totales se calculan aquí y el
/// cliente los muestra sin recalcular nada.
pub fn generar_factura(
    numero_factura: &str,
    cfg: &GeneradorConfig,
) -> Result<Factura, GeneracionError> {
    if cfg.min_items == 0 || cfg.min_items > cfg.max_items {
        return Err(GeneracionError::RangoInvalido(format!(
            "items {}..{}",
            cfg.min_items, cfg.max_items
        )));
    }
    if cfg.max_cantidad == 0 {
        return Err(GeneracionError::RangoInvalido("cantidad máxima 0".into()));
    }
    if cfg.precio_minimo <= 0.0 || cfg.precio_minimo > cfg.precio_maximo {
        return Err(GeneracionError::RangoInvalido(format!(
            "precios {}..{}",
            cfg.precio_minimo, cfg.precio_maximo
        )));
    }

    let mut rng = rand::thread_rng();

    let num_items = rng.gen_range(cfg.min_items..=cfg.max_items);
    let mut items = Vec::with_capacity(num_items as usize);
    let mut subtotal = 0.0;

    for _ in 0..num_items {
        let cantidad = rng.gen_range(1..=cfg.max_cantidad);
        let precio_unitario = redondear2(rng.gen_range(cfg.precio_minimo..=cfg.precio_maximo));
        let item_subtotal = redondear2(cantidad as f64 * precio_unitario);
        subtotal += item_subtotal;

        items.push(ItemFactura {
            descripcion: datos::descripcion_de_item(&mut rng),
            cantidad,
            precio_unitario,
            subtotal: item_subtotal,
        });
    }

    let subtotal = redondear2(subtotal);
    let iva = redondear2(subtotal * IVA_RATE);
    let total = redondear2(subtotal + iva);

    let fecha_emision =
        chrono::Utc::now().date_naive() - Duration::days(rng.gen_range(0..=30));

    let (cliente_nombre, cliente_email) = datos::cliente(&mut rng);

    Ok(Factura {
        numero_factura: numero_factura.to_string(),
        fecha_emision,
        cliente_nombre,
        cliente_email,
        cliente_telefono: datos::telefono(&mut rng),
        cliente_direccion: datos::direccion(&mut rng),
        cliente_ciudad: datos::ciudad(&mut rng).to_string(),
        items,
        subtotal,
        iva,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respeta_los_invariantes_de_montos() {
        let cfg = GeneradorConfig::default();
        for _ in 0..50 {
            let factura = generar_factura("F001-001", &cfg).unwrap();

            assert_eq!(factura.numero_factura, "F001-001");
            assert!(!factura.items.is_empty());
            assert!(factura.items.len() <= cfg.max_items as usize);

            let mut suma = 0.0;
            for item in &factura.items {
                assert!((1..=cfg.max_cantidad).contains(&item.cantidad));
                assert!(item.precio_unitario >= cfg.precio_minimo);
                assert!(item.precio_unitario <= cfg.precio_maximo);
                let esperado = item.cantidad as f64 * item.precio_unitario;
                assert!((item.subtotal - esperado).abs() < 0.01);
                suma += item.subtotal;
            }

            assert!((factura.subtotal - suma).abs() < 0.01);
            assert!((factura.iva - factura.subtotal * IVA_RATE).abs() < 0.01);
            assert!((factura.total - (factura.subtotal + factura.iva)).abs() < 0.01);
        }
    }

    #[test]
    fn la_fecha_cae_en_los_ultimos_30_dias() {
        let cfg = GeneradorConfig::default();
        let hoy = chrono::Utc::now().date_naive();
        for _ in 0..20 {
            let factura = generar_factura("F002-001", &cfg).unwrap();
            assert!(factura.fecha_emision <= hoy);
            assert!(hoy - factura.fecha_emision <= Duration::days(30));
        }
    }

    #[test]
    fn los_datos_del_cliente_no_quedan_vacios() {
        let cfg = GeneradorConfig::default();
        let factura = generar_factura("ABC-123", &cfg).unwrap();
        assert!(!factura.cliente_nombre.is_empty());
        assert!(!factura.cliente_email.is_empty());
        assert!(!factura.cliente_telefono.is_empty());
        assert!(!factura.cliente_direccion.is_empty());
        assert!(!factura.cliente_ciudad.is_empty());
        assert!(factura.validate().is_ok());
    }

    #[test]
    fn el_numero_se_devuelve_tal_cual() {
        let cfg = GeneradorConfig::default();
        for numero in ["F001-001", "F999-999", "ABC-123", "test-factura"] {
            let factura = generar_factura(numero, &cfg).unwrap();
            assert_eq!(factura.numero_factura, numero);
        }
    }

    #[test]
    fn rechaza_rangos_invalidos() {
        let mut cfg = GeneradorConfig::default();
        cfg.min_items = 0;
        assert!(matches!(
            generar_factura("X", &cfg),
            Err(GeneracionError::RangoInvalido(_))
        ));

        let mut cfg = GeneradorConfig::default();
        cfg.precio_minimo = 600.0;
        assert!(matches!(
            generar_factura("X", &cfg),
            Err(GeneracionError::RangoInvalido(_))
        ));

        let mut cfg = GeneradorConfig::default();
        cfg.max_cantidad = 0;
        assert!(matches!(
            generar_factura("X", &cfg),
            Err(GeneracionError::RangoInvalido(_))
        ));
    }
}

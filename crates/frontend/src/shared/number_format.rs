//! Formato de cifras en pesos colombianos

/// Agrupación es-CO: miles con punto, decimales con coma.
///
/// La parte decimal solo aparece cuando el valor no es entero, con hasta dos
/// cifras y sin ceros de relleno al final:
///
/// ```
/// use frontend::shared::number_format::agrupar_es_co;
/// assert_eq!(agrupar_es_co(1234567.89), "1.234.567,89");
/// assert_eq!(agrupar_es_co(1234.5), "1.234,5");
/// assert_eq!(agrupar_es_co(250000.0), "250.000");
/// ```
pub fn agrupar_es_co(valor: f64) -> String {
    let redondeado = (valor * 100.0).round() / 100.0;
    let negativo = redondeado < 0.0;
    let absoluto = redondeado.abs();

    let mut entero = absoluto.trunc() as u64;
    let mut centavos = ((absoluto - absoluto.trunc()) * 100.0).round() as u64;
    if centavos == 100 {
        entero += 1;
        centavos = 0;
    }

    // Triadas de la parte entera, de derecha a izquierda
    let cifras = entero.to_string();
    let mut invertido = String::new();
    for (i, c) in cifras.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            invertido.push('.');
        }
        invertido.push(c);
    }
    let mut resultado: String = invertido.chars().rev().collect();

    if centavos > 0 {
        if centavos % 10 == 0 {
            resultado.push_str(&format!(",{}", centavos / 10));
        } else {
            resultado.push_str(&format!(",{:02}", centavos));
        }
    }

    if negativo {
        format!("-{}", resultado)
    } else {
        resultado
    }
}

/// Cifra lista para la vista previa: "$250.000 COP"
pub fn formato_cop(valor: f64) -> String {
    format!("${} COP", agrupar_es_co(valor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agrupa_la_parte_entera_con_puntos() {
        assert_eq!(agrupar_es_co(0.0), "0");
        assert_eq!(agrupar_es_co(200.0), "200");
        assert_eq!(agrupar_es_co(1234.0), "1.234");
        assert_eq!(agrupar_es_co(1234567.0), "1.234.567");
    }

    #[test]
    fn los_decimales_van_con_coma_y_sin_ceros_finales() {
        assert_eq!(agrupar_es_co(1234.5), "1.234,5");
        assert_eq!(agrupar_es_co(1234.56), "1.234,56");
        assert_eq!(agrupar_es_co(1234.05), "1.234,05");
        assert_eq!(agrupar_es_co(1234567.89), "1.234.567,89");
    }

    #[test]
    fn los_negativos_conservan_el_signo_adelante() {
        assert_eq!(agrupar_es_co(-1234.56), "-1.234,56");
        assert_eq!(agrupar_es_co(-200.0), "-200");
    }

    #[test]
    fn redondea_a_dos_cifras_antes_de_formatear() {
        assert_eq!(agrupar_es_co(99.999), "100");
        assert_eq!(agrupar_es_co(10.005), "10,01");
    }

    #[test]
    fn formato_cop_envuelve_con_simbolo_y_codigo() {
        assert_eq!(formato_cop(250000.0), "$250.000 COP");
        assert_eq!(formato_cop(1234.56), "$1.234,56 COP");
        assert_eq!(formato_cop(0.0), "$0 COP");
    }
}

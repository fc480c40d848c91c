use chrono::NaiveDate;

/// Fecha al estilo local: "15/03/2024"
pub fn formato_fecha(fecha: &NaiveDate) -> String {
    fecha.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatea_dia_mes_anio() {
        let fecha = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(formato_fecha(&fecha), "15/03/2024");

        let fecha = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        assert_eq!(formato_fecha(&fecha), "01/12/2023");
    }
}

use contracts::domain::factura::Factura;
use leptos::prelude::*;

use super::model;

/// Estado de la sección de vista previa
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
    /// Todavía no se pidió ninguna vista previa; la sección permanece oculta
    Oculto,
    Cargando,
    Listo(Factura),
    Error(String),
}

impl PreviewState {
    fn desde_resultado(resultado: Result<Factura, String>) -> PreviewState {
        match resultado {
            Ok(factura) => PreviewState::Listo(factura),
            Err(mensaje) => PreviewState::Error(mensaje),
        }
    }
}

/// Número de factura normalizado: recortado y no vacío.
///
/// La misma comprobación la hacen el botón de vista previa y el guardia del
/// formulario, cada uno ante su propio gesto del usuario.
pub fn numero_valido(entrada: &str) -> Option<String> {
    let numero = entrada.trim();
    if numero.is_empty() {
        None
    } else {
        Some(numero.to_string())
    }
}

/// ViewModel de la vista previa de facturas
///
/// Uses simplified MVVM pattern:
/// - UI state in signals, read directly by the view
/// - Commands for operations that touch the network
#[derive(Clone, Copy)]
pub struct FacturaPreviewViewModel {
    pub estado: RwSignal<PreviewState>,
    // Turno monótono por petición: solo la última lanzada escribe el estado
    secuencia: RwSignal<u64>,
}

impl FacturaPreviewViewModel {
    pub fn new() -> Self {
        Self {
            estado: RwSignal::new(PreviewState::Oculto),
            secuencia: RwSignal::new(0),
        }
    }

    /// Reserva el turno para una nueva petición y pasa la UI a "cargando"
    fn reservar_turno(&self) -> u64 {
        let turno = self.secuencia.get_untracked() + 1;
        self.secuencia.set(turno);
        self.estado.set(PreviewState::Cargando);
        turno
    }

    /// Aplica el resultado solo si ninguna petición posterior tomó el turno
    fn aplicar_si_vigente(&self, turno: u64, resultado: Result<Factura, String>) {
        if self.secuencia.get_untracked() == turno {
            self.estado.set(PreviewState::desde_resultado(resultado));
        } else {
            log::debug!("Descartando respuesta vieja de la vista previa (turno {})", turno);
        }
    }

    /// Pide la factura y actualiza la vista previa.
    ///
    /// Política ante clics repetidos: gana la última petición. No se cancela
    /// la petición anterior; su respuesta simplemente se descarta al llegar.
    pub fn preview_command(&self, numero: String) {
        let vm = *self;
        let turno = vm.reservar_turno();
        wasm_bindgen_futures::spawn_local(async move {
            let resultado = model::fetch_factura(&numero).await;
            vm.aplicar_si_vigente(turno, resultado);
        });
    }
}

impl Default for FacturaPreviewViewModel {
    fn default() -> Self {
        Self::new()
    }
}

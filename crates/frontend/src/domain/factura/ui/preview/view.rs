use contracts::domain::factura::Factura;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use super::view_model::{numero_valido, FacturaPreviewViewModel, PreviewState};
use crate::shared::date_utils::formato_fecha;
use crate::shared::number_format::formato_cop;

/// Página del generador: formulario de número de factura + vista previa
#[component]
pub fn FacturaPage() -> impl IntoView {
    let vm = FacturaPreviewViewModel::new();
    let numero_ref = NodeRef::<html::Input>::new();

    // Aviso bloqueante y foco de vuelta al campo; lo comparten ambos guardias
    let avisar_numero_vacio = move || {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Por favor, ingresa un número de factura");
        }
        if let Some(input) = numero_ref.get() {
            let _ = input.focus();
        }
    };

    let on_preview = move |_| {
        let escrito = numero_ref
            .get()
            .map(|input| input.value())
            .unwrap_or_default();
        match numero_valido(&escrito) {
            Some(numero) => vm.preview_command(numero),
            None => avisar_numero_vacio(),
        }
    };

    // Último guardia antes del envío nativo del formulario
    let on_submit = move |ev: SubmitEvent| {
        let escrito = numero_ref
            .get()
            .map(|input| input.value())
            .unwrap_or_default();
        if numero_valido(&escrito).is_none() {
            ev.prevent_default();
            avisar_numero_vacio();
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Generador de Facturas"</h1>
            </header>

            <form
                class="factura-form"
                action="/api/factura/descargar"
                method="post"
                on:submit=on_submit
            >
                <div class="form__group">
                    <label class="form__label" for="numero_factura">"Número de factura"</label>
                    <input
                        class="form__input"
                        type="text"
                        id="numero_factura"
                        name="numero_factura"
                        placeholder="Ej: F001-001"
                        node_ref=numero_ref
                    />
                </div>

                <div class="factura-form__acciones">
                    <button type="button" class="button button--secondary" on:click=on_preview>
                        "Vista Previa"
                    </button>
                    <button type="submit" class="button button--primary">
                        "Descargar JSON"
                    </button>
                </div>
            </form>

            <FacturaPreviewSection estado=vm.estado />
        </div>
    }
}

#[component]
fn FacturaPreviewSection(estado: RwSignal<PreviewState>) -> impl IntoView {
    view! {
        <Show when=move || estado.get() != PreviewState::Oculto>
            <div class="preview-section">
                <h3 class="preview-section__title">"Vista Previa de la Factura"</h3>
                {move || match estado.get() {
                    PreviewState::Oculto => view! { <></> }.into_any(),
                    PreviewState::Cargando => view! {
                        <div class="preview-section__loading">
                            <div class="spinner"></div>
                            <span>"Cargando vista previa..."</span>
                        </div>
                    }.into_any(),
                    PreviewState::Error(mensaje) => view! {
                        <div class="preview-section__error">
                            <span class="preview-section__error-icon">"⚠"</span>
                            <p>{format!("Error: {}", mensaje)}</p>
                        </div>
                    }.into_any(),
                    PreviewState::Listo(factura) => view! {
                        <FacturaPreview factura=factura />
                    }.into_any(),
                }}
            </div>
        </Show>
    }
}

/// Render de solo lectura de una factura; función pura de los datos recibidos
#[component]
fn FacturaPreview(factura: Factura) -> impl IntoView {
    let filas = factura
        .items
        .iter()
        .map(|item| {
            view! {
                <tr class="tabla-items__fila">
                    <td>{item.descripcion.clone()}</td>
                    <td class="text-center">{item.cantidad}</td>
                    <td class="text-right">{formato_cop(item.precio_unitario)}</td>
                    <td class="text-right font-medium">{formato_cop(item.subtotal)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="factura-preview">
            <div class="factura-preview__header">
                <h4>{format!("FACTURA {}", factura.numero_factura)}</h4>
                <p>{format!("Fecha: {}", formato_fecha(&factura.fecha_emision))}</p>
            </div>

            <div class="factura-preview__cliente">
                <h5>"Cliente"</h5>
                <p><strong>"Nombre: "</strong>{factura.cliente_nombre.clone()}</p>
                <p><strong>"Email: "</strong>{factura.cliente_email.clone()}</p>
                <p><strong>"Teléfono: "</strong>{factura.cliente_telefono.clone()}</p>
                <p><strong>"Dirección: "</strong>{factura.cliente_direccion.clone()}</p>
                <p><strong>"Ciudad: "</strong>{factura.cliente_ciudad.clone()}</p>
            </div>

            <div class="factura-preview__detalle">
                <h5>"Detalle de la Factura"</h5>
                <table class="tabla-items">
                    <thead>
                        <tr>
                            <th class="text-left">"Descripción"</th>
                            <th class="text-center">"Cant."</th>
                            <th class="text-right">"Precio Unit."</th>
                            <th class="text-right">"Subtotal"</th>
                        </tr>
                    </thead>
                    <tbody>{filas}</tbody>
                </table>
            </div>

            <div class="factura-preview__totales">
                <div class="factura-preview__total-linea">
                    <span>"Subtotal:"</span>
                    <span>{formato_cop(factura.subtotal)}</span>
                </div>
                <div class="factura-preview__total-linea">
                    <span>"IVA (19%):"</span>
                    <span>{formato_cop(factura.iva)}</span>
                </div>
                <div class="factura-preview__total-linea factura-preview__total-linea--total">
                    <span>"TOTAL:"</span>
                    <span>{formato_cop(factura.total)}</span>
                </div>
            </div>
        </div>
    }
}

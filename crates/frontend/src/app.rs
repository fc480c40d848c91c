use crate::domain::factura::ui::FacturaPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <FacturaPage />
    }
}

//! Vista previa de facturas
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos components (pure UI)

mod model;
mod view;
mod view_model;

pub use view::FacturaPage;
pub use view_model::{numero_valido, FacturaPreviewViewModel, PreviewState};

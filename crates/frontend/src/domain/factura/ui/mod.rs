pub mod preview;

pub use preview::FacturaPage;

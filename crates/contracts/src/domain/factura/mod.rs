pub mod aggregate;

pub use aggregate::{Factura, ItemFactura, IVA_RATE};

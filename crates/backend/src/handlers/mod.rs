pub mod factura;

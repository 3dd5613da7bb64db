pub mod cliente;
pub mod cuenta;
pub mod moneda;
pub mod movimiento;
pub mod tipo_cuenta;

pub use cliente::{Cliente, ClienteInformacion};
pub use cuenta::{CuentaDetalle, CuentaResumen};
pub use moneda::Moneda;
pub use movimiento::{Movimiento, MovimientoCuenta};
pub use tipo_cuenta::TipoCuenta;

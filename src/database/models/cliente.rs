use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A bank client as returned by the client endpoints.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cliente {
    pub id: i32,
    pub nombre: String,
    pub correo: String,
    pub telefono: String,
}

/// One row of the client-information projection: account, owner and
/// movement data joined by account number. Field names follow the select
/// aliases of the originating statement.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClienteInformacion {
    pub no_cuenta: String,
    pub fecha_apertura: NaiveDate,
    pub tipo_cuenta: String,
    pub nombre: String,
    pub correo: String,
    pub telefono: String,
    pub movimiento: String,
    pub fecha_movimiento: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub ingresos: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub egresos: Decimal,
}

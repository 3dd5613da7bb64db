use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A ledger entry (income/expense) tied to one account.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Movimiento {
    pub id: i32,
    pub descripcion: String,
    pub fecha: NaiveDate,
    #[serde(rename = "idCuenta")]
    pub id_cuenta: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub ingresos: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub egresos: Decimal,
}

/// Movements of one account, looked up through the account number.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MovimientoCuenta {
    pub descripcion: String,
    pub fecha: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub ingresos: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub egresos: Decimal,
}

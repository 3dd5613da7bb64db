use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Account summary joined with its type, currency and owner. The listing
/// wire keys are camelCase; downstream consumers depend on that spelling.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CuentaResumen {
    pub id: i32,
    #[serde(rename = "noCuenta")]
    pub no_cuenta: String,
    #[serde(rename = "tipoCuenta")]
    pub tipo_cuenta: String,
    #[serde(rename = "fechaApertura")]
    pub fecha_apertura: NaiveDate,
    pub moneda: String,
    pub cliente: String,
}

/// Single-account lookup by account number.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CuentaDetalle {
    pub no_cuenta: String,
    pub tipo_cuenta: String,
    pub fecha_apertura: NaiveDate,
}

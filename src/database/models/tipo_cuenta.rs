use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TipoCuenta {
    pub id: i32,
    pub descripcion: String,
}

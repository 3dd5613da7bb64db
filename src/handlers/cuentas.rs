use axum::extract::Path;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::database::models::{CuentaDetalle, CuentaResumen};
use crate::error::ApiError;
use crate::resource::{MutationKind, CUENTA};

use super::utils::{event_payload, run_list, run_write};

#[derive(Debug, Serialize, Deserialize)]
pub struct NuevaCuenta {
    pub id: i32,
    pub no_cuenta: String,
    pub id_tipo: i32,
    pub fecha_apertura: NaiveDate,
    pub id_moneda: i32,
    pub id_cliente: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatosCuenta {
    pub id_tipo: i32,
    pub fecha_apertura: NaiveDate,
    pub id_moneda: i32,
    pub id_cliente: i32,
}

/// GET /cuentas - listado con tipo, moneda y titular resueltos
pub async fn list() -> Result<Json<Vec<CuentaResumen>>, ApiError> {
    run_list(
        "Error al obtener cuentas",
        sqlx::query_as(
            "SELECT c.id, c.no_cuenta, tc.descripcion AS tipo_cuenta, c.fecha_apertura, \
                    m.descripcion AS moneda, cl.nombre AS cliente \
             FROM cuenta c \
             JOIN tipos_de_cuenta tc ON c.id_tipo = tc.id \
             JOIN moneda m ON c.id_moneda = m.id \
             JOIN cliente cl ON c.id_cliente = cl.id",
        ),
    )
    .await
}

/// GET /cuentas/:no_cuenta - consulta por numero de cuenta
pub async fn detail(Path(no_cuenta): Path<String>) -> Result<Json<Vec<CuentaDetalle>>, ApiError> {
    run_list(
        "Error al obtener cuentas",
        sqlx::query_as(
            "SELECT c.no_cuenta, tc.descripcion AS tipo_cuenta, c.fecha_apertura \
             FROM cuenta c \
             JOIN tipos_de_cuenta tc ON c.id_tipo = tc.id \
             WHERE c.no_cuenta = $1",
        )
        .bind(no_cuenta),
    )
    .await
}

/// POST /cuentas - alta con id y numero de cuenta provistos por el llamador
pub async fn create(Json(payload): Json<NuevaCuenta>) -> Result<Json<Value>, ApiError> {
    let data = event_payload(CUENTA.failure_message(MutationKind::Insertar), &payload)?;

    let statement = sqlx::query(
        "INSERT INTO cuenta (id, no_cuenta, id_tipo, fecha_apertura, id_moneda, id_cliente) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(payload.id)
    .bind(&payload.no_cuenta)
    .bind(payload.id_tipo)
    .bind(payload.fecha_apertura)
    .bind(payload.id_moneda)
    .bind(payload.id_cliente);

    run_write(&CUENTA, MutationKind::Insertar, statement, data).await
}

/// PUT /cuentas/:no_cuenta - reemplazo completo, direccionado por numero de cuenta
pub async fn update(
    Path(no_cuenta): Path<String>,
    Json(payload): Json<DatosCuenta>,
) -> Result<Json<Value>, ApiError> {
    let mut data = event_payload(CUENTA.failure_message(MutationKind::Actualizar), &payload)?;
    data["no_cuenta"] = json!(&no_cuenta);

    let statement = sqlx::query(
        "UPDATE cuenta SET id_tipo = $1, fecha_apertura = $2, id_moneda = $3, id_cliente = $4 \
         WHERE no_cuenta = $5",
    )
    .bind(payload.id_tipo)
    .bind(payload.fecha_apertura)
    .bind(payload.id_moneda)
    .bind(payload.id_cliente)
    .bind(&no_cuenta);

    run_write(&CUENTA, MutationKind::Actualizar, statement, data).await
}

/// DELETE /cuentas/:no_cuenta
pub async fn delete(Path(no_cuenta): Path<String>) -> Result<Json<Value>, ApiError> {
    let data = json!({ "no_cuenta": &no_cuenta });
    let statement = sqlx::query("DELETE FROM cuenta WHERE no_cuenta = $1").bind(&no_cuenta);

    run_write(&CUENTA, MutationKind::Borrar, statement, data).await
}

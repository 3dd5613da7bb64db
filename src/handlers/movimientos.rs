use axum::extract::Path;
use axum::Json;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::database::models::{Movimiento, MovimientoCuenta};
use crate::error::ApiError;
use crate::resource::{MutationKind, MOVIMIENTO};

use super::utils::{event_payload, run_list, run_write};

#[derive(Debug, Serialize, Deserialize)]
pub struct NuevoMovimiento {
    pub id: i32,
    pub descripcion: String,
    pub fecha: NaiveDate,
    pub id_cuenta: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub ingresos: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub egresos: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatosMovimiento {
    pub descripcion: String,
    pub fecha: NaiveDate,
    pub id_cuenta: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub ingresos: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub egresos: Decimal,
}

/// GET /movimientos - todos los movimientos
pub async fn list() -> Result<Json<Vec<Movimiento>>, ApiError> {
    run_list(
        "Error al obtener movimientos",
        sqlx::query_as(
            "SELECT id, descripcion, fecha, id_cuenta, ingresos, egresos FROM movimientos",
        ),
    )
    .await
}

/// GET /movimientos/:no_cuenta - movimientos de una cuenta, por numero de
/// cuenta. La clave del path cambia de significado en PUT/DELETE, que
/// direccionan por id de movimiento.
pub async fn by_cuenta(
    Path(no_cuenta): Path<String>,
) -> Result<Json<Vec<MovimientoCuenta>>, ApiError> {
    run_list(
        "Error al obtener movimientos",
        sqlx::query_as(
            "SELECT m.descripcion, m.fecha, m.ingresos, m.egresos \
             FROM movimientos m \
             JOIN cuenta c ON m.id_cuenta = c.id \
             WHERE c.no_cuenta = $1",
        )
        .bind(no_cuenta),
    )
    .await
}

/// POST /movimientos
pub async fn create(Json(payload): Json<NuevoMovimiento>) -> Result<Json<Value>, ApiError> {
    let data = event_payload(MOVIMIENTO.failure_message(MutationKind::Insertar), &payload)?;

    let statement = sqlx::query(
        "INSERT INTO movimientos (id, descripcion, fecha, id_cuenta, ingresos, egresos) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(payload.id)
    .bind(&payload.descripcion)
    .bind(payload.fecha)
    .bind(payload.id_cuenta)
    .bind(payload.ingresos)
    .bind(payload.egresos);

    run_write(&MOVIMIENTO, MutationKind::Insertar, statement, data).await
}

/// PUT /movimientos/:id
pub async fn update(
    Path(id): Path<i32>,
    Json(payload): Json<DatosMovimiento>,
) -> Result<Json<Value>, ApiError> {
    let mut data = event_payload(MOVIMIENTO.failure_message(MutationKind::Actualizar), &payload)?;
    data["id"] = json!(id);

    let statement = sqlx::query(
        "UPDATE movimientos SET descripcion = $1, fecha = $2, id_cuenta = $3, \
         ingresos = $4, egresos = $5 WHERE id = $6",
    )
    .bind(&payload.descripcion)
    .bind(payload.fecha)
    .bind(payload.id_cuenta)
    .bind(payload.ingresos)
    .bind(payload.egresos)
    .bind(id);

    run_write(&MOVIMIENTO, MutationKind::Actualizar, statement, data).await
}

/// DELETE /movimientos/:id
pub async fn delete(Path(id): Path<i32>) -> Result<Json<Value>, ApiError> {
    let statement = sqlx::query("DELETE FROM movimientos WHERE id = $1").bind(id);

    run_write(&MOVIMIENTO, MutationKind::Borrar, statement, json!({ "id": id })).await
}

use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::database::models::TipoCuenta;
use crate::error::ApiError;
use crate::resource::{MutationKind, TIPO_CUENTA};

use super::utils::{event_payload, run_list, run_write};

#[derive(Debug, Serialize, Deserialize)]
pub struct NuevoTipoCuenta {
    pub id: i32,
    pub descripcion: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatosTipoCuenta {
    pub descripcion: String,
}

/// GET /tipos-de-cuenta - catalogo de tipos de cuenta
pub async fn list() -> Result<Json<Vec<TipoCuenta>>, ApiError> {
    run_list(
        "Error al obtener tipos de cuenta",
        sqlx::query_as("SELECT id, descripcion FROM tipos_de_cuenta"),
    )
    .await
}

/// POST /tipos-de-cuenta
pub async fn create(Json(payload): Json<NuevoTipoCuenta>) -> Result<Json<Value>, ApiError> {
    let data = event_payload(TIPO_CUENTA.failure_message(MutationKind::Insertar), &payload)?;

    let statement = sqlx::query("INSERT INTO tipos_de_cuenta (id, descripcion) VALUES ($1, $2)")
        .bind(payload.id)
        .bind(&payload.descripcion);

    run_write(&TIPO_CUENTA, MutationKind::Insertar, statement, data).await
}

/// PUT /tipos-de-cuenta/:id
pub async fn update(
    Path(id): Path<i32>,
    Json(payload): Json<DatosTipoCuenta>,
) -> Result<Json<Value>, ApiError> {
    let mut data = event_payload(TIPO_CUENTA.failure_message(MutationKind::Actualizar), &payload)?;
    data["id"] = json!(id);

    let statement = sqlx::query("UPDATE tipos_de_cuenta SET descripcion = $1 WHERE id = $2")
        .bind(&payload.descripcion)
        .bind(id);

    run_write(&TIPO_CUENTA, MutationKind::Actualizar, statement, data).await
}

/// DELETE /tipos-de-cuenta/:id
pub async fn delete(Path(id): Path<i32>) -> Result<Json<Value>, ApiError> {
    let statement = sqlx::query("DELETE FROM tipos_de_cuenta WHERE id = $1").bind(id);

    run_write(&TIPO_CUENTA, MutationKind::Borrar, statement, json!({ "id": id })).await
}

use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::database::models::Moneda;
use crate::error::ApiError;
use crate::resource::{MutationKind, MONEDA};

use super::utils::{event_payload, run_list, run_write};

#[derive(Debug, Serialize, Deserialize)]
pub struct NuevaMoneda {
    pub id: i32,
    pub descripcion: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatosMoneda {
    pub descripcion: String,
}

/// GET /monedas - catalogo de monedas
pub async fn list() -> Result<Json<Vec<Moneda>>, ApiError> {
    run_list(
        "Error al obtener monedas",
        sqlx::query_as("SELECT id, descripcion FROM moneda"),
    )
    .await
}

/// GET /monedas/:id - consulta puntual (0 o 1 filas)
pub async fn detail(Path(id): Path<i32>) -> Result<Json<Vec<Moneda>>, ApiError> {
    run_list(
        "Error al obtener monedas",
        sqlx::query_as("SELECT id, descripcion FROM moneda WHERE id = $1").bind(id),
    )
    .await
}

/// POST /monedas
pub async fn create(Json(payload): Json<NuevaMoneda>) -> Result<Json<Value>, ApiError> {
    let data = event_payload(MONEDA.failure_message(MutationKind::Insertar), &payload)?;

    let statement = sqlx::query("INSERT INTO moneda (id, descripcion) VALUES ($1, $2)")
        .bind(payload.id)
        .bind(&payload.descripcion);

    run_write(&MONEDA, MutationKind::Insertar, statement, data).await
}

/// PUT /monedas/:id - 404 si no existe
pub async fn update(
    Path(id): Path<i32>,
    Json(payload): Json<DatosMoneda>,
) -> Result<Json<Value>, ApiError> {
    let mut data = event_payload(MONEDA.failure_message(MutationKind::Actualizar), &payload)?;
    data["id"] = json!(id);

    let statement = sqlx::query("UPDATE moneda SET descripcion = $1 WHERE id = $2")
        .bind(&payload.descripcion)
        .bind(id);

    run_write(&MONEDA, MutationKind::Actualizar, statement, data).await
}

/// DELETE /monedas/:id - 404 si no existe
pub async fn delete(Path(id): Path<i32>) -> Result<Json<Value>, ApiError> {
    let statement = sqlx::query("DELETE FROM moneda WHERE id = $1").bind(id);

    run_write(&MONEDA, MutationKind::Borrar, statement, json!({ "id": id })).await
}

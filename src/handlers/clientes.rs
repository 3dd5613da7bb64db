use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::database::models::Cliente;
use crate::error::ApiError;
use crate::resource::{MutationKind, CLIENTE};

use super::utils::{event_payload, run_list, run_write};

#[derive(Debug, Serialize, Deserialize)]
pub struct NuevoCliente {
    pub id: i32,
    pub nombre: String,
    pub correo: String,
    pub telefono: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatosCliente {
    pub nombre: String,
    pub correo: String,
    pub telefono: String,
}

/// GET /clientes - lista completa de clientes
pub async fn list() -> Result<Json<Vec<Cliente>>, ApiError> {
    run_list(
        "Error en la base de datos",
        sqlx::query_as("SELECT id, nombre, correo, telefono FROM cliente"),
    )
    .await
}

/// POST /cliente - alta de cliente con id provisto por el llamador
pub async fn create(Json(payload): Json<NuevoCliente>) -> Result<Json<Value>, ApiError> {
    let data = event_payload(CLIENTE.failure_message(MutationKind::Insertar), &payload)?;

    let statement =
        sqlx::query("INSERT INTO cliente (id, nombre, correo, telefono) VALUES ($1, $2, $3, $4)")
            .bind(payload.id)
            .bind(&payload.nombre)
            .bind(&payload.correo)
            .bind(&payload.telefono);

    run_write(&CLIENTE, MutationKind::Insertar, statement, data).await
}

/// PUT /cliente/:id - reemplazo completo de campos; 404 si no existe
pub async fn update(
    Path(id): Path<i32>,
    Json(payload): Json<DatosCliente>,
) -> Result<Json<Value>, ApiError> {
    let mut data = event_payload(CLIENTE.failure_message(MutationKind::Actualizar), &payload)?;
    data["id"] = json!(id);

    let statement =
        sqlx::query("UPDATE cliente SET nombre = $1, correo = $2, telefono = $3 WHERE id = $4")
            .bind(&payload.nombre)
            .bind(&payload.correo)
            .bind(&payload.telefono)
            .bind(id);

    run_write(&CLIENTE, MutationKind::Actualizar, statement, data).await
}

/// DELETE /cliente/:id - baja por id; 404 si no existe
pub async fn delete(Path(id): Path<i32>) -> Result<Json<Value>, ApiError> {
    let statement = sqlx::query("DELETE FROM cliente WHERE id = $1").bind(id);

    run_write(&CLIENTE, MutationKind::Borrar, statement, json!({ "id": id })).await
}

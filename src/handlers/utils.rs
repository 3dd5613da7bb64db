use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{FromRow, Postgres};

use crate::database::manager::{DatabaseManager, DatabaseError};
use crate::error::ApiError;
use crate::resource::{MutationKind, ResourceMeta};
use crate::webhook::{notifier, MutationEvent};

/// Run one read statement through the shared request lifecycle: check out a
/// connection, execute, map rows by column name, respond with a bare JSON
/// array. Empty result sets are a 200 with `[]`, never a 404. The
/// connection goes back to the pool on every exit path when it drops.
pub(crate) async fn run_list<T>(
    failure: &'static str,
    statement: QueryAs<'_, Postgres, T, PgArguments>,
) -> Result<Json<Vec<T>>, ApiError>
where
    T: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin,
{
    let mut conn = DatabaseManager::acquire()
        .await
        .map_err(|err| data_error(err, failure))?;

    let rows = statement
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| data_error(err.into(), failure))?;

    Ok(Json(rows))
}

/// Run one mutating statement through the shared request lifecycle:
/// check out a connection, execute (committed when `execute` returns),
/// apply the resource's zero-rows policy, fan the event out to any
/// configured webhook targets, respond `{message, result}`. A delivery
/// failure after the commit surfaces as the write's error even though the
/// row is already durable. The connection is held for the whole request
/// and released when it drops.
pub(crate) async fn run_write(
    resource: &'static ResourceMeta,
    kind: MutationKind,
    statement: Query<'_, Postgres, PgArguments>,
    data: Value,
) -> Result<Json<Value>, ApiError> {
    let failure = resource.failure_message(kind);

    let mut conn = DatabaseManager::acquire()
        .await
        .map_err(|err| data_error(err, failure))?;

    let result = statement
        .execute(&mut *conn)
        .await
        .map_err(|err| data_error(err.into(), failure))?;

    let rows_affected = result.rows_affected();
    if rows_affected == 0 && resource.strict_affected && kind != MutationKind::Insertar {
        return Err(ApiError::not_found(resource.messages.missing));
    }

    let notifier = notifier();
    if notifier.is_active() {
        notifier
            .publish(&MutationEvent::new(kind, resource.table, data))
            .await
            .map_err(|err| {
                tracing::error!(
                    table = resource.table,
                    "webhook delivery failed after commit: {}",
                    err
                );
                ApiError::internal_server_error(failure)
            })?;
    }

    Ok(Json(json!({
        "message": resource.success_message(kind),
        "result": { "rowsAffected": rows_affected },
    })))
}

/// Encode the mutation payload for the event envelope.
pub(crate) fn event_payload<T: Serialize>(
    failure: &'static str,
    payload: &T,
) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|err| {
        tracing::error!("failed to encode event payload: {}", err);
        ApiError::internal_server_error(failure)
    })
}

fn data_error(err: DatabaseError, message: &'static str) -> ApiError {
    // Log the real cause but keep the client body generic
    tracing::error!("database error: {}", err);
    ApiError::internal_server_error(message)
}

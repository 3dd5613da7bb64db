use axum::extract::Path;
use axum::Json;

use crate::database::models::ClienteInformacion;
use crate::error::ApiError;

use super::utils::run_list;

/// GET /cliente-informacion/:no_cuenta - titular, cuenta y movimientos
/// unidos por numero de cuenta. Proyeccion de solo lectura; ninguna
/// invariante depende de su atomicidad.
pub async fn cliente_informacion(
    Path(no_cuenta): Path<String>,
) -> Result<Json<Vec<ClienteInformacion>>, ApiError> {
    run_list(
        "Error al obtener información del cliente",
        sqlx::query_as(
            "SELECT c.no_cuenta, c.fecha_apertura, tc.descripcion AS tipo_cuenta, \
                    cl.nombre, cl.correo, cl.telefono, \
                    m.descripcion AS movimiento, m.fecha AS fecha_movimiento, \
                    m.ingresos, m.egresos \
             FROM cuenta c \
             JOIN tipos_de_cuenta tc ON c.id_tipo = tc.id \
             JOIN cliente cl ON c.id_cliente = cl.id \
             JOIN movimientos m ON m.id_cuenta = c.id \
             WHERE c.no_cuenta = $1",
        )
        .bind(no_cuenta),
    )
    .await
}

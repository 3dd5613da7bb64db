use serde::{Deserialize, Serialize};

/// Kind of a committed mutation, tagged the way downstream consumers expect
/// it on the audit wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MutationKind {
    Insertar,
    Actualizar,
    Borrar,
}

/// Per-resource response messages. The exact strings are part of the
/// documented surface.
#[derive(Debug)]
pub struct ResourceMessages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub missing: &'static str,
}

/// Metadata driving the shared route-handler lifecycle. One static per
/// resource; every route goes through the same helpers instead of its own
/// copy of the handler code.
#[derive(Debug)]
pub struct ResourceMeta {
    /// Table name, also the `table` field of outgoing webhook events.
    pub table: &'static str,
    pub key_column: &'static str,
    /// When set, PUT and DELETE answer 404 if no row was affected. The
    /// other resources answer 200 with `rowsAffected: 0`.
    pub strict_affected: bool,
    pub messages: ResourceMessages,
}

impl ResourceMeta {
    pub fn success_message(&self, kind: MutationKind) -> &'static str {
        match kind {
            MutationKind::Insertar => self.messages.created,
            MutationKind::Actualizar => self.messages.updated,
            MutationKind::Borrar => self.messages.deleted,
        }
    }

    pub fn failure_message(&self, kind: MutationKind) -> &'static str {
        match kind {
            MutationKind::Insertar => self.messages.create_failed,
            MutationKind::Actualizar => self.messages.update_failed,
            MutationKind::Borrar => self.messages.delete_failed,
        }
    }
}

pub static CLIENTE: ResourceMeta = ResourceMeta {
    table: "cliente",
    key_column: "id",
    strict_affected: true,
    messages: ResourceMessages {
        created: "Cliente agregado correctamente",
        updated: "Cliente modificado correctamente",
        deleted: "Cliente eliminado correctamente",
        create_failed: "Error al agregar el cliente",
        update_failed: "Error al modificar el cliente",
        delete_failed: "Error al eliminar el cliente",
        missing: "Cliente no encontrado",
    },
};

pub static TIPO_CUENTA: ResourceMeta = ResourceMeta {
    table: "tipos_de_cuenta",
    key_column: "id",
    strict_affected: false,
    messages: ResourceMessages {
        created: "Tipo de cuenta agregado correctamente",
        updated: "Tipo de cuenta modificado correctamente",
        deleted: "Tipo de cuenta eliminado correctamente",
        create_failed: "Error al agregar el tipo de cuenta",
        update_failed: "Error al modificar el tipo de cuenta",
        delete_failed: "Error al eliminar el tipo de cuenta",
        missing: "Tipo de cuenta no encontrado",
    },
};

pub static MONEDA: ResourceMeta = ResourceMeta {
    table: "moneda",
    key_column: "id",
    strict_affected: true,
    messages: ResourceMessages {
        created: "Moneda agregada correctamente",
        updated: "Moneda modificada correctamente",
        deleted: "Moneda eliminada correctamente",
        create_failed: "Error al agregar la moneda",
        update_failed: "Error al modificar la moneda",
        delete_failed: "Error al eliminar la moneda",
        missing: "Moneda no encontrada",
    },
};

pub static CUENTA: ResourceMeta = ResourceMeta {
    table: "cuenta",
    key_column: "no_cuenta",
    strict_affected: false,
    messages: ResourceMessages {
        created: "Cuenta creada correctamente",
        updated: "Cuenta actualizada correctamente",
        deleted: "Cuenta eliminada correctamente",
        create_failed: "Error al crear cuenta",
        update_failed: "Error al actualizar cuenta",
        delete_failed: "Error al eliminar cuenta",
        missing: "Cuenta no encontrada",
    },
};

pub static MOVIMIENTO: ResourceMeta = ResourceMeta {
    table: "movimientos",
    key_column: "id",
    strict_affected: false,
    messages: ResourceMessages {
        created: "Movimiento creado correctamente",
        updated: "Movimiento actualizado correctamente",
        deleted: "Movimiento eliminado correctamente",
        create_failed: "Error al crear movimiento",
        update_failed: "Error al actualizar movimiento",
        delete_failed: "Error al eliminar movimiento",
        missing: "Movimiento no encontrado",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_kind_serializes_uppercase() {
        assert_eq!(
            serde_json::to_value(MutationKind::Insertar).unwrap(),
            serde_json::json!("INSERTAR")
        );
        assert_eq!(
            serde_json::to_value(MutationKind::Actualizar).unwrap(),
            serde_json::json!("ACTUALIZAR")
        );
        assert_eq!(
            serde_json::to_value(MutationKind::Borrar).unwrap(),
            serde_json::json!("BORRAR")
        );
    }

    #[test]
    fn messages_follow_mutation_kind() {
        assert_eq!(
            CLIENTE.success_message(MutationKind::Insertar),
            "Cliente agregado correctamente"
        );
        assert_eq!(
            CUENTA.failure_message(MutationKind::Actualizar),
            "Error al actualizar cuenta"
        );
    }

    #[test]
    fn strict_affected_covers_the_404_variants() {
        assert!(CLIENTE.strict_affected);
        assert!(MONEDA.strict_affected);
        assert!(!CUENTA.strict_affected);
        assert!(!TIPO_CUENTA.strict_affected);
        assert!(!MOVIMIENTO.strict_affected);
    }
}

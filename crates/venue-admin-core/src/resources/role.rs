//! Role Entity
//!
//! Named permission groups. The client stamps the audit dates on save.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ACTIVE_STATES;
use crate::dates;
use crate::error::{require, ValidationError};
use crate::form::{Field, FieldKind};
use crate::panel::EditMode;
use crate::resource::{Entity, Resource};
use crate::table::{Cell, Column};
use crate::wire::nullable;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    #[serde(rename = "rol", deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "descripcion", deserialize_with = "nullable")]
    pub description: String,
    #[serde(rename = "estado", deserialize_with = "nullable")]
    pub status: String,
    #[serde(rename = "fechaCreacion", deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(rename = "fechaActualizacion", deserialize_with = "nullable")]
    pub updated_at: String,
    /// Free-text list of members, as the backend stores it
    #[serde(rename = "usuarios", deserialize_with = "nullable")]
    pub users: String,
}

impl Entity for Role {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Resource for Role {
    const PATH: &'static str = "roles";
    const NOUN: &'static str = "Rol";
    const PLURAL: &'static str = "roles";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "rol", "Rol")?;
        require(&self.status, "estado", "Estado")
    }

    fn before_save(&mut self, mode: EditMode, now: DateTime<Utc>) {
        let stamp = dates::iso(now);
        if mode == EditMode::New {
            self.created_at = stamp.clone();
        }
        self.updated_at = stamp;
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Id", |r: &Role| Cell::text(r.id)),
            Column::new("Rol", |r: &Role| Cell::text(&r.name)),
            Column::new("Descripción", |r: &Role| Cell::text(&r.description)),
            Column::new("Estado", |r: &Role| Cell::status(&r.status, ACTIVE_STATES[0])),
            Column::new("Fecha de Creación", |r: &Role| Cell::Text(dates::display(&r.created_at))),
            Column::new("Fecha de Actualización", |r: &Role| {
                Cell::Text(dates::display(&r.updated_at))
            }),
            Column::new("Usuarios", |r: &Role| Cell::text(&r.users)),
        ]
    }

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field {
                id: "rol",
                label: "Rol",
                kind: FieldKind::Text,
                read: |r: &Role| r.name.clone(),
                write: |r: &mut Role, v: &str| r.name = v.to_string(),
            },
            Field {
                id: "descripcion",
                label: "Descripción",
                kind: FieldKind::Text,
                read: |r: &Role| r.description.clone(),
                write: |r: &mut Role, v: &str| r.description = v.to_string(),
            },
            Field {
                id: "estado",
                label: "Estado",
                kind: FieldKind::Choice(ACTIVE_STATES),
                read: |r: &Role| r.status.clone(),
                write: |r: &mut Role, v: &str| r.status = v.to_string(),
            },
        ]
    }
}

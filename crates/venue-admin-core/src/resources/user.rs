//! User Entity
//!
//! Staff and customer accounts known to the backend.

use serde::{Deserialize, Serialize};

use crate::error::{require, ValidationError};
use crate::form::{Field, FieldKind, LookupOption};
use crate::resource::{Entity, Resource};
use crate::table::{Cell, Column};
use crate::wire::nullable;

/// Table placeholder for the password column
const MASK: &str = "••••••";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    #[serde(rename = "nombre", deserialize_with = "nullable")]
    pub first_name: String,
    #[serde(rename = "apellido", deserialize_with = "nullable")]
    pub last_name: String,
    #[serde(rename = "telefono", deserialize_with = "nullable")]
    pub phone: String,
    #[serde(rename = "correo", deserialize_with = "nullable")]
    pub email: String,
    #[serde(rename = "ciudad", deserialize_with = "nullable")]
    pub city: String,
    #[serde(rename = "direccion", deserialize_with = "nullable")]
    pub address: String,
    #[serde(rename = "cedula", deserialize_with = "nullable")]
    pub national_id: String,
    #[serde(deserialize_with = "nullable")]
    pub password: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl Entity for User {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Resource for User {
    const PATH: &'static str = "usuario";
    const NOUN: &'static str = "Usuario";
    const PLURAL: &'static str = "usuarios";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.first_name, "nombre", "Nombre")?;
        require(&self.last_name, "apellido", "Apellido")?;
        require(&self.email, "correo", "Correo")
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Id", |u: &User| Cell::text(u.id)),
            Column::new("Nombre", |u: &User| Cell::text(&u.first_name)),
            Column::new("Apellido", |u: &User| Cell::text(&u.last_name)),
            Column::new("Teléfono", |u: &User| Cell::text(&u.phone)),
            Column::new("Correo", |u: &User| Cell::text(&u.email)),
            Column::new("Ciudad", |u: &User| Cell::text(&u.city)),
            Column::new("Dirección", |u: &User| Cell::text(&u.address)),
            Column::new("Cédula", |u: &User| Cell::text(&u.national_id)),
            Column::new("Contraseña", |u: &User| {
                Cell::text(if u.password.is_empty() { "" } else { MASK })
            }),
        ]
    }

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field {
                id: "nombre",
                label: "Nombre",
                kind: FieldKind::Text,
                read: |u: &User| u.first_name.clone(),
                write: |u: &mut User, v: &str| u.first_name = v.to_string(),
            },
            Field {
                id: "apellido",
                label: "Apellido",
                kind: FieldKind::Text,
                read: |u: &User| u.last_name.clone(),
                write: |u: &mut User, v: &str| u.last_name = v.to_string(),
            },
            Field {
                id: "telefono",
                label: "Teléfono",
                kind: FieldKind::Text,
                read: |u: &User| u.phone.clone(),
                write: |u: &mut User, v: &str| u.phone = v.to_string(),
            },
            Field {
                id: "correo",
                label: "Correo",
                kind: FieldKind::Email,
                read: |u: &User| u.email.clone(),
                write: |u: &mut User, v: &str| u.email = v.to_string(),
            },
            Field {
                id: "ciudad",
                label: "Ciudad",
                kind: FieldKind::Text,
                read: |u: &User| u.city.clone(),
                write: |u: &mut User, v: &str| u.city = v.to_string(),
            },
            Field {
                id: "direccion",
                label: "Dirección",
                kind: FieldKind::Text,
                read: |u: &User| u.address.clone(),
                write: |u: &mut User, v: &str| u.address = v.to_string(),
            },
            Field {
                id: "cedula",
                label: "Cédula",
                kind: FieldKind::Text,
                read: |u: &User| u.national_id.clone(),
                write: |u: &mut User, v: &str| u.national_id = v.to_string(),
            },
            Field {
                id: "password",
                label: "Contraseña",
                kind: FieldKind::Password,
                read: |u: &User| u.password.clone(),
                write: |u: &mut User, v: &str| u.password = v.to_string(),
            },
        ]
    }
}

impl From<&User> for LookupOption {
    fn from(u: &User) -> Self {
        LookupOption {
            value: u.id.to_string(),
            label: format!("{} (#{})", u.full_name(), u.id),
        }
    }
}

//! Product Entity
//!
//! Sellable items. Updates go out as PATCH.

use serde::{Deserialize, Serialize};

use crate::error::{require, ValidationError};
use crate::form::{parse_decimal, parse_int, show_number, Field, FieldKind};
use crate::resource::{Entity, Resource, UpdateVerb};
use crate::table::{amount, Cell, Column};
use crate::wire::nullable;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    #[serde(rename = "nombre", deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "descripcion", deserialize_with = "nullable")]
    pub description: String,
    #[serde(rename = "precio", deserialize_with = "nullable")]
    pub price: f64,
    #[serde(rename = "cantidad", deserialize_with = "nullable")]
    pub quantity: i32,
    /// Stock movements; opaque to this client and echoed back untouched
    #[serde(rename = "inventario", deserialize_with = "nullable")]
    pub inventory: Vec<serde_json::Value>,
}

impl Entity for Product {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Resource for Product {
    const PATH: &'static str = "productos";
    const NOUN: &'static str = "Producto";
    const PLURAL: &'static str = "productos";
    const UPDATE_VERB: UpdateVerb = UpdateVerb::Patch;

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "nombre", "Nombre")?;
        if self.price < 0.0 {
            return Err(ValidationError::positive("precio", "Precio"));
        }
        if self.quantity < 0 {
            return Err(ValidationError::positive("cantidad", "Cantidad"));
        }
        Ok(())
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", |p: &Product| Cell::text(p.id)),
            Column::new("Nombre", |p: &Product| Cell::text(&p.name)),
            Column::new("Descripción", |p: &Product| Cell::text(&p.description)),
            Column::new("Precio", |p: &Product| Cell::Text(amount(p.price))),
            Column::new("Cantidad", |p: &Product| Cell::text(p.quantity)),
        ]
    }

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field {
                id: "nombre",
                label: "Nombre",
                kind: FieldKind::Text,
                read: |p: &Product| p.name.clone(),
                write: |p: &mut Product, v: &str| p.name = v.to_string(),
            },
            Field {
                id: "descripcion",
                label: "Descripción",
                kind: FieldKind::Text,
                read: |p: &Product| p.description.clone(),
                write: |p: &mut Product, v: &str| p.description = v.to_string(),
            },
            Field {
                id: "precio",
                label: "Precio",
                kind: FieldKind::Decimal,
                read: |p: &Product| show_number(p.price),
                write: |p: &mut Product, v: &str| p.price = parse_decimal(v),
            },
            Field {
                id: "cantidad",
                label: "Cantidad",
                kind: FieldKind::Integer,
                read: |p: &Product| show_number(p.quantity),
                write: |p: &mut Product, v: &str| p.quantity = parse_int(v),
            },
        ]
    }
}

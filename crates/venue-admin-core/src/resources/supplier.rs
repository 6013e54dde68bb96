//! Supplier Entity

use serde::{Deserialize, Serialize};

use super::ACTIVE_STATES;
use crate::dates;
use crate::error::{require, ValidationError};
use crate::form::{parse_decimal, show_number, Field, FieldKind};
use crate::resource::{Entity, Resource};
use crate::table::{amount, Cell, Column};
use crate::wire::nullable;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Supplier {
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    #[serde(rename = "nombre", deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "telefono", deserialize_with = "nullable")]
    pub phone: String,
    /// What the supplier delivers
    #[serde(rename = "producto", deserialize_with = "nullable")]
    pub product: String,
    #[serde(rename = "estado", deserialize_with = "nullable")]
    pub status: String,
    #[serde(rename = "precioCompra", deserialize_with = "nullable")]
    pub purchase_price: f64,
    #[serde(rename = "fechaIngreso", deserialize_with = "nullable")]
    pub joined_at: String,
    #[serde(rename = "direccion", deserialize_with = "nullable")]
    pub address: String,
}

impl Entity for Supplier {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Resource for Supplier {
    const PATH: &'static str = "proveedores";
    const NOUN: &'static str = "Proveedor";
    const PLURAL: &'static str = "proveedores";
    const SEARCH_PATH: Option<&'static str> = Some("search");

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "nombre", "Nombre")?;
        require(&self.product, "producto", "Producto")?;
        require(&self.status, "estado", "Estado")
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", |s: &Supplier| Cell::text(s.id)),
            Column::new("Nombre", |s: &Supplier| Cell::text(&s.name)),
            Column::new("Teléfono", |s: &Supplier| Cell::text(&s.phone)),
            Column::new("Producto", |s: &Supplier| Cell::text(&s.product)),
            Column::new("Estado", |s: &Supplier| Cell::status(&s.status, ACTIVE_STATES[0])),
            Column::new("Precio Compra", |s: &Supplier| Cell::Text(amount(s.purchase_price))),
            Column::new("Fecha Ingreso", |s: &Supplier| Cell::Text(dates::display(&s.joined_at))),
            Column::new("Dirección", |s: &Supplier| Cell::text(&s.address)),
        ]
    }

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field {
                id: "nombre",
                label: "Nombre",
                kind: FieldKind::Text,
                read: |s: &Supplier| s.name.clone(),
                write: |s: &mut Supplier, v: &str| s.name = v.to_string(),
            },
            Field {
                id: "telefono",
                label: "Teléfono",
                kind: FieldKind::Text,
                read: |s: &Supplier| s.phone.clone(),
                write: |s: &mut Supplier, v: &str| s.phone = v.to_string(),
            },
            Field {
                id: "producto",
                label: "Producto",
                kind: FieldKind::Text,
                read: |s: &Supplier| s.product.clone(),
                write: |s: &mut Supplier, v: &str| s.product = v.to_string(),
            },
            Field {
                id: "estado",
                label: "Estado",
                kind: FieldKind::Choice(ACTIVE_STATES),
                read: |s: &Supplier| s.status.clone(),
                write: |s: &mut Supplier, v: &str| s.status = v.to_string(),
            },
            Field {
                id: "precioCompra",
                label: "Precio Compra",
                kind: FieldKind::Decimal,
                read: |s: &Supplier| show_number(s.purchase_price),
                write: |s: &mut Supplier, v: &str| s.purchase_price = parse_decimal(v),
            },
            Field {
                id: "fechaIngreso",
                label: "Fecha Ingreso",
                kind: FieldKind::Date,
                read: |s: &Supplier| dates::to_input(&s.joined_at),
                write: |s: &mut Supplier, v: &str| s.joined_at = dates::from_input(v),
            },
            Field {
                id: "direccion",
                label: "Dirección",
                kind: FieldKind::Text,
                read: |s: &Supplier| s.address.clone(),
                write: |s: &mut Supplier, v: &str| s.address = v.to_string(),
            },
        ]
    }
}

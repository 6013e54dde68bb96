//! Order Entity
//!
//! An order placed by a user at a table. The server embeds both referenced
//! records; on submit only their ids matter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Table, User};
use crate::dates;
use crate::error::{require, ValidationError};
use crate::form::{parse_decimal, parse_int, show_number, Field, FieldKind, Lookup};
use crate::resource::{Entity, Resource};
use crate::table::{amount, Cell, Column};
use crate::wire::nullable;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    #[serde(rename = "fechaPedido", deserialize_with = "nullable")]
    pub ordered_at: String,
    #[serde(rename = "estado", deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub total: f64,
    #[serde(rename = "usuario", deserialize_with = "nullable")]
    pub user: User,
    #[serde(rename = "mesa", deserialize_with = "nullable")]
    pub table: Table,
}

impl Entity for Order {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Resource for Order {
    const PATH: &'static str = "pedido";
    const NOUN: &'static str = "Pedido";
    const PLURAL: &'static str = "pedidos";

    fn new_draft(now: DateTime<Utc>) -> Self {
        Self {
            ordered_at: dates::iso(now),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if dates::parse(&self.ordered_at).is_none() {
            return Err(ValidationError::required("fechaPedido", "Fecha Pedido"));
        }
        require(&self.status, "estado", "Estado")?;
        if self.total < 0.0 {
            return Err(ValidationError::positive("total", "Total"));
        }
        if self.user.id == 0 {
            return Err(ValidationError::required("usuario", "Usuario"));
        }
        if self.table.id == 0 {
            return Err(ValidationError::required("mesa", "Mesa"));
        }
        Ok(())
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", |o: &Order| Cell::text(o.id)),
            Column::new("Fecha", |o: &Order| Cell::Text(dates::display(&o.ordered_at))),
            Column::new("Estado", |o: &Order| Cell::text(&o.status)),
            Column::new("Total", |o: &Order| Cell::Text(amount(o.total))),
            Column::new("Usuario", |o: &Order| Cell::Text(describe_user(&o.user))),
            Column::new("Mesa", |o: &Order| Cell::Text(describe_table(&o.table))),
        ]
    }

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field {
                id: "fechaPedido",
                label: "Fecha Pedido",
                kind: FieldKind::Date,
                read: |o: &Order| dates::to_input(&o.ordered_at),
                write: |o: &mut Order, v: &str| o.ordered_at = dates::from_input(v),
            },
            Field {
                id: "estado",
                label: "Estado",
                kind: FieldKind::Text,
                read: |o: &Order| o.status.clone(),
                write: |o: &mut Order, v: &str| o.status = v.to_string(),
            },
            Field {
                id: "total",
                label: "Total",
                kind: FieldKind::Decimal,
                read: |o: &Order| show_number(o.total),
                write: |o: &mut Order, v: &str| o.total = parse_decimal(v),
            },
            Field {
                id: "usuario",
                label: "Usuario",
                kind: FieldKind::Reference(Lookup::Users),
                read: |o: &Order| show_number(o.user.id),
                write: |o: &mut Order, v: &str| {
                    o.user = User {
                        id: parse_int(v),
                        ..User::default()
                    }
                },
            },
            Field {
                id: "mesa",
                label: "Mesa",
                kind: FieldKind::Reference(Lookup::Tables),
                read: |o: &Order| show_number(o.table.id),
                write: |o: &mut Order, v: &str| {
                    o.table = Table {
                        id: parse_int(v),
                        ..Table::default()
                    }
                },
            },
        ]
    }
}

fn describe_user(user: &User) -> String {
    let name = user.full_name();
    if name.is_empty() {
        format!("#{}", user.id)
    } else {
        name
    }
}

fn describe_table(table: &Table) -> String {
    if table.number == 0 {
        format!("#{}", table.id)
    } else {
        format!("Mesa {}", table.number)
    }
}

//! Transaction Entity
//!
//! Money in or out of the venue's books.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::{require, ValidationError};
use crate::form::{parse_decimal, show_number, Field, FieldKind};
use crate::resource::{Entity, Resource};
use crate::table::{amount, Cell, Column};
use crate::wire::nullable;

/// Direction of a transaction, serialized as the backend spells it.
/// Spellings the backend should not produce are matched case-insensitively,
/// anything else is kept verbatim so the row still shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    #[default]
    Ingreso,
    Egreso,
    Other(String),
}

impl TransactionKind {
    pub const ALL: &'static [&'static str] = &["Ingreso", "Egreso"];

    pub fn as_str(&self) -> &str {
        match self {
            TransactionKind::Ingreso => "Ingreso",
            TransactionKind::Egreso => "Egreso",
            TransactionKind::Other(raw) => raw,
        }
    }

    /// Only the two known directions; a dropdown never produces anything else
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "ingreso" => Some(TransactionKind::Ingreso),
            "egreso" => Some(TransactionKind::Egreso),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TransactionKind::Other(_))
    }
}

impl From<String> for TransactionKind {
    fn from(raw: String) -> Self {
        TransactionKind::from_label(&raw).unwrap_or(TransactionKind::Other(raw))
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    #[serde(rename = "descripcion", deserialize_with = "nullable")]
    pub description: String,
    #[serde(rename = "monto", deserialize_with = "nullable")]
    pub amount: f64,
    #[serde(rename = "tipo", deserialize_with = "nullable")]
    pub kind: TransactionKind,
    #[serde(rename = "fecha", deserialize_with = "nullable")]
    pub date: String,
    #[serde(rename = "categoria", deserialize_with = "nullable")]
    pub category: String,
}

impl Entity for Transaction {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Resource for Transaction {
    const PATH: &'static str = "transacciones";
    const NOUN: &'static str = "Transacción";
    const PLURAL: &'static str = "transacciones";
    const FEMININE: bool = true;

    /// New transactions default to an income dated now
    fn new_draft(now: DateTime<Utc>) -> Self {
        Self {
            date: dates::iso(now),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.description, "descripcion", "Descripción")?;
        if !self.kind.is_known() {
            return Err(ValidationError::required("tipo", "Tipo"));
        }
        if self.amount <= 0.0 {
            return Err(ValidationError::positive("monto", "Monto"));
        }
        if dates::parse(&self.date).is_none() {
            return Err(ValidationError::required("fecha", "Fecha"));
        }
        require(&self.category, "categoria", "Categoría")
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", |t: &Transaction| Cell::text(t.id)),
            Column::new("Descripción", |t: &Transaction| Cell::text(&t.description)),
            Column::new("Monto", |t: &Transaction| Cell::Text(amount(t.amount))),
            Column::new("Tipo", |t: &Transaction| Cell::status(t.kind.as_str(), "Ingreso")),
            Column::new("Fecha", |t: &Transaction| Cell::Text(dates::display(&t.date))),
            Column::new("Categoría", |t: &Transaction| Cell::text(&t.category)),
        ]
    }

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field {
                id: "descripcion",
                label: "Descripción",
                kind: FieldKind::Text,
                read: |t: &Transaction| t.description.clone(),
                write: |t: &mut Transaction, v: &str| t.description = v.to_string(),
            },
            Field {
                id: "monto",
                label: "Monto",
                kind: FieldKind::Decimal,
                read: |t: &Transaction| show_number(t.amount),
                write: |t: &mut Transaction, v: &str| t.amount = parse_decimal(v),
            },
            Field {
                id: "tipo",
                label: "Tipo",
                kind: FieldKind::Choice(TransactionKind::ALL),
                read: |t: &Transaction| t.kind.to_string(),
                write: |t: &mut Transaction, v: &str| {
                    if let Some(kind) = TransactionKind::from_label(v) {
                        t.kind = kind;
                    }
                },
            },
            Field {
                id: "fecha",
                label: "Fecha",
                kind: FieldKind::Date,
                read: |t: &Transaction| dates::to_input(&t.date),
                write: |t: &mut Transaction, v: &str| t.date = dates::from_input(v),
            },
            Field {
                id: "categoria",
                label: "Categoría",
                kind: FieldKind::Text,
                read: |t: &Transaction| t.category.clone(),
                write: |t: &mut Transaction, v: &str| t.category = v.to_string(),
            },
        ]
    }
}

//! Table Entity
//!
//! A physical table in the venue.

use serde::{Deserialize, Serialize};

use crate::error::{require, ValidationError};
use crate::form::{parse_int, show_number, Field, FieldKind, LookupOption};
use crate::resource::{Entity, Resource};
use crate::table::{Cell, Column};
use crate::wire::nullable;

pub const TABLE_STATES: &[&str] = &["Disponible", "No disponible"];

pub const TABLE_LOCATIONS: &[&str] = &["Terraza", "Patio", "Interior", "Balcón", "Salón privado"];

pub const TABLE_KINDS: &[&str] = &["Al aire libre", "Familiar", "Ejecutivo", "Para parejas", "VIP"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    #[serde(rename = "numero", deserialize_with = "nullable")]
    pub number: i32,
    #[serde(rename = "capacidad", deserialize_with = "nullable")]
    pub capacity: i32,
    #[serde(rename = "estado", deserialize_with = "nullable")]
    pub status: String,
    #[serde(rename = "ubicacion", deserialize_with = "nullable")]
    pub location: String,
    #[serde(rename = "tipo", deserialize_with = "nullable")]
    pub kind: String,
}

impl Table {
    pub fn is_available(&self) -> bool {
        self.status == TABLE_STATES[0]
    }
}

impl Entity for Table {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Resource for Table {
    const PATH: &'static str = "mesas";
    const NOUN: &'static str = "Mesa";
    const PLURAL: &'static str = "mesas";
    const FEMININE: bool = true;

    fn validate(&self) -> Result<(), ValidationError> {
        if self.number <= 0 {
            return Err(ValidationError::positive("numero", "Número"));
        }
        if self.capacity <= 0 {
            return Err(ValidationError::positive("capacidad", "Capacidad"));
        }
        require(&self.status, "estado", "Estado")
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", |t: &Table| Cell::text(t.id)),
            Column::new("Número", |t: &Table| Cell::text(t.number)),
            Column::new("Capacidad", |t: &Table| Cell::text(t.capacity)),
            Column::new("Estado", |t: &Table| Cell::status(&t.status, TABLE_STATES[0])),
            Column::new("Ubicación", |t: &Table| Cell::text(&t.location)),
            Column::new("Tipo", |t: &Table| Cell::text(&t.kind)),
        ]
    }

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field {
                id: "numero",
                label: "Número",
                kind: FieldKind::Integer,
                read: |t: &Table| show_number(t.number),
                write: |t: &mut Table, v: &str| t.number = parse_int(v),
            },
            Field {
                id: "capacidad",
                label: "Capacidad",
                kind: FieldKind::Integer,
                read: |t: &Table| show_number(t.capacity),
                write: |t: &mut Table, v: &str| t.capacity = parse_int(v),
            },
            Field {
                id: "estado",
                label: "Estado",
                kind: FieldKind::Choice(TABLE_STATES),
                read: |t: &Table| t.status.clone(),
                write: |t: &mut Table, v: &str| t.status = v.to_string(),
            },
            Field {
                id: "ubicacion",
                label: "Ubicación",
                kind: FieldKind::Choice(TABLE_LOCATIONS),
                read: |t: &Table| t.location.clone(),
                write: |t: &mut Table, v: &str| t.location = v.to_string(),
            },
            Field {
                id: "tipo",
                label: "Tipo",
                kind: FieldKind::Choice(TABLE_KINDS),
                read: |t: &Table| t.kind.clone(),
                write: |t: &mut Table, v: &str| t.kind = v.to_string(),
            },
        ]
    }
}

impl From<&Table> for LookupOption {
    fn from(t: &Table) -> Self {
        LookupOption {
            value: t.id.to_string(),
            label: format!("Mesa {} ({}, {} personas)", t.number, t.location, t.capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_names() {
        let table = Table {
            id: 0,
            number: 5,
            capacity: 4,
            status: "Disponible".into(),
            location: "Terraza".into(),
            kind: "Familiar".into(),
        };
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!({"id": 0, "numero": 5, "capacidad": 4, "estado": "Disponible", "ubicacion": "Terraza", "tipo": "Familiar"})
        );
        assert!(table.is_available());
    }

    #[test]
    fn test_missing_fields_default() {
        let table: Table = serde_json::from_value(json!({"id": 9, "numero": 2})).unwrap();
        assert_eq!(table.id, 9);
        assert_eq!(table.capacity, 0);
        assert!(table.status.is_empty());
    }

    #[test]
    fn test_validation_requires_positive_numbers() {
        let mut table = Table::default();
        assert_eq!(table.validate().unwrap_err().field, "numero");
        table.number = 1;
        assert_eq!(table.validate().unwrap_err().field, "capacidad");
        table.capacity = 2;
        assert_eq!(table.validate().unwrap_err().field, "estado");
        table.status = "No disponible".into();
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_status_cell_tone() {
        let mut table = Table::default();
        table.status = "No disponible".into();
        let cells: Vec<Cell> = Table::columns().iter().map(|c| (c.cell)(&table)).collect();
        assert_eq!(cells[3], Cell::status("No disponible", "Disponible"));
    }

    #[test]
    fn test_messages_are_feminine() {
        assert_eq!(Table::created_message(), "Mesa creada correctamente");
        assert_eq!(Table::deleted_message(), "Mesa eliminada correctamente");
        assert_eq!(Table::load_failed_message(), "Error al obtener mesas");
    }
}

//! Core Entity and Resource Traits
//!
//! `Entity` is the basic contract for every record: it has a stable id.
//! `Resource` adds everything a generic CRUD screen needs to know about one
//! record type: where it lives on the server, how to validate it, how to show it.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ValidationError;
use crate::form::Field;
use crate::panel::EditMode;
use crate::table::Column;

/// Core trait for all records
pub trait Entity: Sized + Clone + Send + Sync + 'static {
    /// The type of the record's unique identifier
    type Id: Copy + Eq + Display + Send + Sync + 'static;

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;
}

/// Verb used to send an edited record back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateVerb {
    Put,
    Patch,
}

/// A record type managed by one CRUD panel.
pub trait Resource: Entity + Default + PartialEq + Serialize + DeserializeOwned {
    /// Path segment under the API base URL (no slashes)
    const PATH: &'static str;
    /// Singular display noun, capitalised ("Mesa")
    const NOUN: &'static str;
    /// Plural display noun, lower case ("mesas")
    const PLURAL: &'static str;
    /// Grammatical gender of `NOUN`, for the Spanish messages
    const FEMININE: bool = false;
    const UPDATE_VERB: UpdateVerb = UpdateVerb::Put;
    /// Sub-path of a `?texto=` search endpoint, if the server has one
    const SEARCH_PATH: Option<&'static str> = None;

    /// Zero-valued draft for the "Add" action
    fn new_draft(_now: DateTime<Utc>) -> Self {
        Self::default()
    }

    /// Required-field check run before any request is made
    fn validate(&self) -> Result<(), ValidationError>;

    /// Last-moment adjustments to the draft right before it is submitted
    fn before_save(&mut self, _mode: EditMode, _now: DateTime<Utc>) {}

    fn columns() -> Vec<Column<Self>>;

    fn fields() -> Vec<Field<Self>>;

    fn created_message() -> String {
        format!("{} {} correctamente", Self::NOUN, participle("cread", Self::FEMININE))
    }

    fn updated_message() -> String {
        format!("{} {} correctamente", Self::NOUN, participle("actualizad", Self::FEMININE))
    }

    fn deleted_message() -> String {
        format!("{} {} correctamente", Self::NOUN, participle("eliminad", Self::FEMININE))
    }

    fn load_failed_message() -> String {
        format!("Error al obtener {}", Self::PLURAL)
    }

    fn save_failed_message(mode: EditMode) -> String {
        let verb = match mode {
            EditMode::New => "crear",
            EditMode::Edit => "actualizar",
        };
        format!("Error al {} {}", verb, Self::NOUN.to_lowercase())
    }

    fn delete_failed_message() -> String {
        format!("Error al eliminar {}", Self::NOUN.to_lowercase())
    }

    fn dialog_title(mode: EditMode) -> String {
        match (mode, Self::FEMININE) {
            (EditMode::New, true) => format!("Nueva {}", Self::NOUN),
            (EditMode::New, false) => format!("Nuevo {}", Self::NOUN),
            (EditMode::Edit, _) => format!("Editar {}", Self::NOUN),
        }
    }
}

fn participle(stem: &str, feminine: bool) -> String {
    format!("{}{}", stem, if feminine { 'a' } else { 'o' })
}

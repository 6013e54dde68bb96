//! Venue Admin Core
//!
//! Layered architecture:
//! - resources: Record types and their per-resource descriptors
//! - client: REST bindings over an abstract transport
//! - panel: CRUD screen state machine and the async flows driving it

pub mod config;
pub mod dates;
pub mod error;
pub mod form;
pub mod http;
pub mod notify;
pub mod resource;
pub mod resources;
pub mod table;

mod client;
mod flow;
mod panel;
mod wire;

#[cfg(test)]
mod testing;

pub use client::ResourceClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ValidationError};
pub use flow::{delete, load, save, search, PanelStore};
pub use notify::{Notification, Severity};
pub use panel::{DialogState, EditMode, LoadState, PanelState, SaveBlocked, SaveIntent};
pub use resource::{Entity, Resource, UpdateVerb};
pub use table::Pagination;

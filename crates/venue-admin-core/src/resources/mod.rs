//! Record types, one module per backend resource.

mod order;
mod product;
mod role;
mod supplier;
mod table;
mod transaction;
mod user;

pub use order::Order;
pub use product::Product;
pub use role::Role;
pub use supplier::Supplier;
pub use table::Table;
pub use transaction::{Transaction, TransactionKind};
pub use user::User;

/// `estado` values shared by roles and suppliers
pub const ACTIVE_STATES: &[&str] = &["Activo", "Inactivo"];

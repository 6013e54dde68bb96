//! Resource Screens
//!
//! One routed component per backend resource.

use leptos::prelude::*;
use venue_admin_core::resources::{Order, Product, Role, Supplier, Table, Transaction, User};

use crate::components::resource_panel;

#[component]
pub fn UsersPanel() -> impl IntoView {
    resource_panel::<User>("Usuarios")
}

#[component]
pub fn RolesPanel() -> impl IntoView {
    resource_panel::<Role>("Roles")
}

#[component]
pub fn TablesPanel() -> impl IntoView {
    resource_panel::<Table>("Mesas")
}

#[component]
pub fn OrdersPanel() -> impl IntoView {
    resource_panel::<Order>("Pedidos")
}

#[component]
pub fn SuppliersPanel() -> impl IntoView {
    resource_panel::<Supplier>("Proveedores")
}

#[component]
pub fn TransactionsPanel() -> impl IntoView {
    resource_panel::<Transaction>("Transacciones")
}

#[component]
pub fn ProductsPanel() -> impl IntoView {
    resource_panel::<Product>("Productos")
}

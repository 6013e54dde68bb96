//! Venue Admin Frontend App
//!
//! Navigation shell: menu bar, routed resource screens, toast stack.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;
use reactive_stores::Store;
use venue_admin_core::ApiConfig;

use crate::components::{MenuBar, ToastList};
use crate::context::AppContext;
use crate::panels::{
    OrdersPanel, ProductsPanel, RolesPanel, SuppliersPanel, TablesPanel, TransactionsPanel, UsersPanel,
};
use crate::store::ToastState;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(ApiConfig::from_env(), Store::new(ToastState::default())));

    view! {
        <Router>
            <div class="app-layout">
                <MenuBar />
                <main class="main-content">
                    <Routes fallback=|| view! { <p class="not-found">"Página no encontrada"</p> }>
                        <Route path=StaticSegment("") view=Home />
                        <Route path=StaticSegment("usuarios") view=UsersPanel />
                        <Route path=StaticSegment("roles") view=RolesPanel />
                        <Route path=StaticSegment("mesas") view=TablesPanel />
                        <Route path=StaticSegment("pedidos") view=OrdersPanel />
                        <Route path=StaticSegment("proveedores") view=SuppliersPanel />
                        <Route path=StaticSegment("transacciones") view=TransactionsPanel />
                        <Route path=StaticSegment("productos") view=ProductsPanel />
                    </Routes>
                </main>
                <ToastList />
            </div>
        </Router>
    }
}

/// Landing text at `/`
#[component]
fn Home() -> impl IntoView {
    view! {
        <section class="home">
            <h1>"Panel de administración"</h1>
            <p>"Seleccione una sección en el menú para gestionar sus registros."</p>
        </section>
    }
}

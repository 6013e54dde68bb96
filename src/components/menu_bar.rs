//! Menu Bar Component
//!
//! Static navigation across the resource screens.

use leptos::prelude::*;
use leptos_router::components::A;

/// (path, label) of every screen, in menu order
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/usuarios", "Usuarios"),
    ("/roles", "Roles"),
    ("/mesas", "Mesas"),
    ("/pedidos", "Pedidos"),
    ("/proveedores", "Proveedores"),
    ("/transacciones", "Transacciones"),
    ("/productos", "Productos"),
];

#[component]
pub fn MenuBar() -> impl IntoView {
    view! {
        <nav class="menu-bar">
            <A href="/">
                <span class="menu-brand">"Administración"</span>
            </A>
            <ul class="menu-items">
                {NAV_ITEMS
                    .iter()
                    .map(|(path, label)| {
                        view! {
                            <li>
                                <A href=*path>{*label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_paths_are_unique_and_lowercase() {
        let mut paths: Vec<_> = NAV_ITEMS.iter().map(|(p, _)| *p).collect();
        assert!(paths.iter().all(|p| p.starts_with('/') && *p == p.to_lowercase()));
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), NAV_ITEMS.len());
        assert!(NAV_ITEMS.iter().any(|(_, label)| *label == "Pedidos"));
    }
}

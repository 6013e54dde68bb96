//! UI Components
//!
//! Reusable Leptos components.

mod data_table;
mod delete_confirm_button;
mod lookups;
mod menu_bar;
mod record_dialog;
mod resource_panel;
mod search_bar;
mod toast_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use menu_bar::MenuBar;
pub use resource_panel::resource_panel;
pub use toast_list::ToastList;

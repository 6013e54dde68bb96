//! Browser Side of the REST Client
//!
//! The fetch transport plugged into the core client, and the signal-backed
//! store the core flows drive.

mod fetch;
mod handle;

pub use fetch::FetchTransport;
pub use handle::PanelHandle;

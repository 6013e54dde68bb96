//! Panel Handle
//!
//! Wraps a panel's state signal so the core flows can reach it across
//! awaits. Once the owning component is gone the signal is disposed and
//! every access reports `None`.

use leptos::prelude::*;
use venue_admin_core::{PanelState, PanelStore, Resource};

pub struct PanelHandle<R: Resource>(RwSignal<PanelState<R>>);

impl<R: Resource> Clone for PanelHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for PanelHandle<R> {}

impl<R: Resource> PanelHandle<R> {
    pub fn new() -> Self {
        Self(RwSignal::new(PanelState::new()))
    }

    /// Read part of the state, tracking it
    pub fn with<O>(&self, f: impl FnOnce(&PanelState<R>) -> O) -> O {
        self.0.with(f)
    }

    /// Synchronous transition triggered by the UI
    pub fn update(&self, f: impl FnOnce(&mut PanelState<R>)) {
        self.0.update(f);
    }
}

impl<R: Resource> PanelStore<R> for PanelHandle<R> {
    fn with_state<O>(&self, f: impl FnOnce(&mut PanelState<R>) -> O) -> Option<O> {
        self.0.try_update(f)
    }
}

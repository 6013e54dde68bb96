//! Reference Lookups
//!
//! Dropdown options for fields that point at users or tables, fetched once
//! when a screen with such fields mounts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use venue_admin_core::form::{Lookup, LookupOption};
use venue_admin_core::resources::{Table, User};
use venue_admin_core::{Notification, Resource};

use crate::context::AppContext;

#[derive(Clone, Copy)]
pub struct LookupOptions {
    users: RwSignal<Vec<LookupOption>>,
    tables: RwSignal<Vec<LookupOption>>,
}

impl LookupOptions {
    pub fn new() -> Self {
        Self {
            users: RwSignal::new(Vec::new()),
            tables: RwSignal::new(Vec::new()),
        }
    }

    fn signal(&self, lookup: Lookup) -> RwSignal<Vec<LookupOption>> {
        match lookup {
            Lookup::Users => self.users,
            Lookup::Tables => self.tables,
        }
    }

    /// Current options, tracked
    pub fn options(&self, lookup: Lookup) -> Vec<LookupOption> {
        self.signal(lookup).get()
    }

    pub fn load(&self, ctx: AppContext, lookup: Lookup) {
        let target = self.signal(lookup);
        spawn_local(async move {
            let result = match lookup {
                Lookup::Users => fetch_options::<User>(&ctx).await,
                Lookup::Tables => fetch_options::<Table>(&ctx).await,
            };
            match result {
                Ok(options) => {
                    target.try_set(options);
                }
                Err(message) => ctx.notify(Notification::error(message)),
            }
        });
    }
}

async fn fetch_options<R>(ctx: &AppContext) -> Result<Vec<LookupOption>, String>
where
    R: Resource,
    for<'a> LookupOption: From<&'a R>,
{
    match ctx.client::<R>().list().await {
        Ok(records) => Ok(records.iter().map(LookupOption::from).collect()),
        Err(e) => {
            log::error!("Failed to load {} for selector: {}", R::PLURAL, e);
            Err(R::load_failed_message())
        }
    }
}

//! Panel Flows
//!
//! Async operations driving a `PanelState` through one network round trip
//! each. State is never held across an await: every step goes back through
//! the `PanelStore`, and a store that reports the panel gone ends the flow
//! silently.

use chrono::{DateTime, Utc};

use crate::client::ResourceClient;
use crate::http::Transport;
use crate::notify::Notification;
use crate::panel::{EditMode, PanelState, SaveBlocked};
use crate::resource::Resource;

/// Access to a mounted panel's state.
pub trait PanelStore<R: Resource> {
    /// Run `f` on the state, or return `None` if the panel has been unmounted
    fn with_state<O>(&self, f: impl FnOnce(&mut PanelState<R>) -> O) -> Option<O>;
}

/// Initial fetch on mount
pub async fn load<R, T, S>(store: &S, client: &ResourceClient<R, T>, notify: impl Fn(Notification))
where
    R: Resource,
    T: Transport,
    S: PanelStore<R>,
{
    if store.with_state(|s| s.begin_load()).is_none() {
        return;
    }
    match client.list().await {
        Ok(records) => {
            store.with_state(|s| s.replace_records(records));
        }
        Err(e) => {
            log::error!("Failed to load {}: {}", R::PLURAL, e);
            let message = R::load_failed_message();
            if store.with_state(|s| s.load_failed(message.clone())).is_some() {
                notify(Notification::error(message));
            }
        }
    }
}

/// Validate, submit and re-fetch the dialog's draft
pub async fn save<R, T, S>(
    store: &S,
    client: &ResourceClient<R, T>,
    now: DateTime<Utc>,
    notify: impl Fn(Notification),
) where
    R: Resource,
    T: Transport,
    S: PanelStore<R>,
{
    let intent = match store.with_state(|s| s.begin_save(now)) {
        None | Some(Err(SaveBlocked::InFlight)) | Some(Err(SaveBlocked::NoDraft)) => return,
        Some(Err(SaveBlocked::Invalid(e))) => {
            log::debug!("Rejected {} draft: {}", R::NOUN, e);
            notify(Notification::error(e.to_string()));
            return;
        }
        Some(Ok(intent)) => intent,
    };

    let result = match intent.mode {
        EditMode::New => client.create(&intent.record).await,
        EditMode::Edit => client.update(&intent.record).await,
    };

    match result {
        Ok(_) => {
            if store.with_state(|s| s.save_succeeded()).is_none() {
                return;
            }
            let message = match intent.mode {
                EditMode::New => R::created_message(),
                EditMode::Edit => R::updated_message(),
            };
            notify(Notification::success(message));
            refresh(store, client, &notify).await;
            store.with_state(|s| s.finish_request());
        }
        Err(e) => {
            log::error!("Failed to save {}: {}", R::NOUN, e);
            if store.with_state(|s| s.save_failed()).is_some() {
                notify(Notification::error(R::save_failed_message(intent.mode)));
            }
        }
    }
}

/// Delete one record (already confirmed by the user) and re-fetch
pub async fn delete<R, T, S>(store: &S, client: &ResourceClient<R, T>, id: R::Id, notify: impl Fn(Notification))
where
    R: Resource,
    T: Transport,
    S: PanelStore<R>,
{
    if store.with_state(|s| s.begin_request()) != Some(true) {
        return;
    }
    let result = client.delete(id).await;
    if store.with_state(|_| ()).is_none() {
        return;
    }
    match result {
        Ok(()) => {
            notify(Notification::success(R::deleted_message()));
            refresh(store, client, &notify).await;
        }
        Err(e) => {
            log::error!("Failed to delete {} {}: {}", R::NOUN, id, e);
            notify(Notification::error(R::delete_failed_message()));
        }
    }
    store.with_state(|s| s.finish_request());
}

/// Replace the collection with search results; blank text lists everything
pub async fn search<R, T, S>(store: &S, client: &ResourceClient<R, T>, text: &str, notify: impl Fn(Notification))
where
    R: Resource,
    T: Transport,
    S: PanelStore<R>,
{
    let text = text.trim();
    let started = store.with_state(|s| {
        s.query = text.to_string();
        s.begin_request()
    });
    if started != Some(true) {
        return;
    }
    let result = if text.is_empty() {
        client.list().await
    } else {
        client.search(text).await
    };
    let outcome = store.with_state(|s| {
        s.finish_request();
        match result {
            Ok(records) => {
                s.replace_records(records);
                Ok(())
            }
            Err(e) => Err(e),
        }
    });
    if let Some(Err(e)) = outcome {
        log::error!("Search for {:?} in {} failed: {}", text, R::PLURAL, e);
        notify(Notification::error(R::load_failed_message()));
    }
}

/// Re-fetch after a confirmed mutation, still under the in-flight guard;
/// on failure the old collection stays
async fn refresh<R, T, S>(store: &S, client: &ResourceClient<R, T>, notify: &impl Fn(Notification))
where
    R: Resource,
    T: Transport,
    S: PanelStore<R>,
{
    match client.list().await {
        Ok(records) => {
            store.with_state(|s| s.replace_records(records));
        }
        Err(e) => {
            log::error!("Failed to reload {}: {}", R::PLURAL, e);
            if store.with_state(|_| ()).is_some() {
                notify(Notification::error(R::load_failed_message()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::http::Method;
    use crate::panel::LoadState;
    use crate::resources::{Role, Supplier, Table};
    use crate::testing::{GuardRecorder, MockTransport, TestStore, Toasts};
    use std::cell::RefCell;
    use std::rc::Rc;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 10, 9, 30, 0).unwrap()
    }

    fn setup<R: Resource>() -> (MockTransport, ResourceClient<R, MockTransport>, TestStore<R>, Toasts) {
        let mock = MockTransport::new();
        let client = ResourceClient::new(ApiConfig::new("http://api.test"), mock.clone());
        (mock, client, TestStore::new(), Toasts::default())
    }

    fn tables_json(ids: &[u32]) -> String {
        let rows: Vec<_> = ids
            .iter()
            .map(|id| json!({"id": id, "numero": id, "capacidad": 2, "estado": "Disponible"}))
            .collect();
        serde_json::Value::Array(rows).to_string()
    }

    async fn loaded(ids: &[u32]) -> (MockTransport, ResourceClient<Table, MockTransport>, TestStore<Table>, Toasts) {
        let (mock, client, store, toasts) = setup::<Table>();
        mock.respond(200, tables_json(ids));
        load(&store, &client, toasts.sink()).await;
        (mock, client, store, toasts)
    }

    // ========================
    // Load
    // ========================

    #[tokio::test]
    async fn test_load_yields_rows_in_server_order() {
        let (_, _, store, toasts) = loaded(&[4, 2, 9, 1]).await;
        let state = store.snapshot();
        assert_eq!(state.load, LoadState::Idle);
        assert_eq!(state.records.iter().map(|t| t.id).collect::<Vec<_>>(), vec![4, 2, 9, 1]);
        assert!(toasts.all().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_empties_and_notifies() {
        let (mock, client, store, toasts) = setup::<Table>();
        mock.respond(503, "");
        load(&store, &client, toasts.sink()).await;
        let state = store.snapshot();
        assert!(state.records.is_empty());
        assert_eq!(state.load, LoadState::Error("Error al obtener mesas".into()));
        assert_eq!(toasts.all(), vec![Notification::error("Error al obtener mesas")]);
    }

    #[tokio::test]
    async fn test_late_response_after_unmount_is_dropped() {
        let (mock, client, store, toasts) = setup::<Table>();
        mock.respond(500, "");
        store.unmount();
        load(&store, &client, toasts.sink()).await;
        assert!(mock.requests().is_empty());
        assert!(toasts.all().is_empty());
    }

    // ========================
    // Save
    // ========================

    #[tokio::test]
    async fn test_create_table_posts_draft_then_refetches() {
        let (mock, client, store, toasts) = loaded(&[1]).await;
        store.with_state(|s| {
            s.open_new(now());
            s.edit_draft(|t| {
                t.number = 5;
                t.capacity = 4;
                t.status = "Disponible".into();
                t.location = "Terraza".into();
                t.kind = "Familiar".into();
            });
        });
        mock.respond(201, "");
        mock.respond(
            200,
            json!([
                {"id": 1, "numero": 1, "capacidad": 2, "estado": "Disponible"},
                {"id": 12, "numero": 5, "capacidad": 4, "estado": "Disponible", "ubicacion": "Terraza", "tipo": "Familiar"}
            ])
            .to_string(),
        );

        save(&store, &client, now(), toasts.sink()).await;

        let requests = mock.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].method, Method::POST);
        assert_eq!(requests[1].url, "http://api.test/mesas/");
        let body: serde_json::Value = serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"id": 0, "numero": 5, "capacidad": 4, "estado": "Disponible", "ubicacion": "Terraza", "tipo": "Familiar"})
        );
        assert_eq!(requests[2].method, Method::GET);

        let state = store.snapshot();
        assert!(!state.dialog.is_open());
        assert!(!state.in_flight);
        let created = state.records.iter().find(|t| t.number == 5).unwrap();
        assert_eq!(created.id, 12);
        assert_eq!(toasts.all(), vec![Notification::success("Mesa creada correctamente")]);
    }

    #[tokio::test]
    async fn test_invalid_role_issues_no_request() {
        let (mock, client, store, toasts) = setup::<Role>();
        store.with_state(|s| {
            s.open_new(now());
            s.edit_draft(|r| r.name = "Mesero".into());
        });
        save(&store, &client, now(), toasts.sink()).await;

        assert!(mock.requests().is_empty());
        assert!(store.snapshot().dialog.is_open());
        let all = toasts.all();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_error());
        assert_eq!(all[0].detail, "Estado: campo obligatorio");
    }

    #[tokio::test]
    async fn test_failed_update_keeps_dialog_and_collection() {
        let (mock, client, store, toasts) = loaded(&[1, 2]).await;
        let before = store.snapshot().records;
        store.with_state(|s| {
            let row = s.records[1].clone();
            s.open_edit(&row);
            s.edit_draft(|t| t.capacity = 10);
        });
        mock.respond(500, "Internal Server Error");

        save(&store, &client, now(), toasts.sink()).await;

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].method, Method::PUT);
        assert_eq!(requests[1].url, "http://api.test/mesas/2");
        let state = store.snapshot();
        assert_eq!(state.records, before);
        assert_eq!(state.draft().map(|t| t.capacity), Some(10));
        assert!(!state.in_flight);
        assert_eq!(toasts.all(), vec![Notification::error("Error al actualizar mesa")]);
    }

    #[tokio::test]
    async fn test_refetch_failure_after_save_keeps_collection() {
        let (mock, client, store, toasts) = loaded(&[1]).await;
        store.with_state(|s| {
            let row = s.records[0].clone();
            s.open_edit(&row);
        });
        mock.respond(200, "");
        mock.respond(502, "");

        save(&store, &client, now(), toasts.sink()).await;

        let state = store.snapshot();
        assert!(!state.dialog.is_open());
        assert_eq!(state.records.len(), 1);
        assert_eq!(
            toasts.all(),
            vec![
                Notification::success("Mesa actualizada correctamente"),
                Notification::error("Error al obtener mesas"),
            ]
        );
    }

    #[tokio::test]
    async fn test_role_create_is_stamped() {
        let (mock, client, store, toasts) = setup::<Role>();
        store.with_state(|s| {
            s.open_new(now());
            s.edit_draft(|r| {
                r.name = "Cajero".into();
                r.status = "Activo".into();
            });
        });
        mock.respond(201, "");
        mock.respond(200, "[]");
        save(&store, &client, now(), toasts.sink()).await;

        let body: serde_json::Value =
            serde_json::from_str(mock.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["fechaCreacion"], "2025-02-10T09:30:00.000Z");
        assert_eq!(body["fechaActualizacion"], "2025-02-10T09:30:00.000Z");
        assert_eq!(toasts.all(), vec![Notification::success("Rol creado correctamente")]);
    }

    #[tokio::test]
    async fn test_plain_text_reply_to_create_counts_as_success() {
        let (mock, client, store, toasts) = setup::<Role>();
        store.with_state(|s| {
            s.open_new(now());
            s.edit_draft(|r| {
                r.name = "Cajero".into();
                r.status = "Activo".into();
            });
        });
        mock.respond(201, "Rol creado");
        mock.respond(200, json!([{"id": 5, "rol": "Cajero", "estado": "Activo"}]).to_string());

        save(&store, &client, now(), toasts.sink()).await;

        assert_eq!(mock.requests().len(), 2);
        let state = store.snapshot();
        assert!(!state.dialog.is_open());
        assert!(!state.in_flight);
        assert_eq!(state.records.len(), 1);
        assert_eq!(toasts.all(), vec![Notification::success("Rol creado correctamente")]);
    }

    #[tokio::test]
    async fn test_null_fields_still_yield_every_row() {
        let (mock, client, store, toasts) = setup::<Role>();
        mock.respond(
            200,
            json!([
                {"id": 1, "rol": "Admin", "estado": "Activo", "usuarios": null, "fechaCreacion": null},
                {"id": 2, "rol": "Mesero", "estado": null, "usuarios": "ana"}
            ])
            .to_string(),
        );
        load(&store, &client, toasts.sink()).await;

        let state = store.snapshot();
        assert_eq!(state.load, LoadState::Idle);
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.records[0].users, "");
        assert_eq!(state.records[1].status, "");
        assert!(toasts.all().is_empty());
    }

    #[tokio::test]
    async fn test_guard_stays_raised_through_refetch() {
        let store = TestStore::<Table>::new();
        let mock = MockTransport::new();
        let guard_seen = Rc::new(RefCell::new(Vec::new()));
        let transport = GuardRecorder {
            inner: mock.clone(),
            store: store.clone(),
            guard_seen: Rc::clone(&guard_seen),
        };
        let client = ResourceClient::new(ApiConfig::new("http://api.test"), transport);
        let toasts = Toasts::default();
        store.with_state(|s| s.replace_records(vec![Table { id: 4, ..Table::default() }]));
        mock.respond(200, "");
        mock.respond(200, "[]");

        delete(&store, &client, 4, toasts.sink()).await;

        assert_eq!(*guard_seen.borrow(), vec![true, true]);
        assert!(!store.snapshot().in_flight);
        assert!(store.snapshot().records.is_empty());

        store.with_state(|s| {
            s.open_edit(&Table { id: 4, number: 1, capacity: 2, status: "Disponible".into(), ..Table::default() })
        });
        mock.respond(200, "");
        mock.respond(200, "[]");
        save(&store, &client, now(), toasts.sink()).await;

        assert_eq!(*guard_seen.borrow(), vec![true, true, true, true]);
        assert!(!store.snapshot().in_flight);
    }

    #[tokio::test]
    async fn test_save_while_in_flight_is_ignored() {
        let (mock, client, store, toasts) = loaded(&[1]).await;
        store.with_state(|s| {
            let row = s.records[0].clone();
            s.open_edit(&row);
            s.begin_request();
        });
        save(&store, &client, now(), toasts.sink()).await;
        assert_eq!(mock.requests().len(), 1);
        assert!(toasts.all().is_empty());
    }

    // ========================
    // Delete
    // ========================

    #[tokio::test]
    async fn test_delete_sends_one_request_and_refetches() {
        let (mock, client, store, toasts) = loaded(&[1, 7, 3]).await;
        mock.respond(200, "");
        mock.respond(200, tables_json(&[1, 3]));

        delete(&store, &client, 7, toasts.sink()).await;

        let requests = mock.requests();
        let deletes: Vec<_> = requests.iter().filter(|r| r.method == Method::DELETE).collect();
        assert_eq!(deletes.len(), 1);
        assert_eq!(deletes[0].url, "http://api.test/mesas/7");
        let state = store.snapshot();
        assert!(!state.contains(7));
        assert!(!state.in_flight);
        assert_eq!(toasts.all(), vec![Notification::success("Mesa eliminada correctamente")]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_collection() {
        let (mock, client, store, toasts) = loaded(&[1, 7]).await;
        mock.fail("offline");
        delete(&store, &client, 7, toasts.sink()).await;
        assert_eq!(mock.requests().len(), 2);
        assert!(store.snapshot().contains(7));
        assert_eq!(toasts.all(), vec![Notification::error("Error al eliminar mesa")]);
    }

    // ========================
    // Search
    // ========================

    #[tokio::test]
    async fn test_search_replaces_collection() {
        let (mock, client, store, toasts) = setup::<Supplier>();
        mock.respond(200, json!([{"id": 2, "nombre": "Lácteos del Valle"}]).to_string());
        search(&store, &client, "  lácteos ", toasts.sink()).await;

        assert_eq!(
            mock.requests()[0].url,
            "http://api.test/proveedores/search?texto=l%C3%A1cteos"
        );
        let state = store.snapshot();
        assert_eq!(state.query, "lácteos");
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.load, LoadState::Idle);
    }

    #[tokio::test]
    async fn test_blank_search_lists_all_and_failure_notifies() {
        let (mock, client, store, toasts) = setup::<Supplier>();
        mock.respond(500, "");
        search(&store, &client, "", toasts.sink()).await;
        assert_eq!(mock.requests()[0].url, "http://api.test/proveedores/");
        assert!(!store.snapshot().in_flight);
        assert_eq!(toasts.all(), vec![Notification::error("Error al obtener proveedores")]);
    }
}

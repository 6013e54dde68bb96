//! CRUD Panel State
//!
//! Everything one resource screen owns: the last fetched collection, the
//! dialog with its draft, the in-flight guard and the page cursor. All
//! transitions are plain synchronous methods; the async flows in `flow`
//! call them around each network round trip.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::resource::Resource;
use crate::table::Pagination;

/// Whether the dialog creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    New,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Initial fetch outstanding
    #[default]
    Loading,
    Idle,
    /// Initial fetch failed; the collection stays empty
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogState<R> {
    Closed,
    Open { mode: EditMode, draft: R },
}

impl<R> DialogState<R> {
    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open { .. })
    }

    pub fn mode(&self) -> Option<EditMode> {
        match self {
            DialogState::Open { mode, .. } => Some(*mode),
            DialogState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&R> {
        match self {
            DialogState::Open { draft, .. } => Some(draft),
            DialogState::Closed => None,
        }
    }
}

/// Why a save could not start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveBlocked {
    /// Another request is outstanding
    InFlight,
    /// No dialog is open
    NoDraft,
    Invalid(ValidationError),
}

/// A validated, stamped draft ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct SaveIntent<R> {
    pub mode: EditMode,
    pub record: R,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState<R: Resource> {
    pub load: LoadState,
    pub records: Vec<R>,
    pub dialog: DialogState<R>,
    pub in_flight: bool,
    pub pagination: Pagination,
    /// Current search text (only used by searchable resources)
    pub query: String,
}

impl<R: Resource> Default for PanelState<R> {
    fn default() -> Self {
        Self {
            load: LoadState::default(),
            records: Vec::new(),
            dialog: DialogState::Closed,
            in_flight: false,
            pagination: Pagination::default(),
            query: String::new(),
        }
    }
}

impl<R: Resource> PanelState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Collection
    // ========================

    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Replace the collection wholesale with a fresh server list
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.load = LoadState::Idle;
        self.pagination.clamp(self.records.len());
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.records.clear();
        self.load = LoadState::Error(message.into());
        self.pagination.clamp(0);
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Records on the current page
    pub fn page_records(&self) -> &[R] {
        self.pagination.slice(&self.records)
    }

    pub fn contains(&self, id: R::Id) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    pub fn next_page(&mut self) {
        self.pagination.next(self.records.len());
    }

    pub fn prev_page(&mut self) {
        self.pagination.prev();
    }

    pub fn set_page_size(&mut self, per_page: usize) {
        self.pagination.set_per_page(per_page);
    }

    pub fn page_summary(&self) -> String {
        self.pagination.summary(self.records.len())
    }

    pub fn is_last_page(&self) -> bool {
        self.pagination.page + 1 >= self.pagination.page_count(self.records.len())
    }

    // ========================
    // Dialog
    // ========================

    /// "Add": open the dialog on a zero-valued draft
    pub fn open_new(&mut self, now: DateTime<Utc>) {
        if self.in_flight {
            return;
        }
        self.dialog = DialogState::Open {
            mode: EditMode::New,
            draft: R::new_draft(now),
        };
    }

    /// "Edit": open the dialog on a copy of the row
    pub fn open_edit(&mut self, record: &R) {
        if self.in_flight {
            return;
        }
        self.dialog = DialogState::Open {
            mode: EditMode::Edit,
            draft: record.clone(),
        };
    }

    pub fn close_dialog(&mut self) {
        if !self.in_flight {
            self.dialog = DialogState::Closed;
        }
    }

    /// Apply an edit to the open draft; no-op when closed
    pub fn edit_draft(&mut self, f: impl FnOnce(&mut R)) {
        if let DialogState::Open { draft, .. } = &mut self.dialog {
            f(draft);
        }
    }

    pub fn draft(&self) -> Option<&R> {
        self.dialog.draft()
    }

    // ========================
    // Save
    // ========================

    /// Validate and stamp the draft, raising the in-flight guard on success.
    /// The draft in the dialog is left as the user typed it.
    pub fn begin_save(&mut self, now: DateTime<Utc>) -> Result<SaveIntent<R>, SaveBlocked> {
        if self.in_flight {
            return Err(SaveBlocked::InFlight);
        }
        let DialogState::Open { mode, draft } = &self.dialog else {
            return Err(SaveBlocked::NoDraft);
        };
        draft.validate().map_err(SaveBlocked::Invalid)?;

        let mode = *mode;
        let mut record = draft.clone();
        record.before_save(mode, now);
        self.in_flight = true;
        Ok(SaveIntent { mode, record })
    }

    /// Mutation confirmed: close the dialog. The guard stays raised until
    /// the caller's re-fetch ends with `finish_request`.
    pub fn save_succeeded(&mut self) {
        self.dialog = DialogState::Closed;
    }

    /// Mutation rejected: dialog and collection stay as they were
    pub fn save_failed(&mut self) {
        self.in_flight = false;
    }

    // ========================
    // Delete / search
    // ========================

    /// Raise the in-flight guard for a delete or search; false if already raised
    pub fn begin_request(&mut self) -> bool {
        if self.in_flight {
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    pub fn finish_request(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Role, Table};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap()
    }

    fn table(id: u32, numero: i32) -> Table {
        Table {
            id,
            number: numero,
            capacity: 4,
            status: "Disponible".into(),
            location: "Terraza".into(),
            kind: "Familiar".into(),
        }
    }

    #[test]
    fn test_initial_state_is_loading_with_closed_dialog() {
        let state = PanelState::<Table>::new();
        assert!(state.is_loading());
        assert!(!state.dialog.is_open());
        assert!(!state.in_flight);
    }

    #[test]
    fn test_open_new_uses_zero_draft() {
        let mut state = PanelState::<Table>::new();
        state.open_new(now());
        assert_eq!(state.dialog.mode(), Some(EditMode::New));
        assert_eq!(state.draft(), Some(&Table::default()));
    }

    #[test]
    fn test_open_edit_copies_row() {
        let mut state = PanelState::<Table>::new();
        let row = table(3, 7);
        state.replace_records(vec![row.clone()]);
        state.open_edit(&row);
        state.edit_draft(|d| d.number = 99);
        assert_eq!(state.draft().map(|d| d.number), Some(99));
        assert_eq!(state.records[0].number, 7);
    }

    #[test]
    fn test_begin_save_requires_open_dialog() {
        let mut state = PanelState::<Table>::new();
        assert_eq!(state.begin_save(now()), Err(SaveBlocked::NoDraft));
    }

    #[test]
    fn test_begin_save_rejects_invalid_draft_without_guard() {
        let mut state = PanelState::<Role>::new();
        state.open_new(now());
        state.edit_draft(|r| r.name = "Cajero".into());
        let blocked = state.begin_save(now()).unwrap_err();
        assert!(matches!(blocked, SaveBlocked::Invalid(ref e) if e.field == "estado"));
        assert!(!state.in_flight);
        assert!(state.dialog.is_open());
    }

    #[test]
    fn test_in_flight_guard_blocks_second_save() {
        let mut state = PanelState::<Table>::new();
        state.open_edit(&table(1, 2));
        assert!(state.begin_save(now()).is_ok());
        assert_eq!(state.begin_save(now()), Err(SaveBlocked::InFlight));
        assert!(!state.begin_request());
        state.close_dialog();
        assert!(state.dialog.is_open());
    }

    #[test]
    fn test_save_failed_keeps_dialog() {
        let mut state = PanelState::<Table>::new();
        state.open_edit(&table(1, 2));
        state.begin_save(now()).unwrap();
        state.save_failed();
        assert!(state.dialog.is_open());
        assert!(!state.in_flight);
    }

    #[test]
    fn test_guard_outlives_successful_save() {
        let mut state = PanelState::<Table>::new();
        state.open_edit(&table(1, 2));
        state.begin_save(now()).unwrap();
        state.save_succeeded();
        assert!(!state.dialog.is_open());
        assert!(state.in_flight);
        state.open_new(now());
        assert!(!state.dialog.is_open());
        state.finish_request();
        assert!(!state.in_flight);
    }

    #[test]
    fn test_load_failed_empties_collection() {
        let mut state = PanelState::<Table>::new();
        state.replace_records(vec![table(1, 1)]);
        state.load_failed("Error al obtener mesas");
        assert!(state.records.is_empty());
        assert_eq!(state.load, LoadState::Error("Error al obtener mesas".into()));
    }

    #[test]
    fn test_replace_clamps_page() {
        let mut state = PanelState::<Table>::new();
        state.replace_records((1..=11).map(|i| table(i, i as i32)).collect());
        state.pagination.page = 2;
        assert_eq!(state.page_records().len(), 1);
        state.replace_records((1..=4).map(|i| table(i, i as i32)).collect());
        assert_eq!(state.pagination.page, 0);
        assert_eq!(state.page_records().len(), 4);
    }

    #[test]
    fn test_page_navigation() {
        let mut state = PanelState::<Table>::new();
        state.replace_records((1..=7).map(|i| table(i, i as i32)).collect());
        assert!(!state.is_last_page());
        state.next_page();
        assert!(state.is_last_page());
        assert_eq!(state.page_summary(), "6–7 de 7");
        state.next_page();
        assert_eq!(state.pagination.page, 1);
        state.set_page_size(10);
        assert_eq!(state.page_records().len(), 7);
        state.prev_page();
        assert_eq!(state.pagination.page, 0);
    }
}

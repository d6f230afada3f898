// src/messages.rs
//
// Every user interaction and network completion is a `Message`; every side
// effect the reducers ask for is a `Command`.
//
use serde_json::{Map, Value};

use crate::models::{EntityKind, LookupOption};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    Navigate(EntityKind),

    // Data arriving from the backend
    RecordsLoaded {
        kind: EntityKind,
        records: Value,
    },
    LookupLoaded {
        kind: EntityKind,
        options: Vec<LookupOption>,
    },
    RecordCreated {
        kind: EntityKind,
        record: Value,
    },
    RecordUpdated {
        kind: EntityKind,
        id: u32,
        patch: Map<String, Value>,
    },
    RecordDeleted {
        kind: EntityKind,
        id: u32,
    },
    MutationFailed {
        kind: EntityKind,
        action: Mutation,
    },

    // List controls
    SortBy(String),
    SetFilter {
        key: String,
        value: String,
    },
    ResetFilters,
    NextPage,
    PreviousPage,

    // Editing
    BeginCreate,
    BeginEdit(u32),
    EditField {
        key: String,
        value: String,
    },
    SaveDraft,
    CancelEdit,
    RequestDelete(u32),

    ExportCsv,
}

/// The three write operations, used to phrase failure alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    /// e.g. "Failed to update order".
    pub fn failure_message(self, kind: EntityKind) -> String {
        let verb = match self {
            Mutation::Create => "create",
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        };
        format!("Failed to {} {}", verb, kind.singular().to_lowercase())
    }
}

/// Which part of the mounted page needs re-rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderScope {
    /// Title, filters, toolbar, form, table and pager.
    Page,
    /// Table and pager only, so focused filter inputs keep their caret.
    Rows,
}

#[derive(Debug, PartialEq)]
pub enum Command {
    FetchRecords(EntityKind),
    FetchLookup(EntityKind),
    CreateRecord {
        kind: EntityKind,
        payload: Map<String, Value>,
    },
    UpdateRecord {
        kind: EntityKind,
        id: u32,
        payload: Map<String, Value>,
    },
    DeleteRecord {
        kind: EntityKind,
        id: u32,
    },

    Render(RenderScope),
    /// Mark the active navigation link.
    HighlightNav(EntityKind),
    /// Blocking `window.alert`.
    Alert(String),
    /// Non-blocking confirmation toast.
    Notify(String),
    /// Console error for failures the user does not need to acknowledge.
    ReportError(String),
    DownloadCsv {
        filename: String,
        content: String,
    },
}

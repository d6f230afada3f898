//! Reducer for one entity list page: owns the fetched records, the lookups
//! of referenced entities, the list controls and the open editor.

use std::collections::HashMap;

use crate::csv_export;
use crate::draft::{merge_patch, Draft, EditTarget};
use crate::listing::{derive_view, matching_count, FilterState, Pagination, SortConfig};
use crate::messages::{Command, Message, Mutation, RenderScope};
use crate::models::{EntityKind, LookupOption, Record};
use crate::pages::Page;
use crate::schema::{find_column, ColumnSpec, FieldKind, FilterKind};
use crate::views::{
    CellView, FilterControl, FilterView, FormView, HeaderView, InputControl, InputView, PageView,
    PagerView, RowView,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub target: EditTarget,
    pub draft: Draft,
}

pub struct ListPage<T: Record> {
    pub records: Vec<T>,
    pub loaded: bool,
    pub lookups: HashMap<EntityKind, Vec<LookupOption>>,
    pub sort: SortConfig,
    pub filters: FilterState,
    pub pagination: Pagination,
    pub editor: Option<Editor>,
}

impl<T: Record> Default for ListPage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> ListPage<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loaded: false,
            lookups: HashMap::new(),
            sort: SortConfig::default(),
            filters: FilterState::default(),
            pagination: Pagination::default(),
            editor: None,
        }
    }

    fn render(scope: RenderScope) -> Vec<Command> {
        vec![Command::Render(scope)]
    }

    fn close_editor_for(&mut self, target: EditTarget) {
        if self.editor.as_ref().map(|e| e.target) == Some(target) {
            self.editor = None;
        }
    }

    fn matching(&self) -> usize {
        matching_count(&self.records, &self.filters)
    }

    /// Linear lookup of a referenced record's label.
    pub fn resolve(&self, target: EntityKind, id: Option<u32>) -> String {
        id.and_then(|id| {
            self.lookups
                .get(&target)
                .and_then(|options| options.iter().find(|o| o.id == id))
                .map(|o| o.label.clone())
        })
        .unwrap_or_else(|| target.unknown_label())
    }

    fn options(&self, target: EntityKind) -> Vec<LookupOption> {
        self.lookups.get(&target).cloned().unwrap_or_default()
    }

    /// Reference selects get an empty first option on new records and
    /// whenever nothing is selected yet, so the browser does not display an
    /// entity the draft never picked.
    fn input_for(&self, column: &'static ColumnSpec, value: String, new_record: bool) -> InputView {
        let unset = new_record || value.is_empty();
        let control = match column.kind {
            FieldKind::Id | FieldKind::Text => InputControl::Text,
            FieldKind::Decimal => InputControl::Number,
            FieldKind::Date => InputControl::Date,
            FieldKind::Reference(target) => InputControl::Select {
                placeholder: unset.then(|| format!("Select {}", target.singular())),
                options: self.options(target),
            },
        };
        InputView { key: column.key, label: column.label, control, value }
    }

    fn cell_text(&self, record: &T, column: &ColumnSpec) -> String {
        match column.kind {
            FieldKind::Reference(target) => self.resolve(target, record.field(column.key).as_id()),
            _ => record.field(column.key).display(),
        }
    }

    fn row_view(&self, record: &T) -> RowView {
        let editing = self.editor.as_ref().filter(|e| e.target == EditTarget::Existing(record.id()));
        let cells = T::columns()
            .iter()
            .map(|column| match editing {
                Some(editor) if column.is_editable() => {
                    let value = editor
                        .draft
                        .get(column.key)
                        .map(str::to_string)
                        .unwrap_or_else(|| record.field(column.key).as_input());
                    CellView::Input(self.input_for(column, value, false))
                }
                _ => CellView::Text(self.cell_text(record, column)),
            })
            .collect();
        RowView { id: record.id(), editing: editing.is_some(), cells }
    }

    fn form_view(&self) -> Option<FormView> {
        let editor = self.editor.as_ref().filter(|e| e.target == EditTarget::New)?;
        let fields = T::columns()
            .iter()
            .filter(|c| c.is_editable())
            .map(|column| {
                let value = editor.draft.get(column.key).unwrap_or("").to_string();
                self.input_for(column, value, true)
            })
            .collect();
        Some(FormView { fields })
    }

    fn filter_views(&self) -> Vec<FilterView> {
        T::filters()
            .iter()
            .map(|spec| {
                let current = self.filters.get(spec.key).to_string();
                let control = match spec.kind {
                    FilterKind::Contains => FilterControl::Text { value: current },
                    FilterKind::Equals(target) => FilterControl::Select {
                        options: self.options(target),
                        selected: current,
                    },
                };
                FilterView { key: spec.key, label: spec.label, control }
            })
            .collect()
    }

    fn save(&mut self) -> Vec<Command> {
        let Some(editor) = &self.editor else {
            return vec![];
        };
        let payload = match editor.draft.to_payload::<T>(editor.target) {
            Ok(payload) => payload,
            Err(e) => return vec![Command::Alert(e.to_string())],
        };
        match editor.target {
            EditTarget::New => vec![Command::CreateRecord { kind: T::KIND, payload }],
            EditTarget::Existing(_) if payload.is_empty() => {
                self.editor = None;
                Self::render(RenderScope::Page)
            }
            EditTarget::Existing(id) => vec![Command::UpdateRecord { kind: T::KIND, id, payload }],
        }
    }
}

impl<T: Record> Page for ListPage<T> {
    fn kind(&self) -> EntityKind {
        T::KIND
    }

    fn mount(&self) -> Vec<Command> {
        let mut commands = vec![Command::FetchRecords(T::KIND)];
        commands.extend(T::references().into_iter().map(Command::FetchLookup));
        commands
    }

    fn update(&mut self, msg: Message) -> Vec<Command> {
        match msg {
            // Responses for another page arrive after the user navigated away.
            Message::RecordsLoaded { kind, .. }
            | Message::RecordCreated { kind, .. }
            | Message::RecordUpdated { kind, .. }
            | Message::RecordDeleted { kind, .. }
            | Message::MutationFailed { kind, .. }
                if kind != T::KIND =>
            {
                vec![]
            }

            Message::RecordsLoaded { records, .. } => match serde_json::from_value::<Vec<T>>(records) {
                Ok(records) => {
                    self.records = records;
                    self.loaded = true;
                    self.pagination.clamp(self.matching());
                    Self::render(RenderScope::Page)
                }
                Err(e) => vec![Command::ReportError(format!(
                    "Error decoding {}: {}",
                    T::KIND.path(),
                    e
                ))],
            },

            Message::LookupLoaded { kind, options } => {
                if !T::references().contains(&kind) {
                    return vec![];
                }
                self.lookups.insert(kind, options);
                Self::render(RenderScope::Page)
            }

            Message::RecordCreated { record, .. } => match serde_json::from_value::<T>(record) {
                Ok(record) => {
                    self.records.push(record);
                    self.close_editor_for(EditTarget::New);
                    vec![
                        Command::Notify(format!("{} created", T::KIND.singular())),
                        Command::Render(RenderScope::Page),
                    ]
                }
                // Created server-side but unreadable here: refetch the list.
                Err(e) => {
                    self.close_editor_for(EditTarget::New);
                    vec![
                        Command::ReportError(format!(
                            "Error decoding created {}: {}",
                            T::KIND.singular().to_lowercase(),
                            e
                        )),
                        Command::FetchRecords(T::KIND),
                    ]
                }
            },

            Message::RecordUpdated { id, patch, .. } => {
                self.close_editor_for(EditTarget::Existing(id));
                let Some(index) = self.records.iter().position(|r| r.id() == id) else {
                    return Self::render(RenderScope::Page);
                };
                match merge_patch(&self.records[index], &patch) {
                    Ok(updated) => {
                        self.records[index] = updated;
                        vec![
                            Command::Notify(format!("{} saved", T::KIND.singular())),
                            Command::Render(RenderScope::Page),
                        ]
                    }
                    Err(e) => vec![
                        Command::ReportError(format!(
                            "Error merging {} {}: {}",
                            T::KIND.singular().to_lowercase(),
                            id,
                            e
                        )),
                        Command::FetchRecords(T::KIND),
                    ],
                }
            }

            Message::RecordDeleted { id, .. } => {
                self.records.retain(|r| r.id() != id);
                self.close_editor_for(EditTarget::Existing(id));
                self.pagination.clamp(self.matching());
                vec![
                    Command::Notify(format!("{} deleted", T::KIND.singular())),
                    Command::Render(RenderScope::Page),
                ]
            }

            Message::MutationFailed { kind, action } => {
                vec![Command::Alert(action.failure_message(kind))]
            }

            Message::SortBy(key) => {
                if find_column(T::columns(), &key).is_none() {
                    return vec![];
                }
                self.sort.toggle(&key);
                Self::render(RenderScope::Rows)
            }

            Message::SetFilter { key, value } => {
                if !T::filters().iter().any(|f| f.key == key) {
                    return vec![];
                }
                self.filters.set(&key, &value);
                self.pagination.reset();
                Self::render(RenderScope::Rows)
            }

            Message::ResetFilters => {
                self.filters.clear();
                self.pagination.reset();
                Self::render(RenderScope::Page)
            }

            Message::NextPage => {
                let matching = self.matching();
                if self.pagination.next(matching) {
                    Self::render(RenderScope::Rows)
                } else {
                    vec![]
                }
            }

            Message::PreviousPage => {
                if self.pagination.previous() {
                    Self::render(RenderScope::Rows)
                } else {
                    vec![]
                }
            }

            Message::BeginCreate => {
                self.editor = Some(Editor { target: EditTarget::New, draft: Draft::default() });
                Self::render(RenderScope::Page)
            }

            Message::BeginEdit(id) => {
                if !self.records.iter().any(|r| r.id() == id) {
                    return vec![];
                }
                self.editor = Some(Editor { target: EditTarget::Existing(id), draft: Draft::default() });
                Self::render(RenderScope::Page)
            }

            // Inputs already show what was typed, nothing to re-render.
            Message::EditField { key, value } => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.draft.set(&key, &value);
                }
                vec![]
            }

            Message::SaveDraft => self.save(),

            Message::CancelEdit => {
                if self.editor.take().is_some() {
                    Self::render(RenderScope::Page)
                } else {
                    vec![]
                }
            }

            Message::RequestDelete(id) => vec![Command::DeleteRecord { kind: T::KIND, id }],

            Message::ExportCsv => vec![Command::DownloadCsv {
                filename: format!("{}.csv", T::KIND.path()),
                content: csv_export::to_csv(&self.records),
            }],

            Message::Navigate(_) => vec![],
        }
    }

    fn view(&self) -> PageView {
        let list = derive_view(&self.records, &self.sort, &self.filters, &self.pagination);
        PageView {
            kind: T::KIND,
            title: T::KIND.title(),
            loaded: self.loaded,
            filters: self.filter_views(),
            headers: T::columns()
                .iter()
                .map(|c| HeaderView { key: c.key, label: c.label, indicator: self.sort.indicator(c.key) })
                .collect(),
            rows: list.rows.iter().map(|r| self.row_view(r)).collect(),
            form: self.form_view(),
            pager: PagerView {
                page: list.page,
                total_pages: list.total_pages,
                has_previous: list.has_previous,
                has_next: list.has_next,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Order, Shipper};
    use serde_json::{json, Map, Value};

    fn shippers_page(count: u32) -> ListPage<Shipper> {
        let mut page = ListPage::<Shipper>::new();
        let records: Vec<Value> = (1..=count)
            .map(|i| json!({ "ShipperID": i, "ShipperName": format!("Shipper {:02}", i), "Phone": "555" }))
            .collect();
        page.update(Message::RecordsLoaded { kind: EntityKind::Shippers, records: Value::Array(records) });
        page
    }

    fn orders_page() -> ListPage<Order> {
        let mut page = ListPage::<Order>::new();
        page.update(Message::RecordsLoaded {
            kind: EntityKind::Orders,
            records: json!([
                { "OrderID": 10248, "CustomerID": 90, "OrderDate": "1996-07-04", "ShipperID": 3 },
                { "OrderID": 10249, "CustomerID": 81, "OrderDate": "1996-07-05", "ShipperID": 1 },
                { "OrderID": 10250, "CustomerID": 34, "OrderDate": "1996-07-08", "ShipperID": 2 }
            ]),
        });
        page.update(Message::LookupLoaded {
            kind: EntityKind::Customers,
            options: vec![
                LookupOption { id: 90, label: "Wilman Kala".into() },
                LookupOption { id: 81, label: "Tradição Hipermercados".into() },
            ],
        });
        page
    }

    fn first_column_texts(view: &PageView) -> Vec<String> {
        view.rows
            .iter()
            .map(|r| match &r.cells[0] {
                CellView::Text(t) => t.clone(),
                CellView::Input(i) => i.value.clone(),
            })
            .collect()
    }

    #[test]
    fn mount_fetches_list_and_lookups() {
        let page = ListPage::<Order>::new();
        assert_eq!(
            page.mount(),
            vec![
                Command::FetchRecords(EntityKind::Orders),
                Command::FetchLookup(EntityKind::Customers),
                Command::FetchLookup(EntityKind::Shippers),
            ]
        );
    }

    #[test]
    fn loaded_list_renders_first_page() {
        let page = shippers_page(23);
        let view = page.view();
        assert!(view.loaded);
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.pager.label(), "Page 1 of 3");
        assert!(!view.pager.has_previous);
        assert!(view.pager.has_next);
    }

    #[test]
    fn clicking_sort_toggles_direction() {
        let mut page = shippers_page(3);
        assert_eq!(page.update(Message::SortBy("ShipperID".into())), vec![Command::Render(RenderScope::Rows)]);
        assert_eq!(first_column_texts(&page.view()), vec!["1", "2", "3"]);
        assert_eq!(page.view().headers[0].text(), "Shipper ID ↑");
        page.update(Message::SortBy("ShipperID".into()));
        assert_eq!(first_column_texts(&page.view()), vec!["3", "2", "1"]);
        assert_eq!(page.view().headers[0].text(), "Shipper ID ↓");
    }

    #[test]
    fn unknown_sort_key_is_ignored() {
        let mut page = shippers_page(3);
        assert!(page.update(Message::SortBy("Salary".into())).is_empty());
        assert_eq!(page.sort, SortConfig::default());
    }

    #[test]
    fn filter_narrows_rows_and_returns_to_first_page() {
        let mut page = shippers_page(25);
        page.update(Message::NextPage);
        assert_eq!(page.pagination.page, 2);
        page.update(Message::SetFilter { key: "ShipperName".into(), value: "shipper 1".into() });
        let view = page.view();
        assert_eq!(page.pagination.page, 1);
        assert_eq!(first_column_texts(&view), vec!["10", "11", "12", "13", "14", "15", "16", "17", "18", "19"]);
        assert_eq!(view.pager.total_pages, 1);
        assert_eq!(page.update(Message::ResetFilters), vec![Command::Render(RenderScope::Page)]);
        assert_eq!(page.view().pager.total_pages, 3);
    }

    #[test]
    fn pagination_stops_at_bounds() {
        let mut page = shippers_page(12);
        assert!(page.update(Message::PreviousPage).is_empty());
        assert_eq!(page.update(Message::NextPage), vec![Command::Render(RenderScope::Rows)]);
        assert!(page.update(Message::NextPage).is_empty());
        assert_eq!(page.view().rows.len(), 2);
    }

    #[test]
    fn empty_list_has_zero_pages() {
        let page = shippers_page(0);
        let view = page.view();
        assert_eq!(view.pager.label(), "Page 1 of 0");
        assert!(!view.pager.has_next);
    }

    #[test]
    fn references_resolve_to_names_or_unknown() {
        let page = orders_page();
        let view = page.view();
        let customers: Vec<_> = view.rows.iter().map(|r| r.cells[1].clone()).collect();
        assert_eq!(customers[0], CellView::Text("Wilman Kala".into()));
        assert_eq!(customers[2], CellView::Text("Unknown Customer".into()));
        assert_eq!(view.rows[0].cells[3], CellView::Text("Unknown Shipper".into()));
        assert_eq!(view.rows[0].cells[2], CellView::Text("07/04/1996".into()));
    }

    #[test]
    fn customer_filter_offers_lookup_options() {
        let mut page = orders_page();
        let view = page.view();
        match &view.filters[0].control {
            FilterControl::Select { options, selected } => {
                assert_eq!(options.len(), 2);
                assert!(selected.is_empty());
            }
            other => panic!("unexpected control {:?}", other),
        }
        page.update(Message::SetFilter { key: "CustomerID".into(), value: "81".into() });
        assert_eq!(first_column_texts(&page.view()), vec!["10249"]);
    }

    #[test]
    fn lookups_for_unrelated_entities_are_ignored() {
        let mut page = shippers_page(1);
        let out = page.update(Message::LookupLoaded { kind: EntityKind::Customers, options: vec![] });
        assert!(out.is_empty());
        assert!(page.lookups.is_empty());
    }

    #[test]
    fn stale_responses_for_other_pages_are_dropped() {
        let mut page = shippers_page(2);
        let out = page.update(Message::RecordsLoaded { kind: EntityKind::Orders, records: json!([]) });
        assert!(out.is_empty());
        assert_eq!(page.records.len(), 2);
        assert!(page
            .update(Message::MutationFailed { kind: EntityKind::Orders, action: Mutation::Delete })
            .is_empty());
    }

    #[test]
    fn malformed_list_is_reported() {
        let mut page = ListPage::<Shipper>::new();
        let out = page.update(Message::RecordsLoaded { kind: EntityKind::Shippers, records: json!({ "error": true }) });
        assert!(matches!(out.as_slice(), [Command::ReportError(_)]));
        assert!(!page.loaded);
    }

    #[test]
    fn create_flow_posts_typed_payload_and_appends() {
        let mut page = orders_page();
        page.update(Message::BeginCreate);
        let form = page.view().form.expect("form open");
        assert_eq!(form.fields.iter().map(|f| f.key).collect::<Vec<_>>(), vec!["CustomerID", "OrderDate", "ShipperID"]);
        match &form.fields[0].control {
            InputControl::Select { placeholder, .. } => assert_eq!(placeholder.as_deref(), Some("Select Customer")),
            other => panic!("unexpected control {:?}", other),
        }

        page.update(Message::EditField { key: "CustomerID".into(), value: "90".into() });
        page.update(Message::EditField { key: "OrderDate".into(), value: "1996-07-09".into() });
        let out = page.update(Message::SaveDraft);
        let mut expected = Map::new();
        expected.insert("CustomerID".into(), json!(90));
        expected.insert("OrderDate".into(), json!("1996-07-09"));
        assert_eq!(out, vec![Command::CreateRecord { kind: EntityKind::Orders, payload: expected }]);

        page.update(Message::RecordCreated {
            kind: EntityKind::Orders,
            record: json!({ "OrderID": 10251, "CustomerID": 90, "OrderDate": "1996-07-09", "ShipperID": null }),
        });
        assert_eq!(page.records.len(), 4);
        assert!(page.editor.is_none());
        assert!(page.view().form.is_none());
    }

    #[test]
    fn invalid_draft_alerts_instead_of_sending() {
        let mut page = orders_page();
        page.update(Message::BeginCreate);
        page.update(Message::EditField { key: "OrderDate".into(), value: "someday".into() });
        assert_eq!(
            page.update(Message::SaveDraft),
            vec![Command::Alert("Invalid value for Order Date: someday".into())]
        );
        assert!(page.editor.is_some());
    }

    #[test]
    fn edit_flow_patches_and_merges() {
        let mut page = shippers_page(2);
        page.update(Message::BeginEdit(2));
        let view = page.view();
        assert_eq!(view.editing_row(), Some(2));
        let row = &view.rows[1];
        assert_eq!(row.cells[0], CellView::Text("2".into()));
        match &row.cells[1] {
            CellView::Input(input) => assert_eq!(input.value, "Shipper 02"),
            other => panic!("expected input, got {:?}", other),
        }

        page.update(Message::EditField { key: "Phone".into(), value: "(503) 555-3199".into() });
        let out = page.update(Message::SaveDraft);
        let patch = match out.as_slice() {
            [Command::UpdateRecord { kind: EntityKind::Shippers, id: 2, payload }] => payload.clone(),
            other => panic!("unexpected commands {:?}", other),
        };
        page.update(Message::RecordUpdated { kind: EntityKind::Shippers, id: 2, patch });
        assert_eq!(page.records[1].phone, "(503) 555-3199");
        assert_eq!(page.records[1].shipper_name, "Shipper 02");
        assert!(page.editor.is_none());
    }

    fn customer_select(view: &PageView, row: usize) -> (Option<String>, String) {
        match &view.rows[row].cells[1] {
            CellView::Input(InputView { control: InputControl::Select { placeholder, .. }, value, .. }) => {
                (placeholder.clone(), value.clone())
            }
            other => panic!("expected customer select, got {:?}", other),
        }
    }

    #[test]
    fn null_reference_in_row_editor_offers_empty_option() {
        let mut page = orders_page();
        page.records[0].customer_id = None;

        page.update(Message::BeginEdit(10248));
        let (placeholder, value) = customer_select(&page.view(), 0);
        assert_eq!(placeholder.as_deref(), Some("Select Customer"));
        assert_eq!(value, "");

        page.update(Message::BeginEdit(10249));
        let (placeholder, value) = customer_select(&page.view(), 1);
        assert_eq!(placeholder, None);
        assert_eq!(value, "81");
    }

    #[test]
    fn clearing_a_text_field_blanks_it() {
        let mut page = shippers_page(1);
        page.update(Message::BeginEdit(1));
        page.update(Message::EditField { key: "Phone".into(), value: String::new() });
        let patch = match page.update(Message::SaveDraft).as_slice() {
            [Command::UpdateRecord { id: 1, payload, .. }] => payload.clone(),
            other => panic!("unexpected commands {:?}", other),
        };
        assert_eq!(Value::Object(patch.clone()), json!({ "Phone": "" }));
        page.update(Message::RecordUpdated { kind: EntityKind::Shippers, id: 1, patch });
        assert_eq!(page.records[0].phone, "");
    }

    #[test]
    fn saving_an_unchanged_row_just_closes_the_editor() {
        let mut page = shippers_page(1);
        page.update(Message::BeginEdit(1));
        assert_eq!(page.update(Message::SaveDraft), vec![Command::Render(RenderScope::Page)]);
        assert!(page.editor.is_none());
    }

    #[test]
    fn cancel_drops_the_draft() {
        let mut page = shippers_page(1);
        page.update(Message::BeginEdit(1));
        page.update(Message::EditField { key: "Phone".into(), value: "x".into() });
        page.update(Message::CancelEdit);
        page.update(Message::BeginEdit(1));
        assert!(page.editor.as_ref().unwrap().draft.is_empty());
    }

    #[test]
    fn failed_mutation_alerts() {
        let mut page = shippers_page(1);
        assert_eq!(
            page.update(Message::MutationFailed { kind: EntityKind::Shippers, action: Mutation::Update }),
            vec![Command::Alert("Failed to update shipper".into())]
        );
    }

    #[test]
    fn delete_removes_row_and_clamps_page() {
        let mut page = shippers_page(11);
        page.update(Message::NextPage);
        assert_eq!(page.update(Message::RequestDelete(11)), vec![Command::DeleteRecord { kind: EntityKind::Shippers, id: 11 }]);
        page.update(Message::RecordDeleted { kind: EntityKind::Shippers, id: 11 });
        assert_eq!(page.records.len(), 10);
        assert_eq!(page.pagination.page, 1);
    }

    #[test]
    fn export_covers_the_unfiltered_list() {
        let mut page = shippers_page(3);
        page.update(Message::SetFilter { key: "ShipperName".into(), value: "01".into() });
        match page.update(Message::ExportCsv).as_slice() {
            [Command::DownloadCsv { filename, content }] => {
                assert_eq!(filename, "shippers.csv");
                assert_eq!(content.lines().count(), 4);
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }
}

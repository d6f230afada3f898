// src/views.rs
//
// Render-ready description of the mounted page. Reducers produce a
// `PageView`; the components turn it into DOM.
//
use crate::models::{EntityKind, LookupOption};

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub kind: EntityKind,
    pub title: &'static str,
    pub loaded: bool,
    pub filters: Vec<FilterView>,
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
    pub form: Option<FormView>,
    pub pager: PagerView,
}

impl PageView {
    pub fn add_label(&self) -> String {
        format!("Add New {}", self.kind.singular())
    }

    pub fn editing_row(&self) -> Option<u32> {
        self.rows.iter().find(|r| r.editing).map(|r| r.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterView {
    pub key: &'static str,
    pub label: &'static str,
    pub control: FilterControl,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterControl {
    Text {
        value: String,
    },
    Select {
        options: Vec<LookupOption>,
        selected: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub key: &'static str,
    pub label: &'static str,
    pub indicator: Option<&'static str>,
}

impl HeaderView {
    /// "Order ID ↑"
    pub fn text(&self) -> String {
        match self.indicator {
            Some(arrow) => format!("{} {}", self.label, arrow),
            None => self.label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: u32,
    pub editing: bool,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellView {
    Text(String),
    Input(InputView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    pub key: &'static str,
    pub label: &'static str,
    pub control: InputControl,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputControl {
    Text,
    Number,
    Date,
    Select {
        /// First, empty option ("Select Customer"); present on new records and
        /// whenever no value is selected.
        placeholder: Option<String>,
        options: Vec<LookupOption>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub fields: Vec<InputView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerView {
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PagerView {
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

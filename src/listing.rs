//! List view derivation: sort → filter → paginate.
//!
//! Everything here is plain data manipulation over borrowed records so the
//! pipeline can be unit-tested without a browser.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::constants::{PAGE_SIZE, SORT_ASC_INDICATOR, SORT_DESC_INDICATOR};
use crate::models::Record;
use crate::schema::{FilterKind, FilterSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Currently selected sort column. `key == None` keeps the fetched order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Header click: the same ascending column flips to descending, anything
    /// else selects the clicked column ascending.
    pub fn toggle(&mut self, key: &str) {
        let direction = match (&self.key, self.direction) {
            (Some(current), SortDirection::Ascending) if current == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.key = Some(key.to_string());
        self.direction = direction;
    }

    /// Arrow shown next to the header of the sorted column.
    pub fn indicator(&self, key: &str) -> Option<&'static str> {
        match &self.key {
            Some(current) if current == key => Some(match self.direction {
                SortDirection::Ascending => SORT_ASC_INDICATOR,
                SortDirection::Descending => SORT_DESC_INDICATOR,
            }),
            _ => None,
        }
    }
}

/// Stable sort of borrowed records. Descending reverses the comparison, not
/// the list, so equal values keep their fetched order in both directions.
/// Records without a value for the key always end up last.
pub fn sort_records<'a, T: Record>(records: &'a [T], sort: &SortConfig) -> Vec<&'a T> {
    let mut out: Vec<&T> = records.iter().collect();
    if let Some(key) = &sort.key {
        out.sort_by(|a, b| {
            let (a, b) = (a.field(key), b.field(key));
            match (a.is_missing(), b.is_missing()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => match sort.direction {
                    SortDirection::Ascending => a.compare(&b),
                    SortDirection::Descending => a.compare(&b).reverse(),
                },
            }
        });
    }
    out
}

/// Raw filter inputs keyed by field. Empty values are inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    values: BTreeMap<String, String>,
}

impl FilterState {
    pub fn set(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.values.remove(key);
        } else {
            self.values.insert(key.to_string(), value.to_string());
        }
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when `record` satisfies every active filter described by `specs`.
    /// Equality filters whose input is not a valid identifier are ignored.
    pub fn matches<T: Record>(&self, record: &T, specs: &[FilterSpec]) -> bool {
        specs.iter().all(|spec| {
            let raw = self.get(spec.key);
            if raw.is_empty() {
                return true;
            }
            match spec.kind {
                FilterKind::Contains => record
                    .field(spec.key)
                    .as_text()
                    .to_lowercase()
                    .contains(&raw.to_lowercase()),
                FilterKind::Equals(_) => match raw.trim().parse::<u32>() {
                    Ok(wanted) => record.field(spec.key).as_id() == Some(wanted),
                    Err(_) => true,
                },
            }
        })
    }
}

pub fn filter_records<'a, T: Record>(
    records: Vec<&'a T>,
    filters: &FilterState,
    specs: &[FilterSpec],
) -> Vec<&'a T> {
    if filters.is_empty() {
        return records;
    }
    records.into_iter().filter(|r| filters.matches(*r, specs)).collect()
}

/// 1-based page cursor over a list of `PAGE_SIZE` slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, page_size: PAGE_SIZE }
    }
}

impl Pagination {
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page < self.total_pages(len)
    }

    /// Returns true when the page changed.
    pub fn next(&mut self, len: usize) -> bool {
        if self.has_next(len) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Returns true when the page changed.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Pull the cursor back inside `1..=max(1, total_pages)` after the list
    /// shrank.
    pub fn clamp(&mut self, len: usize) {
        let last = self.total_pages(len).max(1);
        if self.page > last {
            self.page = last;
        }
        if self.page == 0 {
            self.page = 1;
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page.saturating_sub(1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

/// Output of the full pipeline for one render.
#[derive(Debug)]
pub struct ListView<'a, T> {
    pub rows: Vec<&'a T>,
    pub page: usize,
    pub total_pages: usize,
    pub matching: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

pub fn derive_view<'a, T: Record>(
    records: &'a [T],
    sort: &SortConfig,
    filters: &FilterState,
    pagination: &Pagination,
) -> ListView<'a, T> {
    let sorted = sort_records(records, sort);
    let filtered = filter_records(sorted, filters, T::filters());
    let matching = filtered.len();
    ListView {
        rows: pagination.slice(&filtered).to_vec(),
        page: pagination.page,
        total_pages: pagination.total_pages(matching),
        matching,
        has_previous: pagination.has_previous(),
        has_next: pagination.has_next(matching),
    }
}

/// Number of records that pass the current filters.
pub fn matching_count<T: Record>(records: &[T], filters: &FilterState) -> usize {
    records.iter().filter(|r| filters.matches(*r, T::filters())).count()
}

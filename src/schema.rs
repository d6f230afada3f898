//! Column and filter descriptions shared by every entity page.
//!
//! Records describe themselves through static tables of [`ColumnSpec`] and
//! [`FilterSpec`]; the page reducer, the draft converter and the table renderer
//! all read the same tables so a field is declared exactly once.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::constants::{DATE_DISPLAY_FORMAT, DATE_INPUT_FORMAT};
use crate::models::EntityKind;

/// How a column's values are typed, edited and serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Record identifier; shown read-only once the record exists.
    Id,
    Text,
    Decimal,
    Date,
    /// Foreign key into another entity, displayed through its lookup label.
    Reference(EntityKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// JSON field name used by the backend.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl ColumnSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind }
    }

    pub fn is_editable(&self) -> bool {
        self.kind != FieldKind::Id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Case-insensitive substring match on the field's text.
    Contains,
    /// Exact identifier match, offered as a select of the referenced entity.
    Equals(EntityKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    pub const fn contains(key: &'static str, label: &'static str) -> Self {
        Self { key, label, kind: FilterKind::Contains }
    }

    pub const fn equals(key: &'static str, label: &'static str, target: EntityKind) -> Self {
        Self { key, label, kind: FilterKind::Equals(target) }
    }
}

/// A single field value extracted from a record for sorting and filtering.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Missing,
}

impl FieldValue {
    /// Text values that look like a date become [`FieldValue::Date`] so they
    /// order chronologically; anything else stays text.
    pub fn date_or_text(raw: &str) -> Self {
        match parse_date(raw) {
            Some(date) => FieldValue::Date(date),
            None if raw.is_empty() => FieldValue::Missing,
            None => FieldValue::Text(raw.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Numbers sort before dates, dates before text, and missing values last.
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Int(_) | FieldValue::Float(_) => 0,
            FieldValue::Date(_) => 1,
            FieldValue::Text(_) => 2,
            FieldValue::Missing => 3,
        }
    }

    /// Total order used by header sorting. Numbers compare numerically across
    /// int/float, text lexicographically and dates chronologically; values of
    /// different kinds order by [`rank`](Self::rank).
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (Int(_) | Float(_), Int(_) | Float(_)) => self.as_f64().total_cmp(&other.as_f64()),
            (Text(a), Text(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            FieldValue::Int(v) => *v as f64,
            FieldValue::Float(v) => *v,
            _ => f64::NAN,
        }
    }

    /// Plain-text rendering used by substring filters and CSV export.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Int(v) => v.to_string(),
            FieldValue::Float(v) => v.to_string(),
            FieldValue::Text(v) => v.clone(),
            FieldValue::Date(d) => d.format(DATE_INPUT_FORMAT).to_string(),
            FieldValue::Missing => String::new(),
        }
    }

    /// Value placed in an `<input>`/`<select>` when an editor opens.
    pub fn as_input(&self) -> String {
        self.as_text()
    }

    /// Value shown in a read-only table cell.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Date(d) => d.format(DATE_DISPLAY_FORMAT).to_string(),
            FieldValue::Float(v) => format!("{:.2}", v),
            other => other.as_text(),
        }
    }

    pub fn as_id(&self) -> Option<u32> {
        match self {
            FieldValue::Int(v) => u32::try_from(*v).ok(),
            _ => None,
        }
    }
}

/// Accepts `YYYY-MM-DD` as well as full ISO-8601 timestamps (date part only).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.get(..10)?;
    NaiveDate::parse_from_str(head, DATE_INPUT_FORMAT).ok()
}

pub fn find_column(columns: &'static [ColumnSpec], key: &str) -> Option<&'static ColumnSpec> {
    columns.iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_across_int_and_float() {
        assert_eq!(FieldValue::Int(2).compare(&FieldValue::Float(2.5)), Ordering::Less);
        assert_eq!(FieldValue::Float(3.0).compare(&FieldValue::Int(3)), Ordering::Equal);
    }

    #[test]
    fn mixed_kinds_order_by_rank() {
        assert_eq!(FieldValue::Int(1).compare(&FieldValue::Text("a".into())), Ordering::Less);
        assert_eq!(FieldValue::Text("a".into()).compare(&FieldValue::Date(NaiveDate::MIN)), Ordering::Greater);
        assert_eq!(FieldValue::Missing.compare(&FieldValue::Int(7)), Ordering::Greater);
        assert_eq!(FieldValue::Missing.compare(&FieldValue::Missing), Ordering::Equal);
    }

    #[test]
    fn comparison_is_transitive_around_missing() {
        let (two, one, missing) = (FieldValue::Int(2), FieldValue::Int(1), FieldValue::Missing);
        assert_eq!(two.compare(&one), Ordering::Greater);
        assert_eq!(missing.compare(&two), Ordering::Greater);
        assert_eq!(missing.compare(&one), Ordering::Greater);
    }

    #[test]
    fn dates_parse_from_plain_and_iso_strings() {
        let expected = NaiveDate::from_ymd_opt(1996, 7, 4).unwrap();
        assert_eq!(parse_date("1996-07-04"), Some(expected));
        assert_eq!(parse_date("1996-07-04T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_date("07/04/1996"), None);
        assert_eq!(parse_date("1996"), None);
    }

    #[test]
    fn date_display_and_input_formats_differ() {
        let value = FieldValue::date_or_text("1996-07-04T00:00:00Z");
        assert_eq!(value.display(), "07/04/1996");
        assert_eq!(value.as_input(), "1996-07-04");
    }

    #[test]
    fn empty_text_is_missing() {
        assert_eq!(FieldValue::date_or_text(""), FieldValue::Missing);
        assert_eq!(FieldValue::date_or_text("soon"), FieldValue::Text("soon".into()));
    }
}

//! Editor drafts: raw input strings typed into the "new record" form or an
//! inline row editor, and their conversion into typed JSON payloads.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Number, Value};

use crate::models::Record;
use crate::schema::{find_column, parse_date, FieldKind};

/// Which record an open editor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(u32),
}

/// A field value that could not be converted to its column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftError {
    pub field: &'static str,
    pub value: String,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid value for {}: {}", self.field, self.value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    values: BTreeMap<String, String>,
}

impl Draft {
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Convert the draft into a JSON object typed after `T`'s columns.
    /// Unknown keys and identifier columns are skipped. Empty inputs are
    /// skipped for a new record; on an existing one they clear the field
    /// (`""` for text, `null` otherwise).
    pub fn to_payload<T: Record>(&self, target: EditTarget) -> Result<Map<String, Value>, DraftError> {
        let mut out = Map::new();
        for (key, raw) in &self.values {
            let Some(column) = find_column(T::columns(), key) else {
                continue;
            };
            if !column.is_editable() {
                continue;
            }
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                if let EditTarget::Existing(_) = target {
                    let cleared = match column.kind {
                        FieldKind::Text => Value::String(String::new()),
                        _ => Value::Null,
                    };
                    out.insert(column.key.to_string(), cleared);
                }
                continue;
            }
            let invalid = || DraftError { field: column.label, value: raw.clone() };
            let value = match column.kind {
                FieldKind::Id => continue,
                FieldKind::Text => Value::String(raw.clone()),
                FieldKind::Reference(_) => {
                    let n: i64 = trimmed.parse().map_err(|_| invalid())?;
                    Value::Number(n.into())
                }
                FieldKind::Decimal => {
                    let n: f64 = trimmed.parse().map_err(|_| invalid())?;
                    Value::Number(Number::from_f64(n).ok_or_else(invalid)?)
                }
                FieldKind::Date => {
                    parse_date(trimmed).ok_or_else(invalid)?;
                    Value::String(trimmed.to_string())
                }
            };
            out.insert(column.key.to_string(), value);
        }
        Ok(out)
    }
}

/// Merge a successful PATCH payload into the local copy of a record.
pub fn merge_patch<T: Record>(record: &T, patch: &Map<String, Value>) -> Result<T, serde_json::Error> {
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(fields) = &mut value {
        for (k, v) in patch {
            fields.insert(k.clone(), v.clone());
        }
    }
    serde_json::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Order, Product, Shipper};
    use serde_json::json;

    #[test]
    fn payload_is_typed_by_column() {
        let mut draft = Draft::default();
        draft.set("CustomerID", "7");
        draft.set("OrderDate", "1997-02-03");
        draft.set("ShipperID", "");
        let payload = draft.to_payload::<Order>(EditTarget::New).unwrap();
        assert_eq!(Value::Object(payload), json!({ "CustomerID": 7, "OrderDate": "1997-02-03" }));
    }

    #[test]
    fn identifier_and_unknown_keys_are_not_sent() {
        let mut draft = Draft::default();
        draft.set("ShipperID", "99");
        draft.set("Nickname", "x");
        draft.set("Phone", "(503) 555-9831");
        let payload = draft.to_payload::<Shipper>(EditTarget::New).unwrap();
        assert_eq!(Value::Object(payload), json!({ "Phone": "(503) 555-9831" }));
    }

    #[test]
    fn invalid_numbers_and_dates_are_rejected() {
        let mut draft = Draft::default();
        draft.set("Price", "cheap");
        let err = draft.to_payload::<Product>(EditTarget::New).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for Price: cheap");

        let mut draft = Draft::default();
        draft.set("OrderDate", "tomorrow");
        assert_eq!(draft.to_payload::<Order>(EditTarget::New).unwrap_err().field, "Order Date");
    }

    #[test]
    fn decimal_prices_become_numbers() {
        let mut draft = Draft::default();
        draft.set("Price", " 18.5 ");
        let payload = draft.to_payload::<Product>(EditTarget::New).unwrap();
        assert_eq!(payload["Price"], json!(18.5));
    }

    #[test]
    fn cleared_inputs_blank_existing_records() {
        let mut draft = Draft::default();
        draft.set("Phone", "");
        draft.set("ShipperName", "Federal Shipping");
        let payload = draft.to_payload::<Shipper>(EditTarget::Existing(3)).unwrap();
        assert_eq!(Value::Object(payload), json!({ "Phone": "", "ShipperName": "Federal Shipping" }));

        let mut draft = Draft::default();
        draft.set("CustomerID", " ");
        draft.set("OrderDate", "");
        let payload = draft.to_payload::<Order>(EditTarget::Existing(10248)).unwrap();
        assert_eq!(Value::Object(payload), json!({ "CustomerID": null, "OrderDate": null }));
    }

    #[test]
    fn cleared_fields_merge_into_the_local_copy() {
        let order = Order {
            order_id: 10248,
            customer_id: Some(90),
            order_date: "1996-07-04".into(),
            shipper_id: Some(3),
        };
        let mut patch = Map::new();
        patch.insert("CustomerID".into(), Value::Null);
        patch.insert("OrderDate".into(), Value::Null);
        let merged = merge_patch(&order, &patch).unwrap();
        assert_eq!(merged.customer_id, None);
        assert_eq!(merged.order_date, "");
        assert_eq!(merged.shipper_id, Some(3));
    }

    #[test]
    fn merge_patch_overwrites_only_submitted_fields() {
        let shipper = Shipper {
            shipper_id: 1,
            shipper_name: "Speedy Express".into(),
            phone: "(503) 555-9831".into(),
        };
        let mut patch = Map::new();
        patch.insert("Phone".into(), json!("(503) 555-0000"));
        let merged = merge_patch(&shipper, &patch).unwrap();
        assert_eq!(merged.shipper_name, "Speedy Express");
        assert_eq!(merged.phone, "(503) 555-0000");
    }
}

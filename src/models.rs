use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::schema::{ColumnSpec, FieldKind, FieldValue, FilterSpec};

/// The six entity types administered by the console. Each one owns a REST
/// collection and a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Products,
    Categories,
    Suppliers,
    Customers,
    Orders,
    Shippers,
}

impl EntityKind {
    /// Navigation bar order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Products,
        EntityKind::Categories,
        EntityKind::Suppliers,
        EntityKind::Customers,
        EntityKind::Orders,
        EntityKind::Shippers,
    ];

    /// Collection path on the backend and route segment in the URL hash.
    pub fn path(self) -> &'static str {
        match self {
            EntityKind::Products => "products",
            EntityKind::Categories => "categories",
            EntityKind::Suppliers => "suppliers",
            EntityKind::Customers => "customers",
            EntityKind::Orders => "orders",
            EntityKind::Shippers => "shippers",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.path() == path)
    }

    /// Page title, e.g. "Orders".
    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Products => "Products",
            EntityKind::Categories => "Categories",
            EntityKind::Suppliers => "Suppliers",
            EntityKind::Customers => "Customers",
            EntityKind::Orders => "Orders",
            EntityKind::Shippers => "Shippers",
        }
    }

    /// Singular noun, e.g. "Order".
    pub fn singular(self) -> &'static str {
        match self {
            EntityKind::Products => "Product",
            EntityKind::Categories => "Category",
            EntityKind::Suppliers => "Supplier",
            EntityKind::Customers => "Customer",
            EntityKind::Orders => "Order",
            EntityKind::Shippers => "Shipper",
        }
    }

    /// Label shown when a foreign key cannot be resolved.
    pub fn unknown_label(self) -> String {
        format!("Unknown {}", self.singular())
    }
}

/// `(id, label)` pair of a referenced entity, used for select options and
/// for resolving foreign keys to names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOption {
    pub id: u32,
    pub label: String,
}

/// A flat backend record that can be listed, sorted, filtered and edited.
pub trait Record: Clone + Serialize + DeserializeOwned + 'static {
    const KIND: EntityKind;

    fn id(&self) -> u32;

    /// Human-readable name used when another entity references this one.
    fn label(&self) -> String;

    /// Value of the field with the given JSON key.
    fn field(&self, key: &str) -> FieldValue;

    fn columns() -> &'static [ColumnSpec];

    fn filters() -> &'static [FilterSpec];

    /// JSON key of the identifier column.
    fn id_key() -> &'static str {
        Self::columns()
            .iter()
            .find(|c| c.kind == FieldKind::Id)
            .map(|c| c.key)
            .unwrap_or("id")
    }

    /// Entities referenced by this record's columns, in column order.
    fn references() -> Vec<EntityKind> {
        let mut out = Vec::new();
        for column in Self::columns() {
            if let FieldKind::Reference(target) = column.kind {
                if !out.contains(&target) {
                    out.push(target);
                }
            }
        }
        out
    }

    fn lookup_option(&self) -> LookupOption {
        LookupOption { id: self.id(), label: self.label() }
    }
}

/// `null` text columns decode as empty strings instead of failing the whole
/// list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decimal columns may arrive as JSON numbers or as strings (`"18.00"`).
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn text(value: &str) -> FieldValue {
    if value.is_empty() {
        FieldValue::Missing
    } else {
        FieldValue::Text(value.to_string())
    }
}

fn int(value: Option<u32>) -> FieldValue {
    value.map(|v| FieldValue::Int(v as i64)).unwrap_or(FieldValue::Missing)
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "OrderID")]
    pub order_id: u32,
    #[serde(rename = "CustomerID", default)]
    pub customer_id: Option<u32>,
    #[serde(rename = "OrderDate", default, deserialize_with = "null_as_empty")]
    pub order_date: String,
    #[serde(rename = "ShipperID", default)]
    pub shipper_id: Option<u32>,
}

const ORDER_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("OrderID", "Order ID", FieldKind::Id),
    ColumnSpec::new("CustomerID", "Customer", FieldKind::Reference(EntityKind::Customers)),
    ColumnSpec::new("OrderDate", "Order Date", FieldKind::Date),
    ColumnSpec::new("ShipperID", "Shipper", FieldKind::Reference(EntityKind::Shippers)),
];

const ORDER_FILTERS: &[FilterSpec] = &[
    FilterSpec::equals("CustomerID", "Customer", EntityKind::Customers),
    FilterSpec::equals("ShipperID", "Shipper", EntityKind::Shippers),
];

impl Record for Order {
    const KIND: EntityKind = EntityKind::Orders;

    fn id(&self) -> u32 {
        self.order_id
    }

    fn label(&self) -> String {
        format!("Order {}", self.order_id)
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "OrderID" => FieldValue::Int(self.order_id as i64),
            "CustomerID" => int(self.customer_id),
            "OrderDate" => FieldValue::date_or_text(&self.order_date),
            "ShipperID" => int(self.shipper_id),
            _ => FieldValue::Missing,
        }
    }

    fn columns() -> &'static [ColumnSpec] {
        ORDER_COLUMNS
    }

    fn filters() -> &'static [FilterSpec] {
        ORDER_FILTERS
    }
}

// ---------------------------------------------------------------------------
// Shippers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipper {
    #[serde(rename = "ShipperID")]
    pub shipper_id: u32,
    #[serde(rename = "ShipperName", default, deserialize_with = "null_as_empty")]
    pub shipper_name: String,
    #[serde(rename = "Phone", default, deserialize_with = "null_as_empty")]
    pub phone: String,
}

const SHIPPER_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("ShipperID", "Shipper ID", FieldKind::Id),
    ColumnSpec::new("ShipperName", "Shipper Name", FieldKind::Text),
    ColumnSpec::new("Phone", "Phone", FieldKind::Text),
];

const SHIPPER_FILTERS: &[FilterSpec] = &[FilterSpec::contains("ShipperName", "Shipper Name")];

impl Record for Shipper {
    const KIND: EntityKind = EntityKind::Shippers;

    fn id(&self) -> u32 {
        self.shipper_id
    }

    fn label(&self) -> String {
        self.shipper_name.clone()
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "ShipperID" => FieldValue::Int(self.shipper_id as i64),
            "ShipperName" => text(&self.shipper_name),
            "Phone" => text(&self.phone),
            _ => FieldValue::Missing,
        }
    }

    fn columns() -> &'static [ColumnSpec] {
        SHIPPER_COLUMNS
    }

    fn filters() -> &'static [FilterSpec] {
        SHIPPER_FILTERS
    }
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "CustomerID")]
    pub customer_id: u32,
    #[serde(rename = "CustomerName", default, deserialize_with = "null_as_empty")]
    pub customer_name: String,
    #[serde(rename = "ContactName", default, deserialize_with = "null_as_empty")]
    pub contact_name: String,
    #[serde(rename = "Address", default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(rename = "City", default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(rename = "PostalCode", default, deserialize_with = "null_as_empty")]
    pub postal_code: String,
    #[serde(rename = "Country", default, deserialize_with = "null_as_empty")]
    pub country: String,
}

const CUSTOMER_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("CustomerID", "Customer ID", FieldKind::Id),
    ColumnSpec::new("CustomerName", "Customer Name", FieldKind::Text),
    ColumnSpec::new("ContactName", "Contact Name", FieldKind::Text),
    ColumnSpec::new("Address", "Address", FieldKind::Text),
    ColumnSpec::new("City", "City", FieldKind::Text),
    ColumnSpec::new("PostalCode", "Postal Code", FieldKind::Text),
    ColumnSpec::new("Country", "Country", FieldKind::Text),
];

const CUSTOMER_FILTERS: &[FilterSpec] = &[
    FilterSpec::contains("CustomerName", "Customer Name"),
    FilterSpec::contains("Country", "Country"),
];

impl Record for Customer {
    const KIND: EntityKind = EntityKind::Customers;

    fn id(&self) -> u32 {
        self.customer_id
    }

    fn label(&self) -> String {
        self.customer_name.clone()
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "CustomerID" => FieldValue::Int(self.customer_id as i64),
            "CustomerName" => text(&self.customer_name),
            "ContactName" => text(&self.contact_name),
            "Address" => text(&self.address),
            "City" => text(&self.city),
            "PostalCode" => text(&self.postal_code),
            "Country" => text(&self.country),
            _ => FieldValue::Missing,
        }
    }

    fn columns() -> &'static [ColumnSpec] {
        CUSTOMER_COLUMNS
    }

    fn filters() -> &'static [FilterSpec] {
        CUSTOMER_FILTERS
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ProductID")]
    pub product_id: u32,
    #[serde(rename = "ProductName", default, deserialize_with = "null_as_empty")]
    pub product_name: String,
    #[serde(rename = "SupplierID", default)]
    pub supplier_id: Option<u32>,
    #[serde(rename = "CategoryID", default)]
    pub category_id: Option<u32>,
    #[serde(rename = "Unit", default, deserialize_with = "null_as_empty")]
    pub unit: String,
    #[serde(rename = "Price", default, deserialize_with = "lenient_decimal")]
    pub price: Option<f64>,
}

const PRODUCT_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("ProductID", "Product ID", FieldKind::Id),
    ColumnSpec::new("ProductName", "Product Name", FieldKind::Text),
    ColumnSpec::new("SupplierID", "Supplier", FieldKind::Reference(EntityKind::Suppliers)),
    ColumnSpec::new("CategoryID", "Category", FieldKind::Reference(EntityKind::Categories)),
    ColumnSpec::new("Unit", "Unit", FieldKind::Text),
    ColumnSpec::new("Price", "Price", FieldKind::Decimal),
];

const PRODUCT_FILTERS: &[FilterSpec] = &[
    FilterSpec::contains("ProductName", "Product Name"),
    FilterSpec::equals("CategoryID", "Category", EntityKind::Categories),
    FilterSpec::equals("SupplierID", "Supplier", EntityKind::Suppliers),
];

impl Record for Product {
    const KIND: EntityKind = EntityKind::Products;

    fn id(&self) -> u32 {
        self.product_id
    }

    fn label(&self) -> String {
        self.product_name.clone()
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "ProductID" => FieldValue::Int(self.product_id as i64),
            "ProductName" => text(&self.product_name),
            "SupplierID" => int(self.supplier_id),
            "CategoryID" => int(self.category_id),
            "Unit" => text(&self.unit),
            "Price" => self.price.map(FieldValue::Float).unwrap_or(FieldValue::Missing),
            _ => FieldValue::Missing,
        }
    }

    fn columns() -> &'static [ColumnSpec] {
        PRODUCT_COLUMNS
    }

    fn filters() -> &'static [FilterSpec] {
        PRODUCT_FILTERS
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "CategoryID")]
    pub category_id: u32,
    #[serde(rename = "CategoryName", default, deserialize_with = "null_as_empty")]
    pub category_name: String,
    #[serde(rename = "Description", default, deserialize_with = "null_as_empty")]
    pub description: String,
}

const CATEGORY_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("CategoryID", "Category ID", FieldKind::Id),
    ColumnSpec::new("CategoryName", "Category Name", FieldKind::Text),
    ColumnSpec::new("Description", "Description", FieldKind::Text),
];

const CATEGORY_FILTERS: &[FilterSpec] = &[FilterSpec::contains("CategoryName", "Category Name")];

impl Record for Category {
    const KIND: EntityKind = EntityKind::Categories;

    fn id(&self) -> u32 {
        self.category_id
    }

    fn label(&self) -> String {
        self.category_name.clone()
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "CategoryID" => FieldValue::Int(self.category_id as i64),
            "CategoryName" => text(&self.category_name),
            "Description" => text(&self.description),
            _ => FieldValue::Missing,
        }
    }

    fn columns() -> &'static [ColumnSpec] {
        CATEGORY_COLUMNS
    }

    fn filters() -> &'static [FilterSpec] {
        CATEGORY_FILTERS
    }
}

// ---------------------------------------------------------------------------
// Suppliers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "SupplierID")]
    pub supplier_id: u32,
    #[serde(rename = "SupplierName", default, deserialize_with = "null_as_empty")]
    pub supplier_name: String,
    #[serde(rename = "ContactName", default, deserialize_with = "null_as_empty")]
    pub contact_name: String,
    #[serde(rename = "Address", default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(rename = "City", default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(rename = "PostalCode", default, deserialize_with = "null_as_empty")]
    pub postal_code: String,
    #[serde(rename = "Country", default, deserialize_with = "null_as_empty")]
    pub country: String,
    #[serde(rename = "Phone", default, deserialize_with = "null_as_empty")]
    pub phone: String,
}

const SUPPLIER_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("SupplierID", "Supplier ID", FieldKind::Id),
    ColumnSpec::new("SupplierName", "Supplier Name", FieldKind::Text),
    ColumnSpec::new("ContactName", "Contact Name", FieldKind::Text),
    ColumnSpec::new("Address", "Address", FieldKind::Text),
    ColumnSpec::new("City", "City", FieldKind::Text),
    ColumnSpec::new("PostalCode", "Postal Code", FieldKind::Text),
    ColumnSpec::new("Country", "Country", FieldKind::Text),
    ColumnSpec::new("Phone", "Phone", FieldKind::Text),
];

const SUPPLIER_FILTERS: &[FilterSpec] = &[
    FilterSpec::contains("SupplierName", "Supplier Name"),
    FilterSpec::contains("Country", "Country"),
];

impl Record for Supplier {
    const KIND: EntityKind = EntityKind::Suppliers;

    fn id(&self) -> u32 {
        self.supplier_id
    }

    fn label(&self) -> String {
        self.supplier_name.clone()
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "SupplierID" => FieldValue::Int(self.supplier_id as i64),
            "SupplierName" => text(&self.supplier_name),
            "ContactName" => text(&self.contact_name),
            "Address" => text(&self.address),
            "City" => text(&self.city),
            "PostalCode" => text(&self.postal_code),
            "Country" => text(&self.country),
            "Phone" => text(&self.phone),
            _ => FieldValue::Missing,
        }
    }

    fn columns() -> &'static [ColumnSpec] {
        SUPPLIER_COLUMNS
    }

    fn filters() -> &'static [FilterSpec] {
        SUPPLIER_FILTERS
    }
}

// ---------------------------------------------------------------------------
// Lookup decoding
// ---------------------------------------------------------------------------

fn options_of<T: Record>(value: serde_json::Value) -> Result<Vec<LookupOption>, serde_json::Error> {
    let records: Vec<T> = serde_json::from_value(value)?;
    Ok(records.iter().map(Record::lookup_option).collect())
}

/// Decode a fetched collection of `kind` into lookup options.
pub fn lookup_options(
    kind: EntityKind,
    value: serde_json::Value,
) -> Result<Vec<LookupOption>, serde_json::Error> {
    match kind {
        EntityKind::Products => options_of::<Product>(value),
        EntityKind::Categories => options_of::<Category>(value),
        EntityKind::Suppliers => options_of::<Supplier>(value),
        EntityKind::Customers => options_of::<Customer>(value),
        EntityKind::Orders => options_of::<Order>(value),
        EntityKind::Shippers => options_of::<Shipper>(value),
    }
}

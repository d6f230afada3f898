//! Sub-reducers the root `update.rs` delegates to.
//!
//! Every entity page shares the same generic list reducer; the entity type
//! parameter supplies columns, filters and JSON shape.

pub mod list_page;

pub use list_page::ListPage;

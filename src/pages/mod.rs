// src/pages/mod.rs
//
// Page-level components, one per entity. Every page is the generic list
// reducer specialised for an entity type; `list` mounts whichever page is
// active into the DOM.

pub mod list;

use crate::messages::{Command, Message};
use crate::models::{Category, Customer, EntityKind, Order, Product, Shipper, Supplier};
use crate::reducers::ListPage;
use crate::views::PageView;

/// A mounted page: owns its local view state and turns messages into
/// commands.
pub trait Page {
    fn kind(&self) -> EntityKind;

    /// Commands issued when the page is mounted (list + lookup fetches).
    fn mount(&self) -> Vec<Command>;

    fn update(&mut self, msg: Message) -> Vec<Command>;

    fn view(&self) -> PageView;
}

pub fn page_for(kind: EntityKind) -> Box<dyn Page> {
    match kind {
        EntityKind::Products => Box::new(ListPage::<Product>::new()),
        EntityKind::Categories => Box::new(ListPage::<Category>::new()),
        EntityKind::Suppliers => Box::new(ListPage::<Supplier>::new()),
        EntityKind::Customers => Box::new(ListPage::<Customer>::new()),
        EntityKind::Orders => Box::new(ListPage::<Order>::new()),
        EntityKind::Shippers => Box::new(ListPage::<Shipper>::new()),
    }
}

//! Hash-based routes: `#/orders`, `#/shippers`, …

use crate::models::EntityKind;

/// Page shown for an empty or unknown hash.
pub const DEFAULT_ROUTE: EntityKind = EntityKind::Products;

/// Parse `location.hash` (with or without the leading `#`/`/`).
pub fn route_from_hash(hash: &str) -> EntityKind {
    let path = hash.trim_start_matches('#').trim_start_matches('/');
    let path = path.split(['/', '?']).next().unwrap_or("");
    EntityKind::from_path(path).unwrap_or(DEFAULT_ROUTE)
}

pub fn hash_for(kind: EntityKind) -> String {
    format!("#/{}", kind.path())
}

/// Current route read from the browser location.
pub fn current_route() -> EntityKind {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| route_from_hash(&hash))
        .unwrap_or(DEFAULT_ROUTE)
}

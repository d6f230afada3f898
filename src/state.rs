use std::cell::RefCell;

use crate::messages::{Command, Message};
use crate::models::EntityKind;
use crate::pages::{page_for, Page};
use crate::routing::DEFAULT_ROUTE;
use crate::update::update;

// Store global application state
pub struct AppState {
    // Entity page selected by the URL hash
    pub route: EntityKind,
    // The mounted page with its local view state; replaced on navigation
    pub page: Box<dyn Page>,
    // Set once the first page has been mounted into the DOM
    pub mounted: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: DEFAULT_ROUTE,
            page: page_for(DEFAULT_ROUTE),
            mounted: false,
        }
    }

    /// Run the reducer and hand back the side effects it requested.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

pub fn dispatch_global_message(msg: Message) {
    // 1. Perform state updates and collect commands
    let commands = APP_STATE.with(|state| crate::mut_borrow!(state).dispatch(msg));

    // 2. Execute commands after state borrow is dropped
    for cmd in commands {
        crate::command_executors::execute(cmd);
    }
}

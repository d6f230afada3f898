// src/update.rs
//
// Root reducer: navigation swaps the mounted page, everything else belongs to
// the page that is currently mounted.
//
use crate::messages::{Command, Message, RenderScope};
use crate::pages::page_for;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    match msg {
        Message::Navigate(kind) => {
            // Pages share nothing: a fresh page refetches its own data.
            state.route = kind;
            state.page = page_for(kind);
            state.mounted = true;
            let mut commands = vec![Command::HighlightNav(kind), Command::Render(RenderScope::Page)];
            commands.extend(state.page.mount());
            commands
        }
        other => state.page.update(other),
    }
}

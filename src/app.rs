//! Root application component and context providers.

use boards::BoardStore;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::boards::BoardsPage;
use crate::state::ui::UiState;

/// Root application component.
///
/// Owns the board store and UI state as signals and provides both to the
/// component tree. Nothing below reaches for a global.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = RwSignal::new(BoardStore::seeded());
    let ui = RwSignal::new(UiState::default());

    provide_context(store);
    provide_context(ui);

    view! {
        <Title text="Boards"/>
        <BoardsPage/>
    }
}

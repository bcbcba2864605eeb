//! Boards page: new-board input, the board list, and the rename dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The board list is a pure function of the store signal. Any command that
//! changes the store re-renders the list; UI-only state (drafts, dialog,
//! banner) is read by the elements that show it.

use boards::BoardStore;
use boards::Command;
use boards::consts::NEW_BOARD_PLACEHOLDER;
use leptos::prelude::*;

use crate::components::board_panel::BoardPanel;
use crate::components::rename_dialog::RenameDialog;
use crate::state::ui::UiState;
use crate::util::dispatch::dispatch;
use crate::util::dom::is_submit_key;

/// The single application screen.
#[component]
pub fn BoardsPage() -> impl IntoView {
    let store = expect_context::<RwSignal<BoardStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let submit_board = move || {
        let title = ui.try_update(UiState::take_board_draft).unwrap_or_default();
        dispatch(store, ui, Command::AddBoard { title });
    };

    view! {
        <div class="boards-page">
            <header class="boards-page__header">
                <input
                    class="new-board-input"
                    type="text"
                    placeholder=NEW_BOARD_PLACEHOLDER
                    prop:value=move || ui.with(|u| u.new_board_draft.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ui.update(|u| u.new_board_draft = value);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if is_submit_key(&ev.key()) {
                            ev.prevent_default();
                            submit_board();
                        }
                    }
                />
            </header>

            <Show when=move || ui.with(|u| u.error.is_some())>
                <p class="boards-page__error" role="alert" on:click=move |_| ui.update(|u| u.error = None)>
                    {move || ui.with(|u| u.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <div class="boards">
                {move || {
                    store
                        .with(|s| s.boards().to_vec())
                        .into_iter()
                        .map(|board| view! { <BoardPanel board=board/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || ui.with(|u| u.rename.is_open())>
                <RenameDialog/>
            </Show>
        </div>
    }
}

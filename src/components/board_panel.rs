//! One board: header actions, clickable title, task list, and new-task input.
//!
//! DESIGN
//! ======
//! Rendered from a snapshot of the board taken when the list re-renders.
//! Only the new-task input reads live UI state, so typing does not rebuild
//! the panel. Adding a task rebuilds it, so the fresh input takes focus back
//! when `UiState` asks for it.

use boards::consts::NEW_TASK_PLACEHOLDER;
use boards::{Board, BoardStore, Command};
use leptos::prelude::*;

use crate::components::task_item::TaskItem;
use crate::state::ui::UiState;
use crate::util::dispatch::dispatch;
use crate::util::dom::is_submit_key;

/// A board container with duplicate/delete controls and its tasks.
#[component]
pub fn BoardPanel(board: Board) -> impl IntoView {
    let store = expect_context::<RwSignal<BoardStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let board_id = board.id();
    let title = board.title().to_owned();
    let board_attr = board_id.to_string();
    let input_board_attr = board_attr.clone();

    let on_title_click = {
        let title = title.clone();
        move |_| ui.update(|u| u.rename.open(board_id, &title))
    };

    let task_input_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move || {
        let Some(input) = task_input_ref.get() else {
            return;
        };
        if ui.try_update_untracked(|u| u.take_task_focus(board_id)).unwrap_or(false) {
            let _ = input.focus();
        }
    });

    let submit_task = move || {
        let name = ui.try_update(|u| u.take_task_draft(board_id)).unwrap_or_default();
        dispatch(store, ui, Command::AddTask { board_id, name });
    };

    let tasks = board
        .tasks()
        .iter()
        .cloned()
        .map(|task| view! { <TaskItem board_id=board_id task=task/> })
        .collect::<Vec<_>>();

    view! {
        <div class="board" data-board-id={board_attr}>
            <div class="row">
                <button
                    class="duplicate-button"
                    on:click=move |_| dispatch(store, ui, Command::DuplicateBoard { board_id })
                >
                    "Duplicate board"
                </button>
                <button
                    class="delete-button"
                    title="Delete board"
                    aria-label="Delete board"
                    on:click=move |_| dispatch(store, ui, Command::DeleteBoard { board_id })
                >
                    "X"
                </button>
            </div>
            <p class="board-title" title="Click to rename" on:click=on_title_click>
                {title}
            </p>
            <ul class="tasks">{tasks}</ul>
            <input
                node_ref=task_input_ref
                class="new-task-input"
                type="text"
                data-board-id=input_board_attr
                placeholder=NEW_TASK_PLACEHOLDER
                prop:value=move || ui.with(|u| u.task_draft(board_id).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ui.update(|u| u.set_task_draft(board_id, value));
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if is_submit_key(&ev.key()) {
                        ev.prevent_default();
                        submit_task();
                    }
                }
            />
        </div>
    }
}

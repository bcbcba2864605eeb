//! One task row: completion checkbox, name label, and delete button.

use boards::{BoardId, BoardStore, Command, Task};
use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dispatch::dispatch;
use crate::util::dom::checkbox_id;

/// A task row bound to `(board_id, task.id)`.
#[component]
pub fn TaskItem(board_id: BoardId, task: Task) -> impl IntoView {
    let store = expect_context::<RwSignal<BoardStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let task_id = task.id;
    let completed = task.completed;
    let input_id = checkbox_id(board_id, task_id);

    view! {
        <li
            class="task"
            class:completed=completed
            data-board-id={board_id.to_string()}
            data-task-id={task_id.to_string()}
        >
            <input
                id={input_id.clone()}
                class="checkbox"
                type="checkbox"
                prop:checked=completed
                on:click=move |_| dispatch(store, ui, Command::CompleteTask { board_id, task_id })
            />
            <label class="task-name" for=input_id>
                {task.name}
            </label>
            <button
                class="delete-button"
                title="Delete task"
                aria-label="Delete task"
                on:click=move |_| dispatch(store, ui, Command::DeleteTask { board_id, task_id })
            >
                "X"
            </button>
        </li>
    }
}

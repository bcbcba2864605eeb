//! Modal dialog for renaming a board.
//!
//! Replaces a blocking prompt: the dialog's state lives in
//! [`UiState::rename`] and the rest of the page keeps running while it is
//! open.

use boards::BoardStore;
use boards::consts::RENAME_PROMPT;
use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dispatch::submit_rename;
use crate::util::dom::{is_cancel_key, is_submit_key};

/// Rename dialog for the board captured in `UiState::rename`.
#[component]
pub fn RenameDialog() -> impl IntoView {
    let store = expect_context::<RwSignal<BoardStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let submit = Callback::new(move |()| submit_rename(store, ui));
    let on_cancel = Callback::new(move |()| ui.update(|u| u.rename.cancel()));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{RENAME_PROMPT}</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        autofocus=true
                        placeholder=move || ui.with(|u| u.rename.original.clone())
                        prop:value=move || ui.with(|u| u.rename.draft.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ui.update(|u| u.rename.set_draft(value));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            let key = ev.key();
                            if is_submit_key(&key) {
                                ev.prevent_default();
                                submit.run(());
                            } else if is_cancel_key(&key) {
                                on_cancel.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || ui.with(|u| u.rename.error.is_some())>
                    <p class="dialog__error" role="alert">
                        {move || ui.with(|u| u.rename.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Rename"
                    </button>
                </div>
            </div>
        </div>
    }
}

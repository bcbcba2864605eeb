//! Command dispatch from components into the board store.
//!
//! Every handler funnels through [`dispatch`]: apply the command to the store
//! signal, then fold the result into UI state. Signal subscribers re-render;
//! no handler touches the DOM.

use boards::{BoardStore, Command, StoreError};
use leptos::prelude::{RwSignal, Update, WithUntracked};
use tracing::{debug, warn};

use crate::state::ui::UiState;

/// Apply a command and record its outcome.
pub fn dispatch(store: RwSignal<BoardStore>, ui: RwSignal<UiState>, command: Command) {
    let Some(result) = store.try_update(|s| s.apply(command)) else {
        warn!("board store disposed; command dropped");
        return;
    };
    match &result {
        Ok(event) => debug!(?event, "command applied"),
        Err(StoreError::EmptyInput(field)) => debug!(field, "empty input ignored"),
        Err(err) => warn!(error = %err, "command rejected"),
    }
    ui.update(|u| u.record(&result));
}

/// Submit the open rename dialog against the store.
pub fn submit_rename(store: RwSignal<BoardStore>, ui: RwSignal<UiState>) {
    let mut dialog = ui.with_untracked(|u| u.rename.clone());
    match store.try_update(|s| dialog.submit(s)) {
        Some(Ok(())) => debug!("board renamed"),
        Some(Err(err)) => debug!(error = %err, "rename rejected"),
        None => warn!("board store disposed; rename dropped"),
    }
    ui.update(|u| u.rename = dialog);
}

//! Shared constants for the boards crate.

// ── Seed data ───────────────────────────────────────────────────

/// Title of the board every fresh session starts with.
pub const SEED_BOARD_TITLE: &str = "Pessoal";

/// Tasks of the seeded board as `(name, completed)`, in display order.
/// Ids are assigned from 1 in this order.
pub const SEED_TASKS: [(&str, bool); 5] = [
    ("tarefa 1", false),
    ("tarefa 2", false),
    ("tarefa 3", true),
    ("tarefa 4", false),
    ("tarefa 5", true),
];

// ── Ids ─────────────────────────────────────────────────────────

/// First id handed out by an empty board or store.
pub const FIRST_ID: u64 = 1;

// ── Text ────────────────────────────────────────────────────────

/// Appended to the title of a duplicated board.
pub const COPY_SUFFIX: &str = " Copy";

/// Placeholder of the per-board new-task input.
pub const NEW_TASK_PLACEHOLDER: &str = "Nova tarefa";

/// Placeholder of the page-level new-board input.
pub const NEW_BOARD_PLACEHOLDER: &str = "Novo board";

/// Heading of the rename dialog.
pub const RENAME_PROMPT: &str = "Novo titulo do board";

/// Shown when a rename is submitted with an empty title.
pub const RENAME_EMPTY_ERROR: &str = "Insira o novo título!";

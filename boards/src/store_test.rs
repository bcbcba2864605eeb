use super::*;

fn task_ids(store: &BoardStore, board_id: BoardId) -> Vec<TaskId> {
    store.board(board_id).unwrap().tasks().iter().map(|t| t.id).collect()
}

// =============================================================
// Seed
// =============================================================

#[test]
fn seeded_store_has_personal_board() {
    let store = BoardStore::seeded();
    assert_eq!(store.len(), 1);
    let board = store.board(1).unwrap();
    assert_eq!(board.title(), "Pessoal");
    assert_eq!(task_ids(&store, 1), vec![1, 2, 3, 4, 5]);
    let completed: Vec<TaskId> = board.tasks().iter().filter(|t| t.completed).map(|t| t.id).collect();
    assert_eq!(completed, vec![3, 5]);
    assert_eq!(store.next_board_id(), 2);
}

#[test]
fn default_store_is_empty() {
    let store = BoardStore::default();
    assert!(store.is_empty());
    assert_eq!(store.next_board_id(), 1);
}

// =============================================================
// Boards
// =============================================================

#[test]
fn add_board_appends_with_next_id() {
    let mut store = BoardStore::seeded();
    let id = store.add_board("Trabalho").unwrap();
    assert_eq!(id, 2);
    assert_eq!(store.boards().last().map(Board::title), Some("Trabalho"));
    assert!(store.board(2).unwrap().tasks().is_empty());
}

#[test]
fn add_board_on_empty_store_starts_at_one() {
    let mut store = BoardStore::new();
    assert_eq!(store.add_board("First"), Ok(1));
}

#[test]
fn deleting_only_board_empties_store() {
    let mut store = BoardStore::seeded();
    let removed = store.delete_board(1);
    assert_eq!(removed.map(|b| b.id()), Some(1));
    assert!(store.is_empty());
}

#[test]
fn delete_missing_board_is_noop() {
    let mut store = BoardStore::seeded();
    assert!(store.delete_board(9).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn board_ids_are_not_reused_after_deleting_last() {
    let mut store = BoardStore::seeded();
    let second = store.add_board("B").unwrap();
    store.delete_board(second);
    assert_eq!(store.add_board("C"), Ok(3));
}

#[test]
fn duplicate_board_appends_copy() {
    let mut store = BoardStore::seeded();
    store.add_board("Other").unwrap();
    let copy_id = store.duplicate_board(1).unwrap();
    assert_eq!(copy_id, 3);
    assert_eq!(store.boards().last().map(Board::id), Some(3));

    let copy = store.board(copy_id).unwrap();
    assert_eq!(copy.title(), "Pessoal Copy");
    assert_eq!(copy.tasks(), store.board(1).unwrap().tasks());
}

#[test]
fn duplicate_board_copy_mutates_independently() {
    let mut store = BoardStore::seeded();
    let copy_id = store.duplicate_board(1).unwrap();
    store.complete_task(copy_id, 1).unwrap();
    store.delete_task(copy_id, 2);

    assert!(!store.board(1).unwrap().task(1).unwrap().completed);
    assert_eq!(task_ids(&store, 1), vec![1, 2, 3, 4, 5]);
    assert_eq!(task_ids(&store, copy_id), vec![1, 3, 4, 5]);
}

#[test]
fn duplicate_missing_board_reports_not_found() {
    let mut store = BoardStore::seeded();
    assert_eq!(store.duplicate_board(5), Err(StoreError::BoardNotFound(5)));
    assert_eq!(store.len(), 1);
}

#[test]
fn rename_board_updates_title() {
    let mut store = BoardStore::seeded();
    store.rename_board(1, "Casa").unwrap();
    assert_eq!(store.board(1).unwrap().title(), "Casa");
}

#[test]
fn rename_board_with_empty_title_is_rejected() {
    let mut store = BoardStore::seeded();
    assert_eq!(store.rename_board(1, ""), Err(StoreError::EmptyInput("title")));
    assert_eq!(store.board(1).unwrap().title(), "Pessoal");
}

#[test]
fn rename_missing_board_reports_not_found() {
    let mut store = BoardStore::seeded();
    assert_eq!(store.rename_board(4, "x"), Err(StoreError::BoardNotFound(4)));
}

// =============================================================
// Tasks
// =============================================================

#[test]
fn add_task_to_seeded_board_gets_id_six() {
    let mut store = BoardStore::seeded();
    let id = store.add_task(1, "buy milk").unwrap();
    assert_eq!(id, 6);
    let task = store.board(1).unwrap().task(6).unwrap();
    assert_eq!(task.name, "buy milk");
    assert!(!task.completed);
}

#[test]
fn sequential_add_task_ids_increase_by_one() {
    let mut store = BoardStore::seeded();
    let board_id = store.add_board("Fresh").unwrap();
    let ids: Vec<TaskId> = ["a", "b", "c"].iter().map(|n| store.add_task(board_id, n).unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn add_task_with_empty_name_is_rejected() {
    let mut store = BoardStore::seeded();
    assert_eq!(store.add_task(1, ""), Err(StoreError::EmptyInput("task name")));
    assert_eq!(task_ids(&store, 1).len(), 5);
}

#[test]
fn add_task_accepts_whitespace_name_as_typed() {
    let mut store = BoardStore::seeded();
    let id = store.add_task(1, " ").unwrap();
    assert_eq!(store.board(1).unwrap().task(id).map(|t| t.name.as_str()), Some(" "));
}

#[test]
fn add_task_to_missing_board_reports_not_found() {
    let mut store = BoardStore::seeded();
    assert_eq!(store.add_task(3, "x"), Err(StoreError::BoardNotFound(3)));
}

#[test]
fn delete_task_keeps_other_tasks_in_order() {
    let mut store = BoardStore::seeded();
    let removed = store.delete_task(1, 3).unwrap();
    assert_eq!(removed.name, "tarefa 3");
    assert_eq!(task_ids(&store, 1), vec![1, 2, 4, 5]);
}

#[test]
fn delete_task_on_missing_board_or_task_is_noop() {
    let mut store = BoardStore::seeded();
    assert!(store.delete_task(9, 1).is_none());
    assert!(store.delete_task(1, 9).is_none());
    assert_eq!(task_ids(&store, 1).len(), 5);
}

#[test]
fn complete_task_toggles_flag() {
    let mut store = BoardStore::seeded();
    assert!(store.complete_task(1, 1).unwrap());
    assert!(!store.complete_task(1, 3).unwrap());
}

#[test]
fn complete_task_missing_ids_report_errors() {
    let mut store = BoardStore::seeded();
    assert_eq!(store.complete_task(2, 1), Err(StoreError::BoardNotFound(2)));
    assert_eq!(store.complete_task(1, 8), Err(StoreError::TaskNotFound { board_id: 1, task_id: 8 }));
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn apply_reports_events() {
    let mut store = BoardStore::seeded();

    assert_eq!(
        store.apply(Command::AddBoard { title: "B".into() }),
        Ok(Event::BoardAdded { board_id: 2 })
    );
    assert_eq!(
        store.apply(Command::AddTask { board_id: 2, name: "t".into() }),
        Ok(Event::TaskAdded { board_id: 2, task_id: 1 })
    );
    assert_eq!(
        store.apply(Command::CompleteTask { board_id: 2, task_id: 1 }),
        Ok(Event::TaskToggled { board_id: 2, task_id: 1, completed: true })
    );
    assert_eq!(
        store.apply(Command::DuplicateBoard { board_id: 2 }),
        Ok(Event::BoardDuplicated { source_id: 2, board_id: 3 })
    );
    assert_eq!(
        store.apply(Command::RenameBoard { board_id: 3, title: "C".into() }),
        Ok(Event::BoardRenamed { board_id: 3 })
    );
    assert_eq!(
        store.apply(Command::DeleteTask { board_id: 3, task_id: 1 }),
        Ok(Event::TaskDeleted { board_id: 3, task_id: 1 })
    );
    assert_eq!(store.apply(Command::DeleteBoard { board_id: 1 }), Ok(Event::BoardDeleted { board_id: 1 }));

    let titles: Vec<&str> = store.boards().iter().map(Board::title).collect();
    assert_eq!(titles, vec!["B", "C"]);
}

#[test]
fn apply_missing_delete_is_unchanged() {
    let mut store = BoardStore::seeded();
    assert_eq!(store.apply(Command::DeleteBoard { board_id: 9 }), Ok(Event::Unchanged));
    assert_eq!(store.apply(Command::DeleteTask { board_id: 1, task_id: 9 }), Ok(Event::Unchanged));
}

#[test]
fn apply_propagates_errors() {
    let mut store = BoardStore::seeded();
    assert_eq!(
        store.apply(Command::AddTask { board_id: 1, name: String::new() }),
        Err(StoreError::EmptyInput("task name"))
    );
    assert_eq!(
        store.apply(Command::CompleteTask { board_id: 1, task_id: 77 }),
        Err(StoreError::TaskNotFound { board_id: 1, task_id: 77 })
    );
}

// =============================================================
// Construction from boards
// =============================================================

#[test]
fn from_boards_continues_after_highest_id() {
    let store = BoardStore::from_boards(vec![Board::new(4, "a"), Board::new(2, "b")]).unwrap();
    assert_eq!(store.next_board_id(), 5);
    let ids: Vec<BoardId> = store.boards().iter().map(Board::id).collect();
    assert_eq!(ids, vec![4, 2]);
}

#[test]
fn from_boards_rejects_repeated_board_id() {
    let result = BoardStore::from_boards(vec![Board::new(3, "a"), Board::new(3, "b")]);
    assert_eq!(result.unwrap_err(), StoreError::DuplicateBoard(3));
}

#[test]
fn from_boards_rejects_board_id_without_successor() {
    let result = BoardStore::from_boards(vec![Board::new(u64::MAX, "last")]);
    assert_eq!(result.unwrap_err(), StoreError::IdExhausted(u64::MAX));
}

#[test]
fn add_board_stops_when_ids_run_out() {
    let mut store = BoardStore::from_boards(vec![Board::new(u64::MAX - 1, "edge")]).unwrap();
    assert_eq!(store.add_board("one more"), Err(StoreError::IdExhausted(u64::MAX)));
    assert_eq!(store.duplicate_board(u64::MAX - 1), Err(StoreError::IdExhausted(u64::MAX)));
    assert_eq!(store.len(), 1);
}

#[test]
fn add_task_maps_exhausted_task_ids() {
    let board = Board::with_tasks(1, "Full", vec![Task::new(u64::MAX - 1, "edge", false)]).unwrap();
    let mut store = BoardStore::from_boards(vec![board]).unwrap();
    assert_eq!(store.add_task(1, "x"), Err(StoreError::IdExhausted(u64::MAX)));
}

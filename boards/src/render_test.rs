use super::*;
use crate::model::Board;

#[test]
fn seeded_store_renders_every_task() {
    let text = to_text(&BoardStore::seeded());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "#1 Pessoal");
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], "    [ ]   1  tarefa 1");
    assert_eq!(lines[3], "    [x]   3  tarefa 3");
}

#[test]
fn empty_board_shows_placeholder() {
    let text = board_to_text(&Board::new(2, "Empty"));
    assert_eq!(text, "#2 Empty\n    (no tasks)\n");
}

#[test]
fn empty_store_shows_placeholder() {
    assert_eq!(to_text(&BoardStore::new()), "(no boards)\n");
}

#[test]
fn boards_are_separated_by_blank_line() {
    let mut store = BoardStore::seeded();
    store.add_board("Second").unwrap();
    let text = to_text(&store);
    assert!(text.contains("tarefa 5\n\n#2 Second\n"));
}

#[test]
fn json_is_array_of_wire_forms() {
    let mut store = BoardStore::new();
    let id = store.add_board("Solo").unwrap();
    store.add_task(id, "one").unwrap();
    let value: serde_json::Value = serde_json::from_str(&to_json(&store).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "id": 1, "title": "Solo", "tasks": [{ "id": 1, "name": "one", "completed": false }] }])
    );
}

use mailboard_core::response::interpret_response;
use mailboard_core::{Board, FetchError, Results};

fn fetch(board: &mut Board, status: u16, body: &str) {
    board.begin_fetch().expect("board is idle");
    assert!(board.trigger_disabled());
    assert_eq!(board.trigger_label(), "Fetching...");
    board.settle(interpret_response(status, body));
}

#[test]
fn successful_fetch_renders_items_and_restores_trigger() {
    let mut board = Board::default();
    fetch(
        &mut board,
        200,
        r#"{"tasks":[{"summary":"Reply to Bob","deadline":"2024-03-01"},{"summary":"Review PR"}]}"#,
    );

    assert!(!board.trigger_disabled());
    assert_eq!(board.trigger_label(), "Fetch Emails");
    assert_eq!(board.loading_message(), None);

    let items = board.results().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].summary, "Reply to Bob");
    assert_eq!(items[0].deadline, "2024-03-01");
    assert_eq!(items[1].summary, "Review PR");
    assert_eq!(items[1].deadline, "No deadline");
}

#[test]
fn server_error_replaces_previous_list() {
    let mut board = Board::default();
    fetch(&mut board, 200, r#"{"tasks":[{"summary":"old"}]}"#);
    assert_eq!(board.results().items().len(), 1);

    fetch(&mut board, 500, r#"{"error":"LLM timeout"}"#);

    assert_eq!(board.results(), &Results::Error("Error: LLM timeout".to_string()));
    assert!(board.results().items().is_empty());
    assert!(!board.trigger_disabled());
    assert_eq!(board.trigger_label(), "Fetch Emails");
}

#[test]
fn transport_failure_never_leaves_loading_active() {
    let mut board = Board::default();
    board.begin_fetch().expect("board is idle");
    board.tick();
    assert_eq!(board.loading_message(), Some("Analyzing content..."));

    board.settle(Err(FetchError::Transport("Failed to fetch".to_string())));

    assert_eq!(board.loading_message(), None);
    assert!(!board.trigger_disabled());
    assert_eq!(board.results().error(), Some("Error: Failed to fetch"));
}

#[test]
fn loading_messages_cycle_every_tick() {
    let mut board = Board::default();
    board.begin_fetch().expect("board is idle");

    let mut shown = vec![];
    for _ in 0..4 {
        shown.push(board.loading_message().map(str::to_string));
        board.tick();
    }

    assert_eq!(
        shown,
        vec![
            Some("Fetching emails...".to_string()),
            Some("Analyzing content...".to_string()),
            Some("Preparing tasks...".to_string()),
            Some("Fetching emails...".to_string()),
        ]
    );
}

#[test]
fn toggling_is_symmetric_per_item() {
    let mut board = Board::default();
    fetch(&mut board, 200, r#"{"tasks":[{"summary":"a"},{"summary":"b"},{"summary":"c"}]}"#);

    board.toggle_completed(1, true);
    let items = board.results().items();
    assert_eq!(items[1].container_class(), "task completed");
    assert_eq!(items[1].summary_class(), "summary crossed");
    assert_eq!(items[0].container_class(), "task");
    assert_eq!(items[2].container_class(), "task");

    board.toggle_completed(1, false);
    let items = board.results().items();
    assert_eq!(items[1].container_class(), "task");
    assert_eq!(items[1].summary_class(), "summary");
}

#[test]
fn details_modal_uses_placeholders_and_backdrop_dismissal() {
    let mut board = Board::default();
    fetch(
        &mut board,
        200,
        r#"{"tasks":[{"summary":"Review PR","detailed_tasks":"Check the migration script"}]}"#,
    );

    board.open_details(0);
    let details = board.modal().details().expect("modal visible").clone();
    assert_eq!(details.from, "Unknown sender");
    assert_eq!(details.subject, "No subject");
    assert_eq!(details.detailed_tasks, "Check the migration script");

    assert!(!board.backdrop_click(false));
    assert!(board.modal().is_visible());

    assert!(board.backdrop_click(true));
    assert!(!board.modal().is_visible());

    board.open_details(0);
    board.close_details();
    assert!(!board.modal().is_visible());
}

#[test]
fn malformed_task_fields_do_not_fail_the_list() {
    let mut board = Board::default();
    fetch(
        &mut board,
        200,
        r#"{"tasks":[{"summary":"a","deadline":20240301},{"summary":null,"deadline":"2024-03-01"}]}"#,
    );

    let items = board.results().items();
    assert_eq!(board.results().error(), None);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].summary, "a");
    assert_eq!(items[0].deadline, "No deadline");
    assert_eq!(items[1].summary, "");
    assert_eq!(items[1].deadline, "2024-03-01");
}

#[test]
fn details_follow_the_clicked_row() {
    let mut board = Board::default();
    fetch(
        &mut board,
        200,
        r#"{"tasks":[
            {"summary":"a","from":"alice@example.com"},
            {"summary":"b","from":"bob@example.com"},
            {"summary":"c","from":"carol@example.com","subject":"Q4 report"}
        ]}"#,
    );

    board.open_details(2);
    let details = board.modal().details().expect("modal visible");
    assert_eq!(details.from, "carol@example.com");
    assert_eq!(details.subject, "Q4 report");

    board.open_details(0);
    let details = board.modal().details().expect("modal visible");
    assert_eq!(details.from, "alice@example.com");
    assert_eq!(details.subject, "No subject");
}

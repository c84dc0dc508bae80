use taskboard_core::{
    Board, DragOverOutcome, InputRules, MemoryDataTransfer, MoveOutcome, ProjectStatus,
};

#[test]
fn submit_renders_card_in_active_column_only() {
    let mut board = Board::default();

    let id = board
        .submit("Build shed", "Weekend project", "5")
        .expect("valid submission");

    let active = board.column(ProjectStatus::Active).rendered();
    let finished = board.column(ProjectStatus::Finished).rendered();
    assert_eq!(active.items.len(), 1);
    assert_eq!(active.items[0].id, id);
    assert_eq!(active.items[0].assigned, "5 persons assigned");
    assert_eq!(active.items[0].description, "Weekend project");
    assert!(finished.items.is_empty());
    assert_eq!(active.renders, 1);
    assert_eq!(finished.renders, 1);
}

#[test]
fn rejected_submission_leaves_store_untouched() {
    let mut board = Board::default();

    let err = board
        .submit("Shed", "Weekend project", "5")
        .expect_err("title too short");

    assert_eq!(err.field(), "title");
    assert!(board.state().is_empty());
    assert_eq!(board.column(ProjectStatus::Active).rendered().renders, 0);
}

#[test]
fn custom_rules_are_applied() {
    let mut board = Board::new(InputRules {
        min_title_len: 1,
        min_description_len: 1,
        min_people: 1,
    });

    board.submit("x", "y", "1").expect("relaxed rules");
    assert_eq!(board.rules().min_people, 1);
    assert_eq!(
        board.column(ProjectStatus::Active).rendered().items[0].assigned,
        "1 person assigned"
    );
}

#[test]
fn full_drag_gesture_moves_card_between_columns() {
    let mut board = Board::default();
    let x = board
        .submit("Project x", "first one", "5")
        .expect("valid x");
    let y = board
        .submit("Project y", "second one", "6")
        .expect("valid y");

    let card = board.card(x.as_str()).expect("card for x");
    let mut transfer = MemoryDataTransfer::new();
    board.drag_start(&card, &mut transfer);

    assert_eq!(
        board.drag_over(ProjectStatus::Finished, &transfer),
        DragOverOutcome::Accept
    );
    assert!(board.column(ProjectStatus::Finished).target().is_droppable());
    board.drag_leave(ProjectStatus::Finished);
    assert!(!board.column(ProjectStatus::Finished).target().is_droppable());

    board.drag_over(ProjectStatus::Finished, &transfer);
    assert_eq!(
        board.drop_on(ProjectStatus::Finished, &transfer),
        Some(MoveOutcome::Moved)
    );
    board.drag_end(&card, &transfer);

    let active = board.column(ProjectStatus::Active).rendered();
    let finished = board.column(ProjectStatus::Finished).rendered();
    assert_eq!(
        active.items.iter().map(|c| c.id.clone()).collect::<Vec<_>>(),
        vec![y]
    );
    assert_eq!(
        finished.items.iter().map(|c| c.id.clone()).collect::<Vec<_>>(),
        vec![x]
    );
    assert_eq!(finished.renders, 3);
}

#[test]
fn dropping_on_own_column_does_not_redraw() {
    let mut board = Board::default();
    let x = board
        .submit("Project x", "first one", "5")
        .expect("valid x");
    let card = board.card(x.as_str()).expect("card for x");
    let mut transfer = MemoryDataTransfer::new();
    board.drag_start(&card, &mut transfer);

    assert_eq!(
        board.drop_on(ProjectStatus::Active, &transfer),
        Some(MoveOutcome::Unchanged)
    );
    assert_eq!(board.column(ProjectStatus::Active).rendered().renders, 1);
}

#[test]
fn unknown_card_lookup_returns_none() {
    let board = Board::default();
    assert!(board.card("missing").is_none());
}

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use taskboard_core::{MoveOutcome, Project, ProjectId, ProjectState, ProjectStatus};

/// Records every snapshot a listener receives.
fn record(state: &mut ProjectState) -> Rc<RefCell<Vec<Vec<Project>>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    state.add_listener(move |projects| sink.borrow_mut().push(projects));
    seen
}

fn ids(projects: &[Project]) -> Vec<ProjectId> {
    projects.iter().map(|p| p.id().clone()).collect()
}

#[test]
fn add_project_notifies_once_with_single_active_entry() {
    let mut state = ProjectState::new();
    let seen = record(&mut state);

    state.add_project("Build shed", "Weekend project", 5);

    assert_eq!(state.len(), 1);
    assert_eq!(state.projects()[0].status(), ProjectStatus::Active);
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].len(), 1);
    assert_eq!(seen[0][0].title(), "Build shed");
}

#[test]
fn generated_ids_are_pairwise_distinct() {
    let mut state = ProjectState::new();
    let created: Vec<ProjectId> = (0..200)
        .map(|i| state.add_project(format!("project {i}"), "description", 5))
        .collect();

    let unique: HashSet<&ProjectId> = created.iter().collect();
    assert_eq!(unique.len(), created.len());
}

#[test]
fn move_keeps_insertion_order_and_only_touches_target() {
    let mut state = ProjectState::new();
    let x = state.add_project("Project x", "first", 5);
    let y = state.add_project("Project y", "second", 6);
    let seen = record(&mut state);

    state.move_project(x.as_str(), ProjectStatus::Finished);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    let snapshot = &seen[0];
    assert_eq!(ids(snapshot), vec![x.clone(), y.clone()]);
    assert_eq!(snapshot[0].status(), ProjectStatus::Finished);
    assert_eq!(snapshot[1].status(), ProjectStatus::Active);
    assert_eq!(ids(state.projects()), vec![x, y]);
}

#[test]
fn repeated_identical_move_notifies_once() {
    let mut state = ProjectState::new();
    let id = state.add_project("Build shed", "Weekend project", 5);
    let seen = record(&mut state);

    assert_eq!(
        state.move_project(id.as_str(), ProjectStatus::Finished),
        MoveOutcome::Moved
    );
    assert_eq!(
        state.move_project(id.as_str(), ProjectStatus::Finished),
        MoveOutcome::Unchanged
    );

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(
        state.get(id.as_str()).map(Project::status),
        Some(ProjectStatus::Finished)
    );
}

#[test]
fn move_to_current_status_is_silent() {
    let mut state = ProjectState::new();
    let id = state.add_project("Build shed", "Weekend project", 5);
    let seen = record(&mut state);

    state.move_project(id.as_str(), ProjectStatus::Active);
    assert!(seen.borrow().is_empty());
}

#[test]
fn unknown_id_is_a_silent_noop() {
    let mut state = ProjectState::new();
    state.add_project("Build shed", "Weekend project", 5);
    let before = state.snapshot();
    let seen = record(&mut state);

    for status in ProjectStatus::ALL {
        assert_eq!(
            state.move_project("nonexistent", status),
            MoveOutcome::NotFound
        );
    }

    assert!(seen.borrow().is_empty());
    assert_eq!(state.snapshot(), before);
}

#[test]
fn mutating_a_received_snapshot_does_not_leak_into_store() {
    let mut state = ProjectState::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let sink = Rc::clone(&seen);
        state.add_listener(move |mut projects: Vec<Project>| {
            projects.clear();
            projects.push(Project::new("intruder", "injected", 1));
            sink.borrow_mut().push(projects.len());
        });
    }
    let later = record(&mut state);

    state.add_project("Build shed", "Weekend project", 5);
    state.add_project("Paint fence", "Two coats", 2);

    assert_eq!(state.len(), 2);
    assert!(state.projects().iter().all(|p| p.title() != "intruder"));
    let later = later.borrow();
    assert_eq!(later[1].len(), 2);
    assert_eq!(later[1][0].title(), "Build shed");
}

#[test]
fn listeners_fire_in_registration_order_and_duplicates_fire_twice() {
    let mut state = ProjectState::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let shared = {
        let order = Rc::clone(&order);
        move |_: Vec<Project>| order.borrow_mut().push("shared")
    };
    {
        let order = Rc::clone(&order);
        state.add_listener(move |_| order.borrow_mut().push("first"));
    }
    state.add_listener(shared.clone());
    state.add_listener(shared);

    state.add_project("Build shed", "Weekend project", 5);

    assert_eq!(*order.borrow(), vec!["first", "shared", "shared"]);
    assert_eq!(state.listener_count(), 3);
}

#[test]
fn removed_listener_no_longer_fires() {
    let mut state = ProjectState::new();
    let count = Rc::new(RefCell::new(0));
    let id = {
        let count = Rc::clone(&count);
        state.add_listener(move |_| *count.borrow_mut() += 1)
    };

    state.add_project("Build shed", "Weekend project", 5);
    assert!(state.remove_listener(id));
    state.add_project("Paint fence", "Two coats", 2);

    assert_eq!(*count.borrow(), 1);
    assert!(!state.remove_listener(id));
}

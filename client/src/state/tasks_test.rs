use super::*;

fn task(id: &str, project_id: &str) -> Task {
    Task {
        id: id.to_owned(),
        project_id: project_id.to_owned(),
        title: format!("Task {id}"),
        description: None,
        is_completed: false,
        created_at: 0,
    }
}

#[test]
fn for_project_filters_by_foreign_key() {
    let state = TasksState { items: vec![task("1", "a"), task("2", "b"), task("3", "a")], ..Default::default() };
    let ids: Vec<_> = state.for_project("a").into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn upsert_appends_unknown_and_replaces_known() {
    let mut state = TasksState { items: vec![task("1", "a")], ..Default::default() };
    state.upsert(task("2", "a"));
    let mut done = task("1", "a");
    done.is_completed = true;
    state.upsert(done);
    assert_eq!(state.items.len(), 2);
    assert!(state.find("1").is_some_and(|t| t.is_completed));
    assert_eq!(state.items[1].id, "2");
}

#[test]
fn remove_for_project_drops_only_that_project() {
    let mut state = TasksState { items: vec![task("1", "a"), task("2", "b")], ..Default::default() };
    state.remove_for_project("a");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].project_id, "b");
}

#[test]
fn remove_unknown_task_is_none() {
    let mut state = TasksState::default();
    assert!(state.remove("nope").is_none());
}

#[test]
fn apply_fetch_failure_records_error() {
    let mut state = TasksState::default();
    let ticket = state.begin_fetch();
    assert!(state.loading);
    assert_eq!(state.apply_fetch(ticket, Err("list tasks failed: 401".to_owned())), FetchOutcome::Apply);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("list tasks failed: 401"));
}

#[test]
fn apply_fetch_discards_list_that_raced_a_created_task() {
    let mut state = TasksState::default();
    let ticket = state.begin_fetch();
    state.upsert(task("new", "a"));

    let outcome = state.apply_fetch(ticket, Ok(vec![task("1", "a")]));
    assert_eq!(outcome, FetchOutcome::Stale);
    assert!(state.find("new").is_some());
    assert!(state.loading);
}

#[test]
fn removing_project_tasks_invalidates_in_flight_fetch() {
    let mut state = TasksState { items: vec![task("1", "a")], ..Default::default() };
    let ticket = state.begin_fetch();
    state.remove_for_project("a");
    assert_eq!(state.apply_fetch(ticket, Ok(vec![task("1", "a")])), FetchOutcome::Stale);
    assert!(state.items.is_empty());
}

#[test]
fn only_newest_overlapping_fetch_clears_loading() {
    let mut state = TasksState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();

    assert_eq!(state.apply_fetch(first, Ok(vec![task("old", "a")])), FetchOutcome::Superseded);
    assert!(state.loading);
    assert!(state.items.is_empty());

    assert_eq!(state.apply_fetch(second, Ok(vec![task("1", "a")])), FetchOutcome::Apply);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
}

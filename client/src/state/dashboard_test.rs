use super::*;

// =============================================================
// Helpers
// =============================================================

fn user(id: &str) -> User {
    User { id: id.to_owned(), name: format!("User {id}"), email: None }
}

fn project(id: &str, owner: &str) -> Project {
    Project {
        id: id.to_owned(),
        user_id: owner.to_owned(),
        name: format!("Project {id}"),
        description: None,
        is_pinned: false,
        created_at: 0,
    }
}

fn task(id: &str, project_id: &str, done: bool) -> Task {
    Task {
        id: id.to_owned(),
        project_id: project_id.to_owned(),
        title: format!("Task {id}"),
        description: None,
        is_completed: done,
        created_at: 0,
    }
}

// =============================================================
// DashboardSummary::build
// =============================================================

#[test]
fn no_user_yields_empty_summary() {
    let projects = vec![project("p1", "u1")];
    let tasks = vec![task("t1", "p1", true)];
    let summary = DashboardSummary::build(None, &projects, &tasks);
    assert_eq!(summary, DashboardSummary::default());
    assert!(summary.overflow_notice().is_none());
}

#[test]
fn counts_only_the_users_projects_and_their_tasks() {
    let me = user("u1");
    let projects = vec![project("p1", "u1"), project("p2", "u2"), project("p3", "u1")];
    let tasks = vec![
        task("t1", "p1", true),
        task("t2", "p2", true),
        task("t3", "p3", false),
        task("t4", "p3", true),
        task("t5", "orphan", true),
    ];
    let summary = DashboardSummary::build(Some(&me), &projects, &tasks);
    assert_eq!(summary.total_projects, 2);
    assert_eq!(summary.total_tasks, 3);
    assert_eq!(summary.completed_tasks, 2);
}

#[test]
fn recent_joins_tasks_to_their_own_project_in_store_order() {
    let me = user("u1");
    let projects = vec![project("p1", "u1"), project("p2", "u1")];
    let tasks = vec![task("t1", "p2", false), task("t2", "p1", false), task("t3", "p2", true)];
    let summary = DashboardSummary::build(Some(&me), &projects, &tasks);

    assert_eq!(summary.recent.len(), 2);
    assert_eq!(summary.recent[0].project.id, "p1");
    let p1_tasks: Vec<_> = summary.recent[0].tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(p1_tasks, vec!["t2"]);
    let p2_tasks: Vec<_> = summary.recent[1].tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(p2_tasks, vec!["t1", "t3"]);
}

#[test]
fn recent_is_capped_at_six_and_keeps_the_first_ones() {
    let me = user("u1");
    let projects: Vec<_> = (0..9).map(|i| project(&format!("p{i}"), "u1")).collect();
    let summary = DashboardSummary::build(Some(&me), &projects, &[]);

    assert_eq!(summary.total_projects, 9);
    assert_eq!(summary.recent.len(), DASHBOARD_PROJECT_LIMIT);
    let ids: Vec<_> = summary.recent.iter().map(|p| p.project.id.as_str()).collect();
    assert_eq!(ids, vec!["p0", "p1", "p2", "p3", "p4", "p5"]);
    assert!(summary.is_truncated());
    assert_eq!(
        summary.overflow_notice().as_deref(),
        Some("Showing 6 of 9 projects. View all projects for the complete list.")
    );
}

#[test]
fn exactly_six_projects_is_not_truncated() {
    let me = user("u1");
    let projects: Vec<_> = (0..6).map(|i| project(&format!("p{i}"), "u1")).collect();
    let summary = DashboardSummary::build(Some(&me), &projects, &[]);
    assert_eq!(summary.recent.len(), 6);
    assert!(!summary.is_truncated());
    assert!(summary.overflow_notice().is_none());
}

#[test]
fn other_users_projects_do_not_count_toward_the_cap() {
    let me = user("u1");
    let mut projects: Vec<_> = (0..5).map(|i| project(&format!("x{i}"), "u2")).collect();
    projects.push(project("mine", "u1"));
    let summary = DashboardSummary::build(Some(&me), &projects, &[]);
    assert_eq!(summary.total_projects, 1);
    assert_eq!(summary.recent[0].project.id, "mine");
}

// =============================================================
// join_tasks
// =============================================================

#[test]
fn join_tasks_gives_empty_list_for_projects_without_tasks() {
    let joined = join_tasks(&[project("p1", "u1")], &[task("t1", "p9", false)]);
    assert_eq!(joined.len(), 1);
    assert!(joined[0].tasks.is_empty());
}

// =============================================================
// pin_toggle_update
// =============================================================

#[test]
fn pin_toggle_negates_the_supplied_flag() {
    let projects = vec![project("p1", "u1")];
    let update = pin_toggle_update(&projects, "p1", false).unwrap();
    assert!(update.is_pinned);
    assert_eq!(update.name, "Project p1");

    let update = pin_toggle_update(&projects, "p1", true).unwrap();
    assert!(!update.is_pinned);
}

#[test]
fn pin_toggle_looks_up_any_cached_project() {
    let projects = vec![project("p1", "someone-else")];
    assert!(pin_toggle_update(&projects, "p1", false).is_some());
}

#[test]
fn pin_toggle_unknown_project_is_none() {
    assert!(pin_toggle_update(&[project("p1", "u1")], "nope", false).is_none());
}

// =============================================================
// load_error
// =============================================================

#[test]
fn load_error_prefers_projects_failure() {
    assert_eq!(
        load_error(Some("list projects failed: 500"), Some("list tasks failed: 500")),
        Some("list projects failed: 500".to_owned())
    );
}

#[test]
fn load_error_falls_back_to_tasks_failure() {
    assert_eq!(load_error(None, Some("list tasks failed: 401")), Some("list tasks failed: 401".to_owned()));
    assert_eq!(load_error(None, None), None);
}

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use common::*;
use connector::listing::*;
use connector::models::*;

fn ids<T, F: Fn(&T) -> &str>(items: &[&T], id: F) -> Vec<String> {
    items.iter().map(|item| id(*item).to_string()).collect()
}

#[test]
fn test_status_filter_keeps_only_exact_matches() {
    let employees = sample_employees();
    let query = ListQuery::new("ActiveEmployee", "", None);
    let view = derive_view(&employees, &query);

    assert_eq!(view.len(), 2);
    assert!(
        view.iter()
            .all(|e| e.employment_status == EmploymentStatus::ActiveEmployee)
    );
}

#[test]
fn test_status_filter_is_case_sensitive() {
    let employees = sample_employees();
    let view = derive_view(&employees, &ListQuery::new("activeemployee", "", None));
    assert!(view.is_empty());
}

#[test]
fn test_status_sentinel_returns_everything() {
    let employees = sample_employees();
    let projects = sample_projects();

    for sentinel in ["all", "All"] {
        let query = ListQuery::new(sentinel, "", None);
        assert_eq!(derive_view(&employees, &query).len(), employees.len());
        assert_eq!(derive_view(&projects, &query).len(), projects.len());
    }
}

#[test]
fn test_unknown_status_never_matches_a_filter() {
    let mut employees = sample_employees();
    employees[0].employment_status = EmploymentStatus::Unknown;

    let view = derive_view(&employees, &ListQuery::new("Unknown", "", None));
    assert!(view.is_empty());
}

#[test]
fn test_search_matches_any_field_ignoring_case() {
    let employees = sample_employees();

    let view = derive_view(&employees, &ListQuery::new("all", "BUDI", None));
    assert_eq!(ids(&view, |e: &Employee| e.id.as_str()), vec!["1"]);

    let view = derive_view(&employees, &ListQuery::new("all", "08125", None));
    assert_eq!(ids(&view, |e: &Employee| e.id.as_str()), vec!["5"]);

    let view = derive_view(&employees, &ListQuery::new("all", "bandung", None));
    assert_eq!(view.len(), employees.len());
}

#[test]
fn test_search_results_contain_the_term() {
    let projects = sample_projects();

    for term in ["a", "Maju", "shop", "rina", "zzz"] {
        let view = derive_view(&projects, &ListQuery::new("all", term, None));
        let term = term.to_lowercase();

        for project in view {
            assert!(
                project
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            );
        }
    }
}

#[test]
fn test_empty_search_returns_everything() {
    let projects = sample_projects();
    let view = derive_view(&projects, &ListQuery::new("all", "", None));
    assert_eq!(view.len(), projects.len());
}

#[test]
fn test_project_search_uses_client_and_manager_names() {
    let projects = sample_projects();

    let view = derive_view(&projects, &ListQuery::new("all", "toko", None));
    assert_eq!(ids(&view, |p: &Project| p.id.as_str()), vec!["p3"]);

    let view = derive_view(&projects, &ListQuery::new("all", "rina", None));
    assert_eq!(ids(&view, |p: &Project| p.id.as_str()), vec!["p1"]);

    // p2 only references its client by id, so there is no name to match.
    let view = derive_view(&projects, &ListQuery::new("all", "c2", None));
    assert!(view.is_empty());
}

#[test]
fn test_filters_combine() {
    let projects = sample_projects();
    let view = derive_view(&projects, &ListQuery::new("OnProgress", "dashboard", None));
    assert_eq!(ids(&view, |p: &Project| p.id.as_str()), vec!["p4"]);
}

#[test]
fn test_newest_and_oldest_put_missing_dates_last() {
    let employees = sample_employees();

    let view = derive_view(&employees, &ListQuery::new("all", "", Some(SortKey::Newest)));
    assert_eq!(ids(&view, |e: &Employee| e.id.as_str()), vec!["2", "1", "4", "3", "5"]);

    let view = derive_view(&employees, &ListQuery::new("all", "", Some(SortKey::Oldest)));
    assert_eq!(ids(&view, |e: &Employee| e.id.as_str()), vec!["4", "1", "2", "3", "5"]);
}

#[test]
fn test_deadline_sort_puts_missing_deadlines_last() {
    let projects = sample_projects();

    let view = derive_view(&projects, &ListQuery::new("all", "", Some(SortKey::DeadlineAsc)));
    assert_eq!(ids(&view, |p: &Project| p.id.as_str()), vec!["p3", "p4", "p1", "p2"]);

    let view = derive_view(&projects, &ListQuery::new("all", "", Some(SortKey::DeadlineDesc)));
    assert_eq!(ids(&view, |p: &Project| p.id.as_str()), vec!["p1", "p4", "p3", "p2"]);
}

#[test]
fn test_date_sort_is_idempotent() {
    let projects = sample_projects();

    for key in [SortKey::DeadlineAsc, SortKey::DeadlineDesc, SortKey::Newest, SortKey::Oldest] {
        let query = ListQuery::new("all", "", Some(key));
        let once: Vec<Project> = derive_view(&projects, &query).into_iter().cloned().collect();
        let twice: Vec<Project> = derive_view(&once, &query).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_name_sort_folds_case() {
    let employees = sample_employees();

    let view = derive_view(&employees, &ListQuery::new("all", "", Some(SortKey::NameAsc)));
    assert_eq!(ids(&view, |e: &Employee| e.id.as_str()), vec!["2", "1", "3", "4", "5"]);

    let view = derive_view(&employees, &ListQuery::new("all", "", Some(SortKey::NameDesc)));
    assert_eq!(ids(&view, |e: &Employee| e.id.as_str()), vec!["5", "4", "3", "1", "2"]);
}

#[test]
fn test_progress_sort_uses_overall_progress() {
    let projects = sample_projects();

    // p3 = 100, p1 = 50, p2 = p4 = 0 (stable among equals)
    let view = derive_view(&projects, &ListQuery::new("all", "", Some(SortKey::ProgressDesc)));
    assert_eq!(ids(&view, |p: &Project| p.id.as_str()), vec!["p3", "p1", "p2", "p4"]);

    let view = derive_view(&projects, &ListQuery::new("all", "", Some(SortKey::ProgressAsc)));
    assert_eq!(ids(&view, |p: &Project| p.id.as_str()), vec!["p2", "p4", "p1", "p3"]);
}

#[test]
fn test_unsupported_sort_key_keeps_order() {
    let employees = sample_employees();
    let view = derive_view(&employees, &ListQuery::new("all", "", Some(SortKey::DeadlineAsc)));
    assert_eq!(ids(&view, |e: &Employee| e.id.as_str()), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_derive_view_leaves_input_untouched() {
    let projects = sample_projects();
    let before = projects.clone();

    let _ = derive_view(&projects, &ListQuery::new("Completed", "shop", Some(SortKey::NameDesc)));
    assert_eq!(projects, before);
}

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Filtering, searching and sorting of entity lists for display.
//!
//! [`derive_view`] never mutates its input and never fails: entities with
//! missing fields match as empty strings and sort with absent dates last.

use crate::models::*;
use crate::progress::overall_progress;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use strum_macros::{Display, EnumString};

/// Accepts the short names shown by `Display` and the spelled-out
/// `-ascending`/`-descending` forms, ignoring ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SortKey {
    Newest,
    Oldest,
    #[strum(to_string = "name-asc", serialize = "name-ascending")]
    NameAsc,
    #[strum(to_string = "name-desc", serialize = "name-descending")]
    NameDesc,
    #[strum(to_string = "deadline-asc", serialize = "deadline-ascending")]
    DeadlineAsc,
    #[strum(to_string = "deadline-desc", serialize = "deadline-descending")]
    DeadlineDesc,
    #[strum(to_string = "progress-asc", serialize = "progress-ascending")]
    ProgressAsc,
    #[strum(to_string = "progress-desc", serialize = "progress-descending")]
    ProgressDesc,
}

const PEOPLE_SORT_KEYS: &[SortKey] = &[
    SortKey::Newest,
    SortKey::Oldest,
    SortKey::NameAsc,
    SortKey::NameDesc,
];

const PROJECT_SORT_KEYS: &[SortKey] = &[
    SortKey::Newest,
    SortKey::Oldest,
    SortKey::NameAsc,
    SortKey::NameDesc,
    SortKey::DeadlineAsc,
    SortKey::DeadlineDesc,
    SortKey::ProgressAsc,
    SortKey::ProgressDesc,
];

/// Status criterion; `all` and `All` select everything, any other value is
/// compared case-sensitively against the entity's status label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Exact(String),
}

impl StatusFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "all" | "All" => StatusFilter::All,
            other => StatusFilter::Exact(other.to_string()),
        }
    }

    pub fn matches(&self, status: Option<&str>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Exact(wanted) => status == Some(wanted.as_str()),
        }
    }
}

/// An entity that can be shown in a filtered, sorted list.
pub trait Listable {
    /// Sort keys offered for this entity type.
    const SORT_KEYS: &'static [SortKey];

    fn status_label(&self) -> Option<&str>;
    fn search_fields(&self) -> Vec<&str>;
    fn display_name(&self) -> &str;
    fn created_at(&self) -> Option<DateTime<Utc>>;

    fn deadline(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn progress(&self) -> u8 {
        0
    }
}

impl Listable for Employee {
    const SORT_KEYS: &'static [SortKey] = PEOPLE_SORT_KEYS;

    fn status_label(&self) -> Option<&str> {
        match self.employment_status {
            EmploymentStatus::Unknown => None,
            ref status => Some(status.as_ref()),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.full_name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.address.as_str(),
        ]
    }

    fn display_name(&self) -> &str {
        &self.full_name
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

impl Listable for Profile {
    const SORT_KEYS: &'static [SortKey] = PEOPLE_SORT_KEYS;

    fn status_label(&self) -> Option<&str> {
        None
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.full_name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.address.as_str(),
        ]
    }

    fn display_name(&self) -> &str {
        &self.full_name
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

impl Listable for Project {
    const SORT_KEYS: &'static [SortKey] = PROJECT_SORT_KEYS;

    fn status_label(&self) -> Option<&str> {
        match self.status {
            ProjectStatus::Unknown => None,
            ref status => Some(status.as_ref()),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.client_name(), self.manager_name()]
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline.as_deref().and_then(parse_timestamp)
    }

    fn progress(&self) -> u8 {
        overall_progress(&self.sdlc_progress)
    }
}

impl Listable for ClientProject {
    const SORT_KEYS: &'static [SortKey] = PROJECT_SORT_KEYS;

    fn status_label(&self) -> Option<&str> {
        self.project.status_label()
    }

    fn search_fields(&self) -> Vec<&str> {
        self.project.search_fields()
    }

    fn display_name(&self) -> &str {
        self.project.display_name()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.project.created_at()
    }

    fn deadline(&self) -> Option<DateTime<Utc>> {
        self.project.deadline()
    }

    fn progress(&self) -> u8 {
        self.project.progress()
    }
}

/// The three criteria a list view is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub status: StatusFilter,
    pub search: String,
    pub sort: Option<SortKey>,
}

impl ListQuery {
    pub fn new(status: &str, search: &str, sort: Option<SortKey>) -> Self {
        ListQuery {
            status: StatusFilter::parse(status),
            search: search.to_string(),
            sort,
        }
    }
}

pub fn matches_search<T: Listable>(item: &T, term: &str) -> bool {
    let term = term.to_lowercase();

    if term.is_empty() {
        return true;
    }

    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Builds the display list for `query`. Unsupported sort keys keep the
/// filtered order.
pub fn derive_view<'a, T: Listable>(items: &'a [T], query: &ListQuery) -> Vec<&'a T> {
    let mut view: Vec<&T> = items
        .iter()
        .filter(|item| query.status.matches(item.status_label()))
        .filter(|item| matches_search(*item, &query.search))
        .collect();

    if let Some(key) = query.sort.filter(|key| T::SORT_KEYS.contains(key)) {
        view.sort_by(|a, b| compare(*a, *b, key));
    }

    view
}

pub fn compare<T: Listable>(a: &T, b: &T, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => compare_dates(a.created_at(), b.created_at(), true),
        SortKey::Oldest => compare_dates(a.created_at(), b.created_at(), false),
        SortKey::NameAsc => compare_names(a.display_name(), b.display_name()),
        SortKey::NameDesc => compare_names(b.display_name(), a.display_name()),
        SortKey::DeadlineAsc => compare_dates(a.deadline(), b.deadline(), false),
        SortKey::DeadlineDesc => compare_dates(a.deadline(), b.deadline(), true),
        SortKey::ProgressAsc => a.progress().cmp(&b.progress()),
        SortKey::ProgressDesc => b.progress().cmp(&a.progress()),
    }
}

/// Absent dates go last in both directions.
fn compare_dates(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Entities exchanged with the agency API.
//!
//! Every payload is parsed here and nowhere else. Optional or malformed
//! fields fall back to defaults (empty strings, empty collections, `None`
//! dates, `Unknown` statuses) so a single odd record never fails a list.
//! Explicit `null`s are read the same way as missing keys.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Employee,
    Client,
}

impl Role {
    /// Maps a role string as sent by the login endpoint. Matching ignores
    /// case; `admin` is the manager role and `karyawan` the employee role.
    pub fn from_login(role: &str) -> Option<Role> {
        match role.trim().to_lowercase().as_str() {
            "manager" | "admin" | "manager/admin" => Some(Role::Manager),
            "karyawan" | "employee" => Some(Role::Employee),
            "client" | "klien" => Some(Role::Client),
            _ => None,
        }
    }

    /// Path segment of the role-scoped profile endpoints.
    pub fn api_segment(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Employee => "karyawan",
            Role::Client => "client",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum EmploymentStatus {
    ActiveEmployee,
    InactiveEmployee,
    ActiveIntern,
    InactiveIntern,
    #[default]
    #[serde(other)]
    #[strum(disabled)]
    Unknown,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum ProjectStatus {
    WaitingList,
    OnProgress,
    Completed,
    #[default]
    #[serde(other)]
    #[strum(disabled)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Client, manager and profile records share one shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    #[serde(alias = "_id", deserialize_with = "null_default")]
    pub id: String,
    #[serde(alias = "name", deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    #[serde(deserialize_with = "null_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_default")]
    pub address: String,
    pub avatar_url: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub avatar_url: Option<String>,
}

impl From<&Profile> for ProfileUpdate {
    fn from(profile: &Profile) -> Self {
        ProfileUpdate {
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            avatar_url: profile.avatar_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Employee {
    #[serde(alias = "_id", deserialize_with = "null_default")]
    pub id: String,
    #[serde(alias = "name", deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    #[serde(deserialize_with = "null_default")]
    pub address: String,
    #[serde(deserialize_with = "null_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_default")]
    pub employment_status: EmploymentStatus,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub employment_status: EmploymentStatus,
}

impl From<&Employee> for EmployeeUpdate {
    fn from(employee: &Employee) -> Self {
        EmployeeUpdate {
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            address: employee.address.clone(),
            phone: employee.phone.clone(),
            employment_status: employee.employment_status,
        }
    }
}

/// A relation the API sends either as a bare id or as the populated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Id(String),
    Populated(T),
}

impl<T> Reference<T> {
    pub fn populated(&self) -> Option<&T> {
        match self {
            Reference::Populated(value) => Some(value),
            Reference::Id(_) => None,
        }
    }
}

impl Reference<Profile> {
    pub fn id(&self) -> &str {
        match self {
            Reference::Id(id) => id,
            Reference::Populated(profile) => &profile.id,
        }
    }

    /// Display name, empty when only the id was sent.
    pub fn name(&self) -> &str {
        self.populated().map(|p| p.full_name.as_str()).unwrap_or("")
    }
}

impl Reference<Employee> {
    pub fn name(&self) -> &str {
        self.populated().map(|e| e.full_name.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubCommit {
    #[serde(deserialize_with = "null_default")]
    pub message: String,
    #[serde(deserialize_with = "null_default")]
    pub author: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubIssue {
    #[serde(deserialize_with = "null_default")]
    pub number: u64,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub state: IssueState,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(alias = "_id", deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub framework: String,
    #[serde(deserialize_with = "null_default")]
    pub figma_link: String,
    #[serde(deserialize_with = "null_default")]
    pub github_repo_url: String,
    pub deadline: Option<String>,
    pub completion_date: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub status: ProjectStatus,
    #[serde(deserialize_with = "null_default")]
    pub images: Vec<String>,
    pub client: Option<Reference<Profile>>,
    pub manager: Option<Reference<Profile>>,
    #[serde(deserialize_with = "null_default")]
    pub employees: Vec<Reference<Employee>>,
    #[serde(deserialize_with = "lenient_progress")]
    pub sdlc_progress: BTreeMap<String, f64>,
    #[serde(deserialize_with = "null_default")]
    pub github_commits: Vec<GithubCommit>,
    #[serde(deserialize_with = "null_default")]
    pub github_issues: Vec<GithubIssue>,
    pub created_at: Option<String>,
}

impl Project {
    pub fn client_name(&self) -> &str {
        self.client.as_ref().map(|c| c.name()).unwrap_or("")
    }

    pub fn manager_name(&self) -> &str {
        self.manager.as_ref().map(|m| m.name()).unwrap_or("")
    }
}

/// A project as listed for the logged-in client, with the evaluation flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientProject {
    #[serde(flatten)]
    pub project: Project,
    #[serde(rename = "sudah_dinilai", default, deserialize_with = "null_default")]
    pub already_evaluated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectSummary {
    #[serde(deserialize_with = "null_default")]
    pub total: u64,
    #[serde(deserialize_with = "null_default")]
    pub waiting_list: u64,
    #[serde(deserialize_with = "null_default")]
    pub on_progress: u64,
    #[serde(deserialize_with = "null_default")]
    pub completed: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectTotal {
    #[serde(deserialize_with = "null_default")]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvaluation {
    pub project_id: String,
    pub scores: Vec<u8>,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvaluationRecord {
    #[serde(alias = "_id", deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub project_id: String,
    #[serde(deserialize_with = "null_default")]
    pub project_title: String,
    #[serde(deserialize_with = "null_default")]
    pub scores: Vec<u8>,
    pub average_score: Option<f64>,
    #[serde(deserialize_with = "null_default")]
    pub comment: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetailedEvaluation {
    #[serde(alias = "_id", deserialize_with = "null_default")]
    pub id: String,
    #[serde(alias = "karyawanId", deserialize_with = "null_default")]
    pub employee_id: String,
    #[serde(alias = "karyawanName", deserialize_with = "null_default")]
    pub employee_name: String,
    #[serde(deserialize_with = "null_default")]
    pub aspects: BTreeMap<String, u8>,
    #[serde(deserialize_with = "null_default")]
    pub comment: String,
    pub period: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedEvaluationRequest {
    pub aspects: BTreeMap<String, u8>,
    pub comment: String,
    pub period: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Review {
    #[serde(alias = "_id", deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub rating: u8,
    #[serde(deserialize_with = "null_default")]
    pub comment: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewStats {
    #[serde(deserialize_with = "null_default")]
    pub average_rating: f64,
    #[serde(deserialize_with = "null_default")]
    pub total_reviews: u64,
    #[serde(deserialize_with = "null_default")]
    pub distribution: BTreeMap<u8, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    #[serde(deserialize_with = "null_default")]
    pub token: String,
    #[serde(deserialize_with = "null_default")]
    pub role: String,
}

/// Parses the date formats the API is known to send. Anything else is
/// treated as absent.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}

/// An explicit `null` counts as a missing field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_progress<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, serde_json::Value>>::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(stage, value)| {
            let percent = match value {
                serde_json::Value::Number(n) => n.as_f64(),
                serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            }?;
            Some((stage, percent))
        })
        .collect())
}

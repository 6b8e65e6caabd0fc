/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use async_trait::async_trait;
use connector::api::AgencyApi;
use connector::error::*;
use connector::models::*;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-memory [`AgencyApi`] that records every call it receives.
#[derive(Default)]
pub struct FakeApi {
    pub calls: Mutex<Vec<String>>,
    pub login_role: Mutex<String>,
    pub employees: Mutex<Vec<Employee>>,
    pub projects: Mutex<Vec<Project>>,
    pub client_projects: Mutex<Vec<ClientProject>>,
    pub failure: Mutex<Option<ConnectorError>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let api = Self::default();
        *api.employees.lock().unwrap() = employees;
        api
    }

    pub fn with_client_projects(projects: Vec<ClientProject>) -> Self {
        let api = Self::default();
        *api.client_projects.lock().unwrap() = projects;
        api
    }

    /// Makes every following write call fail with `err`.
    pub fn fail_with(&self, err: ConnectorError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    fn write_result(&self) -> ConnectorResult<()> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AgencyApi for FakeApi {
    async fn login(&self, _email: &str, _password: &str) -> ConnectorResult<LoginResponse> {
        self.record("POST /api/users/login");
        Ok(LoginResponse {
            token: "token-123".to_string(),
            role: self.login_role.lock().unwrap().clone(),
        })
    }

    async fn profile(&self, role: Role) -> ConnectorResult<Profile> {
        self.record(&format!("GET /api/{}/profile", role.api_segment()));
        Ok(profile("p1", "Siti Rahma"))
    }

    async fn replace_profile(&self, role: Role, update: &ProfileUpdate) -> ConnectorResult<Profile> {
        self.record(&format!("PUT /api/{}/profile", role.api_segment()));
        self.write_result()?;
        Ok(Profile {
            full_name: update.full_name.clone(),
            email: update.email.clone(),
            phone: update.phone.clone(),
            address: update.address.clone(),
            avatar_url: update.avatar_url.clone(),
            ..Profile::default()
        })
    }

    async fn employees(&self) -> ConnectorResult<Vec<Employee>> {
        self.record("GET /api/karyawan");
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn update_employee(&self, id: &str, update: &EmployeeUpdate) -> ConnectorResult<()> {
        self.record(&format!("PUT /api/karyawan/{}", id));
        self.write_result()?;

        let mut employees = self.employees.lock().unwrap();
        if let Some(employee) = employees.iter_mut().find(|e| e.id == id) {
            employee.full_name = update.full_name.clone();
            employee.email = update.email.clone();
            employee.employment_status = update.employment_status;
        }
        Ok(())
    }

    async fn delete_employee(&self, id: &str) -> ConnectorResult<()> {
        self.record(&format!("DELETE /api/karyawan/{}", id));
        self.write_result()?;
        self.employees.lock().unwrap().retain(|e| e.id != id);
        Ok(())
    }

    async fn clients(&self) -> ConnectorResult<Vec<Profile>> {
        self.record("GET /api/clients");
        Ok(vec![profile("c1", "PT Maju Jaya")])
    }

    async fn projects(&self) -> ConnectorResult<Vec<Project>> {
        self.record("GET /api/projects");
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn project(&self, id: &str) -> ConnectorResult<Project> {
        self.record(&format!("GET /api/projects/{}", id));
        self.projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ConnectorError::not_found("Project"))
    }

    async fn project_summary(&self) -> ConnectorResult<ProjectSummary> {
        self.record("GET /api/projects/summary");
        Ok(ProjectSummary::default())
    }

    async fn project_total(&self) -> ConnectorResult<ProjectTotal> {
        self.record("GET /api/projects/total-project");
        Ok(ProjectTotal::default())
    }

    async fn client_projects(&self) -> ConnectorResult<Vec<ClientProject>> {
        self.record("GET /api/projects/klien");
        Ok(self.client_projects.lock().unwrap().clone())
    }

    async fn employee_evaluations(&self) -> ConnectorResult<Vec<EvaluationRecord>> {
        self.record("GET /api/evaluations/evaluationmykaryawan");
        Ok(Vec::new())
    }

    async fn client_evaluations(&self) -> ConnectorResult<Vec<EvaluationRecord>> {
        self.record("GET /api/evaluations/evaluationmyclient");
        Ok(Vec::new())
    }

    async fn detailed_evaluations(&self) -> ConnectorResult<Vec<DetailedEvaluation>> {
        self.record("GET /api/evaluations/karyawan/evaluasi-detailed");
        Ok(Vec::new())
    }

    async fn detailed_evaluation(&self, employee_id: &str) -> ConnectorResult<DetailedEvaluation> {
        self.record(&format!(
            "GET /api/evaluations/karyawan/evaluasi-detailed/{}",
            employee_id
        ));
        Ok(DetailedEvaluation {
            employee_id: employee_id.to_string(),
            aspects: BTreeMap::new(),
            ..DetailedEvaluation::default()
        })
    }

    async fn submit_detailed_evaluation(
        &self,
        employee_id: &str,
        _evaluation: &DetailedEvaluationRequest,
    ) -> ConnectorResult<()> {
        self.record(&format!(
            "POST /api/evaluations/karyawan/evaluasi-detailed/{}",
            employee_id
        ));
        self.write_result()
    }

    async fn submit_evaluation(&self, _evaluation: &NewEvaluation) -> ConnectorResult<()> {
        self.record("POST /api/evaluations");
        self.write_result()
    }

    async fn reviews(&self) -> ConnectorResult<Vec<Review>> {
        self.record("GET /api/reviews");
        Ok(Vec::new())
    }

    async fn submit_review(&self, _review: &NewReview) -> ConnectorResult<()> {
        self.record("POST /api/reviews");
        self.write_result()
    }

    async fn delete_review(&self, id: &str) -> ConnectorResult<()> {
        self.record(&format!("DELETE /api/reviews/{}", id));
        self.write_result()
    }

    async fn review_stats(&self) -> ConnectorResult<ReviewStats> {
        self.record("GET /api/reviews/stats");
        Ok(ReviewStats::default())
    }
}

pub fn profile(id: &str, name: &str) -> Profile {
    Profile {
        id: id.to_string(),
        full_name: name.to_string(),
        email: format!("{}@example.com", id),
        ..Profile::default()
    }
}

pub fn employee(id: &str, name: &str, status: EmploymentStatus, created_at: Option<&str>) -> Employee {
    Employee {
        id: id.to_string(),
        full_name: name.to_string(),
        email: format!("{}@agency.id", name.to_lowercase().replace(' ', ".")),
        address: "Jl. Merdeka 1, Bandung".to_string(),
        phone: format!("0812{}", id),
        employment_status: status,
        created_at: created_at.map(str::to_string),
    }
}

pub fn project(id: &str, title: &str, status: ProjectStatus, deadline: Option<&str>) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        status,
        deadline: deadline.map(str::to_string),
        ..Project::default()
    }
}

pub fn client_project(id: &str, already_evaluated: bool) -> ClientProject {
    ClientProject {
        project: project(id, "Company Profile", ProjectStatus::Completed, None),
        already_evaluated,
    }
}

pub fn sample_employees() -> Vec<Employee> {
    vec![
        employee("1", "Budi Santoso", EmploymentStatus::ActiveEmployee, Some("2024-01-10")),
        employee("2", "ani wijaya", EmploymentStatus::ActiveIntern, Some("2024-06-01T08:00:00Z")),
        employee("3", "Citra Lestari", EmploymentStatus::InactiveEmployee, None),
        employee("4", "Dewi Kartika", EmploymentStatus::ActiveEmployee, Some("2023-11-20")),
        employee("5", "Eko Prasetyo", EmploymentStatus::InactiveIntern, Some("not a date")),
    ]
}

pub fn sample_projects() -> Vec<Project> {
    let mut site = project("p1", "Company Website", ProjectStatus::OnProgress, Some("2025-05-01"));
    site.client = Some(Reference::Populated(profile("c1", "PT Maju Jaya")));
    site.manager = Some(Reference::Populated(profile("m1", "Rina Manager")));
    site.sdlc_progress = [("analysis", 100.0), ("design", 100.0), ("implementation", 50.0)]
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect();

    let mut app = project("p2", "Mobile App", ProjectStatus::WaitingList, None);
    app.client = Some(Reference::Id("c2".to_string()));

    let mut shop = project("p3", "Online Shop", ProjectStatus::Completed, Some("2024-12-15"));
    shop.client = Some(Reference::Populated(profile("c3", "Toko Sinar")));
    shop.sdlc_progress = ["analysis", "design", "implementation", "testing", "maintenance"]
        .iter()
        .map(|k| (k.to_string(), 100.0))
        .collect();

    let dashboard = project("p4", "admin dashboard", ProjectStatus::OnProgress, Some("2025-02-10"));

    vec![site, app, shop, dashboard]
}

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::ConnectorResult;
use crate::models::*;
use async_trait::async_trait;

/// Every call the agency API offers. [`crate::http::HttpApi`] talks to the
/// server; tests substitute their own recording implementation.
#[async_trait]
pub trait AgencyApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> ConnectorResult<LoginResponse>;

    async fn profile(&self, role: Role) -> ConnectorResult<Profile>;
    async fn replace_profile(&self, role: Role, profile: &ProfileUpdate) -> ConnectorResult<Profile>;

    async fn employees(&self) -> ConnectorResult<Vec<Employee>>;
    async fn update_employee(&self, id: &str, employee: &EmployeeUpdate) -> ConnectorResult<()>;
    async fn delete_employee(&self, id: &str) -> ConnectorResult<()>;

    async fn clients(&self) -> ConnectorResult<Vec<Profile>>;

    async fn projects(&self) -> ConnectorResult<Vec<Project>>;
    async fn project(&self, id: &str) -> ConnectorResult<Project>;
    async fn project_summary(&self) -> ConnectorResult<ProjectSummary>;
    async fn project_total(&self) -> ConnectorResult<ProjectTotal>;
    async fn client_projects(&self) -> ConnectorResult<Vec<ClientProject>>;

    async fn employee_evaluations(&self) -> ConnectorResult<Vec<EvaluationRecord>>;
    async fn client_evaluations(&self) -> ConnectorResult<Vec<EvaluationRecord>>;
    async fn detailed_evaluations(&self) -> ConnectorResult<Vec<DetailedEvaluation>>;
    async fn detailed_evaluation(&self, employee_id: &str) -> ConnectorResult<DetailedEvaluation>;
    async fn submit_detailed_evaluation(
        &self,
        employee_id: &str,
        evaluation: &DetailedEvaluationRequest,
    ) -> ConnectorResult<()>;
    async fn submit_evaluation(&self, evaluation: &NewEvaluation) -> ConnectorResult<()>;

    async fn reviews(&self) -> ConnectorResult<Vec<Review>>;
    async fn submit_review(&self, review: &NewReview) -> ConnectorResult<()>;
    async fn delete_review(&self, id: &str) -> ConnectorResult<()>;
    async fn review_stats(&self) -> ConnectorResult<ReviewStats>;
}

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::api::AgencyApi;
use crate::error::*;
use crate::models::*;
use crate::*;
use async_trait::async_trait;
use serde::Serialize;

/// [`AgencyApi`] over HTTP. The bearer token is attached here and nowhere
/// else.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: RequestConfig,
}

impl HttpApi {
    pub fn new(config: RequestConfig) -> Self {
        HttpApi {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    async fn get(&self, endpoint: &str, resource: &str) -> ConnectorResult<Vec<u8>> {
        let res = get_client(&self.client, &self.config, endpoint, RequestType::GET, true)?
            .send()
            .await?;

        read_response(res, resource).await
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        request_type: RequestType,
        endpoint: &str,
        resource: &str,
        body: &B,
    ) -> ConnectorResult<Vec<u8>> {
        let res = get_client(&self.client, &self.config, endpoint, request_type, true)?
            .json(body)
            .send()
            .await?;

        read_response(res, resource).await
    }

    async fn delete(&self, endpoint: &str, resource: &str) -> ConnectorResult<()> {
        let res = get_client(&self.client, &self.config, endpoint, RequestType::DELETE, true)?
            .send()
            .await?;

        read_response(res, resource).await.map(|_| ())
    }
}

#[async_trait]
impl AgencyApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> ConnectorResult<LoginResponse> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let res = get_client(&self.client, &self.config, "users/login", RequestType::POST, false)?
            .json(&req)
            .send()
            .await?;

        // Bad credentials come back as 401 here, which is not an expired session.
        let body = match read_response(res, "User").await {
            Ok(body) => body,
            Err(ConnectorError::SessionExpired) => {
                return Err(ConnectorError::Rejected {
                    status: 401,
                    message: Some("Invalid email or password".to_string()),
                });
            }
            Err(e) => return Err(e),
        };

        let login: LoginResponse = decode_item(&body)?;

        if login.token.is_empty() {
            return Err(ConnectorError::InvalidFormat(
                "login response carries no token".to_string(),
            ));
        }

        Ok(login)
    }

    async fn profile(&self, role: Role) -> ConnectorResult<Profile> {
        let body = self
            .get(&format!("{}/profile", role.api_segment()), "Profile")
            .await?;
        decode_item(&body)
    }

    async fn replace_profile(&self, role: Role, profile: &ProfileUpdate) -> ConnectorResult<Profile> {
        let body = self
            .send_json(
                RequestType::PUT,
                &format!("{}/profile", role.api_segment()),
                "Profile",
                profile,
            )
            .await?;
        decode_item(&body)
    }

    async fn employees(&self) -> ConnectorResult<Vec<Employee>> {
        let body = self.get("karyawan", "Employees").await?;
        decode_list(&body)
    }

    async fn update_employee(&self, id: &str, employee: &EmployeeUpdate) -> ConnectorResult<()> {
        self.send_json(
            RequestType::PUT,
            &format!("karyawan/{}", id),
            "Employee",
            employee,
        )
        .await
        .map(|_| ())
    }

    async fn delete_employee(&self, id: &str) -> ConnectorResult<()> {
        self.delete(&format!("karyawan/{}", id), "Employee").await
    }

    async fn clients(&self) -> ConnectorResult<Vec<Profile>> {
        let body = self.get("clients", "Clients").await?;
        decode_list(&body)
    }

    async fn projects(&self) -> ConnectorResult<Vec<Project>> {
        let body = self.get("projects", "Projects").await?;
        decode_list(&body)
    }

    async fn project(&self, id: &str) -> ConnectorResult<Project> {
        let body = self.get(&format!("projects/{}", id), "Project").await?;
        decode_item(&body)
    }

    async fn project_summary(&self) -> ConnectorResult<ProjectSummary> {
        let body = self.get("projects/summary", "Project summary").await?;
        decode_item(&body)
    }

    async fn project_total(&self) -> ConnectorResult<ProjectTotal> {
        let body = self.get("projects/total-project", "Project total").await?;
        decode_item(&body)
    }

    async fn client_projects(&self) -> ConnectorResult<Vec<ClientProject>> {
        let body = self.get("projects/klien", "Projects").await?;
        decode_list(&body)
    }

    async fn employee_evaluations(&self) -> ConnectorResult<Vec<EvaluationRecord>> {
        let body = self
            .get("evaluations/evaluationmykaryawan", "Evaluations")
            .await?;
        decode_list(&body)
    }

    async fn client_evaluations(&self) -> ConnectorResult<Vec<EvaluationRecord>> {
        let body = self
            .get("evaluations/evaluationmyclient", "Evaluations")
            .await?;
        decode_list(&body)
    }

    async fn detailed_evaluations(&self) -> ConnectorResult<Vec<DetailedEvaluation>> {
        let body = self
            .get("evaluations/karyawan/evaluasi-detailed", "Evaluations")
            .await?;
        decode_list(&body)
    }

    async fn detailed_evaluation(&self, employee_id: &str) -> ConnectorResult<DetailedEvaluation> {
        let body = self
            .get(
                &format!("evaluations/karyawan/evaluasi-detailed/{}", employee_id),
                "Evaluation",
            )
            .await?;
        decode_item(&body)
    }

    async fn submit_detailed_evaluation(
        &self,
        employee_id: &str,
        evaluation: &DetailedEvaluationRequest,
    ) -> ConnectorResult<()> {
        self.send_json(
            RequestType::POST,
            &format!("evaluations/karyawan/evaluasi-detailed/{}", employee_id),
            "Employee",
            evaluation,
        )
        .await
        .map(|_| ())
    }

    async fn submit_evaluation(&self, evaluation: &NewEvaluation) -> ConnectorResult<()> {
        self.send_json(RequestType::POST, "evaluations", "Project", evaluation)
            .await
            .map(|_| ())
    }

    async fn reviews(&self) -> ConnectorResult<Vec<Review>> {
        let body = self.get("reviews", "Reviews").await?;
        decode_list(&body)
    }

    async fn submit_review(&self, review: &NewReview) -> ConnectorResult<()> {
        self.send_json(RequestType::POST, "reviews", "Review", review)
            .await
            .map(|_| ())
    }

    async fn delete_review(&self, id: &str) -> ConnectorResult<()> {
        self.delete(&format!("reviews/{}", id), "Review").await
    }

    async fn review_stats(&self) -> ConnectorResult<ReviewStats> {
        let body = self.get("reviews/stats", "Review stats").await?;
        decode_item(&body)
    }
}

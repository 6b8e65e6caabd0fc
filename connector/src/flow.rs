/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Project evaluation followed by the optional company review.
//!
//! Both steps share the same states. Validation failures never reach the
//! API and leave the flow where it was. A rejected submission keeps the
//! form filled so it can be sent again.

use crate::api::AgencyApi;
use crate::error::*;
use crate::models::*;
use std::collections::BTreeMap;

pub const UNSELECTED: u8 = 0;
pub const MIN_REVIEW_LENGTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub label: String,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aspect {
    pub name: String,
    pub criteria: Vec<Criterion>,
}

impl Aspect {
    fn with_scale(name: &str) -> Self {
        let labels = ["Very poor", "Poor", "Fair", "Good", "Excellent"];

        Aspect {
            name: name.to_string(),
            criteria: labels
                .iter()
                .zip(1u8..)
                .map(|(label, value)| Criterion {
                    label: label.to_string(),
                    value,
                })
                .collect(),
        }
    }

    pub fn accepts(&self, value: u8) -> bool {
        self.criteria.iter().any(|c| c.value == value)
    }
}

/// Ordered list of aspects a score sequence is aligned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rubric {
    pub aspects: Vec<Aspect>,
}

impl Rubric {
    /// Aspects a client scores a finished project on.
    pub fn standard() -> Self {
        Rubric {
            aspects: [
                "Communication",
                "Timeliness",
                "Work quality",
                "Responsiveness",
                "Overall satisfaction",
            ]
            .iter()
            .map(|name| Aspect::with_scale(name))
            .collect(),
        }
    }

    /// Aspects a manager scores an employee on.
    pub fn employee() -> Self {
        Rubric {
            aspects: [
                "Discipline",
                "Teamwork",
                "Technical skill",
                "Communication",
                "Initiative",
            ]
            .iter()
            .map(|name| Aspect::with_scale(name))
            .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.aspects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aspects.is_empty()
    }

    /// Checks that every aspect has a selected, offered score.
    pub fn validate(&self, scores: &[u8]) -> ConnectorResult<()> {
        if scores.len() != self.aspects.len() {
            return Err(ConnectorError::Validation(format!(
                "Expected {} scores, got {}.",
                self.aspects.len(),
                scores.len()
            )));
        }

        for (aspect, score) in self.aspects.iter().zip(scores) {
            if *score == UNSELECTED {
                return Err(ConnectorError::Validation(format!(
                    "Please select a score for {}.",
                    aspect.name
                )));
            }

            if !aspect.accepts(*score) {
                return Err(ConnectorError::Validation(format!(
                    "{} is not a valid score for {}.",
                    score, aspect.name
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationForm {
    pub project_id: Option<String>,
    pub scores: Vec<u8>,
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct EvaluationFlow {
    rubric: Rubric,
    form: EvaluationForm,
    state: FlowState,
    already_evaluated: bool,
}

impl EvaluationFlow {
    pub fn new(rubric: Rubric, project_id: Option<String>) -> Self {
        let scores = vec![UNSELECTED; rubric.len()];

        EvaluationFlow {
            rubric,
            form: EvaluationForm {
                project_id,
                scores,
                comment: String::new(),
            },
            state: FlowState::Idle,
            already_evaluated: false,
        }
    }

    /// Starts a flow for one of the client's projects, asking the server
    /// whether it was evaluated before.
    pub async fn open<A: AgencyApi + ?Sized>(
        api: &A,
        rubric: Rubric,
        project_id: &str,
    ) -> ConnectorResult<Self> {
        let projects = api.client_projects().await?;

        let project = match projects.iter().find(|p| p.project.id == project_id) {
            Some(project) => project,
            None => return Err(ConnectorError::not_found("Project")),
        };

        let mut flow = EvaluationFlow::new(rubric, Some(project_id.to_string()));
        flow.already_evaluated = project.already_evaluated;
        Ok(flow)
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn form(&self) -> &EvaluationForm {
        &self.form
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn already_evaluated(&self) -> bool {
        self.already_evaluated
    }

    pub fn can_submit(&self) -> bool {
        !self.already_evaluated && self.state != FlowState::Submitting
    }

    pub fn select(&mut self, aspect: usize, value: u8) -> ConnectorResult<()> {
        let entry = match self.rubric.aspects.get(aspect) {
            Some(entry) => entry,
            None => return Err(ConnectorError::validation("No such rubric aspect.")),
        };

        if value != UNSELECTED && !entry.accepts(value) {
            return Err(ConnectorError::Validation(format!(
                "{} is not a valid score for {}.",
                value, entry.name
            )));
        }

        self.form.scores[aspect] = value;
        Ok(())
    }

    pub fn set_comment(&mut self, comment: &str) {
        self.form.comment = comment.to_string();
    }

    pub fn validate(&self) -> ConnectorResult<NewEvaluation> {
        let project_id = match self.form.project_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Err(ConnectorError::validation("Project is required.")),
        };

        self.rubric.validate(&self.form.scores)?;

        Ok(NewEvaluation {
            project_id,
            scores: self.form.scores.clone(),
            comment: self.form.comment.trim().to_string(),
        })
    }

    /// Sends the evaluation. On success the form is cleared and the company
    /// review step for the same project is returned.
    pub async fn submit<A: AgencyApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> ConnectorResult<CompanyReviewFlow> {
        if self.already_evaluated {
            return Err(ConnectorError::AlreadyEvaluated(
                self.form.project_id.clone().unwrap_or_default(),
            ));
        }

        let evaluation = self.validate()?;
        self.state = FlowState::Submitting;

        match api.submit_evaluation(&evaluation).await {
            Ok(()) => {
                tracing::info!(project = %evaluation.project_id, "evaluation submitted");
                self.state = FlowState::Succeeded;
                self.already_evaluated = true;
                self.form.scores = vec![UNSELECTED; self.rubric.len()];
                self.form.comment.clear();
                Ok(CompanyReviewFlow::new(Some(evaluation.project_id)))
            }
            Err(e) => {
                self.state = FlowState::Failed(e.user_message());
                Err(e)
            }
        }
    }

    /// Like [`submit`](Self::submit), but asks `retry` after every rejected
    /// attempt whether to send the same form again. Validation errors and
    /// session expiry are returned without asking.
    pub async fn submit_with_retry<A, F>(
        &mut self,
        api: &A,
        mut retry: F,
    ) -> ConnectorResult<CompanyReviewFlow>
    where
        A: AgencyApi + ?Sized,
        F: FnMut(&ConnectorError) -> bool,
    {
        loop {
            let err = match self.submit(api).await {
                Ok(review) => return Ok(review),
                Err(e) => e,
            };

            let rejected = matches!(self.state, FlowState::Failed(_));

            if !rejected || err.is_session_expired() || !retry(&err) {
                return Err(err);
            }

            tracing::debug!("retrying evaluation submit");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyReviewFlow {
    project_id: Option<String>,
    rating: u8,
    comment: String,
    state: FlowState,
}

impl CompanyReviewFlow {
    pub fn new(project_id: Option<String>) -> Self {
        CompanyReviewFlow {
            project_id,
            rating: 0,
            comment: String::new(),
            state: FlowState::Idle,
        }
    }

    /// Project whose evaluation led here, if any.
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating;
    }

    pub fn set_comment(&mut self, comment: &str) {
        self.comment = comment.to_string();
    }

    pub fn validate(&self) -> ConnectorResult<NewReview> {
        if !(1..=5).contains(&self.rating) {
            return Err(ConnectorError::validation(
                "Please choose a rating between 1 and 5.",
            ));
        }

        let comment = self.comment.trim();

        if comment.chars().count() < MIN_REVIEW_LENGTH {
            return Err(ConnectorError::Validation(format!(
                "Review must be at least {} characters.",
                MIN_REVIEW_LENGTH
            )));
        }

        Ok(NewReview {
            rating: self.rating,
            comment: comment.to_string(),
        })
    }

    pub async fn submit<A: AgencyApi + ?Sized>(&mut self, api: &A) -> ConnectorResult<()> {
        let review = self.validate()?;
        self.state = FlowState::Submitting;

        match api.submit_review(&review).await {
            Ok(()) => {
                tracing::info!("company review submitted");
                self.state = FlowState::Succeeded;
                self.rating = 0;
                self.comment.clear();
                Ok(())
            }
            Err(e) => {
                self.state = FlowState::Failed(e.user_message());
                Err(e)
            }
        }
    }
}

/// Builds a manager's per-employee evaluation from rubric-aligned scores.
pub fn detailed_evaluation(
    rubric: &Rubric,
    scores: &[u8],
    comment: &str,
    period: Option<String>,
) -> ConnectorResult<DetailedEvaluationRequest> {
    rubric.validate(scores)?;

    let aspects: BTreeMap<String, u8> = rubric
        .aspects
        .iter()
        .zip(scores)
        .map(|(aspect, score)| (aspect.name.clone(), *score))
        .collect();

    Ok(DetailedEvaluationRequest {
        aspects,
        comment: comment.trim().to_string(),
        period,
    })
}
